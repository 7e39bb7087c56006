//! UI primitives for the Studiobook CLI.
//!
//! - **Context**: environment detection (TTY, color, unicode)
//! - **Mode**: output mode resolution (json, plain, pretty)
//! - **Theme**: badges, status colors, owo-colors styling
//! - **Render**: headers, tables, receipts, hints
//! - **Format**: money, dates, ids and truncation

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::{ListFormat, OutputMode};
pub use theme::Badge;

pub use render::{
    badge, blank_line, header, hint, kv, print, print_error, receipt, simple_table, Column,
};

pub use format::{format_inr, format_wedding_date, or_dash, plural, short_id, truncate};
