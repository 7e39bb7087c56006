//! Input helpers for the CLI.
//!
//! - Turning field flags into store requests (`fields`)
//! - Resolving full or abbreviated client ids (`ids`)
//! - Building map embed links (`maps`)
//! - Timezone parsing and "today" (`timezone`)

mod fields;
mod ids;
mod maps;
mod timezone;

pub use fields::{apply_fields, unrecognized_date};
pub use ids::resolve_client_id;
pub use maps::map_embed_url;
pub use timezone::{parse_timezone, timezone_options, today_in};
