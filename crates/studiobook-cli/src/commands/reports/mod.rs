//! Dashboard summary and period reports.

mod report;
mod summary;

pub use report::handle_report;
pub use summary::handle_summary;
