//! Output formatting for clients, summaries and reports.

mod json;
mod text;

pub use json::{client_json, clients_json, to_json};
pub use text::{print_client, print_client_list, print_report, print_summary};
