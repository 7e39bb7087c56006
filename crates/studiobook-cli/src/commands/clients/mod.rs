//! Client record commands: add, edit, list, search, show, delete.

mod add;
mod delete;
mod edit;
mod list;
mod search;
mod show;

pub use add::handle_add;
pub use delete::handle_delete;
pub use edit::handle_edit;
pub use list::handle_list;
pub use search::handle_search;
pub use show::handle_show;

use crate::app::AppContext;
use crate::cli::ClientFieldArgs;
use crate::helpers::unrecognized_date;
use crate::ui::{badge, Badge, UiContext};

/// Warn on stderr when `--date` will not be usable in reports.
fn warn_unrecognized_date(ctx: &AppContext, ui: &UiContext, fields: &ClientFieldArgs) {
    if ctx.quiet() {
        return;
    }
    if let Some(date) = unrecognized_date(fields) {
        eprintln!(
            "{}",
            badge(
                ui,
                Badge::Warn,
                &format!(
                    "Wedding date '{}' is not YYYY-MM-DD; this client will be left out of reports",
                    date
                ),
            )
        );
    }
}
