use studiobook_core::ClientInput;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::apply_fields;
use crate::ui::{or_dash, print, receipt};

use super::warn_unrecognized_date;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let ui_ctx = ctx.ui_context(false, None);

    warn_unrecognized_date(ctx, &ui_ctx, &args.fields);
    let outcome = store.upsert(apply_fields(ClientInput::new(), &args.fields))?;

    if ctx.quiet() {
        println!("{}", outcome.id);
        return Ok(());
    }
    let name = store
        .get(&outcome.id)
        .map(|record| or_dash(&record.client_name))
        .unwrap_or_default();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Client added",
            &[("ID", outcome.id.as_str()), ("Client", name.as_str())],
        ),
    );
    Ok(())
}
