use studiobook_core::ClientInput;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::errors::CliError;
use crate::helpers::{apply_fields, resolve_client_id};
use crate::ui::{or_dash, print, receipt};

use super::warn_unrecognized_date;

pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    if args.fields.is_empty() {
        return Err(CliError::invalid_input_with_hint(
            "Nothing to update",
            "Hint: Pass at least one field, e.g. `studiobook edit <ID> --status Paid`.",
        )
        .into());
    }

    let mut store = ctx.open_store()?;
    let id = resolve_client_id(&store, &args.id)?;
    let ui_ctx = ctx.ui_context(false, None);

    warn_unrecognized_date(ctx, &ui_ctx, &args.fields);
    let outcome = store.upsert(apply_fields(ClientInput::for_id(&id), &args.fields))?;

    if ctx.quiet() {
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
            "Client updated",
            &[("ID", outcome.id.as_str()), ("Client", name.as_str())],
        ),
    );
    Ok(())
}
