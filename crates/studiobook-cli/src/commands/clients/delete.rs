use dialoguer::Confirm;

use crate::app::AppContext;
use crate::cli::DeleteArgs;
use crate::errors::CliError;
use crate::helpers::resolve_client_id;
use crate::ui::{badge, or_dash, print, Badge, OutputMode};

pub fn handle_delete(ctx: &AppContext, args: &DeleteArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let id = resolve_client_id(&store, &args.id)?;
    let name = store
        .get(&id)
        .map(|record| or_dash(&record.client_name))
        .unwrap_or_default();

    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input_with_hint(
                "Refusing to delete without confirmation",
                "Hint: Pass --yes to delete without a prompt.",
            )
            .into());
        }
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete client \"{}\"? This cannot be undone.",
                name
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        print(&ui_ctx, &badge(&ui_ctx, Badge::Info, "Cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=cancelled");
                    }
                }
            }
            return Ok(());
        }
    }

    store.delete(&id)?;

    if !ctx.quiet() {
        match ui_ctx.mode {
            OutputMode::Pretty => {
                print(&ui_ctx, &badge(&ui_ctx, Badge::Ok, "Client removed"));
            }
            OutputMode::Plain | OutputMode::Json => {
                println!("status=ok");
                println!("deleted={}", id);
            }
        }
    }
    Ok(())
}
