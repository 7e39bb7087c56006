use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::constants::EMPTY_STORE_MESSAGE;
use crate::output::{clients_json, print_client_list};
use crate::ui::{blank_line, header, hint, print};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let records = store.search("");
    let ui_ctx = ctx.ui_context(args.json, args.format);

    if ui_ctx.mode.is_json() {
        println!("{}", clients_json(&records)?);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "clients", None));
        blank_line(&ui_ctx);
    }
    print_client_list(&ui_ctx, &records, EMPTY_STORE_MESSAGE);

    if ui_ctx.mode.is_pretty() && !ctx.quiet() {
        blank_line(&ui_ctx);
        let next = if records.is_empty() {
            "studiobook add --name \"<names>\" --date YYYY-MM-DD"
        } else {
            "studiobook show <ID>"
        };
        print(&ui_ctx, &hint(&ui_ctx, next));
    }
    Ok(())
}
