use crate::app::AppContext;
use crate::cli::SearchArgs;
use crate::constants::{EMPTY_STORE_MESSAGE, NO_MATCH_MESSAGE};
use crate::output::{clients_json, print_client_list};
use crate::ui::{blank_line, header, print};

pub fn handle_search(ctx: &AppContext, args: &SearchArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let matches = store.search(&args.query);
    let ui_ctx = ctx.ui_context(args.json, args.format);

    if ui_ctx.mode.is_json() {
        println!("{}", clients_json(&matches)?);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(
            &ui_ctx,
            &header(&ui_ctx, "search", Some(args.query.trim())),
        );
        blank_line(&ui_ctx);
    }
    let empty_message = if store.is_empty() {
        EMPTY_STORE_MESSAGE
    } else {
        NO_MATCH_MESSAGE
    };
    print_client_list(&ui_ctx, &matches, empty_message);
    Ok(())
}
