use crate::app::AppContext;
use crate::cli::SummaryArgs;
use crate::output::{print_summary, to_json};
use crate::ui::{blank_line, header, print};

pub fn handle_summary(ctx: &AppContext, args: &SummaryArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let summary = store.summary_on(ctx.today()?);
    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        println!("{}", to_json(&summary)?);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, "summary", None));
        blank_line(&ui_ctx);
    }
    print_summary(&ui_ctx, &summary);
    Ok(())
}
