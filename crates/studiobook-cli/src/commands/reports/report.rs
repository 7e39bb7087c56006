use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::constants::EMPTY_REPORT_MESSAGE;
use crate::output::{print_report, to_json};
use crate::ui::{blank_line, header, print};

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let report = store.report(args.granularity);
    let ui_ctx = ctx.ui_context(args.json, None);

    if ui_ctx.mode.is_json() {
        println!("{}", to_json(&report)?);
        return Ok(());
    }

    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &header(&ui_ctx, &report.title, None));
        blank_line(&ui_ctx);
    }
    print_report(&ui_ctx, &report, EMPTY_REPORT_MESSAGE);
    Ok(())
}
