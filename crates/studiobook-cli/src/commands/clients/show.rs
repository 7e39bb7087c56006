use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::helpers::{map_embed_url, resolve_client_id};
use crate::output::{client_json, print_client};

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let store = ctx.open_store()?;
    let id = resolve_client_id(&store, &args.id)?;
    let record = store
        .get(&id)
        .ok_or_else(|| anyhow::anyhow!("Client not found: {}", id))?;
    let embed = map_embed_url(&record.map_link, &record.venue);

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", client_json(record, embed.as_deref())?);
        return Ok(());
    }

    print_client(&ui_ctx, record, embed.as_deref());
    Ok(())
}
