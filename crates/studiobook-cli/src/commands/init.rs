use std::path::PathBuf;

use dialoguer::FuzzySelect;

use studiobook_core::{ClientStore, FileBlobStore, LoadOutcome};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_data_dir, write_config, StudiobookConfig};
use crate::errors::CliError;
use crate::helpers::{parse_timezone, timezone_options};
use crate::ui::{hint, print, receipt};

const AUTO_TIMEZONE: &str = "Auto (system)";

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input_with_hint(
            format!("Config already exists at {}", config_path.display()),
            "Hint: Pass --force to overwrite it.",
        )
        .into());
    }

    let data_dir = match ctx
        .cli()
        .data_dir
        .as_deref()
        .filter(|dir| !dir.trim().is_empty())
    {
        Some(dir) => PathBuf::from(dir),
        None => default_data_dir()?,
    };

    let ui_ctx = ctx.ui_context(false, None);
    let mut timezone = args.timezone.clone();
    if timezone.is_none() && !args.no_input && ui_ctx.is_interactive() {
        let options = timezone_options();
        let selection = FuzzySelect::new()
            .with_prompt("Timezone for \"this month\" counts")
            .default(0)
            .items(&options)
            .interact()?;
        timezone = options
            .get(selection)
            .filter(|choice| choice.as_str() != AUTO_TIMEZONE)
            .cloned();
    }
    let timezone = parse_timezone(timezone.as_deref().unwrap_or(""))?
        .map(|tz| tz.name().to_string());

    let config = StudiobookConfig::new(data_dir.clone(), timezone.clone());
    write_config(&config_path, &config)?;

    let mut store = ClientStore::new(FileBlobStore::new(&data_dir));
    let outcome = store.load().map_err(|e| {
        anyhow::anyhow!(
            "Failed to create client store at {}: {}",
            data_dir.display(),
            e
        )
    })?;

    if ctx.quiet() {
        return Ok(());
    }
    let clients = match &outcome {
        LoadOutcome::Loaded { count } => format!("{} (existing)", count),
        LoadOutcome::Seeded { count } => format!("{} (samples)", count),
        LoadOutcome::Recovered { count, .. } => format!("{} (samples, replaced unreadable data)", count),
    };
    let config_display = config_path.display().to_string();
    let data_display = data_dir.display().to_string();
    print(
        &ui_ctx,
        &receipt(
            &ui_ctx,
            "Studiobook initialized",
            &[
                ("Config", config_display.as_str()),
                ("Data", data_display.as_str()),
                ("Timezone", timezone.as_deref().unwrap_or("auto")),
                ("Clients", clients.as_str()),
            ],
        ),
    );
    if ui_ctx.mode.is_pretty() {
        print(&ui_ctx, &hint(&ui_ctx, "studiobook list"));
    }
    Ok(())
}
