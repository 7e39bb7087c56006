//! Studiobook CLI - client records and wedding reports for a photography studio
//!
//! Thin command-line layer over `studiobook-core`.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{clients, init, misc, reports};
use crate::constants::exit_codes;
use crate::errors::CliError;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_tracing(cli.verbose, !cli.no_color);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);

        let (message, hint, code) = match e.downcast_ref::<CliError>() {
            Some(cli_err) => (
                cli_err.message().to_string(),
                cli_err.hint().map(str::to_string),
                cli_err.exit_code(),
            ),
            None => {
                let message = format!("{}", e);
                let hint = extract_error_hint(&message);
                (message, hint, exit_codes::FAILURE)
            }
        };

        print_error(&ui_ctx, &message, hint.as_deref());
        std::process::exit(code);
    }
}

/// Suggest a next step for errors that did not carry one.
fn extract_error_hint(error: &str) -> Option<String> {
    if let Some(idx) = error.find("\nHint:") {
        return Some(error[idx + 1..].to_string());
    }

    let error_lower = error.to_lowercase();

    if error_lower.contains("failed to parse config") {
        return Some(
            "Hint: Fix the file or run `studiobook init --force` to rewrite it.".to_string(),
        );
    }

    if error_lower.contains("client store") || error_lower.contains("failed to write") {
        return Some(
            "Hint: Check that the data directory is writable, or pass --data-dir.".to_string(),
        );
    }

    if error_lower.contains("home is not set") {
        return Some("Hint: Pass --data-dir or set STUDIOBOOK_DATA_DIR.".to_string());
    }

    None
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => init::handle_init(ctx, args),
        Some(Commands::Add(args)) => clients::handle_add(ctx, args),
        Some(Commands::Edit(args)) => clients::handle_edit(ctx, args),
        Some(Commands::List(args)) => clients::handle_list(ctx, args),
        Some(Commands::Search(args)) => clients::handle_search(ctx, args),
        Some(Commands::Show(args)) => clients::handle_show(ctx, args),
        Some(Commands::Delete(args)) => clients::handle_delete(ctx, args),
        Some(Commands::Summary(args)) => reports::handle_summary(ctx, args),
        Some(Commands::Report(args)) => reports::handle_report(ctx, args),
        Some(Commands::Completions(args)) => misc::handle_completions(args),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}
