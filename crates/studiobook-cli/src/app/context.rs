//! Application context for the Studiobook CLI.
//!
//! Bundles the parsed arguments with the lazily loaded config file so
//! handlers don't have to thread both around.

use std::path::PathBuf;

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;
use tracing::debug;

use studiobook_core::{ClientStore, FileBlobStore, LoadOutcome};

use crate::cli::Cli;
use crate::config::{read_config, StudiobookConfig};
use crate::helpers::today_in;
use crate::ui::{badge, Badge, ListFormat, UiContext};

use super::resolver::{resolve_config_path, resolve_data_dir};

pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<StudiobookConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, if one exists. Loaded once per run.
    pub fn config(&self) -> anyhow::Result<Option<&StudiobookConfig>> {
        let config = self
            .config
            .get_or_try_init(|| -> anyhow::Result<Option<StudiobookConfig>> {
                let path = resolve_config_path()?;
                if !path.exists() {
                    debug!(path = %path.display(), "No config file");
                    return Ok(None);
                }
                read_config(&path).map(Some)
            })?;
        Ok(config.as_ref())
    }

    /// The directory holding the client blob.
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli.data_dir.as_deref(), self.config()?)
    }

    /// Open and load the client store.
    ///
    /// First use and recovery from a damaged blob are reported on stderr.
    pub fn open_store(&self) -> anyhow::Result<ClientStore<FileBlobStore>> {
        let dir = self.data_dir()?;
        let mut store = ClientStore::new(FileBlobStore::new(&dir));
        let outcome = store.load().map_err(|e| {
            anyhow::anyhow!("Failed to open client store at {}: {}", dir.display(), e)
        })?;
        self.report_load(&outcome, &dir);
        Ok(store)
    }

    fn report_load(&self, outcome: &LoadOutcome, dir: &std::path::Path) {
        if self.quiet() {
            return;
        }
        let ui = self.ui_context(false, None);
        match outcome {
            LoadOutcome::Loaded { .. } => {}
            LoadOutcome::Seeded { count } => eprintln!(
                "{}",
                badge(
                    &ui,
                    Badge::Info,
                    &format!(
                        "Created client store at {} with {} sample clients",
                        dir.display(),
                        count
                    ),
                )
            ),
            LoadOutcome::Recovered { count, .. } => eprintln!(
                "{}",
                badge(
                    &ui,
                    Badge::Warn,
                    &format!(
                        "Stored client records were unreadable; restored {} sample clients",
                        count
                    ),
                )
            ),
        }
    }

    /// Today's date in the configured timezone (local time by default).
    pub fn today(&self) -> anyhow::Result<NaiveDate> {
        let timezone = self
            .config()?
            .and_then(|config| config.ui.timezone.as_deref());
        today_in(timezone)
    }

    /// Build a UI context honoring the global flags.
    pub fn ui_context(&self, json: bool, format: Option<ListFormat>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
