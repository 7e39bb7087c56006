use clap::{ArgAction, Args, Parser, Subcommand};
use clap_complete::Shell;

use studiobook_core::{Granularity, VERSION};

use crate::ui::ListFormat;

/// Studiobook - client records and wedding reports for a photography studio
#[derive(Parser)]
#[command(name = "studiobook")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the client records
    #[arg(short, long, global = true, env = "STUDIOBOOK_DATA_DIR")]
    pub data_dir: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Client fields shared by `add` and `edit`.
///
/// Every flag is optional; on `edit`, omitted flags keep their stored value.
#[derive(Args, Debug, Default, Clone)]
pub struct ClientFieldArgs {
    /// Client name(s), e.g. "Pradeep & Anu"
    #[arg(long)]
    pub name: Option<String>,

    /// Wedding date
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<String>,

    /// Venue name and town
    #[arg(long)]
    pub venue: Option<String>,

    /// Map link for the venue
    #[arg(long, value_name = "URL")]
    pub map_link: Option<String>,

    /// Package name or details
    #[arg(long)]
    pub package: Option<String>,

    /// Deliverables (albums, videos, ...)
    #[arg(long)]
    pub deliverables: Option<String>,

    /// Payment notes (totals, due dates)
    #[arg(long)]
    pub payment_info: Option<String>,

    /// Advance received, in rupees without grouping commas. Only the leading
    /// number is read ("90000 INR" is 90000, "1,20,000" is 1); unparsable
    /// amounts are stored as 0
    #[arg(long, value_name = "AMOUNT", allow_hyphen_values = true)]
    pub advance: Option<String>,

    /// Payment status (Pending, In Progress, Paid, ...)
    #[arg(long)]
    pub status: Option<String>,
}

impl ClientFieldArgs {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.date.is_none()
            && self.venue.is_none()
            && self.map_link.is_none()
            && self.package.is_none()
            && self.deliverables.is_none()
            && self.payment_info.is_none()
            && self.advance.is_none()
            && self.status.is_none()
    }
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Timezone used for "this month" counts (IANA name, or "auto")
    #[arg(long)]
    pub timezone: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Disable interactive prompts
    #[arg(long)]
    pub no_input: bool,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    #[command(flatten)]
    pub fields: ClientFieldArgs,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Client ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    #[command(flatten)]
    pub fields: ClientFieldArgs,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<ListFormat>,
}

/// Arguments for the `search` command
#[derive(Args)]
pub struct SearchArgs {
    /// Matched against name, venue, package and payment status
    #[arg(value_name = "QUERY")]
    pub query: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<ListFormat>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Client ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `delete` command
#[derive(Args)]
pub struct DeleteArgs {
    /// Client ID (full or unique prefix)
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `summary` command
#[derive(Args)]
pub struct SummaryArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// Report period (monthly, yearly)
    #[arg(value_name = "PERIOD")]
    pub granularity: Granularity,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file and create the client store
    Init(InitArgs),

    /// Add a new client
    Add(AddArgs),

    /// Update fields of an existing client
    Edit(EditArgs),

    /// List all clients by wedding date
    List(ListArgs),

    /// Search clients
    Search(SearchArgs),

    /// Show one client in detail
    Show(ShowArgs),

    /// Delete a client (asks for confirmation)
    Delete(DeleteArgs),

    /// Show dashboard totals
    Summary(SummaryArgs),

    /// Show a monthly or yearly wedding report
    Report(ReportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
