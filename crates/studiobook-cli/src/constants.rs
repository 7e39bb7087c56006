//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells; clap uses it for usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const FAILURE: i32 = 1;

    /// Client not found.
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input or arguments.
    pub const INVALID_INPUT: i32 = 4;
}

/// Placeholder shown for empty or unusable values.
pub const EMPTY_VALUE: &str = "\u{2014}";

/// Characters of an id shown in lists.
pub const SHORT_ID_LEN: usize = 8;

/// Shown by `list` and `search` when the store has no clients.
pub const EMPTY_STORE_MESSAGE: &str = "No clients yet. Add your first client above.";

/// Shown by `search` when nothing matches.
pub const NO_MATCH_MESSAGE: &str = "No clients match your search.";

/// Shown by `report` when no client has a usable wedding date.
pub const EMPTY_REPORT_MESSAGE: &str =
    "No data available yet. Add clients with a wedding date to generate this report.";
