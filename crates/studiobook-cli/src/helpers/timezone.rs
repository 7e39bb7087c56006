use chrono::{Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::errors::CliError;

/// Parse a timezone setting. Blank or "auto" means the system timezone.
pub fn parse_timezone(value: &str) -> anyhow::Result<Option<Tz>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("auto") {
        return Ok(None);
    }
    trimmed.parse::<Tz>().map(Some).map_err(|_| {
        CliError::invalid_input_with_hint(
            format!("Invalid timezone: {}", trimmed),
            "Hint: Use an IANA name such as Asia/Kolkata, or \"auto\".",
        )
        .into()
    })
}

/// The current calendar date in `timezone`, or in local time.
pub fn today_in(timezone: Option<&str>) -> anyhow::Result<NaiveDate> {
    Ok(match parse_timezone(timezone.unwrap_or(""))? {
        Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
        None => Local::now().date_naive(),
    })
}

/// Choices for the interactive timezone prompt, "Auto (system)" first.
pub fn timezone_options() -> Vec<String> {
    let mut zones: Vec<String> = chrono_tz::TZ_VARIANTS
        .iter()
        .map(|tz| tz.name().to_string())
        .collect();
    zones.sort();
    zones.insert(0, "Auto (system)".to_string());
    zones
}
