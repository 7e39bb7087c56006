//! Dashboard summary over the full record set.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::record::ClientRecord;

/// Headline counts for the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total: usize,
    /// Records whose wedding falls in the current month and year
    pub upcoming_this_month: usize,
    /// Records whose status is "pending", case-insensitively
    pub pending: usize,
    /// Sum of finite advances; `None` ("no data") when there are no records
    pub advance_total: Option<f64>,
}

/// Summarize `records` as of `today`.
pub fn summarize(records: &[ClientRecord], today: NaiveDate) -> Summary {
    let upcoming_this_month = records
        .iter()
        .filter_map(ClientRecord::wedding_day)
        .filter(|day| day.year() == today.year() && day.month() == today.month())
        .count();
    let pending = records.iter().filter(|r| r.is_pending()).count();
    let advance_total = (!records.is_empty())
        .then(|| records.iter().filter_map(ClientRecord::finite_advance).sum::<f64>());

    Summary {
        total: records.len(),
        upcoming_this_month,
        pending,
        advance_total,
    }
}
