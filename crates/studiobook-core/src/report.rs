//! Periodic report aggregation.
//!
//! A report is a pure function of a record slice and a [`Granularity`]: dated
//! records are grouped by month or year, each group carries its members and
//! advance total, and groups come back most recent first. The wall clock is
//! never consulted.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::error::StudioError;
use crate::record::ClientRecord;

/// Report grouping unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Monthly,
    Yearly,
}

impl Granularity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
        }
    }

    /// Report title shown above the entries.
    pub fn title(&self) -> &'static str {
        match self {
            Self::Monthly => "Monthly Wedding Report",
            Self::Yearly => "Yearly Wedding Report",
        }
    }

    /// Sortable period key: `YYYY-MM` or `YYYY`.
    fn key(&self, date: NaiveDate) -> String {
        match self {
            Self::Monthly => format!("{:04}-{:02}", date.year(), date.month()),
            Self::Yearly => format!("{:04}", date.year()),
        }
    }

    /// Human-readable period label: "February 2025" or "2025".
    fn label(&self, date: NaiveDate) -> String {
        match self {
            Self::Monthly => date.format("%B %Y").to_string(),
            Self::Yearly => date.year().to_string(),
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = StudioError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            "yearly" | "year" | "y" => Ok(Self::Yearly),
            other => Err(StudioError::InvalidInput(format!(
                "Unknown report period \"{}\" (use monthly or yearly)",
                other
            ))),
        }
    }
}

/// A finished report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub title: String,
    pub granularity: Granularity,
    /// Most recent period first; empty when no record has a usable date
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One period of a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportEntry {
    pub key: String,
    pub label: String,
    pub count: usize,
    pub advance_total: f64,
    /// Members in ascending date order
    pub clients: Vec<ReportLine>,
}

/// The display fields of one record inside a report.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportLine {
    pub id: String,
    pub client_name: String,
    pub wedding_date: String,
    pub payment_status: String,
    pub advance_payment: f64,
    pub payment_info: String,
    pub package_details: String,
}

impl ReportLine {
    fn from_record(record: &ClientRecord) -> Self {
        Self {
            id: record.id.clone(),
            client_name: record.client_name.clone(),
            wedding_date: record.wedding_date.clone(),
            payment_status: record.payment_status.clone(),
            advance_payment: record.advance_payment,
            payment_info: record.payment_info.clone(),
            package_details: record.package_details.clone(),
        }
    }
}

struct Group<'a> {
    label: String,
    members: Vec<(NaiveDate, &'a ClientRecord)>,
    advance_total: f64,
}

/// Group dated records by period.
pub fn build_report(records: &[ClientRecord], granularity: Granularity) -> Report {
    let mut groups: BTreeMap<String, Group<'_>> = BTreeMap::new();

    for record in records {
        let Some(date) = record.wedding_day() else {
            continue;
        };
        let group = groups
            .entry(granularity.key(date))
            .or_insert_with(|| Group {
                label: granularity.label(date),
                members: Vec::new(),
                advance_total: 0.0,
            });
        group.members.push((date, record));
        group.advance_total += record.finite_advance().unwrap_or(0.0);
    }

    let entries = groups
        .into_iter()
        .rev()
        .map(|(key, mut group)| {
            group.members.sort_by_key(|(date, _)| *date);
            ReportEntry {
                key,
                label: group.label,
                count: group.members.len(),
                advance_total: group.advance_total,
                clients: group
                    .members
                    .iter()
                    .map(|(_, record)| ReportLine::from_record(record))
                    .collect(),
            }
        })
        .collect();

    Report {
        title: granularity.title().to_string(),
        granularity,
        entries,
    }
}
