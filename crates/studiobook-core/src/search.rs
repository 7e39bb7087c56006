//! Search matching and date ordering for record lists.

use crate::record::ClientRecord;

/// Case-insensitive substring match over name, venue, package and status.
///
/// `needle` must already be trimmed and lowercased; an empty needle matches
/// every record.
pub fn matches_term(record: &ClientRecord, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    [
        &record.client_name,
        &record.venue,
        &record.package_details,
        &record.payment_status,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Normalize a raw search term for [`matches_term`].
pub fn normalize_term(term: &str) -> String {
    term.trim().to_lowercase()
}

/// Sort ascending by wedding date. Undated records go last; ties keep their
/// existing order.
pub fn sort_by_wedding_day(records: &mut [&ClientRecord]) {
    records.sort_by_key(|record| {
        let day = record.wedding_day();
        (day.is_none(), day)
    });
}
