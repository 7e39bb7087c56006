//! String formatting for display: money, dates, ids.

use studiobook_core::record::parse_wedding_date;

use crate::constants::{EMPTY_VALUE, SHORT_ID_LEN};

/// Truncate a string to `max_len` characters, adding "..." if cut.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let kept: String = s.chars().take(max_len - 3).collect();
    format!("{}...", kept)
}

/// Format rupees with Indian digit grouping, e.g. `₹2,80,000` or `₹1,250.5`.
///
/// At most two fraction digits are shown and trailing zeros are dropped.
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return EMPTY_VALUE.to_string();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut out = String::from("\u{20B9}");
    if value < 0.0 && fixed != "0.00" {
        out.insert(0, '-');
    }
    out.push_str(&group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Group digits as lakhs and crores: the last three digits, then pairs.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Display a stored wedding date as `23 Feb 2025`, or a dash when unusable.
pub fn format_wedding_date(raw: &str) -> String {
    parse_wedding_date(raw)
        .map(|day| day.format("%d %b %Y").to_string())
        .unwrap_or_else(|| EMPTY_VALUE.to_string())
}

/// Show a dash for blank text.
pub fn or_dash(text: &str) -> String {
    if text.trim().is_empty() {
        EMPTY_VALUE.to_string()
    } else {
        text.to_string()
    }
}

pub fn short_id(id: &str) -> String {
    id.chars().take(SHORT_ID_LEN).collect()
}

pub fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
