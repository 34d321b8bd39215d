//! Display helpers for rendering projections
//!
//! Presentation only: nothing in the projection engine depends on this.

use crate::projection::ProjectedGain;

const RUPEE: &str = "₹";

/// Group digits the Indian way: last three, then pairs (12,34,56,789)
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

/// Whole rupees with Indian digit grouping, e.g. `₹5,00,000`
pub fn format_inr(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let digits = value.unsigned_abs().to_string();
    format!("{}{}{}", sign, RUPEE, group_indian(&digits))
}

/// Compact axis tick: millions with one decimal from `₹1.0M` up, whole
/// thousands below, e.g. `₹2.5M` or `₹500K`. Halves round up.
pub fn format_inr_compact(value: i64) -> String {
    let sign = if value < 0 { "-" } else { "" };
    let magnitude = value.unsigned_abs();
    if magnitude >= 1_000_000 {
        let tenths = (magnitude + 50_000) / 100_000;
        format!("{}{}{}.{}M", sign, RUPEE, tenths / 10, tenths % 10)
    } else {
        format!("{}{}{}K", sign, RUPEE, (magnitude + 500) / 1_000)
    }
}

/// Tooltip label for a month index, e.g. `Month 27 (2 years, 3 months)`
pub fn month_label(month: u32) -> String {
    format!("Month {} ({} years, {} months)", month, month / 12, month % 12)
}

/// X axis tick for a month index, e.g. `2y`
pub fn year_tick(month: u32) -> String {
    format!("{}y", month / 12)
}

/// Signed percentage with one decimal, or `n/a` when unavailable
pub fn format_gain_percentage(gain: &ProjectedGain) -> String {
    match gain.percentage() {
        Ok(pct) => format!("{:+.1}%", pct),
        Err(_) => "n/a".to_string(),
    }
}
