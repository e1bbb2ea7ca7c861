//! Upcoming vs. historical split of date groups.
//!
//! `today` is always passed in. A group dated today is historical; only dates
//! strictly after it are upcoming.

use chrono::NaiveDate;
use payouts_core::time::is_upcoming;
use payouts_core::{DateGroup, NormalizedPayout};
use serde::Serialize;

use crate::aggregate::group_by_date;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Partition {
    /// Nearest date first
    pub upcoming: Vec<DateGroup>,
    /// Newest date first (canonical order)
    pub historical: Vec<DateGroup>,
}

/// Split date groups around `today`.
pub fn partition_groups(groups: Vec<DateGroup>, today: NaiveDate) -> Partition {
    let (mut upcoming, historical): (Vec<_>, Vec<_>) = groups
        .into_iter()
        .partition(|g| is_upcoming(g.date, today));

    upcoming.sort_by_key(|g| g.date);
    Partition { upcoming, historical }
}

/// Date groups strictly after `today`, nearest first.
pub fn upcoming_groups(payouts: &[NormalizedPayout], today: NaiveDate) -> Vec<DateGroup> {
    partition_groups(group_by_date(payouts), today).upcoming
}

/// Date groups on or before `today`, newest first.
pub fn historical_groups(payouts: &[NormalizedPayout], today: NaiveDate) -> Vec<DateGroup> {
    partition_groups(group_by_date(payouts), today).historical
}

/// Does this upcoming date carry a positive reserved-funds hold that is not
/// already in transit? Always false for dates on or before `today`.
pub fn has_reserved_hold(payouts: &[NormalizedPayout], date: NaiveDate, today: NaiveDate) -> bool {
    if !is_upcoming(date, today) {
        return false;
    }

    payouts
        .iter()
        .any(|p| p.date == date && p.is_reserved_hold() && !p.is_in_transit())
}

pub fn total_upcoming(upcoming: &[DateGroup]) -> f64 {
    upcoming.iter().map(|g| g.total_amount).sum()
}

/// Sum of the upcoming groups whose date was selected. Selected dates that are
/// not upcoming contribute nothing.
pub fn selected_total(upcoming: &[DateGroup], selected: &[NaiveDate]) -> f64 {
    upcoming
        .iter()
        .filter(|g| selected.contains(&g.date))
        .map(|g| g.total_amount)
        .sum()
}
