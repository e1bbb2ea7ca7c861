//! Aggregation reducers over a normalized payout sequence.
//!
//! Every function here is pure and reads only the slice it is given, so they
//! can be called in any order (or concurrently) on the same batch.

use chrono::NaiveDate;
use payouts_core::payout::{CHARGEBACK, REFUND};
use payouts_core::{DateGroup, DistributionEntry, NormalizedPayout};
use std::collections::{BTreeMap, HashMap};

fn sum_where(payouts: &[NormalizedPayout], keep: impl Fn(&NormalizedPayout) -> bool) -> f64 {
    payouts.iter().filter(|p| keep(*p)).map(|p| p.net).sum()
}

/// Total of positive reserved-funds holds. Negative entries are releases and
/// are left out.
pub fn reserved_funds(payouts: &[NormalizedPayout]) -> f64 {
    sum_where(payouts, NormalizedPayout::is_reserved_hold)
}

/// Total of chargeback entries, any sign.
pub fn chargebacks(payouts: &[NormalizedPayout]) -> f64 {
    sum_where(payouts, |p| p.has_type(CHARGEBACK))
}

/// Total of refund entries, any sign.
pub fn refunds(payouts: &[NormalizedPayout]) -> f64 {
    sum_where(payouts, |p| p.has_type(REFUND))
}

/// Share of transactions (by count, not amount) per card brand, largest first.
///
/// Brands with the same share keep the order in which they first appear in
/// `payouts`.
pub fn card_brand_distribution(payouts: &[NormalizedPayout]) -> Vec<DistributionEntry> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(&str, usize)> = Vec::new();

    for p in payouts {
        let brand = p.card_brand.as_str();
        match index.get(brand) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(brand, counts.len());
                counts.push((brand, 1));
            }
        }
    }

    let total = payouts.len() as f64;
    let mut entries: Vec<DistributionEntry> = counts
        .into_iter()
        .map(|(label, count)| DistributionEntry {
            label: label.to_string(),
            percentage: count as f64 / total * 100.0,
        })
        .collect();

    entries.sort_by(|a, b| b.percentage.total_cmp(&a.percentage));

    log::debug!(
        "Card brand distribution: {} brands over {} payouts",
        entries.len(),
        payouts.len()
    );
    entries
}

/// Net total per calendar date, newest date first.
pub fn group_by_date(payouts: &[NormalizedPayout]) -> Vec<DateGroup> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for p in payouts {
        *totals.entry(p.date).or_insert(0.0) += p.net;
    }

    totals
        .into_iter()
        .rev()
        .map(|(date, total_amount)| DateGroup { date, total_amount })
        .collect()
}
