//! Dashboard-style summary: every metric for one batch, computed in one call.

use chrono::NaiveDate;
use payouts_core::{DateGroup, DistributionEntry, NormalizedPayout};
use serde::Serialize;

use crate::aggregate::{card_brand_distribution, chargebacks, refunds, reserved_funds};
use crate::partition::{total_upcoming, upcoming_groups};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PayoutSummary {
    pub today: NaiveDate,
    pub payout_count: usize,
    pub total_upcoming: f64,
    /// Nearest first
    pub upcoming: Vec<DateGroup>,
    /// Nearest upcoming payout, if any
    pub next_payout: Option<DateGroup>,
    pub reserved_funds: f64,
    pub chargebacks: f64,
    pub refunds: f64,
    pub card_brands: Vec<DistributionEntry>,
}

impl PayoutSummary {
    pub fn build(payouts: &[NormalizedPayout], today: NaiveDate) -> Self {
        let upcoming = upcoming_groups(payouts, today);

        let summary = Self {
            today,
            payout_count: payouts.len(),
            total_upcoming: total_upcoming(&upcoming),
            next_payout: upcoming.first().copied(),
            upcoming,
            reserved_funds: reserved_funds(payouts),
            chargebacks: chargebacks(payouts),
            refunds: refunds(payouts),
            card_brands: card_brand_distribution(payouts),
        };

        log::debug!(
            "Summary for {}: {} payouts, {} upcoming dates",
            today,
            summary.payout_count,
            summary.upcoming.len()
        );
        summary
    }

    /// Upcoming payout by 1-indexed position ("Payout N of M").
    pub fn upcoming_at(&self, position: usize) -> Option<&DateGroup> {
        position.checked_sub(1).and_then(|i| self.upcoming.get(i))
    }
}
