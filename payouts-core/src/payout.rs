//! Payout record types shared by ingestion and aggregation

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single payout transaction after parsing and normalization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NormalizedPayout {
    /// Payout date (day granularity, no time-of-day)
    pub date: NaiveDate,
    /// Positive = credit, negative = debit
    pub net: f64,
    /// Lowercased transaction type, e.g. "charge", "refund", "reserved_funds"
    #[serde(rename = "type")]
    pub payout_type: String,
    /// Card brand exactly as exported (Visa, Mastercard, ...)
    pub card_brand: String,
    /// Lowercased payout status, empty when the export has none
    pub payout_status: String,
}

impl NormalizedPayout {
    pub fn new(
        date: NaiveDate,
        net: f64,
        payout_type: impl Into<String>,
        card_brand: impl Into<String>,
        payout_status: impl Into<String>,
    ) -> Self {
        Self {
            date,
            net,
            payout_type: payout_type.into(),
            card_brand: card_brand.into(),
            payout_status: payout_status.into(),
        }
    }

    /// Plain substring containment on the (already lowercased) type
    pub fn has_type(&self, tag: &str) -> bool {
        self.payout_type.contains(tag)
    }

    /// Positive reserved-funds entry; negative ones are releases
    pub fn is_reserved_hold(&self) -> bool {
        self.has_type(RESERVED_FUNDS) && self.net > 0.0
    }

    pub fn is_in_transit(&self) -> bool {
        self.payout_status.contains(IN_TRANSIT)
    }
}

pub const RESERVED_FUNDS: &str = "reserved_funds";
pub const CHARGEBACK: &str = "chargeback";
pub const REFUND: &str = "refund";
pub const IN_TRANSIT: &str = "in_transit";

/// Sum of net amounts for one calendar date
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DateGroup {
    pub date: NaiveDate,
    pub total_amount: f64,
}

/// Share of transactions carrying one label, in percent
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DistributionEntry {
    pub label: String,
    pub percentage: f64,
}
