//! payouts-core: domain types, error taxonomy and calendar-day helpers

pub mod error;
pub mod payout;
pub mod time;

pub use error::{PayoutError, Result, ValidationError};
pub use payout::{DateGroup, DistributionEntry, NormalizedPayout};
