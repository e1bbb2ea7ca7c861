//! payouts-finance: aggregation reducers, upcoming/historical partitioning and
//! the per-batch summary

pub mod aggregate;
pub mod partition;
pub mod summary;

pub use aggregate::{
    card_brand_distribution, chargebacks, group_by_date, refunds, reserved_funds,
};
pub use partition::{
    Partition, has_reserved_hold, historical_groups, partition_groups, selected_total,
    total_upcoming, upcoming_groups,
};
pub use summary::PayoutSummary;
