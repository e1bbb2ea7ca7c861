//! payouts-ingest: CSV intake, row validation and normalization into typed payouts.

pub mod normalize;
pub mod reader;
pub mod types;
pub mod validate;

pub use normalize::{normalize, process};
pub use reader::{read_csv_file, read_raw_rows};
pub use types::RawRow;
pub use validate::validate;
