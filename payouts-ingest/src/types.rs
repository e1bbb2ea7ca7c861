use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const PAYOUT_DATE: &str = "Payout Date";
pub const NET: &str = "Net";
pub const TYPE: &str = "Type";
pub const CARD_BRAND: &str = "Card Brand";
pub const PAYOUT_STATUS: &str = "Payout Status";

/// Columns every export must carry, in the order they are reported when missing.
pub const REQUIRED_COLUMNS: [&str; 4] = [PAYOUT_DATE, NET, TYPE, CARD_BRAND];

/// One untyped export row: column name -> cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    fields: HashMap<String, String>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(column.into(), value.into());
    }

    pub fn has_column(&self, column: &str) -> bool {
        self.fields.contains_key(column)
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields.get(column).map(String::as_str)
    }

    /// Cell text, or "" when the column is absent on this row.
    pub fn field(&self, column: &str) -> &str {
        self.get(column).unwrap_or("")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = RawRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}
