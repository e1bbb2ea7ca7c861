//! Row validator: schema checks on a raw batch before anything is parsed.
//!
//! Checks run in order and stop at the first failure:
//! 1. the batch is non-empty
//! 2. the first row carries every required column (all missing names reported)
//! 3. each row, in order: date layout, finite net amount, non-empty type,
//!    non-empty card brand

use payouts_core::ValidationError;
use regex::Regex;
use std::sync::LazyLock;

use crate::types::{CARD_BRAND, NET, PAYOUT_DATE, RawRow, REQUIRED_COLUMNS, TYPE};

// ASCII digits only; `\d` would also accept other Unicode digits.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date pattern"));

/// Parse a net amount cell. Shared with the normalizer so both agree on what a
/// valid amount is.
///
/// The whole trimmed cell must be a finite number: no trailing text (`12abc`),
/// no thousands separators, no `NaN`/`inf`, no overflow (`1e400`).
pub(crate) fn parse_net(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Validate a raw batch. `Ok(())` means it can be normalized.
pub fn validate(rows: &[RawRow]) -> Result<(), ValidationError> {
    let first = rows.first().ok_or(ValidationError::EmptyInput)?;

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|col| !first.has_column(col))
        .map(|col| col.to_string())
        .collect();
    if !missing.is_empty() {
        log::warn!("Export is missing columns: {:?}", missing);
        return Err(ValidationError::MissingColumns(missing));
    }

    for (i, row) in rows.iter().enumerate() {
        let row_number = i + 1;
        if let Err(e) = validate_row(row, row_number) {
            log::warn!("Rejected batch at row {}: {}", row_number, e);
            return Err(e);
        }
    }

    Ok(())
}

fn validate_row(row: &RawRow, row_number: usize) -> Result<(), ValidationError> {
    if !DATE_RE.is_match(row.field(PAYOUT_DATE)) {
        return Err(ValidationError::InvalidDateFormat { row: row_number });
    }

    if parse_net(row.field(NET)).is_none() {
        return Err(ValidationError::InvalidAmount { row: row_number });
    }

    if row.field(TYPE).trim().is_empty() {
        return Err(ValidationError::MissingType { row: row_number });
    }

    if row.field(CARD_BRAND).trim().is_empty() {
        return Err(ValidationError::MissingCardBrand { row: row_number });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, net: &str, kind: &str, brand: &str) -> RawRow {
        [
            (PAYOUT_DATE, date),
            (NET, net),
            (TYPE, kind),
            (CARD_BRAND, brand),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_valid_batch() {
        let rows = vec![
            row("2024-01-10", "100", "Sale", "Visa"),
            row("2024-01-10", "-20", "Refund", "Visa"),
        ];
        assert_eq!(validate(&rows), Ok(()));
    }

    #[test]
    fn test_empty_batch() {
        assert_eq!(validate(&[]), Err(ValidationError::EmptyInput));
    }

    #[test]
    fn test_missing_card_brand_column_reported_before_row_checks() {
        // Row 1 also has a bad date, but the header check runs first.
        let bad: RawRow = [(PAYOUT_DATE, "2024/01/10"), (NET, "1"), (TYPE, "Sale")]
            .into_iter()
            .collect();
        let err = validate(&[bad]).unwrap_err();
        assert_eq!(err, ValidationError::MissingColumns(vec!["Card Brand".into()]));
        assert!(err.to_string().contains("Card Brand"));
    }

    #[test]
    fn test_missing_columns_are_all_named() {
        let bad: RawRow = [(PAYOUT_DATE, "2024-01-10")].into_iter().collect();
        assert_eq!(
            validate(&[bad]),
            Err(ValidationError::MissingColumns(vec![
                "Net".into(),
                "Type".into(),
                "Card Brand".into(),
            ]))
        );
    }

    #[test]
    fn test_wrong_separator_cites_row_three() {
        let rows = vec![
            row("2024-01-08", "1", "Sale", "Visa"),
            row("2024-01-09", "1", "Sale", "Visa"),
            row("2024/01/10", "1", "Sale", "Visa"),
        ];
        assert_eq!(
            validate(&rows),
            Err(ValidationError::InvalidDateFormat { row: 3 })
        );
    }

    #[test]
    fn test_date_with_time_is_rejected() {
        let rows = vec![row("2024-01-10 12:00", "1", "Sale", "Visa")];
        assert_eq!(
            validate(&rows),
            Err(ValidationError::InvalidDateFormat { row: 1 })
        );
    }

    #[test]
    fn test_invalid_amounts() {
        for net in ["", "abc", "12abc", "NaN", "inf", "1e400", "1,000"] {
            let rows = vec![row("2024-01-10", net, "Sale", "Visa")];
            assert_eq!(
                validate(&rows),
                Err(ValidationError::InvalidAmount { row: 1 }),
                "net = {net:?}"
            );
        }
    }

    #[test]
    fn test_signed_amounts_are_valid() {
        let rows = vec![
            row("2024-01-10", "-12.50", "Refund", "Visa"),
            row("2024-01-10", "+3", "Sale", "Visa"),
        ];
        assert_eq!(validate(&rows), Ok(()));
    }

    #[test]
    fn test_blank_type_and_brand() {
        let rows = vec![
            row("2024-01-10", "1", "Sale", "Visa"),
            row("2024-01-10", "1", "   ", "Visa"),
        ];
        assert_eq!(validate(&rows), Err(ValidationError::MissingType { row: 2 }));

        let rows = vec![row("2024-01-10", "1", "Sale", " ")];
        assert_eq!(
            validate(&rows),
            Err(ValidationError::MissingCardBrand { row: 1 })
        );
    }

    #[test]
    fn test_absent_column_on_later_row_counts_as_empty() {
        let short: RawRow = [(PAYOUT_DATE, "2024-01-10"), (NET, "1"), (TYPE, "Sale")]
            .into_iter()
            .collect();
        let rows = vec![row("2024-01-10", "1", "Sale", "Visa"), short];
        assert_eq!(
            validate(&rows),
            Err(ValidationError::MissingCardBrand { row: 2 })
        );
    }
}
