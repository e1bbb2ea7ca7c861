//! Row normalizer: validated raw rows -> typed payouts, newest first.

use payouts_core::time::parse_payout_date;
use payouts_core::{NormalizedPayout, PayoutError, Result};

use crate::types::{CARD_BRAND, NET, PAYOUT_DATE, PAYOUT_STATUS, RawRow, TYPE};
use crate::validate::{parse_net, validate};

/// Convert a validated batch into payouts sorted descending by date.
///
/// Rows are not re-validated. A row that still cannot be parsed (for example
/// `2024-02-30`, which has the right layout but is not a real date) means the
/// caller skipped validation or the batch is inconsistent, and is reported as
/// `ProcessingFailure` instead of being dropped.
pub fn normalize(rows: &[RawRow]) -> Result<Vec<NormalizedPayout>> {
    let mut payouts = rows
        .iter()
        .enumerate()
        .map(|(i, row)| normalize_row(row, i + 1))
        .collect::<Result<Vec<_>>>()?;

    // Stable: same-day payouts keep their export order.
    payouts.sort_by(|a, b| b.date.cmp(&a.date));

    log::debug!("Normalized {} payouts", payouts.len());
    Ok(payouts)
}

fn normalize_row(row: &RawRow, row_number: usize) -> Result<NormalizedPayout> {
    let date = parse_payout_date(row.field(PAYOUT_DATE)).ok_or_else(|| {
        PayoutError::ProcessingFailure(format!(
            "row {}: unparseable payout date {:?}",
            row_number,
            row.field(PAYOUT_DATE)
        ))
    })?;

    let net = parse_net(row.field(NET)).ok_or_else(|| {
        PayoutError::ProcessingFailure(format!(
            "row {}: unparseable net amount {:?}",
            row_number,
            row.field(NET)
        ))
    })?;

    Ok(NormalizedPayout::new(
        date,
        net,
        row.field(TYPE).to_lowercase(),
        row.field(CARD_BRAND),
        row.field(PAYOUT_STATUS).to_lowercase(),
    ))
}

/// Validate, then normalize. Either the whole batch comes back or nothing does.
pub fn process(rows: &[RawRow]) -> Result<Vec<NormalizedPayout>> {
    validate(rows)?;
    normalize(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use payouts_core::ValidationError;

    fn row(date: &str, net: &str, kind: &str, brand: &str, status: Option<&str>) -> RawRow {
        let mut r: RawRow = [
            (PAYOUT_DATE, date),
            (NET, net),
            (TYPE, kind),
            (CARD_BRAND, brand),
        ]
        .into_iter()
        .collect();
        if let Some(s) = status {
            r.insert(PAYOUT_STATUS, s);
        }
        r
    }

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_normalizes_fields() {
        let rows = vec![row("2024-01-10", "-20.5", "Refund", "MasterCard", Some("In_Transit"))];
        let payouts = normalize(&rows).unwrap();
        assert_eq!(payouts.len(), 1);
        let p = &payouts[0];
        assert_eq!(p.date, ymd(2024, 1, 10));
        assert_eq!(p.net, -20.5);
        assert_eq!(p.payout_type, "refund");
        assert_eq!(p.card_brand, "MasterCard");
        assert_eq!(p.payout_status, "in_transit");
    }

    #[test]
    fn test_missing_status_defaults_to_empty() {
        let payouts = normalize(&[row("2024-01-10", "1", "Sale", "Visa", None)]).unwrap();
        assert_eq!(payouts[0].payout_status, "");
    }

    #[test]
    fn test_sorted_descending_and_stable() {
        let rows = vec![
            row("2024-01-09", "1", "a", "Visa", None),
            row("2024-01-11", "2", "b", "Visa", None),
            row("2024-01-09", "3", "c", "Visa", None),
            row("2024-01-10", "4", "d", "Visa", None),
        ];
        let payouts = normalize(&rows).unwrap();
        assert_eq!(payouts.len(), rows.len());
        let types: Vec<_> = payouts.iter().map(|p| p.payout_type.as_str()).collect();
        assert_eq!(types, vec!["b", "d", "a", "c"]);
        assert!(payouts.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_impossible_date_is_processing_failure() {
        let err = normalize(&[row("2024-02-30", "1", "Sale", "Visa", None)]).unwrap_err();
        assert!(matches!(err, PayoutError::ProcessingFailure(_)));
    }

    #[test]
    fn test_process_refuses_invalid_batch() {
        let rows = vec![
            row("2024-01-10", "1", "Sale", "Visa", None),
            row("2024-01-10", "oops", "Sale", "Visa", None),
        ];
        let err = process(&rows).unwrap_err();
        assert!(matches!(
            err,
            PayoutError::Validation(ValidationError::InvalidAmount { row: 2 })
        ));
    }

    #[test]
    fn test_process_valid_batch() {
        let rows = vec![
            row("2024-01-10", "100", "Sale", "Visa", None),
            row("2024-01-10", "-20", "Refund", "Visa", None),
        ];
        assert_eq!(process(&rows).unwrap().len(), 2);
    }
}
