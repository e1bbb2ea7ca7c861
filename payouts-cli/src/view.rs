//! Text and JSON views over a processed batch: metric cards and the paged
//! payouts list.

use anyhow::{Result, bail};
use chrono::NaiveDate;
use payouts_core::time::is_upcoming;
use payouts_core::{DateGroup, NormalizedPayout};
use payouts_finance::{PayoutSummary, group_by_date, has_reserved_hold, selected_total};
use serde::Serialize;
use std::fmt::Write;

use crate::format::{format_currency, format_date, format_percent};

/// One page of a listing, 1-indexed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub number: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Result<Page<T>> {
    if page_size == 0 {
        bail!("page size must be at least 1");
    }
    let total_pages = items.len().div_ceil(page_size).max(1);
    if page == 0 || page > total_pages {
        bail!("page {page} out of range (1-{total_pages})");
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Ok(Page {
        number: page,
        total_pages,
        items: items[start..end].to_vec(),
    })
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListRow {
    pub date: NaiveDate,
    pub total_amount: f64,
    pub upcoming: bool,
    pub reserved: bool,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Listing {
    pub page: Page<ListRow>,
    pub upcoming_count: usize,
    pub selected_count: usize,
    pub selected_total: f64,
}

/// Build the paged list of date groups (newest first) with per-row markers.
/// `selected` only affects upcoming dates.
pub fn build_listing(
    payouts: &[NormalizedPayout],
    today: NaiveDate,
    selected: &[NaiveDate],
    page: usize,
    page_size: usize,
) -> Result<Listing> {
    let groups = group_by_date(payouts);
    let upcoming: Vec<DateGroup> = groups
        .iter()
        .copied()
        .filter(|g| is_upcoming(g.date, today))
        .collect();

    let rows: Vec<ListRow> = groups
        .iter()
        .map(|g| {
            let upcoming = is_upcoming(g.date, today);
            ListRow {
                date: g.date,
                total_amount: g.total_amount,
                upcoming,
                reserved: has_reserved_hold(payouts, g.date, today),
                selected: upcoming && selected.contains(&g.date),
            }
        })
        .collect();

    Ok(Listing {
        page: paginate(&rows, page, page_size)?,
        upcoming_count: upcoming.len(),
        selected_count: upcoming.iter().filter(|g| selected.contains(&g.date)).count(),
        selected_total: selected_total(&upcoming, selected),
    })
}

pub fn render_listing(listing: &Listing, symbol: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Recent Payouts\n");
    let _ = writeln!(out, "  {:<14} {:>16}  {:<8}", "Date", "Total Amount", "Status");

    for row in &listing.page.items {
        let marker = match (row.upcoming, row.selected) {
            (true, true) => "[x]",
            (true, false) => "[ ]",
            _ => "   ",
        };
        let status = if row.reserved { "Reserved" } else { "" };
        let _ = writeln!(
            out,
            "{} {:<14} {:>16}  {:<8}",
            marker,
            format_date(row.date),
            format_currency(row.total_amount, symbol),
            status
        );
    }

    let _ = writeln!(
        out,
        "\nPage {} of {}",
        listing.page.number, listing.page.total_pages
    );
    if listing.selected_count > 0 {
        let _ = writeln!(
            out,
            "Selected Total: {}",
            format_currency(listing.selected_total, symbol)
        );
    }
    out
}

/// Metric cards. `position` picks which upcoming payout is shown as "Next
/// Payout" (1-indexed).
pub fn render_summary(summary: &PayoutSummary, position: usize, symbol: &str) -> Result<String> {
    let mut out = String::new();

    if !summary.upcoming.is_empty() {
        let _ = writeln!(
            out,
            "Total Upcoming Payouts: {}\n",
            format_currency(summary.total_upcoming, symbol)
        );
    }

    match summary.upcoming_at(position) {
        Some(next) => {
            let _ = writeln!(
                out,
                "Next Payout:       {} on {} (Payout {} of {})",
                format_currency(next.total_amount, symbol),
                format_date(next.date),
                position,
                summary.upcoming.len()
            );
        }
        None if summary.upcoming.is_empty() => {
            let _ = writeln!(out, "Next Payout:       N/A");
        }
        None => bail!(
            "payout {position} out of range (1-{})",
            summary.upcoming.len()
        ),
    }

    let _ = writeln!(
        out,
        "Reserved Funds:    {}",
        format_currency(summary.reserved_funds, symbol)
    );
    let _ = writeln!(
        out,
        "Total Chargebacks: {}",
        format_currency(summary.chargebacks, symbol)
    );
    let _ = writeln!(
        out,
        "Total Refunds:     {}",
        format_currency(summary.refunds, symbol)
    );

    let _ = writeln!(out, "\nPayment Distribution");
    for entry in &summary.card_brands {
        let _ = writeln!(out, "  {:<16} {:>6}", entry.label, format_percent(entry.percentage));
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample() -> Vec<NormalizedPayout> {
        vec![
            NormalizedPayout::new(ymd(2024, 3, 18), 130.0, "charge", "Discover", "scheduled"),
            NormalizedPayout::new(ymd(2024, 3, 16), 200.0, "charge", "Visa", "scheduled"),
            NormalizedPayout::new(ymd(2024, 3, 16), 50.0, "reserved_funds", "Visa", "scheduled"),
            NormalizedPayout::new(ymd(2024, 3, 15), 45.0, "charge", "Visa", "in_transit"),
            NormalizedPayout::new(ymd(2024, 3, 12), -20.0, "refund", "Visa", "paid"),
        ]
    }

    #[test]
    fn test_paginate() {
        let items: Vec<u32> = (1..=25).collect();
        let page = paginate(&items, 3, 10).unwrap();
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);
        assert_eq!(page.total_pages, 3);
        assert!(paginate(&items, 4, 10).is_err());
        assert!(paginate(&items, 0, 10).is_err());
        assert!(paginate(&items, 1, 0).is_err());
    }

    #[test]
    fn test_paginate_empty_has_one_page() {
        let page = paginate::<u32>(&[], 1, 10).unwrap();
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn test_listing_markers() {
        let today = ymd(2024, 3, 15);
        let listing =
            build_listing(&sample(), today, &[ymd(2024, 3, 16), ymd(2024, 3, 12)], 1, 10).unwrap();

        let rows = &listing.page.items;
        assert_eq!(rows.len(), 4);
        assert_eq!(rows[0].date, ymd(2024, 3, 18));
        assert!(rows[0].upcoming && !rows[0].reserved && !rows[0].selected);
        assert!(rows[1].upcoming && rows[1].reserved && rows[1].selected);
        assert!(!rows[2].upcoming);
        // Past dates cannot be selected
        assert!(!rows[3].selected);
        assert_eq!(listing.upcoming_count, 2);
        assert_eq!(listing.selected_count, 1);
        assert_eq!(listing.selected_total, 250.0);

        let text = render_listing(&listing, "$");
        assert!(text.contains("Reserved"));
        assert!(text.contains("Selected Total: $250.00"));
        assert!(text.contains("Page 1 of 1"));
    }

    #[test]
    fn test_render_summary() {
        let summary = PayoutSummary::build(&sample(), ymd(2024, 3, 15));
        let text = render_summary(&summary, 1, "$").unwrap();
        assert!(text.contains("Total Upcoming Payouts: $380.00"));
        assert!(text.contains("$250.00 on Mar 16, 2024 (Payout 1 of 2)"));
        assert!(text.contains("Total Refunds:     -$20.00"));
        assert!(text.contains("Visa"));
        assert!(render_summary(&summary, 3, "$").is_err());
    }

    #[test]
    fn test_render_summary_without_upcoming() {
        let summary = PayoutSummary::build(&sample(), ymd(2025, 1, 1));
        let text = render_summary(&summary, 1, "$").unwrap();
        assert!(text.contains("Next Payout:       N/A"));
        assert!(!text.contains("Total Upcoming"));
    }
}
