//! Time utilities: every calendar-day comparison goes through here.

use chrono::{Local, NaiveDate, NaiveDateTime};

/// Exact payout date layout (`YYYY-MM-DD`).
pub const PAYOUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a payout date, no time component and no timezone shift.
pub fn parse_payout_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, PAYOUT_DATE_FORMAT).ok()
}

/// Drop the time-of-day component.
pub fn calendar_day(dt: NaiveDateTime) -> NaiveDate {
    dt.date()
}

/// Strictly after `today`; a date equal to today is not upcoming.
pub fn is_upcoming(date: NaiveDate, today: NaiveDate) -> bool {
    date > today
}

/// Current local calendar day. Only the CLI reads the clock; the core takes
/// `today` as a parameter.
pub fn today() -> NaiveDate {
    calendar_day(Local::now().naive_local())
}
