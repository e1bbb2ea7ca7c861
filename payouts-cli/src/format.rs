//! Human-readable amounts and dates for terminal output.

use chrono::NaiveDate;

/// `1234.5` -> `$1,234.50`, `-20` -> `-$20.00`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let digits = (cents / 100).to_string();

    let mut whole = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            whole.push(',');
        }
        whole.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{symbol}{whole}.{:02}", cents % 100)
}

/// `2024-03-16` -> `Mar 16, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

pub fn format_percent(pct: f64) -> String {
    format!("{pct:.1}%")
}
