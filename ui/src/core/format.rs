//! Formatting helpers for presenting metrics.

use api::Metric;
use time::Date;

pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

pub fn format_currency(value: f64) -> String {
    let cents_total = (value * 100.0).round() as i64;
    let sign = if cents_total < 0 { "-" } else { "" };
    let cents_total = cents_total.unsigned_abs();
    format!(
        "{sign}${}.{:02}",
        format_count(cents_total / 100),
        cents_total % 100
    )
}

pub fn format_percent(value: f64) -> String {
    format!("{value:.2}%")
}

pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month() as u8,
        date.day()
    )
}

/// Metric-appropriate formatting: currency for cost, grouped counts otherwise.
pub fn format_metric(metric: Metric, value: f64) -> String {
    if metric.is_currency() {
        format_currency(value)
    } else {
        format_count(value.round() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_000), "1,000");
        assert_eq!(format_count(1_234_567), "1,234,567");
    }

    #[test]
    fn currency_keeps_two_decimals() {
        assert_eq!(format_currency(15.0), "$15.00");
        assert_eq!(format_currency(1234.5), "$1,234.50");
        assert_eq!(format_currency(0.005), "$0.01");
    }

    #[test]
    fn percent_and_date() {
        assert_eq!(format_percent(10.0), "10.00%");
        assert_eq!(format_date(date!(2026 - 01 - 02)), "2026-01-02");
    }

    #[test]
    fn metric_formatting_follows_kind() {
        assert_eq!(format_metric(Metric::Cost, 12.5), "$12.50");
        assert_eq!(format_metric(Metric::Clicks, 1200.0), "1,200");
    }
}
