//! Headline KPI totals over the filtered table.

use api::MetricRecord;

/// The six headline figures shown at the top of the dashboard.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct KpiSummary {
    pub impressions: u64,
    pub clicks: u64,
    pub cost: f64,
    pub conversions: u64,
    /// Click-through rate in percent. 0 when there are no impressions.
    pub ctr: f64,
    /// Cost per click. 0 when there are no clicks.
    pub cpc: f64,
}

impl KpiSummary {
    pub fn from_rows(rows: &[MetricRecord]) -> Self {
        let mut summary = Self::default();
        for row in rows {
            summary.impressions += row.impressions;
            summary.clicks += row.clicks;
            summary.cost += row.cost;
            summary.conversions += row.conversions;
        }
        summary.ctr = ratio(summary.clicks as f64, summary.impressions as f64) * 100.0;
        summary.cpc = ratio(summary.cost, summary.clicks as f64);
        summary
    }
}

/// Division guarded to 0 on a zero denominator, so empty tables still render.
pub(crate) fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        0.0
    } else {
        numerator / denominator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Platform;
    use time::macros::date;

    fn record(impressions: u64, clicks: u64, cost: f64, conversions: u64) -> MetricRecord {
        MetricRecord {
            date: date!(2026 - 01 - 01),
            platform: Some(Platform::Facebook),
            group: "Brand".into(),
            campaign: "A".into(),
            impressions,
            clicks,
            cost,
            conversions,
        }
    }

    #[test]
    fn sums_and_derives_over_two_rows() {
        let rows = vec![record(100, 10, 5.0, 1), record(200, 20, 10.0, 2)];
        let summary = KpiSummary::from_rows(&rows);
        assert_eq!(summary.impressions, 300);
        assert_eq!(summary.clicks, 30);
        assert!((summary.cost - 15.0).abs() < 1e-9);
        assert_eq!(summary.conversions, 3);
        assert!((summary.ctr - 10.0).abs() < 1e-9);
        assert!((summary.cpc - 0.5).abs() < 1e-9);
    }

    #[test]
    fn zero_impressions_guards_ctr() {
        let summary = KpiSummary::from_rows(&[record(0, 0, 3.0, 0)]);
        assert_eq!(summary.ctr, 0.0);
        assert!(summary.ctr.is_finite());
    }

    #[test]
    fn zero_clicks_guards_cpc() {
        let summary = KpiSummary::from_rows(&[record(50, 0, 3.0, 0)]);
        assert_eq!(summary.cpc, 0.0);
    }

    #[test]
    fn empty_table_is_all_zeroes() {
        let summary = KpiSummary::from_rows(&[]);
        assert_eq!(summary, KpiSummary::default());
    }
}
