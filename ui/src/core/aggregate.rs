//! Grouped aggregation for the charts and the campaign table.
//!
//! Every aggregator returns an empty list for an empty input; the display
//! layer shows a "no data" placeholder instead of treating that as an error.

use std::collections::BTreeMap;

use api::{Metric, MetricRecord};
use time::Date;

use crate::core::kpi::ratio;

/// Per-day totals for the time-series chart, ascending by date.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTotals {
    pub date: Date,
    pub impressions: u64,
    pub clicks: u64,
    pub cost: f64,
    pub conversions: u64,
}

impl DailyTotals {
    fn zero(date: Date) -> Self {
        Self {
            date,
            impressions: 0,
            clicks: 0,
            cost: 0.0,
            conversions: 0,
        }
    }

    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Impressions => self.impressions as f64,
            Metric::Clicks => self.clicks as f64,
            Metric::Cost => self.cost,
            Metric::Conversions => self.conversions as f64,
        }
    }
}

pub fn daily_series(rows: &[MetricRecord]) -> Vec<DailyTotals> {
    let mut by_date: BTreeMap<Date, DailyTotals> = BTreeMap::new();
    for row in rows {
        let entry = by_date
            .entry(row.date)
            .or_insert_with(|| DailyTotals::zero(row.date));
        entry.impressions += row.impressions;
        entry.clicks += row.clicks;
        entry.cost += row.cost;
        entry.conversions += row.conversions;
    }
    by_date.into_values().collect()
}

/// One row of the campaign table: summed metrics plus derived CTR/CPC.
/// The zero-guard applies here exactly as it does for the headline KPIs.
#[derive(Debug, Clone, PartialEq)]
pub struct CampaignTotals {
    pub campaign: String,
    pub impressions: u64,
    pub clicks: u64,
    pub cost: f64,
    pub conversions: u64,
    pub ctr: f64,
    pub cpc: f64,
}

/// Campaign totals sorted descending by conversions (name as tiebreak).
pub fn campaign_rows(rows: &[MetricRecord]) -> Vec<CampaignTotals> {
    let mut by_campaign: BTreeMap<String, (u64, u64, f64, u64)> = BTreeMap::new();
    for row in rows {
        let entry = by_campaign
            .entry(row.campaign.clone())
            .or_insert((0, 0, 0.0, 0));
        entry.0 += row.impressions;
        entry.1 += row.clicks;
        entry.2 += row.cost;
        entry.3 += row.conversions;
    }

    let mut table: Vec<CampaignTotals> = by_campaign
        .into_iter()
        .map(|(campaign, (impressions, clicks, cost, conversions))| CampaignTotals {
            campaign,
            impressions,
            clicks,
            cost,
            conversions,
            ctr: ratio(clicks as f64, impressions as f64) * 100.0,
            cpc: ratio(cost, clicks as f64),
        })
        .collect();
    table.sort_by(|a, b| {
        b.conversions
            .cmp(&a.conversions)
            .then_with(|| a.campaign.cmp(&b.campaign))
    });
    table
}

/// Which dimension the share/bar charts break down over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BreakdownKey {
    Platform,
    Group,
}

/// One slice of a breakdown chart.
#[derive(Debug, Clone, PartialEq)]
pub struct Slice {
    pub label: String,
    pub value: f64,
}

/// Sum a single metric per distinct key value, sorted descending by value
/// (label as tiebreak). Unknown-platform rows are skipped for the platform
/// key; blank groups are skipped for the group key.
pub fn breakdown(rows: &[MetricRecord], key: BreakdownKey, metric: Metric) -> Vec<Slice> {
    let mut by_label: BTreeMap<String, f64> = BTreeMap::new();
    for row in rows {
        let label = match key {
            BreakdownKey::Platform => match row.platform {
                Some(platform) => platform.as_str().to_string(),
                None => continue,
            },
            BreakdownKey::Group => {
                if row.group.is_empty() {
                    continue;
                }
                row.group.clone()
            }
        };
        *by_label.entry(label).or_insert(0.0) += metric.value_of(row);
    }

    let mut slices: Vec<Slice> = by_label
        .into_iter()
        .map(|(label, value)| Slice { label, value })
        .collect();
    slices.sort_by(|a, b| b.value.total_cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    slices
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::Platform;
    use time::macros::date;

    fn record(
        day: Date,
        platform: Option<Platform>,
        group: &str,
        campaign: &str,
        impressions: u64,
        clicks: u64,
        cost: f64,
        conversions: u64,
    ) -> MetricRecord {
        MetricRecord {
            date: day,
            platform,
            group: group.into(),
            campaign: campaign.into(),
            impressions,
            clicks,
            cost,
            conversions,
        }
    }

    fn rows() -> Vec<MetricRecord> {
        vec![
            record(date!(2026 - 01 - 01), Some(Platform::Facebook), "Brand", "A", 100, 10, 5.0, 1),
            record(date!(2026 - 01 - 01), Some(Platform::Google), "Brand", "B", 200, 20, 10.0, 2),
            record(date!(2026 - 01 - 02), Some(Platform::Google), "Retail", "B", 300, 30, 15.0, 6),
        ]
    }

    #[test]
    fn daily_series_sums_per_date_ascending() {
        let series = daily_series(&rows());
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, date!(2026 - 01 - 01));
        assert_eq!(series[0].impressions, 300);
        assert_eq!(series[1].clicks, 30);
    }

    #[test]
    fn grouped_sums_match_the_table_totals() {
        let rows = rows();
        let total_clicks: u64 = rows.iter().map(|row| row.clicks).sum();
        let daily: u64 = daily_series(&rows).iter().map(|day| day.clicks).sum();
        let campaigns: u64 = campaign_rows(&rows).iter().map(|row| row.clicks).sum();
        assert_eq!(daily, total_clicks);
        assert_eq!(campaigns, total_clicks);
    }

    #[test]
    fn campaign_rows_sort_by_conversions_descending() {
        let table = campaign_rows(&rows());
        assert_eq!(table[0].campaign, "B");
        assert_eq!(table[0].conversions, 8);
        assert!((table[0].ctr - 10.0).abs() < 1e-9);
        assert!((table[0].cpc - 0.5).abs() < 1e-9);
    }

    #[test]
    fn campaign_ratios_are_guarded_like_the_kpis() {
        let rows = vec![record(
            date!(2026 - 01 - 01),
            Some(Platform::Tiktok),
            "Brand",
            "Silent",
            0,
            0,
            3.0,
            0,
        )];
        let table = campaign_rows(&rows);
        assert_eq!(table[0].ctr, 0.0);
        assert_eq!(table[0].cpc, 0.0);
    }

    #[test]
    fn platform_breakdown_skips_unknown_codes() {
        let mut rows = rows();
        rows.push(record(date!(2026 - 01 - 02), None, "Retail", "X", 999, 0, 0.0, 0));
        let slices = breakdown(&rows, BreakdownKey::Platform, Metric::Impressions);
        assert_eq!(slices.len(), 2);
        assert_eq!(slices[0].label, "google");
        assert!((slices[0].value - 500.0).abs() < 1e-9);
    }

    #[test]
    fn group_breakdown_sorts_by_selected_metric() {
        let slices = breakdown(&rows(), BreakdownKey::Group, Metric::Conversions);
        assert_eq!(slices[0].label, "Retail");
        assert!((slices[0].value - 6.0).abs() < 1e-9);
    }

    #[test]
    fn empty_input_degrades_to_empty_aggregates() {
        assert!(daily_series(&[]).is_empty());
        assert!(campaign_rows(&[]).is_empty());
        assert!(breakdown(&[], BreakdownKey::Group, Metric::Cost).is_empty());
    }
}
