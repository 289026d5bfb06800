//! Cascading filter over the advertising dataset.
//!
//! Option lists for each selector are derived from the rows that survive the
//! *previous* stages (date → platform → group → campaign), so narrowing one
//! control shrinks the choices offered downstream. Applying the filter is a
//! pure function of `(rows, selection)`; an empty selection set yields an
//! empty table, never an error.

use std::collections::BTreeSet;

use api::{MetricRecord, Platform};
use time::{macros::format_description, Date};

/// The user's current filter state. Rebuilt on every input change.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub start: Date,
    pub end: Date,
    pub platforms: BTreeSet<Platform>,
    pub groups: BTreeSet<String>,
    pub campaigns: BTreeSet<String>,
}

impl Selection {
    /// The widest selection for a dataset: the full date span with every
    /// option ticked. This is the initial UI state. `None` when the dataset
    /// is empty.
    pub fn all_of(rows: &[MetricRecord]) -> Option<Self> {
        let start = rows.iter().map(|row| row.date).min()?;
        let end = rows.iter().map(|row| row.date).max()?;

        let mut selection = Self {
            start,
            end,
            platforms: BTreeSet::new(),
            groups: BTreeSet::new(),
            campaigns: BTreeSet::new(),
        };
        // Widen stage by stage so each option list sees the stages before it.
        selection.platforms = platform_options(rows, &selection).into_iter().collect();
        selection.groups = group_options(rows, &selection).into_iter().collect();
        selection.campaigns = campaign_options(rows, &selection).into_iter().collect();
        Some(selection)
    }
}

/// Option lists for the dependent selectors, in cascade order. Always
/// sorted, de-duplicated, and free of unknown/blank values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options {
    pub platforms: Vec<Platform>,
    pub groups: Vec<String>,
    pub campaigns: Vec<String>,
}

impl Options {
    pub fn cascade(rows: &[MetricRecord], selection: &Selection) -> Self {
        Self {
            platforms: platform_options(rows, selection),
            groups: group_options(rows, selection),
            campaigns: campaign_options(rows, selection),
        }
    }
}

fn in_date_range(record: &MetricRecord, selection: &Selection) -> bool {
    record.date >= selection.start && record.date <= selection.end
}

/// Unknown-platform rows fail the membership test, matching the original
/// behavior of filtering over a code column with unmapped values.
fn platform_selected(record: &MetricRecord, selection: &Selection) -> bool {
    record
        .platform
        .map(|platform| selection.platforms.contains(&platform))
        .unwrap_or(false)
}

fn group_selected(record: &MetricRecord, selection: &Selection) -> bool {
    selection.groups.contains(&record.group)
}

fn campaign_selected(record: &MetricRecord, selection: &Selection) -> bool {
    selection.campaigns.contains(&record.campaign)
}

/// Platforms present after the date stage. Unknown codes never become options.
pub fn platform_options(rows: &[MetricRecord], selection: &Selection) -> Vec<Platform> {
    let set: BTreeSet<Platform> = rows
        .iter()
        .filter(|row| in_date_range(row, selection))
        .filter_map(|row| row.platform)
        .collect();
    set.into_iter().collect()
}

/// Groups present after the date and platform stages.
pub fn group_options(rows: &[MetricRecord], selection: &Selection) -> Vec<String> {
    let set: BTreeSet<String> = rows
        .iter()
        .filter(|row| in_date_range(row, selection) && platform_selected(row, selection))
        .filter(|row| !row.group.is_empty())
        .map(|row| row.group.clone())
        .collect();
    set.into_iter().collect()
}

/// Campaigns present after the date, platform, and group stages.
pub fn campaign_options(rows: &[MetricRecord], selection: &Selection) -> Vec<String> {
    let set: BTreeSet<String> = rows
        .iter()
        .filter(|row| {
            in_date_range(row, selection)
                && platform_selected(row, selection)
                && group_selected(row, selection)
        })
        .filter(|row| !row.campaign.is_empty())
        .map(|row| row.campaign.clone())
        .collect();
    set.into_iter().collect()
}

/// Apply the full conjunction of predicates.
pub fn apply(rows: &[MetricRecord], selection: &Selection) -> Vec<MetricRecord> {
    rows.iter()
        .filter(|row| {
            in_date_range(row, selection)
                && platform_selected(row, selection)
                && group_selected(row, selection)
                && campaign_selected(row, selection)
        })
        .cloned()
        .collect()
}

/// Parse the `YYYY-MM-DD` value emitted by a date input.
pub fn parse_input_date(value: &str) -> Option<Date> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn record(
        day: Date,
        platform: Option<Platform>,
        group: &str,
        campaign: &str,
    ) -> MetricRecord {
        MetricRecord {
            date: day,
            platform,
            group: group.into(),
            campaign: campaign.into(),
            impressions: 100,
            clicks: 10,
            cost: 5.0,
            conversions: 1,
        }
    }

    fn rows() -> Vec<MetricRecord> {
        vec![
            record(date!(2026 - 01 - 01), Some(Platform::Facebook), "Brand", "A"),
            record(date!(2026 - 01 - 02), Some(Platform::Google), "Brand", "B"),
            record(date!(2026 - 01 - 03), Some(Platform::Tiktok), "Retail", "C"),
            record(date!(2026 - 01 - 03), None, "Retail", "D"),
        ]
    }

    #[test]
    fn widest_selection_keeps_every_known_platform_row() {
        let rows = rows();
        let selection = Selection::all_of(&rows).unwrap();
        let filtered = apply(&rows, &selection);
        // The unknown-platform row fails membership once the platform stage runs.
        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|row| row.platform.is_some()));
    }

    #[test]
    fn unknown_platform_is_never_an_option() {
        let rows = rows();
        let selection = Selection::all_of(&rows).unwrap();
        let options = Options::cascade(&rows, &selection);
        assert_eq!(
            options.platforms,
            vec![Platform::Facebook, Platform::Google, Platform::Tiktok]
        );
    }

    #[test]
    fn narrowing_dates_shrinks_downstream_options() {
        let rows = rows();
        let mut selection = Selection::all_of(&rows).unwrap();
        selection.end = date!(2026 - 01 - 02);

        let options = Options::cascade(&rows, &selection);
        assert_eq!(options.platforms, vec![Platform::Facebook, Platform::Google]);
        assert_eq!(options.groups, vec!["Brand".to_string()]);
        assert_eq!(options.campaigns, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn deselecting_a_platform_cascades_into_group_and_campaign_options() {
        let rows = rows();
        let mut selection = Selection::all_of(&rows).unwrap();
        selection.platforms.remove(&Platform::Tiktok);

        let options = Options::cascade(&rows, &selection);
        assert_eq!(options.groups, vec!["Brand".to_string()]);
        assert_eq!(options.campaigns, vec!["A".to_string(), "B".to_string()]);
    }

    #[test]
    fn empty_selection_set_yields_empty_table() {
        let rows = rows();
        let mut selection = Selection::all_of(&rows).unwrap();
        selection.platforms.clear();
        assert!(apply(&rows, &selection).is_empty());
    }

    #[test]
    fn apply_is_idempotent() {
        let rows = rows();
        let selection = Selection::all_of(&rows).unwrap();
        let once = apply(&rows, &selection);
        let twice = apply(&once, &selection);
        assert_eq!(once, twice);
    }

    #[test]
    fn date_bounds_are_inclusive() {
        let rows = rows();
        let mut selection = Selection::all_of(&rows).unwrap();
        selection.start = date!(2026 - 01 - 02);
        selection.end = date!(2026 - 01 - 02);
        let filtered = apply(&rows, &selection);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].campaign, "B");
    }

    #[test]
    fn parses_date_input_values() {
        assert_eq!(parse_input_date("2026-01-31"), Some(date!(2026 - 01 - 31)));
        assert_eq!(parse_input_date("31/01/2026"), None);
    }
}
