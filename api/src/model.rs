//! Typed schema for the daily advertising export.

use std::fmt;

use serde::{Deserialize, Serialize};
use time::Date;

/// Advertising platform, decoded from the numeric `PLATAFORMA` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Facebook,
    Google,
    Tiktok,
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Facebook, Platform::Google, Platform::Tiktok];

    /// Fixed lookup for the export's numeric codes. Codes outside the table
    /// are unknown, which downstream filtering tolerates.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(Platform::Facebook),
            2 => Some(Platform::Google),
            3 => Some(Platform::Tiktok),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Facebook => "facebook",
            Platform::Google => "google",
            Platform::Tiktok => "tiktok",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the export after normalization.
///
/// `platform` is `None` when the source carried an unmapped code; such rows
/// stay in the table but are never offered as a filter option.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub date: Date,
    pub platform: Option<Platform>,
    pub group: String,
    pub campaign: String,
    pub impressions: u64,
    pub clicks: u64,
    pub cost: f64,
    pub conversions: u64,
}

/// The four base metrics a chart can display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Impressions,
    Clicks,
    Cost,
    Conversions,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Impressions,
        Metric::Clicks,
        Metric::Cost,
        Metric::Conversions,
    ];

    /// Stable identifier used for `<select>` round-trips.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::Impressions => "impressions",
            Metric::Clicks => "clicks",
            Metric::Cost => "cost",
            Metric::Conversions => "conversions",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Metric::ALL.into_iter().find(|metric| metric.key() == key)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Metric::Impressions => "Impressions",
            Metric::Clicks => "Clicks",
            Metric::Cost => "Cost",
            Metric::Conversions => "Conversions",
        }
    }

    /// Whether the metric is a currency amount (affects value formatting).
    pub fn is_currency(&self) -> bool {
        matches!(self, Metric::Cost)
    }

    pub fn value_of(&self, record: &MetricRecord) -> f64 {
        match self {
            Metric::Impressions => record.impressions as f64,
            Metric::Clicks => record.clicks as f64,
            Metric::Cost => record.cost,
            Metric::Conversions => record.conversions as f64,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
