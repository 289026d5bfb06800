//! Dashboard cards: filter panel, KPI strip, charts, and the campaign table.

mod filters;
pub use filters::FilterPanel;

mod kpis;
pub use kpis::KpiStrip;

mod timeseries;
pub use timeseries::TimeSeriesCard;

mod campaigns;
pub use campaigns::CampaignTable;

mod breakdown;
pub use breakdown::{GroupBarsCard, PlatformShareCard};

use api::{DataError, Metric, MetricRecord};
use dioxus::prelude::*;

/// Shared state for the dashboard view: the decoded dataset or a load error.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub records: Vec<MetricRecord>,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn from_fetch(result: Result<Vec<MetricRecord>, DataError>) -> Self {
        match result {
            Ok(records) => Self {
                records,
                error: None,
            },
            Err(err) => Self {
                records: Vec::new(),
                error: Some(format!("Couldn't load the dataset: {err}")),
            },
        }
    }
}

/// Metric dropdown shared by the charts. Each chart owns its own signal so
/// the selections stay independent.
#[component]
pub(crate) fn MetricSelect(mut metric: Signal<Metric>) -> Element {
    let selected = metric();
    rsx! {
        select { class: "metric-select",
            onchange: move |event| {
                if let Some(next) = Metric::from_key(&event.value()) {
                    metric.set(next);
                }
            },
            for choice in Metric::ALL {
                option {
                    value: "{choice.key()}",
                    selected: choice == selected,
                    "{choice.label()}"
                }
            }
        }
    }
}
