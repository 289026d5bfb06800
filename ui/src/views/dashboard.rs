use api::fetch::fetch_dataset;
use api::Metric;
use dioxus::prelude::*;

use crate::core::aggregate::{self, BreakdownKey};
use crate::core::filter::{self, Options, Selection};
use crate::core::kpi::KpiSummary;
use crate::dashboard::{
    CampaignTable, DashboardState, FilterPanel, GroupBarsCard, KpiStrip, PlatformShareCard,
    TimeSeriesCard,
};

#[cfg(debug_assertions)]
fn log_recompute(total: usize, filtered: usize) {
    // Lightweight trace for checking that filter changes trigger reruns.
    println!("[pipeline] recompute ({filtered}/{total} rows)");
}

/// The dashboard page. The dataset is fetched once per session; every
/// selection change recomputes the derived views from the in-memory rows.
#[component]
pub fn Dashboard() -> Element {
    let mut dataset =
        use_resource(|| async move { DashboardState::from_fetch(fetch_dataset().await) });
    let mut selection = use_signal(|| Option::<Selection>::None);
    let series_metric = use_signal(|| Metric::Impressions);
    let share_metric = use_signal(|| Metric::Cost);
    let group_metric = use_signal(|| Metric::Conversions);

    // Seed the widest selection once the dataset arrives.
    use_effect(move || {
        if selection.peek().is_none() {
            if let Some(state) = &*dataset.read_unchecked() {
                if let Some(widest) = Selection::all_of(&state.records) {
                    selection.set(Some(widest));
                }
            }
        }
    });

    let Some(state) = (*dataset.read_unchecked()).clone() else {
        return rsx! {
            section { class: "page page-dashboard",
                h1 { "Marketing Performance Dashboard" }
                p { class: "page-dashboard__status", "Loading dataset…" }
            }
        };
    };

    if let Some(error) = state.error.clone() {
        return rsx! {
            section { class: "page page-dashboard",
                h1 { "Marketing Performance Dashboard" }
                div { class: "page-dashboard__error",
                    p { "{error}" }
                    button {
                        r#type: "button",
                        class: "button button--primary",
                        onclick: move |_| dataset.restart(),
                        "Retry"
                    }
                }
            }
        };
    }

    let Some(current) = selection() else {
        return rsx! {
            section { class: "page page-dashboard",
                h1 { "Marketing Performance Dashboard" }
                p { class: "page-dashboard__status", "Preparing filters…" }
            }
        };
    };

    let options = Options::cascade(&state.records, &current);
    let filtered = filter::apply(&state.records, &current);
    let summary = KpiSummary::from_rows(&filtered);
    let daily = aggregate::daily_series(&filtered);
    let campaigns = aggregate::campaign_rows(&filtered);
    let platform_share = aggregate::breakdown(&filtered, BreakdownKey::Platform, share_metric());
    let group_performance = aggregate::breakdown(&filtered, BreakdownKey::Group, group_metric());

    #[cfg(debug_assertions)]
    log_recompute(state.records.len(), filtered.len());

    rsx! {
        section { class: "page page-dashboard",
            h1 { "Marketing Performance Dashboard" }

            div { class: "page-dashboard__layout",
                FilterPanel { selection, options }

                div { class: "page-dashboard__main",
                    KpiStrip { summary }
                    TimeSeriesCard { points: daily, metric: series_metric }
                    CampaignTable { rows: campaigns }
                    div { class: "page-dashboard__split",
                        PlatformShareCard { slices: platform_share, metric: share_metric }
                        GroupBarsCard { slices: group_performance, metric: group_metric }
                    }
                }
            }
        }
    }
}
