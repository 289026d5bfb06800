use dioxus::prelude::*;

use crate::core::format;
use crate::core::kpi::KpiSummary;

#[component]
pub fn KpiStrip(summary: KpiSummary) -> Element {
    let cards = [
        ("Impressions", format::format_count(summary.impressions)),
        ("Clicks", format::format_count(summary.clicks)),
        ("Cost", format::format_currency(summary.cost)),
        ("Conversions", format::format_count(summary.conversions)),
        ("CTR", format::format_percent(summary.ctr)),
        ("CPC", format::format_currency(summary.cpc)),
    ];

    rsx! {
        section { class: "kpi-strip",
            for (label, value) in cards.into_iter() {
                div { class: "kpi-card",
                    span { class: "kpi-card__label", "{label}" }
                    strong { class: "kpi-card__value", "{value}" }
                }
            }
        }
    }
}
