use dioxus::prelude::*;

use crate::core::aggregate::CampaignTotals;
use crate::core::format;

/// Campaign table, already sorted descending by conversions upstream.
#[component]
pub fn CampaignTable(rows: Vec<CampaignTotals>) -> Element {
    rsx! {
        section { class: "dash-card dash-card--campaigns",
            div { class: "dash-card__header",
                h2 { "Campaign performance" }
                if !rows.is_empty() {
                    span { class: "dash-card__meta", "{rows.len()} campaigns" }
                }
            }

            if rows.is_empty() {
                p { class: "dash-card__placeholder", "No data for the current filters." }
            } else {
                table { class: "campaign-table",
                    thead {
                        tr {
                            th { "Campaign" }
                            th { "Impressions" }
                            th { "Clicks" }
                            th { "Cost" }
                            th { "Conversions" }
                            th { "CTR (%)" }
                            th { "CPC" }
                        }
                    }
                    tbody {
                        for row in rows.iter() {
                            tr {
                                td { class: "campaign-table__name", "{row.campaign}" }
                                td { "{format::format_count(row.impressions)}" }
                                td { "{format::format_count(row.clicks)}" }
                                td { "{format::format_currency(row.cost)}" }
                                td { "{format::format_count(row.conversions)}" }
                                td { "{format::format_percent(row.ctr)}" }
                                td { "{format::format_currency(row.cpc)}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
