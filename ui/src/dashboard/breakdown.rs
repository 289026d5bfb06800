use std::f64::consts::{FRAC_PI_2, PI, TAU};

use api::Metric;
use dioxus::prelude::*;

use crate::core::aggregate::Slice;
use crate::core::format;
use crate::dashboard::MetricSelect;

const DONUT_SIZE: f64 = 200.0;
const DONUT_RADIUS: f64 = 80.0;

/// Donut chart of how the selected metric splits across platforms.
#[component]
pub fn PlatformShareCard(slices: Vec<Slice>, metric: Signal<Metric>) -> Element {
    let selected = metric();
    let arcs = donut_arcs(&slices);

    rsx! {
        section { class: "dash-card dash-card--share",
            div { class: "dash-card__header",
                h2 { "Platform share" }
                MetricSelect { metric }
            }

            if arcs.is_empty() {
                p { class: "dash-card__placeholder", "No data for the current filters." }
            } else {
                div { class: "chart chart--donut",
                    svg {
                        class: "chart__canvas",
                        view_box: "0 0 {DONUT_SIZE} {DONUT_SIZE}",
                        if arcs.len() == 1 {
                            circle {
                                class: "chart__slice chart__slice--0",
                                cx: "{DONUT_SIZE / 2.0}",
                                cy: "{DONUT_SIZE / 2.0}",
                                r: "{DONUT_RADIUS}",
                            }
                        } else {
                            for arc in arcs.iter() {
                                path {
                                    class: "chart__slice chart__slice--{arc.color}",
                                    d: "{arc.path}",
                                }
                            }
                        }
                    }
                    ul { class: "chart__legend",
                        for arc in arcs.iter() {
                            li { class: "chart__legend-item",
                                span { class: "chart__legend-swatch chart__legend-swatch--{arc.color}" }
                                span { class: "chart__legend-label", "{arc.label}" }
                                span { class: "chart__legend-value",
                                    "{format::format_metric(selected, arc.value)} · {format::format_percent(arc.share * 100.0)}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Horizontal bars of the selected metric per group, widest first.
#[component]
pub fn GroupBarsCard(slices: Vec<Slice>, metric: Signal<Metric>) -> Element {
    let selected = metric();
    // Slices arrive sorted descending, so the first one carries the maximum.
    let max = slices.first().map(|slice| slice.value).unwrap_or(0.0);

    rsx! {
        section { class: "dash-card dash-card--groups",
            div { class: "dash-card__header",
                h2 { "Group performance" }
                MetricSelect { metric }
            }

            if slices.is_empty() {
                p { class: "dash-card__placeholder", "No data for the current filters." }
            } else {
                div { class: "bars",
                    for slice in slices.iter() {
                        {
                            let width = if max > 0.0 { slice.value / max * 100.0 } else { 0.0 };
                            rsx! {
                                div { class: "bars__row",
                                    span { class: "bars__label", "{slice.label}" }
                                    div { class: "bars__track",
                                        div { class: "bars__fill", style: "width: {width:.1}%" }
                                    }
                                    span { class: "bars__value", "{format::format_metric(selected, slice.value)}" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

struct DonutArc {
    label: String,
    value: f64,
    share: f64,
    path: String,
    color: usize,
}

/// Convert slices into pie wedges starting at twelve o'clock. Zero or
/// negative totals render nothing rather than degenerate geometry.
fn donut_arcs(slices: &[Slice]) -> Vec<DonutArc> {
    let total: f64 = slices.iter().map(|slice| slice.value).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -FRAC_PI_2;
    slices
        .iter()
        .enumerate()
        .filter(|(_, slice)| slice.value > 0.0)
        .map(|(index, slice)| {
            let share = slice.value / total;
            let end = angle + share * TAU;
            let path = wedge_path(angle, end);
            angle = end;
            DonutArc {
                label: slice.label.clone(),
                value: slice.value,
                share,
                path,
                color: index % 6,
            }
        })
        .collect()
}

fn wedge_path(start: f64, end: f64) -> String {
    let center = DONUT_SIZE / 2.0;
    let (sx, sy) = (
        center + DONUT_RADIUS * start.cos(),
        center + DONUT_RADIUS * start.sin(),
    );
    let (ex, ey) = (
        center + DONUT_RADIUS * end.cos(),
        center + DONUT_RADIUS * end.sin(),
    );
    let large_arc = if end - start > PI { 1 } else { 0 };
    format!(
        "M {center:.2} {center:.2} L {sx:.2} {sy:.2} A {DONUT_RADIUS:.2} {DONUT_RADIUS:.2} 0 {large_arc} 1 {ex:.2} {ey:.2} Z"
    )
}
