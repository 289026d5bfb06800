use api::Metric;
use dioxus::prelude::*;

use crate::core::aggregate::DailyTotals;
use crate::core::format;
use crate::dashboard::MetricSelect;

const CHART_WIDTH: f64 = 720.0;
const CHART_HEIGHT: f64 = 220.0;
const CHART_PAD: f64 = 12.0;

/// Line chart of the selected metric over the daily series.
#[component]
pub fn TimeSeriesCard(points: Vec<DailyTotals>, metric: Signal<Metric>) -> Element {
    let selected = metric();
    let polyline = polyline_points(&points, selected);
    let span = match (points.first(), points.last()) {
        (Some(first), Some(last)) => {
            Some((format::format_date(first.date), format::format_date(last.date)))
        }
        _ => None,
    };
    let peak = points
        .iter()
        .map(|point| point.metric(selected))
        .fold(0.0_f64, f64::max);

    rsx! {
        section { class: "dash-card dash-card--timeseries",
            div { class: "dash-card__header",
                h2 { "Performance over time" }
                MetricSelect { metric }
            }

            if points.is_empty() {
                p { class: "dash-card__placeholder", "No data for the current filters." }
            } else {
                div { class: "chart chart--line",
                    span { class: "chart__peak", "Peak {format::format_metric(selected, peak)}" }
                    svg {
                        class: "chart__canvas",
                        view_box: "0 0 {CHART_WIDTH} {CHART_HEIGHT}",
                        preserve_aspect_ratio: "none",
                        polyline {
                            points: "{polyline}",
                            fill: "none",
                            stroke: "currentColor",
                            stroke_width: "2",
                        }
                    }
                    if let Some((start, end)) = span {
                        div { class: "chart__range",
                            span { "{start}" }
                            span { "{end}" }
                        }
                    }
                }
            }
        }
    }
}

/// Scale the series into SVG space. The y axis runs from 0 to the series
/// maximum; a single point is centered horizontally.
fn polyline_points(points: &[DailyTotals], metric: Metric) -> String {
    if points.is_empty() {
        return String::new();
    }
    let max = points
        .iter()
        .map(|point| point.metric(metric))
        .fold(0.0_f64, f64::max);
    let inner_width = CHART_WIDTH - 2.0 * CHART_PAD;
    let inner_height = CHART_HEIGHT - 2.0 * CHART_PAD;
    let step = if points.len() > 1 {
        inner_width / (points.len() - 1) as f64
    } else {
        0.0
    };

    points
        .iter()
        .enumerate()
        .map(|(index, point)| {
            let x = if points.len() == 1 {
                CHART_PAD + inner_width / 2.0
            } else {
                CHART_PAD + step * index as f64
            };
            let scaled = if max > 0.0 {
                point.metric(metric) / max
            } else {
                0.0
            };
            let y = CHART_HEIGHT - CHART_PAD - scaled * inner_height;
            format!("{x:.1},{y:.1}")
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    fn day(day: u8, clicks: u64) -> DailyTotals {
        DailyTotals {
            date: date!(2026 - 01 - 01).replace_day(day).unwrap(),
            impressions: 0,
            clicks,
            cost: 0.0,
            conversions: 0,
        }
    }

    #[test]
    fn polyline_spans_the_chart_width() {
        let points = vec![day(1, 0), day(2, 5), day(3, 10)];
        let encoded = polyline_points(&points, Metric::Clicks);
        let pairs: Vec<&str> = encoded.split(' ').collect();
        assert_eq!(pairs.len(), 3);
        assert!(pairs[0].starts_with("12.0,"));
        assert!(pairs[2].starts_with("708.0,"));
        // Max value sits at the top pad, zero at the bottom pad.
        assert!(pairs[0].ends_with(",208.0"));
        assert!(pairs[2].ends_with(",12.0"));
    }

    #[test]
    fn flat_zero_series_stays_on_the_baseline() {
        let points = vec![day(1, 0), day(2, 0)];
        let encoded = polyline_points(&points, Metric::Clicks);
        for pair in encoded.split(' ') {
            assert!(pair.ends_with(",208.0"));
        }
    }

    #[test]
    fn empty_series_encodes_to_nothing() {
        assert!(polyline_points(&[], Metric::Cost).is_empty());
    }
}
