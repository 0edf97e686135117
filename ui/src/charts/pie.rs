use api::PieChart;
use dioxus::prelude::*;

use super::geometry::{arc_path, point_on_circle, slice_arcs};
use super::{palette, status_body, ChartState};
use crate::{core::format, t};

const SIZE: f64 = 320.0;
const RADIUS: f64 = 140.0;
/// Wedges narrower than this get no inline percentage.
const MIN_LABEL_SWEEP: f64 = 0.35;

#[derive(Clone, PartialEq)]
struct Wedge {
    label: String,
    value: u32,
    share: String,
    color: &'static str,
    /// `None` for a wedge that fills the whole disc.
    path: Option<String>,
    label_at: Option<(f64, f64)>,
}

fn wedges(chart: &PieChart) -> Vec<Wedge> {
    let total = chart.total();
    let values: Vec<u32> = chart.slices.iter().map(|slice| slice.value).collect();
    let center = SIZE / 2.0;

    chart
        .slices
        .iter()
        .zip(slice_arcs(&values))
        .enumerate()
        .map(|(idx, (slice, arc))| Wedge {
            label: slice.label.clone(),
            value: slice.value,
            share: format::format_share(slice.value, total),
            color: palette::slice_color(&slice.label, idx),
            path: (!arc.is_full_circle()).then(|| arc_path(center, center, RADIUS, arc)),
            label_at: (arc.sweep() >= MIN_LABEL_SWEEP)
                .then(|| point_on_circle(center, center, RADIUS * 0.62, arc.mid())),
        })
        .collect()
}

#[component]
pub fn PieChartView(state: ChartState<PieChart>) -> Element {
    let title = match &state {
        ChartState::Ready(chart) | ChartState::Empty(chart) => Some(chart.title.clone()),
        _ => None,
    };
    let total = match &state {
        ChartState::Ready(chart) => Some(chart.total()),
        _ => None,
    };

    let body = status_body(&state).unwrap_or_else(|| {
        let ChartState::Ready(chart) = &state else {
            return rsx! {};
        };
        let wedges = wedges(chart);
        rsx! {
            div { class: "chart-card__body",
                svg {
                    class: "pie-chart",
                    view_box: "0 0 {SIZE} {SIZE}",
                    role: "img",
                    for wedge in wedges.iter().filter(|w| w.value > 0) {
                        g { key: "{wedge.label}",
                            title { "{wedge.label}: {wedge.value} ({wedge.share})" }
                            if let Some(outline) = &wedge.path {
                                path { d: "{outline}", fill: wedge.color, class: "pie-chart__wedge" }
                            } else {
                                circle {
                                    cx: SIZE / 2.0,
                                    cy: SIZE / 2.0,
                                    r: RADIUS,
                                    fill: wedge.color,
                                    class: "pie-chart__wedge",
                                }
                            }
                            if let Some((x, y)) = wedge.label_at {
                                text {
                                    class: "pie-chart__share",
                                    x: "{x:.1}",
                                    y: "{y:.1}",
                                    text_anchor: "middle",
                                    dominant_baseline: "middle",
                                    "{wedge.share}"
                                }
                            }
                        }
                    }
                }
                ul { class: "chart-legend",
                    for wedge in wedges.iter() {
                        li { key: "{wedge.label}", class: "chart-legend__item",
                            span {
                                class: "chart-legend__swatch",
                                style: "background: {wedge.color}",
                            }
                            span { class: "chart-legend__label", "{wedge.label}" }
                            span { class: "chart-legend__value", "{wedge.value} · {wedge.share}" }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        section {
            class: "results-card chart-card chart-card--pie",
            aria_label: t!("chart-pie-region"),
            div { class: "results-card__header",
                h2 { class: "chart-card__title", {title.unwrap_or_default()} }
                if let Some(total) = total {
                    span { class: "results-card__meta", {t!("legend-total", count = total)} }
                }
            }
            {body}
        }
    }
}
