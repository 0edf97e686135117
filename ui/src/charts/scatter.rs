use api::ScatterChart;
use dioxus::prelude::*;

use super::geometry::{padded_domain, ticks, LinearScale};
use super::{palette, status_body, ChartState};
use crate::{core::format, t};

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 360.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 52.0;
const POINT_RADIUS: f64 = 6.0;

/// Outcome classes are 0 and 1; leave air above and below them.
const Y_DOMAIN: (f64, f64) = (-0.25, 1.25);
const X_PAD: f64 = 0.05;
const X_FALLBACK_SPAN: f64 = 1_000.0;
const X_TICK_COUNT: usize = 5;
const X_TICK_STEP: f64 = 100.0;

#[derive(Clone, PartialEq)]
struct Marker {
    x: f64,
    y: f64,
    color: &'static str,
    tooltip: String,
}

#[derive(Clone, PartialEq)]
struct Layout {
    markers: Vec<Marker>,
    x_ticks: Vec<(f64, String)>,
    y_ticks: Vec<(f64, String)>,
    legend: Vec<(String, &'static str)>,
}

fn layout(chart: &ScatterChart) -> Layout {
    let x_domain = padded_domain(chart.points().map(|p| p.payload_mass_kg), X_PAD, X_FALLBACK_SPAN);
    let x = LinearScale::new(x_domain, (MARGIN_LEFT, WIDTH - MARGIN_RIGHT));
    let y = LinearScale::new(Y_DOMAIN, (HEIGHT - MARGIN_BOTTOM, MARGIN_TOP));

    let mut markers = Vec::with_capacity(chart.point_count());
    let mut legend = Vec::with_capacity(chart.series.len());
    for (idx, series) in chart.series.iter().enumerate() {
        let color = palette::booster_color(&series.name, idx);
        legend.push((series.name.clone(), color));
        markers.extend(series.points.iter().map(|point| Marker {
            x: x.map(point.payload_mass_kg),
            y: y.map(f64::from(point.outcome)),
            color,
            tooltip: format!(
                "{} · {} · {} kg · class {}",
                series.name,
                point.launch_site,
                format::format_kg(point.payload_mass_kg),
                point.outcome
            ),
        }));
    }

    let (lo, hi) = x.domain();
    let x_ticks = ticks(lo, hi, X_TICK_COUNT, X_TICK_STEP)
        .into_iter()
        .map(|value| (x.map(value), format::format_kg(value)))
        .collect();
    let y_ticks = [0.0, 1.0]
        .into_iter()
        .map(|value| (y.map(value), format!("{value:.0}")))
        .collect();

    Layout {
        markers,
        x_ticks,
        y_ticks,
        legend,
    }
}

#[component]
pub fn ScatterChartView(state: ChartState<ScatterChart>) -> Element {
    let title = match &state {
        ChartState::Ready(chart) | ChartState::Empty(chart) => Some(chart.title.clone()),
        _ => None,
    };

    let body = status_body(&state).unwrap_or_else(|| {
        let ChartState::Ready(chart) = &state else {
            return rsx! {};
        };
        let Layout {
            markers,
            x_ticks,
            y_ticks,
            legend,
        } = layout(chart);
        let plot_bottom = HEIGHT - MARGIN_BOTTOM;
        let plot_right = WIDTH - MARGIN_RIGHT;

        rsx! {
            div { class: "chart-card__body chart-card__body--wide",
                svg {
                    class: "scatter-chart",
                    view_box: "0 0 {WIDTH} {HEIGHT}",
                    role: "img",
                    g { class: "scatter-chart__axis",
                        line { x1: MARGIN_LEFT, y1: plot_bottom, x2: plot_right, y2: plot_bottom }
                        line { x1: MARGIN_LEFT, y1: MARGIN_TOP, x2: MARGIN_LEFT, y2: plot_bottom }
                        for (pos, label) in x_ticks.iter() {
                            g { key: "x{label}",
                                line {
                                    class: "scatter-chart__grid",
                                    x1: *pos,
                                    y1: MARGIN_TOP,
                                    x2: *pos,
                                    y2: plot_bottom,
                                }
                                text {
                                    x: *pos,
                                    y: plot_bottom + 18.0,
                                    text_anchor: "middle",
                                    "{label}"
                                }
                            }
                        }
                        for (pos, label) in y_ticks.iter() {
                            g { key: "y{label}",
                                line {
                                    class: "scatter-chart__grid",
                                    x1: MARGIN_LEFT,
                                    y1: *pos,
                                    x2: plot_right,
                                    y2: *pos,
                                }
                                text {
                                    x: MARGIN_LEFT - 10.0,
                                    y: *pos,
                                    text_anchor: "end",
                                    dominant_baseline: "middle",
                                    "{label}"
                                }
                            }
                        }
                        text {
                            class: "scatter-chart__axis-label",
                            x: (MARGIN_LEFT + plot_right) / 2.0,
                            y: HEIGHT - 10.0,
                            text_anchor: "middle",
                            "{chart.x_label}"
                        }
                        text {
                            class: "scatter-chart__axis-label",
                            transform: "rotate(-90)",
                            x: -(MARGIN_TOP + plot_bottom) / 2.0,
                            y: 18.0,
                            text_anchor: "middle",
                            "{chart.y_label}"
                        }
                    }
                    g { class: "scatter-chart__points",
                        for (idx, marker) in markers.iter().enumerate() {
                            circle {
                                key: "{idx}",
                                class: "scatter-chart__point",
                                cx: "{marker.x:.1}",
                                cy: "{marker.y:.1}",
                                r: POINT_RADIUS,
                                fill: marker.color,
                                title { "{marker.tooltip}" }
                            }
                        }
                    }
                }
                ul { class: "chart-legend",
                    for (name, color) in legend.iter() {
                        li { key: "{name}", class: "chart-legend__item",
                            span { class: "chart-legend__swatch", style: "background: {color}" }
                            span { class: "chart-legend__label", "{name}" }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        section {
            class: "results-card chart-card chart-card--scatter",
            aria_label: t!("chart-scatter-region"),
            div { class: "results-card__header",
                h2 { class: "chart-card__title", {title.unwrap_or_default()} }
            }
            {body}
        }
    }
}
