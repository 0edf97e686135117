//! SVG renderings of the resolver output, one card per chart region.

use api::{PieChart, ScatterChart};
use dioxus::prelude::*;

use crate::t;

pub mod geometry;
pub mod palette;

mod pie;
pub use pie::PieChartView;

mod scatter;
pub use scatter::ScatterChartView;

/// What a chart region currently shows. Each region owns one of these, so a
/// failure in one chart never blanks the other.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartState<T> {
    Loading,
    Ready(T),
    /// Resolved, but nothing matched the filters. The chart keeps its title.
    Empty(T),
    Error(String),
}

/// Chart specs that know whether they have anything to draw.
pub trait ChartSpec {
    fn is_blank(&self) -> bool;
}

impl ChartSpec for PieChart {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl ChartSpec for ScatterChart {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl<T: ChartSpec> ChartState<T> {
    /// Fold a server call's outcome (or its absence, while pending) into a state.
    pub fn from_resource(value: Option<Result<T, ServerFnError>>) -> Self {
        match value {
            None => ChartState::Loading,
            Some(Ok(chart)) if chart.is_blank() => ChartState::Empty(chart),
            Some(Ok(chart)) => ChartState::Ready(chart),
            Some(Err(err)) => ChartState::Error(server_message(&err)),
        }
    }
}

/// The human part of a server function error, without the transport prefix.
pub(crate) fn server_message(err: &ServerFnError) -> String {
    match err {
        ServerFnError::ServerError(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Placeholder body shared by both chart cards for the non-ready states.
fn status_body<T>(state: &ChartState<T>) -> Option<Element> {
    match state {
        ChartState::Loading => Some(rsx! {
            p { class: "results-card__placeholder chart-card__status", {t!("chart-loading")} }
        }),
        ChartState::Empty(_) => Some(rsx! {
            p { class: "results-card__placeholder chart-card__status", {t!("chart-empty")} }
        }),
        ChartState::Error(message) => Some(rsx! {
            p {
                class: "results-card__placeholder chart-card__status chart-card__status--error",
                role: "alert",
                {t!("chart-error", message = message.clone())}
            }
        }),
        ChartState::Ready(_) => None,
    }
}
