//! Data layer and server functions for the launch records dashboard.
//!
//! The dataset is loaded once on the server ([`bootstrap`]); the UI reaches it
//! only through the server functions below, which hand back freshly resolved
//! chart specifications.

use dioxus::prelude::*;

pub mod chart;
pub mod config;
pub mod control;
pub mod dataset;
pub mod error;
pub mod resolve;
#[cfg_attr(not(feature = "server"), allow(dead_code))]
mod state;

pub use chart::{PieChart, PieSlice, ScatterChart, ScatterPoint, ScatterSeries};
pub use config::{DashboardConfig, SliderSettings};
pub use control::{ChartTarget, ControlEvent, ControlState};
pub use dataset::{Dataset, LaunchRecord, Outcome, PayloadBounds};
pub use error::DatasetError;
pub use resolve::{PayloadRange, SiteOption, SiteSelection, ALL_SITES};
pub use state::{bootstrap, install};

/// Selector options; `all_label` is the (localized) text for the ALL entry.
#[server]
pub async fn fetch_site_options(all_label: String) -> Result<Vec<SiteOption>, ServerFnError> {
    state::with_dataset("site options", |dataset| {
        resolve::site_options(dataset, &all_label)
    })
}

#[server]
pub async fn fetch_payload_bounds() -> Result<Option<PayloadBounds>, ServerFnError> {
    state::with_dataset("payload bounds", Dataset::payload_bounds)
}

#[server]
pub async fn fetch_slider_settings() -> Result<SliderSettings, ServerFnError> {
    Ok(state::config().slider())
}

#[server]
pub async fn fetch_pie_chart(site: String) -> Result<PieChart, ServerFnError> {
    let selection = SiteSelection::from_value(&site);
    state::with_dataset("pie chart", |dataset| {
        resolve::pie_chart(dataset, &selection)
    })
}

#[server]
pub async fn fetch_scatter_chart(
    site: String,
    low: f64,
    high: f64,
) -> Result<ScatterChart, ServerFnError> {
    let selection = SiteSelection::from_value(&site);
    let range = PayloadRange::new(low, high);
    state::with_dataset("scatter chart", |dataset| {
        resolve::scatter_chart(dataset, &selection, range)
    })
}
