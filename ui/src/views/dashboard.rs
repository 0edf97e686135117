use api::{
    ChartTarget, ControlEvent, ControlState, PieChart, ScatterChart, SiteOption, SliderSettings,
    ALL_SITES,
};
use dioxus::logger::tracing::{debug, warn};
use dioxus::prelude::*;

use crate::charts::{server_message, ChartState, PieChartView, ScatterChartView};
use crate::components::DashboardHeader;
use crate::controls::{
    requests_for, seed_from_slider, PayloadSlider, PieRequest, ScatterRequest, SiteSelect,
};
use crate::{i18n, t};

const THEME_CSS: Asset = asset!("/assets/theme/main.css");

#[component]
pub fn Dashboard() -> Element {
    i18n::init();

    let lang_code: Option<Signal<String>> = try_use_context::<Signal<String>>();
    // Re-render (and re-fetch localized options) when the language changes.
    let _lang_marker = lang_code.map(|code| code()).unwrap_or_default();

    let mut controls = use_signal(ControlState::default);
    let mut pie_request = use_signal(|| PieRequest::from(&*controls.peek()));
    // No scatter request until the slider settings have seeded the range.
    let mut scatter_request = use_signal(|| None::<ScatterRequest>);

    let dispatch = use_callback(move |event: ControlEvent| {
        debug!(?event, "control event");
        let targets: Vec<ChartTarget> = controls.write().apply(event);
        let (pie, scatter) = requests_for(&controls.peek(), &targets);
        if let Some(request) = pie {
            pie_request.set(request);
        }
        if let Some(request) = scatter {
            if scatter_request.peek().is_some() {
                scatter_request.set(Some(request));
            }
        }
    });

    let options = use_resource(move || {
        let _ = lang_code.map(|code| code());
        let all_label = t!("site-all");
        async move { api::fetch_site_options(all_label).await }
    });
    let slider = use_resource(|| async { api::fetch_slider_settings().await });
    let bounds = use_resource(|| async { api::fetch_payload_bounds().await });

    use_effect(move || {
        let Some(result) = slider.cloned() else {
            return;
        };
        if scatter_request.peek().is_some() {
            return;
        }
        let settings = result.unwrap_or_else(|err| {
            warn!(request = "slider settings", "{err}; using built-in slider");
            SliderSettings::default()
        });
        let request = seed_from_slider(&mut controls.write(), &settings);
        scatter_request.set(Some(request));
    });

    let pie = use_resource(move || {
        let request = pie_request();
        async move {
            let result = api::fetch_pie_chart(request.site).await;
            if let Err(err) = &result {
                warn!(chart = "pie", "{err}");
            }
            result
        }
    });
    let scatter = use_resource(move || {
        let request = scatter_request();
        async move {
            let Some(request) = request else {
                return std::future::pending().await;
            };
            let result = api::fetch_scatter_chart(request.site, request.low, request.high).await;
            if let Err(err) = &result {
                warn!(chart = "scatter", "{err}");
            }
            result
        }
    });

    let state = controls();
    let (site_options, options_error) = match options.cloned() {
        Some(Ok(list)) => (list, None),
        Some(Err(err)) => (all_sites_only(), Some(server_message(&err))),
        None => (all_sites_only(), None),
    };
    let slider_settings: SliderSettings = slider.cloned().and_then(Result::ok).unwrap_or_default();
    let payload_bounds = bounds.cloned().and_then(Result::ok).flatten();
    let pie_state: ChartState<PieChart> = ChartState::from_resource(pie.cloned());
    let scatter_state: ChartState<ScatterChart> = ChartState::from_resource(scatter.cloned());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_CSS }

        DashboardHeader {}

        main { class: "page dashboard",
            section { class: "results-card dashboard__controls",
                SiteSelect {
                    options: site_options,
                    selected: state.site.value().to_string(),
                    onselect: move |site| dispatch.call(ControlEvent::SiteSelected(site)),
                }
                if let Some(message) = options_error {
                    p {
                        class: "results-card__meta results-card__meta--error",
                        role: "alert",
                        {t!("options-error", message = message)}
                    }
                }
            }

            div { class: "dashboard__chart dashboard__chart--pie",
                PieChartView { state: pie_state }
            }

            section { class: "results-card dashboard__controls",
                PayloadSlider {
                    settings: slider_settings,
                    range: state.payload,
                    bounds: payload_bounds,
                    onchange: move |range| dispatch.call(ControlEvent::PayloadRangeChanged(range)),
                }
            }

            div { class: "dashboard__chart dashboard__chart--scatter",
                ScatterChartView { state: scatter_state }
            }
        }
    }
}

/// Selector contents before (or without) the server's list.
fn all_sites_only() -> Vec<SiteOption> {
    vec![SiteOption {
        label: t!("site-all"),
        value: ALL_SITES.to_string(),
    }]
}
