//! Dashboard inputs and the per-chart requests they feed.

use api::{ChartTarget, ControlState, SliderSettings};

mod payload_slider;
pub use payload_slider::{move_handle, snap, Handle, PayloadSlider};

mod site_select;
pub use site_select::{filter_options, SiteSelect};

/// Arguments of one pie resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct PieRequest {
    pub site: String,
}

impl From<&ControlState> for PieRequest {
    fn from(state: &ControlState) -> Self {
        Self {
            site: state.site.value().to_string(),
        }
    }
}

/// Arguments of one scatter resolution.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterRequest {
    pub site: String,
    pub low: f64,
    pub high: f64,
}

impl From<&ControlState> for ScatterRequest {
    fn from(state: &ControlState) -> Self {
        Self {
            site: state.site.value().to_string(),
            low: state.payload.low(),
            high: state.payload.high(),
        }
    }
}

/// Fresh requests for exactly the charts named in `targets`.
pub fn requests_for(
    state: &ControlState,
    targets: &[ChartTarget],
) -> (Option<PieRequest>, Option<ScatterRequest>) {
    let mut pie = None;
    let mut scatter = None;
    for target in targets {
        match target {
            ChartTarget::Pie => pie = Some(PieRequest::from(state)),
            ChartTarget::Scatter => scatter = Some(ScatterRequest::from(state)),
        }
    }
    (pie, scatter)
}

/// Move the payload range to the slider's configured defaults and return the
/// scatter request for the resulting controls. The site is left as chosen.
pub fn seed_from_slider(state: &mut ControlState, settings: &SliderSettings) -> ScatterRequest {
    state.payload = ControlState::from_slider(settings).payload;
    ScatterRequest::from(&*state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::{ControlEvent, DashboardConfig, PayloadRange, SiteSelection};

    #[test]
    fn initial_requests_use_the_default_controls() {
        let state = ControlState::default();
        assert_eq!(PieRequest::from(&state).site, "ALL");
        assert_eq!(
            ScatterRequest::from(&state),
            ScatterRequest {
                site: "ALL".into(),
                low: 3000.0,
                high: 5000.0,
            }
        );
    }

    #[test]
    fn site_change_refreshes_both_charts() {
        let mut state = ControlState::default();
        let targets = state.apply(ControlEvent::SiteSelected(SiteSelection::from_value(
            "KSC LC-39A",
        )));
        let (pie, scatter) = requests_for(&state, &targets);
        assert_eq!(pie.map(|r| r.site).as_deref(), Some("KSC LC-39A"));
        assert_eq!(scatter.map(|r| r.site).as_deref(), Some("KSC LC-39A"));
    }

    #[test]
    fn payload_change_refreshes_only_the_scatter() {
        let mut state = ControlState::default();
        let targets = state.apply(ControlEvent::PayloadRangeChanged(PayloadRange::new(
            1000.0, 9000.0,
        )));
        let (pie, scatter) = requests_for(&state, &targets);
        assert!(pie.is_none());
        let scatter = scatter.expect("scatter request");
        assert_eq!((scatter.low, scatter.high), (1000.0, 9000.0));
    }

    #[test]
    fn unchanged_controls_request_nothing() {
        let mut state = ControlState::default();
        let targets = state.apply(ControlEvent::SiteSelected(SiteSelection::All));
        assert_eq!(requests_for(&state, &targets), (None, None));
    }

    #[test]
    fn seeded_scatter_request_stays_under_a_lowered_ceiling() {
        let settings = DashboardConfig {
            slider_max: 4000.0,
            ..DashboardConfig::default()
        }
        .slider();
        let mut state = ControlState::default();
        state.apply(ControlEvent::SiteSelected(SiteSelection::from_value("VAFB SLC-4E")));

        let request = seed_from_slider(&mut state, &settings);
        assert_eq!(
            request,
            ScatterRequest {
                site: "VAFB SLC-4E".into(),
                low: 3000.0,
                high: 4000.0,
            }
        );
        assert!(request.high <= settings.max);
        assert_eq!(state.payload.high(), 4000.0);
    }
}
