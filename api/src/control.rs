//! Control state and the dispatch that decides which charts to recompute.
//!
//! A user interaction becomes a [`ControlEvent`]. Applying it to the
//! [`ControlState`] yields the set of charts whose inputs actually changed:
//! the pie depends on the site only, the scatter on site and payload range.

use serde::{Deserialize, Serialize};

use crate::config::SliderSettings;
use crate::resolve::{PayloadRange, SiteSelection};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartTarget {
    Pie,
    Scatter,
}

impl ChartTarget {
    /// Which charts read a given control.
    fn dependents_of(control: ControlField) -> &'static [ChartTarget] {
        match control {
            ControlField::Site => &[ChartTarget::Pie, ChartTarget::Scatter],
            ControlField::PayloadRange => &[ChartTarget::Scatter],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ControlField {
    Site,
    PayloadRange,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ControlEvent {
    SiteSelected(SiteSelection),
    PayloadRangeChanged(PayloadRange),
}

impl ControlEvent {
    fn field(&self) -> ControlField {
        match self {
            ControlEvent::SiteSelected(_) => ControlField::Site,
            ControlEvent::PayloadRangeChanged(_) => ControlField::PayloadRange,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    pub site: SiteSelection,
    pub payload: PayloadRange,
}

impl Default for ControlState {
    fn default() -> Self {
        Self::from_slider(&SliderSettings::default())
    }
}

impl ControlState {
    /// Starting controls for a given slider: all sites, and the slider's
    /// default range kept inside its extent.
    pub fn from_slider(settings: &SliderSettings) -> Self {
        let ceiling = settings.max.max(settings.min);
        let clamp = |value: f64| value.clamp(settings.min, ceiling);
        Self {
            site: SiteSelection::All,
            payload: PayloadRange::new(clamp(settings.default_low), clamp(settings.default_high)),
        }
    }

    /// Apply an event and return the charts that must be re-resolved.
    ///
    /// An event that leaves the state unchanged affects nothing.
    pub fn apply(&mut self, event: ControlEvent) -> Vec<ChartTarget> {
        let field = event.field();
        let changed = match event {
            ControlEvent::SiteSelected(site) => {
                let changed = self.site != site;
                self.site = site;
                changed
            }
            ControlEvent::PayloadRangeChanged(range) => {
                let changed = self.payload != range;
                self.payload = range;
                changed
            }
        };

        if changed {
            ChartTarget::dependents_of(field).to_vec()
        } else {
            Vec::new()
        }
    }
}
