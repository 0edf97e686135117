use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const DATA_PATH_VAR: &str = "LAUNCHDASH_DATA";
pub const SLIDER_MAX_VAR: &str = "LAUNCHDASH_SLIDER_MAX";

pub const DEFAULT_DATA_PATH: &str = "spacex_launch_dash.csv";

pub const SLIDER_MIN: f64 = 0.0;
pub const SLIDER_MAX: f64 = 10_000.0;
pub const SLIDER_STEP: f64 = 100.0;
pub const DEFAULT_PAYLOAD_LOW: f64 = 3_000.0;
pub const DEFAULT_PAYLOAD_HIGH: f64 = 5_000.0;

/// Everything the client needs to draw the payload slider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SliderSettings {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
    pub default_low: f64,
    pub default_high: f64,
}

impl Default for SliderSettings {
    fn default() -> Self {
        DashboardConfig::default().slider()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub slider_max: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            slider_max: SLIDER_MAX,
        }
    }
}

impl DashboardConfig {
    /// Read overrides from the environment; unset or unparsable values fall
    /// back to the defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let data_path = lookup(DATA_PATH_VAR)
            .filter(|value| !value.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.data_path);
        let slider_max = lookup(SLIDER_MAX_VAR)
            .and_then(|value| value.trim().parse::<f64>().ok())
            .filter(|max| max.is_finite() && *max > SLIDER_MIN)
            .unwrap_or(defaults.slider_max);

        Self {
            data_path,
            slider_max,
        }
    }

    /// Evenly spaced slider marks, always including both ends.
    pub fn slider_marks(&self) -> Vec<f64> {
        (0..=4)
            .map(|i| SLIDER_MIN + (self.slider_max - SLIDER_MIN) * i as f64 / 4.0)
            .collect()
    }

    pub fn slider(&self) -> SliderSettings {
        SliderSettings {
            min: SLIDER_MIN,
            max: self.slider_max,
            step: SLIDER_STEP,
            marks: self.slider_marks(),
            default_low: DEFAULT_PAYLOAD_LOW.min(self.slider_max),
            default_high: DEFAULT_PAYLOAD_HIGH.min(self.slider_max),
        }
    }
}
