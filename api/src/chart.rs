//! Chart specifications produced by the resolvers.
//!
//! These are plain data: the UI crate decides how to draw them. A new value is
//! built for every control change; nothing here is ever patched in place.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChart {
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    /// True when there is nothing to draw (no slices, or all of them zero).
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    pub fn value_of(&self, label: &str) -> Option<u32> {
        self.slices
            .iter()
            .find(|slice| slice.label == label)
            .map(|slice| slice.value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub payload_mass_kg: f64,
    /// Outcome class, 0 or 1.
    pub outcome: u8,
    pub launch_site: String,
}

/// Points sharing one booster version category (one colour).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterSeries {
    pub name: String,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChart {
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|series| series.points.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.point_count() == 0
    }

    pub fn points(&self) -> impl Iterator<Item = &ScatterPoint> {
        self.series.iter().flat_map(|series| series.points.iter())
    }
}
