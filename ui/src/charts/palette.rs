//! Chart colours.

const SERIES: [&str; 8] = [
    "#4c78a8", "#f58518", "#54a24b", "#e45756", "#72b7b2", "#b279a2", "#eeca3b", "#9d755d",
];

/// Known booster categories keep one colour however the scatter is filtered.
const BOOSTERS: [(&str, &str); 5] = [
    ("v1.0", "#4c78a8"),
    ("v1.1", "#f58518"),
    ("FT", "#54a24b"),
    ("B4", "#e45756"),
    ("B5", "#72b7b2"),
];

pub const SUCCEED: &str = "#54a24b";
pub const FAILED: &str = "#e45756";

pub fn by_index(index: usize) -> &'static str {
    SERIES[index % SERIES.len()]
}

pub fn booster_color(category: &str, index: usize) -> &'static str {
    BOOSTERS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or_else(|| by_index(index))
}

/// Outcome slices get fixed semantic colours; site slices cycle the palette.
pub fn slice_color(label: &str, index: usize) -> &'static str {
    match label {
        api::resolve::LABEL_SUCCEED => SUCCEED,
        api::resolve::LABEL_FAILED => FAILED,
        _ => by_index(index),
    }
}
