//! Pure geometry for the SVG charts: pie arcs and linear axis scales.
//!
//! Angles are in radians, measured clockwise from twelve o'clock, which is
//! how SVG's y-down coordinate system makes a pie read naturally.

use std::f64::consts::{FRAC_PI_2, TAU};

const FULL_CIRCLE_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliceArc {
    pub start: f64,
    pub end: f64,
}

impl SliceArc {
    pub fn sweep(&self) -> f64 {
        self.end - self.start
    }

    /// A slice holding the whole total cannot be drawn as a single arc path.
    pub fn is_full_circle(&self) -> bool {
        self.sweep() >= TAU - FULL_CIRCLE_EPSILON
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// One arc per value, in order, sharing the full turn proportionally.
/// Returns nothing when the values sum to zero.
pub fn slice_arcs(values: &[u32]) -> Vec<SliceArc> {
    let total: u64 = values.iter().map(|&v| u64::from(v)).sum();
    if total == 0 {
        return Vec::new();
    }

    let mut start = 0.0;
    values
        .iter()
        .map(|&value| {
            let end = start + TAU * value as f64 / total as f64;
            let arc = SliceArc { start, end };
            start = end;
            arc
        })
        .collect()
}

pub fn point_on_circle(cx: f64, cy: f64, r: f64, angle: f64) -> (f64, f64) {
    let theta = angle - FRAC_PI_2;
    (cx + r * theta.cos(), cy + r * theta.sin())
}

/// SVG path for a pie wedge centred on `(cx, cy)`.
pub fn arc_path(cx: f64, cy: f64, r: f64, arc: SliceArc) -> String {
    let (x0, y0) = point_on_circle(cx, cy, r, arc.start);
    let (x1, y1) = point_on_circle(cx, cy, r, arc.end);
    let large = if arc.sweep() > std::f64::consts::PI { 1 } else { 0 };
    format!(
        "M {cx:.2} {cy:.2} L {x0:.2} {y0:.2} A {r:.2} {r:.2} 0 {large} 1 {x1:.2} {y1:.2} Z"
    )
}

/// Maps a data interval onto a pixel interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span.abs() < f64::EPSILON {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / span * (r1 - r0)
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }
}

/// Data extent widened by `pad` of its span on both sides. A single value (or
/// no values) gets a window of `fallback` around it.
pub fn padded_domain(values: impl IntoIterator<Item = f64>, pad: f64, fallback: f64) -> (f64, f64) {
    let (lo, hi) = values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if lo > hi {
        return (0.0, fallback);
    }
    let span = hi - lo;
    if span < f64::EPSILON {
        return ((lo - fallback / 2.0).max(0.0), lo + fallback / 2.0);
    }
    ((lo - span * pad).max(0.0), hi + span * pad)
}

/// `count` evenly spaced tick values across `[lo, hi]`, rounded to `step`.
pub fn ticks(lo: f64, hi: f64, count: usize, step: f64) -> Vec<f64> {
    if count < 2 || hi <= lo {
        return vec![lo];
    }
    let mut out: Vec<f64> = (0..count)
        .map(|i| lo + (hi - lo) * i as f64 / (count - 1) as f64)
        .map(|v| if step > 0.0 { (v / step).round() * step } else { v })
        .collect();
    out.dedup();
    out
}
