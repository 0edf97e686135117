use api::{PayloadBounds, PayloadRange, SliderSettings};
use dioxus::prelude::*;

use crate::{core::format, t};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handle {
    Low,
    High,
}

/// Clamp `value` into the slider's extent and snap it to the step grid.
pub fn snap(value: f64, settings: &SliderSettings) -> f64 {
    let clamped = value.clamp(settings.min, settings.max);
    if settings.step <= 0.0 {
        return clamped;
    }
    let steps = ((clamped - settings.min) / settings.step).round();
    (settings.min + steps * settings.step).min(settings.max)
}

/// Move one handle. A handle dragged past the other stops at it.
pub fn move_handle(
    range: PayloadRange,
    handle: Handle,
    value: f64,
    settings: &SliderSettings,
) -> PayloadRange {
    let value = snap(value, settings);
    match handle {
        Handle::Low => PayloadRange::new(value.min(range.high()), range.high()),
        Handle::High => PayloadRange::new(range.low(), value.max(range.low())),
    }
}

/// Position of `value` along the track, in percent.
fn track_percent(value: f64, settings: &SliderSettings) -> f64 {
    let span = settings.max - settings.min;
    if span <= 0.0 {
        return 0.0;
    }
    ((value - settings.min) / span * 100.0).clamp(0.0, 100.0)
}

#[component]
pub fn PayloadSlider(
    settings: SliderSettings,
    range: PayloadRange,
    #[props(!optional)] bounds: Option<PayloadBounds>,
    onchange: EventHandler<PayloadRange>,
) -> Element {
    // Follows the thumbs while dragging; committed through `onchange` on release.
    let mut draft = use_signal(|| range);
    // A new committed range from the parent (e.g. the configured defaults
    // arriving) replaces the draft.
    use_effect(use_reactive!(|range| draft.set(range)));
    let current = draft();

    let drag = {
        let settings = settings.clone();
        move |handle: Handle, raw: String| {
            if let Ok(value) = raw.parse::<f64>() {
                let next = move_handle(*draft.peek(), handle, value, &settings);
                draft.set(next);
            }
        }
    };
    let mut drag_low = drag.clone();
    let mut drag_high = drag;
    let commit = move |_: FormEvent| onchange.call(*draft.peek());

    let fill_left = track_percent(current.low(), &settings);
    let fill_width = track_percent(current.high(), &settings) - fill_left;
    let (low_value, high_value) = (current.low(), current.high());
    let marks: Vec<(String, f64)> = settings
        .marks
        .iter()
        .map(|&mark| (format::format_kg(mark), track_percent(mark, &settings)))
        .collect();
    let low_text = format::format_kg(current.low());
    let high_text = format::format_kg(current.high());
    let observed = match bounds {
        Some(b) => t!(
            "payload-observed",
            min = format::format_kg(b.min),
            max = format::format_kg(b.max)
        ),
        None => t!("payload-observed-none"),
    };

    rsx! {
        div { class: "control control--payload",
            div { class: "control__label-row",
                span { class: "control__label", {t!("payload-label")} }
                span { class: "control__value",
                    {t!("payload-selected", low = low_text, high = high_text)}
                }
            }
            div { class: "range-slider",
                div { class: "range-slider__track" }
                div {
                    class: "range-slider__fill",
                    style: "left: {fill_left:.2}%; width: {fill_width:.2}%",
                }
                input {
                    id: "payload-slider-low",
                    class: "range-slider__input range-slider__input--low",
                    r#type: "range",
                    min: "{settings.min}",
                    max: "{settings.max}",
                    step: "{settings.step}",
                    value: "{low_value}",
                    aria_label: t!("payload-low-label"),
                    oninput: move |evt| drag_low(Handle::Low, evt.value()),
                    onchange: commit,
                }
                input {
                    id: "payload-slider-high",
                    class: "range-slider__input range-slider__input--high",
                    r#type: "range",
                    min: "{settings.min}",
                    max: "{settings.max}",
                    step: "{settings.step}",
                    value: "{high_value}",
                    aria_label: t!("payload-high-label"),
                    oninput: move |evt| drag_high(Handle::High, evt.value()),
                    onchange: commit,
                }
            }
            div { class: "range-slider__marks",
                for (label, left) in marks {
                    span {
                        key: "{label}",
                        class: "range-slider__mark",
                        style: "left: {left:.2}%",
                        "{label}"
                    }
                }
            }
            p { class: "control__hint", "{observed}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> SliderSettings {
        SliderSettings {
            min: 0.0,
            max: 10_000.0,
            step: 100.0,
            marks: vec![0.0, 2500.0, 5000.0, 7500.0, 10_000.0],
            default_low: 3000.0,
            default_high: 5000.0,
        }
    }

    #[test]
    fn values_snap_to_the_step_grid_and_extent() {
        let s = settings();
        assert_eq!(snap(3049.0, &s), 3000.0);
        assert_eq!(snap(3051.0, &s), 3100.0);
        assert_eq!(snap(-40.0, &s), 0.0);
        assert_eq!(snap(12_345.0, &s), 10_000.0);
    }

    #[test]
    fn handles_cannot_cross() {
        let s = settings();
        let range = PayloadRange::new(3000.0, 5000.0);

        let low = move_handle(range, Handle::Low, 7200.0, &s);
        assert_eq!((low.low(), low.high()), (5000.0, 5000.0));

        let high = move_handle(range, Handle::High, 1000.0, &s);
        assert_eq!((high.low(), high.high()), (3000.0, 3000.0));
    }

    #[test]
    fn moving_one_handle_leaves_the_other() {
        let s = settings();
        let range = PayloadRange::new(3000.0, 5000.0);
        let moved = move_handle(range, Handle::High, 8800.0, &s);
        assert_eq!((moved.low(), moved.high()), (3000.0, 8800.0));
    }

    #[test]
    fn track_positions_are_percentages() {
        let s = settings();
        assert_eq!(track_percent(2500.0, &s), 25.0);
        assert_eq!(track_percent(20_000.0, &s), 100.0);
    }
}
