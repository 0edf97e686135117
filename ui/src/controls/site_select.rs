use api::{SiteOption, SiteSelection, ALL_SITES};
use dioxus::prelude::*;

use crate::t;

/// Options whose label contains `query` (case-insensitive). The all-sites
/// entry and the current selection are always kept so the dropdown never
/// loses its value.
pub fn filter_options(options: &[SiteOption], query: &str, selected: &str) -> Vec<SiteOption> {
    let needle = query.trim().to_lowercase();
    options
        .iter()
        .filter(|option| {
            needle.is_empty()
                || option.value == ALL_SITES
                || option.value == selected
                || option.label.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn SiteSelect(
    options: Vec<SiteOption>,
    selected: String,
    onselect: EventHandler<SiteSelection>,
) -> Element {
    let mut query = use_signal(String::new);
    let visible = filter_options(&options, &query(), &selected);

    rsx! {
        div { class: "control control--site",
            label { class: "control__label", r#for: "site-dropdown", {t!("site-label")} }
            div { class: "control__row",
                input {
                    id: "site-search",
                    class: "control__search",
                    r#type: "search",
                    autocomplete: "off",
                    placeholder: t!("site-search-placeholder"),
                    aria_label: t!("site-search-label"),
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                select {
                    id: "site-dropdown",
                    class: "control__select",
                    value: "{selected}",
                    onchange: move |evt| onselect.call(SiteSelection::from_value(&evt.value())),
                    for entry in visible {
                        option {
                            key: "{entry.value}",
                            value: "{entry.value}",
                            selected: entry.value == selected,
                            "{entry.label}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> Vec<SiteOption> {
        [
            ("All Sites", "ALL"),
            ("CCAFS LC-40", "CCAFS LC-40"),
            ("CCAFS SLC-40", "CCAFS SLC-40"),
            ("VAFB SLC-4E", "VAFB SLC-4E"),
            ("KSC LC-39A", "KSC LC-39A"),
        ]
        .into_iter()
        .map(|(label, value)| SiteOption {
            label: label.into(),
            value: value.into(),
        })
        .collect()
    }

    fn values(options: &[SiteOption]) -> Vec<&str> {
        options.iter().map(|option| option.value.as_str()).collect()
    }

    #[test]
    fn blank_query_keeps_everything() {
        assert_eq!(filter_options(&options(), "  ", "ALL"), options());
    }

    #[test]
    fn query_matches_case_insensitively() {
        let filtered = filter_options(&options(), "slc", "ALL");
        assert_eq!(values(&filtered), ["ALL", "CCAFS SLC-40", "VAFB SLC-4E"]);
    }

    #[test]
    fn current_selection_survives_a_non_matching_query() {
        let filtered = filter_options(&options(), "vafb", "KSC LC-39A");
        assert_eq!(values(&filtered), ["ALL", "VAFB SLC-4E", "KSC LC-39A"]);
    }

    #[test]
    fn all_entry_is_kept_even_when_nothing_matches() {
        let filtered = filter_options(&options(), "boca chica", "ALL");
        assert_eq!(values(&filtered), ["ALL"]);
    }
}
