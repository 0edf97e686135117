use crate::i18n;
use crate::t;
use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

const HEADER_CSS: Asset = asset!("/assets/styling/header.css");

/// Page header: the dashboard title plus a locale switcher when more than one
/// locale is embedded.
///
/// If the platform provides a `Signal<String>` language code through context,
/// switching locale writes to it so everything reading it re-renders with
/// the new strings.
#[component]
pub fn DashboardHeader() -> Element {
    i18n::init();

    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();
    let _lang_marker = lang_code_ctx.as_ref().map(|c| c()).unwrap_or_default();

    let on_change = move |evt: FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(language = %val, "Unable to switch language: {err}"),
        }
    };

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }

        header {
            id: "dashboard-header",
            class: "dashboard-header",
            div { class: "dashboard-header__inner",
                div { class: "dashboard-header__brand",
                    h1 { class: "dashboard-header__title", {t!("dashboard-title")} }
                    span { class: "dashboard-header__subtitle", {t!("dashboard-subtitle")} }
                }

                if show_switcher {
                    div { class: "dashboard-header__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            for code in langs() {
                                option { key: "{code}", value: "{code}", "{code}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
