//! Localization of the dashboard chrome.
//!
//! Built on `i18n-embed` (language selection), `fluent` (formatting),
//! `rust-embed` (the `.ftl` files are compiled in) and `i18n-embed-fl`
//! (`fl!` lookups checked at compile time).
//!
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/launchdash-ui.ftl   (fallback/reference)
//!   es-ES/launchdash-ui.ftl
//! ```
//!
//! Only UI chrome goes through here. Chart titles and slice labels come from
//! the resolvers verbatim.
//!
//! To add a locale, copy `en-US/launchdash-ui.ftl` to `i18n/<lang-id>/`,
//! translate the values (keep IDs and placeholders) and run the tests.
use std::sync::Once;

use dioxus::logger::tracing::warn;
use i18n_embed::fluent::FluentLanguageLoader;
use i18n_embed::LanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl;

/// Translation macro routed through the shared [`LOADER`].
///
/// ```ignore
/// t!("dashboard-title")
/// t!("legend-total", count = 4)
/// ```
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent domain; the fallback file is `i18n/en-US/{DOMAIN}.ftl`. Must match
/// `domain` in `i18n.toml`, which is what `fl!` checks keys against.
const DOMAIN: &str = "launchdash-ui";

pub const FALLBACK_LANGUAGE: &str = "en-US";

#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = FALLBACK_LANGUAGE.parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Load the bundles for the requested languages (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!("Failed selecting languages ({err}); continuing with fallback");
        }
    });
}

/// Switch language at runtime. Unparsable tags are ignored.
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let Ok(lang) = tag.parse::<LanguageIdentifier>() else {
        return Ok(());
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Tag of the language the loader is serving now. After [`init`] this is
/// whatever the OS or browser request resolved to, not necessarily the fallback.
pub fn current_language() -> String {
    LOADER.current_language().to_string()
}

/// Embedded language tags, sorted.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(str::to_string))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
