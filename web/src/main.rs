use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
}

fn main() {
    #[cfg(feature = "server")]
    load_dataset();

    dioxus::launch(App);
}

/// Startup is fatal when the dataset cannot be read: the dashboard has
/// nothing to show without it.
#[cfg(feature = "server")]
fn load_dataset() {
    use dioxus::logger::tracing::error;

    dioxus::logger::initialize_default();
    let config = api::DashboardConfig::from_env();
    let path = config.data_path.clone();
    if let Err(err) = api::bootstrap(config) {
        error!(path = %path.display(), "Unable to load launch dataset: {err}");
        std::process::exit(1);
    }
}

#[component]
fn App() -> Element {
    ui::i18n::init();
    // Global language code; the header writes it, the dashboard re-renders on it.
    use_context_provider(|| Signal::new(ui::i18n::current_language()));

    rsx! {
        document::Title { "SpaceX Launch Records Dashboard" }
        Router::<Route> {}
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        Dashboard {}
    }
}
