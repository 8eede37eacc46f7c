use dioxus::prelude::*;
use tracing::{warn, Level};

use ui::components::{GlobalBackground, SiteHeader};
use ui::core::source::site_config;
use ui::i18n;
use ui::views::{NotFound, PageView, HOME_SLUG};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Home { locale: site_config().default_locale.clone() })]
    #[layout(SiteLayout)]
        #[route("/:locale")]
        Home { locale: String },
        #[route("/:locale/:slug")]
        Page { locale: String, slug: String },
    #[end_layout]
    #[route("/:..segments")]
    PageNotFound { segments: Vec<String> },
}

impl Route {
    /// Locale segment of the route, if it carries one.
    fn locale(&self) -> Option<&str> {
        match self {
            Route::Home { locale } | Route::Page { locale, .. } => Some(locale),
            Route::PageNotFound { .. } => None,
        }
    }
}

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    if let Err(err) = dioxus::logger::init(Level::INFO) {
        eprintln!("logger already initialised: {err}");
    }
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    i18n::init();

    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// Header above every localized route. Keeps the chrome bundle in step with
/// the locale in the URL.
#[component]
fn SiteLayout() -> Element {
    let route = use_route::<Route>();
    let config = site_config();
    let locale = match route.locale() {
        Some(locale) if config.supports(locale) => locale.to_string(),
        other => {
            warn!(locale = ?other, "route carries an unsupported locale");
            config.default_locale.clone()
        }
    };
    i18n::set_site_locale(&locale);
    let current_path = route.to_string();

    rsx! {
        GlobalBackground { locale: locale.clone() }
        SiteHeader { locale, current_path }
        Outlet::<Route> {}
    }
}

#[component]
fn Home(locale: String) -> Element {
    rsx! {
        PageView { locale, slug: HOME_SLUG.to_string() }
    }
}

#[component]
fn Page(locale: String, slug: String) -> Element {
    rsx! {
        PageView { locale, slug }
    }
}

#[component]
fn PageNotFound(segments: Vec<String>) -> Element {
    let locale = segments
        .first()
        .filter(|first| site_config().supports(first))
        .cloned()
        .unwrap_or_default();
    if !locale.is_empty() {
        i18n::set_site_locale(&locale);
    }

    rsx! {
        NotFound { locale }
    }
}
