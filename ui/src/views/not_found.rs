use dioxus::prelude::*;

use crate::core::source::site_config;
use crate::t;

#[component]
pub fn NotFound(#[props(default)] locale: String) -> Element {
    let home_locale = if locale.is_empty() {
        site_config().default_locale.clone()
    } else {
        locale
    };
    let title = t!("not-found-title");

    rsx! {
        document::Title { "{title}" }
        main { class: "page page--not-found",
            h1 { "{title}" }
            p { {t!("not-found-body")} }
            Link { to: format!("/{home_locale}"), class: "cms-link", {t!("not-found-home")} }
        }
    }
}
