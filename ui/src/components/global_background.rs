use dioxus::prelude::*;

use crate::components::Media;
use crate::core::source::content;

/// Site-wide media fixed behind every page, darkened by a scrim so blocks
/// stay readable without their own backdrop. Renders nothing when the
/// settings carry no background.
#[component]
pub fn GlobalBackground(locale: String) -> Element {
    let Some(media) = content().settings().background else {
        return rsx! {};
    };

    rsx! {
        div { class: "global-background", aria_hidden: "true",
            Media { media, locale, class: "global-background__media" }
        }
        div { class: "global-background__scrim" }
        div { class: "global-background__fade global-background__fade--top" }
        div { class: "global-background__fade global-background__fade--bottom" }
    }
}
