use dioxus::prelude::*;

use crate::components::Media;
use crate::core::content::HeroBlock;
use crate::core::source::site_config;

/// Full-bleed title over an optional background image or video.
#[component]
pub fn Hero(block: HeroBlock, locale: String) -> Element {
    let title = block.title.resolve(&locale, &site_config().fallback_locale);

    rsx! {
        section { class: "block-hero",
            if let Some(media) = block.background {
                Media { media, locale: locale.clone(), class: "block-hero__background" }
            }
            div { class: "block-hero__content",
                h1 { class: "block-hero__title", "{title}" }
            }
        }
    }
}
