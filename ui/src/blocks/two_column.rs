use dioxus::prelude::*;

use crate::components::CmsLink;
use crate::core::content::TwoColumnTextCtaBlock;
use crate::core::source::site_config;

/// Heading on the left; body copy and links on the right.
#[component]
pub fn TwoColumnTextCta(block: TwoColumnTextCtaBlock, locale: String) -> Element {
    let fallback = &site_config().fallback_locale;
    let title = block.left_title.resolve(&locale, fallback);
    let body = block.right_text.resolve(&locale, fallback);
    let paragraphs: Vec<String> = body
        .split("\n\n")
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect();

    rsx! {
        section { class: "block-two-column",
            h2 { class: "block-two-column__title", "{title}" }
            div { class: "block-two-column__body",
                for (index, paragraph) in paragraphs.into_iter().enumerate() {
                    p { key: "{index}", "{paragraph}" }
                }
                if !block.links.is_empty() {
                    div { class: "block-two-column__links",
                        for (index, link) in block.links.into_iter().enumerate() {
                            CmsLink { key: "{index}", link, locale: locale.clone() }
                        }
                    }
                }
            }
        }
    }
}
