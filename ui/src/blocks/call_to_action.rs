use dioxus::prelude::*;

use crate::components::CmsLink;
use crate::core::content::CallToActionBlock;

#[component]
pub fn CallToAction(block: CallToActionBlock, locale: String) -> Element {
    if block.links.is_empty() {
        return rsx! {};
    }

    rsx! {
        section { class: "block-cta",
            div { class: "block-cta__links",
                for (index, link) in block.links.into_iter().enumerate() {
                    CmsLink { key: "{index}", link, locale: locale.clone() }
                }
            }
        }
    }
}
