use dioxus::prelude::*;

use crate::components::{CmsLink, HeaderNav, LocaleSwitcher};
use crate::core::link::Appearance;
use crate::core::localized;
use crate::core::source::{content, site_config};
use crate::t;

// Header stylesheet (inlined as well for native release builds)
const HEADER_CSS: Asset = asset!("/assets/styling/header.css");
const HEADER_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/header.css"
));

/// Site header: brand, primary navigation, locale switcher and CTA.
///
/// Header content is looked up per locale on every render, so a locale
/// switch re-renders it with the new language.
#[component]
pub fn SiteHeader(locale: String, current_path: String) -> Element {
    let header = content().header(&locale).unwrap_or_default();
    let fallback = &site_config().fallback_locale;
    let brand = match localized::resolve(header.brand_title.as_ref(), &locale, fallback) {
        title if title.is_empty() => "Forge.".to_string(),
        title => title,
    };
    let home_label = t!("brand-home-label");
    let home = format!("/{locale}");

    rsx! {
        document::Link { rel: "stylesheet", href: HEADER_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{HEADER_CSS_INLINE}" }
        }

        header { id: "site-header", class: "site-header",
            div { class: "site-header__inner",
                Link {
                    to: home,
                    class: "site-header__brand",
                    aria_label: "{home_label}",
                    "{brand}"
                }

                HeaderNav { header: header.clone(), locale: locale.clone() }

                div { class: "site-header__actions",
                    LocaleSwitcher { locale: locale.clone(), current_path }
                    if let Some(cta) = header.header_cta.clone() {
                        CmsLink {
                            link: cta,
                            locale: locale.clone(),
                            appearance: Appearance::Primary,
                            class: "site-header__cta",
                        }
                    }
                }
            }
        }
    }
}
