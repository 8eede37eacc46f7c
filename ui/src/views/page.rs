use dioxus::prelude::*;
use tracing::debug;

use crate::blocks::RenderBlocks;
use crate::core::content::PageDoc;
use crate::core::source::{content, site_config};
use crate::views::NotFound;

/// Slug of the page served at `/{locale}`.
pub const HOME_SLUG: &str = "home";

/// A CMS page looked up by its localized slug.
#[component]
pub fn PageView(locale: String, slug: String) -> Element {
    let config = site_config();
    if !config.supports(&locale) {
        debug!(locale = %locale, "unsupported locale in route");
        return rsx! { NotFound {} };
    }

    let Some(page) = find_page(&slug, &locale) else {
        debug!(slug = %slug, locale = %locale, "no page for slug");
        return rsx! { NotFound { locale } };
    };

    let title = page
        .title
        .as_ref()
        .map(|t| t.resolve(&locale, &config.fallback_locale))
        .filter(|t| !t.is_empty());

    rsx! {
        if let Some(title) = title {
            document::Title { "{title} | Forge." }
        }
        main { class: "page page--{slug}",
            RenderBlocks { blocks: page.layout, locale }
        }
    }
}

fn find_page(slug: &str, locale: &str) -> Option<PageDoc> {
    content()
        .page_by_slug(slug, locale)
        .or_else(|| (slug == HOME_SLUG).then(PageDoc::home_static))
}
