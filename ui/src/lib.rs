//! Shared UI crate for the Forge marketing site: locale-aware links, the
//! header navigation and page rendering. Platform crates only own routing.

pub mod blocks;
pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // CMS link rendering (components/cms_link.rs)
    pub mod cms_link;
    pub use cms_link::{CmsLink, ResolvedAnchor};

    // Uploaded images and background videos (components/media.rs)
    pub mod media;
    pub use media::Media;

    // Hover dropdown navigation driven by core::menu (components/header_nav.rs)
    pub mod header_nav;
    pub use header_nav::HeaderNav;

    pub mod locale_switcher;
    pub use locale_switcher::LocaleSwitcher;

    pub mod global_background;
    pub use global_background::GlobalBackground;

    // Brand + nav + switcher + CTA (components/site_header.rs)
    pub mod site_header;
    pub use site_header::SiteHeader;
}
