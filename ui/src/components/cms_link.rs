use dioxus::prelude::*;

use crate::core::link::{Appearance, ButtonSize, IconKind, IconPosition, LinkDescriptor, ResolvedLink};
use crate::core::source::site_config;

/// A CMS-managed link. Renders nothing when the link has no target.
///
/// `appearance` overrides whatever the editor picked (the header forces
/// `Link` for its entries).
#[component]
pub fn CmsLink(
    link: LinkDescriptor,
    locale: String,
    #[props(default)] appearance: Option<Appearance>,
    #[props(default)] class: String,
) -> Element {
    let fallback = &site_config().fallback_locale;
    let Some(mut resolved) = link.resolve(&locale, fallback) else {
        return rsx! {};
    };
    if let Some(forced) = appearance {
        resolved.appearance = forced;
        if forced == Appearance::Link {
            resolved.size = ButtonSize::Clear;
        }
    }

    rsx! {
        ResolvedAnchor { link: resolved, class }
    }
}

/// Anchor for an already resolved link.
#[component]
pub fn ResolvedAnchor(link: ResolvedLink, #[props(default)] class: String) -> Element {
    let class_name = format!("{} {class}", link_class(&link)).trim().to_string();
    let rel = link.new_tab.then_some("noopener noreferrer");
    let target = link.new_tab.then_some("_blank");
    let left = link.icon_at(IconPosition::Left);
    let right = link.icon_at(IconPosition::Right);
    let label = link.label.clone();

    let content = rsx! {
        span { class: "cms-link__content",
            if let Some(kind) = left {
                LinkIconGlyph { kind }
            }
            span { class: "link-hover-swap",
                span { class: "link-hover-swap__inner", "data-text": "{label}", "{label}" }
            }
            if let Some(kind) = right {
                LinkIconGlyph { kind }
            }
        }
    };

    if link.href.starts_with('/') {
        rsx! {
            Link {
                to: link.href.clone(),
                class: class_name,
                new_tab: link.new_tab,
                {content}
            }
        }
    } else {
        rsx! {
            a {
                href: "{link.href}",
                class: "{class_name}",
                target,
                rel,
                {content}
            }
        }
    }
}

#[component]
fn LinkIconGlyph(kind: IconKind) -> Element {
    let modifier = match kind {
        IconKind::ArrowRight => "arrow",
        IconKind::External => "external",
        IconKind::Mail => "mail",
        IconKind::Phone => "phone",
    };
    rsx! {
        span { class: "cms-link__icon cms-link__icon--{modifier}", aria_hidden: "true" }
    }
}

fn link_class(link: &ResolvedLink) -> String {
    let variant = match link.appearance {
        Appearance::Inline => return "cms-link".to_string(),
        Appearance::Default => "default",
        Appearance::Primary => "primary",
        Appearance::Secondary => "secondary",
        Appearance::Outline => "outline",
        Appearance::Link => "link",
    };
    let size = match link.size {
        ButtonSize::Clear => "clear",
        ButtonSize::Default => "default",
        ButtonSize::Icon => "icon",
        ButtonSize::Lg => "lg",
        ButtonSize::Sm => "sm",
    };
    format!("cms-link button button--{variant} button--size-{size}")
}
