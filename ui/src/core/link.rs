//! CMS link descriptors and their resolution into navigable targets.
//!
//! A descriptor is validated once at the content boundary
//! (`core::content`); everything here is total. A link that cannot produce
//! a target resolves to `None` and the caller omits it from the render.

use serde::{Deserialize, Serialize};

use super::locale_path::localize;
use super::localized::{self, LocalizedString};

/// Collections a reference link can point into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Collection {
    Pages,
    Posts,
}

impl Collection {
    /// Path segment placed before the slug. Pages live at the site root.
    pub fn segment(self) -> Option<&'static str> {
        match self {
            Self::Pages => None,
            Self::Posts => Some("posts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DocumentId {
    Number(i64),
    Text(String),
}

/// An expanded document, as returned when the CMS query resolves relations.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub id: Option<DocumentId>,
    #[serde(default)]
    pub slug: Option<LocalizedString>,
    #[serde(default)]
    pub title: Option<LocalizedString>,
}

/// Relationship value: either the expanded document or just its id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TargetDocument {
    Resolved(Document),
    Unresolved(DocumentId),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    Reference {
        collection: Collection,
        document: TargetDocument,
    },
    Custom {
        url: LocalizedString,
    },
    Email {
        address: String,
    },
    Phone {
        number: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum IconKind {
    #[default]
    ArrowRight,
    External,
    Mail,
    Phone,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    Left,
    #[default]
    Right,
}

/// How the link is drawn. `cmsLink` from the CMS maps to `Link`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Appearance {
    #[default]
    Inline,
    Default,
    Primary,
    Secondary,
    Outline,
    #[serde(alias = "cmsLink")]
    Link,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Clear,
    #[default]
    Default,
    Icon,
    Lg,
    Sm,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkDescriptor {
    pub target: LinkTarget,
    pub label: Option<LocalizedString>,
    pub open_in_new_tab: bool,
    pub icon: Option<IconKind>,
    pub icon_position: IconPosition,
    pub appearance: Appearance,
    pub size: Option<ButtonSize>,
}

impl LinkDescriptor {
    pub fn new(target: LinkTarget) -> Self {
        Self {
            target,
            label: None,
            open_in_new_tab: false,
            icon: None,
            icon_position: IconPosition::default(),
            appearance: Appearance::default(),
            size: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<LocalizedString>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Final href for this link, or `None` when it has nowhere to go.
    ///
    /// Reference and custom targets are locale-prefixed exactly once;
    /// `mailto:` and `tel:` targets never are.
    pub fn resolve_href(&self, locale: &str, fallback: &str) -> Option<String> {
        match &self.target {
            LinkTarget::Email { address } => mailto(address),
            LinkTarget::Phone { number } => tel(number),
            LinkTarget::Reference {
                collection,
                document,
            } => {
                let TargetDocument::Resolved(doc) = document else {
                    return None;
                };
                let slug = localized::resolve(doc.slug.as_ref(), locale, fallback);
                if slug.is_empty() {
                    return None;
                }
                let path = match collection.segment() {
                    Some(segment) => format!("/{segment}/{slug}"),
                    None => format!("/{slug}"),
                };
                Some(localize(&path, Some(locale)))
            }
            LinkTarget::Custom { url } => {
                let url = url.resolve(locale, fallback);
                if url.is_empty() {
                    return None;
                }
                Some(localize(&url, Some(locale)))
            }
        }
    }

    /// Everything the presentation layer needs to draw this link.
    pub fn resolve(&self, locale: &str, fallback: &str) -> Option<ResolvedLink> {
        let href = self.resolve_href(locale, fallback)?;
        let new_tab = self.open_in_new_tab
            && matches!(
                self.target,
                LinkTarget::Custom { .. } | LinkTarget::Reference { .. }
            );
        let size = match self.appearance {
            Appearance::Link => ButtonSize::Clear,
            _ => self.size.unwrap_or_default(),
        };

        Some(ResolvedLink {
            href,
            label: localized::resolve(self.label.as_ref(), locale, fallback),
            new_tab,
            icon: self.icon.map(|kind| LinkIcon {
                kind,
                position: self.icon_position,
            }),
            appearance: self.appearance,
            size,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkIcon {
    pub kind: IconKind,
    pub position: IconPosition,
}

/// A link ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedLink {
    pub href: String,
    pub label: String,
    pub new_tab: bool,
    pub icon: Option<LinkIcon>,
    pub appearance: Appearance,
    pub size: ButtonSize,
}

impl ResolvedLink {
    pub fn icon_at(&self, position: IconPosition) -> Option<IconKind> {
        self.icon
            .filter(|icon| icon.position == position)
            .map(|icon| icon.kind)
    }
}

fn mailto(address: &str) -> Option<String> {
    let clean = address.trim();
    if clean.is_empty() {
        return None;
    }
    if clean.starts_with("mailto:") {
        Some(clean.to_string())
    } else {
        Some(format!("mailto:{clean}"))
    }
}

/// Keep digits plus a `+` that leads the number.
fn tel(number: &str) -> Option<String> {
    let clean = number.trim();
    if clean.is_empty() {
        return None;
    }
    let mut digits = String::with_capacity(clean.len());
    for c in clean.chars() {
        if c.is_ascii_digit() || (c == '+' && digits.is_empty()) {
            digits.push(c);
        }
    }
    if digits.is_empty() {
        return None;
    }
    Some(format!("tel:{digits}"))
}
