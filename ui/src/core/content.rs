//! Typed content model and the validation boundary for CMS JSON.
//!
//! The CMS hands us loosely shaped documents. They are converted here, once,
//! into the types the UI consumes. Rows that fail validation are skipped
//! with a warning; a malformed nav entry never takes the header down.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use super::link::{
    Appearance, ButtonSize, Collection, DocumentId, IconKind, IconPosition, LinkDescriptor,
    LinkTarget, TargetDocument,
};
use super::localized::LocalizedString;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("invalid content JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown link type `{0}`")]
    UnknownLinkType(String),

    #[error("`{kind}` link is missing its `{field}` field")]
    MissingField {
        kind: &'static str,
        field: &'static str,
    },

    #[error("unknown collection `{0}`")]
    UnknownCollection(String),

    #[error("link has neither a type nor a target")]
    UntypedLink,

    #[error("row has no link")]
    MissingLink,

    #[error("unknown block type `{0}`")]
    UnknownBlock(String),
}

// ---------------------------------------------------------------------------
// Media
// ---------------------------------------------------------------------------

/// An uploaded image or video.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaRef {
    pub url: String,
    #[serde(default)]
    pub alt: Option<LocalizedString>,
    #[serde(default)]
    pub mime_type: Option<String>,
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

impl MediaRef {
    pub fn is_video(&self) -> bool {
        self.mime_type
            .as_deref()
            .is_some_and(|mime| mime.starts_with("video/"))
    }

    /// Source URL. Videos carry a cache tag so a re-upload busts the player cache.
    pub fn src(&self) -> String {
        if !self.is_video() {
            return self.url.clone();
        }
        let tag = self
            .updated_at
            .as_deref()
            .map(|updated| urlencoding::encode(updated).into_owned())
            .unwrap_or_else(|| "1".to_string());
        format!("{}?v={tag}", self.url)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawMedia {
    Resolved(MediaRef),
    #[allow(dead_code)]
    Unresolved(DocumentId),
    /// Anything else (e.g. an upload whose `url` is null) is treated as absent.
    #[allow(dead_code)]
    Other(Value),
}

/// Unresolved uploads (bare ids) and empty URLs count as "no media".
fn media(raw: Option<RawMedia>) -> Option<MediaRef> {
    match raw? {
        RawMedia::Resolved(m) if !m.url.trim().is_empty() => Some(m),
        _ => None,
    }
}

/// Reads JSON `null` as the type's default, like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Site-wide settings global.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteSettings {
    /// Fixed media behind every page, under a dark scrim.
    pub background: Option<MediaRef>,
}

impl SiteSettings {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Self::from_value(serde_json::from_str(raw)?)
    }

    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        #[derive(Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct RawSettings {
            #[serde(default)]
            background: Option<RawMedia>,
        }

        let raw: RawSettings = serde_json::from_value(value)?;
        Ok(Self {
            background: media(raw.background),
        })
    }
}

// ---------------------------------------------------------------------------
// Links
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawReference {
    relation_to: String,
    value: TargetDocument,
}

/// Link group as the CMS stores it: one record carrying every variant's field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawLink {
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    new_tab: Option<bool>,
    #[serde(default)]
    label: Option<LocalizedString>,
    #[serde(default)]
    reference: Option<RawReference>,
    #[serde(default)]
    url: Option<LocalizedString>,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    phone: Option<String>,
    #[serde(default)]
    show_icon: Option<bool>,
    #[serde(default)]
    icon: Option<IconKind>,
    #[serde(default)]
    icon_position: Option<IconPosition>,
    #[serde(default)]
    appearance: Option<Appearance>,
    #[serde(default)]
    size: Option<ButtonSize>,
}

impl TryFrom<RawLink> for LinkDescriptor {
    type Error = ContentError;

    fn try_from(raw: RawLink) -> Result<Self, Self::Error> {
        let kind = match raw.kind.as_deref() {
            Some(kind) => kind.to_string(),
            // Older records predate the type radio.
            None if raw.reference.is_some() => "reference".to_string(),
            None if raw.url.is_some() => "custom".to_string(),
            None => return Err(ContentError::UntypedLink),
        };

        let target = match kind.as_str() {
            "reference" => {
                let reference = raw.reference.ok_or(ContentError::MissingField {
                    kind: "reference",
                    field: "reference",
                })?;
                let collection = match reference.relation_to.as_str() {
                    "pages" => Collection::Pages,
                    "posts" => Collection::Posts,
                    other => return Err(ContentError::UnknownCollection(other.to_string())),
                };
                LinkTarget::Reference {
                    collection,
                    document: reference.value,
                }
            }
            "custom" => LinkTarget::Custom {
                url: raw.url.ok_or(ContentError::MissingField {
                    kind: "custom",
                    field: "url",
                })?,
            },
            "email" => LinkTarget::Email {
                address: raw.email.ok_or(ContentError::MissingField {
                    kind: "email",
                    field: "email",
                })?,
            },
            "phone" => LinkTarget::Phone {
                number: raw.phone.ok_or(ContentError::MissingField {
                    kind: "phone",
                    field: "phone",
                })?,
            },
            other => return Err(ContentError::UnknownLinkType(other.to_string())),
        };

        let icon = if raw.show_icon.unwrap_or(false) {
            Some(raw.icon.unwrap_or_default())
        } else {
            None
        };

        Ok(LinkDescriptor {
            target,
            label: raw.label,
            open_in_new_tab: raw.new_tab.unwrap_or(false),
            icon,
            icon_position: raw.icon_position.unwrap_or_default(),
            appearance: raw.appearance.unwrap_or_default(),
            size: raw.size,
        })
    }
}

/// Parse a single CMS link group.
pub fn parse_link(value: Value) -> Result<LinkDescriptor, ContentError> {
    let raw: RawLink = serde_json::from_value(value)?;
    raw.try_into()
}

/// Rows shaped `{ link }` or `{ links: [{ link }] }`; bad rows are skipped.
fn collect_links(rows: &[Value], context: &str) -> Vec<LinkDescriptor> {
    let mut links = Vec::new();
    for (index, row) in rows.iter().enumerate() {
        if let Some(nested) = row.get("links").and_then(Value::as_array) {
            links.extend(collect_links(nested, context));
            continue;
        }
        match row.get("link").cloned().map(parse_link) {
            Some(Ok(link)) => links.push(link),
            Some(Err(err)) => warn!(%err, index, context, "skipping link row"),
            None => warn!(err = %ContentError::MissingLink, index, context, "skipping link row"),
        }
    }
    links
}

// ---------------------------------------------------------------------------
// Header navigation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownItem {
    pub link: LinkDescriptor,
    pub description: Option<LocalizedString>,
    pub item_image: Option<MediaRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DropdownSpec {
    pub enabled: bool,
    pub panel_title_link: Option<LinkDescriptor>,
    pub panel_text: Option<LocalizedString>,
    pub panel_image: Option<MediaRef>,
    pub items: Vec<DropdownItem>,
}

impl DropdownSpec {
    /// Image shown in the preview pane for the highlighted item.
    pub fn preview_media(&self, active_item: usize) -> Option<&MediaRef> {
        self.items
            .get(active_item)
            .and_then(|item| item.item_image.as_ref())
            .or(self.panel_image.as_ref())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    pub link: LinkDescriptor,
    pub dropdown: Option<DropdownSpec>,
}

impl NavItem {
    /// The dropdown, when it is switched on and has something to show.
    pub fn active_dropdown(&self) -> Option<&DropdownSpec> {
        self.dropdown
            .as_ref()
            .filter(|d| d.enabled && !d.items.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HeaderData {
    pub brand_title: Option<LocalizedString>,
    pub header_cta: Option<LinkDescriptor>,
    pub nav_items: Vec<NavItem>,
}

#[derive(Debug, Deserialize)]
struct LinkRow {
    #[serde(default)]
    link: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawHeader {
    #[serde(default)]
    brand_title: Option<LocalizedString>,
    #[serde(default, rename = "headerCTA")]
    header_cta: Option<LinkRow>,
    #[serde(default, deserialize_with = "null_as_default")]
    nav_items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDropdown {
    #[serde(default, deserialize_with = "null_as_default")]
    enabled: bool,
    #[serde(default)]
    panel_title: Option<Value>,
    #[serde(default)]
    panel_text: Option<LocalizedString>,
    #[serde(default)]
    panel_image: Option<RawMedia>,
    #[serde(default, deserialize_with = "null_as_default")]
    items: Vec<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawDropdownItem {
    #[serde(default)]
    link: Option<Value>,
    #[serde(default)]
    description: Option<LocalizedString>,
    #[serde(default)]
    item_image: Option<RawMedia>,
}

impl HeaderData {
    pub fn from_json(raw: &str, max_nav_items: usize) -> Result<Self, ContentError> {
        let value: Value = serde_json::from_str(raw)?;
        Self::from_value(value, max_nav_items)
    }

    /// Validate the header global. Individual nav rows never fail the whole header.
    pub fn from_value(value: Value, max_nav_items: usize) -> Result<Self, ContentError> {
        let raw: RawHeader = serde_json::from_value(value)?;

        let header_cta = match raw.header_cta.and_then(|row| row.link).map(parse_link) {
            Some(Ok(link)) => Some(link),
            Some(Err(err)) => {
                warn!(%err, "dropping header CTA");
                None
            }
            None => None,
        };

        let mut nav_items = Vec::new();
        for (index, row) in raw.nav_items.into_iter().enumerate() {
            match parse_nav_item(row) {
                Ok(item) => nav_items.push(item),
                Err(err) => warn!(%err, index, "skipping nav item"),
            }
        }
        if nav_items.len() > max_nav_items {
            warn!(
                count = nav_items.len(),
                max = max_nav_items,
                "too many nav items; extra entries dropped"
            );
            nav_items.truncate(max_nav_items);
        }

        Ok(Self {
            brand_title: raw.brand_title,
            header_cta,
            nav_items,
        })
    }
}

fn parse_nav_item(row: Value) -> Result<NavItem, ContentError> {
    let raw_link = row.get("link").cloned().ok_or(ContentError::MissingLink)?;
    let link = parse_link(raw_link)?;

    let dropdown = match row.get("dropdown").cloned() {
        Some(Value::Null) | None => None,
        Some(value) => {
            let raw: RawDropdown = serde_json::from_value(value)?;
            parse_dropdown(raw)
        }
    };

    Ok(NavItem { link, dropdown })
}

fn parse_dropdown(raw: RawDropdown) -> Option<DropdownSpec> {
    if !raw.enabled {
        return None;
    }

    let panel_title_link = match raw.panel_title.map(parse_link) {
        Some(Ok(link)) => Some(link),
        Some(Err(err)) => {
            warn!(%err, "dropdown panel title link ignored");
            None
        }
        None => None,
    };

    let mut items = Vec::new();
    for (index, row) in raw.items.into_iter().enumerate() {
        let item = serde_json::from_value::<RawDropdownItem>(row)
            .map_err(ContentError::from)
            .and_then(|item| {
                let link = parse_link(item.link.ok_or(ContentError::MissingLink)?)?;
                Ok(DropdownItem {
                    link,
                    description: item.description,
                    item_image: media(item.item_image),
                })
            });
        match item {
            Ok(item) => items.push(item),
            Err(err) => warn!(%err, index, "skipping dropdown item"),
        }
    }

    if items.is_empty() {
        warn!("dropdown has no usable items; rendering as a plain link");
        return None;
    }

    Some(DropdownSpec {
        enabled: true,
        panel_title_link,
        panel_text: raw.panel_text,
        panel_image: media(raw.panel_image),
        items,
    })
}

// ---------------------------------------------------------------------------
// Pages and layout blocks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct HeroBlock {
    pub title: LocalizedString,
    pub background: Option<MediaRef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallToActionBlock {
    pub links: Vec<LinkDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TwoColumnTextCtaBlock {
    pub left_title: LocalizedString,
    /// Rich text flattened to paragraphs separated by blank lines.
    pub right_text: LocalizedString,
    pub links: Vec<LinkDescriptor>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    Hero(HeroBlock),
    CallToAction(CallToActionBlock),
    TwoColumnTextCta(TwoColumnTextCtaBlock),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageDoc {
    pub id: Option<DocumentId>,
    pub title: Option<LocalizedString>,
    pub slug: LocalizedString,
    pub layout: Vec<Block>,
}

impl PageDoc {
    /// Stand-in home page used until the CMS has one.
    pub fn home_static() -> Self {
        Self {
            id: None,
            title: Some(LocalizedString::from([("en", "Home"), ("fr", "Accueil")])),
            slug: LocalizedString::from("home"),
            layout: vec![Block::Hero(HeroBlock {
                title: LocalizedString::from([
                    ("en", "Forge builds brands that last."),
                    ("fr", "Forge construit des marques qui durent."),
                ]),
                background: None,
            })],
        }
    }

    pub fn matches_slug(&self, slug: &str, locale: &str, fallback: &str) -> bool {
        self.slug.resolve(locale, fallback) == slug
    }

    pub fn from_value(value: Value) -> Result<Self, ContentError> {
        #[derive(Deserialize)]
        struct RawPage {
            #[serde(default)]
            id: Option<DocumentId>,
            #[serde(default)]
            title: Option<LocalizedString>,
            slug: LocalizedString,
            #[serde(default, deserialize_with = "null_as_default")]
            layout: Vec<Value>,
        }

        let raw: RawPage = serde_json::from_value(value)?;
        Ok(Self {
            id: raw.id,
            title: raw.title,
            slug: raw.slug,
            layout: parse_blocks(raw.layout),
        })
    }
}

/// Parse layout blocks, skipping unknown or malformed ones.
pub fn parse_blocks(values: Vec<Value>) -> Vec<Block> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match parse_block(value) {
            Ok(block) => Some(block),
            Err(err) => {
                warn!(%err, index, "skipping layout block");
                None
            }
        })
        .collect()
}

fn parse_block(value: Value) -> Result<Block, ContentError> {
    let block_type = value
        .get("blockType")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    match block_type.as_str() {
        "heroBlock" => {
            #[derive(Deserialize)]
            struct RawHero {
                title: LocalizedString,
                #[serde(default)]
                background: Option<RawMedia>,
            }
            let raw: RawHero = serde_json::from_value(value)?;
            Ok(Block::Hero(HeroBlock {
                title: raw.title,
                background: media(raw.background),
            }))
        }
        "cta" | "callToAction" => {
            let rows = array_field(&value, "links");
            Ok(Block::CallToAction(CallToActionBlock {
                links: collect_links(&rows, "callToAction"),
            }))
        }
        "twoColumnTextCTA" => {
            #[derive(Deserialize)]
            #[serde(rename_all = "camelCase")]
            struct RawTwoColumn {
                left_title: LocalizedString,
                #[serde(default)]
                right_text: Value,
            }
            let rows = array_field(&value, "cta");
            let raw: RawTwoColumn = serde_json::from_value(value)?;
            Ok(Block::TwoColumnTextCta(TwoColumnTextCtaBlock {
                left_title: raw.left_title,
                right_text: rich_text(&raw.right_text),
                links: collect_links(&rows, "twoColumnTextCTA"),
            }))
        }
        other => Err(ContentError::UnknownBlock(other.to_string())),
    }
}

fn array_field(value: &Value, field: &str) -> Vec<Value> {
    value
        .get(field)
        .and_then(Value::as_array)
        .cloned()
        .unwrap_or_default()
}

/// Flatten a rich-text field (plain string, editor document, or a per-locale
/// map of either) into a localized plain-text value.
fn rich_text(value: &Value) -> LocalizedString {
    match value {
        Value::String(s) => LocalizedString::Plain(s.clone()),
        Value::Object(map) if map.contains_key("root") => {
            LocalizedString::Plain(flatten_document(value))
        }
        Value::Object(map) => LocalizedString::PerLocale(
            map.iter()
                .map(|(locale, v)| {
                    let text = match v {
                        Value::Null => None,
                        Value::String(s) => Some(s.clone()),
                        other => Some(flatten_document(other)),
                    };
                    (locale.clone(), text)
                })
                .collect(),
        ),
        _ => LocalizedString::Plain(String::new()),
    }
}

fn flatten_document(doc: &Value) -> String {
    let Some(blocks) = doc
        .get("root")
        .and_then(|root| root.get("children"))
        .and_then(Value::as_array)
    else {
        return String::new();
    };

    blocks
        .iter()
        .map(|block| {
            let mut text = String::new();
            collect_text(block, &mut text);
            text
        })
        .filter(|paragraph| !paragraph.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn collect_text(node: &Value, out: &mut String) {
    if let Some(text) = node.get("text").and_then(Value::as_str) {
        out.push_str(text);
    }
    if node.get("type").and_then(Value::as_str) == Some("linebreak") {
        out.push('\n');
    }
    if let Some(children) = node.get("children").and_then(Value::as_array) {
        for child in children {
            collect_text(child, out);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn custom(url: &str, label: &str) -> Value {
        json!({ "type": "custom", "url": url, "label": label })
    }

    #[test]
    fn parses_each_link_variant() {
        let email = parse_link(json!({"type": "email", "email": "a@b.com", "label": "Mail"})).unwrap();
        assert!(matches!(email.target, LinkTarget::Email { .. }));

        let phone = parse_link(json!({"type": "phone", "phone": "+33 1"})).unwrap();
        assert!(matches!(phone.target, LinkTarget::Phone { .. }));

        let reference = parse_link(json!({
            "type": "reference",
            "reference": { "relationTo": "posts", "value": 42 }
        }))
        .unwrap();
        assert!(matches!(
            reference.target,
            LinkTarget::Reference {
                collection: Collection::Posts,
                document: TargetDocument::Unresolved(DocumentId::Number(42)),
            }
        ));

        let resolved = parse_link(json!({
            "type": "reference",
            "reference": { "relationTo": "pages", "value": { "id": 7, "slug": "contact" } }
        }))
        .unwrap();
        assert_eq!(resolved.resolve_href("en", "en").as_deref(), Some("/en/contact"));
    }

    #[test]
    fn rejects_unknown_type_and_collection() {
        assert!(matches!(
            parse_link(json!({"type": "fax"})),
            Err(ContentError::UnknownLinkType(_))
        ));
        assert!(matches!(
            parse_link(json!({"type": "reference", "reference": {"relationTo": "media", "value": 1}})),
            Err(ContentError::UnknownCollection(_))
        ));
        assert!(matches!(
            parse_link(json!({"type": "email"})),
            Err(ContentError::MissingField { .. })
        ));
        assert!(matches!(parse_link(json!({})), Err(ContentError::UntypedLink)));
    }

    #[test]
    fn icon_only_when_enabled_and_appearance_normalized() {
        let link = parse_link(json!({
            "type": "custom", "url": "/x",
            "showIcon": true, "iconPosition": "left", "appearance": "cmsLink"
        }))
        .unwrap();
        assert_eq!(link.icon, Some(IconKind::ArrowRight));
        assert_eq!(link.icon_position, IconPosition::Left);
        assert_eq!(link.appearance, Appearance::Link);

        let hidden = parse_link(json!({"type": "custom", "url": "/x", "icon": "mail"})).unwrap();
        assert_eq!(hidden.icon, None);
    }

    #[test]
    fn header_skips_bad_rows_and_keeps_the_rest() {
        let header = HeaderData::from_value(
            json!({
                "brandTitle": "Forge.",
                "headerCTA": { "link": custom("/contact", "Talk to us") },
                "navItems": [
                    { "link": custom("/work", "Work") },
                    { "link": { "type": "carrier-pigeon" } },
                    { "dropdown": { "enabled": false } },
                    { "link": custom("/studio", "Studio") }
                ]
            }),
            6,
        )
        .unwrap();

        assert_eq!(header.nav_items.len(), 2);
        assert!(header.header_cta.is_some());
        assert_eq!(
            header.brand_title.as_ref().map(|t| t.resolve("en", "en")),
            Some("Forge.".to_string())
        );
    }

    #[test]
    fn dropdown_without_valid_items_becomes_plain_link() {
        let header = HeaderData::from_value(
            json!({
                "navItems": [{
                    "link": custom("/services", "Services"),
                    "dropdown": {
                        "enabled": true,
                        "panelText": "What we do",
                        "items": [ { "link": { "type": "nope" } }, { "description": "orphan" } ]
                    }
                }]
            }),
            6,
        )
        .unwrap();

        let item = &header.nav_items[0];
        assert!(item.dropdown.is_none());
        assert!(item.active_dropdown().is_none());
    }

    #[test]
    fn dropdown_keeps_valid_items_and_resolves_media() {
        let header = HeaderData::from_value(
            json!({
                "navItems": [{
                    "link": custom("/services", "Services"),
                    "dropdown": {
                        "enabled": true,
                        "panelTitle": custom("/services", "All services"),
                        "panelText": { "en": "What we do", "fr": "Ce que nous faisons" },
                        "panelImage": { "url": "/media/panel.jpg" },
                        "items": [
                            { "link": custom("/services/brand", "Brand"), "itemImage": { "url": "/media/brand.jpg" } },
                            { "link": custom("/services/web", "Web"), "itemImage": 12 },
                            { "link": { "type": "bad" } }
                        ]
                    }
                }]
            }),
            6,
        )
        .unwrap();

        let dropdown = header.nav_items[0].active_dropdown().unwrap();
        assert_eq!(dropdown.items.len(), 2);
        assert_eq!(dropdown.preview_media(0).unwrap().url, "/media/brand.jpg");
        // Unresolved upload id falls back to the shared panel image.
        assert_eq!(dropdown.preview_media(1).unwrap().url, "/media/panel.jpg");
        assert_eq!(dropdown.preview_media(9).unwrap().url, "/media/panel.jpg");
    }

    #[test]
    fn nav_items_are_capped() {
        let rows: Vec<Value> = (0..8)
            .map(|i| json!({ "link": custom(&format!("/p{i}"), "P") }))
            .collect();
        let header = HeaderData::from_value(json!({ "navItems": rows }), 6).unwrap();
        assert_eq!(header.nav_items.len(), 6);
    }

    #[test]
    fn video_media_gets_cache_tag() {
        let video = MediaRef {
            url: "/media/loop.mp4".into(),
            alt: None,
            mime_type: Some("video/mp4".into()),
            width: None,
            height: None,
            updated_at: Some("2025-01-02T03:04:05.000Z".into()),
        };
        assert_eq!(video.src(), "/media/loop.mp4?v=2025-01-02T03%3A04%3A05.000Z");

        let image = MediaRef {
            mime_type: Some("image/jpeg".into()),
            ..video.clone()
        };
        assert_eq!(image.src(), "/media/loop.mp4");
    }

    #[test]
    fn media_without_url_is_dropped_but_row_is_kept() {
        let header = HeaderData::from_value(
            json!({
                "navItems": [{
                    "link": custom("/services", "Services"),
                    "dropdown": {
                        "enabled": true,
                        "panelImage": { "id": 5, "url": null },
                        "items": [
                            { "link": custom("/brand", "Brand"), "itemImage": { "id": 6 } }
                        ]
                    }
                }]
            }),
            6,
        )
        .unwrap();

        assert_eq!(header.nav_items.len(), 1);
        let dropdown = header.nav_items[0].active_dropdown().unwrap();
        assert!(dropdown.panel_image.is_none());
        assert!(dropdown.items[0].item_image.is_none());

        let page = PageDoc::from_value(json!({
            "slug": "home",
            "layout": [ { "blockType": "heroBlock", "title": "Hi", "background": { "url": null } } ]
        }))
        .unwrap();
        match &page.layout[..] {
            [Block::Hero(hero)] => assert!(hero.background.is_none()),
            other => panic!("expected one hero, got {other:?}"),
        }
    }

    #[test]
    fn null_lists_read_as_empty() {
        let header =
            HeaderData::from_value(json!({ "brandTitle": "Forge.", "navItems": null }), 6).unwrap();
        assert!(header.nav_items.is_empty());
        assert!(header.brand_title.is_some());

        let header = HeaderData::from_value(
            json!({
                "navItems": [{
                    "link": custom("/work", "Work"),
                    "dropdown": { "enabled": true, "items": null }
                }]
            }),
            6,
        )
        .unwrap();
        assert_eq!(header.nav_items.len(), 1);
        assert!(header.nav_items[0].active_dropdown().is_none());

        let page = PageDoc::from_value(json!({ "slug": "empty", "layout": null })).unwrap();
        assert!(page.layout.is_empty());
    }

    #[test]
    fn settings_background_is_optional() {
        let settings = SiteSettings::from_value(json!({
            "background": { "url": "/media/bg.mp4", "mimeType": "video/mp4" }
        }))
        .unwrap();
        assert!(settings.background.is_some_and(|bg| bg.is_video()));

        for background in [json!(null), json!(12), json!({ "url": null }), json!({ "url": " " })] {
            let settings = SiteSettings::from_value(json!({ "background": background })).unwrap();
            assert!(settings.background.is_none());
        }
        assert_eq!(SiteSettings::from_json("{}").unwrap(), SiteSettings::default());
    }

    #[test]
    fn page_blocks_parse_and_unknown_blocks_are_skipped() {
        let page = PageDoc::from_value(json!({
            "id": 1,
            "slug": { "en": "studio", "fr": "atelier" },
            "layout": [
                { "blockType": "heroBlock", "title": "Studio", "background": 3 },
                { "blockType": "mystery" },
                { "blockType": "cta", "links": [ { "link": custom("/contact", "Contact") }, { "nope": true } ] },
                {
                    "blockType": "twoColumnTextCTA",
                    "leftTitle": "About",
                    "rightText": { "root": { "children": [
                        { "type": "paragraph", "children": [ { "text": "We design." } ] },
                        { "type": "paragraph", "children": [ { "text": "We build." } ] }
                    ] } },
                    "cta": [ { "links": [ { "link": custom("/work", "Work") } ] } ]
                }
            ]
        }))
        .unwrap();

        assert!(page.matches_slug("atelier", "fr", "en"));
        assert_eq!(page.layout.len(), 3);
        match &page.layout[0] {
            Block::Hero(hero) => assert!(hero.background.is_none()),
            other => panic!("expected hero, got {other:?}"),
        }
        match &page.layout[1] {
            Block::CallToAction(cta) => assert_eq!(cta.links.len(), 1),
            other => panic!("expected cta, got {other:?}"),
        }
        match &page.layout[2] {
            Block::TwoColumnTextCta(block) => {
                assert_eq!(block.right_text.resolve("en", "en"), "We design.\n\nWe build.");
                assert_eq!(block.links.len(), 1);
            }
            other => panic!("expected two-column block, got {other:?}"),
        }
    }
}
