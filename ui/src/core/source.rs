//! Where content comes from.
//!
//! Fetching from the CMS belongs to the host: it implements `ContentSource`
//! and registers it before the first render. Without a registration the
//! seed content compiled into this crate is served.

use once_cell::sync::OnceCell;
use serde_json::Value;
use tracing::{debug, warn};

use super::config::SiteConfig;
use super::content::{ContentError, HeaderData, PageDoc, SiteSettings};

const SEED_HEADER_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/content/header.json"
));
const SEED_PAGES_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/content/pages.json"
));
const SEED_SETTINGS_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/content/settings.json"
));

/// Read-only access to already fetched content.
pub trait ContentSource: Send + Sync {
    fn header(&self, locale: &str) -> Option<HeaderData>;
    fn page_by_slug(&self, slug: &str, locale: &str) -> Option<PageDoc>;

    fn settings(&self) -> SiteSettings {
        SiteSettings::default()
    }
}

static CONTENT: OnceCell<Box<dyn ContentSource>> = OnceCell::new();
static CONFIG: OnceCell<SiteConfig> = OnceCell::new();

/// Install the host's content source. Only the first registration wins.
pub fn register_content(source: Box<dyn ContentSource>) {
    if CONTENT.set(source).is_err() {
        warn!("content source already registered; ignoring");
    }
}

pub fn content() -> &'static dyn ContentSource {
    CONTENT
        .get_or_init(|| Box::new(EmbeddedContent::load(site_config())))
        .as_ref()
}

/// Site configuration, loaded once.
pub fn site_config() -> &'static SiteConfig {
    CONFIG.get_or_init(SiteConfig::embedded)
}

/// Seed content parsed from the JSON files shipped with the crate.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedContent {
    header: HeaderData,
    pages: Vec<PageDoc>,
    settings: SiteSettings,
    fallback_locale: String,
}

impl EmbeddedContent {
    pub fn load(config: &SiteConfig) -> Self {
        Self::from_json(SEED_HEADER_JSON, SEED_PAGES_JSON, config)
            .unwrap_or_else(|err| {
                warn!(%err, "seed content rejected; serving an empty site");
                Self {
                    fallback_locale: config.fallback_locale.clone(),
                    ..Self::default()
                }
            })
            .with_settings(SEED_SETTINGS_JSON)
    }

    /// Attach the settings global. Invalid settings fall back to none.
    pub fn with_settings(mut self, settings_json: &str) -> Self {
        self.settings = SiteSettings::from_json(settings_json).unwrap_or_else(|err| {
            warn!(%err, "site settings rejected; using defaults");
            SiteSettings::default()
        });
        self
    }

    pub fn from_json(
        header_json: &str,
        pages_json: &str,
        config: &SiteConfig,
    ) -> Result<Self, ContentError> {
        let header = HeaderData::from_json(header_json, config.menu.max_nav_items)?;

        let docs: Vec<Value> = match serde_json::from_str::<Value>(pages_json)? {
            Value::Array(docs) => docs,
            Value::Object(mut map) => match map.remove("docs") {
                Some(Value::Array(docs)) => docs,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        };

        let mut pages = Vec::new();
        for (index, doc) in docs.into_iter().enumerate() {
            match PageDoc::from_value(doc) {
                Ok(page) => pages.push(page),
                Err(err) => warn!(%err, index, "skipping page"),
            }
        }
        debug!(pages = pages.len(), nav = header.nav_items.len(), "seed content loaded");

        Ok(Self {
            header,
            pages,
            settings: SiteSettings::default(),
            fallback_locale: config.fallback_locale.clone(),
        })
    }
}

impl ContentSource for EmbeddedContent {
    fn header(&self, _locale: &str) -> Option<HeaderData> {
        Some(self.header.clone())
    }

    fn page_by_slug(&self, slug: &str, locale: &str) -> Option<PageDoc> {
        self.pages
            .iter()
            .find(|page| page.matches_slug(slug, locale, &self.fallback_locale))
            .cloned()
    }

    fn settings(&self) -> SiteSettings {
        self.settings.clone()
    }
}
