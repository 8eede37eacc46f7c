//! Site configuration: served locales and header-menu timing.
//!
//! Loaded from `content/site.json` (embedded at compile time). Every field
//! has a default, so a partial file is fine. A file that fails validation is
//! reported and the defaults are used instead.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

const EMBEDDED_SITE_JSON: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/content/site.json"
));

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid site config JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    /// Locales the site serves, in switcher order.
    pub locales: Vec<String>,
    /// Where `/` redirects to.
    pub default_locale: String,
    /// Used when a CMS value is missing in the requested locale.
    pub fallback_locale: String,
    pub menu: MenuConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MenuConfig {
    /// Grace period before an open dropdown closes after the pointer leaves.
    pub close_delay_ms: u64,
    pub max_nav_items: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            locales: vec!["en".to_string(), "fr".to_string()],
            default_locale: "en".to_string(),
            fallback_locale: "en".to_string(),
            menu: MenuConfig::default(),
        }
    }
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            close_delay_ms: 140,
            max_nav_items: 6,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// The configuration compiled into the binary.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_SITE_JSON) {
            Ok(config) => config,
            Err(err) => {
                warn!(%err, "embedded site config rejected; using defaults");
                Self::default()
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.locales.is_empty() {
            return Err(ConfigError::Validation(
                "locales must list at least one locale".into(),
            ));
        }
        if self.locales.iter().any(|l| l.is_empty() || l.contains('/')) {
            return Err(ConfigError::Validation(
                "locale codes must be non-empty path segments".into(),
            ));
        }
        if !self.supports(&self.default_locale) {
            return Err(ConfigError::Validation(format!(
                "defaultLocale `{}` is not in locales",
                self.default_locale
            )));
        }
        if !self.supports(&self.fallback_locale) {
            return Err(ConfigError::Validation(format!(
                "fallbackLocale `{}` is not in locales",
                self.fallback_locale
            )));
        }
        if self.menu.close_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "menu.closeDelayMs must be greater than zero".into(),
            ));
        }
        Ok(())
    }

    pub fn supports(&self, locale: &str) -> bool {
        self.locales.iter().any(|l| l == locale)
    }
}
