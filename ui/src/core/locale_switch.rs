//! Language switching for the current route.

use tracing::warn;

use super::config::SiteConfig;
use super::locale_path::compute_target_path;

/// The visitor's current locale plus the locales the site serves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleSwitch {
    pub current: String,
    pub supported: Vec<String>,
}

impl LocaleSwitch {
    pub fn new(current: impl Into<String>, config: &SiteConfig) -> Self {
        Self {
            current: current.into(),
            supported: config.locales.clone(),
        }
    }

    pub fn is_current(&self, locale: &str) -> bool {
        self.current == locale
    }

    /// Route to replace the current one with, or `None` to stay put.
    pub fn switch_to(&self, current_path: &str, next: &str) -> Option<String> {
        if !self.supported.iter().any(|l| l == next) {
            warn!(locale = next, "ignoring switch to unsupported locale");
            return None;
        }
        compute_target_path(current_path, &self.current, next)
    }
}
