//! Internationalization (i18n) of the site chrome for `forge-ui`.
//!
//! CMS content carries its own translations (`core::localized`). This module
//! covers the strings the site itself owns: header labels, locale switcher,
//! not-found page.
//!
//! It wires together:
//! - `i18n-embed` (language selection + asset loading)
//! - `fluent` (message formatting)
//! - `rust-embed` (compile-time embedding of `.ftl` files)
//! - `i18n-embed-fl` (`fl!` macro for compile‑time checked lookups)
//!
//! Folder layout (relative to this crate root):
//! ```text
//! i18n.toml
//! i18n/
//!   en-US/forge-ui.ftl   (fallback/reference)
//!   fr-FR/forge-ui.ftl
//! ```
//!
//! Site routes use bare language codes (`/fr/...`); `set_site_locale` maps
//! such a code onto the embedded bundle with the same primary language.
use std::sync::{Mutex, Once};

use i18n_embed::fluent::FluentLanguageLoader;
use once_cell::sync::Lazy;
use rust_embed::Embed;
use tracing::{debug, warn};
use unic_langid::LanguageIdentifier;

pub use i18n_embed_fl::fl; // Re-export for convenience.

/// Ergonomic translation macro.
/// Examples:
///     t!("nav-menu-label")
///     t!("locale-switch-to", language = "Français")
///
/// Expands to `fl!(&*LOADER, ...)` so every lookup goes through the shared loader.
#[macro_export]
macro_rules! t {
    ($key:literal) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key)
    };
    ($key:literal, $( $arg:ident = $value:expr ),+ $(,)?) => {
        $crate::i18n::fl!(&*$crate::i18n::LOADER, $key, $( $arg = $value ),+ )
    };
}

/// Fluent "domain" (matches the crate / the fallback FTL filename).
///
/// Fallback file path must be: `i18n/en-US/{DOMAIN}.ftl`
const DOMAIN: &str = "forge-ui";

/// Embed all locale folders under `i18n/`.
#[derive(Embed)]
#[folder = "i18n"]
struct Localizations;

/// Global language loader used with the `fl!` macro.
pub static LOADER: Lazy<FluentLanguageLoader> = Lazy::new(|| {
    let fallback: LanguageIdentifier = "en-US".parse().unwrap_or_default();
    FluentLanguageLoader::new(DOMAIN, fallback)
});

static INIT: Once = Once::new();

/// Site locale the chrome bundle was last switched to.
static ACTIVE_SITE_LOCALE: Lazy<Mutex<Option<String>>> = Lazy::new(|| Mutex::new(None));

/// Initialize i18n (idempotent).
pub fn init() {
    INIT.call_once(|| {
        let requested = requested_languages();
        if let Err(err) = i18n_embed::select(&*LOADER, &Localizations, &requested) {
            warn!(%err, "failed selecting languages; continuing with fallback");
        }
    });
}

/// Switch language at runtime. If `tag` cannot be parsed it is ignored (Ok returned).
pub fn set_language(tag: &str) -> Result<(), i18n_embed::I18nEmbedError> {
    let lang: LanguageIdentifier = match tag.parse() {
        Ok(l) => l,
        Err(_) => return Ok(()),
    };
    i18n_embed::select(&*LOADER, &Localizations, &[lang]).map(|_| ())
}

/// Point the chrome bundle at the site locale of the current route (`fr` → `fr-FR`).
pub fn set_site_locale(locale: &str) {
    init();
    if let Ok(mut active) = ACTIVE_SITE_LOCALE.lock() {
        if active.as_deref() == Some(locale) {
            return;
        }
        *active = Some(locale.to_string());
    }
    let Some(tag) = bundle_for(locale) else {
        debug!(locale, "no chrome bundle for locale; keeping fallback");
        return;
    };
    if let Err(err) = set_language(&tag) {
        warn!(%err, tag = %tag, "failed switching chrome language");
    }
}

/// Embedded bundle whose primary language matches a site locale code.
pub fn bundle_for(locale: &str) -> Option<String> {
    available_languages().into_iter().find(|tag| {
        tag == locale
            || tag
                .split('-')
                .next()
                .is_some_and(|primary| primary.eq_ignore_ascii_case(locale))
    })
}

/// List available (embedded) language identifiers.
pub fn available_languages() -> Vec<String> {
    let mut langs = Localizations::iter()
        .filter_map(|path| path.split('/').next().map(|s| s.to_string()))
        .collect::<Vec<_>>();
    langs.sort();
    langs.dedup();
    langs
}

#[cfg(target_arch = "wasm32")]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::WebLanguageRequester::requested_languages()
}

#[cfg(not(target_arch = "wasm32"))]
fn requested_languages() -> Vec<LanguageIdentifier> {
    i18n_embed::DesktopLanguageRequester::requested_languages()
}
