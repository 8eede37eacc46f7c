//! Locale segments in site paths.
//!
//! Every internal route lives under `/{locale}`. `localize` adds that
//! segment to CMS-supplied paths; `compute_target_path` swaps it when the
//! visitor changes language.

/// Prefix an internal path with `/{locale}`.
///
/// Left untouched: empty paths, a missing locale, absolute `http(s)://`
/// URLs, `mailto:` / `tel:` targets, anything not starting with `/`, and
/// paths already under `/{locale}`. Applying it twice is the same as once.
pub fn localize(path: &str, locale: Option<&str>) -> String {
    let Some(locale) = locale.filter(|l| !l.is_empty()) else {
        return path.to_string();
    };
    if path.is_empty() || is_external(path) || !path.starts_with('/') {
        return path.to_string();
    }
    if has_locale_segment(path, locale) {
        return path.to_string();
    }
    if path == "/" {
        return format!("/{locale}");
    }
    format!("/{locale}{path}")
}

/// Path to navigate to when switching from `current_locale` to `next_locale`.
///
/// `None` means "stay put": the locales are the same.
pub fn compute_target_path(
    current_path: &str,
    current_locale: &str,
    next_locale: &str,
) -> Option<String> {
    if next_locale == current_locale {
        return None;
    }

    let remainder = strip_locale_segment(current_path, current_locale);
    let normalized = if remainder.starts_with('/') {
        remainder.to_string()
    } else {
        format!("/{remainder}")
    };

    if normalized == "/" {
        Some(format!("/{next_locale}"))
    } else {
        Some(format!("/{next_locale}{normalized}"))
    }
}

/// First path segment, when the path has one (`/fr/about` → `fr`).
pub fn leading_segment(path: &str) -> Option<&str> {
    path.strip_prefix('/')?
        .split('/')
        .next()
        .filter(|s| !s.is_empty())
}

fn is_external(path: &str) -> bool {
    let lower = path
        .get(..8)
        .map(str::to_ascii_lowercase)
        .unwrap_or_else(|| path.to_ascii_lowercase());
    lower.starts_with("http://")
        || lower.starts_with("https://")
        || path.starts_with("mailto:")
        || path.starts_with("tel:")
}

fn has_locale_segment(path: &str, locale: &str) -> bool {
    match path.strip_prefix('/').and_then(|rest| rest.strip_prefix(locale)) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Drop a leading `/{locale}` only when it is a whole segment.
fn strip_locale_segment<'a>(path: &'a str, locale: &str) -> &'a str {
    if locale.is_empty() {
        return path;
    }
    match path.strip_prefix('/').and_then(|rest| rest.strip_prefix(locale)) {
        Some(rest) if rest.is_empty() || rest.starts_with('/') => rest,
        _ => path,
    }
}
