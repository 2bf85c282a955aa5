//! Locale routing: decides, for an incoming request path, which locale serves it
//! or where the visitor should be redirected.

use crate::i18n::{Locale, LocaleRegistry};
use anyhow::{bail, Result};
use regex::Regex;
use serde::Serialize;
use std::sync::OnceLock;

/// Cookie that remembers an explicit locale choice.
pub const LOCALE_COOKIE: &str = "locale";

/// How locale codes appear in URL paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocalePrefix {
    /// Every locale, the default included, is prefixed (`/en`, `/es/about`).
    #[default]
    Always,
    /// Only non-default locales are prefixed; the default locale lives at the root.
    AsNeeded,
}

impl LocalePrefix {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim() {
            "always" => Ok(LocalePrefix::Always),
            "as-needed" => Ok(LocalePrefix::AsNeeded),
            other => bail!(
                "Invalid locale prefix policy: '{}'. Expected 'always' or 'as-needed'",
                other
            ),
        }
    }

    /// Whether URLs for `locale` carry its code as the first path segment.
    pub fn is_prefixed(&self, locale: Locale) -> bool {
        match self {
            LocalePrefix::Always => true,
            LocalePrefix::AsNeeded => !locale.is_default(),
        }
    }
}

/// Outcome of routing a request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Not subject to locale routing (API, build artifacts, static files).
    Bypass,
    /// Render `path` (locale prefix removed, always starting with `/`) in `locale`.
    Serve { locale: Locale, path: String },
    /// Send the visitor elsewhere with a temporary redirect.
    Redirect { location: String },
}

static BYPASS_REGEX: OnceLock<Regex> = OnceLock::new();

fn bypass_regex() -> &'static Regex {
    BYPASS_REGEX.get_or_init(|| {
        Regex::new(r"^/(?:api|_next|_vercel)(?:/|$)|\.[^/]*$").expect("Invalid bypass regex")
    })
}

/// Whether a path skips locale routing entirely.
pub fn is_bypassed(path: &str) -> bool {
    bypass_regex().is_match(path)
}

/// Split a leading locale segment off `path`.
///
/// Returns the locale and the remaining path (`"/"` when nothing follows the
/// code), or `None` if the first segment is not an enabled locale code.
pub fn split_locale(path: &str) -> Option<(Locale, String)> {
    let trimmed = path.strip_prefix('/').unwrap_or(path);
    let (segment, rest) = match trimmed.find('/') {
        Some(index) => (&trimmed[..index], &trimmed[index..]),
        None => (trimmed, ""),
    };

    let locale = Locale::from_code(segment).ok()?;
    Some((locale, collapse_leading_slashes(rest)))
}

/// Reduce any run of leading `/` or `\` to a single `/`.
///
/// A remainder like `//host/x` would otherwise become a protocol-relative
/// `Location` once the locale prefix is stripped.
fn collapse_leading_slashes(path: &str) -> String {
    format!("/{}", path.trim_start_matches(['/', '\\']))
}

/// Whether routing `path` consults the visitor's cookie and `Accept-Language`.
///
/// True for routed paths without a locale prefix; responses to them must
/// carry `Vary: Cookie, Accept-Language`.
pub fn uses_detection(path: &str) -> bool {
    !is_bypassed(path) && split_locale(path).is_none()
}

/// Build a site-relative path for `locale` under `prefix`.
pub fn localized_path(prefix: LocalePrefix, locale: Locale, path: &str) -> String {
    let path = match collapse_leading_slashes(path) {
        p if p == "/" => String::new(),
        p => p,
    };
    if prefix.is_prefixed(locale) {
        format!("/{}{}", locale.code(), path)
    } else if path.is_empty() {
        "/".to_string()
    } else {
        path
    }
}

/// Pick the visitor's preferred locale.
///
/// Chain: `locale` cookie, then `Accept-Language`, then the registry default.
pub fn detect_locale(cookie_header: Option<&str>, accept_language: Option<&str>) -> Locale {
    if let Some(locale) = cookie_header.and_then(|header| parse_cookie_locale(header, LOCALE_COOKIE))
    {
        return locale;
    }

    if let Some(locale) = accept_language.and_then(parse_accept_language) {
        return locale;
    }

    Locale::default_locale()
}

fn parse_cookie_locale(header: &str, name: &str) -> Option<Locale> {
    header
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == name)
        .and_then(|(_, value)| Locale::from_code(value.trim()).ok())
}

fn parse_accept_language(header: &str) -> Option<Locale> {
    let mut entries: Vec<(&str, f64)> = header
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut segments = part.split(';');
            let tag = segments.next().unwrap_or("").trim();
            // Weights outside 0..=1 are invalid and drop the entry
            let quality = segments
                .find_map(|s| s.trim().strip_prefix("q="))
                .map(|q| {
                    q.parse::<f64>()
                        .ok()
                        .filter(|q| (0.0..=1.0).contains(q))
                        .unwrap_or(0.0)
                })
                .unwrap_or(1.0);
            (tag, quality)
        })
        .filter(|(_, quality)| *quality > 0.0)
        .collect();

    // Stable sort keeps header order among equal weights
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    entries.iter().find_map(|(tag, _)| locale_for_tag(tag))
}

/// Match a language tag exactly, then by its primary subtag (`es-MX` -> `es`).
fn locale_for_tag(tag: &str) -> Option<Locale> {
    let tag = tag.to_ascii_lowercase();
    let primary = tag.split('-').next().unwrap_or("");
    let registry = LocaleRegistry::get();

    let candidate = if registry.is_enabled(&tag) {
        tag.as_str()
    } else if registry.is_enabled(primary) {
        primary
    } else {
        return None;
    };
    Locale::from_code(candidate).ok()
}

/// Route an incoming request path.
pub fn route_request(
    prefix: LocalePrefix,
    path: &str,
    cookie_header: Option<&str>,
    accept_language: Option<&str>,
) -> RouteDecision {
    if is_bypassed(path) {
        return RouteDecision::Bypass;
    }

    if let Some((locale, rest)) = split_locale(path) {
        if prefix.is_prefixed(locale) {
            return RouteDecision::Serve { locale, path: rest };
        }
        return RouteDecision::Redirect {
            location: localized_path(prefix, locale, &rest),
        };
    }

    let path = if path.is_empty() { "/" } else { path };
    let detected = detect_locale(cookie_header, accept_language);

    if prefix.is_prefixed(detected) {
        RouteDecision::Redirect {
            location: localized_path(prefix, detected, path),
        }
    } else {
        RouteDecision::Serve {
            locale: detected,
            path: path.to_string(),
        }
    }
}
