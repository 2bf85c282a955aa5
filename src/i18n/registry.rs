//! Locale registry: Single source of truth for all supported locales.
//!
//! This module provides a centralized registry of every locale the site is
//! published in. It uses a singleton pattern with `OnceLock` so the table is
//! built once on first access and stays immutable for the life of the process.

use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashSet;
use std::sync::OnceLock;

/// Text direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Ltr,
    Rtl,
}

impl Direction {
    /// Value for the HTML `dir` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Ltr => "ltr",
            Direction::Rtl => "rtl",
        }
    }
}

/// Configuration for a supported locale.
///
/// Contains all metadata for a specific locale, including its URL code,
/// display names, Open Graph tag and text direction.
#[derive(Debug, Clone)]
pub struct LocaleConfig {
    /// Locale code used in URLs and hreflang (e.g., "en", "ar")
    pub code: &'static str,

    /// English name of the locale (e.g., "English", "Greek")
    pub name: &'static str,

    /// Native name of the locale (e.g., "English", "Ελληνικά")
    pub native_name: &'static str,

    /// Open Graph locale tag (e.g., "en_US", "el_GR")
    pub og_locale: &'static str,

    /// Text direction for the `<html dir>` attribute
    pub direction: Direction,

    /// Whether this is the default locale (exactly one must be true)
    pub is_default: bool,

    /// Whether this locale is published
    pub enabled: bool,
}

/// Global locale registry singleton.
///
/// Holds all supported locales in their declared order. Iteration order is
/// significant: alternates, sitemap entries and Open Graph alternates all
/// follow it.
#[derive(Debug)]
pub struct LocaleRegistry {
    locales: Vec<LocaleConfig>,
    default_index: usize,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LocaleRegistry> = OnceLock::new();

impl LocaleRegistry {
    /// Build a registry from a locale table.
    ///
    /// # Returns
    /// * `Ok(LocaleRegistry)` if the table is non-empty, codes are unique and
    ///   exactly one enabled locale is marked default
    /// * `Err` describing the first violated rule otherwise
    pub fn new(locales: Vec<LocaleConfig>) -> Result<Self> {
        if locales.is_empty() {
            bail!("Locale registry must contain at least one locale");
        }

        let mut seen = HashSet::new();
        for locale in &locales {
            if locale.code.is_empty() {
                bail!("Locale code must not be empty");
            }
            if !seen.insert(locale.code) {
                bail!("Duplicate locale code: '{}'", locale.code);
            }
        }

        let defaults: Vec<usize> = locales
            .iter()
            .enumerate()
            .filter(|(_, locale)| locale.is_default)
            .map(|(index, _)| index)
            .collect();

        let default_index = match defaults.as_slice() {
            [] => bail!("No default locale found in registry"),
            [index] => *index,
            _ => bail!("Multiple default locales found in registry"),
        };

        if !locales[default_index].enabled {
            bail!(
                "Default locale '{}' must be enabled",
                locales[default_index].code
            );
        }

        Ok(Self {
            locales,
            default_index,
        })
    }

    /// Get the global locale registry instance.
    ///
    /// This method initializes the registry on first call and returns a reference
    /// to the singleton instance on subsequent calls.
    ///
    /// # Panics
    /// Panics if the built-in locale table is invalid. The table is a compile-time
    /// constant covered by tests, so this indicates a programming error.
    pub fn get() -> &'static LocaleRegistry {
        REGISTRY.get_or_init(|| {
            LocaleRegistry::new(default_locales()).expect("Built-in locale table should be valid")
        })
    }

    /// Get a locale configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LocaleConfig)` if the locale exists
    /// * `None` if the locale is not found
    pub fn get_by_code(&self, code: &str) -> Option<&LocaleConfig> {
        self.locales.iter().find(|locale| locale.code == code)
    }

    /// Get all enabled locales, in registry order.
    pub fn list_enabled(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().filter(|locale| locale.enabled).collect()
    }

    /// Get all locales (including disabled ones).
    pub fn list_all(&self) -> Vec<&LocaleConfig> {
        self.locales.iter().collect()
    }

    /// Codes of all enabled locales, in registry order.
    pub fn codes(&self) -> Vec<&'static str> {
        self.locales
            .iter()
            .filter(|locale| locale.enabled)
            .map(|locale| locale.code)
            .collect()
    }

    /// Get the default locale configuration.
    ///
    /// The default locale backs the `x-default` alternate and is the fallback
    /// when no preference can be detected from a request.
    pub fn default_locale(&self) -> &LocaleConfig {
        &self.locales[self.default_index]
    }

    /// Check if a locale code is supported and enabled.
    pub fn is_enabled(&self, code: &str) -> bool {
        self.get_by_code(code)
            .map(|locale| locale.enabled)
            .unwrap_or(false)
    }
}

/// Default locale configurations.
///
/// English (default), Greek, Spanish and Arabic.
fn default_locales() -> Vec<LocaleConfig> {
    vec![
        LocaleConfig {
            code: "en",
            name: "English",
            native_name: "English",
            og_locale: "en_US",
            direction: Direction::Ltr,
            is_default: true,
            enabled: true,
        },
        LocaleConfig {
            code: "el",
            name: "Greek",
            native_name: "Ελληνικά",
            og_locale: "el_GR",
            direction: Direction::Ltr,
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            og_locale: "es_ES",
            direction: Direction::Ltr,
            is_default: false,
            enabled: true,
        },
        LocaleConfig {
            code: "ar",
            name: "Arabic",
            native_name: "العربية",
            og_locale: "ar_AE",
            direction: Direction::Rtl,
            is_default: false,
            enabled: true,
        },
    ]
}
