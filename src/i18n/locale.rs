//! Locale type: validated locale handle.
//!
//! A `Locale` can only be constructed for codes that exist in the registry and
//! are enabled, so every builder in `seo` can take one without re-checking.

use crate::i18n::{Direction, LocaleConfig, LocaleRegistry, LocaleStrings};
use anyhow::{bail, Result};
use serde::{Serialize, Serializer};
use std::fmt;

/// A validated locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale {
    /// Registry code (e.g., "en", "ar")
    code: &'static str,
}

impl Locale {
    pub const ENGLISH: Locale = Locale { code: "en" };
    pub const GREEK: Locale = Locale { code: "el" };
    pub const SPANISH: Locale = Locale { code: "es" };
    pub const ARABIC: Locale = Locale { code: "ar" };

    /// Create a Locale from a code string.
    ///
    /// # Returns
    /// * `Ok(Locale)` if the code is known and the locale is enabled
    /// * `Err` if the code is not found or the locale is disabled
    ///
    /// # Example
    /// ```ignore
    /// let greek = Locale::from_code("el")?;
    /// ```
    pub fn from_code(code: &str) -> Result<Locale> {
        match LocaleRegistry::get().get_by_code(code) {
            Some(config) if config.enabled => Ok(Locale { code: config.code }),
            Some(_) => bail!("Locale '{}' is not enabled", code),
            None => bail!("Unknown locale code: '{}'", code),
        }
    }

    /// The default locale from the registry.
    pub fn default_locale() -> Locale {
        Locale {
            code: LocaleRegistry::get().default_locale().code,
        }
    }

    /// All enabled locales, in registry order.
    pub fn all() -> Vec<Locale> {
        LocaleRegistry::get()
            .codes()
            .into_iter()
            .map(|code| Locale { code })
            .collect()
    }

    /// Locale code as it appears in URLs (e.g., "el").
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full locale configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry. This cannot happen for a
    /// Locale built through `from_code` or the constants.
    pub fn config(&self) -> &'static LocaleConfig {
        LocaleRegistry::get()
            .get_by_code(self.code)
            .expect("Locale code should always be valid")
    }

    /// English display name.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Name in the locale's own language (e.g., "Ελληνικά").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Open Graph tag for this locale (e.g., "el_GR").
    pub fn og_locale(&self) -> &'static str {
        self.config().og_locale
    }

    /// Text direction for the `dir` attribute.
    pub fn direction(&self) -> Direction {
        self.config().direction
    }

    /// Whether this is the registry's default locale.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// Localized strings for this locale.
    pub fn strings(&self) -> &'static LocaleStrings {
        LocaleStrings::for_code(self.code)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Locale {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
