//! Open Graph locale tags.

use crate::i18n::{Locale, LocaleRegistry};

/// Tag used when a code is not in the registry.
pub const DEFAULT_OG_LOCALE: &str = "en_US";

/// Open Graph tag for a locale code, falling back to `en_US` for unknown codes.
pub fn og_locale(code: &str) -> &'static str {
    LocaleRegistry::get()
        .get_by_code(code)
        .map(|config| config.og_locale)
        .unwrap_or(DEFAULT_OG_LOCALE)
}

/// Tags of every other enabled locale, in registry order.
pub fn og_locale_alternates(current: Locale) -> Vec<&'static str> {
    LocaleRegistry::get()
        .list_enabled()
        .into_iter()
        .filter(|config| config.code != current.code())
        .map(|config| config.og_locale)
        .collect()
}
