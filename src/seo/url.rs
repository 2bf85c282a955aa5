//! URL builder: absolute, locale-aware URLs for site pages.

use crate::i18n::{routing, Locale};
use crate::seo::Site;
use std::borrow::Cow;

/// `"/"` and `""` collapse to nothing; other paths get a leading slash.
fn normalize_path(pathname: &str) -> Cow<'_, str> {
    match pathname {
        "" | "/" => Cow::Borrowed(""),
        p if p.starts_with('/') => Cow::Borrowed(p),
        p => Cow::Owned(format!("/{}", p)),
    }
}

impl Site {
    /// Build the full URL for a locale and pathname.
    ///
    /// The root path produces no trailing slash: `https://host/en`, or
    /// `https://host` for an unprefixed default locale.
    pub fn localized_url(&self, locale: Locale, pathname: &str) -> String {
        let path = normalize_path(pathname);
        if self.locale_prefix.is_prefixed(locale) {
            format!("{}/{}{}", self.url, locale.code(), path)
        } else {
            format!("{}{}", self.url, path)
        }
    }

    /// Canonical URL of a locale's home page.
    pub fn locale_home_url(&self, locale: Locale) -> String {
        self.localized_url(locale, "/")
    }

    /// Recover the locale and path from a URL produced by `localized_url`.
    ///
    /// Returns `None` for URLs on another host, or URLs that carry no prefix
    /// when the policy requires one.
    pub fn split_localized_url(&self, url: &str) -> Option<(Locale, String)> {
        let rest = url.strip_prefix(self.url.as_str())?;
        if !(rest.is_empty() || rest.starts_with('/')) {
            return None;
        }

        if let Some((locale, path)) = routing::split_locale(rest) {
            if self.locale_prefix.is_prefixed(locale) {
                return Some((locale, path));
            }
        }

        let default = Locale::default_locale();
        if self.locale_prefix.is_prefixed(default) {
            return None;
        }
        let path = if rest.is_empty() { "/" } else { rest };
        Some((default, path.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalePrefix;
    use proptest::prelude::*;

    fn site(prefix: LocalePrefix) -> Site {
        Site::new("https://example.com", "Example", "@example", prefix)
    }

    // ==================== Always Policy Tests ====================

    #[test]
    fn test_always_prefixes_every_locale() {
        let site = site(LocalePrefix::Always);
        assert_eq!(
            site.localized_url(Locale::SPANISH, "/about"),
            "https://example.com/es/about"
        );
        assert_eq!(
            site.localized_url(Locale::ENGLISH, "/about"),
            "https://example.com/en/about"
        );
    }

    #[test]
    fn test_root_path_has_no_trailing_segment() {
        let site = site(LocalePrefix::Always);
        assert_eq!(site.localized_url(Locale::GREEK, "/"), "https://example.com/el");
        assert_eq!(site.localized_url(Locale::GREEK, ""), "https://example.com/el");
        assert_eq!(site.locale_home_url(Locale::ARABIC), "https://example.com/ar");
    }

    #[test]
    fn test_missing_leading_slash_is_added() {
        let site = site(LocalePrefix::Always);
        assert_eq!(
            site.localized_url(Locale::SPANISH, "about"),
            "https://example.com/es/about"
        );
    }

    // ==================== As-Needed Policy Tests ====================

    #[test]
    fn test_as_needed_default_is_unprefixed() {
        let site = site(LocalePrefix::AsNeeded);
        assert_eq!(
            site.localized_url(Locale::ENGLISH, "/about"),
            "https://example.com/about"
        );
        assert_eq!(site.localized_url(Locale::ENGLISH, "/"), "https://example.com");
        assert_eq!(
            site.localized_url(Locale::ARABIC, "/about"),
            "https://example.com/ar/about"
        );
    }

    // ==================== Split Tests ====================

    #[test]
    fn test_split_always() {
        let site = site(LocalePrefix::Always);
        assert_eq!(
            site.split_localized_url("https://example.com/es/about"),
            Some((Locale::SPANISH, "/about".to_string()))
        );
        assert_eq!(site.split_localized_url("https://example.com/about"), None);
        assert_eq!(site.split_localized_url("https://other.com/es"), None);
        assert_eq!(site.split_localized_url("https://example.com.evil/es"), None);
    }

    #[test]
    fn test_split_as_needed_root() {
        let site = site(LocalePrefix::AsNeeded);
        assert_eq!(
            site.split_localized_url("https://example.com"),
            Some((Locale::ENGLISH, "/".to_string()))
        );
    }

    // ==================== Property Tests ====================

    fn path_strategy() -> impl Strategy<Value = String> {
        prop_oneof![
            Just("/".to_string()),
            prop::collection::vec("[a-z][a-z0-9-]{2,10}", 1..4)
                .prop_map(|segments| format!("/{}", segments.join("/"))),
        ]
    }

    fn prefix_strategy() -> impl Strategy<Value = LocalePrefix> {
        prop_oneof![Just(LocalePrefix::Always), Just(LocalePrefix::AsNeeded)]
    }

    fn locale_strategy() -> impl Strategy<Value = Locale> {
        prop::sample::select(Locale::all())
    }

    proptest! {
        #[test]
        fn prop_url_starts_with_site_url(
            prefix in prefix_strategy(),
            locale in locale_strategy(),
            path in path_strategy(),
        ) {
            let url = site(prefix).localized_url(locale, &path);
            prop_assert!(url.starts_with("https://example.com"));
        }

        #[test]
        fn prop_prefix_policy_is_consistent(
            prefix in prefix_strategy(),
            locale in locale_strategy(),
            path in path_strategy(),
        ) {
            let url = site(prefix).localized_url(locale, &path);
            let with_code = format!("https://example.com/{}", locale.code());
            let has_prefix = url == with_code || url.starts_with(&format!("{}/", with_code));
            prop_assert_eq!(has_prefix, prefix.is_prefixed(locale));
        }

        #[test]
        fn prop_split_recovers_locale_and_path(
            prefix in prefix_strategy(),
            locale in locale_strategy(),
            path in path_strategy(),
        ) {
            let site = site(prefix);
            let url = site.localized_url(locale, &path);
            prop_assert_eq!(site.split_localized_url(&url), Some((locale, path)));
        }
    }
}
