//! hreflang alternates for cross-locale discovery.

use crate::i18n::Locale;
use crate::seo::Site;
use serde::Serialize;
use std::collections::BTreeMap;

/// hreflang key that points crawlers at the default locale.
pub const X_DEFAULT: &str = "x-default";

/// Canonical URL plus per-locale alternate URLs of one logical page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Alternates {
    /// Set per page by the metadata assembler
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical: Option<String>,

    /// Locale code (or `x-default`) to absolute URL
    pub languages: BTreeMap<String, String>,
}

impl Site {
    /// Map every enabled locale, plus `x-default`, to its URL for `pathname`.
    pub fn alternate_languages(&self, pathname: &str) -> BTreeMap<String, String> {
        let mut languages: BTreeMap<String, String> = Locale::all()
            .into_iter()
            .map(|locale| {
                (
                    locale.code().to_string(),
                    self.localized_url(locale, pathname),
                )
            })
            .collect();

        languages.insert(
            X_DEFAULT.to_string(),
            self.localized_url(Locale::default_locale(), pathname),
        );

        languages
    }

    /// Alternates for `pathname` with no canonical set.
    pub fn alternates(&self, pathname: &str) -> Alternates {
        Alternates {
            canonical: None,
            languages: self.alternate_languages(pathname),
        }
    }
}
