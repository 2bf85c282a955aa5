use crate::config::Config;
use crate::i18n::LocalePrefix;
use serde::Serialize;

/// Social preview image, relative to the site URL.
pub const OG_IMAGE_PATH: &str = "/images/og-image.png";
pub const OG_IMAGE_WIDTH: u32 = 1200;
pub const OG_IMAGE_HEIGHT: u32 = 630;
pub const OG_IMAGE_TYPE: &str = "image/png";

/// Organization logo, relative to the site URL.
pub const LOGO_PATH: &str = "/images/logo-black.svg";
pub const LOGO_WIDTH: u32 = 110;
pub const LOGO_HEIGHT: u32 = 44;

/// Profiles listed as `sameAs` on the organization node.
pub const SOCIAL_PROFILES: [&str; 6] = [
    "https://www.linkedin.com/company/placy-ai/",
    "https://x.com/Placy_ai",
    "https://www.facebook.com/placyai/",
    "https://www.instagram.com/placy.ai/",
    "https://www.youtube.com/@placyai",
    "https://www.tiktok.com/@placy",
];

/// Site-wide constants shared by every SEO builder.
///
/// Built once from `Config` and passed by reference; never mutated. All URL
/// builders read `locale_prefix` from here so the policy is applied the same
/// way everywhere.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    /// Scheme and host without a trailing slash (e.g., "https://www.placy.ai")
    pub url: String,
    pub name: String,
    pub twitter_handle: String,
    pub locale_prefix: LocalePrefix,
}

impl Site {
    pub fn new(
        url: impl Into<String>,
        name: impl Into<String>,
        twitter_handle: impl Into<String>,
        locale_prefix: LocalePrefix,
    ) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            name: name.into(),
            twitter_handle: twitter_handle.into(),
            locale_prefix,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.site_url.as_str(),
            config.site_name.as_str(),
            config.twitter_handle.as_str(),
            config.locale_prefix,
        )
    }

    /// Absolute URL for a site-relative path, without locale handling.
    pub fn absolute(&self, path: &str) -> String {
        format!("{}{}", self.url, path)
    }

    /// `{url}/#{fragment}` identifier used by the JSON-LD graph.
    pub fn node_id(&self, fragment: &str) -> String {
        format!("{}/#{}", self.url, fragment)
    }

    pub fn og_image_url(&self) -> String {
        self.absolute(OG_IMAGE_PATH)
    }
}

impl Default for Site {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
