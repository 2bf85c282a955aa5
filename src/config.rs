use crate::i18n::LocalePrefix;
use anyhow::{bail, Context, Result};

pub const DEFAULT_SITE_URL: &str = "https://www.placy.ai";
pub const DEFAULT_SITE_NAME: &str = "Placy Pro";
pub const DEFAULT_TWITTER_HANDLE: &str = "@Placy_ai";

#[derive(Debug, Clone)]
pub struct Config {
    // Site identity
    pub site_url: String,
    pub site_name: String,
    pub twitter_handle: String,

    // Routing
    pub locale_prefix: LocalePrefix,

    // Server
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            site_url: DEFAULT_SITE_URL.to_string(),
            site_name: DEFAULT_SITE_NAME.to_string(),
            twitter_handle: DEFAULT_TWITTER_HANDLE.to_string(),
            locale_prefix: LocalePrefix::Always,
            port: 8080,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let site_url = std::env::var("SITE_URL").unwrap_or_else(|_| DEFAULT_SITE_URL.to_string());
        if !(site_url.starts_with("https://") || site_url.starts_with("http://")) {
            bail!("SITE_URL must start with http:// or https://, got '{}'", site_url);
        }

        let locale_prefix = match std::env::var("LOCALE_PREFIX") {
            Ok(value) => LocalePrefix::parse(&value).context("LOCALE_PREFIX is invalid")?,
            Err(_) => LocalePrefix::Always,
        };

        Ok(Self {
            site_url: site_url.trim_end_matches('/').to_string(),
            site_name: std::env::var("SITE_NAME")
                .unwrap_or_else(|_| DEFAULT_SITE_NAME.to_string()),
            twitter_handle: std::env::var("TWITTER_HANDLE")
                .unwrap_or_else(|_| DEFAULT_TWITTER_HANDLE.to_string()),
            locale_prefix,
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 5] = [
        "SITE_URL",
        "SITE_NAME",
        "TWITTER_HANDLE",
        "LOCALE_PREFIX",
        "PORT",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        let config = Config::from_env().expect("Should load defaults");
        assert_eq!(config.site_url, "https://www.placy.ai");
        assert_eq!(config.site_name, "Placy Pro");
        assert_eq!(config.twitter_handle, "@Placy_ai");
        assert_eq!(config.locale_prefix, LocalePrefix::Always);
        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        std::env::set_var("SITE_URL", "https://example.com/");
        std::env::set_var("LOCALE_PREFIX", "as-needed");
        std::env::set_var("PORT", "3000");
        let config = Config::from_env().expect("Should load overrides");
        clear_env();

        assert_eq!(config.site_url, "https://example.com");
        assert_eq!(config.locale_prefix, LocalePrefix::AsNeeded);
        assert_eq!(config.port, 3000);
    }

    #[test]
    #[serial]
    fn test_from_env_invalid_port_uses_default() {
        clear_env();
        std::env::set_var("PORT", "not-a-port");
        let config = Config::from_env().unwrap();
        clear_env();
        assert_eq!(config.port, 8080);
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_invalid_prefix() {
        clear_env();
        std::env::set_var("LOCALE_PREFIX", "sometimes");
        let result = Config::from_env();
        clear_env();
        assert!(result.is_err());
        assert!(format!("{:#}", result.unwrap_err()).contains("LOCALE_PREFIX"));
    }

    #[test]
    #[serial]
    fn test_from_env_rejects_url_without_scheme() {
        clear_env();
        std::env::set_var("SITE_URL", "www.placy.ai");
        let result = Config::from_env();
        clear_env();
        assert!(result.is_err());
    }

    #[test]
    fn test_default_matches_env_defaults() {
        let config = Config::default();
        assert_eq!(config.site_url, DEFAULT_SITE_URL);
        assert_eq!(config.locale_prefix, LocalePrefix::Always);
    }
}
