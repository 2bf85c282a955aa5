//! robots.txt rules.

use crate::seo::Site;
use serde::Serialize;
use std::fmt::Write;

/// Path prefixes crawlers should skip: internal API, build artifacts, CDN internals.
pub const DISALLOWED_PATHS: [&str; 3] = ["/api/", "/_next/", "/cdn-cgi/"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsTxt {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
    pub host: String,
}

impl RobotsTxt {
    /// Allow everything except `DISALLOWED_PATHS`, and point at the sitemap.
    pub fn for_site(site: &Site) -> Self {
        Self {
            rules: vec![RobotsRule {
                user_agent: "*".to_string(),
                allow: vec!["/".to_string()],
                disallow: DISALLOWED_PATHS.iter().map(|p| p.to_string()).collect(),
            }],
            sitemap: site.absolute("/sitemap.xml"),
            host: site.url.clone(),
        }
    }

    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            let _ = writeln!(out, "User-Agent: {}", rule.user_agent);
            for path in &rule.allow {
                let _ = writeln!(out, "Allow: {}", path);
            }
            for path in &rule.disallow {
                let _ = writeln!(out, "Disallow: {}", path);
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Host: {}", self.host);
        let _ = writeln!(out, "Sitemap: {}", self.sitemap);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_site_rules() {
        let robots = RobotsTxt::for_site(&Site::default());
        assert_eq!(robots.rules.len(), 1);
        assert_eq!(robots.rules[0].user_agent, "*");
        assert_eq!(robots.rules[0].allow, vec!["/"]);
        assert_eq!(robots.rules[0].disallow, vec!["/api/", "/_next/", "/cdn-cgi/"]);
        assert_eq!(robots.sitemap, "https://www.placy.ai/sitemap.xml");
        assert_eq!(robots.host, "https://www.placy.ai");
    }

    #[test]
    fn test_to_text() {
        let text = RobotsTxt::for_site(&Site::default()).to_text();
        assert_eq!(
            text,
            "User-Agent: *\n\
             Allow: /\n\
             Disallow: /api/\n\
             Disallow: /_next/\n\
             Disallow: /cdn-cgi/\n\
             \n\
             Host: https://www.placy.ai\n\
             Sitemap: https://www.placy.ai/sitemap.xml\n"
        );
    }
}
