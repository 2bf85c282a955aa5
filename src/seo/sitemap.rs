//! Sitemap generation with hreflang annotations for every locale variant.

use crate::i18n::Locale;
use crate::seo::Site;
use anyhow::{Context, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use serde::Serialize;
use std::collections::BTreeMap;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";
const XHTML_NS: &str = "http://www.w3.org/1999/xhtml";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFrequency {
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl ChangeFrequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeFrequency::Always => "always",
            ChangeFrequency::Hourly => "hourly",
            ChangeFrequency::Daily => "daily",
            ChangeFrequency::Weekly => "weekly",
            ChangeFrequency::Monthly => "monthly",
            ChangeFrequency::Yearly => "yearly",
            ChangeFrequency::Never => "never",
        }
    }
}

/// A page published in every locale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageDescriptor {
    pub pathname: &'static str,
    /// Relative importance, 0.0 to 1.0
    pub priority: f32,
    pub change_frequency: ChangeFrequency,
}

/// All pages that exist on the site.
pub const PAGES: &[PageDescriptor] = &[PageDescriptor {
    pathname: "/",
    priority: 1.0,
    change_frequency: ChangeFrequency::Weekly,
}];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SitemapEntry {
    pub url: String,
    pub last_modified: DateTime<Utc>,
    pub change_frequency: ChangeFrequency,
    pub priority: f32,
    /// Locale code (or `x-default`) to absolute URL
    pub alternates: BTreeMap<String, String>,
}

/// One entry per page and locale, locales iterated inside pages.
pub fn generate(
    site: &Site,
    pages: &[PageDescriptor],
    last_modified: DateTime<Utc>,
) -> Vec<SitemapEntry> {
    let locales = Locale::all();
    let mut entries = Vec::with_capacity(pages.len() * locales.len());

    for page in pages {
        for &locale in &locales {
            entries.push(SitemapEntry {
                url: site.localized_url(locale, page.pathname),
                last_modified,
                change_frequency: page.change_frequency,
                priority: page.priority.clamp(0.0, 1.0),
                alternates: site.alternate_languages(page.pathname),
            });
        }
    }

    entries
}

fn write_text_element(writer: &mut Writer<Vec<u8>>, name: &str, text: &str) -> Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Serialize entries as a sitemaps.org `urlset` with `xhtml:link` alternates.
pub fn render_xml(entries: &[SitemapEntry]) -> Result<String> {
    let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);

    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;

    let mut urlset = BytesStart::new("urlset");
    urlset.push_attribute(("xmlns", SITEMAP_NS));
    urlset.push_attribute(("xmlns:xhtml", XHTML_NS));
    writer.write_event(Event::Start(urlset))?;

    for entry in entries {
        writer.write_event(Event::Start(BytesStart::new("url")))?;
        write_text_element(&mut writer, "loc", &entry.url)?;

        for (hreflang, href) in &entry.alternates {
            let mut link = BytesStart::new("xhtml:link");
            link.push_attribute(("rel", "alternate"));
            link.push_attribute(("hreflang", hreflang.as_str()));
            link.push_attribute(("href", href.as_str()));
            writer.write_event(Event::Empty(link))?;
        }

        write_text_element(
            &mut writer,
            "lastmod",
            &entry
                .last_modified
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        )?;
        write_text_element(&mut writer, "changefreq", entry.change_frequency.as_str())?;
        write_text_element(&mut writer, "priority", &format!("{:.1}", entry.priority))?;
        writer.write_event(Event::End(BytesEnd::new("url")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("urlset")))?;

    String::from_utf8(writer.into_inner()).context("Sitemap XML is not valid UTF-8")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::LocalePrefix;
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap()
    }

    fn site() -> Site {
        Site::new("https://example.com", "Example", "@example", LocalePrefix::Always)
    }

    // ==================== Generation Tests ====================

    #[test]
    fn test_one_entry_per_page_and_locale() {
        let pages = [
            PAGES[0],
            PageDescriptor {
                pathname: "/pricing",
                priority: 0.8,
                change_frequency: ChangeFrequency::Monthly,
            },
        ];
        let entries = generate(&site(), &pages, timestamp());
        assert_eq!(entries.len(), pages.len() * Locale::all().len());
    }

    #[test]
    fn test_locale_is_inner_loop() {
        let pages = [
            PAGES[0],
            PageDescriptor {
                pathname: "/pricing",
                priority: 0.8,
                change_frequency: ChangeFrequency::Monthly,
            },
        ];
        let urls: Vec<_> = generate(&site(), &pages, timestamp())
            .into_iter()
            .map(|entry| entry.url)
            .collect();
        assert_eq!(
            urls,
            vec![
                "https://example.com/en",
                "https://example.com/el",
                "https://example.com/es",
                "https://example.com/ar",
                "https://example.com/en/pricing",
                "https://example.com/el/pricing",
                "https://example.com/es/pricing",
                "https://example.com/ar/pricing",
            ]
        );
    }

    #[test]
    fn test_entries_carry_all_alternates() {
        let entries = generate(&site(), PAGES, timestamp());
        for entry in &entries {
            assert_eq!(entry.alternates.len(), Locale::all().len() + 1);
            assert_eq!(entry.alternates["x-default"], "https://example.com/en");
            assert_eq!(entry.change_frequency, ChangeFrequency::Weekly);
            assert_eq!(entry.priority, 1.0);
            assert_eq!(entry.last_modified, timestamp());
        }
    }

    #[test]
    fn test_priority_is_clamped() {
        let pages = [PageDescriptor {
            pathname: "/",
            priority: 1.5,
            change_frequency: ChangeFrequency::Daily,
        }];
        let entries = generate(&site(), &pages, timestamp());
        assert!(entries.iter().all(|entry| entry.priority == 1.0));
    }

    #[test]
    fn test_empty_page_list() {
        assert!(generate(&site(), &[], timestamp()).is_empty());
    }

    // ==================== XML Tests ====================

    #[test]
    fn test_render_xml_structure() {
        let xml = render_xml(&generate(&site(), PAGES, timestamp())).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(r#"xmlns="http://www.sitemaps.org/schemas/sitemap/0.9""#));
        assert!(xml.contains(r#"xmlns:xhtml="http://www.w3.org/1999/xhtml""#));
        assert_eq!(xml.matches("<url>").count(), 4);
        assert!(xml.contains("<loc>https://example.com/es</loc>"));
        assert!(xml.contains(
            r#"<xhtml:link rel="alternate" hreflang="x-default" href="https://example.com/en"/>"#
        ));
        assert!(xml.contains("<lastmod>2026-01-15T09:30:00.000Z</lastmod>"));
        assert!(xml.contains("<changefreq>weekly</changefreq>"));
        assert!(xml.contains("<priority>1.0</priority>"));
        assert!(xml.trim_end().ends_with("</urlset>"));
    }

    #[test]
    fn test_render_xml_escapes_urls() {
        let mut entries = generate(&site(), PAGES, timestamp());
        entries[0].url = "https://example.com/en?a=1&b=2".to_string();
        let xml = render_xml(&entries[..1]).unwrap();
        assert!(xml.contains("<loc>https://example.com/en?a=1&amp;b=2</loc>"));
    }

    #[test]
    fn test_change_frequency_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChangeFrequency::Weekly).unwrap(),
            "\"weekly\""
        );
        assert_eq!(ChangeFrequency::Never.as_str(), "never");
    }
}
