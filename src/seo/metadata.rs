//! Metadata assembler: everything the document head needs for one localized page.

use crate::i18n::{Locale, LocaleStrings};
use crate::seo::open_graph::{og_locale, og_locale_alternates};
use crate::seo::site::{OG_IMAGE_HEIGHT, OG_IMAGE_TYPE, OG_IMAGE_WIDTH};
use crate::seo::{structured_data, Alternates, Site};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: Title,
    pub description: String,
    pub alternates: Alternates,
    pub open_graph: OpenGraph,
    pub twitter: TwitterCard,
    pub robots: RobotsDirectives,
    pub metadata_base: String,
    /// Extra `<meta name content>` pairs
    pub other: BTreeMap<String, String>,
    pub html: HtmlAttributes,
    pub structured_data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub default: String,
    /// Child pages substitute `%s` with their own title
    pub template: String,
}

impl Title {
    pub fn apply(&self, page_title: &str) -> String {
        self.template.replace("%s", page_title)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraph {
    #[serde(rename = "type")]
    pub og_type: String,
    pub site_name: String,
    pub title: String,
    pub description: String,
    pub url: String,
    pub locale: String,
    pub alternate_locale: Vec<String>,
    pub images: Vec<OgImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OgImage {
    pub url: String,
    pub width: u32,
    pub height: u32,
    pub alt: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TwitterCard {
    pub card: String,
    pub site: String,
    pub creator: String,
    pub title: String,
    pub description: String,
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsDirectives {
    pub index: bool,
    pub follow: bool,
    pub google_bot: GoogleBotDirectives,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoogleBotDirectives {
    pub index: bool,
    pub follow: bool,
    /// -1 means no limit
    #[serde(rename = "max-video-preview")]
    pub max_video_preview: i32,
    #[serde(rename = "max-image-preview")]
    pub max_image_preview: String,
    #[serde(rename = "max-snippet")]
    pub max_snippet: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlAttributes {
    pub lang: String,
    pub dir: String,
}

fn index_follow(index: bool, follow: bool) -> Vec<String> {
    vec![
        if index { "index" } else { "noindex" }.to_string(),
        if follow { "follow" } else { "nofollow" }.to_string(),
    ]
}

impl RobotsDirectives {
    /// Content of `<meta name="robots">`.
    pub fn content(&self) -> String {
        index_follow(self.index, self.follow).join(", ")
    }
}

impl GoogleBotDirectives {
    /// Content of `<meta name="googlebot">`.
    pub fn content(&self) -> String {
        let mut parts = index_follow(self.index, self.follow);
        parts.push(format!("max-video-preview:{}", self.max_video_preview));
        parts.push(format!("max-image-preview:{}", self.max_image_preview));
        parts.push(format!("max-snippet:{}", self.max_snippet));
        parts.join(", ")
    }
}

impl Default for RobotsDirectives {
    fn default() -> Self {
        Self {
            index: true,
            follow: true,
            google_bot: GoogleBotDirectives {
                index: true,
                follow: true,
                max_video_preview: -1,
                max_image_preview: "large".to_string(),
                max_snippet: -1,
            },
        }
    }
}

/// Assemble the metadata record for the home page of `locale`.
///
/// `strings` supplies the localized title and description.
pub fn build_metadata(site: &Site, locale: Locale, strings: &LocaleStrings) -> Metadata {
    let title = strings.metadata_title.to_string();
    let description = strings.metadata_description.to_string();
    let canonical_url = site.locale_home_url(locale);
    let image_url = site.og_image_url();

    let mut alternates = site.alternates("/");
    alternates.canonical = Some(canonical_url.clone());

    let mut other = BTreeMap::new();
    other.insert("google".to_string(), "notranslate".to_string());

    Metadata {
        title: Title {
            default: title.clone(),
            template: format!("%s | {}", site.name),
        },
        description: description.clone(),
        alternates,
        open_graph: OpenGraph {
            og_type: "website".to_string(),
            site_name: site.name.clone(),
            title: title.clone(),
            description: description.clone(),
            url: canonical_url,
            locale: og_locale(locale.code()).to_string(),
            alternate_locale: og_locale_alternates(locale)
                .into_iter()
                .map(String::from)
                .collect(),
            images: vec![OgImage {
                url: image_url.clone(),
                width: OG_IMAGE_WIDTH,
                height: OG_IMAGE_HEIGHT,
                alt: title.clone(),
                mime_type: OG_IMAGE_TYPE.to_string(),
            }],
        },
        twitter: TwitterCard {
            card: "summary_large_image".to_string(),
            site: site.twitter_handle.clone(),
            creator: site.twitter_handle.clone(),
            title,
            description,
            images: vec![image_url],
        },
        robots: RobotsDirectives::default(),
        metadata_base: site.url.clone(),
        other,
        html: HtmlAttributes {
            lang: locale.code().to_string(),
            dir: locale.direction().as_str().to_string(),
        },
        structured_data: structured_data::build_graph(site, locale),
    }
}
