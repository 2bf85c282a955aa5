//! schema.org JSON-LD graph describing the organization, website and current page.

use crate::i18n::{Locale, LocaleRegistry};
use crate::seo::site::{LOGO_HEIGHT, LOGO_PATH, LOGO_WIDTH, SOCIAL_PROFILES};
use crate::seo::Site;
use serde_json::{json, Value};

pub fn build_graph(site: &Site, locale: Locale) -> Value {
    let organization_id = site.node_id("organization");
    let website_id = site.node_id("website");
    let page_url = site.locale_home_url(locale);

    json!({
        "@context": "https://schema.org",
        "@graph": [
            {
                "@type": "Organization",
                "@id": organization_id,
                "name": site.name,
                "url": site.url,
                "logo": {
                    "@type": "ImageObject",
                    "url": site.absolute(LOGO_PATH),
                    "width": LOGO_WIDTH,
                    "height": LOGO_HEIGHT,
                },
                "sameAs": SOCIAL_PROFILES,
            },
            {
                "@type": "WebSite",
                "@id": website_id,
                "url": site.url,
                "name": site.name,
                "publisher": { "@id": organization_id },
                "inLanguage": LocaleRegistry::get().codes(),
            },
            {
                "@type": "WebPage",
                "@id": format!("{}#webpage", page_url),
                "url": page_url,
                "name": site.name,
                "isPartOf": { "@id": website_id },
                "about": { "@id": organization_id },
                "inLanguage": locale.code(),
            },
        ],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node<'a>(graph: &'a Value, kind: &str) -> &'a Value {
        graph["@graph"]
            .as_array()
            .unwrap()
            .iter()
            .find(|node| node["@type"] == kind)
            .unwrap()
    }

    #[test]
    fn test_graph_has_three_nodes() {
        let graph = build_graph(&Site::default(), Locale::ENGLISH);
        assert_eq!(graph["@context"], "https://schema.org");
        assert_eq!(graph["@graph"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_organization_node() {
        let graph = build_graph(&Site::default(), Locale::ENGLISH);
        let org = node(&graph, "Organization");
        assert_eq!(org["@id"], "https://www.placy.ai/#organization");
        assert_eq!(org["logo"]["url"], "https://www.placy.ai/images/logo-black.svg");
        assert_eq!(org["logo"]["width"], 110);
        assert_eq!(org["sameAs"].as_array().unwrap().len(), SOCIAL_PROFILES.len());
    }

    #[test]
    fn test_website_lists_all_locales() {
        let graph = build_graph(&Site::default(), Locale::GREEK);
        let website = node(&graph, "WebSite");
        assert_eq!(website["inLanguage"], json!(["en", "el", "es", "ar"]));
        assert_eq!(website["publisher"]["@id"], "https://www.placy.ai/#organization");
    }

    #[test]
    fn test_webpage_uses_localized_url() {
        let graph = build_graph(&Site::default(), Locale::ARABIC);
        let page = node(&graph, "WebPage");
        assert_eq!(page["url"], "https://www.placy.ai/ar");
        assert_eq!(page["@id"], "https://www.placy.ai/ar#webpage");
        assert_eq!(page["inLanguage"], "ar");
        assert_eq!(page["isPartOf"]["@id"], "https://www.placy.ai/#website");
    }
}
