//! Serializes a `Metadata` record into HTML: head tags and the page document.

use crate::i18n::LocaleStrings;
use crate::seo::Metadata;
use quick_xml::escape::escape;
use std::fmt::Write;

fn meta_name(out: &mut String, name: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta name="{}" content="{}">"#,
        escape(name),
        escape(content)
    );
}

fn meta_property(out: &mut String, property: &str, content: &str) {
    let _ = writeln!(
        out,
        r#"<meta property="{}" content="{}">"#,
        escape(property),
        escape(content)
    );
}

fn link(out: &mut String, rel: &str, href: &str, hreflang: Option<&str>) {
    match hreflang {
        Some(lang) => {
            let _ = writeln!(
                out,
                r#"<link rel="{}" hreflang="{}" href="{}">"#,
                rel,
                escape(lang),
                escape(href)
            );
        }
        None => {
            let _ = writeln!(out, r#"<link rel="{}" href="{}">"#, rel, escape(href));
        }
    }
}

/// JSON-LD for an inline `<script>`: `</` must not terminate the element.
pub fn json_ld_script(value: &serde_json::Value) -> String {
    format!(
        r#"<script type="application/ld+json">{}</script>"#,
        value.to_string().replace("</", r"<\/")
    )
}

/// Render every head tag described by `metadata`.
pub fn render_head(metadata: &Metadata) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "<title>{}</title>", escape(metadata.title.default.as_str()));
    meta_name(&mut out, "description", &metadata.description);

    if let Some(canonical) = &metadata.alternates.canonical {
        link(&mut out, "canonical", canonical, None);
    }
    for (lang, href) in &metadata.alternates.languages {
        link(&mut out, "alternate", href, Some(lang));
    }

    let og = &metadata.open_graph;
    meta_property(&mut out, "og:title", &og.title);
    meta_property(&mut out, "og:description", &og.description);
    meta_property(&mut out, "og:url", &og.url);
    meta_property(&mut out, "og:site_name", &og.site_name);
    meta_property(&mut out, "og:locale", &og.locale);
    for alternate in &og.alternate_locale {
        meta_property(&mut out, "og:locale:alternate", alternate);
    }
    for image in &og.images {
        meta_property(&mut out, "og:image", &image.url);
        meta_property(&mut out, "og:image:width", &image.width.to_string());
        meta_property(&mut out, "og:image:height", &image.height.to_string());
        meta_property(&mut out, "og:image:alt", &image.alt);
        meta_property(&mut out, "og:image:type", &image.mime_type);
    }
    meta_property(&mut out, "og:type", &og.og_type);

    let twitter = &metadata.twitter;
    meta_name(&mut out, "twitter:card", &twitter.card);
    meta_name(&mut out, "twitter:site", &twitter.site);
    meta_name(&mut out, "twitter:creator", &twitter.creator);
    meta_name(&mut out, "twitter:title", &twitter.title);
    meta_name(&mut out, "twitter:description", &twitter.description);
    for image in &twitter.images {
        meta_name(&mut out, "twitter:image", image);
    }

    meta_name(&mut out, "robots", &metadata.robots.content());
    meta_name(&mut out, "googlebot", &metadata.robots.google_bot.content());
    for (name, content) in &metadata.other {
        meta_name(&mut out, name, content);
    }

    out.push_str(&json_ld_script(&metadata.structured_data));
    out.push('\n');
    out
}

/// Render a full document around `body_html`, which must already be escaped.
pub fn render_document(metadata: &Metadata, strings: &LocaleStrings, body_html: &str) -> String {
    format!(
        r##"<!DOCTYPE html>
<html lang="{lang}" dir="{dir}">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<meta name="theme-color" content="#ffffff">
<link rel="icon" href="/favicon.ico">
<link rel="apple-touch-icon" href="/apple-touch-icon.png">
{head}</head>
<body>
<a href="#main-content" class="skip-to-content">{skip}</a>
<main id="main-content">
{body}
</main>
</body>
</html>
"##,
        lang = escape(metadata.html.lang.as_str()),
        dir = escape(metadata.html.dir.as_str()),
        head = render_head(metadata),
        skip = escape(strings.skip_to_content),
        body = body_html,
    )
}
