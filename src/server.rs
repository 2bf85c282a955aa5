use crate::config::Config;
use crate::error::SiteError;
use crate::i18n::routing::{self, route_request, RouteDecision};
use crate::i18n::{Locale, LocaleStrings};
use crate::seo::{build_metadata, head, sitemap, Metadata, RobotsTxt, Site, PAGES};
use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::{header, HeaderMap, HeaderValue, Method, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::Router;
use chrono::{DateTime, Utc};
use quick_xml::escape::escape;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

/// Shared, read-only state. Sitemap and robots output are rendered once at startup.
#[derive(Debug)]
pub struct AppState {
    pub site: Site,
    pub sitemap_xml: String,
    pub robots_txt: String,
}

impl AppState {
    pub fn new(site: Site, generated_at: DateTime<Utc>) -> Result<Self> {
        let entries = sitemap::generate(&site, PAGES, generated_at);
        let sitemap_xml = sitemap::render_xml(&entries).context("Failed to render sitemap")?;
        let robots_txt = RobotsTxt::for_site(&site).to_text();

        info!(
            "Prepared sitemap with {} entries for {}",
            entries.len(),
            site.url
        );

        Ok(Self {
            site,
            sitemap_xml,
            robots_txt,
        })
    }
}

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/robots.txt", get(robots_txt))
        .route("/sitemap.xml", get(sitemap_xml))
        .route("/api/metadata/:locale", get(metadata_json))
        .fallback(page)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to `config.port` and serve until the process is stopped.
pub async fn run(config: &Config) -> Result<()> {
    let site = Site::from_config(config);
    let state = Arc::new(AppState::new(site, Utc::now())?);
    let router = build_router(state);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context(format!("Failed to bind {}", addr))?;

    info!("✓ Listening on {}", addr);
    axum::serve(listener, router)
        .await
        .context("Server error")?;

    Ok(())
}

async fn health() -> &'static str {
    "OK"
}

async fn robots_txt(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        state.robots_txt.clone(),
    )
}

async fn sitemap_xml(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        state.sitemap_xml.clone(),
    )
}

async fn metadata_json(
    State(state): State<Arc<AppState>>,
    Path(code): Path<String>,
) -> Result<Response, SiteError> {
    let locale = Locale::from_code(&code).map_err(|_| SiteError::UnknownLocale(code))?;
    let metadata = build_metadata(&state.site, locale, locale.strings());

    let body = serde_json::to_string(&metadata).map_err(|e| SiteError::Render {
        what: "metadata",
        reason: e.to_string(),
    })?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Locale-routed page handler for every path without an explicit route.
async fn page(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let cookie = headers
        .get(header::COOKIE)
        .and_then(|v| v.to_str().ok());
    let accept_language = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|v| v.to_str().ok());

    let decision = route_request(state.site.locale_prefix, uri.path(), cookie, accept_language);
    let negotiated = matches!(decision, RouteDecision::Redirect { .. })
        || routing::uses_detection(uri.path());

    let mut response = match decision {
        RouteDecision::Bypass => (StatusCode::NOT_FOUND, "Not Found").into_response(),
        RouteDecision::Redirect { location } => {
            let location = match uri.query() {
                Some(query) => format!("{}?{}", location, query),
                None => location,
            };
            debug!("Redirecting {} to {}", uri.path(), location);
            Redirect::temporary(&location).into_response()
        }
        RouteDecision::Serve { locale, path } if path == "/" => {
            Html(render_landing(&state.site, locale)).into_response()
        }
        RouteDecision::Serve { locale, path } => {
            debug!("No page at {} for locale {}", path, locale);
            (
                StatusCode::NOT_FOUND,
                Html(render_not_found(&state.site, locale)),
            )
                .into_response()
        }
    };

    // Unprefixed responses depend on the visitor's cookie and language
    if negotiated {
        response.headers_mut().insert(
            header::VARY,
            HeaderValue::from_static("Cookie, Accept-Language"),
        );
    }
    response
}

fn render_landing(site: &Site, locale: Locale) -> String {
    let strings = locale.strings();
    let metadata = build_metadata(site, locale, strings);
    let body = format!(
        "<h1>{}</h1>\n<p>{}</p>",
        escape(strings.metadata_title),
        escape(strings.metadata_description)
    );
    head::render_document(&metadata, strings, &body)
}

fn not_found_metadata(site: &Site, locale: Locale, strings: &LocaleStrings) -> Metadata {
    let mut metadata = build_metadata(site, locale, strings);
    metadata.robots.index = false;
    metadata.robots.google_bot.index = false;
    metadata
}

fn render_not_found(site: &Site, locale: Locale) -> String {
    let strings = locale.strings();
    let metadata = not_found_metadata(site, locale, strings);
    let home = routing::localized_path(site.locale_prefix, locale, "/");
    let body = format!(
        "<section>\n<h1>{}</h1>\n<p>{}</p>\n<a href=\"{}\">{}</a>\n</section>",
        escape(strings.not_found_heading),
        escape(strings.not_found_message),
        escape(home.as_str()),
        escape(strings.go_home)
    );
    head::render_document(&metadata, strings, &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_prerenders_outputs() {
        let state = AppState::new(Site::default(), Utc::now()).unwrap();
        assert!(state.sitemap_xml.contains("<urlset"));
        assert!(state.robots_txt.contains("Sitemap: https://www.placy.ai/sitemap.xml"));
    }

    #[test]
    fn test_landing_uses_locale_strings() {
        let html = render_landing(&Site::default(), Locale::SPANISH);
        assert!(html.contains(r#"<html lang="es" dir="ltr">"#));
        assert!(html.contains(&*escape(Locale::SPANISH.strings().metadata_title)));
    }

    #[test]
    fn test_not_found_is_noindex_and_links_home() {
        let site = Site::default();
        let metadata = not_found_metadata(&site, Locale::GREEK, Locale::GREEK.strings());
        assert_eq!(metadata.robots.content(), "noindex, follow");

        let html = render_not_found(&site, Locale::GREEK);
        assert!(html.contains(r#"<a href="/el">"#));
        assert!(html.contains(Locale::GREEK.strings().go_home));
    }
}
