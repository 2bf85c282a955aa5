//! Export binary - writes sitemap.xml, robots.txt and per-locale metadata JSON
//!
//! Usage:
//!   cargo run --bin export                 # Writes into ./public
//!   cargo run --bin export -- dist/seo     # Writes into dist/seo
//!
//! Optional environment variables:
//! - SITE_URL (defaults to https://www.placy.ai)
//! - SITE_NAME, TWITTER_HANDLE
//! - LOCALE_PREFIX (always | as-needed)

use anyhow::Result;
use chrono::Utc;
use placy_site::{config, export, seo::Site};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("placy_site=info".parse()?)
                .add_directive("export=info".parse()?),
        )
        .init();

    let output_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("public"));

    let config = config::Config::from_env()?;
    let site = Site::from_config(&config);

    info!("Exporting SEO files for {} to {}", site.url, output_dir.display());
    export::write_static_files(&site, &output_dir, Utc::now())?;

    Ok(())
}
