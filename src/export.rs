//! Build-time export of static SEO files.

use crate::i18n::Locale;
use crate::seo::{build_metadata, sitemap, RobotsTxt, Site, PAGES};
use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Write `sitemap.xml`, `robots.txt` and `metadata/{code}.json` per locale into `dir`.
///
/// Returns the written paths in write order.
pub fn write_static_files(
    site: &Site,
    dir: &Path,
    generated_at: DateTime<Utc>,
) -> Result<Vec<PathBuf>> {
    let metadata_dir = dir.join("metadata");
    fs::create_dir_all(&metadata_dir)
        .context(format!("Failed to create {}", metadata_dir.display()))?;

    let mut written = Vec::new();

    let entries = sitemap::generate(site, PAGES, generated_at);
    let sitemap_path = dir.join("sitemap.xml");
    fs::write(&sitemap_path, sitemap::render_xml(&entries)?)
        .context("Failed to write sitemap.xml")?;
    info!("✓ Wrote {} sitemap entries to {}", entries.len(), sitemap_path.display());
    written.push(sitemap_path);

    let robots_path = dir.join("robots.txt");
    fs::write(&robots_path, RobotsTxt::for_site(site).to_text())
        .context("Failed to write robots.txt")?;
    written.push(robots_path);

    for locale in Locale::all() {
        let metadata = build_metadata(site, locale, locale.strings());
        let path = metadata_dir.join(format!("{}.json", locale.code()));
        let json = serde_json::to_string_pretty(&metadata)
            .context(format!("Failed to serialize metadata for {}", locale))?;
        fs::write(&path, json).context(format!("Failed to write {}", path.display()))?;
        written.push(path);
    }

    info!("✓ Exported {} files to {}", written.len(), dir.display());
    Ok(written)
}
