use anyhow::Result;
use placy_site::{config, server};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("placy_site=info".parse()?)
                .add_directive("tower_http=info".parse()?),
        )
        .init();

    info!("Starting Placy site server");

    // Load configuration from environment
    let config = config::Config::from_env()?;
    info!(
        "Serving {} with locale prefix policy {:?}",
        config.site_url, config.locale_prefix
    );

    server::run(&config).await
}
