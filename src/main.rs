use anyhow::Result;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use catalog_browser::CatalogBrowser;
use catalog_browser::config::CatalogConfig;
use catalog_browser::controllers::ListView;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = CatalogConfig::from_env()?;
    info!("Starting catalog browser against {}", config.base_url);

    let mut browser = CatalogBrowser::new(config)?;
    let outcome = browser.run().await?;

    if let ListView::Failed(err) = &outcome.list {
        error!("Catalog unavailable: {}", err);
    }

    Ok(())
}
