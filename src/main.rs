mod fetch;
mod links;
mod normalize;
mod output;
mod pool;
mod product;
mod record;
mod scrape;

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let client = fetch::build_client()?;

    info!("Fetching product links from category page...");
    let html = fetch::fetch_html(&client, links::CATEGORY_URL)
        .await
        .with_context(|| format!("failed to fetch category page {}", links::CATEGORY_URL))?;
    let urls = links::extract_product_links(&html);
    info!("Found {} product links", urls.len());

    let (records, stats) = scrape::scrape_products(client, urls).await?;
    info!(
        "Scraped {} pages ({} ok, {} empty, {} errors)",
        stats.total, stats.ok, stats.empty, stats.errors
    );

    if records.is_empty() {
        info!("No variant data to save.");
    } else {
        output::save_csv(output::CSV_FILENAME, &records)?;
        info!(
            "Saved variant data for {} variants to {}",
            records.len(),
            output::CSV_FILENAME
        );
    }

    info!("Done in {:.1}s", t0.elapsed().as_secs_f64());
    Ok(())
}
