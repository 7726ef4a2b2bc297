use std::collections::BTreeSet;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use reqwest::Client;
use tracing::{debug, error, info, warn};

use crate::record::VariantRecord;
use crate::{fetch, pool, product};

/// Per-URL outcome counts, logged once at the end of the run.
#[derive(Debug, Default, PartialEq)]
pub struct ScrapeStats {
    pub total: usize,
    pub ok: usize,
    pub empty: usize,
    pub errors: usize,
}

/// Fetch and parse every product URL with bounded parallelism, collecting
/// records in completion order. Per-URL failures are logged and contribute
/// zero records; they never abort the run.
pub async fn scrape_products(
    client: Client,
    urls: Vec<String>,
) -> Result<(Vec<VariantRecord>, ScrapeStats)> {
    let total = urls.len();
    let expected: BTreeSet<String> = urls.iter().cloned().collect();

    let pb = ProgressBar::new(total as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40} {pos}/{len} ({per_sec}, eta {eta})")?
            .progress_chars("=> "),
    );

    let job_pb = pb.clone();
    let results = pool::run(urls, pool::CONCURRENCY, move |url| {
        let client = client.clone();
        let pb = job_pb.clone();
        async move {
            let outcome = scrape_one(&client, &url).await;
            pb.inc(1);
            outcome
        }
    })
    .await;

    pb.finish_and_clear();
    Ok(tally(total, results, &expected))
}

async fn scrape_one(client: &Client, url: &str) -> Result<Vec<VariantRecord>> {
    debug!("Fetching product page: {url}");
    let html = fetch::fetch_html(client, url)
        .await
        .context("failed to fetch product page")?;
    product::parse_product_page(url, &html)
}

/// Fold per-URL outcomes into the flat record list and stats. URLs whose
/// worker never reported back (task panic) count as errors.
fn tally(
    total: usize,
    results: Vec<(String, Result<Vec<VariantRecord>>)>,
    expected: &BTreeSet<String>,
) -> (Vec<VariantRecord>, ScrapeStats) {
    let mut records = Vec::new();
    let mut stats = ScrapeStats {
        total,
        ..ScrapeStats::default()
    };
    let mut seen: BTreeSet<String> = BTreeSet::new();

    for (url, outcome) in results {
        seen.insert(url.clone());
        match outcome {
            Ok(variants) if variants.is_empty() => {
                warn!("No variant data for {url}");
                stats.empty += 1;
            }
            Ok(variants) => {
                info!("Processed {url} with {} variants", variants.len());
                stats.ok += 1;
                records.extend(variants);
            }
            Err(e) => {
                error!("Error processing {url}: {e:#}");
                stats.errors += 1;
            }
        }
    }

    for url in expected.iter().filter(|u| !seen.contains(*u)) {
        error!("Worker for {url} aborted before reporting a result");
        stats.errors += 1;
    }

    (records, stats)
}

// ── Tests ──
