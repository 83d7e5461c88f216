use anyhow::{Context, Result};
use nflscraper::{
    config::Config,
    fetch::{scrape_matrix, HttpFetcher, ScrapePlan},
    logging, process,
};
use std::fs;
use tracing::{info, warn};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    logging::init();
    info!("startup");

    // ─── 2) configure dirs ───────────────────────────────────────────
    let config = Config::from_env()?;
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating {:?}", config.data_dir))?;

    // ─── 3) scrape every (stat, year) page ───────────────────────────
    let fetcher = HttpFetcher::new(config.base_url.clone())?;
    let plan = ScrapePlan::full(&config);
    info!(
        pairs = plan.len(),
        first_year = config.first_year,
        last_year = config.last_year,
        "scraping → {}",
        config.data_dir.display()
    );
    let summary = scrape_matrix(&fetcher, &plan, &config.data_dir);
    for failed in &summary.failed {
        warn!(stat = %failed.stat, year = failed.year, "not scraped: {}", failed.error);
    }

    // ─── 4) drop duplicate player rows ───────────────────────────────
    let reports = process::dedupe_dir(&config.data_dir)?;
    let removed: usize = reports.iter().map(|r| r.removed()).sum();
    info!(files = reports.len(), removed, "deduplicated tables");

    // ─── 5) consolidate into one document ────────────────────────────
    process::consolidate_dir(&config.data_dir, &config.output)?;

    info!("all done");
    Ok(())
}
