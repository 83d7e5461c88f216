use anyhow::{Context, Result};
use nflscraper::{
    config::Config,
    fetch::{scrape_matrix, scrape_pair, HttpFetcher, ScrapeMode, ScrapePlan},
    logging,
};
use std::{env, fs, process};
use tracing::{error, info};

// usage: scrape [<stat> <year>]
fn main() -> Result<()> {
    logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let mode = match ScrapeMode::from_args(&args) {
        Ok(mode) => mode,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", ScrapeMode::USAGE);
            process::exit(1);
        }
    };

    let config = Config::from_env()?;
    fs::create_dir_all(&config.data_dir)
        .with_context(|| format!("creating {:?}", config.data_dir))?;
    let fetcher = HttpFetcher::new(config.base_url.clone())?;

    match mode {
        ScrapeMode::Matrix => {
            let plan = ScrapePlan::full(&config);
            let summary = scrape_matrix(&fetcher, &plan, &config.data_dir);
            info!(
                written = summary.written.len(),
                failed = summary.failed.len(),
                "done"
            );
        }
        ScrapeMode::Single(stat, year) => {
            info!(%stat, year, "scraping");
            if let Err(e) = scrape_pair(&fetcher, stat, year, &config.data_dir) {
                error!(%stat, year, "scrape failed: {:#}", e);
                return Err(e);
            }
        }
    }

    Ok(())
}
