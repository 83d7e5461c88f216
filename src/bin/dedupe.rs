use anyhow::Result;
use nflscraper::{config::Config, logging, process};
use tracing::info;

fn main() -> Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let reports = process::dedupe_dir(&config.data_dir)?;
    let removed: usize = reports.iter().map(|r| r.removed()).sum();
    info!(files = reports.len(), removed, "duplicate removal complete");
    Ok(())
}
