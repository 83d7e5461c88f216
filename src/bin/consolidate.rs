use anyhow::Result;
use nflscraper::{config::Config, logging, process};
use tracing::info;

fn main() -> Result<()> {
    logging::init();
    let config = Config::from_env()?;

    let players = process::consolidate_dir(&config.data_dir, &config.output)?;
    info!(
        players = players.len(),
        "player data written to {}",
        config.output.display()
    );
    Ok(())
}
