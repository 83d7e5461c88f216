// src/fetch/matrix.rs

use anyhow::{Context, Result};
use std::{
    path::{Path, PathBuf},
    thread,
    time::Duration,
};
use tracing::{debug, error, info};

use super::pages::PageSource;
use crate::config::Config;
use crate::process::extract;
use crate::schema::StatCategory;
use crate::store::{write_table, TableFile};

/// Which (stat, year) pairs to scrape and how long to wait between fetches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapePlan {
    pub stats: Vec<StatCategory>,
    pub years: Vec<u16>,
    pub delay: Duration,
}

impl ScrapePlan {
    /// Every category for every configured season.
    pub fn full(config: &Config) -> Self {
        Self {
            stats: StatCategory::ALL.to_vec(),
            years: config.years().collect(),
            delay: config.delay,
        }
    }

    /// Year-major order: all categories of one season before the next season.
    pub fn pairs(&self) -> impl Iterator<Item = (StatCategory, u16)> + '_ {
        self.years
            .iter()
            .flat_map(move |&year| self.stats.iter().map(move |&stat| (stat, year)))
    }

    pub fn len(&self) -> usize {
        self.stats.len() * self.years.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// What the `scrape` command was asked to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrapeMode {
    /// No arguments: every category for every configured season.
    Matrix,
    /// `<stat> <year>`
    Single(StatCategory, u16),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UsageError {
    #[error("expected zero or two arguments, got {0}")]
    ArgCount(usize),
    #[error(transparent)]
    Stat(#[from] crate::schema::UnknownCategory),
    #[error("invalid year '{0}'")]
    Year(String),
}

impl ScrapeMode {
    pub const USAGE: &'static str = "Usage: scrape [<stat> <year>]";

    /// Parse the arguments after the program name.
    pub fn from_args(args: &[String]) -> Result<Self, UsageError> {
        match args {
            [] => Ok(ScrapeMode::Matrix),
            [stat, year] => {
                let stat = stat.parse::<StatCategory>()?;
                let year = year
                    .parse::<u16>()
                    .map_err(|_| UsageError::Year(year.to_string()))?;
                Ok(ScrapeMode::Single(stat, year))
            }
            other => Err(UsageError::ArgCount(other.len())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedPair {
    pub stat: StatCategory,
    pub year: u16,
    pub error: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MatrixSummary {
    pub written: Vec<PathBuf>,
    pub failed: Vec<FailedPair>,
}

/// Fetch one page, extract the table whose id is the category name, and
/// store it as `nfl_{stat}_stats_{year}.csv` under `out_dir`.
pub fn scrape_pair<S>(source: &S, stat: StatCategory, year: u16, out_dir: &Path) -> Result<PathBuf>
where
    S: PageSource + ?Sized,
{
    let html = source.fetch_page(stat, year)?;
    let table = extract(&html, stat.as_str())
        .with_context(|| format!("extracting {} table for {}", stat, year))?;

    let path = TableFile::new(stat, year).path_in(out_dir);
    write_table(&path, &table)?;
    info!(
        %stat,
        year,
        rows = table.rows.len(),
        columns = table.headers.len(),
        path = %path.display(),
        "saved table"
    );
    Ok(path)
}

/// Scrape every pair in `plan`. A failing pair is logged and skipped; the
/// rest of the matrix still runs.
pub fn scrape_matrix<S>(source: &S, plan: &ScrapePlan, out_dir: &Path) -> MatrixSummary
where
    S: PageSource + ?Sized,
{
    let mut summary = MatrixSummary::default();
    let total = plan.len();

    for (idx, (stat, year)) in plan.pairs().enumerate() {
        if idx > 0 && !plan.delay.is_zero() {
            debug!(delay = ?plan.delay, "waiting before next fetch");
            thread::sleep(plan.delay);
        }

        info!(%stat, year, progress = %format!("{}/{}", idx + 1, total), "scraping");
        match scrape_pair(source, stat, year, out_dir) {
            Ok(path) => summary.written.push(path),
            Err(e) => {
                let msg = format!("{:#}", e);
                error!(%stat, year, error = %msg, "scrape failed; skipping");
                summary.failed.push(FailedPair {
                    stat,
                    year,
                    error: msg,
                });
            }
        }
    }

    info!(
        written = summary.written.len(),
        failed = summary.failed.len(),
        "scrape matrix finished"
    );
    summary
}
