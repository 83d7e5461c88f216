// src/process/mod.rs
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::schema::PlayerRecordSet;
use crate::store::{list_table_files, read_table, write_player_data, write_table, TableFile};

pub mod consolidate;
pub mod dedupe;
pub mod extract;
pub mod raw_table;
pub mod utils;

pub use consolidate::consolidate;
pub use dedupe::{dedupe, dedupe_table, FieldLookup};
pub use extract::{extract, PLAYER_COLUMN};
pub use raw_table::{RawTable, SeasonTable, TableRow};

/// Outcome of deduplicating one stored table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DedupeReport {
    pub file: TableFile,
    pub path: PathBuf,
    pub rows_before: usize,
    pub rows_after: usize,
}

impl DedupeReport {
    pub fn removed(&self) -> usize {
        self.rows_before - self.rows_after
    }
}

/// Rewrite every table in `dir` keeping only the first row per player name.
/// Stops at the first table that cannot be read or has no "Player" column.
#[tracing::instrument(level = "info", skip(dir), fields(dir = %dir.display()))]
pub fn dedupe_dir(dir: &Path) -> Result<Vec<DedupeReport>> {
    let mut reports = Vec::new();
    for (file, path) in list_table_files(dir)? {
        let table = read_table(&path)?;
        let deduped = dedupe_table(&table, PLAYER_COLUMN)
            .with_context(|| format!("deduplicating {:?}", path))?;
        write_table(&path, &deduped)?;

        let report = DedupeReport {
            file,
            path,
            rows_before: table.rows.len(),
            rows_after: deduped.rows.len(),
        };
        info!(
            file = %file.file_name(),
            removed = report.removed(),
            kept = report.rows_after,
            "removed duplicate player rows"
        );
        reports.push(report);
    }
    Ok(reports)
}

/// Read every stored table in `dir`, in file-name order.
pub fn load_season_tables(dir: &Path) -> Result<Vec<SeasonTable>> {
    list_table_files(dir)?
        .into_iter()
        .map(|(file, path)| -> Result<SeasonTable> {
            Ok(SeasonTable {
                stat: file.stat,
                year: file.year,
                table: read_table(&path)?,
            })
        })
        .collect()
}

/// Merge every stored table in `dir` into one document at `output`.
/// Any malformed table aborts the run; `output` is only written on success.
#[tracing::instrument(level = "info", skip(dir, output), fields(dir = %dir.display()))]
pub fn consolidate_dir(dir: &Path, output: &Path) -> Result<PlayerRecordSet> {
    let tables = load_season_tables(dir)?;
    let table_count = tables.len();
    let players = consolidate(tables).context("consolidating season tables")?;
    write_player_data(output, &players)?;
    info!(
        tables = table_count,
        players = players.len(),
        records = players.record_count(),
        output = %output.display(),
        "wrote player data"
    );
    Ok(players)
}
