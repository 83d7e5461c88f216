// src/store/mod.rs
//
// On-disk layout: one `nfl_{stat}_stats_{year}.csv` per table in the data
// directory, plus the consolidated JSON document.

use anyhow::{Context, Result};
use glob::{glob, Pattern};
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use tracing::{debug, warn};

use crate::schema::StatCategory;

pub mod players;
pub mod tables;

pub use players::write_player_data;
pub use tables::{read_table, write_table};

/// Identity of one stored table, encoded in its file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableFile {
    pub stat: StatCategory,
    pub year: u16,
}

impl TableFile {
    pub fn new(stat: StatCategory, year: u16) -> Self {
        Self { stat, year }
    }

    pub fn file_name(&self) -> String {
        format!("nfl_{}_stats_{}.csv", self.stat, self.year)
    }

    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }

    /// Inverse of [`TableFile::file_name`]: the stat is the second `_` segment,
    /// the year the last one.
    pub fn parse(file_name: &str) -> Option<Self> {
        let stem = file_name.strip_suffix(".csv")?;
        let parts: Vec<&str> = stem.split('_').collect();
        if parts.len() < 3 {
            return None;
        }
        let stat = parts[1].parse().ok()?;
        let year = parts.last()?.parse().ok()?;
        Some(Self { stat, year })
    }
}

/// Every table file in `dir`, sorted by file name. CSVs with other names are skipped.
pub fn list_table_files(dir: &Path) -> Result<Vec<(TableFile, PathBuf)>> {
    let pattern = format!("{}/*.csv", Pattern::escape(&dir.display().to_string()));
    let mut files = Vec::new();
    for entry in glob(&pattern).context("invalid glob pattern for table files")? {
        let path = match entry {
            Ok(p) => p,
            Err(e) => {
                warn!(error = %e, "cannot read directory entry");
                continue;
            }
        };
        let name = match path.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        match TableFile::parse(&name) {
            Some(tf) => files.push((tf, path)),
            None => warn!(file = %name, "skipping CSV with unrecognized name"),
        }
    }
    files.sort_by(|a, b| a.1.cmp(&b.1));
    debug!(dir = %dir.display(), count = files.len(), "listed table files");
    Ok(files)
}

/// Write through a temp file in the same directory, then rename over `path`.
pub(crate) fn replace_file<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut BufWriter<File>) -> Result<()>,
{
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(dir).with_context(|| format!("creating {:?}", dir))?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .with_context(|| format!("no file name in {:?}", path))?;
    let tmp_path = dir.join(format!(".{}.tmp", name));

    let file = File::create(&tmp_path).with_context(|| format!("creating {:?}", tmp_path))?;
    let mut out = BufWriter::new(file);
    write(&mut out)?;
    out.flush()
        .with_context(|| format!("flushing {:?}", tmp_path))?;
    drop(out);

    fs::rename(&tmp_path, path)
        .with_context(|| format!("renaming {:?} -> {:?}", tmp_path, path))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_name_round_trips() {
        let tf = TableFile::new(StatCategory::Receiving, 2013);
        assert_eq!(tf.file_name(), "nfl_receiving_stats_2013.csv");
        assert_eq!(TableFile::parse(&tf.file_name()), Some(tf));
    }

    #[test]
    fn parse_rejects_foreign_names() {
        assert_eq!(TableFile::parse("nfl_player_data.json"), None);
        assert_eq!(TableFile::parse("nfl_passing_stats_latest.csv"), None);
        assert_eq!(TableFile::parse("nfl_hockey_stats_2020.csv"), None);
        assert_eq!(TableFile::parse("passing.csv"), None);
    }

    #[test]
    fn lists_only_table_files_in_name_order() -> Result<()> {
        let dir = tempdir()?;
        for name in [
            "nfl_rushing_stats_2020.csv",
            "nfl_passing_stats_2021.csv",
            "nfl_passing_stats_2020.csv",
            "notes.csv",
            "nfl_player_data.json",
        ] {
            fs::write(dir.path().join(name), "Player\n")?;
        }

        let files = list_table_files(dir.path())?;
        let found: Vec<TableFile> = files.iter().map(|(tf, _)| *tf).collect();
        assert_eq!(
            found,
            vec![
                TableFile::new(StatCategory::Passing, 2020),
                TableFile::new(StatCategory::Passing, 2021),
                TableFile::new(StatCategory::Rushing, 2020),
            ]
        );
        Ok(())
    }

    #[test]
    fn replace_file_overwrites_and_cleans_up() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("out.txt");
        replace_file(&path, |w| Ok(w.write_all(b"first")?))?;
        replace_file(&path, |w| Ok(w.write_all(b"second")?))?;
        assert_eq!(fs::read_to_string(&path)?, "second");
        assert!(!dir.path().join("nested").join(".out.txt.tmp").exists());
        Ok(())
    }
}
