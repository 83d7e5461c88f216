use anyhow::{Context, Result};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::Path;

use super::replace_file;
use crate::process::raw_table::RawTable;

/// Write `table` as a CSV with a header row, replacing any existing file.
pub fn write_table(path: &Path, table: &RawTable) -> Result<()> {
    replace_file(path, |out| {
        let mut wtr = WriterBuilder::new().from_writer(out);
        wtr.write_record(&table.headers)
            .with_context(|| format!("writing headers to {:?}", path))?;
        for (idx, row) in table.rows.iter().enumerate() {
            wtr.write_record(row)
                .with_context(|| format!("writing row {} to {:?}", idx, path))?;
        }
        wtr.flush()?;
        Ok(())
    })
}

/// Read a table written by [`write_table`]. Rows whose width differs from the
/// header row are an error.
pub fn read_table(path: &Path) -> Result<RawTable> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("opening {:?}", path))?;

    let headers: Vec<String> = rdr
        .headers()
        .with_context(|| format!("reading headers of {:?}", path))?
        .iter()
        .map(str::to_string)
        .collect();

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result.with_context(|| format!("CSV parse error in {:?} at record {}", path, idx))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    Ok(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn write_then_read_preserves_cells() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nfl_scoring_stats_2011.csv");
        let table = RawTable::new(
            vec!["Player".into(), "Tm".into(), "Pts".into()],
            vec![
                vec!["Rob Gronkowski*+".into(), "NWE".into(), "108".into()],
                vec!["Smith, Jr.".into(), "".into(), "\"6\"".into()],
            ],
        );

        write_table(&path, &table)?;
        assert_eq!(read_table(&path)?, table);

        let text = fs::read_to_string(&path)?;
        assert_eq!(text.lines().next(), Some("Player,Tm,Pts"));
        Ok(())
    }

    #[test]
    fn header_only_file_has_no_rows() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("t.csv");
        fs::write(&path, "Player,Yds\n")?;
        let table = read_table(&path)?;
        assert_eq!(table.headers, vec!["Player", "Yds"]);
        assert!(table.rows.is_empty());
        Ok(())
    }

    #[test]
    fn ragged_rows_are_rejected() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("t.csv");
        fs::write(&path, "Player,Yds\nA,1\nB\n")?;
        assert!(read_table(&path).is_err());
        Ok(())
    }
}
