// src/process/consolidate.rs

use tracing::debug;

use crate::error::Error;
use crate::process::extract::PLAYER_COLUMN;
use crate::process::raw_table::SeasonTable;
use crate::process::utils::{disambiguate_headers, normalize_missing};
use crate::schema::{PlayerKey, PlayerRecordSet, StatRecord};

/// Re-key every row of every table by player.
///
/// Each row becomes one [`StatRecord`] (all columns except "Player", with
/// `RANK` = row position + 1) appended to its player's bucket. Bucket order
/// follows the order of `tables`. A row whose width differs from its
/// table's headers fails with [`Error::ColumnMismatch`].
pub fn consolidate<I>(tables: I) -> Result<PlayerRecordSet, Error>
where
    I: IntoIterator<Item = SeasonTable>,
{
    let mut players = PlayerRecordSet::new();
    for season in tables {
        add_table(&mut players, &season)?;
    }
    Ok(players)
}

fn add_table(players: &mut PlayerRecordSet, season: &SeasonTable) -> Result<(), Error> {
    let table = &season.table;
    let player_idx = table
        .column_index(PLAYER_COLUMN)
        .ok_or_else(|| Error::Schema {
            column: PLAYER_COLUMN.to_string(),
        })?;
    let names = disambiguate_headers(&table.headers);

    for (i, row) in table.rows.iter().enumerate() {
        if row.len() != names.len() {
            return Err(Error::ColumnMismatch {
                row: i,
                headers: names.len(),
                cells: row.len(),
            });
        }
        let player = &row[player_idx];

        let fields = names
            .iter()
            .zip(row)
            .enumerate()
            .filter(|(idx, _)| *idx != player_idx)
            .map(|(_, (name, value))| (name.clone(), normalize_missing(value)))
            .collect();

        let record = StatRecord {
            fields,
            stat: season.stat,
            year: season.year,
            rank: i + 1,
        };
        players.push(PlayerKey::from_display_name(player), record);
    }

    debug!(
        stat = %season.stat,
        year = season.year,
        rows = table.rows.len(),
        "consolidated table"
    );
    Ok(())
}
