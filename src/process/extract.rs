// src/process/extract.rs

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, trace};

use crate::error::Error;
use crate::process::raw_table::RawTable;

/// Header every stats table is anchored on.
pub const PLAYER_COLUMN: &str = "Player";
/// Label of the site's own rank column, which is re-derived downstream.
pub const RANK_COLUMN: &str = "Rk";

/// Pull the table with `id == table_id` out of `document`.
///
/// Headers come from every `<th>` under `<thead>`, trimmed to start at the
/// "Player" column. Body rows keep only their `<td>` cells; rows without any
/// are separators and get skipped. Rows wider than the headers are truncated,
/// narrower rows fail with [`Error::ColumnMismatch`].
pub fn extract(document: &str, table_id: &str) -> Result<RawTable, Error> {
    let doc = Html::parse_document(document);
    let table_sel = Selector::parse("table").expect("table selector should parse");
    let thead_sel = Selector::parse("thead").expect("thead selector should parse");
    let th_sel = Selector::parse("th").expect("th selector should parse");
    let row_sel = Selector::parse("tbody > tr").expect("row selector should parse");

    let table = doc
        .select(&table_sel)
        .find(|t| t.value().id() == Some(table_id))
        .ok_or_else(|| Error::NotFound {
            table_id: table_id.to_string(),
        })?;

    let thead = table
        .select(&thead_sel)
        .next()
        .ok_or_else(|| Error::Structure {
            table_id: table_id.to_string(),
        })?;

    let raw_headers: Vec<String> = thead.select(&th_sel).map(cell_text).collect();
    trace!(table_id, headers = ?raw_headers, "raw headers");
    let headers = trim_headers(raw_headers)?;

    let mut rows = Vec::new();
    for tr in table.select(&row_sel) {
        let cells: Vec<String> = tr
            .children()
            .filter_map(ElementRef::wrap)
            .filter(|el| el.value().name() == "td")
            .map(cell_text)
            .collect();
        if cells.is_empty() {
            continue;
        }
        rows.push(cells);
    }

    let rows = align_rows(headers.len(), rows)?;
    debug!(table_id, columns = headers.len(), rows = rows.len(), "extracted table");
    Ok(RawTable::new(headers, rows))
}

/// Cell text with surrounding whitespace trimmed; nothing else is touched.
fn cell_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Drop everything before "Player", then a leading rank column if one remains.
pub fn trim_headers(mut headers: Vec<String>) -> Result<Vec<String>, Error> {
    let start = headers
        .iter()
        .position(|h| h == PLAYER_COLUMN)
        .ok_or_else(|| Error::Schema {
            column: PLAYER_COLUMN.to_string(),
        })?;
    let mut headers = headers.split_off(start);
    if headers.first().map(String::as_str) == Some(RANK_COLUMN) {
        headers.remove(0);
    }
    Ok(headers)
}

/// Make every row exactly `width` cells wide, truncating extra trailing cells.
///
/// Every row is checked, not only the first: a single row narrower than the
/// headers rejects the whole table with [`Error::ColumnMismatch`] instead of
/// being padded with empty cells.
pub fn align_rows(width: usize, rows: Vec<Vec<String>>) -> Result<Vec<Vec<String>>, Error> {
    rows.into_iter()
        .enumerate()
        .map(|(row, mut cells)| {
            if cells.len() < width {
                return Err(Error::ColumnMismatch {
                    row,
                    headers: width,
                    cells: cells.len(),
                });
            }
            cells.truncate(width);
            Ok(cells)
        })
        .collect()
}
