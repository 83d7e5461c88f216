// src/error.rs

/// Failures of the scrape → dedupe → consolidate core.
///
/// `Fetch`/`Request`/`Url` and the table-shape variants are isolated per
/// (stat, year) during scraping. `Schema` and `MissingField` raised while
/// consolidating abort the whole run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("GET {url} returned status {status}")]
    Fetch { url: String, status: u16 },

    #[error("GET {url} failed: {source}")]
    Request {
        url: String,
        source: reqwest::Error,
    },

    #[error("invalid page URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("no table with id '{table_id}' in document")]
    NotFound { table_id: String },

    #[error("table '{table_id}' has no <thead> section")]
    Structure { table_id: String },

    #[error("column '{column}' not found in headers")]
    Schema { column: String },

    #[error("row {row} has {cells} cells but the table has {headers} headers")]
    ColumnMismatch {
        row: usize,
        headers: usize,
        cells: usize,
    },

    #[error("record {row} is missing field '{field}'")]
    MissingField { field: String, row: usize },
}
