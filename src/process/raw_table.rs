use crate::process::dedupe::FieldLookup;
use crate::schema::StatCategory;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Column names, starting at the "Player" column of the source table.
    pub headers: Vec<String>,
    /// Each data row, one cell per header.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Borrowed, header-aware views over the rows.
    pub fn records(&self) -> impl Iterator<Item = TableRow<'_>> {
        self.rows.iter().map(move |cells| TableRow {
            headers: &self.headers,
            cells,
        })
    }
}

/// A row paired with its table's headers so cells can be read by name.
#[derive(Debug, Clone, Copy)]
pub struct TableRow<'a> {
    pub headers: &'a [String],
    pub cells: &'a [String],
}

impl FieldLookup for TableRow<'_> {
    fn field(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|h| h == name)
            .and_then(|i| self.cells.get(i))
            .map(String::as_str)
    }
}

/// One (stat, year) table as read back from storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeasonTable {
    pub stat: StatCategory,
    pub year: u16,
    pub table: RawTable,
}
