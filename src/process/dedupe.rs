// src/process/dedupe.rs

use std::collections::HashSet;

use crate::error::Error;
use crate::process::raw_table::RawTable;
use crate::schema::StatRecord;

/// Read access to a record's cells by field name.
pub trait FieldLookup {
    fn field(&self, name: &str) -> Option<&str>;
}

impl FieldLookup for StatRecord {
    fn field(&self, name: &str) -> Option<&str> {
        self.get(name)
    }
}

/// Keep the first record for each distinct `key_field` value, in input order.
///
/// Keys are compared raw; "J. Smith" and "J Smith" are different keys here.
pub fn dedupe<R: FieldLookup>(records: Vec<R>, key_field: &str) -> Result<Vec<R>, Error> {
    let mut seen: HashSet<String> = HashSet::with_capacity(records.len());
    let mut kept = Vec::with_capacity(records.len());

    for (row, record) in records.into_iter().enumerate() {
        let key = record
            .field(key_field)
            .ok_or_else(|| Error::MissingField {
                field: key_field.to_string(),
                row,
            })?
            .to_string();
        if seen.insert(key) {
            kept.push(record);
        }
    }

    Ok(kept)
}

/// [`dedupe`] over the rows of a table, returning a new table.
pub fn dedupe_table(table: &RawTable, key_field: &str) -> Result<RawTable, Error> {
    let kept = dedupe(table.records().collect::<Vec<_>>(), key_field)?;
    let rows = kept.into_iter().map(|r| r.cells.to_vec()).collect();
    Ok(RawTable::new(table.headers.clone(), rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::StatCategory;

    fn table(rows: &[&[&str]]) -> RawTable {
        RawTable::new(
            vec!["Player".into(), "Tm".into(), "Yds".into()],
            rows.iter()
                .map(|r| r.iter().map(|c| c.to_string()).collect())
                .collect(),
        )
    }

    #[test]
    fn first_occurrence_wins() {
        let t = table(&[
            &["Tom Brady", "TAM", "4633"],
            &["Drew Brees", "NOR", "2942"],
            &["Tom Brady", "2TM", "10"],
            &["Josh Allen", "BUF", "4544"],
            &["Drew Brees", "NOR", "0"],
        ]);
        let out = dedupe_table(&t, "Player").unwrap();
        assert_eq!(
            out.rows,
            vec![
                vec!["Tom Brady", "TAM", "4633"],
                vec!["Drew Brees", "NOR", "2942"],
                vec!["Josh Allen", "BUF", "4544"],
            ]
        );
        assert_eq!(out.headers, t.headers);
    }

    #[test]
    fn idempotent() {
        let t = table(&[
            &["A", "x", "1"],
            &["B", "x", "2"],
            &["A", "y", "3"],
            &["C", "y", "4"],
            &["B", "z", "5"],
        ]);
        let once = dedupe_table(&t, "Player").unwrap();
        let twice = dedupe_table(&once, "Player").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn raw_names_are_not_normalized() {
        let t = table(&[&["J. Smith", "x", "1"], &["J Smith", "x", "2"]]);
        assert_eq!(dedupe_table(&t, "Player").unwrap().rows.len(), 2);
    }

    #[test]
    fn empty_input_is_empty_output() {
        let t = table(&[]);
        assert!(dedupe_table(&t, "Player").unwrap().rows.is_empty());
        assert!(dedupe_table(&t, "Nope").unwrap().rows.is_empty());
    }

    #[test]
    fn absent_key_is_missing_field() {
        let t = table(&[&["A", "x", "1"]]);
        let err = dedupe_table(&t, "Name").unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, row: 0 } if field == "Name"));
    }

    #[test]
    fn works_on_stat_records() {
        let rec = |name: &str, rank| StatRecord {
            fields: vec![("Player".into(), name.into())],
            stat: StatCategory::Kicking,
            year: 2019,
            rank,
        };
        let out = dedupe(vec![rec("A", 1), rec("B", 2), rec("A", 3)], "Player").unwrap();
        assert_eq!(out.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2]);

        let err = dedupe(vec![rec("A", 1)], "Tm").unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
    }
}
