//! Row-major records: transposition between a table and one object per row.

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::types::Table;

/// One row of a table: `(column, label)` pairs in column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record(pub Vec<(String, String)>);

impl Record {
    #[must_use]
    pub fn get(&self, column: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, label)| label.as_str())
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (column, label) in &self.0 {
            map.serialize_entry(column, label)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        crate::serde_helpers::ordered_entries(deserializer).map(Record)
    }
}

/// Transpose a table into exactly `height` records.
///
/// Column names live only in the records, so a table with columns but no
/// rows becomes `[]` and re-imports as an empty table without columns.
/// Use the column-major shape to keep the names of an empty table.
#[must_use]
pub fn to_records(table: &Table) -> Vec<Record> {
    (0..table.height())
        .filter_map(|row| table.row(row))
        .map(|cells| {
            Record(
                cells
                    .into_iter()
                    .map(|(column, label)| (column.to_string(), label.to_string()))
                    .collect(),
            )
        })
        .collect()
}

/// Transpose records back into a table.
///
/// The column set is the union of record keys in first-seen order. A
/// record without a key contributes an empty label for that column, so
/// ragged records still produce an aligned table.
///
/// # Errors
/// Propagates [`Table::create`].
pub fn from_records(records: &[Record]) -> Result<Table> {
    let mut names: Vec<&str> = Vec::new();
    for record in records {
        for (column, _) in &record.0 {
            if !names.contains(&column.as_str()) {
                names.push(column);
            }
        }
    }

    let columns = names.into_iter().map(|name| {
        let labels: Vec<String> = records
            .iter()
            .map(|record| record.get(name).unwrap_or_default().to_string())
            .collect();
        (name, labels)
    });
    Table::create(columns)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_to_records_one_per_row() {
        let t = Table::create([("team", vec!["a", "b", "c"]), ("color", vec!["r", "g", "b"])])
            .unwrap();
        let records = to_records(&t);
        assert_eq!(records.len(), 3);
        assert_eq!(records[1].get("team"), Some("b"));
        assert_eq!(records[1].get("color"), Some("g"));
    }

    #[test]
    fn test_from_records_fills_missing() {
        let records: Vec<Record> =
            serde_json::from_str(r#"[{"a":"1","b":"2"},{"b":"3","c":"4"}]"#).unwrap();
        let t = from_records(&records).unwrap();
        assert_eq!(t.column_names().collect::<Vec<_>>(), ["a", "b", "c"]);
        assert_eq!(t.column("a").unwrap().as_slice(), ["1", ""]);
        assert_eq!(t.column("c").unwrap().as_slice(), ["", "4"]);
    }

    #[test]
    fn test_from_no_records() {
        let t = from_records(&[]).unwrap();
        assert!(t.is_empty());
    }
}
