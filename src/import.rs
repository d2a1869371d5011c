//! Table import from either export shape.

use tracing::debug;

use crate::error::Result;
use crate::export::{from_records, Record};
use crate::types::{Column, Table};

/// Parse a table from JSON.
///
/// An array is read as row-major records (see [`from_records`]); anything
/// else as a column-major object. Column order follows the document.
///
/// # Errors
/// `Json` for malformed input, `Shape` or `DuplicateColumn` for a
/// column-major object that does not form an aligned table.
pub fn parse_table(json: &str) -> Result<Table> {
    if json.trim_start().starts_with('[') {
        let records: Vec<Record> = serde_json::from_str(json)?;
        debug!(records = records.len(), "importing row-major records");
        return from_records(&records);
    }

    let mut de = serde_json::Deserializer::from_str(json);
    let columns: Vec<(String, Column)> = crate::serde_helpers::ordered_entries(&mut de)?;
    de.end()?;
    debug!(columns = columns.len(), "importing column-major object");
    Table::create(columns)
}
