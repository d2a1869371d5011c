//! Table export.
//!
//! Both shapes are read-only views of one committed snapshot:
//! - column-major: the table as-is, `{ "name": [labels...], ... }`
//! - row-major: one record per row, `[{ "name": label, ... }, ...]`

pub(crate) mod records;

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ReorderError, Result};
use crate::types::Table;

pub use records::{from_records, to_records, Record};

/// Serialization shape for exported tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExportShape {
    #[default]
    ColumnMajor,
    /// One record per row. A table with no rows exports as `[]` and loses
    /// its column names.
    RowMajor,
}

impl ExportShape {
    /// Suggested file stem for a download in this shape.
    #[must_use]
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::ColumnMajor => "by-columns",
            Self::RowMajor => "by-rows",
        }
    }
}

impl FromStr for ExportShape {
    type Err = ReorderError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "column-major" | "columns" => Ok(Self::ColumnMajor),
            "row-major" | "rows" => Ok(Self::RowMajor),
            other => Err(ReorderError::Parse(format!("unknown export shape `{other}`"))),
        }
    }
}

/// Serialize `table` as pretty-printed JSON in the requested shape.
///
/// # Errors
/// Returns `Json` if serialization fails.
pub fn export_table(table: &Table, shape: ExportShape) -> Result<String> {
    let json = match shape {
        ExportShape::ColumnMajor => serde_json::to_string_pretty(table)?,
        ExportShape::RowMajor => serde_json::to_string_pretty(&to_records(table))?,
    };
    Ok(json)
}
