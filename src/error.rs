//! Structured error types for lockstep.
//!
//! Every failure is a rejected single operation: the engine never enters a
//! state it cannot continue from.

/// All errors that can occur while building, reordering, or exchanging tables.
#[derive(Debug, thiserror::Error)]
pub enum ReorderError {
    /// Column lengths disagree, or a permutation does not fit the table.
    #[error("Shape mismatch: {0}")]
    Shape(String),

    /// A row or column index outside the table.
    #[error("Index out of range: {0}")]
    Range(String),

    /// A sort target order does not match the column's multiset of labels.
    #[error("Order mismatch: {0}")]
    OrderMismatch(String),

    /// No column with this name exists in the table.
    #[error("Unknown column: {0}")]
    UnknownColumn(String),

    /// The same column name was declared twice.
    #[error("Duplicate column: {0}")]
    DuplicateColumn(String),

    /// Malformed textual input (an export shape, a swap spec).
    #[error("Parse error: {0}")]
    Parse(String),

    /// JSON (de)serialization error.
    #[error("JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ReorderError>;

impl ReorderError {
    pub(crate) fn row_out_of_range(row: usize, height: usize) -> Self {
        Self::Range(format!("row {row} not in 0..{height}"))
    }

    pub(crate) fn column_out_of_range(column: usize, width: usize) -> Self {
        Self::Range(format!("column {column} not in 0..{width}"))
    }
}
