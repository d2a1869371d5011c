use std::fmt;

use serde::{Deserialize, Serialize};

/// One cell of a table: a column position in declared order and a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Coordinate {
    pub column: usize,
    pub row: usize,
}

impl Coordinate {
    #[must_use]
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    #[must_use]
    pub fn same_column(&self, other: &Self) -> bool {
        self.column == other.column
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((column, row): (usize, usize)) -> Self {
        Self::new(column, row)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}
