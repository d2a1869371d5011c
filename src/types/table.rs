use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::{Column, Permutation};
use crate::error::{ReorderError, Result};

/// An aligned collection of named columns.
///
/// Every column has the same length (the table's height). Columns keep the
/// order they were declared in; that order is what a [`Coordinate`]'s
/// column index refers to.
///
/// Tables are values: every reordering returns a new `Table` and leaves
/// `self` untouched.
///
/// [`Coordinate`]: super::Coordinate
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Table {
    columns: Vec<(String, Column)>,
    height: usize,
}

impl Table {
    /// Build a table from `(name, labels)` pairs in display order.
    ///
    /// # Errors
    /// `Shape` if two columns differ in length, `DuplicateColumn` if a name
    /// repeats.
    pub fn create<I, K, C>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<Column>,
    {
        let mut out: Vec<(String, Column)> = Vec::new();
        let mut height: Option<usize> = None;

        for (name, column) in columns {
            let name = name.into();
            let column = column.into();
            if out.iter().any(|(existing, _)| *existing == name) {
                return Err(ReorderError::DuplicateColumn(name));
            }
            match height {
                None => height = Some(column.len()),
                Some(h) if h != column.len() => {
                    return Err(ReorderError::Shape(format!(
                        "column `{name}` has {} labels, expected {h}",
                        column.len()
                    )));
                }
                Some(_) => {}
            }
            out.push((name, column));
        }

        Ok(Self {
            columns: out,
            height: height.unwrap_or(0),
        })
    }

    /// Number of rows shared by every column.
    #[must_use]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.columns.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn columns(&self) -> impl Iterator<Item = (&str, &Column)> + '_ {
        self.columns.iter().map(|(name, col)| (name.as_str(), col))
    }

    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, col)| col)
    }

    /// Column at a declared position.
    #[must_use]
    pub fn column_at(&self, index: usize) -> Option<(&str, &Column)> {
        self.columns
            .get(index)
            .map(|(name, col)| (name.as_str(), col))
    }

    /// Declared position of a named column.
    #[must_use]
    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|(existing, _)| existing == name)
    }

    pub(crate) fn require(&self, name: &str) -> Result<&Column> {
        self.column(name)
            .ok_or_else(|| ReorderError::UnknownColumn(name.to_string()))
    }

    /// Labels of every column at `row`, in declared column order.
    #[must_use]
    pub fn row(&self, row: usize) -> Option<Vec<(&str, &str)>> {
        if row >= self.height {
            return None;
        }
        self.columns
            .iter()
            .map(|(name, col)| col.get(row).map(|label| (name.as_str(), label)))
            .collect()
    }

    /// Replace one column.
    ///
    /// # Errors
    /// `UnknownColumn` if `name` is absent, `Shape` if the new column's
    /// length differs from the table height.
    pub fn with_column(&self, name: &str, column: impl Into<Column>) -> Result<Self> {
        let column = column.into();
        let index = self
            .position(name)
            .ok_or_else(|| ReorderError::UnknownColumn(name.to_string()))?;
        if column.len() != self.height {
            return Err(ReorderError::Shape(format!(
                "replacement for `{name}` has {} labels, expected {}",
                column.len(),
                self.height
            )));
        }
        let mut next = self.clone();
        if let Some(slot) = next.columns.get_mut(index) {
            slot.1 = column;
        }
        Ok(next)
    }

    /// Reorder every column by the same permutation.
    ///
    /// # Errors
    /// `Shape` if the permutation's length differs from the table height.
    pub fn apply_permutation(&self, perm: &Permutation) -> Result<Self> {
        if perm.len() != self.height {
            return Err(ReorderError::Shape(format!(
                "permutation of {} rows applied to table of height {}",
                perm.len(),
                self.height
            )));
        }
        Ok(Self {
            columns: self
                .columns
                .iter()
                .map(|(name, col)| (name.clone(), col.permuted(perm)))
                .collect(),
            height: self.height,
        })
    }

    /// Exchange two rows of one column; every other column is untouched.
    ///
    /// # Errors
    /// `UnknownColumn` if the column is absent, `Range` if either row is
    /// outside the table.
    pub fn swap_rows(&self, row_a: usize, row_b: usize, name: &str) -> Result<Self> {
        let swapped = self.require(name)?.swapped(row_a, row_b)?;
        self.with_column(name, swapped)
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, col) in &self.columns {
            map.serialize_entry(name, col)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Table {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let entries: Vec<(String, Column)> = crate::serde_helpers::ordered_entries(deserializer)?;
        Self::create(entries).map_err(serde::de::Error::custom)
    }
}
