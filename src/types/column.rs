use serde::{Deserialize, Serialize};

use super::Permutation;
use crate::error::{ReorderError, Result};

/// An ordered sequence of labels, addressed by 0-based row index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Column {
    labels: Vec<String>,
}

impl Column {
    #[must_use]
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Label at `row`, if the row exists.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&str> {
        self.labels.get(row).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn into_labels(self) -> Vec<String> {
        self.labels
    }

    /// Gather labels in permutation order.
    ///
    /// The caller guarantees `perm.len() == self.len()`.
    pub(crate) fn permuted(&self, perm: &Permutation) -> Self {
        perm.iter()
            .filter_map(|source| self.labels.get(source).cloned())
            .collect()
    }

    pub(crate) fn swapped(&self, row_a: usize, row_b: usize) -> Result<Self> {
        let height = self.len();
        for row in [row_a, row_b] {
            if row >= height {
                return Err(ReorderError::row_out_of_range(row, height));
            }
        }
        let mut labels = self.labels.clone();
        labels.swap(row_a, row_b);
        Ok(Self { labels })
    }
}

impl From<Vec<String>> for Column {
    fn from(labels: Vec<String>) -> Self {
        Self::new(labels)
    }
}

impl From<Vec<&str>> for Column {
    fn from(labels: Vec<&str>) -> Self {
        labels.into_iter().collect()
    }
}

impl<S: Into<String>> FromIterator<S> for Column {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Into::into).collect())
    }
}
