use serde::Serialize;

use crate::error::{ReorderError, Result};

/// A full reordering of `0..len`: entry `i` names the source row that
/// lands at position `i`.
///
/// Construction validates that every index appears exactly once, so a
/// `Permutation` only has to be checked against a table's height.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Permutation(Vec<usize>);

impl Permutation {
    #[must_use]
    pub fn identity(len: usize) -> Self {
        Self((0..len).collect())
    }

    /// Validate `indices` as a permutation of `0..indices.len()`.
    pub fn try_from_indices(indices: Vec<usize>) -> Result<Self> {
        let len = indices.len();
        let mut seen = vec![false; len];
        for &index in &indices {
            match seen.get_mut(index) {
                Some(slot) if !*slot => *slot = true,
                Some(_) => {
                    return Err(ReorderError::Shape(format!(
                        "index {index} appears more than once in permutation"
                    )))
                }
                None => {
                    return Err(ReorderError::Shape(format!(
                        "index {index} not in 0..{len} for permutation"
                    )))
                }
            }
        }
        Ok(Self(indices))
    }

    /// Wrap indices already known to be a permutation.
    pub(crate) fn from_claimed(indices: Vec<usize>) -> Self {
        debug_assert!(Self::try_from_indices(indices.clone()).is_ok());
        Self(indices)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.0.iter().enumerate().all(|(i, &source)| i == source)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    #[must_use]
    pub fn into_indices(self) -> Vec<usize> {
        self.0
    }
}

impl TryFrom<Vec<usize>> for Permutation {
    type Error = ReorderError;

    fn try_from(indices: Vec<usize>) -> Result<Self> {
        Self::try_from_indices(indices)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let p = Permutation::identity(4);
        assert_eq!(p.as_slice(), &[0, 1, 2, 3]);
        assert!(p.is_identity());
        assert!(Permutation::identity(0).is_identity());
    }

    #[test]
    fn test_rejects_repeated_index() {
        let err = Permutation::try_from_indices(vec![0, 0, 1]).unwrap_err();
        assert!(matches!(err, ReorderError::Shape(_)));
    }

    #[test]
    fn test_rejects_out_of_range_index() {
        let err = Permutation::try_from(vec![0, 3, 1]).unwrap_err();
        assert!(matches!(err, ReorderError::Shape(_)));
    }

    #[test]
    fn test_accepts_reversal() {
        let p = Permutation::try_from_indices(vec![2, 1, 0]).unwrap();
        assert!(!p.is_identity());
        assert_eq!(p.len(), 3);
    }
}
