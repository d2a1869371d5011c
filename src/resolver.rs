//! Sort-permutation resolution.
//!
//! Sorting one column yields a [`Permutation`] that is then applied to every
//! column of the table, which is what keeps rows aligned. The resolver only
//! computes that permutation; it never touches the table.
//!
//! Repeated labels are matched to source rows first-come first-served: the
//! n-th occurrence of a label in the target order claims the n-th
//! occurrence of that label in the column, scanning left to right. Equal
//! labels therefore keep their relative order in both directions.

use std::collections::{HashMap, VecDeque};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReorderError, Result};
use crate::types::{Permutation, Table};

/// Column and direction of a sort.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SortKey {
    pub column: String,
    pub ascending: bool,
}

impl SortKey {
    pub fn new(column: impl Into<String>, ascending: bool) -> Self {
        Self {
            column: column.into(),
            ascending,
        }
    }
}

/// Computes sort permutations, consulting per-column canonical orders.
///
/// A canonical order replaces default string ordering for columns whose
/// natural display order is not lexicographic, such as a calendar axis.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PermutationResolver {
    canonical: Vec<(String, Vec<String>)>,
}

impl PermutationResolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a resolver from `(column, order)` pairs.
    pub fn with_canonical_orders<I, K>(orders: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<String>)>,
        K: Into<String>,
    {
        let mut resolver = Self::new();
        for (column, order) in orders {
            resolver.set_canonical_order(column, order);
        }
        resolver
    }

    /// Register (or replace) the canonical order for a column.
    pub fn set_canonical_order(&mut self, column: impl Into<String>, order: Vec<String>) {
        let column = column.into();
        match self.canonical.iter_mut().find(|(name, _)| *name == column) {
            Some(slot) => slot.1 = order,
            None => self.canonical.push((column, order)),
        }
    }

    pub fn clear_canonical_order(&mut self, column: &str) {
        self.canonical.retain(|(name, _)| name != column);
    }

    #[must_use]
    pub fn canonical_order(&self, column: &str) -> Option<&[String]> {
        self.canonical
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, order)| order.as_slice())
    }

    /// Resolve using the registered canonical order for `column`, if any.
    ///
    /// # Errors
    /// See [`resolve_with`].
    pub fn resolve(&self, table: &Table, column: &str, ascending: bool) -> Result<Permutation> {
        resolve_with(table, column, ascending, self.canonical_order(column))
    }
}

/// Compute the permutation that sorts `table` by `column`.
///
/// Without a canonical order the column's labels are sorted by ordinal
/// string comparison. With one, the canonical order is the target order
/// and must hold exactly the column's labels, repeats included. Descending
/// reverses the target order.
///
/// # Errors
/// `UnknownColumn` if the column is absent, `OrderMismatch` if the
/// canonical order does not match the column's labels one-to-one.
pub fn resolve_with(
    table: &Table,
    column: &str,
    ascending: bool,
    canonical: Option<&[String]>,
) -> Result<Permutation> {
    let original = table.require(column)?.as_slice();

    let mut target: Vec<&str> = match canonical {
        Some(order) => {
            if order.len() != original.len() {
                return Err(ReorderError::OrderMismatch(format!(
                    "canonical order for `{column}` has {} labels, column has {}",
                    order.len(),
                    original.len()
                )));
            }
            order.iter().map(String::as_str).collect()
        }
        None => {
            let mut sorted: Vec<&str> = original.iter().map(String::as_str).collect();
            sorted.sort_unstable();
            sorted
        }
    };
    if !ascending {
        target.reverse();
    }

    // Unclaimed source rows per label, in left-to-right order.
    let mut unclaimed: HashMap<&str, VecDeque<usize>> = HashMap::new();
    for (row, label) in original.iter().enumerate() {
        unclaimed.entry(label.as_str()).or_default().push_back(row);
    }

    let mut claimed = Vec::with_capacity(target.len());
    for label in target {
        let row = unclaimed
            .get_mut(label)
            .and_then(VecDeque::pop_front)
            .ok_or_else(|| {
                ReorderError::OrderMismatch(format!(
                    "label `{label}` in target order has no unclaimed row in `{column}`"
                ))
            })?;
        claimed.push(row);
    }

    debug!(column, ascending, canonical = canonical.is_some(), "resolved sort permutation");
    Ok(Permutation::from_claimed(claimed))
}
