//! The reordering façade.
//!
//! `ReorderEngine` owns two tables:
//! - `committed`: the authoritative arrangement, read by renderers and
//!   exporters through [`ReorderEngine::snapshot`].
//! - `draft`: a preview of what an in-flight drag would commit. Equal to
//!   `committed` whenever no swap is pending.
//!
//! Both are shared as `Arc<Table>` and replaced wholesale, never mutated,
//! so a reader holding a snapshot always sees a consistent table.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::drag::{DragCoordinator, DragState, SwapRequest};
use crate::error::{ReorderError, Result};
use crate::resolver::{PermutationResolver, SortKey};
use crate::types::{Column, Coordinate, Permutation, Table};

/// Why listeners are being notified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum PublicationKind {
    /// The committed table was replaced.
    Commit,
    /// Only the draft or the drag state changed.
    Preview,
}

/// What listeners receive after each state change.
#[derive(Debug, Clone)]
pub struct Publication {
    pub kind: PublicationKind,
    /// The table to draw: the draft during a drag, else the committed table.
    pub table: Arc<Table>,
    pub drag: DragState,
    /// Number of commits so far.
    pub revision: u64,
}

/// Receives every [`Publication`].
pub trait SnapshotListener {
    fn on_publish(&mut self, publication: &Publication);
}

impl<F: FnMut(&Publication)> SnapshotListener for F {
    fn on_publish(&mut self, publication: &Publication) {
        self(publication);
    }
}

pub struct ReorderEngine {
    committed: Arc<Table>,
    draft: Arc<Table>,
    drag: DragCoordinator,
    resolver: PermutationResolver,
    sort: Option<SortKey>,
    revision: u64,
    listeners: Vec<Box<dyn SnapshotListener>>,
}

impl Default for ReorderEngine {
    fn default() -> Self {
        Self::new(Table::default())
    }
}

impl fmt::Debug for ReorderEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReorderEngine")
            .field("committed", &self.committed)
            .field("draft", &self.draft)
            .field("drag", &self.drag)
            .field("resolver", &self.resolver)
            .field("sort", &self.sort)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl ReorderEngine {
    #[must_use]
    pub fn new(table: Table) -> Self {
        Self::with_resolver(table, PermutationResolver::new())
    }

    #[must_use]
    pub fn with_resolver(table: Table, resolver: PermutationResolver) -> Self {
        let committed = Arc::new(table);
        Self {
            draft: Arc::clone(&committed),
            committed,
            drag: DragCoordinator::new(),
            resolver,
            sort: None,
            revision: 0,
            listeners: Vec::new(),
        }
    }

    // ---- Read side ----

    /// The committed table.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Table> {
        Arc::clone(&self.committed)
    }

    /// The draft table; identical to the snapshot unless a swap is pending.
    #[must_use]
    pub fn draft_snapshot(&self) -> Arc<Table> {
        Arc::clone(&self.draft)
    }

    #[must_use]
    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    /// The most recent successful sort, kept for sort indicators.
    #[must_use]
    pub fn sort_key(&self) -> Option<&SortKey> {
        self.sort.as_ref()
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn resolver(&self) -> &PermutationResolver {
        &self.resolver
    }

    pub fn resolver_mut(&mut self) -> &mut PermutationResolver {
        &mut self.resolver
    }

    pub fn subscribe(&mut self, listener: impl SnapshotListener + 'static) {
        self.listeners.push(Box::new(listener));
    }

    // ---- Loading ----

    /// Replace all state with `table`. Any drag in flight is dropped.
    pub fn load(&mut self, table: Table) {
        info!(
            columns = table.width(),
            rows = table.height(),
            "loaded table"
        );
        self.drag.cancel();
        self.sort = None;
        self.commit(table);
    }

    /// Build a table from `(name, labels)` pairs and load it.
    ///
    /// # Errors
    /// Whatever [`Table::create`] rejects; state is left unchanged.
    pub fn load_columns<I, K, C>(&mut self, columns: I) -> Result<()>
    where
        I: IntoIterator<Item = (K, C)>,
        K: Into<String>,
        C: Into<Column>,
    {
        let table = Table::create(columns)?;
        self.load(table);
        Ok(())
    }

    /// Load a column-major object or row-major record array.
    ///
    /// # Errors
    /// `Json` for malformed input, `Shape` for ragged columns; state is
    /// left unchanged.
    pub fn load_json(&mut self, json: &str) -> Result<()> {
        let table = crate::import::parse_table(json)?;
        self.load(table);
        Ok(())
    }

    // ---- Sorting ----

    /// Sort every column by the order of `column`.
    ///
    /// A successful sort cancels any drag in flight. On failure nothing
    /// changes, the drag included.
    ///
    /// # Errors
    /// `UnknownColumn` or `OrderMismatch` from the resolver.
    pub fn sort_by(&mut self, column: &str, ascending: bool) -> Result<Permutation> {
        let perm = self
            .resolver
            .resolve(&self.committed, column, ascending)
            .inspect_err(|error| warn!(column, ascending, %error, "sort rejected"))?;
        let next = self.committed.apply_permutation(&perm)?;
        if self.drag.is_active() {
            debug!("sort cancels drag in flight");
            self.cancel_drag_quietly();
        }
        self.sort = Some(SortKey::new(column, ascending));
        self.commit(next);
        Ok(perm)
    }

    /// Reorder every column by an explicit permutation.
    ///
    /// # Errors
    /// `Shape` if the permutation does not fit the committed table.
    pub fn apply_permutation(&mut self, perm: &Permutation) -> Result<()> {
        let next = self.committed.apply_permutation(perm)?;
        self.drag.cancel();
        self.commit(next);
        Ok(())
    }

    // ---- Dragging ----

    /// Start dragging the cell at `coord`.
    ///
    /// # Errors
    /// `Range` if `coord` is outside the committed table.
    pub fn on_drag_start(&mut self, coord: Coordinate) -> Result<()> {
        self.check_coordinate(coord)?;
        self.drag.begin(coord);
        self.draft = Arc::clone(&self.committed);
        debug!(%coord, "drag started");
        self.publish(PublicationKind::Preview);
        Ok(())
    }

    /// Move the drag over `coord`, refreshing the draft preview.
    ///
    /// Ignored when no drag is active.
    ///
    /// # Errors
    /// `Range` if `coord` is outside the committed table.
    pub fn on_drag_hover(&mut self, coord: Coordinate) -> Result<()> {
        if !self.drag.is_active() {
            return Ok(());
        }
        self.check_coordinate(coord)?;
        if self.drag.state().over() == Some(coord) {
            return Ok(());
        }
        self.drag.hover(coord);
        self.draft = match self.drag.pending_swap() {
            Some(swap) => Arc::new(swapped(&self.committed, swap)?),
            None => Arc::clone(&self.committed),
        };
        self.publish(PublicationKind::Preview);
        Ok(())
    }

    /// Finish the drag, committing its swap if it produced one.
    ///
    /// # Errors
    /// `Range` if the swap no longer fits the committed table; the
    /// committed table is left unchanged.
    pub fn on_drag_end(&mut self) -> Result<Option<SwapRequest>> {
        if !self.drag.is_active() {
            return Ok(None);
        }
        let Some(swap) = self.drag.end() else {
            self.draft = Arc::clone(&self.committed);
            self.publish(PublicationKind::Preview);
            return Ok(None);
        };
        let next = match swapped(&self.committed, swap) {
            Ok(next) => next,
            Err(error) => {
                self.draft = Arc::clone(&self.committed);
                self.publish(PublicationKind::Preview);
                return Err(error);
            }
        };
        debug!(column = swap.column(), rows = ?swap.rows(), "drag committed swap");
        self.commit(next);
        Ok(Some(swap))
    }

    /// Abandon the drag and discard the draft.
    pub fn on_drag_cancel(&mut self) {
        if self.drag.is_active() {
            self.cancel_drag_quietly();
            self.publish(PublicationKind::Preview);
        }
    }

    // ---- Internals ----

    fn cancel_drag_quietly(&mut self) {
        self.drag.cancel();
        self.draft = Arc::clone(&self.committed);
    }

    fn check_coordinate(&self, coord: Coordinate) -> Result<()> {
        if coord.column >= self.committed.width() {
            return Err(ReorderError::column_out_of_range(
                coord.column,
                self.committed.width(),
            ));
        }
        if coord.row >= self.committed.height() {
            return Err(ReorderError::row_out_of_range(
                coord.row,
                self.committed.height(),
            ));
        }
        Ok(())
    }

    /// Replace the committed table in one step and notify listeners.
    fn commit(&mut self, next: Table) {
        self.committed = Arc::new(next);
        self.draft = Arc::clone(&self.committed);
        self.revision += 1;
        debug!(revision = self.revision, "committed");
        self.publish(PublicationKind::Commit);
    }

    fn publish(&mut self, kind: PublicationKind) {
        if self.listeners.is_empty() {
            return;
        }
        let publication = Publication {
            kind,
            table: Arc::clone(&self.draft),
            drag: self.drag.state(),
            revision: self.revision,
        };
        for listener in &mut self.listeners {
            listener.on_publish(&publication);
        }
    }
}

fn swapped(table: &Table, swap: SwapRequest) -> Result<Table> {
    let (name, _) = table
        .column_at(swap.column())
        .ok_or_else(|| ReorderError::column_out_of_range(swap.column(), table.width()))?;
    let (row_a, row_b) = swap.rows();
    table.swap_rows(row_a, row_b, name)
}
