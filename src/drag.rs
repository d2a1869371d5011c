//! Drag gesture state machine.
//!
//! ```text
//! Idle --begin--> Dragging(start) --hover--> Hovering(start, over)
//!   ^                  |                        |   ^
//!   |                  |                        +---+ hover
//!   +------ end / cancel (from any state) ------+
//! ```
//!
//! `begin` from any state abandons whatever drag was in flight. Only a drag
//! that ends over a different row of its own column produces a swap.

use serde::Serialize;
use tracing::debug;

use crate::types::Coordinate;

/// Where a drag gesture currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        start: Coordinate,
    },
    Hovering {
        start: Coordinate,
        over: Coordinate,
    },
}

impl DragState {
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    #[must_use]
    pub fn start(&self) -> Option<Coordinate> {
        match *self {
            Self::Idle => None,
            Self::Dragging { start } | Self::Hovering { start, .. } => Some(start),
        }
    }

    #[must_use]
    pub fn over(&self) -> Option<Coordinate> {
        match *self {
            Self::Hovering { over, .. } => Some(over),
            _ => None,
        }
    }

    /// The swap this state would commit if the drag ended now.
    #[must_use]
    pub fn pending_swap(&self) -> Option<SwapRequest> {
        match *self {
            Self::Hovering { start, over }
                if start.same_column(&over) && start.row != over.row =>
            {
                Some(SwapRequest { start, over })
            }
            _ => None,
        }
    }
}

/// Exchange `start.row` and `over.row` within `start.column`.
///
/// Only ever constructed for two distinct rows of the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SwapRequest {
    pub start: Coordinate,
    pub over: Coordinate,
}

impl SwapRequest {
    #[must_use]
    pub fn column(&self) -> usize {
        self.start.column
    }

    #[must_use]
    pub fn rows(&self) -> (usize, usize) {
        (self.start.row, self.over.row)
    }
}

/// Tracks one drag gesture at a time.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
}

impl DragCoordinator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> DragState {
        self.state
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state.is_active()
    }

    pub fn begin(&mut self, coord: Coordinate) {
        if self.state.is_active() {
            debug!(previous = ?self.state, "new drag abandons the one in flight");
        }
        self.state = DragState::Dragging { start: coord };
    }

    pub fn hover(&mut self, coord: Coordinate) {
        self.state = match self.state {
            DragState::Idle => return,
            DragState::Dragging { start } | DragState::Hovering { start, .. } => {
                DragState::Hovering { start, over: coord }
            }
        };
    }

    #[must_use]
    pub fn pending_swap(&self) -> Option<SwapRequest> {
        self.state.pending_swap()
    }

    /// Finish the gesture, returning the swap to commit if there is one.
    pub fn end(&mut self) -> Option<SwapRequest> {
        let swap = self.state.pending_swap();
        self.state = DragState::Idle;
        swap
    }

    pub fn cancel(&mut self) {
        self.state = DragState::Idle;
    }
}
