//! lockstep - aligned label grids reordered in lockstep
//!
//! Several named, equal-length columns of labels are shown side by side.
//! Rows can be rearranged two ways:
//! - dragging one cell onto another swaps the two rows of that column only
//! - sorting on a column reorders every column by the same permutation,
//!   so rows stay aligned
//!
//! Sorting is duplicate-safe and can follow a caller-supplied canonical
//! order for columns whose natural order is not alphabetical.
//!
//! # Usage (Rust)
//!
//! ```
//! use lockstep::{Coordinate, ReorderEngine, Table};
//!
//! let table = Table::create([
//!     ("colors", vec!["red", "blue", "red"]),
//!     ("months", vec!["Mar", "Jan", "Feb"]),
//! ])?;
//! let mut engine = ReorderEngine::new(table);
//!
//! engine.sort_by("colors", true)?;
//! assert_eq!(engine.snapshot().column("colors").map(|c| c.as_slice().to_vec()),
//!            Some(vec!["blue".to_string(), "red".to_string(), "red".to_string()]));
//!
//! engine.on_drag_start(Coordinate::new(1, 0))?;
//! engine.on_drag_hover(Coordinate::new(1, 2))?;
//! engine.on_drag_end()?;
//! # Ok::<(), lockstep::ReorderError>(())
//! ```
//!
//! # Usage (JavaScript)
//!
//! ```javascript
//! import init, { ReorderView } from 'lockstep';
//! await init();
//! const view = new ReorderView();
//! view.load_table(await (await fetch('groups.json')).text());
//! view.set_render_callback(() => draw(view.grid()));
//! ```

// Data model and algorithms
pub mod drag;
pub mod engine;
pub mod error;
pub mod resolver;
pub mod types;

// Collaborator support
pub mod export;
pub mod grid;
pub mod import;
pub mod sources;

mod serde_helpers;

// JavaScript bindings
pub mod viewer;

use wasm_bindgen::prelude::*;

pub use drag::{DragCoordinator, DragState, SwapRequest};
pub use engine::{Publication, PublicationKind, ReorderEngine, SnapshotListener};
pub use error::{ReorderError, Result};
pub use resolver::{resolve_with, PermutationResolver, SortKey};
pub use types::*;
pub use viewer::ReorderView;

/// Get the library version
#[must_use]
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
