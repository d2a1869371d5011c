//! Data types for the reordering engine.

mod column;
mod coord;
mod permutation;
mod table;

pub use column::*;
pub use coord::*;
pub use permutation::*;
pub use table::*;
