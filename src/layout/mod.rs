//! Grid placement for the presentation layer.
//!
//! Maps deck positions onto the cells of a shaped grid. The default shape
//! is a heart on an 8×6 board.

pub mod grid;

pub use grid::{GridMask, LayoutError, Placement, Slot};
