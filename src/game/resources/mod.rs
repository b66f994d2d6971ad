//! Game resources kept alongside the board
//!
//! - [`MoveHistory`] - Recorded moves for undo/redo

pub mod history;

pub use history::*;
