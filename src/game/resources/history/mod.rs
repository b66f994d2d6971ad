//! Game history tracking
//!
//! Move records and the done/undone stacks behind undo and redo.

pub mod history;

// Re-export all public items
pub use history::*;
