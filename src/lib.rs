//! Jumpchain - move and capture-chain generator for digitized checkers boards

pub mod core;
pub mod engine;
pub mod protocol;

// Re-export commonly used items
pub use crate::core::{generate, BoardSnapshot, MoveSet, Owner};
pub use engine::Engine;
