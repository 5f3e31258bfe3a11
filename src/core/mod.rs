//! Board model and move generation

pub mod convert;
pub mod display;
pub mod move_gen;
pub mod moves;
pub mod owner;
pub mod snapshot;
pub mod square;

pub use convert::{FromIndex, ToIndex};
pub use display::Highlighted;
pub use move_gen::{generate, ChainPolicy, MoveGenerator, SearchStats};
pub use moves::{MoveSequence, MoveSet};
pub use owner::Owner;
pub use snapshot::BoardSnapshot;
pub use square::{Dir, Square, MAX_SIZE};
