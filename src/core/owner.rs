use anyhow::{anyhow, Result};
use num_derive::{FromPrimitive, ToPrimitive};
use num_traits::{FromPrimitive, ToPrimitive};
use super::convert::{FromIndex, ToIndex};

/// Occupancy of one playable square.
///
/// The numeric codes match what the digitizer reports: 0 for an empty
/// square, 1 and 2 for the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, FromPrimitive, ToPrimitive)]
pub enum Owner {
    #[default]
    Empty = 0,
    PlayerA = 1,
    PlayerB = 2,
}

impl Owner {
    pub fn players() -> [Owner; 2] {
        [Owner::PlayerA, Owner::PlayerB]
    }

    /// The other player, or `None` for an empty square
    pub fn opponent(self) -> Option<Self> {
        match self {
            Owner::PlayerA => Some(Owner::PlayerB),
            Owner::PlayerB => Some(Owner::PlayerA),
            Owner::Empty => None,
        }
    }

    /// Row delta of a forward step: player A advances towards higher rows,
    /// player B towards lower rows.
    pub fn forward(self) -> i32 {
        match self {
            Owner::PlayerA => 1,
            Owner::PlayerB => -1,
            Owner::Empty => 0,
        }
    }
}

impl FromIndex for Owner {
    fn from_index(idx: usize) -> Result<Self> {
        FromPrimitive::from_usize(idx)
            .ok_or_else(|| anyhow!("Invalid owner code: {}", idx))
    }
}

impl ToIndex for Owner {
    fn to_index(&self) -> Result<usize> {
        ToPrimitive::to_usize(self)
            .ok_or_else(|| anyhow!("Invalid owner value"))
    }
}
