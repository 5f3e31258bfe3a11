use std::{fmt::Display, str::FromStr};
use anyhow::{bail, ensure, Context};

/// Largest supported board dimension: one letter per column
pub const MAX_SIZE: usize = 26;

/// A playable square, addressed by 1-based column and row.
/// Column 1 renders as `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub column: i32,
    pub row: i32,
}

impl Square {
    pub const fn new(column: i32, row: i32) -> Self {
        Self { column, row }
    }

    pub const fn in_bounds(&self, size: usize) -> bool {
        self.column >= 1 && self.column <= size as i32 &&
        self.row >= 1 && self.row <= size as i32
    }

    /// The square one diagonal step away, which may lie off the board
    pub fn step(&self, dir: Dir) -> Square {
        let (dc, dr) = dir.delta();
        Square::new(self.column + dc, self.row + dr)
    }

    pub fn column_letter(&self) -> char {
        if (1..=MAX_SIZE as i32).contains(&self.column) {
            (b'A' + (self.column - 1) as u8) as char
        } else {
            '?'
        }
    }
}

impl FromStr for Square {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let letter = chars.next()
            .context("Empty square")?
            .to_ascii_uppercase();

        if !letter.is_ascii_uppercase() {
            bail!("Invalid column in square: {}", s);
        }

        let row: i32 = chars.as_str().parse()
            .with_context(|| format!("Invalid row in square: {}", s))?;
        ensure!(row >= 1, "Invalid row in square: {}", s);

        Ok(Square {
            column: (letter as u8 - b'A') as i32 + 1,
            row,
        })
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row)
    }
}

/// Diagonal directions, "up" meaning towards higher rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    UpLeft,
    UpRight,
    DownRight,
    DownLeft,
}

impl Dir {
    /// Search order used by the move generator
    pub const ALL: [Dir; 4] = [
        Dir::UpLeft,
        Dir::UpRight,
        Dir::DownRight,
        Dir::DownLeft,
    ];

    pub const fn delta(self) -> (i32, i32) {
        match self {
            Dir::UpLeft => (-1, 1),
            Dir::UpRight => (1, 1),
            Dir::DownRight => (1, -1),
            Dir::DownLeft => (-1, -1),
        }
    }
}
