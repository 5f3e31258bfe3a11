//! Logical board snapshot

pub mod notation;

use anyhow::{ensure, Result};

use super::{
    convert::FromIndex,
    owner::Owner,
    square::{Dir, Square, MAX_SIZE},
};

/// Ownership of every square of an N×N grid at one observation cycle.
///
/// Cells are stored densely in column-major order, which is also the order
/// the move generator visits pieces in. A `None` cell is a square the
/// digitizer failed to report; it behaves as if it were off the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    size: usize,
    cells: Vec<Option<Owner>>,
}

impl BoardSnapshot {
    pub const DEFAULT_SIZE: usize = 8;

    /// Create an N×N snapshot with every square empty
    pub fn new(size: usize) -> Result<Self> {
        ensure!(
            (1..=MAX_SIZE).contains(&size),
            "Board size must be between 1 and {}, got {}", MAX_SIZE, size
        );

        Ok(Self {
            size,
            cells: vec![Some(Owner::Empty); size * size],
        })
    }

    /// Build a snapshot from reported squares. Squares not reported stay
    /// missing; duplicates and off-grid squares are rejected.
    pub fn from_squares<I>(size: usize, squares: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Square, Owner)>,
    {
        let mut snapshot = Self::new(size)?;
        snapshot.cells.fill(None);

        for (square, owner) in squares {
            let index = snapshot.index(&square)
                .ok_or_else(|| anyhow::anyhow!("Square {} is outside the {}x{} grid", square, size, size))?;
            ensure!(snapshot.cells[index].is_none(), "Duplicate square {}", square);
            snapshot.cells[index] = Some(owner);
        }

        Ok(snapshot)
    }

    /// Like `from_squares`, with owners given as digitizer codes (0, 1, 2)
    pub fn from_codes<I>(size: usize, squares: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Square, usize)>,
    {
        let squares = squares.into_iter()
            .map(|(square, code)| Ok((square, Owner::from_index(code)?)))
            .collect::<Result<Vec<_>>>()?;

        Self::from_squares(size, squares)
    }

    /// Standard opening: each player fills the dark squares of the
    /// `(size - 2) / 2` ranks nearest to them. `A1` is dark.
    pub fn start_position(size: usize) -> Result<Self> {
        let mut snapshot = Self::new(size)?;
        let ranks = (size.saturating_sub(2) / 2) as i32;
        let size = size as i32;

        for square in snapshot.squares().collect::<Vec<_>>() {
            if (square.column + square.row) % 2 != 0 {
                continue;
            }
            if square.row <= ranks {
                snapshot.place(square, Owner::PlayerA)?;
            } else if square.row > size - ranks {
                snapshot.place(square, Owner::PlayerB)?;
            }
        }

        Ok(snapshot)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, square: &Square) -> Option<usize> {
        if !square.in_bounds(self.size) {
            return None;
        }
        Some((square.column as usize - 1) * self.size + (square.row as usize - 1))
    }

    fn square_at(&self, index: usize) -> Square {
        Square::new(
            (index / self.size) as i32 + 1,
            (index % self.size) as i32 + 1,
        )
    }

    /// Owner of `square`, or `None` if the square is not part of the grid
    pub fn owner_at(&self, square: Square) -> Option<Owner> {
        self.index(&square).and_then(|index| self.cells[index])
    }

    pub fn contains(&self, square: Square) -> bool {
        self.owner_at(square).is_some()
    }

    /// Whether every square of the grid was reported
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The diagonal neighbour of `square`, if it lies within the grid
    pub fn diagonal_neighbor(&self, square: Square, dir: Dir) -> Option<Square> {
        let neighbor = square.step(dir);
        self.contains(neighbor).then_some(neighbor)
    }

    /// Set the owner of a square that is part of the grid
    pub fn place(&mut self, square: Square, owner: Owner) -> Result<()> {
        let index = self.index(&square);
        ensure!(
            index.is_some_and(|index| self.cells[index].is_some()),
            "Square {} is not on the board", square
        );
        if let Some(index) = index {
            self.cells[index] = Some(owner);
        }
        Ok(())
    }

    /// A copy with `mover` relocated from `origin` to `landing` and the
    /// piece on `captured` removed. The receiver is left untouched.
    pub fn with_capture_applied(&self, origin: Square, captured: Square, landing: Square, mover: Owner) -> Self {
        let mut next = self.clone();
        for (square, owner) in [(origin, Owner::Empty), (captured, Owner::Empty), (landing, mover)] {
            if let Some(index) = next.index(&square) {
                if next.cells[index].is_some() {
                    next.cells[index] = Some(owner);
                }
            }
        }
        next
    }

    /// All squares present in the grid, column by column, rows ascending
    pub fn squares(&self) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_some())
            .map(|(index, _)| self.square_at(index))
    }

    pub fn squares_owned_by(&self, owner: Owner) -> impl Iterator<Item = Square> + '_ {
        self.cells.iter()
            .enumerate()
            .filter(move |(_, cell)| **cell == Some(owner))
            .map(|(index, _)| self.square_at(index))
    }

    pub fn count(&self, owner: Owner) -> usize {
        self.cells.iter().filter(|cell| **cell == Some(owner)).count()
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            size: Self::DEFAULT_SIZE,
            cells: vec![Some(Owner::Empty); Self::DEFAULT_SIZE * Self::DEFAULT_SIZE],
        }
    }
}
