//! Move sequences and move sets

use std::{fmt::Display, str::FromStr};
use anyhow::{ensure, Result};

use super::square::Square;

/// Origin square followed by every landing square, in traversal order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MoveSequence {
    squares: Vec<Square>,
}

impl MoveSequence {
    pub fn new(origin: Square) -> Self {
        Self { squares: vec![origin] }
    }

    /// Copy of this sequence with `square` appended
    pub fn extended(&self, square: Square) -> Self {
        let mut squares = Vec::with_capacity(self.squares.len() + 1);
        squares.extend_from_slice(&self.squares);
        squares.push(square);
        Self { squares }
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn origin(&self) -> Square {
        self.squares[0]
    }

    pub fn last(&self) -> Square {
        self.squares[self.squares.len() - 1]
    }

    pub fn steps(&self) -> impl Iterator<Item = (Square, Square)> + '_ {
        self.squares.windows(2).map(|pair| (pair[0], pair[1]))
    }

    /// Number of steps that jump over a piece
    pub fn jumps(&self) -> usize {
        self.steps()
            .filter(|(from, to)| (to.row - from.row).abs() == 2)
            .count()
    }

    pub fn is_capture(&self) -> bool {
        self.jumps() > 0
    }

    /// A single one-row step in the opposite direction of `forward`
    pub fn is_backward_step(&self, forward: i32) -> bool {
        self.len() == 2 && self.last().row - self.origin().row == -forward
    }
}

impl Display for MoveSequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, square) in self.squares.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", square)?;
        }
        Ok(())
    }
}

impl FromStr for MoveSequence {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let squares = s.split(' ')
            .map(str::parse)
            .collect::<Result<Vec<Square>>>()?;

        ensure!(squares.len() >= 2, "A move needs at least two squares: {}", s);

        Ok(Self { squares })
    }
}

/// Every sequence one player can execute from one snapshot,
/// in discovery order and without duplicates
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveSet {
    sequences: Vec<MoveSequence>,
}

impl MoveSet {
    pub fn iter(&self) -> impl Iterator<Item = &MoveSequence> {
        self.sequences.iter()
    }

    pub fn len(&self) -> usize {
        self.sequences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sequences.is_empty()
    }

    pub fn contains(&self, sequence: &MoveSequence) -> bool {
        self.sequences.contains(sequence)
    }

    /// Look up a sequence by its rendered path, e.g. `"A1 C3 E5"`
    pub fn contains_path(&self, path: &str) -> bool {
        self.sequences.iter().any(|sequence| sequence.to_string() == path)
    }

    pub fn paths(&self) -> Vec<String> {
        self.sequences.iter().map(ToString::to_string).collect()
    }

    pub fn captures(&self) -> impl Iterator<Item = &MoveSequence> {
        self.sequences.iter().filter(|sequence| sequence.is_capture())
    }
}

impl From<Vec<MoveSequence>> for MoveSet {
    fn from(sequences: Vec<MoveSequence>) -> Self {
        let mut set = MoveSet::default();
        for sequence in sequences {
            if !set.contains(&sequence) {
                set.sequences.push(sequence);
            }
        }
        set
    }
}

impl IntoIterator for MoveSet {
    type Item = MoveSequence;
    type IntoIter = std::vec::IntoIter<MoveSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSet {
    type Item = &'a MoveSequence;
    type IntoIter = std::slice::Iter<'a, MoveSequence>;

    fn into_iter(self) -> Self::IntoIter {
        self.sequences.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_and_parse_path() {
        let sequence: MoveSequence = "A1 C3 E5".parse().unwrap();
        assert_eq!(sequence.len(), 3);
        assert_eq!(sequence.origin(), Square::new(1, 1));
        assert_eq!(sequence.last(), Square::new(5, 5));
        assert_eq!(sequence.to_string(), "A1 C3 E5");
        assert_eq!(sequence.jumps(), 2);
    }

    #[test]
    fn test_parse_rejects_bad_paths() {
        assert!("A1".parse::<MoveSequence>().is_err());
        assert!("A1  B2".parse::<MoveSequence>().is_err());
        assert!("A1 B".parse::<MoveSequence>().is_err());
    }

    #[test]
    fn test_single_jump_is_a_capture() {
        let jump: MoveSequence = "A1 C3".parse().unwrap();
        let step: MoveSequence = "A1 B2".parse().unwrap();
        assert!(jump.is_capture());
        assert!(!step.is_capture());
    }

    #[test]
    fn test_backward_step() {
        let down: MoveSequence = "D4 C3".parse().unwrap();
        let up: MoveSequence = "D4 E5".parse().unwrap();
        let jump_down: MoveSequence = "D4 B2".parse().unwrap();

        assert!(down.is_backward_step(1));
        assert!(!up.is_backward_step(1));
        assert!(up.is_backward_step(-1));
        assert!(!jump_down.is_backward_step(1));
    }

    #[test]
    fn test_move_set_drops_duplicates() {
        let a: MoveSequence = "A1 C3".parse().unwrap();
        let b: MoveSequence = "A1 B2".parse().unwrap();
        let set = MoveSet::from(vec![a.clone(), b.clone(), a.clone()]);

        assert_eq!(set.len(), 2);
        assert_eq!(set.paths(), ["A1 C3", "A1 B2"]);
        assert!(set.contains_path("A1 B2"));
        assert_eq!(set.captures().count(), 1);
    }
}
