use std::fmt;
use colored::Colorize;

use super::{
    moves::MoveSequence,
    owner::Owner,
    snapshot::BoardSnapshot,
    square::Square,
};

/// A snapshot rendered with the squares of one move sequence highlighted
pub struct Highlighted<'a> {
    pub snapshot: &'a BoardSnapshot,
    pub sequence: Option<&'a MoveSequence>,
}

impl<'a> Highlighted<'a> {
    pub fn new(snapshot: &'a BoardSnapshot, sequence: Option<&'a MoveSequence>) -> Self {
        Self { snapshot, sequence }
    }

    fn cell(&self, square: Square) -> String {
        let symbol = match self.snapshot.owner_at(square) {
            Some(Owner::PlayerA) => "P".bright_blue().to_string(),
            Some(Owner::PlayerB) => "p".bright_red().to_string(),
            Some(Owner::Empty) => "·".to_string(),
            None => "?".dimmed().to_string(),
        };

        let step = self.sequence
            .and_then(|sequence| sequence.squares().iter().position(|s| *s == square));

        match step {
            Some(0) => format!("[{}]", symbol).on_green().to_string(),
            Some(_) => format!("({})", symbol).green().to_string(),
            None => format!(" {} ", symbol),
        }
    }
}

impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.snapshot.size() as i32;

        for row in (1..=size).rev() {
            write!(f, "{:2} ", row)?;
            for column in 1..=size {
                write!(f, "{}", self.cell(Square::new(column, row)))?;
            }
            writeln!(f)?;
        }

        write!(f, "   ")?;
        for column in 1..=size {
            write!(f, " {} ", Square::new(column, 1).column_letter())?;
        }
        writeln!(f)?;

        if let Some(sequence) = self.sequence {
            writeln!(f, "   {}", sequence.to_string().green())?;
        }
        Ok(())
    }
}

impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Highlighted::new(self, None))
    }
}
