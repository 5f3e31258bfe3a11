use anyhow::{bail, ensure, Context, Result};

use crate::core::{owner::Owner, square::Square};

use super::BoardSnapshot;

impl Owner {
    pub fn to_notation_char(self) -> Option<char> {
        match self {
            Owner::PlayerA => Some('P'),
            Owner::PlayerB => Some('p'),
            Owner::Empty => None,
        }
    }

    pub fn from_notation_char(c: char) -> Option<Self> {
        match c {
            'P' => Some(Owner::PlayerA),
            'p' => Some(Owner::PlayerB),
            _ => None,
        }
    }
}

impl BoardSnapshot {
    /// Convert the snapshot to text notation.
    /// Ranks run from row N down to row 1 and are separated by '/'.
    /// `P` is a player A piece, `p` a player B piece, and numbers count
    /// consecutive empty squares. Missing squares are written as empty.
    pub fn to_notation(&self) -> String {
        let size = self.size() as i32;
        let mut ranks = Vec::with_capacity(self.size());

        for row in (1..=size).rev() {
            let mut rank = String::new();
            let mut empty_squares = 0;

            for column in 1..=size {
                let owner = self.owner_at(Square::new(column, row)).unwrap_or_default();
                match owner.to_notation_char() {
                    Some(c) => {
                        if empty_squares > 0 {
                            rank.push_str(&empty_squares.to_string());
                            empty_squares = 0;
                        }
                        rank.push(c);
                    }
                    None => empty_squares += 1,
                }
            }
            if empty_squares > 0 {
                rank.push_str(&empty_squares.to_string());
            }
            ranks.push(rank);
        }

        ranks.join("/")
    }

    /// Parse text notation. The number of ranks fixes the board size.
    pub fn from_notation(notation: &str) -> Result<Self> {
        let ranks: Vec<&str> = notation.trim().split('/').collect();
        let size = ranks.len();
        let mut snapshot = BoardSnapshot::new(size)
            .context("Invalid number of ranks")?;

        for (i, rank) in ranks.iter().enumerate() {
            let row = size - i;
            let mut column: usize = 1;
            let mut chars = rank.chars().peekable();

            while let Some(c) = chars.next() {
                if let Some(digit) = c.to_digit(10) {
                    let mut run = digit as usize;
                    while let Some(next) = chars.peek().and_then(|c| c.to_digit(10)) {
                        run = run * 10 + next as usize;
                        ensure!(run <= size, "Rank {} is too long", row);
                        chars.next();
                    }
                    ensure!(run > 0, "Empty run of zero squares in rank {}", row);
                    column += run;
                    ensure!(column <= size + 1, "Rank {} is too long", row);
                } else {
                    let owner = Owner::from_notation_char(c)
                        .with_context(|| format!("Invalid notation char: {}", c))?;
                    ensure!(column <= size, "Rank {} is too long", row);
                    snapshot.place(Square::new(column as i32, row as i32), owner)?;
                    column += 1;
                }
            }

            if column - 1 != size {
                bail!("Rank {} covers {} squares, expected {}", row, column - 1, size);
            }
        }

        Ok(snapshot)
    }
}
