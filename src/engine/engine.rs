use anyhow::{ensure, Context, Result};

use crate::core::{
    BoardSnapshot,
    Highlighted,
    MoveGenerator,
    MoveSequence,
    MoveSet,
    Owner,
    SearchStats,
};

use super::options::EngineOptions;
use super::source::SnapshotSource;

/// Move sets for both players from one observation cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleReport {
    pub cycle: u64,
    pub player_a: MoveSet,
    pub player_b: MoveSet,
}

impl CycleReport {
    pub fn moves(&self, player: Owner) -> Option<&MoveSet> {
        match player {
            Owner::PlayerA => Some(&self.player_a),
            Owner::PlayerB => Some(&self.player_b),
            Owner::Empty => None,
        }
    }
}

/// Engine holds the latest snapshot and answers move queries against it
pub struct Engine {
    pub options: EngineOptions,
    pub snapshot: BoardSnapshot,
    pub selected: Option<MoveSequence>,
    cycle: u64,
}

impl Engine {
    pub fn new() -> Self {
        Self {
            options: EngineOptions::default(),
            snapshot: BoardSnapshot::default(),
            selected: None,
            cycle: 0,
        }
    }

    /// Fails if `options.size` is not a valid board size
    pub fn with_options(options: EngineOptions) -> Result<Self> {
        let snapshot = BoardSnapshot::new(options.size)?;
        Ok(Self {
            options,
            snapshot,
            selected: None,
            cycle: 0,
        })
    }

    /// Set an option. Changing the board size clears the board.
    pub fn set_option(&mut self, name: &str, value: &str) -> Result<()> {
        self.options.set_option(name, value)?;

        if self.snapshot.size() != self.options.size {
            self.snapshot = BoardSnapshot::new(self.options.size)?;
            self.selected = None;
        }
        if name == "color" {
            colored::control::set_override(self.options.color);
        }
        Ok(())
    }

    /// Replace the current snapshot. Its size must match the `size` option.
    pub fn set_snapshot(&mut self, snapshot: BoardSnapshot) -> Result<()> {
        ensure!(
            snapshot.size() == self.options.size,
            "Snapshot is {}x{} but the board size is {}",
            snapshot.size(), snapshot.size(), self.options.size
        );

        self.snapshot = snapshot;
        self.selected = None;
        Ok(())
    }

    pub fn reset_board(&mut self) -> Result<()> {
        self.set_snapshot(BoardSnapshot::start_position(self.options.size)?)
    }

    pub fn clear_board(&mut self) -> Result<()> {
        self.set_snapshot(BoardSnapshot::new(self.options.size)?)
    }

    fn generator(&self) -> MoveGenerator {
        MoveGenerator::new(self.options.chain)
    }

    pub fn moves(&self, player: Owner) -> MoveSet {
        self.generator().generate(&self.snapshot, player)
    }

    pub fn moves_with_stats(&self, player: Owner) -> (MoveSet, SearchStats) {
        self.generator().generate_with_stats(&self.snapshot, player)
    }

    /// Pull the next snapshot from `source` and generate moves for both
    /// players. Returns `None` once the source is exhausted.
    pub fn poll<S: SnapshotSource + ?Sized>(&mut self, source: &mut S) -> Result<Option<CycleReport>> {
        let Some(snapshot) = source.next_snapshot()? else {
            return Ok(None);
        };
        self.set_snapshot(snapshot)
            .with_context(|| format!("Cycle {}", self.cycle + 1))?;
        self.cycle += 1;

        Ok(Some(CycleReport {
            cycle: self.cycle,
            player_a: self.moves(Owner::PlayerA),
            player_b: self.moves(Owner::PlayerB),
        }))
    }

    /// Select a path for highlighting. Every square must be on the board.
    pub fn select(&mut self, path: &str) -> Result<&MoveSequence> {
        let sequence: MoveSequence = path.parse()?;
        for square in sequence.squares() {
            ensure!(self.snapshot.contains(*square), "Square {} is not on the board", square);
        }
        Ok(self.selected.insert(sequence))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn render(&self) -> String {
        Highlighted::new(&self.snapshot, self.selected.as_ref()).to_string()
    }

    pub fn get_fen(&self) -> String {
        self.snapshot.to_notation()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
