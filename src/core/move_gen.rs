//! Move generation.
//!
//! The search is depth-first over every piece of the moving player. At
//! depth 0 a piece may step onto an empty diagonal neighbour or jump an
//! adjacent opponent piece; after a jump it may only keep jumping, on a
//! private copy of the board with the capture applied. Every prefix of a
//! capture chain is reported as its own sequence.
//!
//! Simple steps one row backwards are filtered out at the end. Jumps are
//! allowed in all four directions.

use std::str::FromStr;
use anyhow::bail;

use super::{
    moves::{MoveSequence, MoveSet},
    owner::Owner,
    snapshot::BoardSnapshot,
    square::{Dir, Square},
};

/// How a capture chain picks the path it extends when it continues
/// from a landing square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChainPolicy {
    /// Extend the first recorded sequence ending on the landing square.
    /// When two chains reach the same square, continuations are only
    /// attached to the earlier one.
    #[default]
    FirstMatch,
    /// Extend the path the chain actually took.
    OwnPath,
}

impl FromStr for ChainPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "first" => Ok(ChainPolicy::FirstMatch),
            "own" => Ok(ChainPolicy::OwnPath),
            _ => bail!("Unknown chain policy: {}", s),
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Squares expanded, counting every recursive visit
    pub nodes: u64,
    /// Deepest capture chain reached
    pub max_depth: usize,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct MoveGenerator {
    pub policy: ChainPolicy,
}

impl MoveGenerator {
    pub fn new(policy: ChainPolicy) -> Self {
        Self { policy }
    }

    pub fn generate(&self, snapshot: &BoardSnapshot, player: Owner) -> MoveSet {
        self.generate_with_stats(snapshot, player).0
    }

    /// Generate all sequences for `player`. Passing `Owner::Empty`
    /// yields an empty set.
    pub fn generate_with_stats(&self, snapshot: &BoardSnapshot, player: Owner) -> (MoveSet, SearchStats) {
        let Some(opponent) = player.opponent() else {
            return (MoveSet::default(), SearchStats::default());
        };

        let mut search = Search {
            original: snapshot,
            player,
            opponent,
            policy: self.policy,
            found: Vec::new(),
            stats: SearchStats::default(),
        };

        for square in snapshot.squares_owned_by(player) {
            search.explore(snapshot, square, None, 0);
        }

        let forward = player.forward();
        let sequences = search.found
            .into_iter()
            .filter(|sequence| !sequence.is_backward_step(forward))
            .collect::<Vec<_>>();

        (MoveSet::from(sequences), search.stats)
    }
}

/// Generate every move and capture sequence for `player` with the
/// default chain policy
pub fn generate(snapshot: &BoardSnapshot, player: Owner) -> MoveSet {
    MoveGenerator::default().generate(snapshot, player)
}

struct Search<'a> {
    original: &'a BoardSnapshot,
    player: Owner,
    opponent: Owner,
    policy: ChainPolicy,
    found: Vec<MoveSequence>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    /// Expand `from` on `board`. `parent` indexes the recorded sequence
    /// that ends on `from`, or is `None` at the start of a turn.
    fn explore(&mut self, board: &BoardSnapshot, from: Square, parent: Option<usize>, depth: usize) {
        self.stats.nodes += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        let parent = match self.policy {
            ChainPolicy::FirstMatch if depth > 0 => self.first_ending_at(from).or(parent),
            _ => parent,
        };

        for dir in Dir::ALL {
            let Some(next) = board.diagonal_neighbor(from, dir) else {
                continue;
            };

            match board.owner_at(next) {
                Some(Owner::Empty) if depth == 0 => {
                    self.record(parent, from, next);
                }
                Some(owner) if owner == self.opponent => {
                    // geometry is fixed, only occupancy differs between depths
                    let Some(landing) = self.original.diagonal_neighbor(next, dir) else {
                        continue;
                    };
                    if board.owner_at(landing) != Some(Owner::Empty) {
                        continue;
                    }

                    let index = self.record(parent, from, landing);
                    let after = board.with_capture_applied(from, next, landing, self.player);
                    self.explore(&after, landing, Some(index), depth + 1);
                }
                _ => {}
            }
        }
    }

    fn first_ending_at(&self, square: Square) -> Option<usize> {
        self.found.iter().position(|sequence| sequence.last() == square)
    }

    /// Record `parent + to` (or `[from, to]` without a parent) and return
    /// its index. A sequence already recorded is not added twice.
    fn record(&mut self, parent: Option<usize>, from: Square, to: Square) -> usize {
        let sequence = match parent {
            Some(index) => self.found[index].extended(to),
            None => MoveSequence::new(from).extended(to),
        };

        if let Some(index) = self.found.iter().position(|found| *found == sequence) {
            return index;
        }

        self.found.push(sequence);
        self.found.len() - 1
    }
}
