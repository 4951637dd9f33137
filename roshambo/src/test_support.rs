//! Test-only move sources with predetermined output.

use std::collections::VecDeque;

use crate::core::moves::Move;
use crate::core::source::MoveSource;

/// Always plays the same move.
#[derive(Debug, Clone, Copy)]
pub struct FixedMove(pub Move);

impl MoveSource for FixedMove {
    fn next_move(&mut self) -> Move {
        self.0
    }
}

/// Plays the given moves in order. Panics when exhausted.
#[derive(Debug, Clone, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<Move>,
}

impl ScriptedMoves {
    pub fn new(moves: impl IntoIterator<Item = Move>) -> Self {
        Self {
            moves: moves.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self) -> Move {
        self.moves
            .pop_front()
            .expect("scripted move source exhausted")
    }
}
