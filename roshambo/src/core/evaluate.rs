//! Deterministic round evaluation.

use crate::core::moves::Move;

/// Result of one round from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Draw,
    HumanWins,
    ComputerWins,
}

/// Decide a round.
///
/// - Equal moves are a `Draw`.
/// - Otherwise the owner of the dominating move wins (see [`Move::beats`]).
pub fn evaluate(human: Move, computer: Move) -> Outcome {
    if human == computer {
        Outcome::Draw
    } else if human.beats(computer) {
        Outcome::HumanWins
    } else {
        Outcome::ComputerWins
    }
}
