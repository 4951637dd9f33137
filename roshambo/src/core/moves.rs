//! Moves and the single-character symbols used to enter them.

use std::fmt;

/// A move either side can play in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Stone,
    Paper,
    Scissor,
}

impl Move {
    /// Every move, in symbol order. Indexing into this is how uniform picks are made.
    pub const ALL: [Move; 3] = [Move::Stone, Move::Paper, Move::Scissor];

    /// Input symbol for this move.
    pub fn symbol(self) -> char {
        match self {
            Move::Stone => 's',
            Move::Paper => 'p',
            Move::Scissor => 'z',
        }
    }

    /// Upper-case name used in prompts and summaries.
    pub fn name(self) -> &'static str {
        match self {
            Move::Stone => "STONE",
            Move::Paper => "PAPER",
            Move::Scissor => "SCISSOR",
        }
    }

    /// Parse an input symbol. Upper-case symbols are accepted as well.
    pub fn from_symbol(symbol: char) -> Result<Self, MoveError> {
        match symbol.to_ascii_lowercase() {
            's' => Ok(Move::Stone),
            'p' => Ok(Move::Paper),
            'z' => Ok(Move::Scissor),
            _ => Err(MoveError::InvalidMove(symbol)),
        }
    }

    /// Cyclic dominance: stone > scissor > paper > stone.
    pub fn beats(self, other: Move) -> bool {
        matches!(
            (self, other),
            (Move::Stone, Move::Scissor) | (Move::Scissor, Move::Paper) | (Move::Paper, Move::Stone)
        )
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rejected human input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The symbol does not name any move.
    InvalidMove(char),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidMove(symbol) => write!(
                f,
                "invalid move {symbol:?}: expected {} for STONE, {} for PAPER or {} for SCISSOR",
                Move::Stone.symbol(),
                Move::Paper.symbol(),
                Move::Scissor.symbol()
            ),
        }
    }
}

impl std::error::Error for MoveError {}
