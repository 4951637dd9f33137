//! Playing a single round: pick, prompt, read, evaluate, report.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::{debug, info};

use crate::core::evaluate::{Outcome, evaluate};
use crate::core::moves::Move;
use crate::core::source::MoveSource;
use crate::io::input::read_move;
use crate::io::render::{write_prompt, write_result};

/// A finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub human: Move,
    pub computer: Move,
    pub outcome: Outcome,
}

/// Play one round against `source`.
///
/// The computer commits to its move before the human is prompted. Nothing is
/// written after the prompt if the human move cannot be read.
pub fn play_round<R, W, S>(input: &mut R, output: &mut W, source: &mut S) -> Result<Round>
where
    R: BufRead,
    W: Write,
    S: MoveSource + ?Sized,
{
    let computer = source.next_move();
    debug!(computer = %computer, "computer move drawn");

    write_prompt(output)?;
    let human = read_move(input)?;

    let round = Round {
        human,
        computer,
        outcome: evaluate(human, computer),
    };
    info!(human = %round.human, computer = %round.computer, outcome = ?round.outcome, "round played");

    write_result(output, &round)?;
    Ok(round)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::moves::MoveError;
    use crate::test_support::{FixedMove, ScriptedMoves};
    use std::io::Cursor;

    fn play(input: &str, computer: Move) -> (Result<Round>, String) {
        let mut input = Cursor::new(input.to_string());
        let mut output = Vec::new();
        let result = play_round(&mut input, &mut output, &mut FixedMove(computer));
        (result, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn human_win_is_reported() {
        let (result, text) = play("s\n", Move::Scissor);
        let round = result.expect("round");
        assert_eq!(round.outcome, Outcome::HumanWins);
        assert!(text.starts_with("Enter s for STONE"));
        assert!(text.contains("Wow! You have won the game!"));
        assert!(text.contains("You chose: STONE and Computer chose: SCISSOR"));
    }

    #[test]
    fn computer_win_is_reported() {
        let (result, text) = play("z\n", Move::Stone);
        assert_eq!(result.expect("round").outcome, Outcome::ComputerWins);
        assert!(text.contains("Oh! You have lost the game!"));
    }

    #[test]
    fn draw_is_reported() {
        let (result, text) = play("p\n", Move::Paper);
        assert_eq!(result.expect("round").outcome, Outcome::Draw);
        assert!(text.contains("Game Draw!"));
        assert!(text.contains("You chose: PAPER and Computer chose: PAPER"));
    }

    #[test]
    fn invalid_input_prints_only_prompt() {
        let (result, text) = play("q\n", Move::Stone);
        let err = result.expect_err("should fail");
        assert_eq!(
            err.downcast_ref::<MoveError>(),
            Some(&MoveError::InvalidMove('q'))
        );
        assert_eq!(text, "Enter s for STONE, p for PAPER and z for SCISSOR: ");
    }

    #[test]
    fn draws_exactly_one_computer_move() {
        let mut source = ScriptedMoves::new([Move::Paper, Move::Stone]);
        let mut input = Cursor::new("s\n");
        let mut output = Vec::new();
        let round = play_round(&mut input, &mut output, &mut source).expect("round");
        assert_eq!(round.computer, Move::Paper);
        assert_eq!(source.remaining(), 1);
    }

    #[test]
    fn works_through_trait_object() {
        let mut source: Box<dyn MoveSource> = Box::new(FixedMove(Move::Scissor));
        let mut input = Cursor::new("p\n");
        let mut output = Vec::new();
        let round = play_round(&mut input, &mut output, source.as_mut()).expect("round");
        assert_eq!(round.outcome, Outcome::ComputerWins);
    }
}
