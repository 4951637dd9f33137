//! Text shown to the player.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::evaluate::Outcome;
use crate::core::moves::Move;
use crate::round::Round;

/// Prompt listing every accepted symbol.
pub fn prompt() -> String {
    let [stone, paper, scissor] = Move::ALL.map(|mv| format!("{} for {}", mv.symbol(), mv.name()));
    format!("Enter {stone}, {paper} and {scissor}")
}

pub fn result_line(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Draw => "Game Draw!",
        Outcome::HumanWins => "Wow! You have won the game!",
        Outcome::ComputerWins => "Oh! You have lost the game!",
    }
}

pub fn summary_line(round: &Round) -> String {
    format!(
        "You chose: {} and Computer chose: {}",
        round.human, round.computer
    )
}

/// Write the prompt and flush so it shows before the blocking read.
pub fn write_prompt<W: Write>(output: &mut W) -> Result<()> {
    write!(output, "{}: ", prompt()).context("write prompt")?;
    output.flush().context("flush prompt")?;
    Ok(())
}

pub fn write_result<W: Write>(output: &mut W, round: &Round) -> Result<()> {
    writeln!(output).context("write result")?;
    writeln!(output, "{}", result_line(round.outcome)).context("write result")?;
    writeln!(output, "{}", summary_line(round)).context("write summary")?;
    output.flush().context("flush result")?;
    Ok(())
}
