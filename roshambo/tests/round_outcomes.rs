//! Round-level tests driving `play_round` with scripted computer moves.

use std::io::Cursor;

use roshambo::core::evaluate::Outcome;
use roshambo::core::moves::Move;
use roshambo::core::source::RandomMoves;
use roshambo::round::{Round, play_round};
use roshambo::test_support::FixedMove;

fn round(symbol: char, computer: Move) -> Round {
    let mut input = Cursor::new(format!("{symbol}\n"));
    let mut output = Vec::new();
    play_round(&mut input, &mut output, &mut FixedMove(computer)).expect("round")
}

#[test]
fn every_pairing_matches_the_dominance_cycle() {
    let table = [
        (Move::Stone, Move::Stone, Outcome::Draw),
        (Move::Stone, Move::Paper, Outcome::ComputerWins),
        (Move::Stone, Move::Scissor, Outcome::HumanWins),
        (Move::Paper, Move::Stone, Outcome::HumanWins),
        (Move::Paper, Move::Paper, Outcome::Draw),
        (Move::Paper, Move::Scissor, Outcome::ComputerWins),
        (Move::Scissor, Move::Stone, Outcome::ComputerWins),
        (Move::Scissor, Move::Paper, Outcome::HumanWins),
        (Move::Scissor, Move::Scissor, Outcome::Draw),
    ];
    for (human, computer, outcome) in table {
        assert_eq!(
            round(human.symbol(), computer),
            Round {
                human,
                computer,
                outcome
            },
            "{human} vs {computer}"
        );
    }
}

#[test]
fn stone_scissor_paper_scenarios() {
    assert_eq!(round('s', Move::Scissor).outcome, Outcome::HumanWins);
    assert_eq!(round('z', Move::Stone).outcome, Outcome::ComputerWins);
    assert_eq!(round('p', Move::Paper).outcome, Outcome::Draw);
}

#[test]
fn seeded_random_rounds_replay() {
    let play_seeded = |seed| {
        let mut input = Cursor::new("p\n");
        let mut output = Vec::new();
        let round = play_round(&mut input, &mut output, &mut RandomMoves::seeded(seed))
            .expect("round");
        (round, output)
    };
    assert_eq!(play_seeded(9), play_seeded(9));
}
