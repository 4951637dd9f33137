//! Reading the human move from a line-oriented reader.

use std::io::BufRead;

use anyhow::{Context, Result, bail};
use tracing::{debug, warn};

use crate::core::moves::Move;

/// Return the first non-whitespace byte as a character, skipping blank lines.
///
/// Input is read as raw bytes so any byte can be rejected as a move; a byte
/// outside ASCII decodes as its Latin-1 character. Anything after the symbol on
/// the same line is ignored, so `scissor` plays STONE. Returns `None` when the
/// reader is exhausted before a symbol appears.
pub fn read_symbol<R: BufRead>(input: &mut R) -> Result<Option<char>> {
    let mut line = Vec::new();
    loop {
        line.clear();
        let read = input
            .read_until(b'\n', &mut line)
            .context("read move from stdin")?;
        if read == 0 {
            return Ok(None);
        }
        if let Some(byte) = line.iter().find(|byte| !byte.is_ascii_whitespace()) {
            return Ok(Some(char::from(*byte)));
        }
    }
}

/// Read and parse the human move.
///
/// An unknown symbol surfaces as [`crate::core::moves::MoveError`] inside the
/// returned error so callers can map it to its own exit code.
pub fn read_move<R: BufRead>(input: &mut R) -> Result<Move> {
    let Some(symbol) = read_symbol(input)? else {
        bail!("no move entered: stdin closed");
    };
    debug!(symbol = %symbol, "read move symbol");
    let mv = Move::from_symbol(symbol).inspect_err(|err| warn!(%err, "rejected move"))?;
    Ok(mv)
}
