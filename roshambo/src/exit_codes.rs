//! Stable exit codes for the roshambo binary.

use crate::core::moves::MoveError;

/// Round played, whatever the outcome.
pub const OK: i32 = 0;
/// I/O failure, unreadable settings, or no move entered.
pub const ERROR: i32 = 1;
/// The entered symbol does not name a move.
pub const INVALID_MOVE: i32 = 2;

/// Map a failed run to its exit code.
pub fn for_error(err: &anyhow::Error) -> i32 {
    if err.chain().any(|cause| cause.downcast_ref::<MoveError>().is_some()) {
        INVALID_MOVE
    } else {
        ERROR
    }
}
