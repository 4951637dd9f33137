//! Single-round stone-paper-scissor against the computer.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure logic (moves, evaluation, move sources). No I/O; the
//!   only randomness is an injected RNG.
//! - **[`io`]**: Reading the human move, rendering text, loading settings.
//!
//! [`round`] ties the two together for the binary.

pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod round;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
