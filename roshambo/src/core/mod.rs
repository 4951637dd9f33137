//! Deterministic, pure game logic.
//!
//! Core modules must be free of I/O side effects. Randomness only enters
//! through an injected [`source::MoveSource`], so every outcome is reproducible
//! in tests.

pub mod evaluate;
pub mod moves;
pub mod source;
