//! I/O helpers for the game binary.

pub mod config;
pub mod input;
pub mod render;
