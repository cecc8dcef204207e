//! Wrap-around grid snake.
//!
//! - `board`, `snake`, `session`: game state and its pure transitions
//! - `game`: the fixed-tick loop and input arbitration
//! - `input`, `term`: terminal collaborators
//! - `bootstrap`: attaching to the terminal and logging

pub mod board;
pub mod bootstrap;
pub mod config;
pub mod error;
pub mod game;
pub mod input;
pub mod session;
pub mod snake;
pub mod term;
