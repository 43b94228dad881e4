//! Snake - the classic grid arcade game, played in the terminal
//!
//! This library provides:
//! - Core game logic and the tick loop (game module)
//! - Drawing capability and the terminal surface (render module)
//! - Input capability, key translation and the reversal rule (input module)
//! - Frame pacing (clock module)
//! - File logging (logging module)
//! - Keyboard play wiring everything together (modes module)

pub mod clock;
pub mod game;
pub mod input;
pub mod logging;
pub mod modes;
pub mod render;
