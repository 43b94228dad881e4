//! Core game logic module for Snake
//!
//! Everything here works in screen-pixel units and talks to the outside world
//! only through the `Surface`, `InputSource` and `FrameClock` traits.

pub mod apple;
pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod snake;

// Re-export commonly used types
pub use apple::Apple;
pub use config::GameConfig;
pub use direction::Direction;
pub use engine::{CollisionType, Game, LoopControl, StepInfo};
pub use grid::{Grid, PixelRect, Position};
pub use snake::Snake;
