use anyhow::Result;
use log::info;
use std::time::Duration;

use crate::clock::IntervalClock;
use crate::game::{Game, GameConfig};
use crate::input::TerminalInput;
use crate::render::TerminalSurface;

/// Keyboard-controlled play on the terminal
pub struct HumanMode {
    game: Game,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Self {
        Self {
            game: Game::new(config),
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let config = &self.game.config;
        info!(
            "Starting {:?} at {} ticks/s on a {}x{} grid",
            config.title,
            config.ticks_per_second,
            config.grid.columns(),
            config.grid.rows()
        );

        // Setup terminal
        let mut surface =
            TerminalSurface::open(config.grid, config.palette.background, &config.title)?;
        let mut input = TerminalInput::new();
        let mut clock = IntervalClock::new(Duration::from_millis(config.tick_millis()));

        // Run game loop with cleanup
        let result = self.game.run(&mut surface, &mut input, &mut clock).await;

        // Cleanup terminal
        surface.close()?;

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;

    #[test]
    fn test_game_initialization() {
        let mode = HumanMode::new(GameConfig::default());
        assert_eq!(mode.game.snake.head(), Position::new(100, 100));
        assert_eq!(mode.game.snake.target_length, 3);
        assert!(mode.game.config.grid.contains(mode.game.apple.position));
    }
}
