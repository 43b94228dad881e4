use super::grid::{Grid, Position};
use crate::render::Palette;

/// Configuration for the game.
///
/// Gameplay is not configurable at runtime, the binary always plays
/// `GameConfig::default()`.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Screen size and cell size
    pub grid: Grid,
    /// Game ticks per second
    pub ticks_per_second: u32,
    /// Length the snake grows back to after a reset
    pub initial_snake_length: usize,
    /// Cell (column, row) the snake's head starts on
    pub start_cell: (i32, i32),
    /// Cell (column, row) the apple is created on before its first relocation
    pub apple_cell: (i32, i32),
    /// Window title
    pub title: String,
    pub palette: Palette,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid: Grid::new(640, 480, 20),
            ticks_per_second: 20,
            initial_snake_length: 3,
            start_cell: (5, 5),
            apple_cell: (10, 10),
            title: "Snake Game".to_string(),
            palette: Palette::default(),
        }
    }
}

impl GameConfig {
    /// Pixel position the snake's head starts on
    pub fn start_position(&self) -> Position {
        self.grid.cell_origin(self.start_cell.0, self.start_cell.1)
    }

    /// Pixel position of the apple before it is first randomized
    pub fn apple_position(&self) -> Position {
        self.grid.cell_origin(self.apple_cell.0, self.apple_cell.1)
    }

    /// Milliseconds between two ticks
    pub fn tick_millis(&self) -> u64 {
        1000 / u64::from(self.ticks_per_second.max(1))
    }
}
