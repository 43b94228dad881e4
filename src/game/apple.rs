use rand::Rng;

use super::grid::{Grid, Position};
use crate::render::{Drawable, Palette, Rgb, Surface};

/// The food the snake is chasing
#[derive(Debug, Clone, PartialEq)]
pub struct Apple {
    pub position: Position,
    pub color: Rgb,
}

impl Apple {
    pub fn new(position: Position, color: Rgb) -> Self {
        Self { position, color }
    }

    /// Move to a uniformly random cell of the grid.
    ///
    /// Cells covered by the snake are not excluded.
    pub fn randomize_position<R: Rng>(&mut self, grid: &Grid, rng: &mut R) {
        let column = rng.gen_range(0..grid.columns());
        let row = rng.gen_range(0..grid.rows());
        self.position = grid.cell_origin(column, row);
    }
}

impl Drawable for Apple {
    fn draw(&self, surface: &mut dyn Surface, grid: &Grid, palette: &Palette) {
        let rect = grid.cell_rect(self.position);
        surface.fill_rect(rect, self.color);
        surface.outline_rect(rect, palette.border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::CellCanvas;
    use rand::rngs::mock::StepRng;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_randomize_stays_on_grid() {
        let grid = Grid::new(640, 480, 20);
        let mut apple = Apple::new(Position::new(200, 200), Rgb(255, 0, 0));
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..500 {
            apple.randomize_position(&grid, &mut rng);
            assert!(grid.contains(apple.position));
            assert!(grid.is_aligned(apple.position));
        }
    }

    #[test]
    fn test_randomize_with_fixed_rng() {
        let grid = Grid::new(640, 480, 20);
        let mut apple = Apple::new(Position::new(200, 200), Rgb(255, 0, 0));
        apple.randomize_position(&grid, &mut StepRng::new(0, 0));
        assert_eq!(apple.position, Position::new(0, 0));
    }

    #[test]
    fn test_draw_fills_and_outlines_cell() {
        let grid = Grid::new(640, 480, 20);
        let palette = Palette::default();
        let mut canvas = CellCanvas::new(grid, palette.background);
        let apple = Apple::new(Position::new(200, 200), palette.apple);

        apple.draw(&mut canvas, &grid, &palette);

        let cell = canvas.cell(10, 10).unwrap();
        assert_eq!(cell.fill, palette.apple);
        assert_eq!(cell.outline, Some(palette.border));
    }
}
