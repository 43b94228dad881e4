use super::direction::Direction;

/// A position in screen-pixel units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position `distance` pixels in a direction
    pub fn moved_in_direction(&self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx * distance, dy * distance)
    }
}

/// An axis-aligned rectangle in screen-pixel units
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Fixed screen geometry, divided into square cells of `cell_size` pixels.
///
/// `width` and `height` are expected to be multiples of `cell_size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Grid {
    pub const fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Self {
            width,
            height,
            cell_size,
        }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    /// Pixel position of the top-left corner of cell (column, row)
    pub fn cell_origin(&self, column: i32, row: i32) -> Position {
        Position::new(column * self.cell_size, row * self.cell_size)
    }

    /// The rectangle covered by the cell whose top-left corner is `pos`
    pub fn cell_rect(&self, pos: Position) -> PixelRect {
        PixelRect::new(pos.x, pos.y, self.cell_size, self.cell_size)
    }

    /// Check if a position lies within `[0, width) x [0, height)`
    pub fn contains(&self, pos: Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    pub fn is_aligned(&self, pos: Position) -> bool {
        pos.x % self.cell_size == 0 && pos.y % self.cell_size == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(100, 100);
        assert_eq!(pos.moved_by(20, 0), Position::new(120, 100));
        assert_eq!(pos.moved_in_direction(Direction::Left, 20), Position::new(80, 100));
        assert_eq!(pos.moved_in_direction(Direction::Down, 20), Position::new(100, 120));
        assert_eq!(pos.moved_in_direction(Direction::Up, 20), Position::new(100, 80));
    }

    #[test]
    fn test_grid_dimensions() {
        let grid = Grid::new(640, 480, 20);
        assert_eq!(grid.columns(), 32);
        assert_eq!(grid.rows(), 24);
        assert_eq!(grid.cell_origin(31, 23), Position::new(620, 460));
    }

    #[test]
    fn test_bounds_checking() {
        let grid = Grid::new(640, 480, 20);

        assert!(grid.contains(Position::new(0, 0)));
        assert!(grid.contains(Position::new(620, 460)));
        assert!(!grid.contains(Position::new(-20, 0)));
        assert!(!grid.contains(Position::new(0, -20)));
        assert!(!grid.contains(Position::new(640, 100)));
        assert!(!grid.contains(Position::new(100, 480)));
    }

    #[test]
    fn test_alignment() {
        let grid = Grid::new(640, 480, 20);
        assert!(grid.is_aligned(Position::new(40, 60)));
        assert!(!grid.is_aligned(Position::new(41, 60)));
        assert_eq!(grid.cell_rect(Position::new(40, 60)), PixelRect::new(40, 60, 20, 20));
    }
}
