use super::direction::Direction;
use super::grid::{Grid, Position};
use crate::render::{Drawable, Palette, Rgb, Surface};

/// The player's snake
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
    /// Direction change applied at the start of the next move
    pub pending_direction: Option<Direction>,
    /// Length the body grows to over the following moves
    pub target_length: usize,
    /// Cell vacated by the most recent move
    pub last_tail: Option<Position>,
    pub color: Rgb,
    step: i32,
}

impl Snake {
    /// Create a snake heading right with its body laid out leftward from `start`
    pub fn new(start: Position, length: usize, step: i32, color: Rgb) -> Self {
        let mut snake = Self {
            body: Vec::new(),
            direction: Direction::Right,
            pending_direction: None,
            target_length: length,
            last_tail: None,
            color,
            step,
        };
        snake.body = (0..length.max(1) as i32)
            .map(|i| start.moved_in_direction(Direction::Left, i * step))
            .collect();
        snake
    }

    /// Buffer a direction change for the next move.
    ///
    /// Only a request equal to the current direction is dropped here, the
    /// caller rejects reversals.
    pub fn update_direction(&mut self, requested: Direction) {
        if requested != self.direction {
            self.pending_direction = Some(requested);
        }
    }

    /// Advance one cell, applying any buffered direction first.
    ///
    /// No bounds checking happens here: the new head may be off the grid.
    pub fn move_once(&mut self) {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        self.last_tail = self.body.last().copied();
        let new_head = self.head().moved_in_direction(self.direction, self.step);
        self.body.insert(0, new_head);

        if self.body.len() > self.target_length {
            self.body.pop();
        }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get body segments (excluding head)
    pub fn body_segments(&self) -> &[Position] {
        &self.body[1..]
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, pos: Position) -> bool {
        self.body_segments().contains(&pos)
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    /// Put a single-segment snake heading right on `start`.
    ///
    /// Whatever the snake looked like before is discarded.
    pub fn reset(&mut self, start: Position, target_length: usize) {
        self.body = vec![start];
        self.direction = Direction::Right;
        self.pending_direction = None;
        self.last_tail = None;
        self.target_length = target_length;
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }
}

impl Drawable for Snake {
    fn draw(&self, surface: &mut dyn Surface, grid: &Grid, palette: &Palette) {
        for &segment in &self.body {
            let rect = grid.cell_rect(segment);
            surface.fill_rect(rect, self.color);
            surface.outline_rect(rect, palette.border);
        }

        // Erase the vacated cell unless the body still covers it
        if let Some(tail) = self.last_tail {
            if !self.body.contains(&tail) {
                surface.fill_rect(grid.cell_rect(tail), palette.background);
            }
        }
    }
}
