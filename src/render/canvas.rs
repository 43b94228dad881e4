use anyhow::Result;

use super::palette::Rgb;
use super::surface::Surface;
use crate::game::{Grid, PixelRect, Position};

/// What one grid cell looks like after painting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellPaint {
    pub fill: Rgb,
    pub outline: Option<Rgb>,
}

/// In-memory surface with one paint record per grid cell.
///
/// Pixel rectangles are snapped to the cells they cover, anything outside the
/// grid is clipped.
#[derive(Debug, Clone)]
pub struct CellCanvas {
    grid: Grid,
    cells: Vec<CellPaint>,
}

impl CellCanvas {
    pub fn new(grid: Grid, background: Rgb) -> Self {
        let count = (grid.columns() * grid.rows()) as usize;
        Self {
            grid,
            cells: vec![
                CellPaint {
                    fill: background,
                    outline: None,
                };
                count
            ],
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Paint of the cell at (column, row), or None outside the grid
    pub fn cell(&self, column: i32, row: i32) -> Option<CellPaint> {
        self.index(column, row).map(|i| self.cells[i])
    }

    /// Paint of the cell whose top-left corner is `pos`
    pub fn cell_at(&self, pos: Position) -> Option<CellPaint> {
        let size = self.grid.cell_size;
        self.cell(pos.x.div_euclid(size), pos.y.div_euclid(size))
    }

    /// Rows of cells, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[CellPaint]> {
        self.cells.chunks(self.grid.columns().max(1) as usize)
    }

    fn index(&self, column: i32, row: i32) -> Option<usize> {
        if column < 0 || row < 0 || column >= self.grid.columns() || row >= self.grid.rows() {
            return None;
        }
        Some((row * self.grid.columns() + column) as usize)
    }

    fn paint_rect(&mut self, rect: PixelRect, mut paint: impl FnMut(&mut CellPaint)) {
        if rect.width <= 0 || rect.height <= 0 {
            return;
        }
        let size = self.grid.cell_size;
        let first_col = rect.x.div_euclid(size).max(0);
        let last_col = (rect.x + rect.width - 1).div_euclid(size).min(self.grid.columns() - 1);
        let first_row = rect.y.div_euclid(size).max(0);
        let last_row = (rect.y + rect.height - 1).div_euclid(size).min(self.grid.rows() - 1);

        for row in first_row..=last_row {
            for column in first_col..=last_col {
                if let Some(i) = self.index(column, row) {
                    paint(&mut self.cells[i]);
                }
            }
        }
    }
}

impl Surface for CellCanvas {
    fn fill(&mut self, color: Rgb) {
        for cell in &mut self.cells {
            *cell = CellPaint {
                fill: color,
                outline: None,
            };
        }
    }

    fn fill_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.paint_rect(rect, |cell| {
            cell.fill = color;
            cell.outline = None;
        });
    }

    fn outline_rect(&mut self, rect: PixelRect, color: Rgb) {
        self.paint_rect(rect, |cell| cell.outline = Some(color));
    }

    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}
