//! Capability interfaces between the game core and whatever draws it.

use anyhow::Result;

use super::palette::{Palette, Rgb};
use crate::game::{Grid, PixelRect};

/// A display surface that can be painted and presented
pub trait Surface {
    /// Fill the entire surface with one color
    fn fill(&mut self, color: Rgb);

    /// Fill a rectangle
    fn fill_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Draw a one-pixel border around a rectangle
    fn outline_rect(&mut self, rect: PixelRect, color: Rgb);

    /// Show everything painted since the last present
    fn present(&mut self) -> Result<()>;
}

/// Anything on the board that knows how to paint itself
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface, grid: &Grid, palette: &Palette);
}
