pub mod canvas;
pub mod palette;
pub mod surface;
pub mod terminal;

pub use canvas::{CellCanvas, CellPaint};
pub use palette::{Palette, Rgb};
pub use surface::{Drawable, Surface};
pub use terminal::TerminalSurface;
