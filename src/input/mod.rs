pub mod event;
pub mod handler;
pub mod terminal;

pub use event::{InputEvent, InputSource, Key};
pub use handler::InputHandler;
pub use terminal::TerminalInput;
