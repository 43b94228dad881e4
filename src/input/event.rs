use anyhow::Result;

/// Keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Other,
}

/// An input event as seen by the game core
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The player closed the game
    Quit,
    KeyDown(Key),
}

/// A pollable queue of input events
pub trait InputSource {
    /// Drain every queued event without blocking
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}
