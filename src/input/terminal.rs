use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Duration;

use super::event::{InputEvent, InputSource, Key};

/// Reads key presses from the terminal
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }

    /// Translate a terminal key event; releases and repeats yield None
    pub fn translate_key(key: KeyEvent) -> Option<InputEvent> {
        if key.kind != KeyEventKind::Press {
            return None;
        }

        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(InputEvent::Quit);
        }

        let key = match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,

            // Movement - WASD
            KeyCode::Char('w') | KeyCode::Char('W') => Key::Up,
            KeyCode::Char('s') | KeyCode::Char('S') => Key::Down,
            KeyCode::Char('a') | KeyCode::Char('A') => Key::Left,
            KeyCode::Char('d') | KeyCode::Char('D') => Key::Right,

            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                return Some(InputEvent::Quit);
            }

            _ => Key::Other,
        };

        Some(InputEvent::KeyDown(key))
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = Vec::new();

        while event::poll(Duration::ZERO).context("Failed to poll terminal events")? {
            if let Event::Key(key) = event::read().context("Failed to read terminal event")? {
                events.extend(Self::translate_key(key));
            }
        }

        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> Option<InputEvent> {
        TerminalInput::translate_key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_arrow_keys() {
        assert_eq!(
            press(KeyCode::Up, KeyModifiers::NONE),
            Some(InputEvent::KeyDown(Key::Up))
        );
        assert_eq!(
            press(KeyCode::Down, KeyModifiers::NONE),
            Some(InputEvent::KeyDown(Key::Down))
        );
        assert_eq!(
            press(KeyCode::Left, KeyModifiers::NONE),
            Some(InputEvent::KeyDown(Key::Left))
        );
        assert_eq!(
            press(KeyCode::Right, KeyModifiers::NONE),
            Some(InputEvent::KeyDown(Key::Right))
        );
    }

    #[test]
    fn test_wasd_keys() {
        assert_eq!(
            press(KeyCode::Char('w'), KeyModifiers::NONE),
            Some(InputEvent::KeyDown(Key::Up))
        );
        assert_eq!(
            press(KeyCode::Char('a'), KeyModifiers::NONE),
            Some(InputEvent::KeyDown(Key::Left))
        );
        assert_eq!(
            press(KeyCode::Char('S'), KeyModifiers::SHIFT),
            Some(InputEvent::KeyDown(Key::Down))
        );
        assert_eq!(
            press(KeyCode::Char('d'), KeyModifiers::NONE),
            Some(InputEvent::KeyDown(Key::Right))
        );
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(press(KeyCode::Char('q'), KeyModifiers::NONE), Some(InputEvent::Quit));
        assert_eq!(press(KeyCode::Char('Q'), KeyModifiers::SHIFT), Some(InputEvent::Quit));
        assert_eq!(press(KeyCode::Esc, KeyModifiers::NONE), Some(InputEvent::Quit));
        assert_eq!(press(KeyCode::Char('c'), KeyModifiers::CONTROL), Some(InputEvent::Quit));
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(
            press(KeyCode::Char('x'), KeyModifiers::NONE),
            Some(InputEvent::KeyDown(Key::Other))
        );
    }

    #[test]
    fn test_release_ignored() {
        let release = KeyEvent {
            code: KeyCode::Up,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        assert_eq!(TerminalInput::translate_key(release), None);
    }
}
