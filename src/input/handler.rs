use super::event::{InputEvent, Key};
use crate::game::{Direction, LoopControl, Snake};

/// Turns drained input events into direction requests for the snake
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Apply a batch of events to the snake.
    ///
    /// Returns `LoopControl::Quit` as soon as a quit event is seen; events after
    /// it are not processed. Reversals are checked against the snake's current
    /// direction, not the buffered one.
    pub fn handle_events(&self, events: &[InputEvent], snake: &mut Snake) -> LoopControl {
        for event in events {
            match event {
                InputEvent::Quit => return LoopControl::Quit,
                InputEvent::KeyDown(key) => {
                    if let Some(requested) = Self::direction_for(*key) {
                        if !snake.direction.is_opposite(requested) {
                            snake.update_direction(requested);
                        }
                    }
                }
            }
        }

        LoopControl::Continue
    }

    fn direction_for(key: Key) -> Option<Direction> {
        match key {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            Key::Other => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Position;
    use crate::render::Rgb;

    fn snake() -> Snake {
        Snake::new(Position::new(100, 100), 3, 20, Rgb(0, 255, 0))
    }

    #[test]
    fn test_reversal_rejected() {
        let handler = InputHandler::new();
        let mut snake = snake();

        let control = handler.handle_events(&[InputEvent::KeyDown(Key::Left)], &mut snake);

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_perpendicular_accepted() {
        let handler = InputHandler::new();

        let mut snake = snake();
        handler.handle_events(&[InputEvent::KeyDown(Key::Up)], &mut snake);
        assert_eq!(snake.pending_direction, Some(Direction::Up));

        let mut snake = self::snake();
        handler.handle_events(&[InputEvent::KeyDown(Key::Down)], &mut snake);
        assert_eq!(snake.pending_direction, Some(Direction::Down));
    }

    #[test]
    fn test_last_request_in_batch_wins() {
        let handler = InputHandler::new();
        let mut snake = snake();

        handler.handle_events(
            &[
                InputEvent::KeyDown(Key::Up),
                InputEvent::KeyDown(Key::Down),
            ],
            &mut snake,
        );

        assert_eq!(snake.pending_direction, Some(Direction::Down));
        assert_eq!(snake.direction, Direction::Right);
    }

    #[test]
    fn test_reversal_checked_against_current_direction() {
        let handler = InputHandler::new();
        let mut snake = snake();

        // Up is buffered, but Left is still judged against Right
        handler.handle_events(
            &[
                InputEvent::KeyDown(Key::Up),
                InputEvent::KeyDown(Key::Left),
            ],
            &mut snake,
        );

        assert_eq!(snake.pending_direction, Some(Direction::Up));
    }

    #[test]
    fn test_quit_stops_processing() {
        let handler = InputHandler::new();
        let mut snake = snake();

        let control = handler.handle_events(
            &[InputEvent::Quit, InputEvent::KeyDown(Key::Up)],
            &mut snake,
        );

        assert_eq!(control, LoopControl::Quit);
        assert_eq!(snake.pending_direction, None);
    }

    #[test]
    fn test_other_keys_ignored() {
        let handler = InputHandler::new();
        let mut snake = snake();

        let control = handler.handle_events(&[InputEvent::KeyDown(Key::Other)], &mut snake);

        assert_eq!(control, LoopControl::Continue);
        assert_eq!(snake.pending_direction, None);
    }
}
