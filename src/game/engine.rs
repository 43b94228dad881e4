use anyhow::Result;
use log::{debug, info, trace};
use rand::Rng;

use super::{apple::Apple, config::GameConfig, snake::Snake};
use crate::clock::FrameClock;
use crate::input::{InputHandler, InputSource};
use crate::render::{Drawable, Surface};

/// Whether the loop keeps going after a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Type of collision that occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake left the screen
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepInfo {
    /// Whether the snake ate the apple this tick
    pub ate_apple: bool,
    /// Collision that reset the snake, if any
    pub collision: Option<CollisionType>,
}

/// Owns the snake and the apple and drives them one tick at a time
pub struct Game<R = rand::rngs::ThreadRng> {
    pub config: GameConfig,
    pub snake: Snake,
    pub apple: Apple,
    pub last_step: StepInfo,
    input_handler: InputHandler,
    rng: R,
}

impl Game<rand::rngs::ThreadRng> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_rng(config, rand::thread_rng())
    }
}

impl<R: Rng> Game<R> {
    pub fn with_rng(config: GameConfig, rng: R) -> Self {
        let snake = Snake::new(
            config.start_position(),
            config.initial_snake_length,
            config.grid.cell_size,
            config.palette.snake,
        );
        let apple = Apple::new(config.apple_position(), config.palette.apple);

        let mut game = Self {
            config,
            snake,
            apple,
            last_step: StepInfo::default(),
            input_handler: InputHandler::new(),
            rng,
        };
        game.relocate_apple();
        game
    }

    /// Run ticks at the clock's pace until the player quits
    pub async fn run<S, I, C>(&mut self, surface: &mut S, input: &mut I, clock: &mut C) -> Result<()>
    where
        S: Surface,
        I: InputSource,
        C: FrameClock,
    {
        loop {
            clock.tick().await;
            if self.tick(surface, input)? == LoopControl::Quit {
                info!("Quit requested, stopping game loop");
                return Ok(());
            }
        }
    }

    /// One frame: input, move, draw, eat and collision checks, present
    pub fn tick<S, I>(&mut self, surface: &mut S, input: &mut I) -> Result<LoopControl>
    where
        S: Surface,
        I: InputSource,
    {
        surface.fill(self.config.palette.background);

        let events = input.poll_events()?;
        if self.input_handler.handle_events(&events, &mut self.snake) == LoopControl::Quit {
            return Ok(LoopControl::Quit);
        }

        self.snake.move_once();
        trace!("Head at {:?}", self.snake.head());

        self.snake.draw(surface, &self.config.grid, &self.config.palette);
        self.apple.draw(surface, &self.config.grid, &self.config.palette);

        self.last_step = self.resolve_step();

        surface.present()?;
        Ok(LoopControl::Continue)
    }

    /// Eat check first, then the bounds and self-collision checks
    fn resolve_step(&mut self) -> StepInfo {
        let mut info = StepInfo::default();

        if self.snake.head() == self.apple.position {
            self.snake.grow();
            self.relocate_apple();
            info.ate_apple = true;
            debug!(
                "Apple eaten, target length {}, next apple at {:?}",
                self.snake.target_length, self.apple.position
            );
        }

        if !self.config.grid.contains(self.snake.head()) {
            self.restart(CollisionType::Wall);
            info.collision = Some(CollisionType::Wall);
        }

        if self.snake.collides_with_body(self.snake.head()) {
            self.restart(CollisionType::SelfCollision);
            info.collision = Some(CollisionType::SelfCollision);
        }

        info
    }

    fn restart(&mut self, cause: CollisionType) {
        info!(
            "Snake died ({:?}) at {:?} with length {}, resetting",
            cause,
            self.snake.head(),
            self.snake.len()
        );
        self.snake
            .reset(self.config.start_position(), self.config.initial_snake_length);
        self.relocate_apple();
    }

    fn relocate_apple(&mut self) {
        self.apple.randomize_position(&self.config.grid, &mut self.rng);
    }
}
