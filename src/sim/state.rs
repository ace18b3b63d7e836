//! Session state and field configuration
//!
//! A [`GameSession`] is one playthrough. It owns everything the tick function
//! touches, including the seeded RNG, so a seed plus an intent script
//! reproduces a whole run.

use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CollisionKind;
use super::fruit::Fruit;
use super::grid::{Direction, GridPosition};
use super::snake::Snake;
use super::tick::{TickResult, tick};
use crate::consts::*;
use crate::error::SnakeError;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended (terminal)
    GameOver,
}

/// Playing field dimensions in field units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldConfig {
    pub width: i32,
    pub height: i32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_FIELD_WIDTH,
            height: DEFAULT_FIELD_HEIGHT,
        }
    }
}

impl FieldConfig {
    /// Validate and build a field. Both sides must be positive multiples of
    /// `CELL` and at least `MIN_CELLS_PER_AXIS` cells long.
    pub fn new(width: i32, height: i32) -> Result<Self, SnakeError> {
        let field = Self { width, height };
        field.validate()?;
        Ok(field)
    }

    /// Re-check a field that came from somewhere other than [`FieldConfig::new`]
    /// (deserialized config, struct literal)
    pub fn validate(&self) -> Result<(), SnakeError> {
        let axis_ok = |d: i32| d > 0 && d % CELL == 0 && d / CELL >= MIN_CELLS_PER_AXIS;
        if axis_ok(self.width) && axis_ok(self.height) {
            Ok(())
        } else {
            Err(SnakeError::InvalidConfiguration {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Number of cell columns
    #[inline]
    pub fn cols(&self) -> i32 {
        self.width / CELL
    }

    /// Number of cell rows
    #[inline]
    pub fn rows(&self) -> i32 {
        self.height / CELL
    }

    /// Cell where a new snake starts: the center, snapped down to the grid
    pub fn center(&self) -> GridPosition {
        GridPosition::from_cell(self.cols() / 2, self.rows() / 2)
    }
}

/// One playthrough: snake, fruit, score and the terminal flag
#[derive(Debug, Clone)]
pub struct GameSession {
    pub(super) field: FieldConfig,
    /// Run seed for reproducibility
    pub(super) seed: u64,
    /// Fruit placement RNG, seeded from `seed`
    pub(super) rng: Pcg32,
    pub(super) snake: Snake,
    pub(super) fruit: Fruit,
    pub(super) score: u32,
    pub(super) phase: GamePhase,
    /// Latest requested direction, consumed by the next tick
    pub(super) pending_intent: Option<Direction>,
    /// Completed ticks
    pub(super) time_ticks: u64,
    /// Set once, on the tick that ended the run
    pub(super) end_cause: Option<CollisionKind>,
}

impl GameSession {
    /// Start a session on a `width` x `height` field with a random seed
    pub fn new(width: i32, height: i32) -> Result<Self, SnakeError> {
        let field = FieldConfig::new(width, height)?;
        Self::with_seed(field, rand::random())
    }

    /// Start a session with a fixed fruit-placement seed.
    ///
    /// The field is validated here as well: `FieldConfig` can be built as a
    /// struct literal or deserialized without going through `new`.
    pub fn with_seed(field: FieldConfig, seed: u64) -> Result<Self, SnakeError> {
        field.validate()?;
        let mut rng = Pcg32::seed_from_u64(seed);
        let fruit = Fruit::spawn(&field, &mut rng);
        let snake = Snake::new(field.center());

        log::info!(
            "New session: field {}x{}, seed {}, head {}, fruit {}",
            field.width,
            field.height,
            seed,
            snake.head(),
            fruit.position
        );

        Ok(Self {
            field,
            seed,
            rng,
            snake,
            fruit,
            score: 0,
            phase: GamePhase::Playing,
            pending_intent: None,
            time_ticks: 0,
            end_cause: None,
        })
    }

    /// Queue the direction for the next tick. A later call before that tick
    /// replaces it; nothing is buffered beyond the latest request.
    pub fn set_intent(&mut self, direction: Direction) {
        self.pending_intent = Some(direction);
    }

    /// Advance one tick. Same as [`tick`].
    pub fn tick(&mut self) -> TickResult {
        tick(self)
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Current score, frozen once the session is over
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn fruit(&self) -> &Fruit {
        &self.fruit
    }

    pub fn field(&self) -> &FieldConfig {
        &self.field
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Number of ticks that have run (terminal ticks included, no-op ticks
    /// after game over not)
    pub fn ticks(&self) -> u64 {
        self.time_ticks
    }

    /// Why the session ended, if it has
    pub fn end_cause(&self) -> Option<CollisionKind> {
        self.end_cause
    }

    pub fn pending_intent(&self) -> Option<Direction> {
        self.pending_intent
    }

    /// Full view of the current state without advancing
    pub fn snapshot(&self) -> TickResult {
        TickResult::capture(self, None)
    }
}
