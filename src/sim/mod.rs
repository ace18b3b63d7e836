//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per tick, no clock
//! - Seeded RNG only
//! - No rendering, input or color dependencies

pub mod collision;
pub mod fruit;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use collision::{CollisionKind, occupies, out_of_bounds, self_collision};
pub use fruit::Fruit;
pub use grid::{Direction, GridPosition};
pub use snake::Snake;
pub use state::{FieldConfig, GamePhase, GameSession};
pub use tick::{TickOutcome, TickResult, tick};
