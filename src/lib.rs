//! Grid Snake - a classic snake game on a fixed cell grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, fruit, collisions, session state)
//! - `palette`: Cosmetic colors handed to whatever draws the game
//! - `error`: Error types for configuration and input boundaries

pub mod error;
pub mod palette;
pub mod sim;

pub use error::SnakeError;
pub use palette::{NamedColor, Palette, PaletteRgb};
pub use sim::{Direction, GameSession, GridPosition, TickResult, tick};

/// Game configuration constants
pub mod consts {
    /// Side length of one grid cell. Every position is a multiple of this.
    pub const CELL: i32 = 20;

    /// Score awarded per fruit eaten
    pub const FRUIT_REWARD: u32 = 10;

    /// Default playing field (pixels, 20x20 cells)
    pub const DEFAULT_FIELD_WIDTH: i32 = 400;
    pub const DEFAULT_FIELD_HEIGHT: i32 = 400;

    /// Suggested tick rate for an external scheduler. The simulation itself
    /// has no notion of time.
    pub const DEFAULT_TICKS_PER_SECOND: u32 = 6;

    /// Smallest field (in cells per axis) that still leaves room for fruit
    pub const MIN_CELLS_PER_AXIS: i32 = 2;
}
