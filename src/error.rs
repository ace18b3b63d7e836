//! Error types
//!
//! Reaching game over is not an error; it comes back as a normal
//! [`TickResult`](crate::sim::TickResult). Errors only guard the edges of
//! the simulation: session creation and untrusted input.

use crate::consts::{CELL, MIN_CELLS_PER_AXIS};

#[derive(thiserror::Error, Debug)]
pub enum SnakeError {
    #[error(
        "invalid field {width}x{height}: each side must be a positive multiple of {} \
         spanning at least {} cells",
        CELL,
        MIN_CELLS_PER_AXIS
    )]
    InvalidConfiguration { width: i32, height: i32 },

    #[error("invalid intent {0:?}: expected up, down, left or right")]
    InvalidIntent(String),

    #[error("palette rejected: {0}")]
    Palette(#[from] serde_json::Error),
}
