//! Grid coordinates and movement directions
//!
//! Positions are stored in field units (pixels), always a multiple of
//! [`CELL`]. A cell is anchored at its top-left corner.

use std::fmt;
use std::str::FromStr;

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::consts::CELL;
use crate::error::SnakeError;

/// A cell-aligned coordinate on the playing field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position of the cell at column `col`, row `row`
    pub const fn from_cell(col: i32, row: i32) -> Self {
        Self::new(col * CELL, row * CELL)
    }

    /// One cell over in `direction`
    #[inline]
    pub fn translated(self, direction: Direction) -> Self {
        (IVec2::from(self) + direction.delta()).into()
    }

    /// True if both coordinates sit on the cell grid
    #[inline]
    pub fn is_aligned(self) -> bool {
        self.x % CELL == 0 && self.y % CELL == 0
    }
}

impl From<GridPosition> for IVec2 {
    fn from(pos: GridPosition) -> Self {
        IVec2::new(pos.x, pos.y)
    }
}

impl From<IVec2> for GridPosition {
    fn from(v: IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Cardinal movement direction
///
/// A snake that has not moved yet has no direction at all; that state is
/// `Option::<Direction>::None` on the snake rather than a variant here, so
/// only the four real directions can ever be requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Offset of one step, in field units. Screen coordinates: y grows downward.
    pub fn delta(self) -> IVec2 {
        match self {
            Direction::Up => IVec2::new(0, -CELL),
            Direction::Down => IVec2::new(0, CELL),
            Direction::Left => IVec2::new(-CELL, 0),
            Direction::Right => IVec2::new(CELL, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns true if turning from self to `other` would be a 180-degree turn
    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl FromStr for Direction {
    type Err = SnakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" | "u" => Ok(Direction::Up),
            "down" | "d" => Ok(Direction::Down),
            "left" | "l" => Ok(Direction::Left),
            "right" | "r" => Ok(Direction::Right),
            _ => Err(SnakeError::InvalidIntent(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
