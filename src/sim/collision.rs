//! Collision detection on the cell grid
//!
//! Everything here is a pure predicate over positions. On a grid, "collides"
//! means "is the exact same cell"; there is no partial overlap.

use serde::{Deserialize, Serialize};

use super::grid::GridPosition;
use crate::consts::CELL;

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionKind {
    /// Head ran into its own tail
    SelfCollision,
    /// Head left the playing field
    Boundary,
}

/// Exact cell equality
#[inline]
pub fn occupies(a: GridPosition, b: GridPosition) -> bool {
    a == b
}

/// Check if the head shares a cell with any tail segment
pub fn self_collision<'a, I>(head: GridPosition, tail: I) -> bool
where
    I: IntoIterator<Item = &'a GridPosition>,
{
    tail.into_iter().any(|&segment| occupies(head, segment))
}

/// Check if the head's cell sticks out of a `width` x `height` field.
///
/// A cell is a `CELL`-sized box anchored at its top-left corner, so the
/// last legal coordinate on each axis is `dimension - CELL`.
pub fn out_of_bounds(head: GridPosition, width: i32, height: i32) -> bool {
    head.x < 0 || head.x > width - CELL || head.y < 0 || head.y > height - CELL
}
