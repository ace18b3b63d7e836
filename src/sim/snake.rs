//! Snake body and movement
//!
//! The snake is a head plus a trail of cells it has recently left. It does
//! not know about walls, fruit or which turns are legal; the session decides
//! all of that and only tells the snake where to go.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::grid::{Direction, GridPosition};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    head: GridPosition,
    /// Vacated head cells, newest at the front
    tail: VecDeque<GridPosition>,
    /// Target tail length; the tail is trimmed to this after every move
    tail_length: usize,
    /// None until the first direction is set
    direction: Option<Direction>,
}

impl Snake {
    /// A bare head with no tail, not moving yet
    pub fn new(head: GridPosition) -> Self {
        Self {
            head,
            tail: VecDeque::new(),
            tail_length: 0,
            direction: None,
        }
    }

    pub fn head(&self) -> GridPosition {
        self.head
    }

    pub fn tail(&self) -> &VecDeque<GridPosition> {
        &self.tail
    }

    pub fn tail_length(&self) -> usize {
        self.tail_length
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Set the heading for the next move. No reversal check.
    pub fn change_direction(&mut self, direction: Direction) {
        self.direction = Some(direction);
    }

    /// Advance one cell.
    ///
    /// The old head is pushed onto the tail before the head moves, so the
    /// cell just vacated is part of the tail when collisions are checked.
    /// Only then is the oldest cell dropped if the tail is over length.
    pub fn advance(&mut self) {
        self.tail.push_front(self.head);
        if let Some(direction) = self.direction {
            self.head = self.head.translated(direction);
        }
        if self.tail.len() > self.tail_length {
            self.tail.pop_back();
        }
    }

    /// Lengthen by one. The current head cell is appended at the oldest end
    /// so the tail reaches its new target length without waiting a move.
    pub fn grow(&mut self) {
        self.tail.push_back(self.head);
        self.tail_length += 1;
    }

    /// Iterate head first, then tail from newest to oldest
    pub fn cells(&self) -> impl Iterator<Item = GridPosition> + '_ {
        std::iter::once(self.head).chain(self.tail.iter().copied())
    }
}
