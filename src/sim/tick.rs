//! Discrete simulation tick
//!
//! Core game loop step. Advances a session by exactly one cell move and
//! reports the resulting state. Has no notion of wall-clock time; whoever
//! calls it owns the tick rate.

use serde::{Deserialize, Serialize};

use super::collision::{CollisionKind, occupies, out_of_bounds, self_collision};
use super::grid::GridPosition;
use super::state::{GamePhase, GameSession};
use crate::consts::FRUIT_REWARD;

/// What happened on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TickOutcome {
    /// Snake moved (or stayed put before its first direction), nothing else
    Moved,
    /// Snake moved onto the fruit and grew
    AteFruit,
    /// Run is over. Repeated on every tick after the terminal one.
    GameOver {
        cause: CollisionKind,
        final_score: u32,
    },
}

/// Snapshot of the session after a tick, for whatever draws the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickResult {
    /// Ticks completed so far
    pub tick: u64,
    pub head: GridPosition,
    /// Newest segment first
    pub tail: Vec<GridPosition>,
    pub fruit: GridPosition,
    pub score: u32,
    pub is_over: bool,
    /// None only for snapshots taken outside of a tick on a live session
    pub outcome: Option<TickOutcome>,
}

impl TickResult {
    pub(super) fn capture(session: &GameSession, outcome: Option<TickOutcome>) -> Self {
        let outcome = outcome.or_else(|| {
            session.end_cause.map(|cause| TickOutcome::GameOver {
                cause,
                final_score: session.score,
            })
        });
        Self {
            tick: session.time_ticks,
            head: session.snake.head(),
            tail: session.snake.tail().iter().copied().collect(),
            fruit: session.fruit.position,
            score: session.score,
            is_over: session.phase == GamePhase::GameOver,
            outcome,
        }
    }
}

/// Advance the session by one tick.
///
/// Order within a tick is fixed:
/// 1. apply the pending intent unless it reverses the current direction
/// 2. move the snake
/// 3. self-collision ends the run
/// 4. fruit pickup scores, respawns the fruit and grows the snake
/// 5. leaving the field ends the run
///
/// Fruit is resolved before the boundary check, so a fruit on the last legal
/// cell always counts.
pub fn tick(session: &mut GameSession) -> TickResult {
    // Terminal: nothing moves, score stays frozen
    if session.phase == GamePhase::GameOver {
        session.pending_intent = None;
        return TickResult::capture(session, None);
    }

    // Illegal intents are dropped here, not retried on a later tick
    if let Some(intent) = session.pending_intent.take() {
        match session.snake.direction() {
            Some(current) if current.is_opposite(intent) => {
                log::trace!("Ignoring reversal {} -> {}", current, intent);
            }
            _ => session.snake.change_direction(intent),
        }
    }

    session.snake.advance();
    session.time_ticks += 1;

    let head = session.snake.head();
    log::trace!("Tick {}: head {}", session.time_ticks, head);

    if self_collision(head, session.snake.tail()) {
        return finish(session, CollisionKind::SelfCollision);
    }

    let mut outcome = TickOutcome::Moved;
    if occupies(head, session.fruit.position) {
        session.score += FRUIT_REWARD;
        session.fruit.respawn(&session.field, &mut session.rng);
        session.snake.grow();
        log::debug!(
            "Fruit eaten at {}: score {}, tail length {}, next fruit {}",
            head,
            session.score,
            session.snake.tail_length(),
            session.fruit.position
        );
        outcome = TickOutcome::AteFruit;
    }

    if out_of_bounds(head, session.field.width, session.field.height) {
        return finish(session, CollisionKind::Boundary);
    }

    TickResult::capture(session, Some(outcome))
}

fn finish(session: &mut GameSession, cause: CollisionKind) -> TickResult {
    session.phase = GamePhase::GameOver;
    session.end_cause = Some(cause);
    log::info!(
        "Game over after {} ticks ({:?} at {}): final score {}",
        session.time_ticks,
        cause,
        session.snake.head(),
        session.score
    );
    TickResult::capture(
        session,
        Some(TickOutcome::GameOver {
            cause,
            final_score: session.score,
        }),
    )
}
