//! Fixed-rate simulation tick
//!
//! One call advances the game by one discrete step. Ordering matters:
//! input -> turn -> eat (pre-move head) -> move -> self-collision.

use serde::{Deserialize, Serialize};

use super::snake::Direction;
use super::state::{GamePhase, GameState};

/// Discrete input recognized by the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Window closed / quit key
    Quit,
    /// Directional key press
    Turn(Direction),
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Head was on the food before moving
    pub ate: bool,
    /// Head ran into the body; snake was reset
    pub collided: bool,
    /// Quit was requested; nothing else ran
    pub terminated: bool,
}

/// Advance the game state by one tick
pub fn tick<I>(state: &mut GameState, events: I) -> TickReport
where
    I: IntoIterator<Item = InputEvent>,
{
    let mut report = TickReport::default();

    if state.phase == GamePhase::Terminated {
        report.terminated = true;
        return report;
    }

    for event in events {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested after {} ticks", state.time_ticks);
                state.phase = GamePhase::Terminated;
                report.terminated = true;
                return report;
            }
            InputEvent::Turn(direction) => state.snake.set_pending_direction(direction),
        }
    }

    state.time_ticks += 1;
    state.snake.apply_pending_direction();

    // Eat check uses the cell the player is on right now
    if state.snake.head() == state.food.position {
        state.snake.grow();
        state.respawn_food_ahead();
        state.best_length = state.best_length.max(state.snake.length());
        report.ate = true;
        log::debug!("Food eaten, length now {}", state.snake.length());
    }

    state.snake.move_forward();

    if state.snake.self_collides() {
        log::info!(
            "Self-collision at length {} (best {}), resetting",
            state.snake.length(),
            state.best_length
        );
        state.snake.reset();
        state.respawn_food();
        report.collided = true;
    }

    report
}
