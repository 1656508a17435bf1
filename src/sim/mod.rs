//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One tick per call, paced by the caller
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod food;
pub mod grid;
pub mod snake;
pub mod state;
pub mod tick;

pub use food::{Food, place};
pub use grid::{Grid, wrap};
pub use snake::{Direction, Snake};
pub use state::{Frame, GamePhase, GameState};
pub use tick::{InputEvent, TickReport, tick};
