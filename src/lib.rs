//! Grid Snake - a single-screen snake game on a toroidal grid
//!
//! Core modules:
//! - `sim`: Deterministic simulation (grid, snake, food, tick)
//! - `game`: Fixed-rate loop tying input, simulation and rendering together
//! - `renderer`: Flat-color cell rendering into a pixel framebuffer
//! - `platform`: Window, input and pacing
//! - `settings`: Board size, speed and palette

pub mod error;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::SnakeError;
pub use settings::{Palette, Settings};
