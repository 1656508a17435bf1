//! Platform abstraction layer
//!
//! Handles the OS-facing collaborators of the game loop:
//! - Input events (window close, arrow keys)
//! - Tick pacing
//! - Window creation

pub mod input;
pub mod time;
pub mod window;

pub use input::{InputSource, ScriptedInput};
pub use time::{FixedRateClock, Pacer, Unpaced};
pub use window::{WinitInput, map_key, open};
