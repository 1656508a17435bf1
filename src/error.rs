//! Error type for startup and the window frontend
//!
//! The simulation itself never fails; only settings loading, window creation
//! and presenting frames can.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SnakeError {
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("pixel surface error: {0}")]
    Pixels(#[from] pixels::Error),

    #[error("failed to read settings from {}: {source}", .path.display())]
    SettingsIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed settings: {0}")]
    SettingsParse(#[from] serde_json::Error),

    #[error("invalid settings: {0}")]
    InvalidSettings(String),
}
