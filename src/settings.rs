//! Game settings
//!
//! Defaults reproduce the classic 640x480 board at 17 ticks per second.
//! A JSON file named by `SNAKE_SETTINGS` overrides any subset of fields.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SnakeError;
use crate::sim::Grid;

/// Environment variable pointing at a settings JSON file
pub const SETTINGS_ENV: &str = "SNAKE_SETTINGS";

/// RGB color
pub type Rgb = [u8; 3];

/// Flat colors used for the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub background: Rgb,
    /// 1px outline around snake and food cells
    pub border: Rgb,
    pub food: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: [0, 0, 0],
            border: [93, 216, 228],
            food: [255, 0, 0],
            snake: [0, 255, 0],
        }
    }
}

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Board size in pixels
    pub screen_width: u32,
    pub screen_height: u32,
    /// Cell edge in pixels
    pub cell_size: u32,
    /// Ticks per second
    pub speed: u32,
    /// Window title
    pub title: String,
    /// Fixed RNG seed (random when unset)
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 640,
            screen_height: 480,
            cell_size: 20,
            speed: 17,
            title: "Snake".to_string(),
            seed: None,
            palette: Palette::default(),
        }
    }
}

impl Settings {
    /// Parse and validate settings from JSON
    pub fn from_json(json: &str) -> Result<Self, SnakeError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn from_file(path: &Path) -> Result<Self, SnakeError> {
        let json = std::fs::read_to_string(path).map_err(|source| SnakeError::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Load from `SNAKE_SETTINGS` if set, otherwise defaults
    pub fn load() -> Result<Self, SnakeError> {
        match std::env::var_os(SETTINGS_ENV) {
            Some(path) => {
                let path = Path::new(&path);
                let settings = Self::from_file(path)?;
                log::info!("Loaded settings from {}", path.display());
                Ok(settings)
            }
            None => {
                log::info!("Using default settings");
                Ok(Self::default())
            }
        }
    }

    /// Reject settings the game can't run with
    pub fn validate(&self) -> Result<(), SnakeError> {
        if self.cell_size == 0 {
            return Err(SnakeError::InvalidSettings("cell_size must be positive".into()));
        }
        if self.speed == 0 {
            return Err(SnakeError::InvalidSettings("speed must be positive".into()));
        }
        if self.screen_width < self.cell_size || self.screen_height < self.cell_size {
            return Err(SnakeError::InvalidSettings(format!(
                "board {}x{} is smaller than one {}px cell",
                self.screen_width, self.screen_height, self.cell_size
            )));
        }
        if self.screen_width > i32::MAX as u32 || self.screen_height > i32::MAX as u32 {
            return Err(SnakeError::InvalidSettings("board is too large".into()));
        }
        Ok(())
    }

    /// Board geometry for these settings
    pub fn grid(&self) -> Grid {
        Grid::new(
            self.screen_width as i32,
            self.screen_height as i32,
            self.cell_size as i32,
        )
    }
}
