use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::error::{Error, Result};

/// Front-end settings: window, frame buffer and demo assets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub title: String,
    /// Frame buffer size in bitmap pixels
    pub width: u32,
    pub height: u32,
    /// Window pixels per frame buffer pixel
    pub scale_x: u32,
    pub scale_y: u32,
    /// Fixed update rate, in steps per second
    pub frame_cap: u32,
    pub vsync: bool,
    pub sprite: Option<PathBuf>,
    /// Pixels of this colour are keyed out of the sprite on load
    pub color_key: Option<Color>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            title: "softblit".to_string(),
            width: 128,
            height: 128,
            scale_x: 5,
            scale_y: 5,
            frame_cap: 60,
            vsync: true,
            sprite: None,
            color_key: None,
        }
    }
}

impl EngineConfig {
    /// Window size in screen pixels
    pub fn window_size(&self) -> (u32, u32) {
        (
            self.width.saturating_mul(self.scale_x),
            self.height.saturating_mul(self.scale_y),
        )
    }

    /// Seconds per fixed update step
    pub fn step(&self) -> f32 {
        1.0 / self.frame_cap.max(1) as f32
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::config(format!(
                "frame buffer must be non-empty, got {}x{}",
                self.width, self.height
            )));
        }
        if self.width > i32::MAX as u32 || self.height > i32::MAX as u32 {
            return Err(Error::config("frame buffer dimensions exceed i32 range"));
        }
        if self.scale_x == 0 || self.scale_y == 0 {
            return Err(Error::config("window scale factors must be at least 1"));
        }
        if self.frame_cap == 0 {
            return Err(Error::config("frame_cap must be at least 1"));
        }
        Ok(())
    }

    /// Save config to a JSON file
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Load and validate config from a JSON file; absent fields take defaults
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&json)?;
        config.validate()?;
        Ok(config)
    }
}
