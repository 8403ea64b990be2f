//! Runner settings
//!
//! Host-side configuration only. Gameplay constants live in `consts` and are
//! not configurable.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Headless runner configuration (JSON, every field optional)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gap seed; `None` picks one from the OS
    pub seed: Option<u64>,
    /// Frames to simulate
    pub max_frames: u32,
    /// Let the autopilot steer (otherwise the player just falls)
    pub autopilot: bool,
    /// Restart immediately after a game over
    pub auto_restart: bool,
    /// `log` level filter name (error, warn, info, debug, trace, off)
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            max_frames: 3600, // One minute at 60 Hz
            autopilot: true,
            auto_restart: false,
            log_level: "info".to_string(),
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings from {}", path.display()))?;
        let settings = Self::from_json(&json)
            .with_context(|| format!("parsing settings in {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parsed log level, falling back to `Info` on an unknown name
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Use the configured seed or draw one
    pub fn resolve_seed(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random)
    }
}
