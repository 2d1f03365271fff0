//! Runtime configuration
//!
//! Every field has a default, so an empty or partial TOML file is valid.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::errors::ConfigError;

const APP_DIR: &str = "pixelfolio";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Replacement content document
    pub content: Option<PathBuf>,
    pub log_file: Option<PathBuf>,
    pub timing: Timing,
    pub layout: LayoutConfig,
}

/// All durations in milliseconds
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub frame_ms: u64,
    pub tick_ms: u64,
    pub max_step: f64,
    pub completion_delay_ms: u64,
    /// Unconditional loading -> start deadline; off unless set
    pub startup_cap_ms: Option<u64>,
    pub scroll_throttle_ms: u64,
    pub fill_ms: u64,
}

impl Default for Timing {
    fn default() -> Self {
        Timing {
            frame_ms: 50,
            tick_ms: 200,
            max_step: 10.0,
            completion_delay_ms: 500,
            startup_cap_ms: None,
            scroll_throttle_ms: 100,
            fill_ms: 1000,
        }
    }
}

impl Timing {
    pub fn frame(&self) -> Duration {
        Duration::from_millis(self.frame_ms.max(1))
    }

    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(1))
    }

    pub fn completion_delay(&self) -> Duration {
        Duration::from_millis(self.completion_delay_ms)
    }

    pub fn startup_cap(&self) -> Option<Duration> {
        self.startup_cap_ms.map(Duration::from_millis)
    }

    pub fn scroll_throttle(&self) -> Duration {
        Duration::from_millis(self.scroll_throttle_ms)
    }

    pub fn fill(&self) -> Duration {
        Duration::from_millis(self.fill_ms)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Row (from the terminal top) used to decide the active section
    pub probe_line: u16,
    /// Below this many columns the header collapses into a menu button
    pub compact_width: u16,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        LayoutConfig {
            probe_line: 4,
            compact_width: 80,
        }
    }
}

impl Config {
    /// `<config_dir>/pixelfolio/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// `<cache_dir>/pixelfolio/pixelfolio.log`
    pub fn default_log_path() -> Option<PathBuf> {
        dirs::cache_dir().map(|dir| dir.join(APP_DIR).join("pixelfolio.log"))
    }

    /// Load from an explicit path, or from the default location if a file
    /// exists there, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::default_path() {
                Some(path) if path.is_file() => Self::from_file(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
