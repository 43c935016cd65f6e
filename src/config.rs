//====================================================================

use std::path::Path;

use common::Size;
use engine::runner::RunnerConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

//====================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unable to read config '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to parse config '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: ron::error::SpannedError,
    },
}

/// Settings of the demo battle, read from a RON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: u32,
    pub height: u32,
    pub fps: u32,
    pub seed: u64,
    pub frame_limit: Option<u64>,
    /// Frames between two automatic key presses.
    pub autopilot_delay: u32,
    /// Wait for real time between frames.
    pub realtime: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            fps: 60,
            seed: 0,
            frame_limit: Some(60 * 120),
            autopilot_delay: 20,
            realtime: false,
        }
    }
}

impl DemoConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::parse(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    #[inline]
    pub fn parse(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(contents)
    }

    #[inline]
    pub fn size(&self) -> Size<u32> {
        Size::new(self.width, self.height)
    }

    pub fn runner(&self) -> RunnerConfig {
        RunnerConfig {
            fps: self.fps,
            frame_limit: self.frame_limit,
            realtime: self.realtime,
        }
    }
}

//====================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = DemoConfig::parse("(width: 640, height: 480, seed: 7)").unwrap();

        assert_eq!(config.size(), Size::new(640, 480));
        assert_eq!(config.seed, 7);
        assert_eq!(config.fps, 60);
        assert_eq!(config.runner().fps, 60);
    }

    #[test]
    fn bad_documents_are_reported() {
        assert!(DemoConfig::parse("(width: \"wide\")").is_err());
        assert!(matches!(
            DemoConfig::load("/nonexistent/battle.ron"),
            Err(ConfigError::Io { .. })
        ));
    }
}

//====================================================================
