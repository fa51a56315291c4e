//! Multiplex configuration

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{MuxError, Result};
use crate::languages::LanguageTable;

/// Output encoding configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MuxConfig {
    /// Sample rate every audio source is resampled to
    pub sample_rate: u32,

    /// Audio codec for all 16 output tracks
    pub audio_codec: String,

    /// Video codec (passthrough by default)
    pub video_codec: String,

    /// FFmpeg binary used by the executor
    pub ffmpeg_path: String,

    /// Overwrite an existing output file
    pub overwrite: bool,

    /// Alternate canonical language order (must list exactly 12 codes)
    pub languages: Option<Vec<String>>,
}

impl Default for MuxConfig {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            audio_codec: "pcm_s24le".to_string(),
            video_codec: "copy".to_string(),
            ffmpeg_path: "ffmpeg".to_string(),
            overwrite: true,
            languages: None,
        }
    }
}

impl MuxConfig {
    /// Canonical language table for this configuration
    pub fn language_table(&self) -> Result<LanguageTable> {
        match &self.languages {
            Some(codes) => LanguageTable::new(codes),
            None => Ok(LanguageTable::broadcast()),
        }
    }

    /// Load configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        toml::from_str(&content).map_err(|e| MuxError::ConfigFile(e.to_string()))
    }

    /// Save configuration to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| MuxError::ConfigFile(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Output format (json, pretty)
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}
