//! Job file support
//!
//! Loads a multiplex job (request plus optional mux/logging settings) from TOML.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::config::{LoggingConfig, MuxConfig};
use crate::error::{MuxError, Result};
use crate::languages::normalize_code;
use crate::request::MuxRequest;

/// Job file format
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobFile {
    /// Input/output settings
    pub job: JobSettings,
    /// Audio files keyed by language code
    #[serde(default)]
    pub audio: BTreeMap<String, PathBuf>,
    /// Encoding settings
    pub mux: Option<MuxConfig>,
    /// Logging settings
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSettings {
    /// Source video file
    pub video: PathBuf,
    /// Output directory
    pub destination: PathBuf,
    /// Output file name
    pub output_name: String,
    /// Language filling slots without their own audio
    pub fallback_language: String,
    /// Accepted but not consulted; stereo is fixed by slot index
    #[serde(default)]
    pub stereo_languages: Vec<String>,
}

impl JobFile {
    /// Load a job from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| MuxError::ConfigFile(e.to_string()))
    }

    /// Save the job to a TOML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| MuxError::ConfigFile(e.to_string()))?;
        std::fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Example job with the three-language broadcast case
    pub fn example() -> Self {
        let audio = [("nor", "nor.wav"), ("eng", "eng.wav"), ("fin", "fin.wav")]
            .into_iter()
            .map(|(code, file)| (code.to_string(), PathBuf::from("/media/in").join(file)))
            .collect();

        Self {
            job: JobSettings {
                video: PathBuf::from("/media/in/video.mxf"),
                destination: PathBuf::from("/media/out"),
                output_name: "programme.mxf".to_string(),
                fallback_language: "nor".to_string(),
                stereo_languages: vec!["nor".to_string(), "eng".to_string(), "fin".to_string()],
            },
            audio,
            mux: Some(MuxConfig::default()),
            logging: Some(LoggingConfig::default()),
        }
    }

    /// Convert to a MuxRequest
    pub fn to_request(&self) -> MuxRequest {
        MuxRequest {
            video_file: self.job.video.clone(),
            audio_files: self
                .audio
                .iter()
                .map(|(code, path)| (normalize_code(code), path.clone()))
                .collect(),
            fallback_language: normalize_code(&self.job.fallback_language),
            stereo_languages: self
                .job
                .stereo_languages
                .iter()
                .map(|c| normalize_code(c))
                .collect(),
            destination: self.job.destination.clone(),
            output_name: self.job.output_name.clone(),
        }
    }

    pub fn mux_config(&self) -> MuxConfig {
        self.mux.clone().unwrap_or_default()
    }

    pub fn logging_config(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

/// Write an example job file at the specified path
pub fn generate_example_job<P: AsRef<Path>>(path: P) -> Result<()> {
    JobFile::example().to_file(path)
}
