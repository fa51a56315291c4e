//! Multiplex request - the caller-facing input contract

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::languages::normalize_code;

/// Everything needed to plan one playout multiplex
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MuxRequest {
    /// Source video, always input 0
    pub video_file: PathBuf,
    /// Available audio files keyed by language code (sparse)
    pub audio_files: BTreeMap<String, PathBuf>,
    /// Language that fills every slot without its own file
    pub fallback_language: String,
    /// Accepted for compatibility; stereo layout is fixed by slot index
    #[serde(default)]
    pub stereo_languages: Vec<String>,
    /// Output directory
    pub destination: PathBuf,
    /// Output file name, including extension
    pub output_name: String,
}

impl MuxRequest {
    /// Create a request with no audio files yet
    pub fn new(
        video_file: impl Into<PathBuf>,
        fallback_language: &str,
        destination: impl Into<PathBuf>,
        output_name: &str,
    ) -> Self {
        Self {
            video_file: video_file.into(),
            audio_files: BTreeMap::new(),
            fallback_language: normalize_code(fallback_language),
            stereo_languages: Vec::new(),
            destination: destination.into(),
            output_name: output_name.to_string(),
        }
    }

    /// Attach an audio file for a language
    pub fn with_audio(mut self, language: &str, path: impl Into<PathBuf>) -> Self {
        self.audio_files.insert(normalize_code(language), path.into());
        self
    }

    pub fn with_stereo_languages<S: AsRef<str>>(mut self, languages: &[S]) -> Self {
        self.stereo_languages = languages.iter().map(|l| normalize_code(l.as_ref())).collect();
        self
    }

    /// Audio file for a language, matching codes case-insensitively
    pub fn audio_file(&self, language: &str) -> Option<&Path> {
        let language = normalize_code(language);
        self.audio_files
            .iter()
            .find(|(code, _)| normalize_code(code) == language)
            .map(|(_, path)| path.as_path())
    }

    /// Normalised fallback code
    pub fn fallback(&self) -> String {
        normalize_code(&self.fallback_language)
    }

    /// Full path of the multiplex to write
    pub fn output_path(&self) -> PathBuf {
        self.destination.join(&self.output_name)
    }
}
