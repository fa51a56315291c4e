//! Broadcast multiplex planner
//!
//! Maps a sparse set of per-language audio files onto a fixed playout
//! layout of 16 audio tracks (12 languages, the first 4 as stereo pairs),
//! filling missing languages from a fallback, and synthesizes the FFmpeg
//! filter graph and argument list that produce the multiplex.

pub mod audio_plan;
pub mod config;
pub mod config_file;
pub mod error;
pub mod ffmpeg;
pub mod filtergraph;
pub mod languages;
pub mod plan;
pub mod request;

#[cfg(test)]
mod integration;

pub use config::MuxConfig;
pub use error::{MuxError, Result};
pub use languages::LanguageTable;
pub use plan::{plan_multiplex, plan_multiplex_with_table, MuxPlan};
pub use request::MuxRequest;
