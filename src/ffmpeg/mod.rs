//! FFmpeg module - external collaborators of the planner
//!
//! This module handles:
//! - FFmpeg initialization
//! - Probing source files for audio streams and channel layout
//! - Running the synthesized command and parsing its progress stream

pub mod executor;
pub mod probe;
pub mod progress;

pub use executor::{ExecutionReport, FfmpegExecutor, GraphExecutor};
pub use ffmpeg_next as ffmpeg;
pub use probe::{validate_sources, AudioProbe, FfmpegProbe, MediaProbe, ProbedAudioStream};
pub use progress::{Progress, ProgressParser};

/// Initialize FFmpeg library
///
/// Safe to call more than once; later calls are no-ops inside FFmpeg.
pub fn init() -> Result<(), crate::error::ProbeError> {
    ffmpeg::init().map_err(|e| {
        crate::error::ProbeError::InitFailed(format!("ffmpeg::init() failed: {}", e))
    })?;

    tracing::debug!("FFmpeg initialized");

    Ok(())
}

/// Get FFmpeg version information
pub fn version_info() -> String {
    let version = ffmpeg::format::version();
    format!(
        "libavformat {}.{}.{}",
        version >> 16,
        (version >> 8) & 0xff,
        version & 0xff
    )
}
