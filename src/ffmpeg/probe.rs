//! Media probe - reports the audio streams available in a source file

use std::path::Path;

use ffmpeg_next as ffmpeg;

use crate::error::{MuxError, ProbeError, Result};
use crate::plan::MuxPlan;

/// One audio stream found in a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbedAudioStream {
    pub stream_index: usize,
    pub channels: u16,
    pub sample_rate: u32,
}

impl ProbedAudioStream {
    /// Human-readable channel layout
    pub fn layout(&self) -> String {
        match self.channels {
            1 => "mono".to_string(),
            2 => "stereo".to_string(),
            n => format!("{}ch", n),
        }
    }
}

/// Audio streams of a probed file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AudioProbe {
    pub audio_streams: Vec<ProbedAudioStream>,
}

impl AudioProbe {
    /// The stream the filter graph reads (`N:a` selects the first)
    pub fn primary(&self) -> Option<&ProbedAudioStream> {
        self.audio_streams.first()
    }
}

/// Source of stream/channel metadata for a media file
pub trait MediaProbe {
    fn probe(&self, path: &Path) -> std::result::Result<AudioProbe, ProbeError>;
}

/// Probe backed by libavformat
#[derive(Debug, Clone, Copy)]
pub struct FfmpegProbe;

impl FfmpegProbe {
    pub fn new() -> std::result::Result<Self, ProbeError> {
        super::init()?;
        Ok(Self)
    }
}

impl MediaProbe for FfmpegProbe {
    fn probe(&self, path: &Path) -> std::result::Result<AudioProbe, ProbeError> {
        let context = ffmpeg::format::input(&path)
            .map_err(|e| ProbeError::OpenInput(format!("Failed to open {:?}: {}", path, e)))?;

        let mut probe = AudioProbe::default();
        for (i, stream) in context.streams().enumerate() {
            if stream.parameters().medium() != ffmpeg::media::Type::Audio {
                continue;
            }

            let (sample_rate, channels) = unsafe {
                let params_ptr = stream.parameters().as_ptr();
                (
                    (*params_ptr).sample_rate as u32,
                    (*params_ptr).ch_layout.nb_channels as u16,
                )
            };

            tracing::debug!(
                "Found audio stream {} in {:?}: {}Hz, {} channels",
                i,
                path,
                sample_rate,
                channels
            );
            probe.audio_streams.push(ProbedAudioStream {
                stream_index: i,
                channels,
                sample_rate,
            });
        }

        Ok(probe)
    }
}

/// Check every attached audio source before the command is executed.
///
/// Each source needs an audio stream, and sources split into a stereo pair
/// need at least two channels.
pub fn validate_sources<P: MediaProbe + ?Sized>(probe: &P, plan: &MuxPlan) -> Result<()> {
    for source in &plan.slots.sources {
        let info = probe.probe(&source.path)?;
        let primary = info.primary().ok_or_else(|| {
            ProbeError::NoAudioStream(format!(
                "{} audio file {}",
                source.language,
                source.path.display()
            ))
        })?;

        let needs_stereo = plan
            .demand
            .get(&source.language)
            .map(|d| d.needs_stereo())
            .unwrap_or(false);
        if needs_stereo && primary.channels < 2 {
            return Err(MuxError::Configuration(format!(
                "{} audio file {:?} is {} but fills a stereo slot",
                source.language,
                source.path,
                primary.layout()
            )));
        }

        tracing::debug!(
            language = %source.language,
            layout = %primary.layout(),
            "Source validated"
        );
    }
    Ok(())
}
