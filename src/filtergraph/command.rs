//! FFmpeg argument list for the playout multiplex

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::audio_plan::SourceFile;
use crate::config::MuxConfig;

use super::emitter::FilterGraph;

/// Leading progress/logging flags
const LEADING_ARGS: [&str; 5] = ["-hide_banner", "-loglevel", "error", "-progress", "pipe:1"];

/// Ready-to-execute FFmpeg invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MuxCommand {
    /// Binary to run
    pub program: String,
    /// Argument tokens, in order
    pub args: Vec<String>,
    /// Every input, video first
    pub inputs: Vec<PathBuf>,
    /// File the multiplex is written to
    pub output: PathBuf,
}

impl MuxCommand {
    /// Shell-style rendering for logs; pastes back into a POSIX shell
    pub fn display(&self) -> String {
        std::iter::once(&self.program)
            .chain(self.args.iter())
            .map(|a| shell_quote(a))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Single-quote an argument when the shell would otherwise split or expand it
fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', "'\\''"))
    }
}

/// Assemble the argument list around an emitted filter graph
pub fn build_command(
    video: &Path,
    sources: &[SourceFile],
    graph: &FilterGraph,
    output: &Path,
    config: &MuxConfig,
) -> MuxCommand {
    let mut args: Vec<String> = LEADING_ARGS.iter().map(|a| a.to_string()).collect();
    if config.overwrite {
        args.push("-y".to_string());
    }

    let mut inputs = Vec::with_capacity(sources.len() + 1);
    inputs.push(video.to_path_buf());
    inputs.extend(sources.iter().map(|s| s.path.clone()));

    for input in &inputs {
        args.push("-i".to_string());
        args.push(input.to_string_lossy().into_owned());
    }

    args.push("-filter_complex".to_string());
    args.push(graph.description());

    for map in &graph.maps {
        args.push("-map".to_string());
        args.push(map.clone());
    }

    args.extend([
        "-c:v".to_string(),
        config.video_codec.clone(),
        "-c:a".to_string(),
        config.audio_codec.clone(),
        output.to_string_lossy().into_owned(),
    ]);

    MuxCommand {
        program: config.ffmpeg_path.clone(),
        args,
        inputs,
        output: output.to_path_buf(),
    }
}
