//! Graph executor - runs the synthesized FFmpeg command

use std::future::Future;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::{Duration, Instant};

use tokio::io::{AsyncBufReadExt, AsyncReadExt, BufReader};
use tokio::process::Command;

use crate::error::{MuxError, Result};
use crate::filtergraph::MuxCommand;

use super::progress::{Progress, ProgressParser};

/// Lines of stderr kept in execution errors
const STDERR_TAIL_LINES: usize = 10;

/// Outcome of a successful run
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    pub output: PathBuf,
    pub last_progress: Option<Progress>,
    pub elapsed: Duration,
}

/// Runs a planned multiplex command
pub trait GraphExecutor {
    fn execute<F>(
        &self,
        command: &MuxCommand,
        on_progress: F,
    ) -> impl Future<Output = Result<ExecutionReport>> + Send
    where
        F: FnMut(&Progress) + Send;
}

/// Executor spawning the FFmpeg binary named in the command
#[derive(Debug, Clone, Default)]
pub struct FfmpegExecutor;

impl FfmpegExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl GraphExecutor for FfmpegExecutor {
    async fn execute<F>(&self, command: &MuxCommand, mut on_progress: F) -> Result<ExecutionReport>
    where
        F: FnMut(&Progress) + Send,
    {
        let started = Instant::now();

        if let Some(parent) = command.output.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }

        tracing::info!("Running: {}", command.display());

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                MuxError::Execution(format!("failed to spawn {}: {}", command.program, e))
            })?;

        let stdout = child
            .stdout
            .take()
            .ok_or_else(|| MuxError::Execution("stdout not captured".to_string()))?;
        let mut stderr = child
            .stderr
            .take()
            .ok_or_else(|| MuxError::Execution("stderr not captured".to_string()))?;

        // File names in stderr are not guaranteed to be UTF-8.
        let stderr_task = tokio::spawn(async move {
            let mut buf = Vec::new();
            if let Err(e) = stderr.read_to_end(&mut buf).await {
                tracing::warn!("Failed to read FFmpeg stderr: {}", e);
            }
            String::from_utf8_lossy(&buf).into_owned()
        });

        let mut parser = ProgressParser::new();
        let mut last_progress = None;
        let mut lines = BufReader::new(stdout).lines();
        while let Some(line) = lines.next_line().await? {
            if let Some(progress) = parser.push_line(&line) {
                tracing::trace!(?progress, "FFmpeg progress");
                on_progress(&progress);
                last_progress = Some(progress);
            }
        }

        let status = child.wait().await?;
        let stderr = stderr_task.await.unwrap_or_default();

        if !status.success() {
            return Err(MuxError::Execution(format!(
                "{} exited with {}: {}",
                command.program,
                status,
                stderr_tail(&stderr)
            )));
        }

        let elapsed = started.elapsed();
        tracing::info!(
            "Multiplex written to {:?} in {:.1}s",
            command.output,
            elapsed.as_secs_f64()
        );

        Ok(ExecutionReport {
            output: command.output.clone(),
            last_progress,
            elapsed,
        })
    }
}

/// Last few non-empty stderr lines, joined
fn stderr_tail(stderr: &str) -> String {
    let lines: Vec<&str> = stderr.lines().filter(|l| !l.trim().is_empty()).collect();
    let start = lines.len().saturating_sub(STDERR_TAIL_LINES);
    lines[start..].join(" | ")
}
