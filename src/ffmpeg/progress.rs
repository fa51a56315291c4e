//! Parser for FFmpeg's `-progress` key=value stream

use std::time::Duration;

use serde::Serialize;

/// One progress report, emitted at every `progress=` line
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Progress {
    /// Output timestamp in microseconds
    pub out_time_us: Option<u64>,
    /// Processing speed relative to realtime
    pub speed: Option<f64>,
    /// Bytes written so far
    pub total_size: Option<u64>,
    /// Set on the final `progress=end` block
    pub finished: bool,
}

impl Progress {
    pub fn out_time(&self) -> Option<Duration> {
        self.out_time_us.map(Duration::from_micros)
    }
}

/// Accumulates key=value lines into [`Progress`] blocks
#[derive(Debug, Default)]
pub struct ProgressParser {
    current: Progress,
}

impl ProgressParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one line; returns a report when a block completes
    pub fn push_line(&mut self, line: &str) -> Option<Progress> {
        let (key, value) = line.trim().split_once('=')?;
        let value = value.trim();

        match key.trim() {
            "out_time_us" => self.current.out_time_us = value.parse().ok(),
            "total_size" => self.current.total_size = value.parse().ok(),
            "speed" => {
                self.current.speed = value.trim_end_matches('x').trim().parse().ok();
            }
            "progress" => {
                let mut report = std::mem::take(&mut self.current);
                report.finished = value == "end";
                return Some(report);
            }
            _ => {}
        }
        None
    }
}

/// Parse a chunk of progress output into its completed blocks
pub fn parse_progress_block(text: &str) -> Vec<Progress> {
    let mut parser = ProgressParser::new();
    text.lines().filter_map(|l| parser.push_line(l)).collect()
}
