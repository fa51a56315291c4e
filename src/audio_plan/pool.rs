//! Label pools - ordered filter-graph output labels per language and side

use std::collections::{BTreeMap, VecDeque};
use std::fmt;

use crate::error::{MuxError, Result};

/// Channel side of a split source
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChannelSide {
    Left,
    Right,
}

impl ChannelSide {
    /// Label suffix used in the filter graph
    pub fn suffix(&self) -> &'static str {
        match self {
            ChannelSide::Left => "l",
            ChannelSide::Right => "r",
        }
    }
}

impl fmt::Display for ChannelSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelSide::Left => write!(f, "left"),
            ChannelSide::Right => write!(f, "right"),
        }
    }
}

/// Base label of an extracted channel, e.g. `nor_l`
pub fn base_label(language: &str, side: ChannelSide) -> String {
    format!("{}_{}", language, side.suffix())
}

/// Labels available to consumers of one channel.
///
/// A single consumer reads the base label directly; `k > 1` consumers read
/// `k` numbered copies produced by a split filter.
pub fn channel_labels(language: &str, side: ChannelSide, demand: usize) -> Vec<String> {
    let base = base_label(language, side);
    match demand {
        0 => Vec::new(),
        1 => vec![base],
        k => (0..k).map(|i| format!("{}_{}", base, i)).collect(),
    }
}

/// Consumable queue of labels for one (language, side)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelQueue {
    language: String,
    side: ChannelSide,
    labels: VecDeque<String>,
}

impl LabelQueue {
    pub fn new(language: &str, side: ChannelSide, labels: Vec<String>) -> Self {
        Self {
            language: language.to_string(),
            side,
            labels: labels.into(),
        }
    }

    /// Pop the next unused label; underflow is an engine defect
    pub fn take_next(&mut self) -> Result<String> {
        self.labels.pop_front().ok_or_else(|| {
            MuxError::AllocationInvariant(format!(
                "{} {} label pool exhausted",
                self.language, self.side
            ))
        })
    }

    pub fn remaining(&self) -> usize {
        self.labels.len()
    }
}

/// All label queues of one request
#[derive(Debug, Clone, Default)]
pub struct LabelPools {
    queues: BTreeMap<(String, ChannelSide), LabelQueue>,
}

impl LabelPools {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the labels generated for a channel
    pub fn insert(&mut self, language: &str, side: ChannelSide, labels: Vec<String>) {
        self.queues.insert(
            (language.to_string(), side),
            LabelQueue::new(language, side, labels),
        );
    }

    /// Take the next label for a language/side
    pub fn take_next(&mut self, language: &str, side: ChannelSide) -> Result<String> {
        self.queues
            .get_mut(&(language.to_string(), side))
            .ok_or_else(|| {
                MuxError::AllocationInvariant(format!(
                    "no {} label pool for {}",
                    side, language
                ))
            })?
            .take_next()
    }

    /// Labels not yet consumed across all queues
    pub fn remaining(&self) -> usize {
        self.queues.values().map(|q| q.remaining()).sum()
    }

    /// Fail if any generated label was never consumed
    pub fn ensure_drained(&self) -> Result<()> {
        if let Some(queue) = self.queues.values().find(|q| q.remaining() > 0) {
            return Err(MuxError::AllocationInvariant(format!(
                "{} {} label pool has {} unconsumed label(s)",
                queue.language,
                queue.side,
                queue.remaining()
            )));
        }
        Ok(())
    }
}
