//! Slot planner - decides which audio source fills each canonical slot

use std::path::PathBuf;

use crate::error::{MuxError, Result};
use crate::languages::{normalize_code, LanguageSlot, LanguageTable};
use crate::request::MuxRequest;

/// An audio file that is attached as a command input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    /// Language the file carries
    pub language: String,
    /// Path on disk
    pub path: PathBuf,
    /// Input position on the command line (video is 0)
    pub ordinal: usize,
}

/// Resolution of one canonical slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackAssignment {
    pub slot: LanguageSlot,
    /// Language whose audio actually plays in this slot
    pub resolved_language: String,
    /// True when the slot has no file of its own
    pub is_borrowed: bool,
}

impl TrackAssignment {
    pub fn is_stereo(&self) -> bool {
        self.slot.is_stereo
    }
}

/// Output of the slot planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotPlan {
    /// One assignment per canonical slot, in slot order
    pub assignments: Vec<TrackAssignment>,
    /// Referenced audio files in first-referenced order
    pub sources: Vec<SourceFile>,
    pub fallback_language: String,
}

impl SlotPlan {
    /// Number of slots filled from the fallback language
    pub fn borrowed_count(&self) -> usize {
        self.assignments.iter().filter(|a| a.is_borrowed).count()
    }

    /// Source for a language, if it is referenced by any slot
    pub fn source(&self, language: &str) -> Option<&SourceFile> {
        self.sources.iter().find(|s| s.language == language)
    }
}

/// Assign every canonical slot either its own file or the fallback's
pub fn plan_slots(table: &LanguageTable, request: &MuxRequest) -> Result<SlotPlan> {
    let fallback = request.fallback();

    if !table.contains(&fallback) {
        return Err(MuxError::Configuration(format!(
            "fallback language {:?} is not one of the canonical languages",
            fallback
        )));
    }
    let fallback_path = request.audio_file(&fallback).ok_or_else(|| {
        MuxError::Configuration(format!(
            "no audio file supplied for fallback language {:?}",
            fallback
        ))
    })?;

    for code in request.audio_files.keys() {
        if !table.contains(&normalize_code(code)) {
            tracing::warn!(
                "Ignoring audio file for {:?}: not a canonical language",
                code
            );
        }
    }

    let mut assignments = Vec::with_capacity(table.slots().len());
    let mut sources: Vec<SourceFile> = Vec::new();

    for slot in table.slots() {
        let (resolved_language, path, is_borrowed) = match request.audio_file(&slot.language) {
            Some(path) => (slot.language.clone(), path, false),
            None => (fallback.clone(), fallback_path, true),
        };

        if !sources.iter().any(|s| s.language == resolved_language) {
            sources.push(SourceFile {
                language: resolved_language.clone(),
                path: path.to_path_buf(),
                ordinal: sources.len() + 1,
            });
        }

        tracing::debug!(
            slot = slot.index,
            language = %slot.language,
            resolved = %resolved_language,
            borrowed = is_borrowed,
            "Slot assigned"
        );

        assignments.push(TrackAssignment {
            slot: slot.clone(),
            resolved_language,
            is_borrowed,
        });
    }

    Ok(SlotPlan {
        assignments,
        sources,
        fallback_language: fallback,
    })
}
