//! Canonical broadcast language table
//!
//! The playout hardware expects 12 languages in a fixed priority order.
//! The first [`STEREO_SLOTS`] occupy stereo pairs, the rest single mono tracks,
//! for a total of [`AUDIO_TRACK_COUNT`] physical audio tracks.

use regex::Regex;

use crate::error::{MuxError, Result};

/// Number of canonical language slots
pub const SLOT_COUNT: usize = 12;

/// Slots with an index below this are stereo
pub const STEREO_SLOTS: usize = 4;

/// Physical audio tracks in the output multiplex
pub const AUDIO_TRACK_COUNT: usize = STEREO_SLOTS * 2 + (SLOT_COUNT - STEREO_SLOTS);

/// Default broadcast priority order
pub const BROADCAST_ORDER: [&str; SLOT_COUNT] = [
    "nor", "deu", "nld", "eng", "fra", "spa", "fin", "rus", "por", "ron", "tur", "pol",
];

/// One canonical position in the output multiplex
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSlot {
    /// Position in priority order (0..12)
    pub index: usize,
    /// Three-letter language code
    pub language: String,
    /// Whether the slot occupies a stereo pair
    pub is_stereo: bool,
}

impl LanguageSlot {
    /// Number of physical tracks this slot produces
    pub fn track_count(&self) -> usize {
        if self.is_stereo {
            2
        } else {
            1
        }
    }
}

/// Ordered, validated list of the 12 canonical languages
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTable {
    slots: Vec<LanguageSlot>,
}

impl LanguageTable {
    /// Build a table from codes in priority order
    pub fn new<S: AsRef<str>>(codes: &[S]) -> Result<Self> {
        if codes.len() != SLOT_COUNT {
            return Err(MuxError::Configuration(format!(
                "language table needs exactly {} codes, got {}",
                SLOT_COUNT,
                codes.len()
            )));
        }

        let code_re = Regex::new(r"^[a-z]{3}$")
            .map_err(|e| MuxError::Configuration(format!("invalid code pattern: {}", e)))?;

        let mut slots: Vec<LanguageSlot> = Vec::with_capacity(SLOT_COUNT);
        for (index, code) in codes.iter().enumerate() {
            let language = normalize_code(code.as_ref());
            if !code_re.is_match(&language) {
                return Err(MuxError::Configuration(format!(
                    "invalid language code {:?} at slot {}",
                    code.as_ref(),
                    index
                )));
            }
            if slots.iter().any(|s| s.language == language) {
                return Err(MuxError::Configuration(format!(
                    "duplicate language code {:?} in table",
                    language
                )));
            }
            slots.push(LanguageSlot {
                index,
                language,
                is_stereo: index < STEREO_SLOTS,
            });
        }

        Ok(Self { slots })
    }

    /// The broadcast contract's default order
    pub fn broadcast() -> Self {
        let slots = BROADCAST_ORDER
            .iter()
            .enumerate()
            .map(|(index, code)| LanguageSlot {
                index,
                language: code.to_string(),
                is_stereo: index < STEREO_SLOTS,
            })
            .collect();
        Self { slots }
    }

    /// Slots in priority order
    pub fn slots(&self) -> &[LanguageSlot] {
        &self.slots
    }

    /// Look up the slot owned by a language
    pub fn slot_for(&self, language: &str) -> Option<&LanguageSlot> {
        self.slots.iter().find(|s| s.language == language)
    }

    pub fn contains(&self, language: &str) -> bool {
        self.slot_for(language).is_some()
    }

    /// Codes in priority order
    pub fn codes(&self) -> Vec<&str> {
        self.slots.iter().map(|s| s.language.as_str()).collect()
    }
}

impl Default for LanguageTable {
    fn default() -> Self {
        Self::broadcast()
    }
}

/// Lowercase and trim a caller-supplied language code
pub fn normalize_code(code: &str) -> String {
    code.trim().to_lowercase()
}
