//! Tone presets and their descriptors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Stylistic preset applied to a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Tone {
    #[default]
    Clean,
    Playful,
    Luxury,
}

/// Lookup table indexed by `Tone as usize`: (value, label, descriptor).
const TONE_TABLE: [(&str, &str, &str); 3] = [
    (
        "clean",
        "Clean",
        "Clear message, minimal visual noise, sharp structure",
    ),
    (
        "playful",
        "Playful",
        "Friendly language, vibrant energy, lightweight interactions",
    ),
    (
        "luxury",
        "Luxury",
        "Premium tone, elegant spacing, confidence-building copy",
    ),
];

impl Tone {
    /// All tones in display order.
    pub const ALL: [Tone; 3] = [Tone::Clean, Tone::Playful, Tone::Luxury];

    /// Lowercase identifier (e.g., "playful").
    pub fn as_str(self) -> &'static str {
        TONE_TABLE[self as usize].0
    }

    /// Human-readable label for selectors.
    pub fn label(self) -> &'static str {
        TONE_TABLE[self as usize].1
    }

    /// Sentence fragment woven into the sub-headline.
    pub fn descriptor(self) -> &'static str {
        TONE_TABLE[self as usize].2
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ParseToneError(s.to_string()))
    }
}

impl TryFrom<String> for Tone {
    type Error = ParseToneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Error returned when text does not name a known tone.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tone '{0}': expected one of clean, playful, luxury")]
pub struct ParseToneError(pub String);
