//! The closed tone vocabulary shared by the classifier and the conflict policy.
//!
//! Twelve tones plus four terminal sentinels that stand in for a failed or
//! skipped detection. Labels travel as snake_case English names; the Turkish
//! labels used by earlier prompts are accepted when parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseToneError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ToneLabel {
    Formal,
    Business,
    Casual,
    Academic,
    Ethical,
    Apology,
    Supportive,
    Promotional,
    Email,
    Report,
    Neutral,
    Rude,
    /// The classification service could not be reached.
    ConnectionError,
    /// The classification service answered with something we could not read.
    Unparseable,
    /// The service answered but named no label from the vocabulary.
    Undetermined,
    /// There was no text to classify.
    Empty,
}

impl ToneLabel {
    /// Every label, tones first, then sentinels.
    pub const ALL: [ToneLabel; 16] = [
        Self::Formal,
        Self::Business,
        Self::Casual,
        Self::Academic,
        Self::Ethical,
        Self::Apology,
        Self::Supportive,
        Self::Promotional,
        Self::Email,
        Self::Report,
        Self::Neutral,
        Self::Rude,
        Self::ConnectionError,
        Self::Unparseable,
        Self::Undetermined,
        Self::Empty,
    ];

    /// The vocabulary offered to the classifier (no sentinels).
    pub const TONES: [ToneLabel; 12] = [
        Self::Formal,
        Self::Business,
        Self::Casual,
        Self::Academic,
        Self::Ethical,
        Self::Apology,
        Self::Supportive,
        Self::Promotional,
        Self::Email,
        Self::Report,
        Self::Neutral,
        Self::Rude,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Formal => "formal",
            Self::Business => "business",
            Self::Casual => "casual",
            Self::Academic => "academic",
            Self::Ethical => "ethical",
            Self::Apology => "apology",
            Self::Supportive => "supportive",
            Self::Promotional => "promotional",
            Self::Email => "email",
            Self::Report => "report",
            Self::Neutral => "neutral",
            Self::Rude => "rude",
            Self::ConnectionError => "connection_error",
            Self::Unparseable => "unparseable",
            Self::Undetermined => "undetermined",
            Self::Empty => "empty",
        }
    }

    /// Turkish label, as used in prompts for the Turkish locale.
    pub fn turkish(&self) -> &'static str {
        match self {
            Self::Formal => "resmi",
            Self::Business => "is",
            Self::Casual => "samimi",
            Self::Academic => "akademik",
            Self::Ethical => "etik",
            Self::Apology => "ozur",
            Self::Supportive => "destek",
            Self::Promotional => "tanitim",
            Self::Email => "mail",
            Self::Report => "rapor",
            Self::Neutral => "nötr",
            Self::Rude => "kaba",
            Self::ConnectionError => "bağlantı_hatası",
            Self::Unparseable => "ayrıştırma_hatası",
            Self::Undetermined => "belirlenemedi",
            Self::Empty => "boş",
        }
    }

    /// True for the terminal error/unknown labels.
    pub fn is_sentinel(&self) -> bool {
        matches!(
            self,
            Self::ConnectionError | Self::Unparseable | Self::Undetermined | Self::Empty
        )
    }
}

impl fmt::Display for ToneLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToneLabel {
    type Err = ParseToneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|label| label.as_str() == needle || label.turkish() == needle)
            .ok_or_else(|| ParseToneError(s.to_string()))
    }
}

impl TryFrom<String> for ToneLabel {
    type Error = ParseToneError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A detected tone with the classifier's confidence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub label: ToneLabel,
    /// Confidence in [0.0, 1.0].
    pub score: f32,
}

impl Detection {
    /// Build a detection, clamping the score into [0, 1]. NaN becomes 0.
    pub fn new(label: ToneLabel, score: f32) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(0.0, 1.0)
        };
        Self { label, score }
    }

    /// A zero-confidence sentinel detection. A real tone passed here is
    /// recorded as `undetermined`, so a sentinel always carries score 0.
    pub fn sentinel(label: ToneLabel) -> Self {
        let label = if label.is_sentinel() {
            label
        } else {
            ToneLabel::Undetermined
        };
        Self { label, score: 0.0 }
    }
}
