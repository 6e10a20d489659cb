//! Conflict policy between a requested tone and a detected one.
//!
//! Mirrors the agreement check a classifier does against ground truth
//! (`predicted` / `confirmed` / `conflict`), but here the "ground truth" is the
//! user's request and we only ever warn, never override.

use crate::tone::ToneLabel;

/// Groups of tones considered compatible. Labels in the same class never warn.
pub static EQUIVALENCE_CLASSES: &[&[ToneLabel]] = &[&[
    ToneLabel::Business,
    ToneLabel::Email,
    ToneLabel::Report,
]];

/// Decide whether to warn that `requested` disagrees with `detected`.
///
/// Returns `None` when detection failed (sentinel), when the labels match, or
/// when both fall in one equivalence class.
pub fn resolve_conflict(requested: ToneLabel, detected: ToneLabel) -> Option<String> {
    ConflictResolver::default().resolve(requested, detected)
}

/// Conflict policy over an explicit equivalence table.
#[derive(Debug, Clone, Copy)]
pub struct ConflictResolver {
    classes: &'static [&'static [ToneLabel]],
}

impl Default for ConflictResolver {
    fn default() -> Self {
        Self::new(EQUIVALENCE_CLASSES)
    }
}

impl ConflictResolver {
    pub fn new(classes: &'static [&'static [ToneLabel]]) -> Self {
        Self { classes }
    }

    /// True when `a` and `b` are the same label or share a class.
    pub fn compatible(&self, a: ToneLabel, b: ToneLabel) -> bool {
        a == b
            || self
                .classes
                .iter()
                .any(|class| class.contains(&a) && class.contains(&b))
    }

    pub fn resolve(&self, requested: ToneLabel, detected: ToneLabel) -> Option<String> {
        if detected.is_sentinel() || requested.is_sentinel() {
            return None;
        }
        if self.compatible(requested, detected) {
            return None;
        }
        Some(format!(
            "The text reads as '{}'. Continuing with the requested '{}' tone may cause \
             a semantic or tonal mismatch.",
            detected.as_str().to_uppercase(),
            requested.as_str().to_uppercase(),
        ))
    }
}
