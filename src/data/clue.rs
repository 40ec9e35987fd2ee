//! Clues the player pulls into analysis

use serde::{Deserialize, Serialize};

/// Separator between clue id and validity flag in a text link id
pub const LINK_SEPARATOR: char = '|';

/// A clue sitting in the analysis pool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClueEntry {
    pub clue_id: String,
    pub label: String,
    /// Whether this clue counts toward the score (false for decoys)
    pub is_valid: bool,
}

impl ClueEntry {
    pub fn new(clue_id: &str, label: &str, is_valid: bool) -> Self {
        Self {
            clue_id: clue_id.to_string(),
            label: label.to_string(),
            is_valid,
        }
    }
}

/// Split a link id of the form `"android_core|true"` into clue id and validity.
///
/// A missing or unparsable flag makes the clue a decoy.
pub fn parse_link_id(link_id: &str) -> (&str, bool) {
    let mut parts = link_id.split(LINK_SEPARATOR);
    let clue_id = parts.next().unwrap_or(link_id);
    let is_valid = parts
        .next()
        .is_some_and(|flag| flag.trim().eq_ignore_ascii_case("true"));
    (clue_id, is_valid)
}
