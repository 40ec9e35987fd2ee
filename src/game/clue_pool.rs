//! The analysis pool of clues gathered for the focused suspect

use crate::data::ClueEntry;
use tracing::debug;

/// Clues currently in analysis, in insertion order, unique by clue id
#[derive(Debug, Clone, Default)]
pub struct CluePool {
    entries: Vec<ClueEntry>,
}

impl CluePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a clue; returns false if a clue with this id is already pooled
    pub fn add_clue(&mut self, clue_id: &str, label: &str, is_valid: bool) -> bool {
        if self.contains(clue_id) {
            debug!("Clue {} already in pool", clue_id);
            return false;
        }
        self.entries.push(ClueEntry::new(clue_id, label, is_valid));
        true
    }

    /// Remove a clue; returns false if it was not pooled
    pub fn remove_clue(&mut self, clue_id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.clue_id != clue_id);
        self.entries.len() != before
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn contains(&self, clue_id: &str) -> bool {
        self.entries.iter().any(|e| e.clue_id == clue_id)
    }

    pub fn snapshot(&self) -> &[ClueEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
