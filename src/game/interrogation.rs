//! Interrogation question selection
//!
//! After a successful analysis the player picks up to [`MAX_SELECTION`]
//! questions from the matched tier, then commits the choice.

use super::registry::SuspectRegistry;
use crate::data::ScoreTier;
use crate::{CaseError, MAX_SELECTION};
use std::collections::HashSet;
use tracing::{debug, warn};

/// Result of a toggle request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// Already in the requested state
    Unchanged,
    /// Selection is full; the toggle was reverted to off
    CapExceeded,
    UnknownQuestion,
    NotOpen,
}

/// The question panel while it is open
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenSelection {
    pub suspect_id: String,
    pub tier: ScoreTier,
    selected: HashSet<String>,
}

impl OpenSelection {
    pub fn is_selected(&self, variable_key: &str) -> bool {
        self.selected.contains(variable_key)
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    /// Selected keys in tier declaration order
    pub fn ordered_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = Vec::with_capacity(self.selected.len());
        for q in &self.tier.questions {
            if self.selected.contains(&q.variable_key) && !keys.contains(&q.variable_key) {
                keys.push(q.variable_key.clone());
            }
        }
        keys
    }
}

/// Selection state machine: hidden, or open over one tier
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum InterrogationState {
    #[default]
    Hidden,
    Open(OpenSelection),
}

impl InterrogationState {
    pub fn new() -> Self {
        Self::Hidden
    }

    /// Open the panel over a freshly matched tier, discarding any previous selection
    pub fn open(&mut self, suspect_id: &str, tier: ScoreTier) {
        *self = InterrogationState::Open(OpenSelection {
            suspect_id: suspect_id.to_string(),
            tier,
            selected: HashSet::new(),
        });
    }

    /// Close the panel without committing
    pub fn dismiss(&mut self) {
        *self = InterrogationState::Hidden;
    }

    pub fn is_open(&self) -> bool {
        matches!(self, InterrogationState::Open(_))
    }

    pub fn current(&self) -> Option<&OpenSelection> {
        match self {
            InterrogationState::Open(open) => Some(open),
            InterrogationState::Hidden => None,
        }
    }

    pub fn count(&self) -> usize {
        self.current().map_or(0, OpenSelection::count)
    }

    pub fn toggle(&mut self, variable_key: &str, want_on: bool) -> ToggleOutcome {
        let InterrogationState::Open(open) = self else {
            debug!("Toggle of {} ignored, no question panel open", variable_key);
            return ToggleOutcome::NotOpen;
        };

        if !open.tier.has_question(variable_key) {
            debug!("Toggle of unknown question {}", variable_key);
            return ToggleOutcome::UnknownQuestion;
        }

        if !want_on {
            return if open.selected.remove(variable_key) {
                ToggleOutcome::Deselected
            } else {
                ToggleOutcome::Unchanged
            };
        }

        if open.selected.contains(variable_key) {
            return ToggleOutcome::Unchanged;
        }

        if open.selected.len() >= MAX_SELECTION {
            warn!(
                "{}",
                CaseError::CapExceeded {
                    key: variable_key.to_string(),
                    cap: MAX_SELECTION,
                }
            );
            return ToggleOutcome::CapExceeded;
        }

        open.selected.insert(variable_key.to_string());
        ToggleOutcome::Selected
    }

    /// Commit the selection: mark the suspect interrogated, close the panel
    /// and return the chosen keys in tier order. No-op unless open.
    pub fn finalize(&mut self, registry: &mut SuspectRegistry) -> Option<Vec<String>> {
        let InterrogationState::Open(open) = std::mem::take(self) else {
            debug!("Finalize ignored, no question panel open");
            return None;
        };

        match registry.get_mut(&open.suspect_id) {
            Some(suspect) => suspect.is_interrogated = true,
            None => warn!("Finalized questions for unknown suspect {}", open.suspect_id),
        }

        Some(open.ordered_keys())
    }
}
