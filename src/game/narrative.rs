//! Bridge to the dialogue engine
//!
//! The engine never interprets variable keys; it hands them over here.

use super::analysis::Classification;
use crate::data::SuspectRuntime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Callbacks into the external narrative / dialogue engine
pub trait NarrativeHooks {
    /// Called after every non-empty analysis
    fn on_classified(&mut self, _suspect: &SuspectRuntime, _classification: Classification) {}

    /// Set each key to a truthy flag, in the order given
    fn set_flags(&mut self, suspect_id: &str, keys: &[String]);
}

/// A flag write as seen by the dialogue engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagWrite {
    pub suspect_id: String,
    pub key: String,
}

/// In-memory flag store standing in for the dialogue engine's variables
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlagLedger {
    pub flags: HashMap<String, bool>,
    pub writes: Vec<FlagWrite>,
    pub classifications: Vec<(String, Classification)>,
}

impl FlagLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }
}

impl NarrativeHooks for FlagLedger {
    fn on_classified(&mut self, suspect: &SuspectRuntime, classification: Classification) {
        self.classifications
            .push((suspect.id().to_string(), classification));
    }

    fn set_flags(&mut self, suspect_id: &str, keys: &[String]) {
        for key in keys {
            self.flags.insert(key.clone(), true);
            self.writes.push(FlagWrite {
                suspect_id: suspect_id.to_string(),
                key: key.clone(),
            });
        }
    }
}

/// Hooks that discard everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNarrative;

impl NarrativeHooks for NoNarrative {
    fn set_flags(&mut self, _suspect_id: &str, _keys: &[String]) {}
}
