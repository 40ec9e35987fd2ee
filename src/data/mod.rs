//! Data structures for the case
//!
//! Defines suspects, their question tiers, and the clues under analysis.

pub mod clue;
pub mod suspect;

pub use clue::*;
pub use suspect::*;

use serde::{Deserialize, Serialize};

/// Severity of a message shown to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Info,
    Notice,
    Warning,
}

impl Severity {
    pub fn symbol(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Notice => "◆",
            Severity::Warning => "▲",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Info => write!(f, "INFO"),
            Severity::Notice => write!(f, "NOTICE"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}
