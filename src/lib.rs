//! Case Analysis: the deduction loop of a detective game
//!
//! The player pulls clues out of narrative text into an analysis pool,
//! submits the pool for scoring, and the score picks the set of
//! interrogation questions offered for the suspect currently in focus.
//!
//! # Architecture
//!
//! - `data` - Suspect profiles, score tiers, clue entries
//! - `game` - Registry, daily lineup, clue pool, scoring, interrogation selection
//! - `catalog` - TOML case catalogue loading
//!
//! Every engine component is an owned value; [`game::CaseSession`] wires them
//! together for a presentation layer that wants a single entry point.

pub mod catalog;
pub mod data;
pub mod game;

pub use catalog::CaseCatalog;
pub use data::*;
pub use game::{CaseSession, SuspectRegistry};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Maximum number of questions the player may pick from one tier
pub const MAX_SELECTION: usize = 3;

/// Result type for the engine
pub type Result<T> = std::result::Result<T, CaseError>;

/// Error kinds surfaced by the engine and its loaders
#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Suspect not found: {0}")]
    NotFound(String),

    #[error("Duplicate suspect id: {0}")]
    DuplicateKey(String),

    #[error("Selection cap of {cap} reached, cannot select {key}")]
    CapExceeded { key: String, cap: usize },

    #[error("No question tier matches score {score} for suspect {suspect}")]
    Mismatch { suspect: String, score: u32 },

    #[error("Invalid tier for suspect {suspect}: min {min} > max {max}")]
    InvalidTier { suspect: String, min: u32, max: u32 },

    #[error("Catalogue error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
