//! Suspect profiles and their per-session runtime state

use serde::{Deserialize, Serialize};

/// A question the player can put to a suspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterrogationQuestion {
    /// Opaque token handed to the dialogue engine when the question is chosen
    pub variable_key: String,
    pub display_text: String,
}

impl InterrogationQuestion {
    pub fn new(variable_key: &str, display_text: &str) -> Self {
        Self {
            variable_key: variable_key.to_string(),
            display_text: display_text.to_string(),
        }
    }
}

/// An inclusive score range mapped to a set of questions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTier {
    pub min_score: u32,
    pub max_score: u32,
    #[serde(default)]
    pub questions: Vec<InterrogationQuestion>,
}

impl ScoreTier {
    pub fn new(min_score: u32, max_score: u32, questions: Vec<InterrogationQuestion>) -> Self {
        Self {
            min_score,
            max_score,
            questions,
        }
    }

    pub fn contains(&self, score: u32) -> bool {
        self.min_score <= score && score <= self.max_score
    }

    pub fn has_question(&self, variable_key: &str) -> bool {
        self.questions.iter().any(|q| q.variable_key == variable_key)
    }
}

/// Static suspect data, loaded once from the case catalogue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectProfile {
    pub id: String,
    pub display_name: String,
    #[serde(default)]
    pub profile_text: String,
    /// Tiers in declaration order; the first matching tier wins
    #[serde(default, rename = "tiers")]
    pub tier_table: Vec<ScoreTier>,
}

impl SuspectProfile {
    pub fn new(id: &str, display_name: &str) -> Self {
        Self {
            id: id.to_string(),
            display_name: display_name.to_string(),
            profile_text: String::new(),
            tier_table: Vec::new(),
        }
    }

    pub fn with_profile_text(mut self, text: &str) -> Self {
        self.profile_text = text.to_string();
        self
    }

    pub fn with_tier(mut self, tier: ScoreTier) -> Self {
        self.tier_table.push(tier);
        self
    }
}

/// Mutable state tracked for one suspect over the session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectRuntime {
    pub profile: SuspectProfile,
    pub is_discovered: bool,
    pub is_interrogated: bool,
    /// Dialogue progress owned by the narrative engine; stored and forwarded untouched
    pub narrative_state: String,
}

impl SuspectRuntime {
    pub fn new(profile: SuspectProfile) -> Self {
        Self {
            profile,
            is_discovered: false,
            is_interrogated: false,
            narrative_state: String::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.profile.id
    }

    pub fn display_name(&self) -> &str {
        &self.profile.display_name
    }

    /// Extract the persisted part of this suspect's state
    pub fn record(&self) -> SuspectRecord {
        SuspectRecord {
            id: self.profile.id.clone(),
            is_discovered: self.is_discovered,
            is_interrogated: self.is_interrogated,
            narrative_state: self.narrative_state.clone(),
        }
    }

    pub fn apply_record(&mut self, record: &SuspectRecord) {
        self.is_discovered = record.is_discovered;
        self.is_interrogated = record.is_interrogated;
        self.narrative_state = record.narrative_state.clone();
    }
}

/// Per-suspect state consumed by an external save system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspectRecord {
    pub id: String,
    pub is_discovered: bool,
    pub is_interrogated: bool,
    #[serde(default)]
    pub narrative_state: String,
}
