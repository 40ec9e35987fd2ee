//! Case catalogue loading
//!
//! A catalogue is a TOML file listing every suspect with their question
//! tiers, plus an optional daily lineup.

use crate::data::SuspectProfile;
use crate::{CaseError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

/// Contents of a case catalogue file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseCatalog {
    /// Suspect ids in play today; every suspect when absent
    #[serde(default)]
    pub lineup: Option<Vec<String>>,
    #[serde(default)]
    pub suspects: Vec<SuspectProfile>,
}

impl CaseCatalog {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let catalog: CaseCatalog =
            toml::from_str(content).map_err(|e| CaseError::Config(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let catalog = Self::from_toml_str(&content)?;
        info!(
            "Loaded case catalogue {:?} with {} suspects",
            path,
            catalog.suspects.len()
        );
        Ok(catalog)
    }

    /// Reject inverted tier ranges and repeated question keys within a tier.
    /// Duplicate suspect ids are left to the registry.
    pub fn validate(&self) -> Result<()> {
        for suspect in &self.suspects {
            if suspect.id.trim().is_empty() {
                return Err(CaseError::Config("suspect with empty id".to_string()));
            }
            for tier in &suspect.tier_table {
                if tier.min_score > tier.max_score {
                    return Err(CaseError::InvalidTier {
                        suspect: suspect.id.clone(),
                        min: tier.min_score,
                        max: tier.max_score,
                    });
                }
                let mut keys = HashSet::new();
                for question in &tier.questions {
                    if !keys.insert(question.variable_key.as_str()) {
                        return Err(CaseError::Config(format!(
                            "suspect {} repeats question {} within one tier",
                            suspect.id, question.variable_key
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    pub fn lineup_ids(&self) -> Vec<String> {
        match &self.lineup {
            Some(ids) => ids.clone(),
            None => self.suspects.iter().map(|s| s.id.clone()).collect(),
        }
    }
}
