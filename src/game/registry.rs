//! Suspect registry
//!
//! Owns every suspect's runtime record for the session, keyed by suspect id.

use crate::data::{SuspectProfile, SuspectRecord, SuspectRuntime};
use crate::{CaseError, Result};
use std::collections::HashMap;
use tracing::{error, info, warn};

/// Summary of a registry load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitReport {
    pub loaded: usize,
    /// Null entries that were skipped
    pub skipped: usize,
    /// Ids dropped because an earlier profile already claimed them
    pub duplicates: Vec<String>,
}

/// Maps suspect ids to their runtime records
#[derive(Debug, Clone, Default)]
pub struct SuspectRegistry {
    suspects: HashMap<String, SuspectRuntime>,
}

impl SuspectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry in one step, discarding the load report
    pub fn from_profiles<I, P>(profiles: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Option<SuspectProfile>>,
    {
        let mut registry = Self::new();
        registry.initialize(profiles);
        registry
    }

    /// Replace all state with fresh runtime records for `profiles`.
    ///
    /// `None` entries are skipped. When two profiles share an id the first one
    /// is kept and the later one is reported as a duplicate.
    pub fn initialize<I, P>(&mut self, profiles: I) -> InitReport
    where
        I: IntoIterator<Item = P>,
        P: Into<Option<SuspectProfile>>,
    {
        self.suspects.clear();
        let mut report = InitReport::default();

        for profile in profiles {
            let Some(profile) = profile.into() else {
                report.skipped += 1;
                continue;
            };

            if self.suspects.contains_key(&profile.id) {
                warn!("{}", CaseError::DuplicateKey(profile.id.clone()));
                report.duplicates.push(profile.id);
                continue;
            }

            self.suspects
                .insert(profile.id.clone(), SuspectRuntime::new(profile));
        }

        report.loaded = self.suspects.len();
        info!("Initialized {} suspects", report.loaded);
        report
    }

    pub fn get(&self, id: &str) -> Option<&SuspectRuntime> {
        self.suspects.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut SuspectRuntime> {
        self.suspects.get_mut(id)
    }

    /// Look up a suspect the caller expects to exist, logging when it does not
    pub fn require(&self, id: &str) -> Result<&SuspectRuntime> {
        self.suspects.get(id).ok_or_else(|| {
            let err = CaseError::NotFound(id.to_string());
            error!("{}", err);
            err
        })
    }

    pub fn contains(&self, id: &str) -> bool {
        self.suspects.contains_key(id)
    }

    pub fn get_all(&self) -> &HashMap<String, SuspectRuntime> {
        &self.suspects
    }

    pub fn len(&self) -> usize {
        self.suspects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suspects.is_empty()
    }

    /// Persisted state of every suspect, sorted by id
    pub fn export_state(&self) -> Vec<SuspectRecord> {
        let mut records: Vec<SuspectRecord> =
            self.suspects.values().map(SuspectRuntime::record).collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        records
    }

    /// Restore persisted state; returns how many records matched a suspect
    pub fn apply_state(&mut self, records: &[SuspectRecord]) -> usize {
        let mut applied = 0;
        for record in records {
            match self.suspects.get_mut(&record.id) {
                Some(suspect) => {
                    suspect.apply_record(record);
                    applied += 1;
                }
                None => warn!("Ignoring saved state for unknown suspect {}", record.id),
            }
        }
        applied
    }
}
