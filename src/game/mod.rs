//! Core case logic and state management

pub mod analysis;
pub mod clue_pool;
pub mod events;
pub mod interrogation;
pub mod lineup;
pub mod narrative;
pub mod registry;

pub use analysis::{AnalysisOutcome, Classification, MismatchReason, TierResolution};
pub use clue_pool::CluePool;
pub use events::{FocusBus, SubscriptionHandle};
pub use interrogation::{InterrogationState, OpenSelection, ToggleOutcome};
pub use lineup::LineupSelector;
pub use narrative::{FlagLedger, NarrativeHooks, NoNarrative};
pub use registry::{InitReport, SuspectRegistry};

use crate::catalog::CaseCatalog;
use crate::data::*;
use crate::{CaseError, MAX_SELECTION};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// A message for the presentation layer to show the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaseMessage {
    pub timestamp: DateTime<Utc>,
    pub severity: Severity,
    pub source: String,
    pub message: String,
}

impl CaseMessage {
    pub fn info(source: &str, message: &str) -> Self {
        Self::alert(Severity::Info, source, message)
    }

    pub fn alert(severity: Severity, source: &str, message: &str) -> Self {
        Self {
            timestamp: Utc::now(),
            severity,
            source: source.to_string(),
            message: message.to_string(),
        }
    }
}

/// One analysis scene: every engine component, wired together.
///
/// Focus changes always flush the clue pool and close the question panel
/// before subscribers are notified.
pub struct CaseSession<N: NarrativeHooks = NoNarrative> {
    registry: SuspectRegistry,
    lineup: LineupSelector,
    pool: CluePool,
    interrogation: InterrogationState,
    narrative: N,
    message_log: Vec<CaseMessage>,
}

impl<N: NarrativeHooks> CaseSession<N> {
    pub fn new(registry: SuspectRegistry, narrative: N) -> Self {
        Self {
            registry,
            lineup: LineupSelector::new(),
            pool: CluePool::new(),
            interrogation: InterrogationState::new(),
            narrative,
            message_log: Vec::new(),
        }
    }

    /// Build a session from a loaded catalogue and set up its daily lineup
    pub fn from_catalog(catalog: CaseCatalog, narrative: N) -> Self {
        let lineup = catalog.lineup_ids();
        let mut registry = SuspectRegistry::new();
        let report = registry.initialize(catalog.suspects);

        let mut session = Self::new(registry, narrative);
        for id in &report.duplicates {
            session.add_message(CaseMessage::alert(
                Severity::Warning,
                "Registry",
                &CaseError::DuplicateKey(id.clone()).to_string(),
            ));
        }
        session.setup_lineup(&lineup);
        session
    }

    pub fn add_message(&mut self, message: CaseMessage) {
        self.message_log.push(message);
    }

    pub fn messages(&self) -> &[CaseMessage] {
        &self.message_log
    }

    pub fn registry(&self) -> &SuspectRegistry {
        &self.registry
    }

    pub fn lineup(&self) -> &LineupSelector {
        &self.lineup
    }

    pub fn pool(&self) -> &[ClueEntry] {
        self.pool.snapshot()
    }

    pub fn interrogation(&self) -> &InterrogationState {
        &self.interrogation
    }

    pub fn narrative(&self) -> &N {
        &self.narrative
    }

    pub fn narrative_mut(&mut self) -> &mut N {
        &mut self.narrative
    }

    pub fn focused(&self) -> Option<&SuspectRuntime> {
        self.lineup.focused(&self.registry)
    }

    pub fn subscribe_focus<F>(&mut self, handler: F) -> SubscriptionHandle
    where
        F: FnMut(&SuspectRuntime) + 'static,
    {
        self.lineup.subscribe(handler)
    }

    pub fn unsubscribe_focus(&mut self, handle: SubscriptionHandle) -> bool {
        self.lineup.unsubscribe(handle)
    }

    pub fn setup_lineup<S: AsRef<str>>(&mut self, ids: &[S]) {
        if let Some(first) = self.lineup.assign_lineup(&self.registry, ids) {
            self.set_focused(&first);
        }
    }

    /// Focus a suspect. Unknown ids are ignored and leave all state intact.
    pub fn set_focused(&mut self, id: &str) -> bool {
        if !self.registry.contains(id) {
            debug!("Ignoring focus request for unknown suspect {}", id);
            return false;
        }

        self.pool.clear();
        self.interrogation.dismiss();
        self.lineup.set_focused(&self.registry, id)
    }

    pub fn add_clue(&mut self, clue_id: &str, label: &str, is_valid: bool) -> bool {
        self.pool.add_clue(clue_id, label, is_valid)
    }

    /// Add a clue from a text link id such as `"android_core|true"`
    pub fn add_clue_from_link(&mut self, link_id: &str, label: &str) -> bool {
        let (clue_id, is_valid) = parse_link_id(link_id);
        self.pool.add_clue(clue_id, label, is_valid)
    }

    pub fn remove_clue(&mut self, clue_id: &str) -> bool {
        self.pool.remove_clue(clue_id)
    }

    pub fn clear_clues(&mut self) {
        self.pool.clear();
    }

    /// Score the pool against the focused suspect.
    ///
    /// Returns `None` with no focus or an empty pool. On a tier match the
    /// question panel opens with an empty selection.
    pub fn analyze(&mut self) -> Option<AnalysisOutcome> {
        let Some(suspect) = self.lineup.focused(&self.registry) else {
            debug!("Analysis requested with no focused suspect");
            return None;
        };
        let outcome = analysis::analyze(self.pool.snapshot(), &suspect.profile)?;
        let suspect_id = outcome.suspect_id.clone();

        info!(
            "Case analysis for {}: {}/{} ({:?})",
            suspect_id, outcome.score, outcome.total, outcome.classification
        );

        if outcome.classification == Classification::Perfect {
            if let Some(suspect) = self.registry.get_mut(&suspect_id) {
                suspect.is_discovered = true;
            }
        }
        if let Some(suspect) = self.registry.get(&suspect_id) {
            self.narrative.on_classified(suspect, outcome.classification);
        }

        self.add_message(CaseMessage::info(
            "Analysis",
            &format!(
                "Score {}/{}. {}",
                outcome.score,
                outcome.total,
                outcome.classification.description()
            ),
        ));

        match &outcome.resolution {
            TierResolution::Matched { tier, .. } => {
                self.interrogation.open(&suspect_id, tier.clone());
            }
            TierResolution::Mismatch(reason) => {
                let err = CaseError::Mismatch {
                    suspect: suspect_id.clone(),
                    score: outcome.score,
                };
                info!("{} ({:?})", err, reason);
                self.interrogation.dismiss();
                self.add_message(CaseMessage::alert(
                    Severity::Notice,
                    "Analysis",
                    &err.to_string(),
                ));
            }
        }

        Some(outcome)
    }

    pub fn toggle(&mut self, variable_key: &str, want_on: bool) -> ToggleOutcome {
        let outcome = self.interrogation.toggle(variable_key, want_on);
        if outcome == ToggleOutcome::CapExceeded {
            self.add_message(CaseMessage::alert(
                Severity::Warning,
                "Interrogation",
                &format!("You can only pick {} questions.", MAX_SELECTION),
            ));
        }
        outcome
    }

    /// Commit the chosen questions and hand their keys to the narrative engine
    pub fn finalize(&mut self) -> Option<Vec<String>> {
        let suspect_id = self.interrogation.current()?.suspect_id.clone();
        let keys = self.interrogation.finalize(&mut self.registry)?;

        self.pool.clear();
        self.narrative.set_flags(&suspect_id, &keys);
        info!("Interrogation of {} committed: {:?}", suspect_id, keys);
        self.add_message(CaseMessage::info(
            "Interrogation",
            &format!("{} question(s) prepared.", keys.len()),
        ));

        Some(keys)
    }

    pub fn export_state(&self) -> Vec<SuspectRecord> {
        self.registry.export_state()
    }

    pub fn apply_state(&mut self, records: &[SuspectRecord]) -> usize {
        self.registry.apply_state(records)
    }

    /// One-line summary of the scene
    pub fn check_status(&self) -> String {
        let focused = self
            .focused()
            .map(|s| s.display_name().to_string())
            .unwrap_or_else(|| "-".to_string());
        format!(
            "Suspect: {} | Clues: {} | Valid: {} | Questions: {}/{}",
            focused,
            self.pool.len(),
            analysis::score(self.pool.snapshot()),
            self.interrogation.count(),
            MAX_SELECTION
        )
    }
}

impl<N: NarrativeHooks> std::fmt::Debug for CaseSession<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CaseSession")
            .field("registry", &self.registry)
            .field("lineup", &self.lineup)
            .field("pool", &self.pool)
            .field("interrogation", &self.interrogation)
            .finish()
    }
}
