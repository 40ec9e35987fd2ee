//! End-to-end tests for the analysis and interrogation loop

use case_analysis::game::{
    Classification, FlagLedger, MismatchReason, TierResolution, ToggleOutcome,
};
use case_analysis::{
    CaseSession, InterrogationQuestion, ScoreTier, SuspectProfile, SuspectRegistry,
};
use std::cell::RefCell;
use std::rc::Rc;

fn q(key: &str) -> InterrogationQuestion {
    InterrogationQuestion::new(key, &format!("Question {key}"))
}

fn session() -> CaseSession<FlagLedger> {
    let registry = SuspectRegistry::from_profiles(vec![
        SuspectProfile::new("A", "Suspect A")
            .with_tier(ScoreTier::new(0, 0, vec![]))
            .with_tier(ScoreTier::new(1, 2, vec![q("q1"), q("q2")]))
            .with_tier(ScoreTier::new(3, 9, vec![q("q1"), q("q2"), q("q3"), q("q4")])),
        SuspectProfile::new("B", "Suspect B")
            .with_tier(ScoreTier::new(0, 5, vec![q("b1")])),
    ]);
    let mut session = CaseSession::new(registry, FlagLedger::new());
    session.setup_lineup(&["A", "B"]);
    session
}

#[test]
fn lineup_focuses_first_resolved_suspect() {
    let session = session();
    assert_eq!(session.focused().map(|s| s.id()), Some("A"));
    assert_eq!(session.lineup().daily_active_ids(), ["A".to_string(), "B".to_string()]);
}

#[test]
fn perfect_analysis_opens_second_tier_and_discovers_suspect() {
    let mut session = session();
    session.add_clue("v1", "Damaged core", true);

    let outcome = session.analyze().expect("non-empty pool");

    assert_eq!(outcome.score, 1);
    assert_eq!(outcome.total, 1);
    assert_eq!(outcome.classification, Classification::Perfect);
    assert_eq!(outcome.question_keys(), vec!["q1", "q2"]);
    assert!(session.interrogation().is_open());
    assert!(session.registry().get("A").unwrap().is_discovered);
    assert_eq!(
        session.narrative().classifications,
        vec![("A".to_string(), Classification::Perfect)]
    );
}

#[test]
fn decoy_only_pool_is_a_mismatch_and_keeps_panel_hidden() {
    let mut session = session();
    session.add_clue("v1", "Fake badge", false);
    session.add_clue("v2", "Wrong date", false);

    let outcome = session.analyze().unwrap();

    assert_eq!(outcome.classification, Classification::Wrong);
    assert_eq!(
        outcome.resolution,
        TierResolution::Mismatch(MismatchReason::EmptyTier)
    );
    assert!(!session.interrogation().is_open());
    assert!(!session.registry().get("A").unwrap().is_discovered);
}

#[test]
fn analyze_does_not_consume_the_pool() {
    let mut session = session();
    session.add_clue("v1", "Clue", true);
    session.add_clue("v2", "Decoy", false);

    let first = session.analyze().unwrap();
    let second = session.analyze().unwrap();

    assert_eq!(first, second);
    assert_eq!(first.classification, Classification::Partial);
    assert_eq!(session.pool().len(), 2);
}

#[test]
fn empty_pool_analysis_is_a_no_op() {
    let mut session = session();
    assert!(session.analyze().is_none());
    assert!(!session.interrogation().is_open());
}

#[test]
fn duplicate_clue_add_keeps_pool_size() {
    let mut session = session();
    assert!(session.add_clue_from_link("android_core|true", "Android core"));
    assert!(!session.add_clue_from_link("android_core|false", "Android core"));

    assert_eq!(session.pool().len(), 1);
    assert!(session.pool()[0].is_valid);
}

#[test]
fn focus_change_flushes_pool_before_subscribers_run() {
    let mut session = session();
    session.add_clue("v1", "Clue", true);
    session.add_clue("v2", "Clue", true);
    session.analyze();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.subscribe_focus(move |s| sink.borrow_mut().push(s.id().to_string()));

    assert!(session.set_focused("B"));

    assert!(session.pool().is_empty());
    assert!(!session.interrogation().is_open());
    assert_eq!(*seen.borrow(), vec!["B"]);
}

#[test]
fn refocusing_the_same_suspect_flushes_and_notifies_again() {
    let mut session = session();
    session.add_clue("v1", "Clue", true);
    session.analyze();

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    session.subscribe_focus(move |s| sink.borrow_mut().push(s.id().to_string()));

    assert!(session.set_focused("A"));

    assert!(session.pool().is_empty());
    assert!(!session.interrogation().is_open());
    assert_eq!(*seen.borrow(), vec!["A"]);
    assert_eq!(session.focused().map(|s| s.id()), Some("A"));
}

#[test]
fn clear_clues_empties_pool_without_touching_focus() {
    let mut session = session();
    session.add_clue("v1", "Clue", true);
    session.add_clue("v2", "Decoy", false);

    session.clear_clues();

    assert!(session.pool().is_empty());
    assert!(session.analyze().is_none());
    assert_eq!(session.focused().map(|s| s.id()), Some("A"));
}

#[test]
fn unknown_focus_leaves_pool_and_panel_alone() {
    let mut session = session();
    session.add_clue("v1", "Clue", true);
    session.analyze();

    assert!(!session.set_focused("nobody"));

    assert_eq!(session.pool().len(), 1);
    assert!(session.interrogation().is_open());
    assert_eq!(session.focused().map(|s| s.id()), Some("A"));
}

#[test]
fn unsubscribed_handlers_stop_receiving() {
    let mut session = session();
    let count = Rc::new(RefCell::new(0));
    let sink = Rc::clone(&count);
    let handle = session.subscribe_focus(move |_| *sink.borrow_mut() += 1);

    session.set_focused("B");
    assert!(session.unsubscribe_focus(handle));
    session.set_focused("A");

    assert_eq!(*count.borrow(), 1);
}

#[test]
fn selection_is_capped_and_finalize_emits_tier_order() {
    let mut session = session();
    for id in ["c1", "c2", "c3"] {
        session.add_clue(id, "Clue", true);
    }
    let outcome = session.analyze().unwrap();
    assert_eq!(outcome.question_keys(), vec!["q1", "q2", "q3", "q4"]);

    assert_eq!(session.toggle("q3", true), ToggleOutcome::Selected);
    assert_eq!(session.toggle("q1", true), ToggleOutcome::Selected);
    assert_eq!(session.toggle("q2", true), ToggleOutcome::Selected);
    assert_eq!(session.toggle("q4", true), ToggleOutcome::CapExceeded);
    assert_eq!(session.interrogation().count(), 3);

    let keys = session.finalize().unwrap();

    assert_eq!(keys, vec!["q1", "q2", "q3"]);
    assert!(!session.interrogation().is_open());
    assert!(session.pool().is_empty());
    assert!(session.registry().get("A").unwrap().is_interrogated);

    let ledger = session.narrative();
    assert!(ledger.is_set("q1") && ledger.is_set("q2") && ledger.is_set("q3"));
    assert!(!ledger.is_set("q4"));
    let order: Vec<&str> = ledger.writes.iter().map(|w| w.key.as_str()).collect();
    assert_eq!(order, vec!["q1", "q2", "q3"]);
}

#[test]
fn finalize_without_open_panel_does_nothing() {
    let mut session = session();
    assert!(session.finalize().is_none());
    assert!(!session.registry().get("A").unwrap().is_interrogated);
    assert!(session.narrative().writes.is_empty());
}

#[test]
fn new_analysis_resets_previous_selection() {
    let mut session = session();
    session.add_clue("v1", "Clue", true);
    session.analyze();
    session.toggle("q1", true);
    session.toggle("q2", true);

    session.analyze();

    assert_eq!(session.interrogation().count(), 0);
}

#[test]
fn persisted_state_survives_a_new_session() {
    let mut session = session();
    session.add_clue("v1", "Clue", true);
    session.analyze();
    session.toggle("q1", true);
    session.finalize();
    let saved = session.export_state();

    let mut restored = self::session();
    assert_eq!(restored.apply_state(&saved), 2);

    let a = restored.registry().get("A").unwrap();
    assert!(a.is_discovered);
    assert!(a.is_interrogated);
    assert!(!restored.registry().get("B").unwrap().is_interrogated);
}
