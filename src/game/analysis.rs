//! Case analysis scoring
//!
//! Scores the clue pool and picks the question tier for the focused suspect.

use crate::data::{ClueEntry, ScoreTier, SuspectProfile};
use serde::{Deserialize, Serialize};

/// How well the pooled clues support the deduction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    Perfect,   // every pooled clue is valid
    Partial,   // some decoys mixed in
    Wrong,     // nothing valid
}

impl Classification {
    pub fn classify(score: u32, total: u32) -> Self {
        if score == total && total > 0 {
            Classification::Perfect
        } else if score > 0 {
            Classification::Partial
        } else {
            Classification::Wrong
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Classification::Perfect => "A flawless deduction.",
            Classification::Partial => "The reasoning has flaws. Maybe reorganize the clues.",
            Classification::Wrong => "The deduction is heading the wrong way entirely.",
        }
    }
}

/// Why no question set could be offered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MismatchReason {
    NoTierForScore,
    EmptyTier,
}

/// Tier lookup result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TierResolution {
    Matched { index: usize, tier: ScoreTier },
    Mismatch(MismatchReason),
}

/// Full result of analysing a pool against a suspect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisOutcome {
    pub suspect_id: String,
    pub score: u32,
    pub total: u32,
    pub classification: Classification,
    pub resolution: TierResolution,
}

impl AnalysisOutcome {
    pub fn matched_tier(&self) -> Option<&ScoreTier> {
        match &self.resolution {
            TierResolution::Matched { tier, .. } => Some(tier),
            TierResolution::Mismatch(_) => None,
        }
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self.resolution, TierResolution::Mismatch(_))
    }

    /// Variable keys of the matched tier, in declaration order
    pub fn question_keys(&self) -> Vec<&str> {
        self.matched_tier()
            .map(|t| t.questions.iter().map(|q| q.variable_key.as_str()).collect())
            .unwrap_or_default()
    }
}

/// Number of valid clues in the pool
pub fn score(pool: &[ClueEntry]) -> u32 {
    pool.iter().filter(|e| e.is_valid).count() as u32
}

/// First tier in declaration order whose range contains `score`.
///
/// Overlapping tiers are resolved by declaration order. A match with no
/// questions counts as a mismatch.
pub fn resolve_tier(tiers: &[ScoreTier], score: u32) -> TierResolution {
    match tiers.iter().enumerate().find(|(_, t)| t.contains(score)) {
        Some((_, tier)) if tier.questions.is_empty() => {
            TierResolution::Mismatch(MismatchReason::EmptyTier)
        }
        Some((index, tier)) => TierResolution::Matched {
            index,
            tier: tier.clone(),
        },
        None => TierResolution::Mismatch(MismatchReason::NoTierForScore),
    }
}

/// Analyse `pool` for `suspect`. Returns `None` for an empty pool.
pub fn analyze(pool: &[ClueEntry], suspect: &SuspectProfile) -> Option<AnalysisOutcome> {
    if pool.is_empty() {
        return None;
    }

    let score = score(pool);
    let total = pool.len() as u32;

    Some(AnalysisOutcome {
        suspect_id: suspect.id.clone(),
        score,
        total,
        classification: Classification::classify(score, total),
        resolution: resolve_tier(&suspect.tier_table, score),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::InterrogationQuestion;

    fn q(key: &str) -> InterrogationQuestion {
        InterrogationQuestion::new(key, key)
    }

    fn suspect_a() -> SuspectProfile {
        SuspectProfile::new("A", "Suspect A")
            .with_tier(ScoreTier::new(0, 0, vec![]))
            .with_tier(ScoreTier::new(1, 2, vec![q("q1"), q("q2")]))
    }

    #[test]
    fn single_valid_clue_is_perfect_and_matches_second_tier() {
        let pool = vec![ClueEntry::new("v1", "V1", true)];
        let outcome = analyze(&pool, &suspect_a()).unwrap();

        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total, 1);
        assert_eq!(outcome.classification, Classification::Perfect);
        assert!(matches!(outcome.resolution, TierResolution::Matched { index: 1, .. }));
        assert_eq!(outcome.question_keys(), vec!["q1", "q2"]);
    }

    #[test]
    fn all_decoys_hit_the_empty_gate_tier() {
        let pool = vec![
            ClueEntry::new("v1", "V1", false),
            ClueEntry::new("v2", "V2", false),
        ];
        let outcome = analyze(&pool, &suspect_a()).unwrap();

        assert_eq!(outcome.score, 0);
        assert_eq!(outcome.classification, Classification::Wrong);
        assert_eq!(
            outcome.resolution,
            TierResolution::Mismatch(MismatchReason::EmptyTier)
        );
        assert!(outcome.question_keys().is_empty());
    }

    #[test]
    fn mixed_pool_is_partial() {
        let pool = vec![
            ClueEntry::new("v1", "V1", true),
            ClueEntry::new("v2", "V2", false),
        ];
        let outcome = analyze(&pool, &suspect_a()).unwrap();
        assert_eq!(outcome.score, 1);
        assert_eq!(outcome.total, 2);
        assert_eq!(outcome.classification, Classification::Partial);
    }

    #[test]
    fn overlapping_tiers_resolve_by_declaration_order() {
        let tiers = vec![
            ScoreTier::new(0, 2, vec![q("A")]),
            ScoreTier::new(1, 3, vec![q("B")]),
        ];
        match resolve_tier(&tiers, 1) {
            TierResolution::Matched { index, tier } => {
                assert_eq!(index, 0);
                assert_eq!(tier.questions[0].variable_key, "A");
            }
            other => panic!("expected match, got {:?}", other),
        }
        assert!(matches!(
            resolve_tier(&tiers, 3),
            TierResolution::Matched { index: 1, .. }
        ));
    }

    #[test]
    fn score_outside_every_tier_is_a_mismatch() {
        let pool: Vec<ClueEntry> = (0..5)
            .map(|i| ClueEntry::new(&format!("c{i}"), "clue", true))
            .collect();
        let outcome = analyze(&pool, &suspect_a()).unwrap();
        assert_eq!(outcome.classification, Classification::Perfect);
        assert_eq!(
            outcome.resolution,
            TierResolution::Mismatch(MismatchReason::NoTierForScore)
        );
    }

    #[test]
    fn empty_pool_is_not_analysed() {
        assert!(analyze(&[], &suspect_a()).is_none());
    }

    #[test]
    fn score_counts_valid_entries_for_any_pool() {
        for n in 0..6u32 {
            let pool: Vec<ClueEntry> = (0..n)
                .map(|i| ClueEntry::new(&format!("c{i}"), "clue", i % 2 == 0))
                .collect();
            let expected = (n + 1) / 2;
            assert_eq!(score(&pool), expected);
            assert_eq!(
                Classification::classify(expected, n) == Classification::Perfect,
                expected == n && n > 0
            );
        }
    }
}
