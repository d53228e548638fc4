//! # doumate-advisor: Move Suggestion for the Dou Dizhu Assistant
//!
//! Bridges the engine's legality engine to external decision oracles and
//! ranks the results. Oracles are consulted but never required: with zero
//! registered oracles, or when every oracle fails or has no opinion, the
//! advisor degrades to ranking the legality engine's candidates on its own.
//!
//! ## Core Components
//!
//! - [`MoveOracle`] - Trait for external move-ranking collaborators
//! - [`Advisor`] - Merges oracle suggestions with legality-engine candidates
//! - [`baseline`] - Built-in oracles (greedy and random)
//! - [`create_oracle`] - Factory for oracles by name
//!
//! ## Quick Start
//!
//! ```rust
//! use doumate_advisor::{create_oracle, Advisor};
//! use doumate_engine::cards::CardValue;
//! use doumate_engine::game::{Match, Seat};
//!
//! let mut game = Match::new(Seat::Landlord);
//! game.deal(
//!     vec![CardValue::Three, CardValue::Three, CardValue::King],
//!     None,
//! )
//! .expect("valid hand");
//!
//! let mut advisor = Advisor::new();
//! if let Some(oracle) = create_oracle("greedy") {
//!     advisor.register(oracle);
//! }
//! let report = advisor.advise(&game, 3);
//! assert!(!report.advice.is_empty());
//! ```

use doumate_engine::cards::CardValue;
use doumate_engine::game::{Match, MatchPhase, MoveRecord, Seat};
use doumate_engine::moves::{ClassifiedMove, MoveShape};

pub mod baseline;

/// Snapshot of the position handed to an oracle: the acting seat, its full
/// hand, the standing move to beat, recent history, and the already-computed
/// legal candidate set. Everything an oracle may consider; nothing it can
/// mutate.
#[derive(Debug, Clone)]
pub struct OracleSnapshot<'a> {
    pub seat: Seat,
    pub hand: &'a [CardValue],
    /// Cards of the last binding move; empty when leading
    pub last_binding: Vec<CardValue>,
    /// Up to the two most recent move records, oldest first
    pub recent_moves: Vec<&'a MoveRecord>,
    pub candidates: &'a [ClassifiedMove],
}

/// Failure of an oracle consultation. Reported to the caller as a warning,
/// never escalated into a match error.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle unavailable")]
    Unavailable,
    #[error("oracle failed: {0}")]
    Failed(String),
}

/// An external move-ranking collaborator.
///
/// `Ok(None)` means "no opinion" and is a perfectly normal answer. A
/// returned suggestion is re-validated against the legal candidate set
/// before use, so a misbehaving oracle cannot inject an illegal move.
pub trait MoveOracle: Send + Sync {
    fn suggest(&self, snapshot: &OracleSnapshot) -> Result<Option<Vec<CardValue>>, OracleError>;
    fn name(&self) -> &str;
}

/// Create an oracle by name. Unknown names yield `None`; running with no
/// oracles at all is a supported configuration, not an error.
///
/// Supported names: `"greedy"`, `"random"`.
pub fn create_oracle(kind: &str) -> Option<Box<dyn MoveOracle>> {
    match kind {
        "greedy" => Some(Box::new(baseline::GreedyOracle::new())),
        "random" => Some(Box::new(baseline::RandomOracle::new())),
        _ => None,
    }
}

/// One ranked suggestion for the user's turn.
#[derive(Debug, Clone, PartialEq)]
pub struct MoveAdvice {
    /// Cards to play; empty for a pass
    pub cards: Vec<CardValue>,
    pub shape: MoveShape,
    pub description: String,
    /// Rough ranking weight in 0..=1; oracle picks score above fallbacks
    pub confidence: f64,
    pub reasoning: String,
}

/// Advice plus any oracle failures encountered while producing it.
#[derive(Debug, Clone, Default)]
pub struct AdviceReport {
    pub advice: Vec<MoveAdvice>,
    /// Oracle failures, for display only
    pub warnings: Vec<String>,
}

/// Merges oracle suggestions with the legality engine's candidate set.
///
/// Oracles are queried in registration order. Suggestions that are no longer
/// members of the legal candidate set are dropped, duplicates are collapsed,
/// and remaining advice slots are filled from the candidate set ranked
/// smallest-first (fewest cards, then lowest rank, pass last).
#[derive(Default)]
pub struct Advisor {
    oracles: Vec<Box<dyn MoveOracle>>,
}

impl Advisor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, oracle: Box<dyn MoveOracle>) {
        self.oracles.push(oracle);
    }

    pub fn oracle_count(&self) -> usize {
        self.oracles.len()
    }

    /// Produce up to `limit` ranked suggestions for the user's turn. Empty
    /// when the match is not in progress or it is not the user's turn.
    pub fn advise(&self, game: &Match, limit: usize) -> AdviceReport {
        let mut report = AdviceReport::default();
        if game.phase() != MatchPhase::InProgress || game.current_seat() != game.user_seat() {
            return report;
        }

        let candidates = game.legal_candidates_for_user();
        if candidates.is_empty() {
            return report;
        }

        let history = game.history();
        let recent_start = history.len().saturating_sub(2);
        let snapshot = OracleSnapshot {
            seat: game.user_seat(),
            hand: game.user_hand(),
            last_binding: game
                .binding_move()
                .map(|r| r.cards.clone())
                .unwrap_or_default(),
            recent_moves: history[recent_start..].iter().collect(),
            candidates: &candidates,
        };

        // oracle picks first, highest confidence, deduplicated
        let mut picked: Vec<Vec<CardValue>> = Vec::new();
        for oracle in &self.oracles {
            if report.advice.len() >= limit {
                break;
            }
            match oracle.suggest(&snapshot) {
                Ok(Some(mut cards)) => {
                    cards.sort();
                    let Some(candidate) = candidates.iter().find(|c| c.cards == cards) else {
                        report.warnings.push(format!(
                            "oracle {} suggested a move outside the legal set",
                            oracle.name()
                        ));
                        continue;
                    };
                    if picked.contains(&cards) {
                        continue;
                    }
                    let confidence = (0.9 - 0.1 * report.advice.len() as f64).max(0.1);
                    report.advice.push(MoveAdvice {
                        cards: cards.clone(),
                        shape: candidate.shape,
                        description: candidate.description.clone(),
                        confidence,
                        reasoning: format!("suggested by {}", oracle.name()),
                    });
                    picked.push(cards);
                }
                Ok(None) => {}
                Err(e) => {
                    report
                        .warnings
                        .push(format!("oracle {} failed: {}", oracle.name(), e));
                }
            }
        }

        // fill remaining slots from the ranked candidate set
        let mut fallback: Vec<&ClassifiedMove> = candidates.iter().collect();
        fallback.sort_by_key(|c| candidate_order(c));
        for candidate in fallback {
            if report.advice.len() >= limit {
                break;
            }
            if picked.contains(&candidate.cards) {
                continue;
            }
            let (confidence, reasoning) = if candidate.is_pass() {
                (0.6, "pass and wait for a better spot".to_string())
            } else {
                (0.5, "fallback option".to_string())
            };
            report.advice.push(MoveAdvice {
                cards: candidate.cards.clone(),
                shape: candidate.shape,
                description: candidate.description.clone(),
                confidence,
                reasoning,
            });
            picked.push(candidate.cards.clone());
        }

        report
    }
}

/// Fallback ranking key: cheapest material first, bombs and the rocket
/// last, pass after ordinary plays but before bombs.
fn candidate_order(c: &ClassifiedMove) -> (u8, usize, u8) {
    let tier = match c.shape {
        MoveShape::Single | MoveShape::Pair | MoveShape::Triple => 0,
        MoveShape::Pass => 1,
        MoveShape::Bomb => 2,
        MoveShape::Rocket => 3,
        MoveShape::Unclassified => 1,
    };
    let rank = c.rank().map(|r| r.as_u8()).unwrap_or(0);
    (tier, c.cards.len(), rank)
}

#[cfg(test)]
mod tests {
    use super::*;
    use doumate_engine::cards::CardValue;
    use doumate_engine::game::{Match, Seat};

    struct FixedOracle(Vec<CardValue>);

    impl MoveOracle for FixedOracle {
        fn suggest(
            &self,
            _snapshot: &OracleSnapshot,
        ) -> Result<Option<Vec<CardValue>>, OracleError> {
            Ok(Some(self.0.clone()))
        }
        fn name(&self) -> &str {
            "fixed"
        }
    }

    struct BrokenOracle;

    impl MoveOracle for BrokenOracle {
        fn suggest(
            &self,
            _snapshot: &OracleSnapshot,
        ) -> Result<Option<Vec<CardValue>>, OracleError> {
            Err(OracleError::Unavailable)
        }
        fn name(&self) -> &str {
            "broken"
        }
    }

    fn landlord_match(cards: Vec<CardValue>) -> Match {
        let mut game = Match::new(Seat::Landlord);
        game.deal(cards, None).unwrap();
        game
    }

    #[test]
    fn valid_oracle_pick_ranks_first() {
        let game = landlord_match(vec![CardValue::Three, CardValue::King]);
        let mut advisor = Advisor::new();
        advisor.register(Box::new(FixedOracle(vec![CardValue::King])));

        let report = advisor.advise(&game, 3);
        assert_eq!(report.advice[0].cards, vec![CardValue::King]);
        assert_eq!(report.advice[0].confidence, 0.9);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn illegal_suggestion_is_dropped_with_warning() {
        let game = landlord_match(vec![CardValue::Three, CardValue::King]);
        let mut advisor = Advisor::new();
        advisor.register(Box::new(FixedOracle(vec![CardValue::Ace])));

        let report = advisor.advise(&game, 3);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.advice.iter().all(|a| a.cards != vec![CardValue::Ace]));
    }

    #[test]
    fn oracle_failure_degrades_to_fallback_candidates() {
        let game = landlord_match(vec![CardValue::Three, CardValue::King]);
        let mut advisor = Advisor::new();
        advisor.register(Box::new(BrokenOracle));

        let report = advisor.advise(&game, 3);
        assert_eq!(report.warnings.len(), 1);
        assert!(!report.advice.is_empty());
        // fallback ranks the cheapest play first
        assert_eq!(report.advice[0].cards, vec![CardValue::Three]);
    }

    #[test]
    fn no_oracles_is_a_valid_configuration() {
        let game = landlord_match(vec![CardValue::Three, CardValue::King]);
        let advisor = Advisor::new();
        let report = advisor.advise(&game, 2);
        assert_eq!(report.advice.len(), 2);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn empty_when_not_users_turn() {
        let mut game = Match::new(Seat::LandlordUp);
        game.deal(vec![CardValue::Three], None).unwrap();
        // landlord to act, user seat is landlord-up
        let advisor = Advisor::new();
        assert!(advisor.advise(&game, 3).advice.is_empty());
    }

    #[test]
    fn unknown_oracle_kind_is_none() {
        assert!(create_oracle("perfect-play").is_none());
        assert!(create_oracle("greedy").is_some());
        assert!(create_oracle("random").is_some());
    }
}
