//! Built-in oracle implementations.
//!
//! These stand in for the heavyweight external policies the assistant can be
//! wired to: [`GreedyOracle`] is the deterministic local fallback,
//! [`RandomOracle`] a uniform sampler useful for testing the advisory
//! plumbing.

use rand::seq::IndexedRandom;

use doumate_engine::cards::CardValue;
use doumate_engine::moves::{ClassifiedMove, MoveShape};

use crate::{MoveOracle, OracleError, OracleSnapshot};

/// Plays the cheapest candidate available: fewest cards first, then lowest
/// rank. Bombs and the rocket are held back unless nothing else follows,
/// and passing is a last resort.
///
/// # Example
///
/// ```rust
/// use doumate_advisor::baseline::GreedyOracle;
/// use doumate_advisor::MoveOracle;
///
/// let oracle = GreedyOracle::new();
/// assert_eq!(oracle.name(), "greedy");
/// ```
#[derive(Debug, Clone, Default)]
pub struct GreedyOracle;

impl GreedyOracle {
    pub fn new() -> Self {
        Self
    }

    fn weight(candidate: &ClassifiedMove) -> (u8, usize, u8) {
        let tier = match candidate.shape {
            MoveShape::Single | MoveShape::Pair | MoveShape::Triple => 0,
            MoveShape::Bomb => 1,
            MoveShape::Rocket => 2,
            // pass ranks below any real play; unclassified never appears in
            // generated candidate sets
            MoveShape::Pass | MoveShape::Unclassified => 3,
        };
        let rank = candidate.rank().map(|r| r.as_u8()).unwrap_or(0);
        (tier, candidate.cards.len(), rank)
    }
}

impl MoveOracle for GreedyOracle {
    fn suggest(&self, snapshot: &OracleSnapshot) -> Result<Option<Vec<CardValue>>, OracleError> {
        let best = snapshot
            .candidates
            .iter()
            .min_by_key(|c| Self::weight(c))
            .map(|c| c.cards.clone());
        Ok(best)
    }

    fn name(&self) -> &str {
        "greedy"
    }
}

/// Picks uniformly among the non-pass candidates, falling back to pass only
/// when nothing else is legal.
#[derive(Debug, Clone, Default)]
pub struct RandomOracle;

impl RandomOracle {
    pub fn new() -> Self {
        Self
    }
}

impl MoveOracle for RandomOracle {
    fn suggest(&self, snapshot: &OracleSnapshot) -> Result<Option<Vec<CardValue>>, OracleError> {
        let plays: Vec<&ClassifiedMove> = snapshot
            .candidates
            .iter()
            .filter(|c| !c.is_pass())
            .collect();
        if plays.is_empty() {
            return Ok(snapshot
                .candidates
                .iter()
                .find(|c| c.is_pass())
                .map(|c| c.cards.clone()));
        }
        let mut rng = rand::rng();
        Ok(plays.choose(&mut rng).map(|c| c.cards.clone()))
    }

    fn name(&self) -> &str {
        "random"
    }
}
