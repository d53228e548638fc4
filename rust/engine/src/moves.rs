use serde::{Deserialize, Serialize};

use crate::cards::{display_cards, CardValue};

/// Shape category of a played card set.
///
/// Compound shapes (straights, consecutive pairs, airplane combinations) are
/// deliberately folded into [`MoveShape::Unclassified`] rather than guessed
/// at; only the shapes below participate in beat comparison and candidate
/// generation.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum MoveShape {
    /// Empty play; never binds the table
    Pass,
    /// One card
    Single,
    /// Two cards of equal value
    Pair,
    /// Three cards of equal value
    Triple,
    /// Four cards of equal value; beats any non-bomb, non-rocket shape
    Bomb,
    /// Both jokers together; beats everything
    Rocket,
    /// Recognized as a play but not as a comparable shape
    Unclassified,
}

impl MoveShape {
    pub fn label(self) -> &'static str {
        match self {
            MoveShape::Pass => "pass",
            MoveShape::Single => "single",
            MoveShape::Pair => "pair",
            MoveShape::Triple => "triple",
            MoveShape::Bomb => "bomb",
            MoveShape::Rocket => "rocket",
            MoveShape::Unclassified => "unclassified",
        }
    }
}

/// A card set together with its classification and human-readable descriptor.
/// Cards are kept sorted ascending.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedMove {
    pub shape: MoveShape,
    pub cards: Vec<CardValue>,
    pub description: String,
}

impl ClassifiedMove {
    pub fn pass() -> Self {
        Self {
            shape: MoveShape::Pass,
            cards: Vec::new(),
            description: "pass".to_string(),
        }
    }

    pub fn is_pass(&self) -> bool {
        self.shape == MoveShape::Pass
    }

    /// The defining rank for shapes that compare by rank (single through
    /// bomb). Pass, rocket, and unclassified sets have none.
    pub fn rank(&self) -> Option<CardValue> {
        match self.shape {
            MoveShape::Single | MoveShape::Pair | MoveShape::Triple | MoveShape::Bomb => {
                self.cards.first().copied()
            }
            _ => None,
        }
    }
}

/// Classify a card multiset into its shape and descriptor.
///
/// Pure function: the result depends only on the card set, never on match
/// state. Input is assumed to already respect per-value copy limits.
///
/// # Examples
///
/// ```
/// use doumate_engine::cards::CardValue;
/// use doumate_engine::moves::{classify, MoveShape};
///
/// let m = classify(&[CardValue::King, CardValue::King]);
/// assert_eq!(m.shape, MoveShape::Pair);
/// assert_eq!(m.description, "pair of K");
///
/// let m = classify(&[CardValue::BlackJoker, CardValue::RedJoker]);
/// assert_eq!(m.shape, MoveShape::Rocket);
/// ```
pub fn classify(cards: &[CardValue]) -> ClassifiedMove {
    let mut sorted = cards.to_vec();
    sorted.sort();

    let shape = match sorted.as_slice() {
        [] => MoveShape::Pass,
        [_] => MoveShape::Single,
        [a, b] if a == b => MoveShape::Pair,
        [CardValue::BlackJoker, CardValue::RedJoker] => MoveShape::Rocket,
        [a, b, c] if a == b && b == c => MoveShape::Triple,
        [a, b, c, d] if a == b && b == c && c == d => MoveShape::Bomb,
        _ => MoveShape::Unclassified,
    };

    let description = match shape {
        MoveShape::Pass => "pass".to_string(),
        MoveShape::Single => format!("single {}", sorted[0].label()),
        MoveShape::Pair => format!("pair of {}", sorted[0].label()),
        MoveShape::Triple => format!("triple of {}", sorted[0].label()),
        MoveShape::Bomb => format!("bomb of {}", sorted[0].label()),
        MoveShape::Rocket => "rocket".to_string(),
        MoveShape::Unclassified => {
            format!(
                "unclassified {}-card combination ({})",
                sorted.len(),
                display_cards(&sorted)
            )
        }
    };

    ClassifiedMove {
        shape,
        cards: sorted,
        description,
    }
}
