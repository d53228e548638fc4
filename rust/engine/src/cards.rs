use serde::{Deserialize, Serialize};

/// Represents the rank of a Dou Dizhu card. Suit is irrelevant in this game,
/// so a card is fully defined by its value.
///
/// Discriminants follow the conventional numeric encoding: number cards keep
/// their face value, `2` ranks above `A` at 17, and the jokers sit above
/// everything at 20 (black) and 30 (red). Derived ordering therefore matches
/// the game's beat order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum CardValue {
    /// Rank 3, the lowest card
    Three = 3,
    /// Rank 4
    Four = 4,
    /// Rank 5
    Five = 5,
    /// Rank 6
    Six = 6,
    /// Rank 7
    Seven = 7,
    /// Rank 8
    Eight = 8,
    /// Rank 9
    Nine = 9,
    /// Rank 10
    Ten = 10,
    /// Jack (11)
    Jack = 11,
    /// Queen (12)
    Queen = 12,
    /// King (13)
    King = 13,
    /// Ace (14)
    Ace = 14,
    /// Rank 2, above the Ace (17)
    Two = 17,
    /// Black (small) joker (20)
    BlackJoker = 20,
    /// Red (big) joker, the highest card (30)
    RedJoker = 30,
}

impl CardValue {
    /// Decode a numeric card value, rejecting anything outside the 15-symbol
    /// domain.
    pub fn from_u8(v: u8) -> Option<CardValue> {
        match v {
            3 => Some(CardValue::Three),
            4 => Some(CardValue::Four),
            5 => Some(CardValue::Five),
            6 => Some(CardValue::Six),
            7 => Some(CardValue::Seven),
            8 => Some(CardValue::Eight),
            9 => Some(CardValue::Nine),
            10 => Some(CardValue::Ten),
            11 => Some(CardValue::Jack),
            12 => Some(CardValue::Queen),
            13 => Some(CardValue::King),
            14 => Some(CardValue::Ace),
            17 => Some(CardValue::Two),
            20 => Some(CardValue::BlackJoker),
            30 => Some(CardValue::RedJoker),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Maximum copies of this value a hand may contain: four for ordinary
    /// ranks, one for each joker.
    pub fn max_copies(self) -> usize {
        match self {
            CardValue::BlackJoker | CardValue::RedJoker => 1,
            _ => 4,
        }
    }

    pub fn is_joker(self) -> bool {
        matches!(self, CardValue::BlackJoker | CardValue::RedJoker)
    }

    /// Short display label used in prompts and descriptors.
    pub fn label(self) -> &'static str {
        match self {
            CardValue::Three => "3",
            CardValue::Four => "4",
            CardValue::Five => "5",
            CardValue::Six => "6",
            CardValue::Seven => "7",
            CardValue::Eight => "8",
            CardValue::Nine => "9",
            CardValue::Ten => "10",
            CardValue::Jack => "J",
            CardValue::Queen => "Q",
            CardValue::King => "K",
            CardValue::Ace => "A",
            CardValue::Two => "2",
            CardValue::BlackJoker => "B",
            CardValue::RedJoker => "R",
        }
    }
}

pub fn all_values() -> [CardValue; 15] {
    [
        CardValue::Three,
        CardValue::Four,
        CardValue::Five,
        CardValue::Six,
        CardValue::Seven,
        CardValue::Eight,
        CardValue::Nine,
        CardValue::Ten,
        CardValue::Jack,
        CardValue::Queen,
        CardValue::King,
        CardValue::Ace,
        CardValue::Two,
        CardValue::BlackJoker,
        CardValue::RedJoker,
    ]
}

/// Per-value occurrence counts for a card set, in ascending value order.
pub fn count_by_value(cards: &[CardValue]) -> Vec<(CardValue, usize)> {
    let mut counts: Vec<(CardValue, usize)> = Vec::new();
    let mut sorted = cards.to_vec();
    sorted.sort();
    for c in sorted {
        match counts.last_mut() {
            Some((v, n)) if *v == c => *n += 1,
            _ => counts.push((c, 1)),
        }
    }
    counts
}

/// Check that no value exceeds its copy limit. This is the only structural
/// validity a card multiset needs; it gates both setup and submitted plays.
pub fn validate_multiplicity(cards: &[CardValue]) -> bool {
    count_by_value(cards)
        .iter()
        .all(|&(v, n)| n <= v.max_copies())
}

/// Render a card set as a space-separated label string, sorted ascending.
pub fn display_cards(cards: &[CardValue]) -> String {
    if cards.is_empty() {
        return "none".to_string();
    }
    let mut sorted = cards.to_vec();
    sorted.sort();
    sorted
        .iter()
        .map(|c| c.label())
        .collect::<Vec<_>>()
        .join(" ")
}
