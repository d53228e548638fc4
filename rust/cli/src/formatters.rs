//! Terminal rendering for situations, moves, and advice.
//!
//! Pure string builders; all actual writing happens in the command handlers
//! so output streams stay injectable for tests.

use doumate_advisor::MoveAdvice;
use doumate_engine::cards::{display_cards, CardValue};
use doumate_engine::game::{MoveRecord, Situation};

/// Format a card set for display, `"pass"` when empty.
pub fn format_cards(cards: &[CardValue]) -> String {
    if cards.is_empty() {
        "pass".to_string()
    } else {
        display_cards(cards)
    }
}

/// One line per move record: seat, cards, descriptor.
pub fn format_record(record: &MoveRecord) -> String {
    if record.is_pass() {
        format!("{} passed", record.seat)
    } else {
        format!(
            "{} played {} ({})",
            record.seat,
            format_cards(&record.cards),
            record.description
        )
    }
}

/// Numbered advice line with confidence percentage and reasoning.
///
/// # Example
///
/// ```rust
/// use doumate_advisor::MoveAdvice;
/// use doumate_engine::cards::CardValue;
/// use doumate_engine::moves::MoveShape;
/// # use doumate_cli::formatters::format_advice;
///
/// let advice = MoveAdvice {
///     cards: vec![CardValue::King],
///     shape: MoveShape::Single,
///     description: "single K".to_string(),
///     confidence: 0.9,
///     reasoning: "suggested by greedy".to_string(),
/// };
/// assert_eq!(
///     format_advice(1, &advice),
///     "  1. K (single K) - confidence 90% - suggested by greedy"
/// );
/// ```
pub fn format_advice(index: usize, advice: &MoveAdvice) -> String {
    format!(
        "  {}. {} ({}) - confidence {:.0}% - {}",
        index,
        format_cards(&advice.cards),
        advice.description,
        advice.confidence * 100.0,
        advice.reasoning
    )
}

/// Multi-line table summary: whose turn it is, per-seat counts (the user's
/// hand spelled out), and the last move.
pub fn format_situation(situation: &Situation) -> String {
    let mut lines = Vec::new();
    lines.push(format!("To act: {}", situation.current_seat));
    for seat in &situation.seats {
        match &seat.hand {
            Some(hand) => lines.push(format!(
                "{}: {} cards - {}",
                seat.seat, seat.remaining, hand
            )),
            None => lines.push(format!("{}: {} cards", seat.seat, seat.remaining)),
        }
    }
    match &situation.last_move {
        Some(last) if last.description == "pass" => {
            lines.push(format!("Last move: {} passed", last.seat));
        }
        Some(last) => {
            lines.push(format!(
                "Last move: {} played {} ({})",
                last.seat, last.cards, last.description
            ));
        }
        None => {}
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use doumate_engine::game::{Match, Seat};
    use doumate_engine::moves::MoveShape;

    #[test]
    fn test_format_cards_empty_is_pass() {
        assert_eq!(format_cards(&[]), "pass");
    }

    #[test]
    fn test_format_cards_sorted_labels() {
        let cards = vec![CardValue::Ace, CardValue::Three];
        assert_eq!(format_cards(&cards), "3 A");
    }

    #[test]
    fn test_format_record_pass() {
        let record = MoveRecord {
            seat: Seat::LandlordUp,
            cards: vec![],
            shape: MoveShape::Pass,
            description: "pass".to_string(),
            seq: 0,
        };
        assert_eq!(format_record(&record), "landlord-up passed");
    }

    #[test]
    fn test_format_situation_shows_user_hand_only() {
        let mut game = Match::new(Seat::Landlord);
        game.deal(vec![CardValue::Three, CardValue::King], None)
            .unwrap();

        let text = format_situation(&game.situation());
        assert!(text.contains("To act: landlord"));
        assert!(text.contains("landlord: 2 cards - 3 K"));
        assert!(text.contains("landlord-up: 17 cards"));
        assert!(!text.contains("landlord-up: 17 cards -"));
    }
}
