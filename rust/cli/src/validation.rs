//! Input parsing and validation for interactive commands.
//!
//! This module translates free-form card notation into engine card values
//! and parses turn-level input (a play, a pass, or a special command). The
//! accepted notation follows common Dou Dizhu shorthand:
//!
//! - Space-separated tokens: `3 4 5 J Q K A 2`
//! - Compact runs: `345JQKA2`
//! - Ten as `10` or `T`
//! - Black (small) joker as `B` or `joker`, red (big) joker as `R` or `JOKER`
//!
//! Parsing fails by naming the first unrecognized token; it does not guess.

use doumate_engine::cards::CardValue;

/// Result type for parsing a turn's input in the interactive session.
#[derive(Debug, PartialEq)]
pub enum TurnInput {
    /// Explicit pass
    Pass,
    /// A play of the given cards, sorted ascending
    Cards(Vec<CardValue>),
    /// Help requested
    Help,
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Parse one line of turn input.
///
/// `pass`, `help` (or `?`), and `quit` are recognized as commands; anything
/// else is treated as card notation. Single-letter aliases are deliberately
/// not offered because they collide with card labels (`q` is a queen).
///
/// # Example
///
/// ```rust
/// # use doumate_cli::validation::{parse_turn_input, TurnInput};
/// use doumate_engine::cards::CardValue;
///
/// assert_eq!(parse_turn_input("pass"), TurnInput::Pass);
/// assert_eq!(parse_turn_input("quit"), TurnInput::Quit);
/// assert_eq!(
///     parse_turn_input("K K"),
///     TurnInput::Cards(vec![CardValue::King, CardValue::King])
/// );
/// ```
pub fn parse_turn_input(input: &str) -> TurnInput {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return TurnInput::Invalid("Empty input".to_string());
    }
    // no single-letter command aliases: q collides with the queen label
    match trimmed.to_lowercase().as_str() {
        "pass" => return TurnInput::Pass,
        "help" | "?" => return TurnInput::Help,
        "quit" => return TurnInput::Quit,
        _ => {}
    }
    match parse_cards(trimmed) {
        Ok(cards) => TurnInput::Cards(cards),
        Err(msg) => TurnInput::Invalid(msg),
    }
}

/// Parse a card-notation string into sorted card values.
///
/// Fails with a message naming the unrecognized token. The result is only
/// notation-valid; copy limits are enforced by the engine.
///
/// # Example
///
/// ```rust
/// # use doumate_cli::validation::parse_cards;
/// use doumate_engine::cards::CardValue;
///
/// let cards = parse_cards("345JQKA").unwrap();
/// assert_eq!(cards.len(), 7);
/// assert_eq!(cards[0], CardValue::Three);
///
/// assert!(parse_cards("3 X").is_err());
/// ```
pub fn parse_cards(input: &str) -> Result<Vec<CardValue>, String> {
    let mut cards = Vec::new();
    for token in input.split_whitespace() {
        parse_token(token, &mut cards)?;
    }
    cards.sort();
    Ok(cards)
}

fn parse_token(token: &str, out: &mut Vec<CardValue>) -> Result<(), String> {
    // whole-word joker aliases before the character scan
    match token {
        "joker" => {
            out.push(CardValue::BlackJoker);
            return Ok(());
        }
        "JOKER" => {
            out.push(CardValue::RedJoker);
            return Ok(());
        }
        _ => {}
    }

    let mut chars = token.chars().peekable();
    while let Some(c) = chars.next() {
        let value = match c {
            '3' => CardValue::Three,
            '4' => CardValue::Four,
            '5' => CardValue::Five,
            '6' => CardValue::Six,
            '7' => CardValue::Seven,
            '8' => CardValue::Eight,
            '9' => CardValue::Nine,
            '1' => {
                // only "10" starts with '1'
                if chars.next_if_eq(&'0').is_none() {
                    return Err(format!("Unrecognized card token '{}'", token));
                }
                CardValue::Ten
            }
            'T' | 't' => CardValue::Ten,
            'J' | 'j' => CardValue::Jack,
            'Q' | 'q' => CardValue::Queen,
            'K' | 'k' => CardValue::King,
            'A' | 'a' => CardValue::Ace,
            '2' => CardValue::Two,
            'B' | 'b' => CardValue::BlackJoker,
            'R' | 'r' => CardValue::RedJoker,
            _ => return Err(format!("Unrecognized card token '{}'", token)),
        };
        out.push(value);
    }
    Ok(())
}
