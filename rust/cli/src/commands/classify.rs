//! Classify command handler.
//!
//! Parses one card-notation string, runs it through the move classifier, and
//! prints the shape and descriptor. Useful for checking how a set of cards
//! will be read before playing it.

use std::io::Write;

use doumate_engine::cards::display_cards;
use doumate_engine::moves::classify;

use crate::error::CliError;
use crate::validation::parse_cards;

/// Handle the classify command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` when the notation does not parse.
pub fn handle_classify_command(cards: &str, out: &mut dyn Write) -> Result<(), CliError> {
    let values = parse_cards(cards).map_err(CliError::InvalidInput)?;
    let classified = classify(&values);
    writeln!(out, "cards: {}", display_cards(&values))?;
    writeln!(out, "shape: {}", classified.shape.label())?;
    writeln!(out, "description: {}", classified.description)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bomb() {
        let mut out = Vec::new();
        handle_classify_command("K K K K", &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("shape: bomb"));
        assert!(output.contains("bomb of K"));
    }

    #[test]
    fn test_classify_rejects_bad_token() {
        let mut out = Vec::new();
        let result = handle_classify_command("3 X", &mut out);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn test_classify_compound_is_unclassified() {
        let mut out = Vec::new();
        handle_classify_command("3 4 5 6 7", &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("shape: unclassified"));
    }
}
