//! # Play Command
//!
//! The interactive assistant session: one tracked Dou Dizhu match driven
//! from the terminal. Each turn the session shows the table, and either
//! reads the user's play (after printing ranked suggestions) or reads the
//! play an opponent made in the real game.
//!
//! ## Features
//!
//! - Seat selection via flag, config, or prompt
//! - Hand and bottom entry with re-prompt on parse or validation errors
//! - Oracle-backed suggestions with legality-engine fallback
//! - Rejected moves leave the match untouched and are re-entered
//! - Optional JSONL match log written when the match finishes

use std::io::{BufRead, Write};

use doumate_advisor::{create_oracle, Advisor};
use doumate_engine::errors::MatchError;
use doumate_engine::game::{Match, MatchPhase, Seat};
use doumate_engine::logger::{MatchLogger, MatchRecord};

use crate::cli::SeatArg;
use crate::config;
use crate::error::CliError;
use crate::formatters::{format_advice, format_record, format_situation};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{parse_cards, parse_turn_input, TurnInput};

/// Handle the play command: run one interactive assistant session.
///
/// # Arguments
///
/// * `seat` - Seat the human occupies (falls back to config, then a prompt)
/// * `suggestions` - Suggestions shown per turn (falls back to config)
/// * `log` - JSONL match log path (falls back to config)
/// * `out` - Output stream for the session display
/// * `err` - Error stream for warnings and rejections
/// * `stdin` - Input stream for hand entry and moves
///
/// # Returns
///
/// * `Ok(())` when the session ends (match finished, quit, or EOF)
/// * `Err(CliError)` on configuration, I/O, or structural engine failures
pub fn handle_play_command(
    seat: Option<SeatArg>,
    suggestions: Option<usize>,
    log: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let cfg = config::load().map_err(|e| CliError::Config(e.to_string()))?;
    let suggestions = suggestions.unwrap_or(cfg.suggestions).max(1);
    let log = log.or(cfg.log_path);

    let user_seat = match resolve_seat(seat, cfg.seat.as_deref(), out, err, stdin)? {
        Some(s) => s,
        None => return Ok(()),
    };

    let mut advisor = Advisor::new();
    for name in &cfg.oracles {
        match create_oracle(name) {
            Some(oracle) => advisor.register(oracle),
            None => ui::display_warning(err, &format!("unknown oracle '{}', skipping", name))?,
        }
    }

    writeln!(out, "Doumate assistant - you play {}", user_seat)?;
    let Some(mut game) = setup_match(user_seat, out, err, stdin)? else {
        return Ok(());
    };

    while game.phase() == MatchPhase::InProgress {
        writeln!(out)?;
        writeln!(out, "{}", format_situation(&game.situation()))?;

        let acting = game.current_seat();
        if acting == user_seat {
            if !user_turn(&mut game, &advisor, suggestions, out, err, stdin)? {
                break;
            }
        } else if !opponent_turn(&mut game, acting, out, err, stdin)? {
            break;
        }
    }

    if game.phase() == MatchPhase::Finished {
        finish_match(&game, log.as_deref(), out)?;
    }
    Ok(())
}

/// Pick the user's seat: flag first, then config, then an interactive
/// prompt. `None` means the user quit before choosing.
fn resolve_seat(
    arg: Option<SeatArg>,
    configured: Option<&str>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<Seat>, CliError> {
    if let Some(arg) = arg {
        return Ok(Some(arg.to_seat()));
    }
    if let Some(name) = configured
        && let Some(arg) = SeatArg::from_name(name)
    {
        return Ok(Some(arg.to_seat()));
    }
    loop {
        ui::prompt(out, "Your seat (landlord/up/down, 'quit' to exit): ")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match SeatArg::from_name(&line.to_lowercase()) {
            Some(arg) => return Ok(Some(arg.to_seat())),
            None => ui::write_error(err, &format!("unknown seat '{}'", line))?,
        }
    }
}

/// Read the user's hand (and the bottom when playing landlord) and deal.
/// `None` means the user quit or input ended.
fn setup_match(
    user_seat: Seat,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<Option<Match>, CliError> {
    loop {
        ui::prompt(out, "Your hand: ")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(None);
        };
        if line.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        let cards = match parse_cards(&line) {
            Ok(cards) if !cards.is_empty() => cards,
            Ok(_) => {
                ui::write_error(err, "hand must not be empty")?;
                continue;
            }
            Err(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
        };

        let bottom = if user_seat == Seat::Landlord {
            ui::prompt(out, "Bottom cards (3, or empty if unknown): ")?;
            let Some(line) = read_stdin_line(stdin) else {
                return Ok(None);
            };
            if line.is_empty() {
                None
            } else {
                match parse_cards(&line) {
                    Ok(cards) => Some(cards),
                    Err(msg) => {
                        ui::write_error(err, &msg)?;
                        continue;
                    }
                }
            }
        } else {
            None
        };

        let mut game = Match::new(user_seat);
        match game.deal(cards, bottom) {
            Ok(()) => {
                writeln!(out, "Hand set: {} cards", game.user_hand().len())?;
                return Ok(Some(game));
            }
            Err(e) => ui::write_error(err, &e.to_string())?,
        }
    }
}

/// One user turn: print suggestions, then read and submit a move until one
/// is accepted. Returns `Ok(false)` when the user quits or input ends.
fn user_turn(
    game: &mut Match,
    advisor: &Advisor,
    suggestions: usize,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    let report = advisor.advise(game, suggestions);
    for warning in &report.warnings {
        ui::display_warning(err, warning)?;
    }
    if !report.advice.is_empty() {
        writeln!(out, "Suggestions:")?;
        for (i, advice) in report.advice.iter().enumerate() {
            writeln!(out, "{}", format_advice(i + 1, advice))?;
        }
    }

    loop {
        ui::prompt(out, "Your move (cards, 'pass', 'help', 'quit'): ")?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(false);
        };
        let cards = match parse_turn_input(&line) {
            TurnInput::Quit => return Ok(false),
            TurnInput::Help => {
                show_help(out)?;
                continue;
            }
            TurnInput::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            TurnInput::Pass => Vec::new(),
            TurnInput::Cards(cards) => cards,
        };
        match game.submit(game.user_seat(), &cards) {
            Ok(record) => {
                writeln!(out, "You: {}", record.description)?;
                return Ok(true);
            }
            Err(e) if e.is_structural() => return Err(e.into()),
            Err(e) => {
                ui::write_error(err, &e.to_string())?;
                if matches!(e, MatchError::IllegalShape { .. } | MatchError::PassNotAllowed) {
                    show_legal_plays(game, out)?;
                }
            }
        }
    }
}

/// One opponent turn: read the play they made at the real table and record
/// it. Returns `Ok(false)` when the user quits or input ends.
fn opponent_turn(
    game: &mut Match,
    acting: Seat,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<bool, CliError> {
    loop {
        ui::prompt(out, &format!("{} plays (cards or 'pass'): ", acting))?;
        let Some(line) = read_stdin_line(stdin) else {
            return Ok(false);
        };
        let cards = match parse_turn_input(&line) {
            TurnInput::Quit => return Ok(false),
            TurnInput::Help => {
                show_help(out)?;
                continue;
            }
            TurnInput::Invalid(msg) => {
                ui::write_error(err, &msg)?;
                continue;
            }
            TurnInput::Pass => Vec::new(),
            TurnInput::Cards(cards) => cards,
        };
        match game.submit(acting, &cards) {
            Ok(record) => {
                writeln!(out, "{}", format_record(&record))?;
                return Ok(true);
            }
            Err(e) if e.is_structural() => return Err(e.into()),
            Err(e) => ui::write_error(err, &e.to_string())?,
        }
    }
}

fn finish_match(game: &Match, log: Option<&str>, out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out)?;
    match game.winner() {
        Some(winner) if winner == game.user_seat() => {
            writeln!(out, "Match over: you win ({} went out)", winner)?;
        }
        Some(winner) => {
            writeln!(out, "Match over: {} went out", winner)?;
        }
        None => {}
    }
    if let Some(path) = log {
        let mut logger = MatchLogger::create(path)?;
        logger.write(&MatchRecord {
            user_seat: game.user_seat(),
            moves: game.history().to_vec(),
            winner: game.winner(),
            ts: None,
        })?;
        writeln!(out, "Match log written to {}", path)?;
    }
    Ok(())
}

fn show_help(out: &mut dyn Write) -> Result<(), CliError> {
    writeln!(out, "Card notation:")?;
    writeln!(out, "  single: 3, K, A, 2, B (small joker), R (big joker)")?;
    writeln!(out, "  pair:   3 3      triple: K K K      bomb: A A A A")?;
    writeln!(out, "  rocket: B R")?;
    writeln!(out, "  compact runs also work: 345JQKA2")?;
    writeln!(out, "Commands: pass, help, quit")?;
    Ok(())
}

fn show_legal_plays(game: &Match, out: &mut dyn Write) -> Result<(), CliError> {
    let candidates = game.legal_candidates_for_user();
    if candidates.is_empty() {
        return Ok(());
    }
    writeln!(out, "Legal plays:")?;
    for candidate in candidates {
        writeln!(out, "  {}", candidate.description)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(seat: SeatArg, input: &str) -> (String, String, Result<(), CliError>) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut stdin = Cursor::new(input.as_bytes().to_vec());
        let result = handle_play_command(
            Some(seat),
            Some(2),
            None,
            &mut out,
            &mut err,
            &mut stdin,
        );
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
            result,
        )
    }

    #[test]
    fn test_session_quits_during_hand_entry() {
        let (out, _err, result) = run_session(SeatArg::Up, "quit\n");
        assert!(result.is_ok());
        assert!(out.contains("Your hand:"));
    }

    #[test]
    fn test_session_eof_is_graceful() {
        let (_out, _err, result) = run_session(SeatArg::Up, "");
        assert!(result.is_ok());
    }

    #[test]
    fn test_bad_hand_reprompts() {
        let (_out, err, result) = run_session(SeatArg::Up, "3 4 X\nquit\n");
        assert!(result.is_ok());
        assert!(err.contains("'X'"));
    }

    #[test]
    fn test_landlord_session_plays_and_quits() {
        // landlord leads immediately; play the single 3 then quit
        let input = "3 4 5\n\n3\nquit\n";
        let (out, _err, result) = run_session(SeatArg::Landlord, input);
        assert!(result.is_ok());
        assert!(out.contains("Suggestions:"));
        assert!(out.contains("You: single 3"));
    }

    #[test]
    fn test_illegal_move_shows_legal_plays() {
        // opponents lead a king; following with a 3 must be rejected with
        // guidance, then pass is accepted
        let input = "3 4 A\nK\npass\n3\npass\nquit\n";
        let (out, err, result) = run_session(SeatArg::Down, input);
        assert!(result.is_ok(), "unexpected error: {:?}", result);
        assert!(err.contains("does not beat"));
        assert!(out.contains("Legal plays:"));
    }
}
