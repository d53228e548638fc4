//! Command-line argument definitions for the Doumate assistant.

use clap::{Parser, Subcommand, ValueEnum};

use doumate_engine::game::Seat;

#[derive(Debug, Parser)]
#[command(
    name = "doumate",
    version,
    about = "Dou Dizhu battle assistant: tracks a live match and suggests plays"
)]
pub struct DoumateCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run an interactive assistant session for one match
    Play {
        /// Seat the human occupies
        #[arg(long, value_enum)]
        seat: Option<SeatArg>,
        /// Number of suggestions shown per turn (default from config: 3)
        #[arg(long)]
        suggestions: Option<usize>,
        /// Append the finished match to this JSONL log file
        #[arg(long)]
        log: Option<String>,
    },
    /// Classify a card set and print its shape
    Classify {
        /// Card notation, e.g. "K K" or "345JQKA"
        #[arg(long)]
        cards: String,
    },
    /// Display current configuration settings
    Cfg,
}

/// Seat selection for the `play` command.
#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum SeatArg {
    /// The landlord seat
    Landlord,
    /// The farmer upstream of the landlord
    Up,
    /// The farmer downstream of the landlord
    Down,
}

impl SeatArg {
    pub fn to_seat(self) -> Seat {
        match self {
            SeatArg::Landlord => Seat::Landlord,
            SeatArg::Up => Seat::LandlordUp,
            SeatArg::Down => Seat::LandlordDown,
        }
    }

    pub fn from_name(name: &str) -> Option<SeatArg> {
        match name {
            "landlord" => Some(SeatArg::Landlord),
            "up" => Some(SeatArg::Up),
            "down" => Some(SeatArg::Down),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatArg::Landlord => "landlord",
            SeatArg::Up => "up",
            SeatArg::Down => "down",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_arg_round_trip() {
        for arg in [SeatArg::Landlord, SeatArg::Up, SeatArg::Down] {
            assert!(matches!(
                SeatArg::from_name(arg.as_str()),
                Some(parsed) if parsed.as_str() == arg.as_str()
            ));
        }
        assert!(SeatArg::from_name("dealer").is_none());
    }

    #[test]
    fn test_parse_play_with_seat() {
        let cli = DoumateCli::try_parse_from(["doumate", "play", "--seat", "landlord"]).unwrap();
        match cli.cmd {
            Commands::Play { seat, .. } => {
                assert!(matches!(seat, Some(SeatArg::Landlord)));
            }
            _ => panic!("Expected Commands::Play variant"),
        }
    }

    #[test]
    fn test_parse_classify() {
        let cli = DoumateCli::try_parse_from(["doumate", "classify", "--cards", "K K"]).unwrap();
        match cli.cmd {
            Commands::Classify { cards } => assert_eq!(cards, "K K"),
            _ => panic!("Expected Commands::Classify variant"),
        }
    }

    #[test]
    fn test_rejects_unknown_seat() {
        let result = DoumateCli::try_parse_from(["doumate", "play", "--seat", "dealer"]);
        assert!(result.is_err());
    }
}
