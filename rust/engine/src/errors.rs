use thiserror::Error;

use crate::cards::CardValue;
use crate::game::Seat;

/// Errors raised by match operations. Every failure leaves the match exactly
/// as it was before the call.
///
/// `NotStarted`, `AlreadyDealt`, and `MatchOver` are structural misuses of
/// the API; the remaining variants are ordinary input rejections the caller
/// is expected to report and retry.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    #[error("Hand violates per-value copy limits")]
    MalformedHand,
    #[error("It's not {actual}'s turn (expected {expected})")]
    OutOfTurn { expected: Seat, actual: Seat },
    #[error("Card {0:?} is not in the tracked hand")]
    UnownedCard(CardValue),
    #[error("{seat} claims {claimed} cards but only {remaining} remain")]
    CountExceeded {
        seat: Seat,
        remaining: usize,
        claimed: usize,
    },
    #[error("{candidate} does not beat {target}")]
    IllegalShape { candidate: String, target: String },
    #[error("Cannot pass when leading the trick")]
    PassNotAllowed,
    #[error("Match has not been dealt yet")]
    NotStarted,
    #[error("Hands already dealt")]
    AlreadyDealt,
    #[error("Match is finished")]
    MatchOver,
}

impl MatchError {
    /// True for programmer-error-class failures (calling an operation in the
    /// wrong phase), as opposed to user-input rejections.
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            MatchError::NotStarted | MatchError::AlreadyDealt | MatchError::MatchOver
        )
    }
}
