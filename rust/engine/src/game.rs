use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

use crate::cards::{display_cards, validate_multiplicity, CardValue};
use crate::errors::MatchError;
use crate::legal::{beats, legal_candidates};
use crate::moves::{classify, ClassifiedMove, MoveShape};

/// Cards held by the landlord after picking up the bottom
pub const LANDLORD_CARDS: usize = 20;
/// Cards held by each farmer
pub const FARMER_CARDS: usize = 17;
/// Size of the face-down bottom set the landlord picks up
pub const BOTTOM_CARDS: usize = 3;

/// One of the three fixed roles in a match. Roles never change once the
/// match is created; turn order is the fixed cycle
/// Landlord → LandlordUp → LandlordDown → Landlord.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Seat {
    /// The landlord, who always leads the first trick
    Landlord,
    /// The farmer seated upstream of the landlord
    LandlordUp,
    /// The farmer seated downstream of the landlord
    LandlordDown,
}

impl Seat {
    pub fn next(self) -> Seat {
        match self {
            Seat::Landlord => Seat::LandlordUp,
            Seat::LandlordUp => Seat::LandlordDown,
            Seat::LandlordDown => Seat::Landlord,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Seat::Landlord => "landlord",
            Seat::LandlordUp => "landlord-up",
            Seat::LandlordDown => "landlord-down",
        }
    }

    fn index(self) -> usize {
        match self {
            Seat::Landlord => 0,
            Seat::LandlordUp => 1,
            Seat::LandlordDown => 2,
        }
    }
}

pub fn all_seats() -> [Seat; 3] {
    [Seat::Landlord, Seat::LandlordUp, Seat::LandlordDown]
}

impl fmt::Display for Seat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Lifecycle of a match: hands not yet assigned, turns proceeding, or
/// terminal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    Setup,
    InProgress,
    Finished,
}

/// Fixed-size aggregate with exactly one slot per seat. All three entries
/// always exist, so seat lookups can never miss.
#[derive(Debug, Clone)]
pub struct SeatMap<T>([T; 3]);

impl<T> SeatMap<T> {
    pub fn from_fn(mut f: impl FnMut(Seat) -> T) -> Self {
        SeatMap([
            f(Seat::Landlord),
            f(Seat::LandlordUp),
            f(Seat::LandlordDown),
        ])
    }

    pub fn iter(&self) -> impl Iterator<Item = (Seat, &T)> {
        all_seats().into_iter().map(move |s| (s, &self.0[s.index()]))
    }
}

impl<T> Index<Seat> for SeatMap<T> {
    type Output = T;
    fn index(&self, seat: Seat) -> &T {
        &self.0[seat.index()]
    }
}

impl<T> IndexMut<Seat> for SeatMap<T> {
    fn index_mut(&mut self, seat: Seat) -> &mut T {
        &mut self.0[seat.index()]
    }
}

/// Per-seat tracking. Only the user's seat carries known hand contents;
/// opponents are tracked as a remaining count plus the cards they have
/// already shown by playing them.
#[derive(Debug, Clone, Default)]
pub struct SeatState {
    /// Known hand, sorted ascending; empty for non-user seats
    hand: Vec<CardValue>,
    /// Cards this seat has played, in play order
    played: Vec<CardValue>,
    /// Cards believed still held
    remaining: usize,
    /// Whether this is the human-controlled seat
    is_user: bool,
}

impl SeatState {
    pub fn hand(&self) -> &[CardValue] {
        &self.hand
    }
    pub fn played(&self) -> &[CardValue] {
        &self.played
    }
    pub fn remaining(&self) -> usize {
        self.remaining
    }
    pub fn is_user(&self) -> bool {
        self.is_user
    }
}

/// Immutable record of one submitted move. History is append-only.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    pub seat: Seat,
    /// Played cards, sorted ascending; empty for a pass
    pub cards: Vec<CardValue>,
    pub shape: MoveShape,
    pub description: String,
    /// Position in the match history, starting at 0
    pub seq: usize,
}

impl MoveRecord {
    pub fn is_pass(&self) -> bool {
        self.shape == MoveShape::Pass
    }

    pub fn classified(&self) -> ClassifiedMove {
        ClassifiedMove {
            shape: self.shape,
            cards: self.cards.clone(),
            description: self.description.clone(),
        }
    }
}

/// Read-only projection of the table for display. Never mutates the match.
#[derive(Debug, Clone, Serialize)]
pub struct Situation {
    pub phase: MatchPhase,
    pub current_seat: Seat,
    pub user_seat: Seat,
    pub is_user_turn: bool,
    /// Whether the acting seat must beat a standing move (or pass)
    pub need_follow: bool,
    pub last_move: Option<LastMoveView>,
    pub seats: Vec<SeatView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LastMoveView {
    pub seat: Seat,
    pub cards: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeatView {
    pub seat: Seat,
    pub remaining: usize,
    pub is_user: bool,
    /// Display string of the known hand; present for the user seat only
    pub hand: Option<String>,
}

/// One tracked Dou Dizhu match: three seats, a move history, and the pointer
/// to the last binding (non-pass) move.
///
/// The match is an exclusively-owned aggregate driven turn-by-turn from a
/// single controlling context. Every mutating operation validates fully
/// before touching state, so a rejected call leaves the match untouched.
#[derive(Debug, Clone)]
pub struct Match {
    user_seat: Seat,
    phase: MatchPhase,
    current: Seat,
    seats: SeatMap<SeatState>,
    history: Vec<MoveRecord>,
    /// Index into `history` of the most recent non-pass record
    binding: Option<usize>,
    bottom: Vec<CardValue>,
}

impl Match {
    /// Create a match in the setup phase with the given human-controlled
    /// seat. Hands are assigned later via [`Match::deal`].
    pub fn new(user_seat: Seat) -> Self {
        Self {
            user_seat,
            phase: MatchPhase::Setup,
            current: Seat::Landlord,
            seats: SeatMap::from_fn(|s| SeatState {
                is_user: s == user_seat,
                ..SeatState::default()
            }),
            history: Vec::new(),
            binding: None,
            bottom: Vec::new(),
        }
    }

    /// Assign the user's hand and start the match.
    ///
    /// When the user plays Landlord the 3-card bottom may be supplied and is
    /// merged into the landlord hand. Opponents receive only remaining-card
    /// counts (20 for the landlord, 17 per farmer); their contents are never
    /// tracked. Fails without state change if the cards break copy limits,
    /// the bottom is malformed, or hands were already dealt.
    pub fn deal(
        &mut self,
        user_cards: Vec<CardValue>,
        bottom: Option<Vec<CardValue>>,
    ) -> Result<(), MatchError> {
        match self.phase {
            MatchPhase::Setup => {}
            MatchPhase::InProgress => return Err(MatchError::AlreadyDealt),
            MatchPhase::Finished => return Err(MatchError::MatchOver),
        }

        let bottom = match bottom {
            Some(b) => {
                if self.user_seat != Seat::Landlord || b.len() != BOTTOM_CARDS {
                    return Err(MatchError::MalformedHand);
                }
                b
            }
            None => Vec::new(),
        };

        let mut full: Vec<CardValue> = user_cards;
        full.extend_from_slice(&bottom);
        if !validate_multiplicity(&full) {
            return Err(MatchError::MalformedHand);
        }
        full.sort();

        let user_count = full.len();
        let user_seat = self.user_seat;
        for seat in all_seats() {
            let slot = &mut self.seats[seat];
            if seat == user_seat {
                slot.hand = full.clone();
                slot.remaining = user_count;
            } else {
                slot.remaining = if seat == Seat::Landlord {
                    LANDLORD_CARDS
                } else {
                    FARMER_CARDS
                };
            }
        }
        self.bottom = bottom;
        self.phase = MatchPhase::InProgress;
        Ok(())
    }

    /// Submit a move for the acting seat and apply it transactionally.
    ///
    /// Empty `cards` is a pass. Validation happens in full before any
    /// mutation: phase, turn ownership, pass legality, copy limits, card
    /// ownership (user seat) or claimed count (opponents, whose contents are
    /// trusted), and the beat rule against the standing binding move.
    /// Unclassified compound plays are accepted without beat comparison;
    /// following them is outside the recognized-shape ruleset.
    ///
    /// On success the record is appended, the binding pointer updated for
    /// non-pass moves, the turn advanced, and the match flipped to finished
    /// the instant the actor's remaining count reaches zero.
    pub fn submit(&mut self, seat: Seat, cards: &[CardValue]) -> Result<MoveRecord, MatchError> {
        match self.phase {
            MatchPhase::InProgress => {}
            MatchPhase::Setup => return Err(MatchError::NotStarted),
            MatchPhase::Finished => return Err(MatchError::MatchOver),
        }
        if seat != self.current {
            return Err(MatchError::OutOfTurn {
                expected: self.current,
                actual: seat,
            });
        }

        let classified = if cards.is_empty() {
            if self.follow_target(seat).is_none() {
                return Err(MatchError::PassNotAllowed);
            }
            ClassifiedMove::pass()
        } else {
            if !validate_multiplicity(cards) {
                return Err(MatchError::MalformedHand);
            }
            if self.seats[seat].is_user {
                self.check_ownership(seat, cards)?;
            } else if cards.len() > self.seats[seat].remaining {
                return Err(MatchError::CountExceeded {
                    seat,
                    remaining: self.seats[seat].remaining,
                    claimed: cards.len(),
                });
            }
            let classified = classify(cards);
            if let Some(target) = self.follow_target(seat) {
                // Compound plays are recorded as claimed; only recognized
                // shapes are held to the beat rule.
                if classified.shape != MoveShape::Unclassified && !beats(&classified, &target) {
                    return Err(MatchError::IllegalShape {
                        candidate: classified.description,
                        target: target.description,
                    });
                }
            }
            classified
        };

        // validation complete; mutate
        let slot = &mut self.seats[seat];
        if !classified.is_pass() {
            if slot.is_user {
                for card in &classified.cards {
                    if let Some(pos) = slot.hand.iter().position(|c| c == card) {
                        slot.hand.remove(pos);
                    }
                }
            }
            slot.played.extend_from_slice(&classified.cards);
            slot.remaining -= classified.cards.len();
        }

        let record = MoveRecord {
            seat,
            cards: classified.cards,
            shape: classified.shape,
            description: classified.description,
            seq: self.history.len(),
        };
        if !record.is_pass() {
            self.binding = Some(record.seq);
        }
        self.history.push(record.clone());

        if self.seats[seat].remaining == 0 {
            self.phase = MatchPhase::Finished;
        } else {
            self.current = self.current.next();
        }
        Ok(record)
    }

    fn check_ownership(&self, seat: Seat, cards: &[CardValue]) -> Result<(), MatchError> {
        let hand = &self.seats[seat].hand;
        let mut available = hand.clone();
        for card in cards {
            match available.iter().position(|c| c == card) {
                Some(pos) => {
                    available.remove(pos);
                }
                None => return Err(MatchError::UnownedCard(*card)),
            }
        }
        Ok(())
    }

    /// The move `seat` would have to beat this turn, if any. The standing
    /// binding move stops binding its own author: when it comes back around
    /// untouched the trick is claimed and the seat leads freely.
    pub fn follow_target(&self, seat: Seat) -> Option<ClassifiedMove> {
        let record = self.binding.map(|i| &self.history[i])?;
        if record.seat == seat {
            None
        } else {
            Some(record.classified())
        }
    }

    /// Last binding (non-pass) move record, if any move has bound the table.
    pub fn binding_move(&self) -> Option<&MoveRecord> {
        self.binding.map(|i| &self.history[i])
    }

    /// Complete legal candidate set for the user seat this turn, per the
    /// legality engine. Empty when the match is not in progress or it is not
    /// the user's turn.
    pub fn legal_candidates_for_user(&self) -> Vec<ClassifiedMove> {
        if self.phase != MatchPhase::InProgress || self.current != self.user_seat {
            return Vec::new();
        }
        let target = self.follow_target(self.user_seat);
        legal_candidates(&self.seats[self.user_seat].hand, target.as_ref())
    }

    /// Read-only projection of the current table state.
    pub fn situation(&self) -> Situation {
        Situation {
            phase: self.phase,
            current_seat: self.current,
            user_seat: self.user_seat,
            is_user_turn: self.current == self.user_seat,
            need_follow: self.follow_target(self.current).is_some(),
            last_move: self.history.last().map(|r| LastMoveView {
                seat: r.seat,
                cards: display_cards(&r.cards),
                description: r.description.clone(),
            }),
            seats: self
                .seats
                .iter()
                .map(|(seat, s)| SeatView {
                    seat,
                    remaining: s.remaining,
                    is_user: s.is_user,
                    hand: s.is_user.then(|| display_cards(&s.hand)),
                })
                .collect(),
        }
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }
    pub fn current_seat(&self) -> Seat {
        self.current
    }
    pub fn user_seat(&self) -> Seat {
        self.user_seat
    }
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }
    pub fn seat(&self, seat: Seat) -> &SeatState {
        &self.seats[seat]
    }
    pub fn user_hand(&self) -> &[CardValue] {
        &self.seats[self.user_seat].hand
    }
    pub fn bottom(&self) -> &[CardValue] {
        &self.bottom
    }

    /// Winner of a finished match: the seat that emptied its hand.
    pub fn winner(&self) -> Option<Seat> {
        if self.phase != MatchPhase::Finished {
            return None;
        }
        self.history.last().map(|r| r.seat)
    }
}
