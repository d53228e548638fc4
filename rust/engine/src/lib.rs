//! # doumate-engine: Dou Dizhu Assistant Core
//!
//! The game-tracking core of the Doumate battle assistant: a state machine
//! for one three-player Dou Dizhu (Landlord) match, a move classifier, and a
//! legality engine that enumerates follow-up candidates. The human's hand is
//! tracked fully; opponents are tracked only as remaining-card counts, with
//! their plays becoming observed history.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card value domain (3 through red joker), ordering, copy limits
//! - [`moves`] - Move classification (single/pair/triple/bomb/rocket) and descriptors
//! - [`legal`] - Beat rules and exhaustive legal-candidate enumeration
//! - [`game`] - Match state machine: seats, hands, history, turn rotation
//! - [`logger`] - Match record serialization to JSONL
//! - [`errors`] - Error types for match operations
//!
//! ## Quick Start
//!
//! ```rust
//! use doumate_engine::cards::CardValue;
//! use doumate_engine::game::{Match, Seat};
//! use doumate_engine::moves::MoveShape;
//!
//! // Track a match where the human plays landlord-down
//! let mut game = Match::new(Seat::LandlordDown);
//! game.deal(vec![CardValue::Ace, CardValue::Ace, CardValue::Five], None)
//!     .expect("valid hand");
//!
//! // The landlord leads; record their claimed play
//! let record = game
//!     .submit(Seat::Landlord, &[CardValue::King])
//!     .expect("legal lead");
//! assert_eq!(record.shape, MoveShape::Single);
//! ```
//!
//! ## Legal Follow-Ups
//!
//! The legality engine enumerates every recognized shape that beats the
//! standing move:
//!
//! ```rust
//! use doumate_engine::cards::CardValue;
//! use doumate_engine::legal::legal_candidates;
//! use doumate_engine::moves::classify;
//!
//! let hand = [CardValue::Ace, CardValue::Ace, CardValue::Four];
//! let target = classify(&[CardValue::King]);
//! let candidates = legal_candidates(&hand, Some(&target));
//! // pass plus the single ace; the pair is a cardinality mismatch
//! assert_eq!(candidates.len(), 2);
//! ```

pub mod cards;
pub mod errors;
pub mod game;
pub mod legal;
pub mod logger;
pub mod moves;
