use doumate_engine::cards::CardValue;
use doumate_engine::errors::MatchError;
use doumate_engine::game::{Match, MatchPhase, Seat, FARMER_CARDS, LANDLORD_CARDS};

fn farmer_hand() -> Vec<CardValue> {
    let mut hand = Vec::new();
    for v in [
        CardValue::Three,
        CardValue::Four,
        CardValue::Five,
        CardValue::Six,
    ] {
        hand.extend(std::iter::repeat(v).take(4));
    }
    hand.push(CardValue::BlackJoker);
    hand
}

#[test]
fn new_match_starts_in_setup_with_landlord_to_act() {
    let game = Match::new(Seat::LandlordUp);
    assert_eq!(game.phase(), MatchPhase::Setup);
    assert_eq!(game.current_seat(), Seat::Landlord);
    assert_eq!(game.user_seat(), Seat::LandlordUp);
    assert!(game.history().is_empty());
}

#[test]
fn deal_assigns_user_hand_and_opponent_counts() {
    let mut game = Match::new(Seat::LandlordDown);
    let hand = farmer_hand();
    assert_eq!(hand.len(), FARMER_CARDS);
    game.deal(hand, None).unwrap();

    assert_eq!(game.phase(), MatchPhase::InProgress);
    assert_eq!(game.user_hand().len(), FARMER_CARDS);
    assert_eq!(game.seat(Seat::Landlord).remaining(), LANDLORD_CARDS);
    assert_eq!(game.seat(Seat::LandlordUp).remaining(), FARMER_CARDS);
    assert!(game.seat(Seat::Landlord).hand().is_empty());
}

#[test]
fn deal_sorts_the_user_hand() {
    let mut game = Match::new(Seat::LandlordUp);
    game.deal(vec![CardValue::Ace, CardValue::Three, CardValue::King], None)
        .unwrap();
    assert_eq!(
        game.user_hand(),
        &[CardValue::Three, CardValue::King, CardValue::Ace]
    );
}

#[test]
fn landlord_bottom_is_merged_into_the_hand() {
    let mut game = Match::new(Seat::Landlord);
    let bottom = vec![CardValue::Two, CardValue::BlackJoker, CardValue::RedJoker];
    game.deal(vec![CardValue::Three, CardValue::Four], Some(bottom.clone()))
        .unwrap();
    assert_eq!(game.user_hand().len(), 5);
    assert!(game.user_hand().contains(&CardValue::RedJoker));
    assert_eq!(game.bottom(), &bottom[..]);
}

#[test]
fn bottom_is_rejected_for_farmer_seats() {
    let mut game = Match::new(Seat::LandlordUp);
    let result = game.deal(
        vec![CardValue::Three],
        Some(vec![CardValue::Two, CardValue::Two, CardValue::Ace]),
    );
    assert_eq!(result, Err(MatchError::MalformedHand));
    assert_eq!(game.phase(), MatchPhase::Setup);
}

#[test]
fn bottom_must_hold_exactly_three_cards() {
    let mut game = Match::new(Seat::Landlord);
    let result = game.deal(vec![CardValue::Three], Some(vec![CardValue::Two]));
    assert_eq!(result, Err(MatchError::MalformedHand));
}

#[test]
fn copy_limits_are_enforced_across_hand_and_bottom() {
    let mut game = Match::new(Seat::Landlord);
    // fifth 3 arrives via the bottom
    let result = game.deal(
        vec![CardValue::Three; 4],
        Some(vec![CardValue::Three, CardValue::Four, CardValue::Five]),
    );
    assert_eq!(result, Err(MatchError::MalformedHand));

    let result = game.deal(vec![CardValue::BlackJoker; 2], None);
    assert_eq!(result, Err(MatchError::MalformedHand));
}

#[test]
fn dealing_twice_is_rejected() {
    let mut game = Match::new(Seat::LandlordUp);
    game.deal(vec![CardValue::Three], None).unwrap();
    let result = game.deal(vec![CardValue::Four], None);
    assert_eq!(result, Err(MatchError::AlreadyDealt));
}

#[test]
fn submit_before_deal_is_rejected() {
    let mut game = Match::new(Seat::LandlordUp);
    let result = game.submit(Seat::Landlord, &[CardValue::Three]);
    assert_eq!(result, Err(MatchError::NotStarted));
}
