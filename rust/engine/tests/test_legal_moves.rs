use doumate_engine::cards::CardValue;
use doumate_engine::legal::{beats, legal_candidates};
use doumate_engine::moves::{classify, ClassifiedMove, MoveShape};

fn pairs_in(candidates: &[ClassifiedMove]) -> Vec<CardValue> {
    candidates
        .iter()
        .filter(|c| c.shape == MoveShape::Pair)
        .filter_map(|c| c.rank())
        .collect()
}

#[test]
fn lead_enumerates_every_formable_shape_without_pass() {
    let hand = vec![
        CardValue::Three,
        CardValue::Three,
        CardValue::Three,
        CardValue::King,
    ];
    let candidates = legal_candidates(&hand, None);
    assert!(candidates.iter().all(|c| !c.is_pass()));

    let shapes: Vec<(MoveShape, Option<CardValue>)> =
        candidates.iter().map(|c| (c.shape, c.rank())).collect();
    assert!(shapes.contains(&(MoveShape::Single, Some(CardValue::Three))));
    assert!(shapes.contains(&(MoveShape::Pair, Some(CardValue::Three))));
    assert!(shapes.contains(&(MoveShape::Triple, Some(CardValue::Three))));
    assert!(shapes.contains(&(MoveShape::Single, Some(CardValue::King))));
    assert_eq!(shapes.len(), 4);
}

#[test]
fn pair_follow_candidates_are_exactly_the_strictly_higher_held_pairs() {
    let target = classify(&[CardValue::Nine, CardValue::Nine]);
    let hand = vec![
        CardValue::Seven,
        CardValue::Seven,
        CardValue::Nine,
        CardValue::Nine,
        CardValue::Queen,
        CardValue::Queen,
        CardValue::Ace,
        CardValue::Ace,
        CardValue::Two,
    ];
    let candidates = legal_candidates(&hand, Some(&target));
    assert_eq!(
        pairs_in(&candidates),
        vec![CardValue::Queen, CardValue::Ace]
    );
    // a lone 2 cannot form the pair even though it outranks 9
    assert!(candidates.iter().all(|c| c.rank() != Some(CardValue::Two)));
}

#[test]
fn following_offers_pass_first() {
    let target = classify(&[CardValue::Three]);
    let candidates = legal_candidates(&[CardValue::Four], Some(&target));
    assert!(candidates[0].is_pass());
}

#[test]
fn rocket_as_target_yields_pass_only() {
    let target = classify(&[CardValue::BlackJoker, CardValue::RedJoker]);
    let hand = vec![
        CardValue::Two,
        CardValue::Two,
        CardValue::Two,
        CardValue::Two,
        CardValue::Ace,
    ];
    let candidates = legal_candidates(&hand, Some(&target));
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].is_pass());
}

#[test]
fn bomb_follows_any_plain_shape() {
    let target = classify(&[CardValue::Ace, CardValue::Ace, CardValue::Ace]);
    let hand = vec![CardValue::Four; 4];
    let candidates = legal_candidates(&hand, Some(&target));
    assert!(candidates.iter().any(|c| c.shape == MoveShape::Bomb));
}

#[test]
fn bomb_follow_requires_a_higher_bomb() {
    let target = classify(&[CardValue::Jack; 4]);
    let low = vec![CardValue::Five; 4];
    let high = vec![CardValue::King; 4];

    let candidates = legal_candidates(&low, Some(&target));
    assert!(candidates.iter().all(|c| c.shape != MoveShape::Bomb));

    let candidates = legal_candidates(&high, Some(&target));
    assert!(candidates.iter().any(|c| c.shape == MoveShape::Bomb));
}

#[test]
fn rocket_is_generated_when_both_jokers_are_held() {
    let target = classify(&[CardValue::Two; 4]);
    let hand = vec![CardValue::BlackJoker, CardValue::RedJoker, CardValue::Three];
    let candidates = legal_candidates(&hand, Some(&target));
    assert!(candidates.iter().any(|c| c.shape == MoveShape::Rocket));
}

#[test]
fn unclassified_target_admits_only_bombs_and_rocket() {
    let target = classify(&[CardValue::Three, CardValue::Four, CardValue::Five]);
    assert_eq!(target.shape, MoveShape::Unclassified);
    let hand = vec![
        CardValue::Six,
        CardValue::Seven,
        CardValue::Eight,
        CardValue::Nine,
        CardValue::Nine,
        CardValue::Nine,
        CardValue::Nine,
    ];
    let candidates = legal_candidates(&hand, Some(&target));
    assert!(candidates[0].is_pass());
    assert!(candidates[1..]
        .iter()
        .all(|c| c.shape == MoveShape::Bomb || c.shape == MoveShape::Rocket));
}

#[test]
fn empty_non_pass_set_is_a_normal_outcome() {
    let target = classify(&[CardValue::Two]);
    let candidates = legal_candidates(&[CardValue::Three, CardValue::Four], Some(&target));
    assert_eq!(candidates.len(), 1);
    assert!(candidates[0].is_pass());
}

#[test]
fn beats_orders_shapes_correctly() {
    let single_k = classify(&[CardValue::King]);
    let single_a = classify(&[CardValue::Ace]);
    let pair_a = classify(&[CardValue::Ace, CardValue::Ace]);
    let bomb_3 = classify(&[CardValue::Three; 4]);
    let bomb_7 = classify(&[CardValue::Seven; 4]);
    let rocket = classify(&[CardValue::BlackJoker, CardValue::RedJoker]);

    assert!(beats(&single_a, &single_k));
    assert!(!beats(&single_k, &single_a));
    assert!(!beats(&pair_a, &single_k));
    assert!(beats(&bomb_3, &pair_a));
    assert!(beats(&bomb_7, &bomb_3));
    assert!(!beats(&bomb_3, &bomb_7));
    assert!(beats(&rocket, &bomb_7));
    assert!(!beats(&bomb_7, &rocket));
    assert!(!beats(&rocket, &rocket));
}
