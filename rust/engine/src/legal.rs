use crate::cards::{count_by_value, CardValue};
use crate::moves::{classify, ClassifiedMove, MoveShape};

/// Decide whether `candidate` beats `target` under the follow rules.
///
/// Rank shapes (single, pair, triple, bomb) beat the same shape at a higher
/// rank. A bomb additionally beats any non-bomb, non-rocket shape. The
/// rocket beats everything except itself; nothing beats the rocket. Pass and
/// unclassified candidates never beat anything.
pub fn beats(candidate: &ClassifiedMove, target: &ClassifiedMove) -> bool {
    match (candidate.shape, target.shape) {
        (MoveShape::Pass, _) | (MoveShape::Unclassified, _) => false,
        (_, MoveShape::Rocket) => false,
        (MoveShape::Rocket, _) => true,
        (MoveShape::Bomb, MoveShape::Bomb) => candidate.rank() > target.rank(),
        (MoveShape::Bomb, _) => true,
        (a, b) if a == b => candidate.rank() > target.rank(),
        _ => false,
    }
}

/// Enumerate the complete set of recognized shapes `hand` can legally play.
///
/// With `to_beat == None` the seat leads a fresh trick: every formable
/// recognized shape is legal and pass is not offered (the lead may not be
/// declined). With `to_beat == Some(m)` the seat follows: pass comes first,
/// then one candidate per rank satisfying [`beats`]. Enumeration is
/// exhaustive over the recognized shapes, never sampled.
///
/// Following an unclassified (compound) play only bombs and the rocket are
/// generated; matching compound shapes is out of scope. Following the rocket
/// yields pass alone. An empty non-pass set is a normal outcome, not an
/// error.
pub fn legal_candidates(
    hand: &[CardValue],
    to_beat: Option<&ClassifiedMove>,
) -> Vec<ClassifiedMove> {
    let counts = count_by_value(hand);
    let has_rocket = hand.contains(&CardValue::BlackJoker) && hand.contains(&CardValue::RedJoker);
    let mut out = Vec::new();

    match to_beat {
        None => {
            for &(v, n) in &counts {
                out.push(classify(&[v]));
                if n >= 2 {
                    out.push(classify(&vec![v; 2]));
                }
                if n >= 3 {
                    out.push(classify(&vec![v; 3]));
                }
                if n >= 4 {
                    out.push(classify(&vec![v; 4]));
                }
            }
            if has_rocket {
                out.push(classify(&[CardValue::BlackJoker, CardValue::RedJoker]));
            }
        }
        Some(target) => {
            out.push(ClassifiedMove::pass());
            if target.shape == MoveShape::Rocket {
                return out;
            }

            // same-shape follows at a higher rank
            let needed = match target.shape {
                MoveShape::Single => Some(1),
                MoveShape::Pair => Some(2),
                MoveShape::Triple => Some(3),
                _ => None,
            };
            if let (Some(size), Some(rank)) = (needed, target.rank()) {
                for &(v, n) in &counts {
                    if n >= size && v > rank {
                        out.push(classify(&vec![v; size]));
                    }
                }
            }

            // bombs over anything non-bomb, or over a lower bomb
            let bomb_floor = match target.shape {
                MoveShape::Bomb => target.rank(),
                _ => None,
            };
            for &(v, n) in &counts {
                if n >= 4 && bomb_floor.map_or(true, |r| v > r) {
                    out.push(classify(&vec![v; 4]));
                }
            }

            if has_rocket {
                out.push(classify(&[CardValue::BlackJoker, CardValue::RedJoker]));
            }
        }
    }
    out
}
