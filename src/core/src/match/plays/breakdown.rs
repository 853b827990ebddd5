use rand::Rng;
use rand::seq::SliceRandom;

const TOUCHDOWN: i32 = 7;
const GREEDY_TAIL: i32 = 13;

/// Canonical split of a remainder in `0..=13` into scoring plays.
fn tail(remaining: i32) -> &'static [i32] {
    match remaining {
        0 => &[],
        2 => &[2],
        3 => &[3],
        4 => &[2, 2],
        5 => &[3, 2],
        6 => &[3, 3],
        7 => &[7],
        8 => &[8],
        9 => &[7, 2],
        10 => &[7, 3],
        11 => &[8, 3],
        12 => &[7, 3, 2],
        13 => &[7, 3, 3],
        _ => &[],
    }
}

pub struct ScoreBreakdown;

impl ScoreBreakdown {
    /// Deterministic multiset of scoring plays summing to `score`.
    ///
    /// Touchdowns are peeled off while more than 13 points remain and the rest
    /// is looked up in a fixed table. A remainder with no table entry (a lone
    /// point) becomes a single play of that value.
    pub fn partition(score: i32) -> Vec<i32> {
        if score <= 0 {
            return Vec::new();
        }

        let mut plays = Vec::with_capacity((score / TOUCHDOWN) as usize + 3);
        let mut remaining = score;

        while remaining > GREEDY_TAIL {
            plays.push(TOUCHDOWN);
            remaining -= TOUCHDOWN;
        }

        match tail(remaining) {
            [] if remaining != 0 => plays.push(remaining),
            chunks => plays.extend_from_slice(chunks),
        }

        plays
    }

    /// Partition in shuffled order. No draw is made for a scoreless team.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R, score: i32) -> Vec<i32> {
        let mut plays = Self::partition(score);

        if !plays.is_empty() {
            plays.shuffle(rng);
        }

        plays
    }
}
