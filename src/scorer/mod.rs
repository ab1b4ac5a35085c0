pub mod fairness;
pub mod pairs;
pub mod types;

pub use self::fairness::{all_good, is_fair, FairnessPolicy};
pub use self::pairs::PairMatrix;
pub use self::types::Evaluation;
use crate::schedule::Schedule;

/// Cost model. Finds the highest pair co-occurrence in `schedule`, the
/// number of pairs at that value, and the pairs themselves (ascending `i`,
/// then ascending `j`).
pub fn evaluate(schedule: &Schedule, n: usize) -> Evaluation {
    let pairs = PairMatrix::from_schedule(schedule, n);
    evaluate_matrix(&pairs)
}

pub fn evaluate_matrix(pairs: &PairMatrix) -> Evaluation {
    let mut best: Option<u32> = None;
    let mut bad_pairs = Vec::new();

    for (i, j, c) in pairs.upper_triangle() {
        match best {
            Some(b) if c < b => {}
            Some(b) if c == b => bad_pairs.push((i, j)),
            _ => {
                best = Some(c);
                bad_pairs.clear();
                bad_pairs.push((i, j));
            }
        }
    }

    Evaluation {
        max_count: best.unwrap_or(0),
        num_at_max: bad_pairs.len(),
        bad_pairs,
    }
}
