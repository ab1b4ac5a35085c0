use crate::schedule::Player;
use serde::{Deserialize, Serialize};

/// Result of the cost model: the worst pair co-occurrence, how many pairs
/// reach it, and those pairs in `(i, j)` row order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub max_count: u32,
    pub num_at_max: usize,
    pub bad_pairs: Vec<(Player, Player)>,
}

impl Evaluation {
    /// Lexicographic key compared by the local search.
    #[inline(always)]
    pub fn key(&self) -> (u32, usize) {
        (self.max_count, self.num_at_max)
    }

    /// Strict lexicographic improvement on `(max_count, num_at_max)`.
    #[inline(always)]
    pub fn is_better_than(&self, other: &Evaluation) -> bool {
        self.key() < other.key()
    }
}
