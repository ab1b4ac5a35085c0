use crate::schedule::{quad_pairs, Player, Quad, Schedule};

/// Symmetric co-occurrence counts, flattened row-major (`i * n + j`).
/// The diagonal is never written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairMatrix {
    n: usize,
    counts: Vec<u32>,
}

impl PairMatrix {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            counts: vec![0; n * n],
        }
    }

    /// Builds the matrix by scanning the six pairs of every quad.
    pub fn from_schedule(schedule: &Schedule, n: usize) -> Self {
        let mut matrix = Self::new(n);
        for quad in schedule.quads() {
            matrix.record(quad);
        }
        matrix
    }

    pub fn size(&self) -> usize {
        self.n
    }

    #[inline(always)]
    pub fn get(&self, i: Player, j: Player) -> u32 {
        self.counts[i * self.n + j]
    }

    #[inline(always)]
    fn bump(&mut self, i: Player, j: Player) {
        self.counts[i * self.n + j] += 1;
        self.counts[j * self.n + i] += 1;
    }

    pub fn record(&mut self, quad: &Quad) {
        for (a, b) in quad_pairs(quad) {
            self.bump(a, b);
        }
    }

    /// Sum of current counts over the six pairs of `quad`.
    #[inline(always)]
    pub fn quad_cost(&self, quad: &Quad) -> u32 {
        quad_pairs(quad).map(|(a, b)| self.get(a, b)).sum()
    }

    /// Sum over the full symmetric matrix (each pair counted twice).
    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (0..self.n).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// Upper-triangle entries `(i, j, count)` with `i < j`, in row order.
    pub fn upper_triangle(&self) -> impl Iterator<Item = (Player, Player, u32)> + '_ {
        (0..self.n).flat_map(move |i| ((i + 1)..self.n).map(move |j| (i, j, self.get(i, j))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_updates_both_halves() {
        let mut m = PairMatrix::new(6);
        m.record(&[5, 0, 3, 1]);
        assert_eq!(m.get(0, 5), 1);
        assert_eq!(m.get(5, 0), 1);
        assert_eq!(m.get(2, 4), 0);
        assert_eq!(m.total(), 12);
        assert!(m.is_symmetric());
    }

    #[test]
    fn test_quad_cost_sums_six_pairs() {
        let mut m = PairMatrix::new(8);
        m.record(&[0, 1, 2, 3]);
        m.record(&[0, 1, 4, 5]);
        // (0,1) twice, (0,2),(1,2) once each
        assert_eq!(m.quad_cost(&[0, 1, 2, 7]), 4);
        assert_eq!(m.quad_cost(&[4, 5, 6, 7]), 1);
        assert_eq!(m.quad_cost(&[6, 7, 2, 5]), 0);
    }
}
