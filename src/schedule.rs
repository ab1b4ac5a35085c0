use crate::error::{CfResult, ScheduleError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A player is identified by its index in `0..N`.
pub type Player = usize;

/// One doubles court: exactly four distinct players.
/// Member order carries no meaning, but swaps keep each slot in place.
pub type Quad = [Player; 4];

/// The courts played in a single round. A player appears at most once per week.
pub type Week = Vec<Quad>;

/// The six unordered slot pairs of a quad.
pub const QUAD_PAIRS: [(usize, usize); 6] = [(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)];

/// Yields the six player pairs of a quad, each as `(low, high)`.
pub fn quad_pairs(quad: &Quad) -> impl Iterator<Item = (Player, Player)> + '_ {
    QUAD_PAIRS.iter().map(move |&(i, j)| {
        let (a, b) = (quad[i], quad[j]);
        if a < b {
            (a, b)
        } else {
            (b, a)
        }
    })
}

/// An ordered sequence of weeks.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Schedule {
    pub weeks: Vec<Week>,
}

impl Schedule {
    pub fn new(weeks: Vec<Week>) -> Self {
        Self { weeks }
    }

    pub fn num_weeks(&self) -> usize {
        self.weeks.len()
    }

    pub fn total_quads(&self) -> usize {
        self.weeks.iter().map(Vec::len).sum()
    }

    /// Every quad in week order.
    pub fn quads(&self) -> impl Iterator<Item = &Quad> {
        self.weeks.iter().flatten()
    }

    /// Appearances per player across the whole schedule.
    pub fn play_counts(&self, n: usize) -> PlayCounts {
        let mut counts = PlayCounts::new(n);
        for quad in self.quads() {
            counts.record(quad);
        }
        counts
    }

    /// All `(week, subteam)` locations whose quad holds both `a` and `b`.
    pub fn find_pair(&self, a: Player, b: Player) -> Vec<(usize, usize)> {
        let mut found = Vec::new();
        for (w, week) in self.weeks.iter().enumerate() {
            for (s, quad) in week.iter().enumerate() {
                if quad.contains(&a) && quad.contains(&b) {
                    found.push((w, s));
                }
            }
        }
        found
    }

    /// Checks the structural invariants for a schedule over `n` players:
    /// ids in range, four distinct members per quad, no player twice in a
    /// week, and the same number of courts every week.
    pub fn validate(&self, n: usize) -> CfResult<()> {
        let courts = self.weeks.first().map(Vec::len).unwrap_or(0);

        for (w, week) in self.weeks.iter().enumerate() {
            if week.len() != courts {
                return Err(ScheduleError::Template(format!(
                    "Week {} has {} courts, expected {}",
                    w + 1,
                    week.len(),
                    courts
                )));
            }

            let mut seen = HashSet::with_capacity(week.len() * 4);
            for (s, quad) in week.iter().enumerate() {
                for &p in quad {
                    if p >= n {
                        return Err(ScheduleError::Template(format!(
                            "Week {} court {}: player {} is outside 0..{}",
                            w + 1,
                            s + 1,
                            p,
                            n
                        )));
                    }
                    if !seen.insert(p) {
                        return Err(ScheduleError::Template(format!(
                            "Week {}: player {} is placed more than once",
                            w + 1,
                            p
                        )));
                    }
                }
            }
        }
        Ok(())
    }

    /// Copy with every quad's members sorted. Two schedules that differ only
    /// in member order within courts compare equal after this.
    pub fn canonical(&self) -> Schedule {
        let mut out = self.clone();
        for quad in out.weeks.iter_mut().flatten() {
            quad.sort_unstable();
        }
        out
    }

    /// Number of players the schedule refers to (highest id + 1).
    pub fn player_span(&self) -> usize {
        self.quads()
            .flat_map(|q| q.iter())
            .max()
            .map(|&p| p + 1)
            .unwrap_or(0)
    }
}

/// Appearance count per player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayCounts {
    counts: Vec<u32>,
}

impl PlayCounts {
    pub fn new(n: usize) -> Self {
        Self { counts: vec![0; n] }
    }

    #[inline(always)]
    pub fn get(&self, p: Player) -> u32 {
        self.counts[p]
    }

    pub fn record(&mut self, quad: &Quad) {
        for &p in quad {
            self.counts[p] += 1;
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.counts
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
