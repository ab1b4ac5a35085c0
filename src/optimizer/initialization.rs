use crate::error::{CfResult, ScheduleError};
use crate::schedule::{PlayCounts, Player, Quad, Schedule, Week};
use crate::scorer::PairMatrix;
use fastrand::Rng;
use itertools::Itertools;
use tracing::debug;

/// Rejects `(n, k, w)` triples that cannot give every player the same
/// number of appearances.
pub fn validate_params(n: usize, k: usize, w: usize) -> CfResult<()> {
    if n == 0 || k == 0 || w == 0 {
        return Err(ScheduleError::InvalidParameter(format!(
            "N, K and W must be positive (got N={}, K={}, W={})",
            n, k, w
        )));
    }
    if k % 4 != 0 {
        return Err(ScheduleError::InvalidParameter(format!(
            "K must be divisible by 4 (got {})",
            k
        )));
    }
    if k > n {
        return Err(ScheduleError::InvalidParameter(format!(
            "K ({}) cannot exceed the number of players ({})",
            k, n
        )));
    }
    if (k * w) % n != 0 {
        return Err(ScheduleError::InvalidParameter(format!(
            "K*W must be divisible by N ({}*{} mod {} = {})",
            k,
            w,
            n,
            (k * w) % n
        )));
    }
    Ok(())
}

/// Greedy construction. Each week takes the `k` least-played players (ties
/// broken by one random draw per player) and carves them into the cheapest
/// available quads, one at a time.
pub fn build_schedule(n: usize, k: usize, w: usize, rng: &mut Rng) -> CfResult<Schedule> {
    validate_params(n, k, w)?;

    let mut plays = PlayCounts::new(n);
    let mut pairs = PairMatrix::new(n);
    let mut weeks = Vec::with_capacity(w);

    for week_idx in 0..w {
        let mut pool = select_least_played(&plays, k, rng);
        let mut week: Week = Vec::with_capacity(k / 4);

        while !pool.is_empty() {
            let (quad, cost) = cheapest_quad(&pool, &pairs).ok_or_else(|| {
                ScheduleError::InvalidParameter(format!(
                    "pool of {} players cannot form a quad",
                    pool.len()
                ))
            })?;

            pairs.record(&quad);
            plays.record(&quad);
            pool.retain(|p| !quad.contains(p));

            debug!("Week {}: quad {:?} (cost {})", week_idx + 1, quad, cost);
            week.push(quad);
        }

        weeks.push(week);
    }

    Ok(Schedule::new(weeks))
}

pub fn build_schedule_seeded(n: usize, k: usize, w: usize, seed: u64) -> CfResult<Schedule> {
    let mut rng = Rng::with_seed(seed);
    build_schedule(n, k, w, &mut rng)
}

/// Picks the `k` players with the fewest appearances. The result is
/// returned in ascending id order.
pub fn select_least_played(plays: &PlayCounts, k: usize, rng: &mut Rng) -> Vec<Player> {
    let mut ranked: Vec<(u32, u64, Player)> = (0..plays.len())
        .map(|p| (plays.get(p), rng.u64(..), p))
        .collect();
    ranked.sort_unstable();

    let mut chosen: Vec<Player> = ranked.into_iter().take(k).map(|(_, _, p)| p).collect();
    chosen.sort_unstable();
    chosen
}

/// First 4-subset of `pool`, in lexicographic order, with the lowest sum of
/// pair counts.
pub fn cheapest_quad(pool: &[Player], pairs: &PairMatrix) -> Option<(Quad, u32)> {
    let mut best: Option<(Quad, u32)> = None;

    for (a, b, c, d) in pool.iter().copied().tuple_combinations() {
        let quad = [a, b, c, d];
        let cost = pairs.quad_cost(&quad);
        if best.map_or(true, |(_, best_cost)| cost < best_cost) {
            best = Some((quad, cost));
            // nothing can beat zero
            if cost == 0 {
                break;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_k_not_multiple_of_four() {
        assert!(matches!(
            build_schedule_seeded(12, 6, 2, 1),
            Err(ScheduleError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_rejects_indivisible_appearances() {
        assert!(matches!(
            validate_params(5, 4, 3),
            Err(ScheduleError::InvalidParameter(_))
        ));
        assert!(validate_params(5, 4, 5).is_ok());
    }

    #[test]
    fn test_rejects_k_above_n() {
        assert!(validate_params(4, 8, 1).is_err());
    }

    #[test]
    fn test_cheapest_quad_prefers_fresh_players() {
        let mut pairs = PairMatrix::new(8);
        pairs.record(&[0, 1, 2, 3]);
        let (quad, cost) = cheapest_quad(&[0, 1, 4, 5, 6], &pairs).unwrap();
        assert_eq!(quad, [0, 4, 5, 6]);
        assert_eq!(cost, 0);
    }

    #[test]
    fn test_cheapest_quad_first_minimum_wins() {
        let pairs = PairMatrix::new(6);
        let (quad, _) = cheapest_quad(&[1, 2, 3, 4, 5], &pairs).unwrap();
        assert_eq!(quad, [1, 2, 3, 4]);
        assert!(cheapest_quad(&[1, 2, 3], &pairs).is_none());
    }

    #[test]
    fn test_least_played_selected_first() {
        let mut plays = PlayCounts::new(8);
        plays.record(&[0, 1, 2, 3]);
        let mut rng = Rng::with_seed(7);
        assert_eq!(select_least_played(&plays, 4, &mut rng), vec![4, 5, 6, 7]);
    }

    #[test]
    fn test_first_weeks_of_full_cohort_are_lexicographic() {
        let s = build_schedule_seeded(16, 16, 2, 99).unwrap();
        assert_eq!(s.weeks[0], vec![[0, 1, 2, 3], [4, 5, 6, 7], [8, 9, 10, 11], [12, 13, 14, 15]]);
        assert_eq!(s.weeks[1], vec![[0, 4, 8, 12], [1, 5, 9, 13], [2, 6, 10, 14], [3, 7, 11, 15]]);
    }
}
