pub mod initialization;
pub mod mutation;
pub mod runner;

use self::mutation::Swap;
use crate::config::SearchParams;
use crate::schedule::{Player, Schedule};
use crate::scorer::{evaluate, is_fair, Evaluation, FairnessPolicy};
use serde::Serialize;
use strum_macros::Display;
use tracing::debug;

#[derive(Debug, Clone, Copy)]
pub struct SearchOptions {
    pub threshold: u32,
    pub max_iterations: usize,
    pub fairness: FairnessPolicy,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 1,
            max_iterations: 100,
            fairness: FairnessPolicy::Strict,
        }
    }
}

impl From<&SearchParams> for SearchOptions {
    fn from(p: &SearchParams) -> Self {
        Self {
            threshold: p.threshold,
            max_iterations: p.max_iterations,
            fairness: p.fairness,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize)]
pub enum StopReason {
    /// No pair meets more often than the threshold.
    ThresholdReached,
    /// A full scan found no improving swap. Rescanning the same schedule
    /// would find nothing either.
    Stalled,
    IterationCap,
    /// The observer asked to stop.
    Cancelled,
}

#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub schedule: Schedule,
    pub evaluation: Evaluation,
    pub iterations: usize,
    pub accepted: usize,
    pub stop: StopReason,
}

/// Receives each accepted improvement. Returning `false` ends the search.
pub trait SearchObserver {
    fn on_progress(&self, iteration: usize, before: &Evaluation, after: &Evaluation) -> bool;
}

pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_progress(&self, _: usize, _: &Evaluation, _: &Evaluation) -> bool {
        true
    }
}

/// Which member of the bad pair is moved out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    #[default]
    First,
    Second,
}

/// Position of the first-improvement scan:
/// bad pair -> location -> other court in that week -> candidate -> side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    pub bad_pair_idx: usize,
    pub location_idx: usize,
    pub other_subteam_idx: usize,
    pub candidate_idx: usize,
    pub side: Side,
}

impl ScanState {
    fn next_bad_pair(&mut self) {
        *self = Self {
            bad_pair_idx: self.bad_pair_idx + 1,
            ..Self::default()
        };
    }

    fn next_location(&mut self) {
        *self = Self {
            bad_pair_idx: self.bad_pair_idx,
            location_idx: self.location_idx + 1,
            ..Self::default()
        };
    }

    fn next_other_subteam(&mut self) {
        self.other_subteam_idx += 1;
        self.candidate_idx = 0;
        self.side = Side::First;
    }

    fn next_side(&mut self) {
        match self.side {
            Side::First => self.side = Side::Second,
            Side::Second => {
                self.side = Side::First;
                self.candidate_idx += 1;
            }
        }
    }
}

/// Enumerates candidate swaps for one schedule in scan order.
pub struct CandidateScan<'a> {
    schedule: &'a Schedule,
    bad_pairs: &'a [(Player, Player)],
    locations: Vec<(usize, usize)>,
    loaded_for: Option<usize>,
    state: ScanState,
}

impl<'a> CandidateScan<'a> {
    pub fn new(schedule: &'a Schedule, bad_pairs: &'a [(Player, Player)]) -> Self {
        Self {
            schedule,
            bad_pairs,
            locations: Vec::new(),
            loaded_for: None,
            state: ScanState::default(),
        }
    }

    pub fn state(&self) -> ScanState {
        self.state
    }
}

impl Iterator for CandidateScan<'_> {
    type Item = Swap;

    fn next(&mut self) -> Option<Swap> {
        loop {
            let s = &mut self.state;
            let &(a, b) = self.bad_pairs.get(s.bad_pair_idx)?;

            if self.loaded_for != Some(s.bad_pair_idx) {
                self.locations = self.schedule.find_pair(a, b);
                self.loaded_for = Some(s.bad_pair_idx);
            }

            let Some(&(week, subteam)) = self.locations.get(s.location_idx) else {
                s.next_bad_pair();
                continue;
            };

            let courts = &self.schedule.weeks[week];
            if s.other_subteam_idx >= courts.len() {
                s.next_location();
                continue;
            }
            if s.other_subteam_idx == subteam {
                s.next_other_subteam();
                continue;
            }

            let other = &courts[s.other_subteam_idx];
            let Some(&candidate) = other.get(s.candidate_idx) else {
                s.next_other_subteam();
                continue;
            };

            let mover = match s.side {
                Side::First => a,
                Side::Second => b,
            };
            let mv = Swap::new((week, subteam, mover), (week, s.other_subteam_idx, candidate));
            s.next_side();
            return Some(mv);
        }
    }
}

/// First-improvement repair over single-player swaps within a week.
pub struct LocalSearch {
    options: SearchOptions,
}

impl LocalSearch {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn run(&self, schedule: Schedule, n: usize) -> SearchOutcome {
        self.run_with(schedule, n, &NoopObserver)
    }

    pub fn run_with<O: SearchObserver>(
        &self,
        mut schedule: Schedule,
        n: usize,
        observer: &O,
    ) -> SearchOutcome {
        let opts = &self.options;
        let mut current = evaluate(&schedule, n);
        let mut iterations = 0;
        let mut accepted = 0;

        let stop = loop {
            if current.max_count <= opts.threshold {
                break StopReason::ThresholdReached;
            }
            if iterations >= opts.max_iterations {
                break StopReason::IterationCap;
            }
            iterations += 1;

            let Some((candidate, eval)) = self.first_improvement(&schedule, &current, n) else {
                break StopReason::Stalled;
            };

            debug!(
                "Made progress, {:?} -> {:?} (iteration {})",
                current.key(),
                eval.key(),
                iterations
            );
            let keep_going = observer.on_progress(iterations, &current, &eval);
            schedule = candidate;
            current = eval;
            accepted += 1;

            if !keep_going {
                break StopReason::Cancelled;
            }
        };

        SearchOutcome {
            schedule,
            evaluation: current,
            iterations,
            accepted,
            stop,
        }
    }

    /// The first candidate in scan order that stays fair and strictly
    /// lowers `(max_count, num_at_max)`.
    pub fn first_improvement(
        &self,
        schedule: &Schedule,
        current: &Evaluation,
        n: usize,
    ) -> Option<(Schedule, Evaluation)> {
        for mv in CandidateScan::new(schedule, &current.bad_pairs) {
            let candidate = mv
                .apply(schedule)
                .expect("scan only yields players found in their own courts");
            if !is_fair(&candidate, n, self.options.fairness) {
                continue;
            }
            let eval = evaluate(&candidate, n);
            if eval.is_better_than(current) {
                return Some((candidate, eval));
            }
        }
        None
    }
}

/// Repairs `schedule` toward `threshold` with the default iteration cap.
pub fn optimize(schedule: Schedule, n: usize, threshold: u32) -> Schedule {
    LocalSearch::new(SearchOptions {
        threshold,
        ..SearchOptions::default()
    })
    .run(schedule, n)
    .schedule
}
