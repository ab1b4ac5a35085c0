use courtforge::optimizer::initialization::build_schedule_seeded;
use courtforge::optimizer::mutation::{swap, Swap};
use courtforge::optimizer::{
    optimize, LocalSearch, SearchObserver, SearchOptions, StopReason,
};
use courtforge::schedule::Schedule;
use courtforge::scorer::{all_good, evaluate, Evaluation};
use std::cell::RefCell;

fn repeated_week() -> Schedule {
    let week = vec![[0, 1, 2, 3], [4, 5, 6, 7]];
    Schedule::new(vec![week.clone(), week])
}

#[derive(Default)]
struct Recorder {
    seen: RefCell<Vec<(u32, usize)>>,
}

impl SearchObserver for Recorder {
    fn on_progress(&self, _: usize, before: &Evaluation, after: &Evaluation) -> bool {
        let mut seen = self.seen.borrow_mut();
        if seen.is_empty() {
            seen.push(before.key());
        }
        seen.push(after.key());
        true
    }
}

#[test]
fn test_one_court_per_week_cannot_be_repaired() {
    // 6 quads x 6 pairs = 36 slots over 28 pairs: some pair meets twice,
    // and a single court per week leaves nothing to swap with.
    let n = 8;
    let s = build_schedule_seeded(n, 4, 6, 12).unwrap();
    let out = optimize(s.clone(), n, 1);

    assert!(evaluate(&out, n).max_count >= 2);
    assert_eq!(out, s);
    assert!(all_good(&out, n));
}

#[test]
fn test_full_cohort_reaches_threshold() {
    let n = 16;
    let s = build_schedule_seeded(n, 16, 3, 12).unwrap();
    let out = LocalSearch::new(SearchOptions::default()).run(s, n);

    assert!(out.evaluation.max_count <= 1);
    assert_eq!(out.stop, StopReason::ThresholdReached);
    assert_eq!(out.evaluation, evaluate(&out.schedule, n));
}

#[test]
fn test_repeated_week_strictly_improves() {
    let n = 8;
    let before = evaluate(&repeated_week(), n);
    let out = LocalSearch::new(SearchOptions::default()).run(repeated_week(), n);

    assert!(out.accepted >= 1);
    assert!(out.evaluation.is_better_than(&before));
    // Two courts over two weeks always repeat a pair.
    assert_eq!(out.evaluation.max_count, 2);
    assert_ne!(out.stop, StopReason::ThresholdReached);
    assert!(all_good(&out.schedule, n));
}

#[test]
fn test_accepted_steps_are_monotonic() {
    let n = 24;
    let s = build_schedule_seeded(n, 12, 6, 4).unwrap();
    let rec = Recorder::default();
    let out = LocalSearch::new(SearchOptions::default()).run_with(s, n, &rec);

    let seen = rec.seen.borrow();
    assert_eq!(seen.len(), if out.accepted == 0 { 0 } else { out.accepted + 1 });
    for pair in seen.windows(2) {
        assert!(pair[1] < pair[0], "{:?} did not improve on {:?}", pair[1], pair[0]);
    }
}

#[test]
fn test_optimize_preserves_fairness() {
    for (n, k, w) in [(12, 8, 3), (16, 12, 4), (20, 8, 5)] {
        let s = build_schedule_seeded(n, k, w, 7).unwrap();
        assert!(all_good(&s, n));
        let out = optimize(s, n, 1);
        assert!(all_good(&out, n));
        assert!(out.validate(n).is_ok());
    }
}

#[test]
fn test_rerun_never_regresses() {
    let n = 20;
    let s = build_schedule_seeded(n, 12, 5, 2).unwrap();
    let once = optimize(s, n, 1);
    let twice = optimize(once.clone(), n, 1);

    let e1 = evaluate(&once, n);
    let e2 = evaluate(&twice, n);
    assert!(e2.key() <= e1.key());
    if e2.key() == e1.key() {
        assert_eq!(once, twice);
    }
}

#[test]
fn test_swap_twice_restores() {
    let s = build_schedule_seeded(12, 12, 2, 1).unwrap();
    let x = s.weeks[1][0][2];
    let y = s.weeks[1][2][1];

    let once = swap(&s, (1, 0, x), (1, 2, y)).unwrap();
    assert_eq!(once.weeks[1][0][3], y);
    assert_eq!(once.weeks[1][2][3], x);

    let back = swap(&once, (1, 0, y), (1, 2, x)).unwrap();
    assert_eq!(back.canonical(), s.canonical());

    let mv = Swap::new((1, 0, x), (1, 2, y));
    let restored = mv.inverse().apply(&mv.apply(&s).unwrap()).unwrap();
    assert_eq!(restored.canonical(), s.canonical());
    assert_eq!(restored.weeks[0], s.weeks[0]);
}
