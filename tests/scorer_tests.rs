use courtforge::optimizer::initialization::build_schedule_seeded;
use courtforge::schedule::Schedule;
use courtforge::scorer::{evaluate, is_fair, FairnessPolicy, PairMatrix};
use rstest::rstest;

#[rstest]
#[case(12, 8, 3)]
#[case(20, 16, 5)]
#[case(24, 12, 4)]
fn test_pair_matrix_symmetric_and_totals(#[case] n: usize, #[case] k: usize, #[case] w: usize) {
    let s = build_schedule_seeded(n, k, w, 3).unwrap();
    let m = PairMatrix::from_schedule(&s, n);

    assert!(m.is_symmetric());
    for i in 0..n {
        assert_eq!(m.get(i, i), 0);
    }

    let upper: u64 = m.upper_triangle().map(|(_, _, c)| c as u64).sum();
    assert_eq!(upper, 6 * s.total_quads() as u64);
    assert_eq!(m.total(), 2 * upper);
}

#[test]
fn test_bad_pairs_order_and_count() {
    let s = Schedule::new(vec![
        vec![[0, 1, 2, 3], [4, 5, 6, 7]],
        vec![[0, 1, 4, 5], [2, 3, 6, 7]],
    ]);
    let eval = evaluate(&s, 8);

    assert_eq!(eval.max_count, 2);
    assert_eq!(eval.bad_pairs, vec![(0, 1), (2, 3), (4, 5), (6, 7)]);
    assert_eq!(eval.num_at_max, eval.bad_pairs.len());
}

#[test]
fn test_every_bad_pair_has_max_count() {
    let n = 20;
    let s = build_schedule_seeded(n, 12, 5, 9).unwrap();
    let m = PairMatrix::from_schedule(&s, n);
    let eval = evaluate(&s, n);

    for &(a, b) in &eval.bad_pairs {
        assert!(a < b);
        assert_eq!(m.get(a, b), eval.max_count);
    }
    let above = m
        .upper_triangle()
        .filter(|&(_, _, c)| c > eval.max_count)
        .count();
    assert_eq!(above, 0);
}

#[rstest]
#[case(FairnessPolicy::Strict, false)]
#[case(FairnessPolicy::Legacy, true)]
fn test_idle_player_zero(#[case] policy: FairnessPolicy, #[case] expected: bool) {
    let s = Schedule::new(vec![vec![[1, 2, 3, 4]], vec![[5, 6, 7, 8]]]);
    assert_eq!(is_fair(&s, 9, policy), expected);
}
