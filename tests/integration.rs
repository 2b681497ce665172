//! Smoke tests against the real wall clock.
//!
//! Wall-clock numbers are noisy, so assertions here check structural
//! invariants and loose bounds rather than exact values.

use timeit::{black_box, Comparator, MonotonicClock, Reporter};

fn busy_work() {
    let mut sum = 0u64;
    for i in 0..100 {
        sum = sum.wrapping_add(black_box(i));
    }
    black_box(sum);
}

#[test]
fn best_equals_minimum_sample_over_loops() {
    let report = Reporter::new()
        .repeat(3)
        .loops(1000)
        .measure_with(&mut MonotonicClock::new(), busy_work);
    assert_eq!(report.loops, 1000);
    assert_eq!(report.samples_secs.len(), 3);
    assert_eq!(report.best_secs, report.samples_secs[0] / 1000.0);
    // sorted ascending
    assert!(report.samples_secs.windows(2).all(|w| w[0] <= w[1]));
}

#[test]
fn explicit_loop_count_skips_calibration() {
    let mut calls = 0u64;
    let report = Reporter::new()
        .repeat(2)
        .loops(100)
        .measure_with(&mut MonotonicClock::new(), || calls += 1);
    assert!(report.calibration.is_none());
    assert_eq!(calls, 200);
}

#[test]
fn comparing_a_subject_against_itself_is_near_unity() {
    let report = Comparator::new()
        .repeat(3)
        .loops(10_000)
        .measure_with(&mut MonotonicClock::new(), busy_work, busy_work);
    // identical subjects: the ratio should sit near 1.0, with generous slack
    // for scheduling noise on shared CI hardware
    assert!(
        report.best_ratio > 0.2 && report.best_ratio < 5.0,
        "best_ratio = {}",
        report.best_ratio
    );
    assert!(
        report.median_ratio > 0.2 && report.median_ratio < 5.0,
        "median_ratio = {}",
        report.median_ratio
    );
}

#[test]
fn run_returns_the_reported_best() {
    // run() prints to stdout; just confirm the returned value is sane for a
    // subject that does real work
    let best_secs = Reporter::new().repeat(2).loops(1000).run(busy_work);
    assert!(best_secs.is_finite());
    assert!(best_secs > 0.0, "best_secs = {}", best_secs);
}

#[test]
fn compare_convenience_runs_with_fixed_loops() {
    let ratio = Comparator::new()
        .repeat(2)
        .loops(1000)
        .run(busy_work, busy_work);
    assert!(ratio.is_finite());
    assert!(ratio > 0.0);
}
