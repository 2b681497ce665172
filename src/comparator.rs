//! The comparison orchestrator: two subjects under one shared loop count.

use crate::measurement::{calibrate, Clock, MonotonicClock, Repeater};
use crate::output::terminal::render_comparison;
use crate::reporter::DEFAULT_REPEAT;
use crate::result::ComparisonReport;
use crate::statistics::{best, sort_samples, upper_median};

/// Measures two subjects under an identical loop count and reports the ratio
/// of their best and median batch times.
///
/// When no loop count is given, each subject is calibrated independently and
/// the larger of the two counts is used for both. The shared count is what
/// lets ratios of batch totals stand in for ratios of per-call costs without
/// dividing by N.
///
/// ```no_run
/// let ratio = timeit::Comparator::new()
///     .run(|| { /* candidate */ }, || { /* baseline */ });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Comparator {
    repeat: usize,
    loops: u64,
    verbose: bool,
}

impl Comparator {
    /// Create a comparator with defaults: best of 3, auto-calibrated shared
    /// loop count, not verbose.
    pub fn new() -> Self {
        Self {
            repeat: DEFAULT_REPEAT,
            loops: 0,
            verbose: false,
        }
    }

    /// Set the number of independent batches per subject.
    ///
    /// # Panics
    ///
    /// Panics if `repeat` is zero.
    pub fn repeat(mut self, repeat: usize) -> Self {
        assert!(repeat >= 1, "repeat count must be at least 1");
        self.repeat = repeat;
        self
    }

    /// Set the shared invocations per batch; 0 requests automatic
    /// calibration of both subjects.
    pub fn loops(mut self, loops: u64) -> Self {
        self.loops = loops;
        self
    }

    /// Print per-subject raw samples, elementwise ratios, and calibration
    /// trials along with the summary.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Measure both subjects against an explicit clock, printing nothing.
    pub fn measure_with<C, A, B>(&self, clock: &mut C, mut a: A, mut b: B) -> ComparisonReport
    where
        C: Clock,
        A: FnMut(),
        B: FnMut(),
    {
        let (loops, calibration_a, calibration_b) = if self.loops == 0 {
            let cal_a = calibrate(clock, &mut a);
            let cal_b = calibrate(clock, &mut b);
            (cal_a.loops.max(cal_b.loops), Some(cal_a), Some(cal_b))
        } else {
            (self.loops, None, None)
        };

        let repeater = Repeater::new(self.repeat, loops);
        let mut samples_a = repeater.run(clock, &mut a);
        let mut samples_b = repeater.run(clock, &mut b);
        sort_samples(&mut samples_a);
        sort_samples(&mut samples_b);

        let best_ratio = best(&samples_a) / best(&samples_b);
        let median_ratio = upper_median(&samples_a) / upper_median(&samples_b);

        ComparisonReport {
            loops,
            repeat: self.repeat,
            samples_a_secs: samples_a,
            samples_b_secs: samples_b,
            best_ratio,
            median_ratio,
            calibration_a,
            calibration_b,
        }
    }

    /// Measure against the wall clock, print the transcript to stdout, and
    /// return the ratio of best batch times (a / b).
    pub fn run<A: FnMut(), B: FnMut()>(&self, a: A, b: B) -> f64 {
        let report = self.measure_with(&mut MonotonicClock::new(), a, b);
        print!("{}", render_comparison(&report, self.verbose));
        report.best_ratio
    }
}

impl Default for Comparator {
    fn default() -> Self {
        Self::new()
    }
}
