//! The reporting orchestrator: calibrate, repeat, select best, print.

use crate::measurement::{calibrate, Clock, MonotonicClock, Repeater};
use crate::output::terminal::render_report;
use crate::result::TimingReport;
use crate::statistics::{best, sort_samples};

/// Default number of independent batches.
pub(crate) const DEFAULT_REPEAT: usize = 3;

/// Times a subject and reports the best-observed per-call cost.
///
/// The three knobs are independent and immutable once set:
///
/// - `loops` — invocations per batch; the default of 0 means "calibrate
///   automatically";
/// - `repeat` — independent batches to measure (default 3);
/// - `verbose` — print raw samples and calibration trials along with the
///   summary.
///
/// ```no_run
/// let best_secs = timeit::Reporter::new()
///     .repeat(5)
///     .run(|| { /* work */ });
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Reporter {
    repeat: usize,
    loops: u64,
    verbose: bool,
}

impl Reporter {
    /// Create a reporter with defaults: best of 3, auto-calibrated loop
    /// count, not verbose.
    pub fn new() -> Self {
        Self {
            repeat: DEFAULT_REPEAT,
            loops: 0,
            verbose: false,
        }
    }

    /// Set the number of independent batches.
    ///
    /// # Panics
    ///
    /// Panics if `repeat` is zero.
    pub fn repeat(mut self, repeat: usize) -> Self {
        assert!(repeat >= 1, "repeat count must be at least 1");
        self.repeat = repeat;
        self
    }

    /// Set the invocations per batch; 0 requests automatic calibration.
    pub fn loops(mut self, loops: u64) -> Self {
        self.loops = loops;
        self
    }

    /// Print raw samples and calibration trials along with the summary.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Measure against an explicit clock, printing nothing.
    ///
    /// This is the pure core: given a deterministic clock the report is a
    /// repeatable function of the clock sequence and the configuration.
    pub fn measure_with<C: Clock, F: FnMut()>(&self, clock: &mut C, mut subject: F) -> TimingReport {
        let (loops, calibration) = if self.loops == 0 {
            let cal = calibrate(clock, &mut subject);
            (cal.loops, Some(cal))
        } else {
            (self.loops, None)
        };

        let mut samples = Repeater::new(self.repeat, loops).run(clock, &mut subject);
        sort_samples(&mut samples);
        let best_secs = best(&samples) / loops as f64;

        TimingReport {
            loops,
            repeat: self.repeat,
            samples_secs: samples,
            best_secs,
            calibration,
        }
    }

    /// Measure against the wall clock, print the transcript to stdout, and
    /// return the best per-call cost in seconds.
    pub fn run<F: FnMut()>(&self, subject: F) -> f64 {
        let report = self.measure_with(&mut MonotonicClock::new(), subject);
        print!("{}", render_report(&report, self.verbose));
        report.best_secs
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::mock::{ExponentialClock, ScriptedClock};
    use crate::output::terminal::render_report;

    #[test]
    fn best_is_minimum_sample_over_loops() {
        // batches of 3 and 48; min is 3, divided by N=1
        let mut clock = ExponentialClock::new();
        let report = Reporter::new()
            .repeat(2)
            .loops(1)
            .measure_with(&mut clock, || {});
        assert_eq!(report.samples_secs, vec![3.0, 48.0]);
        assert_eq!(report.best_secs, 3.0);
        assert!(report.calibration.is_none());
    }

    #[test]
    fn samples_are_sorted_even_when_captured_out_of_order() {
        // first batch 8.0, second batch 1.0
        let mut clock = ScriptedClock::new(vec![
            0.0, 1.0, 2.0, 11.0, //
            12.0, 13.0, 14.0, 16.0,
        ]);
        let report = Reporter::new()
            .repeat(2)
            .loops(4)
            .measure_with(&mut clock, || {});
        assert_eq!(report.samples_secs, vec![1.0, 8.0]);
        assert_eq!(report.best_secs, 0.25);
    }

    #[test]
    fn emits_exact_summary_line() {
        // min batch is 3.0 secs over 2 loops: 1.5 secs, 1.5e+06 usec
        let mut clock = ExponentialClock::new();
        let report = Reporter::new()
            .repeat(3)
            .loops(2)
            .measure_with(&mut clock, || {});
        assert_eq!(
            render_report(&report, false),
            "2 loops, best of 3: 1.5e+06 usec per loop\n"
        );
    }

    #[test]
    fn zero_loops_triggers_calibration() {
        // calibration: N=10 measures (8-4)-(2-1) = 3 >= 0.2
        // measurement: (128-64)-(32-16) = 48 over 10 loops
        let mut clock = ExponentialClock::new();
        let report = Reporter::new().repeat(1).measure_with(&mut clock, || {});
        assert_eq!(report.loops, 10);
        assert_eq!(report.best_secs, 4.8);
        let cal = report.calibration.expect("calibration record");
        assert_eq!(cal.trials.len(), 1);
    }

    #[test]
    fn verbose_transcript_includes_calibration_and_raw_times() {
        let mut clock = ExponentialClock::new();
        let report = Reporter::new().repeat(1).measure_with(&mut clock, || {});
        assert_eq!(
            render_report(&report, true),
            "10 loops -> 3 secs\n\
             raw times: 4.8e+07\n\
             10 loops, best of 1: 4.8e+06 usec per loop\n"
        );
    }

    #[test]
    #[should_panic(expected = "repeat count must be at least 1")]
    fn rejects_zero_repeat() {
        let _ = Reporter::new().repeat(0);
    }
}
