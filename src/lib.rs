//! # timeit
//!
//! Time small bits of Rust code, in the spirit of Python's `timeit` module.
//!
//! The harness measures the per-invocation cost of a closure with enough
//! statistical care to produce a stable number despite clock jitter and fixed
//! per-call overhead:
//!
//! - **loop-overhead correction** — an empty loop of the same length is timed
//!   first and subtracted, so the result approximates N x (true per-call
//!   cost), not N x cost + loop control;
//! - **best-of-N repetition** — each batch is repeated independently and the
//!   minimum is selected, since scheduling noise can only inflate a batch
//!   total, never deflate it below the true cost;
//! - **automatic calibration** — when no loop count is given, powers of ten
//!   are tried until one batch takes at least 0.2 seconds, keeping relative
//!   timer-resolution error negligible;
//! - **two-way comparison** — two subjects measured under a shared calibrated
//!   loop count, reporting best-time and median-time ratios.
//!
//! ## Quick start
//!
//! ```no_run
//! use std::collections::BTreeMap;
//!
//! let mut map = BTreeMap::new();
//! let best_secs = timeit::timeit(|| {
//!     for i in 0..50 {
//!         map.insert(i, i);
//!     }
//!     map.clear();
//! });
//! // prints e.g. "10000 loops, best of 3: 2.4 usec per loop"
//! ```
//!
//! ## Subjects own their state
//!
//! A subject is any `FnMut()` closure. It is invoked many thousands of times
//! across batches, so its cost must be stable under repetition: a subject
//! that fills a container without clearing it measures growth, not insertion.
//! Whatever state the closure captures is the subject's own responsibility;
//! the engine neither owns nor resets it.
//!
//! Pre-generate inputs outside the closure. Calling an RNG or allocating
//! fresh inputs inside the measured region adds overhead that drowns out the
//! signal being measured.
//!
//! ## Deterministic measurement
//!
//! Every timing call takes the clock as an explicit handle, so tests (and
//! anything else that wants repeatable numbers) can inject a scripted
//! [`Clock`] instead of the wall clock:
//!
//! ```no_run
//! use timeit::{MonotonicClock, Reporter};
//!
//! let report = Reporter::new()
//!     .loops(1000)
//!     .measure_with(&mut MonotonicClock::new(), || { /* work */ });
//! assert_eq!(report.best_secs, report.samples_secs[0] / 1000.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod comparator;
mod reporter;
mod result;

pub mod measurement;
pub mod output;
pub mod statistics;

pub use comparator::Comparator;
pub use measurement::{
    black_box, calibrate, measure, Calibration, CalibrationTrial, Clock, LoopTimer,
    MonotonicClock, Repeater,
};
pub use reporter::Reporter;
pub use result::{ComparisonReport, TimingReport};

/// Time a subject with default settings (best of 3, auto-calibrated loop
/// count), printing one summary line and returning the best per-call time in
/// seconds.
///
/// Shorthand for `Reporter::new().run(subject)`.
pub fn timeit<F: FnMut()>(subject: F) -> f64 {
    Reporter::new().run(subject)
}

/// Compare two subjects under a shared calibrated loop count, printing one
/// summary line and returning the ratio of their best batch times (a / b).
///
/// Shorthand for `Comparator::new().run(a, b)`.
pub fn compare<A: FnMut(), B: FnMut()>(a: A, b: B) -> f64 {
    Comparator::new().run(a, b)
}
