//! Measurement infrastructure: the clock abstraction, the overhead-corrected
//! loop timer, the repeater, and loop-count calibration.
//!
//! Everything here operates on an explicit [`Clock`] handle and plain `f64`
//! seconds. Batch results are totals over N invocations; division down to
//! per-call cost happens at the reporting boundary, deliberately, so that two
//! subjects measured under a shared N can be compared by ratio of totals.

mod calibrate;
mod clock;
mod loop_timer;
mod repeater;

pub use calibrate::{calibrate, Calibration, CalibrationTrial};
pub use clock::{measure, Clock, MonotonicClock};
pub use loop_timer::{black_box, LoopTimer};
pub use repeater::Repeater;

#[cfg(test)]
pub(crate) mod mock;
