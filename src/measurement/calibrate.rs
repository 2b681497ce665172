//! Automatic loop-count calibration.

use serde::{Deserialize, Serialize};

use super::{Clock, LoopTimer};

/// A single batch must take at least this long for relative timer-resolution
/// error to be negligible.
pub(crate) const THRESHOLD_SECS: f64 = 0.2;

/// Loop count tried first.
const START_LOOPS: u64 = 10;

/// Upper bound on calibration attempts; the loop count grows by a factor of
/// ten between attempts.
const MAX_ATTEMPTS: u32 = 10;

/// One calibration attempt: a loop count and the batch seconds it measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationTrial {
    /// Loop count tried.
    pub loops: u64,
    /// Overhead-corrected batch total, in seconds.
    pub secs: f64,
}

/// Outcome of a calibration search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// The chosen loop count.
    pub loops: u64,
    /// Every attempt made, in order, for diagnostics.
    pub trials: Vec<CalibrationTrial>,
}

/// Search for a loop count large enough that one batch takes at least
/// 0.2 seconds.
///
/// Starts at N = 10 and multiplies by 10 on each miss, for at most 10
/// attempts. If the threshold is never reached the last N tried (10^10) is
/// returned anyway: a known, intentionally costly fallback rather than an
/// error, left to the caller to notice from the recorded trials.
pub fn calibrate<C: Clock, F: FnMut()>(clock: &mut C, subject: F) -> Calibration {
    calibrate_from(clock, subject, START_LOOPS, MAX_ATTEMPTS)
}

fn calibrate_from<C: Clock, F: FnMut()>(
    clock: &mut C,
    mut subject: F,
    start_loops: u64,
    max_attempts: u32,
) -> Calibration {
    let mut loops = start_loops;
    let mut trials = Vec::new();

    for attempt in 0..max_attempts {
        let secs = LoopTimer::new(loops).run(clock, &mut subject);
        trials.push(CalibrationTrial { loops, secs });

        if secs >= THRESHOLD_SECS {
            break;
        }
        if attempt + 1 < max_attempts {
            loops *= 10;
        }
    }

    Calibration { loops, trials }
}
