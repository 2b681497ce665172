//! The monotonic clock abstraction and the single-shot measurer.

use std::time::Instant;

/// A monotonic time source.
///
/// `now()` must never go backward across calls on a single logical thread.
/// Readings are in seconds; elapsed time is the difference of two readings.
///
/// The receiver is `&mut self` so deterministic test clocks can carry their
/// own sequence state instead of leaning on process globals; each measurement
/// session constructs its own clock value.
pub trait Clock {
    /// Current reading in seconds.
    fn now(&mut self) -> f64;
}

/// The production clock, backed by [`std::time::Instant`].
///
/// Readings are seconds elapsed since construction. `Instant` guarantees
/// monotonicity, so a reading can never be smaller than an earlier one.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Create a clock whose readings start near zero.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    #[inline]
    fn now(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Time exactly one invocation of a subject.
///
/// Returns the elapsed seconds between two clock readings taken immediately
/// around the call. No retries and no timeout: a clock that stalls or fails
/// here is fatal to the whole measurement session.
#[inline]
pub fn measure<C: Clock, F: FnOnce()>(clock: &mut C, subject: F) -> f64 {
    let start = clock.now();
    subject();
    clock.now() - start
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurement::mock::ScriptedClock;

    #[test]
    fn monotonic_clock_never_goes_backward() {
        let mut clock = MonotonicClock::new();
        let mut last = clock.now();
        for _ in 0..1000 {
            let t = clock.now();
            assert!(t >= last);
            last = t;
        }
    }

    #[test]
    fn measure_is_after_minus_before() {
        let mut clock = ScriptedClock::new(vec![1.0, 2.5]);
        let elapsed = measure(&mut clock, || {});
        assert_eq!(elapsed, 1.5);
    }

    #[test]
    fn measure_invokes_subject_exactly_once() {
        let mut clock = ScriptedClock::new(vec![0.0, 1.0]);
        let mut calls = 0;
        measure(&mut clock, || calls += 1);
        assert_eq!(calls, 1);
    }
}
