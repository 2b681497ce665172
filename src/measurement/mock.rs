//! Deterministic clocks for unit tests.

use super::Clock;

/// Returns exponentially increasing readings: 1, 2, 4, 8, ...
///
/// Four reads per batch means one loop-timer run at any N observes
/// (8 - 4) - (2 - 1) = 3, the next (128 - 64) - (32 - 16) = 48, and so on.
pub(crate) struct ExponentialClock {
    next: f64,
}

impl ExponentialClock {
    pub(crate) fn new() -> Self {
        Self { next: 1.0 }
    }
}

impl Clock for ExponentialClock {
    fn now(&mut self) -> f64 {
        let t = self.next;
        self.next *= 2.0;
        t
    }
}

/// Replays a fixed sequence of readings.
pub(crate) struct ScriptedClock {
    readings: std::vec::IntoIter<f64>,
    reads: usize,
}

impl ScriptedClock {
    pub(crate) fn new(readings: Vec<f64>) -> Self {
        Self {
            readings: readings.into_iter(),
            reads: 0,
        }
    }

    /// How many readings have been consumed so far.
    pub(crate) fn reads(&self) -> usize {
        self.reads
    }
}

impl Clock for ScriptedClock {
    fn now(&mut self) -> f64 {
        self.reads += 1;
        self.readings.next().expect("scripted clock exhausted")
    }
}

/// Advances by a fixed, vanishingly small step on every read, so no batch
/// ever reaches the calibration threshold.
pub(crate) struct CrawlingClock {
    now: f64,
    step: f64,
}

impl CrawlingClock {
    pub(crate) fn new(step: f64) -> Self {
        Self { now: 0.0, step }
    }
}

impl Clock for CrawlingClock {
    fn now(&mut self) -> f64 {
        self.now += self.step;
        self.now
    }
}
