//! Independent repetition of batch measurements.

use super::{Clock, LoopTimer};

/// Runs the loop timer R independent times with the same loop count,
/// producing R batch totals in insertion order.
///
/// No aggregation happens here; selecting the best or median sample is the
/// caller's concern. Each batch is independent — no state is shared across
/// iterations besides whatever the subject itself retains.
#[derive(Debug, Clone, Copy)]
pub struct Repeater {
    repeat: usize,
    timer: LoopTimer,
}

impl Repeater {
    /// Create a repeater for `repeat` batches of `loops` invocations each.
    ///
    /// # Panics
    ///
    /// Panics if `repeat` is zero or `loops` is zero.
    pub fn new(repeat: usize, loops: u64) -> Self {
        assert!(repeat >= 1, "repeat count must be at least 1");
        Self {
            repeat,
            timer: LoopTimer::new(loops),
        }
    }

    /// Measure all batches and return their totals, in the order produced.
    pub fn run<C: Clock, F: FnMut()>(&self, clock: &mut C, mut subject: F) -> Vec<f64> {
        (0..self.repeat)
            .map(|_| self.timer.run(clock, &mut subject))
            .collect()
    }
}
