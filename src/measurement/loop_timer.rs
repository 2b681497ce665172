//! Batch timing with loop-overhead correction.

use std::hint::black_box as std_black_box;

use super::Clock;

/// Wrapper around `std::hint::black_box` for preventing compiler
/// optimizations.
///
/// The empty calibration loop uses it to keep its counter alive, and subjects
/// should use it to keep otherwise-dead computation from being optimized away.
#[inline]
pub fn black_box<T>(x: T) -> T {
    std_black_box(x)
}

/// Times N sequential invocations of a subject as a single batch, correcting
/// for fixed loop-control overhead.
///
/// The correction runs an empty loop of the same length first and subtracts
/// its duration, so the result approximates N x (true per-call cost) rather
/// than N x cost + loop control. The result is a batch **total**, not divided
/// by N: division happens at the reporting boundary so batch totals taken
/// under a shared N can be compared directly.
///
/// Exactly four clock reads are taken per run, making the result a pure
/// function of the clock sequence and N.
#[derive(Debug, Clone, Copy)]
pub struct LoopTimer {
    loops: u64,
}

impl LoopTimer {
    /// Create a loop timer for batches of `loops` invocations.
    ///
    /// # Panics
    ///
    /// Panics if `loops` is zero; a batch must contain at least one call.
    pub fn new(loops: u64) -> Self {
        assert!(loops >= 1, "loop count must be at least 1");
        Self { loops }
    }

    /// The batch size N.
    pub fn loops(&self) -> u64 {
        self.loops
    }

    /// Measure one batch and return the overhead-corrected total in seconds.
    ///
    /// Under jitter a nearly-free subject can measure shorter than the empty
    /// loop; the negative result is passed through unmodified as a signal of
    /// measurement noise, not clamped to zero.
    pub fn run<C: Clock, F: FnMut()>(&self, clock: &mut C, mut subject: F) -> f64 {
        let start = clock.now();
        for i in 0..self.loops {
            black_box(i);
        }
        let overhead = clock.now() - start;

        let start = clock.now();
        for _ in 0..self.loops {
            subject();
        }
        let elapsed = clock.now() - start;

        elapsed - overhead
    }
}
