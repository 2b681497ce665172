//! Report types produced by the measurement orchestrators.

use serde::{Deserialize, Serialize};

use crate::measurement::Calibration;

/// Complete result of one [`Reporter`](crate::Reporter) measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingReport {
    /// Invocations per batch (after calibration, if any).
    pub loops: u64,

    /// Number of independent batches measured.
    pub repeat: usize,

    /// Batch totals in seconds, sorted ascending.
    pub samples_secs: Vec<f64>,

    /// Best per-call cost in seconds: the minimum batch total divided by
    /// `loops`.
    pub best_secs: f64,

    /// Calibration search record, present when the loop count was chosen
    /// automatically.
    pub calibration: Option<Calibration>,
}

impl TimingReport {
    /// Best per-call cost in microseconds, as printed in the summary line.
    pub fn best_usecs(&self) -> f64 {
        self.best_secs * 1e6
    }
}

/// Complete result of one [`Comparator`](crate::Comparator) measurement.
///
/// Both subjects are measured under the same `loops`, so ratios of batch
/// totals equal ratios of per-call costs without dividing by N.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComparisonReport {
    /// Shared invocations per batch.
    pub loops: u64,

    /// Number of independent batches measured per subject.
    pub repeat: usize,

    /// First subject's batch totals in seconds, sorted ascending.
    pub samples_a_secs: Vec<f64>,

    /// Second subject's batch totals in seconds, sorted ascending.
    pub samples_b_secs: Vec<f64>,

    /// Ratio of best batch totals, a / b.
    pub best_ratio: f64,

    /// Ratio of median batch totals (upper median for even repeat counts).
    pub median_ratio: f64,

    /// Calibration record for the first subject, when auto-calibrated.
    pub calibration_a: Option<Calibration>,

    /// Calibration record for the second subject, when auto-calibrated.
    pub calibration_b: Option<Calibration>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn best_usecs_converts_from_seconds() {
        let report = TimingReport {
            loops: 2,
            repeat: 3,
            samples_secs: vec![3.0, 48.0, 768.0],
            best_secs: 1.5,
            calibration: None,
        };
        assert_eq!(report.best_usecs(), 1.5e6);
    }
}
