//! Sample-set statistics: ordering, minimum, and upper-median selection.
//!
//! The sample sets handled here are tiny (the repeat count, three by
//! default), so a full sort followed by direct indexing is the whole story.

/// Sort samples ascending.
///
/// Uses `f64::total_cmp` so negative samples (legitimate under jitter, see
/// [`crate::LoopTimer`]) order correctly.
pub fn sort_samples(samples: &mut [f64]) {
    samples.sort_by(|a, b| a.total_cmp(b));
}

/// The minimum of a sorted, non-empty sample set.
///
/// The minimum — not the mean — is the least-biased estimator of true cost:
/// scheduling noise can only inflate a batch total, never deflate it.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn best(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "cannot take the best of no samples");
    sorted[0]
}

/// The median element of a sorted, non-empty sample set, at index `len / 2`.
///
/// Integer index division selects the upper median for even lengths — a
/// deliberate tie-break, not the averaged pair.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn upper_median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "cannot take the median of no samples");
    sorted[sorted.len() / 2]
}
