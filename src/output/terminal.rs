//! Exact terminal line rendering.
//!
//! Line formats here are part of the crate's contract and are rendered
//! byte-for-byte; callers print them as-is. Values use [`fmt_value`], which
//! follows C's `%g` conversion so that large magnitudes come out as e.g.
//! `1.5e+06` rather than `1500000`.

use std::fmt::Write;

use crate::measurement::CalibrationTrial;
use crate::result::{ComparisonReport, TimingReport};

const USECS_PER_SEC: f64 = 1e6;

/// Render a value the way C's `%g` does: six significant digits, exponential
/// notation when the decimal exponent is below -4 or at least 6, trailing
/// zeros trimmed, exponent printed with a sign and at least two digits.
pub fn fmt_value(x: f64) -> String {
    if x == 0.0 {
        return "0".to_string();
    }
    if x.is_nan() {
        return "nan".to_string();
    }
    if x.is_infinite() {
        return if x < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    // Round to six significant digits first; the exponent of the rounded
    // value decides the notation (999999.9 renders as 1e+06, not 999999).
    let sci = format!("{:.5e}", x);
    let (mantissa, exp) = match sci.split_once('e') {
        Some((m, e)) => (m, e.parse::<i32>().unwrap_or(0)),
        None => (sci.as_str(), 0),
    };

    if !(-4..6).contains(&exp) {
        let sign = if exp < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_trailing_zeros(mantissa), sign, exp.abs())
    } else {
        let decimals = (5 - exp).max(0) as usize;
        trim_trailing_zeros(&format!("{:.*}", decimals, x))
    }
}

fn trim_trailing_zeros(s: &str) -> String {
    if !s.contains('.') {
        return s.to_string();
    }
    s.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// The Reporter summary line: `"<loops> loops, best of <repeat>: <best> usec
/// per loop"`.
pub fn summary_line(report: &TimingReport) -> String {
    format!(
        "{} loops, best of {}: {} usec per loop",
        report.loops,
        report.repeat,
        fmt_value(report.best_usecs())
    )
}

/// The Comparator summary line: `"<loops> loops, best of <repeat>: <ratio>,
/// median: <ratio2> per loop"`.
pub fn comparison_line(report: &ComparisonReport) -> String {
    format!(
        "{} loops, best of {}: {}, median: {} per loop",
        report.loops,
        report.repeat,
        fmt_value(report.best_ratio),
        fmt_value(report.median_ratio)
    )
}

/// A verbose raw-samples line: the label, then each sample in microseconds.
///
/// The Reporter labels its line `"raw times"`; the Comparator emits one line
/// per subject labelled `"raw times 1"` and `"raw times 2"`.
pub fn raw_times_line(label: &str, samples_secs: &[f64]) -> String {
    let mut line = format!("{}:", label);
    for &secs in samples_secs {
        let _ = write!(line, " {}", fmt_value(secs * USECS_PER_SEC));
    }
    line
}

/// A verbose elementwise-ratio line over two equally long sorted sample sets.
pub fn ratio_line(samples_a_secs: &[f64], samples_b_secs: &[f64]) -> String {
    let mut line = "ratio:".to_string();
    for (&a, &b) in samples_a_secs.iter().zip(samples_b_secs) {
        let _ = write!(line, " {}", fmt_value(a / b));
    }
    line
}

/// A verbose calibration diagnostic line: `"<N> loops -> <secs> secs"`.
pub fn calibration_line(trial: &CalibrationTrial) -> String {
    format!("{} loops -> {} secs", trial.loops, fmt_value(trial.secs))
}

/// Render a full Reporter transcript: calibration trials and the raw-times
/// line when verbose, then the summary. Every line is newline-terminated.
pub fn render_report(report: &TimingReport, verbose: bool) -> String {
    let mut out = String::new();
    if verbose {
        if let Some(cal) = &report.calibration {
            for trial in &cal.trials {
                out.push_str(&calibration_line(trial));
                out.push('\n');
            }
        }
        out.push_str(&raw_times_line("raw times", &report.samples_secs));
        out.push('\n');
    }
    out.push_str(&summary_line(report));
    out.push('\n');
    out
}

/// Render a full Comparator transcript: calibration trials for both
/// subjects, per-subject raw times, and the elementwise ratio line when
/// verbose, then the summary. Every line is newline-terminated.
pub fn render_comparison(report: &ComparisonReport, verbose: bool) -> String {
    let mut out = String::new();
    if verbose {
        for cal in [&report.calibration_a, &report.calibration_b]
            .into_iter()
            .flatten()
        {
            for trial in &cal.trials {
                out.push_str(&calibration_line(trial));
                out.push('\n');
            }
        }
        out.push_str(&raw_times_line("raw times 1", &report.samples_a_secs));
        out.push('\n');
        out.push_str(&raw_times_line("raw times 2", &report.samples_b_secs));
        out.push('\n');
        out.push_str(&ratio_line(&report.samples_a_secs, &report.samples_b_secs));
        out.push('\n');
    }
    out.push_str(&comparison_line(report));
    out.push('\n');
    out
}
