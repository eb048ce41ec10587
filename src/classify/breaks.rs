//! Break-point computation: the three classification methods.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Break-point classification method.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    EqualInterval,
    Quantile,
    NaturalBreaks,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::EqualInterval, Method::Quantile, Method::NaturalBreaks];

    /// Stable key used in configs and on the CLI.
    pub fn key(&self) -> &'static str {
        match self {
            Method::EqualInterval => "equal-interval",
            Method::Quantile => "quantile",
            Method::NaturalBreaks => "natural-breaks",
        }
    }

    /// Human-readable label for pickers.
    pub fn label(&self) -> &'static str {
        match self {
            Method::EqualInterval => "Equal interval",
            Method::Quantile => "Quantile",
            Method::NaturalBreaks => "Natural breaks",
        }
    }
}

/// All classification methods with their display labels.
pub fn methods() -> Vec<(Method, &'static str)> {
    Method::ALL.iter().map(|m| (*m, m.label())).collect()
}

/// Class breaks for sorted, non-empty `values`: `n + 1` thresholds pinned to
/// the observed min and max. Callers validate `n >= 1` and non-emptiness;
/// the engine is the validating caller.
pub fn breaks_for(values: &[f64], n: usize, method: Method) -> Vec<f64> {
    match method {
        Method::EqualInterval => equal_interval(values, n),
        Method::Quantile => quantile(values, n),
        Method::NaturalBreaks => natural_breaks(values, n),
    }
}

/// Linear subdivision of the observed range into `n` equal spans.
pub fn equal_interval(values: &[f64], n: usize) -> Vec<f64> {
    let min = values[0];
    let max = values[values.len() - 1];
    let span = (max - min) / n as f64;
    let mut breaks = Vec::with_capacity(n + 1);
    breaks.push(min);
    for i in 1..n {
        breaks.push(min + span * i as f64);
    }
    breaks.push(max);
    breaks
}

/// Roughly equal-count classes: thresholds taken at the value quantiles.
/// Duplicate values can produce duplicate breaks.
pub fn quantile(values: &[f64], n: usize) -> Vec<f64> {
    let len = values.len();
    let mut breaks = Vec::with_capacity(n + 1);
    breaks.push(values[0]);
    for i in 1..=n {
        breaks.push(values[(i * len / n).min(len - 1)]);
    }
    breaks
}

/// Single-pass natural-breaks heuristic: interior boundaries snap to the
/// midpoint of the first value discontinuity within one stride window,
/// falling back to the stride-aligned value. Not an iterative variance
/// minimizer.
pub fn natural_breaks(values: &[f64], n: usize) -> Vec<f64> {
    let len = values.len();
    if len <= n {
        // Fewer values than classes: every value becomes a break.
        let mut breaks = values.to_vec();
        breaks.push(values[len - 1]);
        return breaks;
    }
    let step = len / n;
    let mut breaks = Vec::with_capacity(n + 1);
    breaks.push(values[0]);
    for i in 1..n {
        let idx = i * step;
        let mut brk = values[idx];
        for j in idx..(idx + step).min(len - 1) {
            if values[j + 1] != values[j] {
                brk = (values[j] + values[j + 1]) / 2.0;
                break;
            }
        }
        breaks.push(brk);
    }
    breaks.push(values[len - 1]);
    breaks
}
