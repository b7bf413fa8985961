//! Sample statistics shared by the trial and aggregate reductions

use serde::Serialize;

/// Two-sided 95% z-value under the normal approximation.
pub const Z_95: f64 = 1.959_963_984_540_054;

pub fn mean(xs: &[f64]) -> Option<f64> {
    if xs.is_empty() {
        return None;
    }
    Some(xs.iter().sum::<f64>() / xs.len() as f64)
}

pub fn sample_variance(xs: &[f64]) -> Option<f64> {
    if xs.len() < 2 {
        return None;
    }
    let m = mean(xs)?;
    let mut acc = 0.0;
    for &x in xs {
        let d = x - m;
        acc += d * d;
    }
    Some(acc / (xs.len() as f64 - 1.0))
}

/// Mean of one metric across trials with a normal-approximation 95% interval
///
/// With a single sample the standard error is zero and the interval collapses
/// to the mean.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MetricSummary {
    pub samples: usize,
    pub mean: f64,
    pub std_err: f64,
    pub ci_low: f64,
    pub ci_high: f64,
}

impl MetricSummary {
    pub fn from_samples(xs: &[f64]) -> Option<Self> {
        let mean = mean(xs)?;
        let std_err = sample_variance(xs)
            .map(|var| (var / xs.len() as f64).sqrt())
            .unwrap_or(0.0);
        Some(Self {
            samples: xs.len(),
            mean,
            std_err,
            ci_low: mean - Z_95 * std_err,
            ci_high: mean + Z_95 * std_err,
        })
    }

    /// Same summary with every value multiplied by `factor`.
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            samples: self.samples,
            mean: self.mean * factor,
            std_err: self.std_err * factor,
            ci_low: self.ci_low * factor,
            ci_high: self.ci_high * factor,
        }
    }
}
