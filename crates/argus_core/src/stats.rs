//! Window statistics for telemetry scoring.
//!
//! Population (not sample) statistics: the observation window is the whole
//! population under judgment, not a sample of a longer recording.

/// Arithmetic mean of a window. Empty windows yield `0.0`.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().sum::<f64>() / n
}

/// Mean of absolute values of a window. Empty windows yield `0.0`.
#[must_use]
pub fn mean_abs(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    values.iter().map(|v| v.abs()).sum::<f64>() / n
}

/// Population standard deviation of a window. Empty windows yield `0.0`.
#[must_use]
pub fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mu = mean(values);
    #[allow(clippy::cast_precision_loss)]
    let n = values.len() as f64;
    let variance = values.iter().map(|v| (v - mu).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}
