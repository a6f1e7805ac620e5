//! Motion variance check.
//!
//! A handheld device is never still: hand tremor and sensor noise keep the
//! accelerometer above a measurable floor. The check computes the
//! population standard deviation per axis over the window and judges the
//! maximum against two thresholds, with the mean absolute value separating
//! "resting on a table" from "synthesized zeros".
//!
//! When the window is missing or too short the check does not abstain:
//! absent motion data on a device requesting rewards is itself a signal,
//! and it stacks with an already-suspicious battery window.

use argus_core::{mean_abs, population_std_dev, FingerprintReport, MotionSample};

use crate::checks::{CheckKind, Evidence, PriorSignals, ScoreResult, SignalCheck};
use crate::config::MotionPolicy;

/// Judges accelerometer windows against the sensor noise floor.
#[derive(Clone, Debug)]
pub struct MotionVarianceCheck {
    policy: MotionPolicy,
}

/// Per-axis window statistics feeding the threshold ladder.
#[derive(Clone, Copy, Debug)]
struct WindowStats {
    max_std_dev: f64,
    mean_abs: f64,
}

fn window_stats(samples: &[MotionSample]) -> WindowStats {
    let xs: Vec<f64> = samples.iter().map(|s| s.x).collect();
    let ys: Vec<f64> = samples.iter().map(|s| s.y).collect();
    let zs: Vec<f64> = samples.iter().map(|s| s.z).collect();

    let max_std_dev = population_std_dev(&xs)
        .max(population_std_dev(&ys))
        .max(population_std_dev(&zs));
    let mean_abs = (mean_abs(&xs) + mean_abs(&ys) + mean_abs(&zs)) / 3.0;

    WindowStats {
        max_std_dev,
        mean_abs,
    }
}

impl MotionVarianceCheck {
    /// Creates the check from its policy.
    #[must_use]
    pub const fn new(policy: MotionPolicy) -> Self {
        Self { policy }
    }

    /// Missing-data branch: scores on the battery outcome and carries the
    /// motion subsystem's own stated reason when it gave one.
    fn fallback(&self, report: &FingerprintReport, prior: &PriorSignals) -> ScoreResult {
        let score = if prior.battery_suspicious() {
            self.policy.missing_suspect_score
        } else {
            self.policy.missing_score
        };

        let reason = report
            .motion
            .as_ref()
            .and_then(|m| m.reason.clone())
            .unwrap_or_else(|| "Motion sensor data unavailable".to_string());

        let samples = report.motion.as_ref().map(|m| m.data.len());
        ScoreResult::flagged(score, reason).with_evidence(Evidence {
            samples,
            ..Evidence::default()
        })
    }

    /// Sufficient-data branch: ordered, mutually exclusive thresholds.
    fn judge_window(&self, samples: &[MotionSample]) -> ScoreResult {
        let stats = window_stats(samples);
        let evidence = Evidence {
            samples: Some(samples.len()),
            max_std_dev: Some(stats.max_std_dev),
            mean_abs: Some(stats.mean_abs),
            ..Evidence::default()
        };

        let result = if stats.max_std_dev < self.policy.rigid_std_dev {
            ScoreResult::flagged(
                self.policy.rigid_score,
                format!(
                    "Motion almost completely fixed (max std dev {:.6})",
                    stats.max_std_dev
                ),
            )
        } else if stats.max_std_dev < self.policy.stable_std_dev
            && stats.mean_abs < self.policy.near_zero_mean
        {
            ScoreResult::flagged(
                self.policy.stable_score,
                format!(
                    "Motion very stable, values near zero (max std dev {:.6}, mean abs {:.6})",
                    stats.max_std_dev, stats.mean_abs
                ),
            )
        } else if stats.max_std_dev >= self.policy.stable_std_dev {
            ScoreResult::clean_with_reason("Natural motion detected")
        } else {
            ScoreResult::flagged(
                self.policy.ambiguous_score,
                format!(
                    "Motion suspicious, ambiguous pattern (max std dev {:.6}, mean abs {:.6})",
                    stats.max_std_dev, stats.mean_abs
                ),
            )
        };

        result.with_evidence(evidence)
    }
}

impl SignalCheck for MotionVarianceCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Motion
    }

    fn evaluate(&self, report: &FingerprintReport, prior: &PriorSignals) -> Option<ScoreResult> {
        match report.motion.as_ref() {
            Some(telemetry)
                if telemetry.available && telemetry.data.len() >= self.policy.min_samples =>
            {
                Some(self.judge_window(&telemetry.data))
            }
            _ => Some(self.fallback(report, prior)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argus_core::MotionTelemetry;
    use crate::config::MotionPolicy;

    fn check() -> MotionVarianceCheck {
        MotionVarianceCheck::new(MotionPolicy::default())
    }

    fn evaluate(report: &FingerprintReport, prior: &PriorSignals) -> ScoreResult {
        check()
            .evaluate(report, prior)
            .expect("motion always applicable")
    }

    /// Deterministic zig-zag window with a chosen amplitude around a bias.
    fn window(amplitude: f64, bias: f64, n: usize) -> Vec<MotionSample> {
        (0..n)
            .map(|i| {
                let sign = if i % 2 == 0 { 1.0 } else { -1.0 };
                let v = bias + sign * amplitude;
                MotionSample::new(v, v, v)
            })
            .collect()
    }

    #[test]
    fn test_rigid_window_scores_highest() {
        // +-0.0005 swing: std dev 0.0005, far under the 0.0015 noise floor.
        let report = FingerprintReport::new("android")
            .with_motion(MotionTelemetry::new(window(0.0005, 0.0, 20)));
        let result = evaluate(&report, &PriorSignals::default());

        assert_eq!(result.score, 90);
        assert!(result.evidence.max_std_dev.expect("stats") < 0.0015);
    }

    #[test]
    fn test_natural_motion_scores_zero() {
        // std dev 0.01 on every axis: clearly above the stable band.
        let report = FingerprintReport::new("android")
            .with_motion(MotionTelemetry::new(window(0.01, 0.0, 20)));
        let result = evaluate(&report, &PriorSignals::default());

        assert_eq!(result.score, 0);
        assert_eq!(result.reason.as_deref(), Some("Natural motion detected"));
    }

    #[test]
    fn test_stable_near_zero_window() {
        // std dev 0.002 (between 0.0015 and 0.004), mean abs ~0.002 < 0.01.
        let report = FingerprintReport::new("android")
            .with_motion(MotionTelemetry::new(window(0.002, 0.0, 20)));
        let result = evaluate(&report, &PriorSignals::default());

        assert_eq!(result.score, 60);
    }

    #[test]
    fn test_ambiguous_band_with_offset_bias() {
        // Same 0.002 std dev but biased to 0.5: stable yet not near zero.
        let report = FingerprintReport::new("android")
            .with_motion(MotionTelemetry::new(window(0.002, 0.5, 20)));
        let result = evaluate(&report, &PriorSignals::default());

        assert_eq!(result.score, 30);
    }

    #[test]
    fn test_missing_motion_with_clean_battery() {
        let report = FingerprintReport::new("android");
        let result = evaluate(&report, &PriorSignals::default());

        assert_eq!(result.score, 50);
        assert_eq!(
            result.reason.as_deref(),
            Some("Motion sensor data unavailable")
        );
    }

    #[test]
    fn test_missing_motion_stacks_with_suspicious_battery() {
        let report = FingerprintReport::new("android");
        let prior = PriorSignals {
            battery_score: Some(50),
        };

        assert_eq!(evaluate(&report, &prior).score, 60);
    }

    #[test]
    fn test_fallback_carries_subsystem_reason() {
        let report = FingerprintReport::new("android")
            .with_motion(MotionTelemetry::unavailable("permission denied"));
        let result = evaluate(&report, &PriorSignals::default());

        assert_eq!(result.score, 50);
        assert_eq!(result.reason.as_deref(), Some("permission denied"));
    }

    #[test]
    fn test_short_window_takes_fallback_branch() {
        let report = FingerprintReport::new("android")
            .with_motion(MotionTelemetry::new(window(0.01, 0.0, 9)));
        let result = evaluate(&report, &PriorSignals::default());

        assert_eq!(result.score, 50);
        assert_eq!(result.evidence.samples, Some(9));
    }
}
