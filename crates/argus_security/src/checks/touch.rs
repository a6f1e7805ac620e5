//! Touch capability check.
//!
//! Genuine touchscreens report at least two simultaneous contact points;
//! non-touch and emulated environments typically report zero or one.
//! Some platforms cannot be held to the floor (iOS WebKit hides the real
//! count in some embeddings) and are exempted by policy.

use argus_core::FingerprintReport;

use crate::checks::{CheckKind, Evidence, PriorSignals, ScoreResult, SignalCheck};
use crate::config::TouchPolicy;

/// Enforces the touch-point floor on non-exempt platforms.
#[derive(Clone, Debug)]
pub struct TouchPointCheck {
    policy: TouchPolicy,
}

impl TouchPointCheck {
    /// Creates the check from its policy.
    #[must_use]
    pub const fn new(policy: TouchPolicy) -> Self {
        Self { policy }
    }
}

impl SignalCheck for TouchPointCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::TouchPoints
    }

    fn evaluate(&self, report: &FingerprintReport, _prior: &PriorSignals) -> Option<ScoreResult> {
        let evidence = Evidence {
            observed_touch_points: Some(report.max_touch_points),
            ..Evidence::default()
        };

        if self
            .policy
            .exempt_platforms
            .iter()
            .any(|p| p == &report.platform)
        {
            return Some(ScoreResult::clean().with_evidence(evidence));
        }

        if report.max_touch_points < self.policy.min_touch_points {
            return Some(
                ScoreResult::flagged(
                    self.policy.low_touch_score,
                    format!(
                        "Touch capability too low: {} contact points (expected >= {})",
                        report.max_touch_points, self.policy.min_touch_points
                    ),
                )
                .with_evidence(evidence),
            );
        }

        Some(ScoreResult::clean().with_evidence(evidence))
    }
}
