//! # Trust Evaluator
//!
//! Orchestrates the six signal checks in a fixed order and renders one
//! explainable decision. Pure: no I/O, no shared mutable state, identical
//! input yields identical output. Evaluation takes `&self`, so one
//! evaluator serves any number of request handlers concurrently.
//!
//! ## Protocol
//!
//! 1. Platform gate first. If it blocks, the verdict is its score alone
//!    and nothing else runs - a falsified platform invalidates every other
//!    comparison baseline.
//! 2. GPU, user agent, touch points, in that order.
//! 3. Battery only if the report carries a battery section; an absent
//!    section leaves no details entry.
//! 4. Motion always runs; its fallback branch sees the battery outcome.
//! 5. Scores sum; the block threshold is inclusive.

use argus_core::FingerprintReport;

use crate::checks::{
    BatteryStabilityCheck, CheckKind, GpuCheck, MotionVarianceCheck, PlatformCheck, PriorSignals,
    ScoreResult, SignalCheck, TouchPointCheck, UserAgentCheck,
};
use crate::config::ScoringConfig;
use crate::error::TrustResult;
use crate::trace::EvaluationTrace;

/// The complete decision for one fingerprint report.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustVerdict {
    /// Sum of all contributed scores.
    pub total_score: u32,
    /// Whether the device is classified non-genuine.
    pub blocked: bool,
    /// Explanations for every non-zero contribution, in evaluation order.
    pub reasons: Vec<String>,
    /// Full outcome of every executed check, zero scores included,
    /// in evaluation order. Short-circuited runs hold only the platform
    /// entry; a report without a battery section has no battery entry.
    pub details: Vec<(CheckKind, ScoreResult)>,
    /// Structured record of the run for audit.
    pub trace: EvaluationTrace,
}

impl TrustVerdict {
    /// Looks up the outcome of one check, if it executed.
    #[must_use]
    pub fn check(&self, kind: CheckKind) -> Option<&ScoreResult> {
        self.details
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, result)| result)
    }

    /// One-line audit summary.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "score {} ({}) - {}",
            self.total_score,
            if self.blocked { "BLOCKED" } else { "allowed" },
            if self.reasons.is_empty() {
                "no findings".to_string()
            } else {
                self.reasons.join("; ")
            }
        )
    }
}

/// Multi-signal device-trust classifier.
pub struct TrustEvaluator {
    config: ScoringConfig,
    checks: Vec<Box<dyn SignalCheck>>,
}

impl TrustEvaluator {
    /// Creates an evaluator after validating the scoring table.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TrustError::InvalidConfig`] if the table is
    /// incoherent.
    pub fn new(config: ScoringConfig) -> TrustResult<Self> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    /// Builds the fixed ordered registry. The order is part of the
    /// contract: reasons and trace events surface in this sequence.
    fn from_config(config: ScoringConfig) -> Self {
        let checks: Vec<Box<dyn SignalCheck>> = vec![
            Box::new(PlatformCheck::new(config.platform.clone())),
            Box::new(GpuCheck::new(config.gpu.clone())),
            Box::new(UserAgentCheck::new(config.user_agent.clone())),
            Box::new(TouchPointCheck::new(config.touch.clone())),
            Box::new(BatteryStabilityCheck::new(config.battery.clone())),
            Box::new(MotionVarianceCheck::new(config.motion.clone())),
        ];
        Self { config, checks }
    }

    /// The scoring table this evaluator runs.
    #[must_use]
    pub const fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Scores a fingerprint report and renders the decision.
    ///
    /// Total for all inputs: missing optional sections score zero, nothing
    /// panics, and the returned verdict is always fully populated.
    #[must_use]
    pub fn evaluate(&self, report: &FingerprintReport) -> TrustVerdict {
        let mut trace = EvaluationTrace::new();
        let mut details: Vec<(CheckKind, ScoreResult)> = Vec::with_capacity(self.checks.len());
        let mut reasons: Vec<String> = Vec::new();
        let mut prior = PriorSignals::default();
        let mut total_score: u32 = 0;

        for check in &self.checks {
            let kind = check.kind();
            let Some(result) = check.evaluate(report, &prior) else {
                trace.record_skipped(kind);
                continue;
            };

            tracing::debug!(
                check = kind.as_str(),
                score = result.score,
                blocked = result.blocked,
                "signal evaluated"
            );
            trace.record(kind, &result);

            if kind == CheckKind::Battery {
                prior.battery_score = Some(result.score);
            }

            total_score += result.score;
            if result.score > 0 {
                if let Some(reason) = &result.reason {
                    reasons.push(reason.clone());
                }
            }

            let terminated = result.blocked;
            details.push((kind, result));

            if terminated {
                trace.record_short_circuit(kind);
                trace.record_verdict(total_score, true);
                return TrustVerdict {
                    total_score,
                    blocked: true,
                    reasons,
                    details,
                    trace,
                };
            }
        }

        let blocked = total_score >= self.config.block_threshold;
        trace.record_verdict(total_score, blocked);

        TrustVerdict {
            total_score,
            blocked,
            reasons,
            details,
            trace,
        }
    }
}

impl Default for TrustEvaluator {
    fn default() -> Self {
        Self::from_config(ScoringConfig::default())
    }
}
