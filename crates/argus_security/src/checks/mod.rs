//! # Signal Checks
//!
//! Six independent heuristics, each a pure function of (a slice of) the
//! fingerprint report. The evaluator holds them in a fixed ordered
//! registry; adding a seventh signal means implementing [`SignalCheck`]
//! and registering it, not touching existing control flow.
//!
//! ## Signals
//!
//! - **Platform**: declared platform gate; blocks outright on violation
//! - **Gpu**: renderer/vendor strings vs mobile allow-list, desktop deny-list
//! - **UserAgent**: emulator tooling keywords
//! - **TouchPoints**: touchscreen contact floor
//! - **Battery**: pinned-full, always-charging windows
//! - **Motion**: accelerometer variance against the sensor noise floor

mod battery;
mod gpu;
mod motion;
mod platform;
mod touch;
mod user_agent;

pub use battery::BatteryStabilityCheck;
pub use gpu::GpuCheck;
pub use motion::MotionVarianceCheck;
pub use platform::PlatformCheck;
pub use touch::TouchPointCheck;
pub use user_agent::UserAgentCheck;

use argus_core::FingerprintReport;
use serde::Serialize;

/// Identity of a signal check, stable across releases for audit output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckKind {
    /// Declared platform gate.
    Platform,
    /// GPU identity strings.
    Gpu,
    /// User-agent tokens.
    UserAgent,
    /// Touch-input capability.
    TouchPoints,
    /// Battery telemetry stability.
    Battery,
    /// Motion-sensor variance.
    Motion,
}

impl CheckKind {
    /// Stable string form used in audit output and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Platform => "platform",
            Self::Gpu => "gpu",
            Self::UserAgent => "user_agent",
            Self::TouchPoints => "touch_points",
            Self::Battery => "battery",
            Self::Motion => "motion",
        }
    }
}

impl std::fmt::Display for CheckKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Diagnostic evidence attached to a score.
///
/// Fields are populated per check; everything defaults to empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct Evidence {
    /// Token that decided the GPU verdict.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched_token: Option<String>,
    /// User-agent keywords that matched.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub matched_keywords: Vec<String>,
    /// Touch points the client reported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observed_touch_points: Option<u32>,
    /// Battery readings in the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub readings: Option<usize>,
    /// Motion samples in the window.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub samples: Option<usize>,
    /// Maximum per-axis population standard deviation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_std_dev: Option<f64>,
    /// Mean across axes of per-axis mean absolute value.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mean_abs: Option<f64>,
}

/// Outcome of a single signal check.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Non-negative score contributed to the total.
    pub score: u32,
    /// Whether this check alone terminates evaluation. Only the platform
    /// gate ever sets this.
    pub blocked: bool,
    /// Human-readable explanation. Present on every non-zero score and on
    /// insufficient-evidence outcomes; the aggregator only surfaces
    /// reasons for non-zero scores.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Diagnostic fields for audit.
    pub evidence: Evidence,
}

impl ScoreResult {
    /// A zero-score, unblocked outcome with no commentary.
    #[must_use]
    pub fn clean() -> Self {
        Self::default()
    }

    /// A zero-score outcome that still explains itself, e.g. missing
    /// evidence or a passed check worth noting.
    #[must_use]
    pub fn clean_with_reason(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
            ..Self::default()
        }
    }

    /// A suspicious outcome contributing `score` to the total.
    #[must_use]
    pub fn flagged(score: u32, reason: impl Into<String>) -> Self {
        Self {
            score,
            blocked: false,
            reason: Some(reason.into()),
            evidence: Evidence::default(),
        }
    }

    /// A terminal outcome: the check decided the verdict by itself.
    #[must_use]
    pub fn blocking(score: u32, reason: impl Into<String>) -> Self {
        Self {
            score,
            blocked: true,
            reason: Some(reason.into()),
            evidence: Evidence::default(),
        }
    }

    /// Attaches evidence.
    #[must_use]
    pub fn with_evidence(mut self, evidence: Evidence) -> Self {
        self.evidence = evidence;
        self
    }
}

/// Outcomes of already-evaluated checks, visible to later ones.
///
/// The motion fallback stacks with a suspicious battery window; everything
/// else ignores this.
#[derive(Clone, Copy, Debug, Default)]
pub struct PriorSignals {
    /// Battery check score, if the battery check ran.
    pub battery_score: Option<u32>,
}

impl PriorSignals {
    /// Whether the battery window already raised suspicion.
    #[must_use]
    pub fn battery_suspicious(&self) -> bool {
        self.battery_score.is_some_and(|score| score > 0)
    }
}

/// One independent heuristic evaluator.
///
/// Implementations are pure: same report and priors in, same result out.
/// Returning `None` means the signal is not applicable to this report and
/// must leave no trace in the verdict details (only the battery check uses
/// this, when the report carries no battery section at all).
pub trait SignalCheck: Send + Sync {
    /// Identity of this check.
    fn kind(&self) -> CheckKind;

    /// Evaluates the report, seeing the outcomes of earlier checks.
    fn evaluate(&self, report: &FingerprintReport, prior: &PriorSignals) -> Option<ScoreResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_kind_stable_names() {
        assert_eq!(CheckKind::Platform.as_str(), "platform");
        assert_eq!(CheckKind::UserAgent.as_str(), "user_agent");
        assert_eq!(CheckKind::Motion.to_string(), "motion");
    }

    #[test]
    fn test_score_result_constructors() {
        assert_eq!(ScoreResult::clean().score, 0);
        assert!(!ScoreResult::clean().blocked);

        let flagged = ScoreResult::flagged(70, "desktop GPU");
        assert_eq!(flagged.score, 70);
        assert!(!flagged.blocked);
        assert_eq!(flagged.reason.as_deref(), Some("desktop GPU"));

        let blocking = ScoreResult::blocking(150, "bad platform");
        assert!(blocking.blocked);
    }

    #[test]
    fn test_prior_signals_suspicion() {
        assert!(!PriorSignals::default().battery_suspicious());
        assert!(!PriorSignals {
            battery_score: Some(0)
        }
        .battery_suspicious());
        assert!(PriorSignals {
            battery_score: Some(50)
        }
        .battery_suspicious());
    }
}
