//! Platform gate.
//!
//! Runs first. A declared platform outside the accepted set invalidates
//! every other comparison baseline (GPU families and touch-point floors
//! are platform-relative), so this check alone terminates evaluation.

use argus_core::FingerprintReport;

use crate::checks::{CheckKind, PriorSignals, ScoreResult, SignalCheck};
use crate::config::PlatformPolicy;

/// Gate on the declared client platform.
#[derive(Clone, Debug)]
pub struct PlatformCheck {
    policy: PlatformPolicy,
}

impl PlatformCheck {
    /// Creates the check from its policy.
    #[must_use]
    pub const fn new(policy: PlatformPolicy) -> Self {
        Self { policy }
    }
}

impl SignalCheck for PlatformCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Platform
    }

    fn evaluate(&self, report: &FingerprintReport, _prior: &PriorSignals) -> Option<ScoreResult> {
        if self.policy.allowed.iter().any(|p| p == &report.platform) {
            return Some(ScoreResult::clean());
        }

        Some(ScoreResult::blocking(
            self.policy.violation_score,
            format!(
                "Invalid platform: {} (requires android/ios)",
                report.platform
            ),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PlatformPolicy;

    fn check() -> PlatformCheck {
        PlatformCheck::new(PlatformPolicy::default())
    }

    #[test]
    fn test_accepted_platforms_pass() {
        for platform in ["android", "android_x", "ios"] {
            let report = FingerprintReport::new(platform);
            let result = check()
                .evaluate(&report, &PriorSignals::default())
                .expect("platform always applicable");
            assert_eq!(result.score, 0, "{platform} should pass");
            assert!(!result.blocked);
        }
    }

    #[test]
    fn test_desktop_platform_blocks() {
        let report = FingerprintReport::new("windows");
        let result = check()
            .evaluate(&report, &PriorSignals::default())
            .expect("platform always applicable");

        assert_eq!(result.score, 150);
        assert!(result.blocked);
        assert_eq!(
            result.reason.as_deref(),
            Some("Invalid platform: windows (requires android/ios)")
        );
    }

    #[test]
    fn test_empty_platform_blocks() {
        let report = FingerprintReport::default();
        let result = check()
            .evaluate(&report, &PriorSignals::default())
            .expect("platform always applicable");

        assert!(result.blocked);
        assert_eq!(
            result.reason.as_deref(),
            Some("Invalid platform:  (requires android/ios)")
        );
    }

    #[test]
    fn test_matching_is_exact_not_case_folded() {
        // Normalization is the gateway's job; the gate itself is strict.
        let report = FingerprintReport::new("Android");
        let result = check()
            .evaluate(&report, &PriorSignals::default())
            .expect("platform always applicable");

        assert!(result.blocked);
    }
}
