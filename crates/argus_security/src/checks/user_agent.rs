//! User-agent token check.
//!
//! Emulator distributions leak their names into the user agent
//! (BlueStacks, Nox, LDPlayer, ...). Matches are substring,
//! case-insensitive, and score a single flat amount however many
//! keywords fire - the signal is "emulator tooling present", not a count.

use argus_core::FingerprintReport;

use crate::checks::{CheckKind, Evidence, PriorSignals, ScoreResult, SignalCheck};
use crate::config::UserAgentPolicy;

/// Scans the user agent for emulator tooling keywords.
#[derive(Clone, Debug)]
pub struct UserAgentCheck {
    policy: UserAgentPolicy,
}

impl UserAgentCheck {
    /// Creates the check from its policy.
    #[must_use]
    pub const fn new(policy: UserAgentPolicy) -> Self {
        Self { policy }
    }
}

impl SignalCheck for UserAgentCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::UserAgent
    }

    fn evaluate(&self, report: &FingerprintReport, _prior: &PriorSignals) -> Option<ScoreResult> {
        let Some(raw) = report.user_agent.as_deref() else {
            return Some(ScoreResult::clean_with_reason("User agent not available"));
        };

        let user_agent = raw.to_lowercase();
        let matched: Vec<String> = self
            .policy
            .keywords
            .iter()
            .filter(|k| user_agent.contains(k.as_str()))
            .cloned()
            .collect();

        if matched.is_empty() {
            return Some(ScoreResult::clean());
        }

        Some(
            ScoreResult::flagged(
                self.policy.emulator_score,
                format!("Emulator tooling in user agent: {}", matched.join(", ")),
            )
            .with_evidence(Evidence {
                matched_keywords: matched,
                ..Evidence::default()
            }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UserAgentPolicy;

    fn evaluate(report: &FingerprintReport) -> ScoreResult {
        UserAgentCheck::new(UserAgentPolicy::default())
            .evaluate(report, &PriorSignals::default())
            .expect("user agent always applicable")
    }

    #[test]
    fn test_genuine_mobile_ua_passes() {
        let report = FingerprintReport::new("android").with_user_agent(
            "Mozilla/5.0 (Linux; Android 13; Pixel 7) AppleWebKit/537.36 Mobile Safari/537.36",
        );
        assert_eq!(evaluate(&report).score, 0);
    }

    #[test]
    fn test_bluestacks_flagged_case_insensitive() {
        let report =
            FingerprintReport::new("android").with_user_agent("Mozilla/5.0 BlueStacks/5.21");
        let result = evaluate(&report);

        assert_eq!(result.score, 80);
        assert_eq!(
            result.reason.as_deref(),
            Some("Emulator tooling in user agent: bluestacks")
        );
    }

    #[test]
    fn test_multiple_keywords_score_once() {
        let report = FingerprintReport::new("android")
            .with_user_agent("Android Studio Emulator (Genymotion build)");
        let result = evaluate(&report);

        // Flat score, all matches listed.
        assert_eq!(result.score, 80);
        assert_eq!(
            result.evidence.matched_keywords,
            vec!["genymotion", "android studio", "emulator"]
        );
        assert_eq!(
            result.reason.as_deref(),
            Some("Emulator tooling in user agent: genymotion, android studio, emulator")
        );
    }

    #[test]
    fn test_absent_ua_is_insufficient_evidence() {
        let report = FingerprintReport::new("android");
        let result = evaluate(&report);

        assert_eq!(result.score, 0);
        assert_eq!(result.reason.as_deref(), Some("User agent not available"));
    }
}
