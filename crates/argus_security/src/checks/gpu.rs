//! GPU identity check.
//!
//! Two-step substring test over the unmasked WebGL renderer and vendor
//! strings: a genuine mobile GPU token anywhere wins immediately, then and
//! only then desktop/software-renderer tokens are consulted. The order
//! matters - plenty of real phone stacks mention a desktop manufacturer in
//! the vendor string next to a mobile part in the renderer string.

use argus_core::FingerprintReport;

use crate::checks::{CheckKind, Evidence, PriorSignals, ScoreResult, SignalCheck};
use crate::config::GpuPolicy;

/// Matches GPU identity strings against mobile and desktop vocabularies.
#[derive(Clone, Debug)]
pub struct GpuCheck {
    policy: GpuPolicy,
}

impl GpuCheck {
    /// Creates the check from its policy.
    #[must_use]
    pub const fn new(policy: GpuPolicy) -> Self {
        Self { policy }
    }

    fn find_token<'a>(&self, tokens: &'a [String], renderer: &str, vendor: &str) -> Option<&'a str> {
        tokens
            .iter()
            .find(|t| renderer.contains(t.as_str()) || vendor.contains(t.as_str()))
            .map(String::as_str)
    }
}

impl SignalCheck for GpuCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Gpu
    }

    fn evaluate(&self, report: &FingerprintReport, _prior: &PriorSignals) -> Option<ScoreResult> {
        let raw_renderer = report.webgl_renderer.as_deref().unwrap_or("");
        let raw_vendor = report.webgl_vendor.as_deref().unwrap_or("");

        if raw_renderer.is_empty() && raw_vendor.is_empty() {
            return Some(ScoreResult::clean_with_reason(
                "WebGL renderer not available",
            ));
        }

        let renderer = raw_renderer.to_lowercase();
        let vendor = raw_vendor.to_lowercase();

        // Mobile GPU always overrides suspicion.
        if let Some(token) = self.find_token(&self.policy.allow_tokens, &renderer, &vendor) {
            return Some(ScoreResult::clean().with_evidence(Evidence {
                matched_token: Some(token.to_string()),
                ..Evidence::default()
            }));
        }

        if let Some(token) = self.find_token(&self.policy.deny_tokens, &renderer, &vendor) {
            let cited = if raw_renderer.is_empty() {
                raw_vendor
            } else {
                raw_renderer
            };
            return Some(
                ScoreResult::flagged(
                    self.policy.desktop_score,
                    format!("Desktop-class GPU detected: {cited}"),
                )
                .with_evidence(Evidence {
                    matched_token: Some(token.to_string()),
                    ..Evidence::default()
                }),
            );
        }

        Some(ScoreResult::clean())
    }
}
