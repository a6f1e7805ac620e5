//! Battery stability check.
//!
//! Stubbed and virtualized battery APIs report a permanently-full,
//! permanently-charging state. Real hardware shows at least
//! micro-variation in the level, or a finite chargingTime while unplugged.
//! The rule only fires when *every* reading in the window is pinned;
//! a single deviating sample clears the device.
//!
//! A short or missing window is insufficient evidence, not innocence:
//! it scores zero here and is handled by the motion fallback instead.

use argus_core::{BatteryReading, FingerprintReport};

use crate::checks::{CheckKind, Evidence, PriorSignals, ScoreResult, SignalCheck};
use crate::config::BatteryPolicy;

/// Flags observation windows frozen at 100% with abnormal chargingTime.
#[derive(Clone, Debug)]
pub struct BatteryStabilityCheck {
    policy: BatteryPolicy,
}

impl BatteryStabilityCheck {
    /// Creates the check from its policy.
    #[must_use]
    pub const fn new(policy: BatteryPolicy) -> Self {
        Self { policy }
    }

    /// The pinned signature: level equal to the pinned value exactly,
    /// chargingTime in {0, null, +inf, NaN}.
    #[allow(clippy::float_cmp)]
    fn reading_pinned(&self, reading: &BatteryReading) -> bool {
        reading.level == self.policy.pinned_level && charging_time_abnormal(reading.charging_time)
    }
}

/// `chargingTime` values no unplugged physical device reports.
#[allow(clippy::float_cmp)]
fn charging_time_abnormal(charging_time: Option<f64>) -> bool {
    match charging_time {
        None => true,
        Some(v) => v == 0.0 || v == f64::INFINITY || v.is_nan(),
    }
}

impl SignalCheck for BatteryStabilityCheck {
    fn kind(&self) -> CheckKind {
        CheckKind::Battery
    }

    fn evaluate(&self, report: &FingerprintReport, _prior: &PriorSignals) -> Option<ScoreResult> {
        // No battery section at all: the check leaves no verdict entry.
        let telemetry = report.battery.as_ref()?;

        let evidence = Evidence {
            readings: Some(telemetry.readings.len()),
            ..Evidence::default()
        };

        if !telemetry.available {
            return Some(
                ScoreResult::clean_with_reason("Battery API unavailable").with_evidence(evidence),
            );
        }

        if telemetry.readings.len() < self.policy.min_readings {
            return Some(
                ScoreResult::clean_with_reason(format!(
                    "Battery window too short: {} readings (need {})",
                    telemetry.readings.len(),
                    self.policy.min_readings
                ))
                .with_evidence(evidence),
            );
        }

        if telemetry.readings.iter().all(|r| self.reading_pinned(r)) {
            return Some(
                ScoreResult::flagged(
                    self.policy.pinned_score,
                    "battery status completely fixed (100% + abnormal chargingTime) \
                     across the observation window",
                )
                .with_evidence(evidence),
            );
        }

        Some(ScoreResult::clean().with_evidence(evidence))
    }
}
