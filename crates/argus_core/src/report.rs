//! Device fingerprint report submitted by a client for trust evaluation.
//!
//! These are the canonical representations used at the ingestion boundary.
//! The gateway deserializes whatever the client sent into this schema once;
//! every scoring rule downstream reads these fields and nothing else.

use serde::{Deserialize, Serialize};

/// A single battery sample from the client's observation window.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryReading {
    /// Charge level in `[0.0, 1.0]`.
    pub level: f64,
    /// Seconds until fully charged. `None` mirrors a `null` from the
    /// client API; stubbed implementations also report `0`, `+inf`, or NaN.
    #[serde(default)]
    pub charging_time: Option<f64>,
}

impl BatteryReading {
    /// Creates a new reading.
    #[must_use]
    pub const fn new(level: f64, charging_time: Option<f64>) -> Self {
        Self {
            level,
            charging_time,
        }
    }
}

/// Battery telemetry collected over the observation window.
///
/// Intended collection: one sample per second for at least five seconds,
/// eight samples or more.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatteryTelemetry {
    /// Whether the client's battery API was reachable at all.
    pub available: bool,
    /// Ordered samples, oldest first.
    #[serde(default)]
    pub readings: Vec<BatteryReading>,
}

impl BatteryTelemetry {
    /// Creates telemetry from an ordered sample window.
    #[must_use]
    pub fn new(readings: Vec<BatteryReading>) -> Self {
        Self {
            available: true,
            readings,
        }
    }

    /// Creates an explicit "API unavailable" marker.
    #[must_use]
    pub const fn unavailable() -> Self {
        Self {
            available: false,
            readings: Vec::new(),
        }
    }
}

/// One 3-axis accelerometer sample.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionSample {
    /// X-axis acceleration.
    pub x: f64,
    /// Y-axis acceleration.
    pub y: f64,
    /// Z-axis acceleration.
    pub z: f64,
}

impl MotionSample {
    /// Creates a new sample.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Motion-sensor telemetry collected over the observation window.
///
/// Intended collection: ten samples or more.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MotionTelemetry {
    /// Whether the motion subsystem produced data.
    pub available: bool,
    /// Ordered samples, oldest first.
    #[serde(default)]
    pub data: Vec<MotionSample>,
    /// The subsystem's own stated reason when data is missing
    /// (e.g. "permission denied", "sensor not present").
    #[serde(default)]
    pub reason: Option<String>,
}

impl MotionTelemetry {
    /// Creates telemetry from an ordered sample window.
    #[must_use]
    pub fn new(data: Vec<MotionSample>) -> Self {
        Self {
            available: true,
            data,
            reason: None,
        }
    }

    /// Creates an "unavailable" marker carrying the subsystem's reason.
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            available: false,
            data: Vec::new(),
            reason: Some(reason.into()),
        }
    }
}

/// Client-submitted device fingerprint offered for trust evaluation.
///
/// Only `platform` is required. Every other section is optional; a missing
/// section is "insufficient evidence" to the engine, never an error.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FingerprintReport {
    /// Declared client platform (`android`, `android_x`, `ios`).
    pub platform: String,
    /// `WEBGL_debug_renderer_info` unmasked renderer string.
    pub webgl_renderer: Option<String>,
    /// `WEBGL_debug_renderer_info` unmasked vendor string.
    pub webgl_vendor: Option<String>,
    /// Navigator user-agent string.
    pub user_agent: Option<String>,
    /// `navigator.maxTouchPoints` as reported by the client.
    pub max_touch_points: u32,
    /// Battery observation window, if collected.
    pub battery: Option<BatteryTelemetry>,
    /// Motion observation window, if collected.
    pub motion: Option<MotionTelemetry>,
}

impl FingerprintReport {
    /// Creates a minimal report for the given platform.
    #[must_use]
    pub fn new(platform: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            ..Self::default()
        }
    }

    /// Sets the WebGL renderer string.
    #[must_use]
    pub fn with_renderer(mut self, renderer: impl Into<String>) -> Self {
        self.webgl_renderer = Some(renderer.into());
        self
    }

    /// Sets the WebGL vendor string.
    #[must_use]
    pub fn with_vendor(mut self, vendor: impl Into<String>) -> Self {
        self.webgl_vendor = Some(vendor.into());
        self
    }

    /// Sets the user-agent string.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets the reported touch-point count.
    #[must_use]
    pub const fn with_touch_points(mut self, points: u32) -> Self {
        self.max_touch_points = points;
        self
    }

    /// Attaches battery telemetry.
    #[must_use]
    pub fn with_battery(mut self, battery: BatteryTelemetry) -> Self {
        self.battery = Some(battery);
        self
    }

    /// Attaches motion telemetry.
    #[must_use]
    pub fn with_motion(mut self, motion: MotionTelemetry) -> Self {
        self.motion = Some(motion);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_report_defaults() {
        let report = FingerprintReport::new("android");

        assert_eq!(report.platform, "android");
        assert_eq!(report.max_touch_points, 0);
        assert!(report.webgl_renderer.is_none());
        assert!(report.battery.is_none());
        assert!(report.motion.is_none());
    }

    #[test]
    fn test_canonical_field_names() {
        // The gateway hands us camelCase; missing sections must not error.
        let report: FingerprintReport = toml::from_str(
            r#"
            platform = "android"
            webglRenderer = "Adreno (TM) 640"
            maxTouchPoints = 5
            "#,
        )
        .expect("canonical schema should deserialize");

        assert_eq!(report.platform, "android");
        assert_eq!(report.webgl_renderer.as_deref(), Some("Adreno (TM) 640"));
        assert_eq!(report.max_touch_points, 5);
        assert!(report.user_agent.is_none());
    }

    #[test]
    fn test_battery_telemetry_deserializes_null_charging_time() {
        let telemetry: BatteryTelemetry = toml::from_str(
            r"
            available = true
            [[readings]]
            level = 1.0
            [[readings]]
            level = 0.97
            chargingTime = 3600.0
            ",
        )
        .expect("battery window should deserialize");

        assert_eq!(telemetry.readings.len(), 2);
        assert!(telemetry.readings[0].charging_time.is_none());
        assert_eq!(telemetry.readings[1].charging_time, Some(3600.0));
    }

    #[test]
    fn test_builder_chain() {
        let report = FingerprintReport::new("ios")
            .with_renderer("Apple GPU")
            .with_touch_points(5)
            .with_motion(MotionTelemetry::unavailable("permission denied"));

        assert_eq!(report.webgl_renderer.as_deref(), Some("Apple GPU"));
        let motion = report.motion.expect("motion attached");
        assert!(!motion.available);
        assert_eq!(motion.reason.as_deref(), Some("permission denied"));
    }
}
