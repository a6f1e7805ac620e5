//! # Scoring Configuration
//!
//! Every weight, threshold, and token vocabulary used by the engine, as one
//! declarative tree. The defaults carry the calibrated production values;
//! operations can retune any of them from an external TOML file without a
//! code change.
//!
//! The additive combination of heterogeneous signals into one score is a
//! policy choice, not a law of nature. Nothing in the engine assumes these
//! weights are optimal - only that the table it was handed is coherent.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{TrustError, TrustResult};

/// Current schema version for scoring tables.
///
/// Bump when a field is added or a vocabulary changes meaning, so audit
/// logs can tie a verdict to the table that produced it.
pub const CONFIG_VERSION: u32 = 1;

/// Platform gate policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformPolicy {
    /// Platforms accepted for reward-bearing play.
    pub allowed: Vec<String>,
    /// Score assigned when the declared platform is outside the set.
    /// A falsified platform invalidates every other comparison baseline,
    /// so this alone must clear the block threshold.
    pub violation_score: u32,
}

impl Default for PlatformPolicy {
    fn default() -> Self {
        Self {
            allowed: vec![
                "android".to_string(),
                "android_x".to_string(),
                "ios".to_string(),
            ],
            violation_score: 150,
        }
    }
}

/// GPU identity policy.
///
/// The allow-list wins over the deny-list: a genuine mobile GPU string
/// overrides any desktop token that happens to co-occur (e.g. a vendor
/// string naming the desktop manufacturer of a mobile part).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GpuPolicy {
    /// Substrings identifying genuine mobile GPU families.
    pub allow_tokens: Vec<String>,
    /// Substrings identifying desktop hardware and software renderers.
    pub deny_tokens: Vec<String>,
    /// Score assigned on a deny-list match.
    pub desktop_score: u32,
}

impl Default for GpuPolicy {
    fn default() -> Self {
        Self {
            allow_tokens: [
                "qualcomm",
                "adreno",
                "arm",
                "mali",
                "powervr",
                "imagination",
                "apple",
                "apple gpu",
                "apple g13",
            ]
            .map(String::from)
            .to_vec(),
            deny_tokens: [
                "intel",
                "nvidia",
                "amd",
                "swiftshader",
                "llvmpipe",
                "google swiftshader",
                "android emulator",
                "mesa",
                "software",
                "virtualbox",
                "vmware",
                "radeon",
                "geforce",
                "rtx",
                "gtx",
                "iris",
                "uhd graphics",
            ]
            .map(String::from)
            .to_vec(),
            desktop_score: 70,
        }
    }
}

/// User-agent policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserAgentPolicy {
    /// Emulator and automation tool names matched as substrings.
    pub keywords: Vec<String>,
    /// Flat score for any number of keyword matches.
    pub emulator_score: u32,
}

impl Default for UserAgentPolicy {
    fn default() -> Self {
        Self {
            keywords: [
                "bluestacks",
                "nox",
                "ldplayer",
                "memu",
                "genymotion",
                "android studio",
                "emulator",
                "simulator",
            ]
            .map(String::from)
            .to_vec(),
            emulator_score: 80,
        }
    }
}

/// Touch capability policy.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TouchPolicy {
    /// Platforms exempt from the touch-point floor.
    pub exempt_platforms: Vec<String>,
    /// Minimum simultaneous contacts a genuine touchscreen reports.
    pub min_touch_points: u32,
    /// Score assigned below the floor.
    pub low_touch_score: u32,
}

impl Default for TouchPolicy {
    fn default() -> Self {
        Self {
            exempt_platforms: vec!["ios".to_string(), "android_x".to_string()],
            min_touch_points: 2,
            low_touch_score: 40,
        }
    }
}

/// Battery stability policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryPolicy {
    /// Minimum readings for the window to count as evidence.
    pub min_readings: usize,
    /// Level value a stubbed battery API pins itself to.
    pub pinned_level: f64,
    /// Score when every reading is pinned-full with abnormal chargingTime.
    pub pinned_score: u32,
}

impl Default for BatteryPolicy {
    fn default() -> Self {
        Self {
            min_readings: 8,   // ~1/sec over >=5s observation
            pinned_level: 1.0, // exactly 100%
            pinned_score: 50,
        }
    }
}

/// Motion variance policy.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionPolicy {
    /// Minimum samples for the window to count as evidence.
    pub min_samples: usize,
    /// Below this max per-axis std-dev no handheld device exists;
    /// the sensor noise floor alone exceeds it.
    pub rigid_std_dev: f64,
    /// Below this max per-axis std-dev the window is merely "very stable".
    pub stable_std_dev: f64,
    /// Mean absolute value under which a stable window reads as
    /// "values near zero".
    pub near_zero_mean: f64,
    /// Score for an almost completely fixed window.
    pub rigid_score: u32,
    /// Score for a very stable, near-zero window.
    pub stable_score: u32,
    /// Score for the ambiguous band between rigid and natural.
    pub ambiguous_score: u32,
    /// Fallback score when motion data is missing and battery was clean.
    pub missing_score: u32,
    /// Fallback score when motion data is missing and battery already
    /// scored - absent motion stacks with a suspicious battery.
    pub missing_suspect_score: u32,
}

impl Default for MotionPolicy {
    fn default() -> Self {
        Self {
            min_samples: 10,
            rigid_std_dev: 0.0015,
            stable_std_dev: 0.004,
            near_zero_mean: 0.01,
            rigid_score: 90,
            stable_score: 60,
            ambiguous_score: 30,
            missing_score: 50,
            missing_suspect_score: 60,
        }
    }
}

/// The complete scoring table handed to [`crate::TrustEvaluator`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Schema version of this table.
    pub version: u32,
    /// Total score at or above which a device is classified non-genuine.
    /// The threshold is inclusive.
    pub block_threshold: u32,
    /// Platform gate.
    pub platform: PlatformPolicy,
    /// GPU identity rules.
    pub gpu: GpuPolicy,
    /// User-agent rules.
    pub user_agent: UserAgentPolicy,
    /// Touch capability rules.
    pub touch: TouchPolicy,
    /// Battery stability rules.
    pub battery: BatteryPolicy,
    /// Motion variance rules.
    pub motion: MotionPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            block_threshold: 100,
            platform: PlatformPolicy::default(),
            gpu: GpuPolicy::default(),
            user_agent: UserAgentPolicy::default(),
            touch: TouchPolicy::default(),
            battery: BatteryPolicy::default(),
            motion: MotionPolicy::default(),
        }
    }
}

impl ScoringConfig {
    /// Loads a scoring table from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`TrustError::ConfigRead`] if the file cannot be read,
    /// [`TrustError::ConfigParse`] if it is not valid scoring TOML, and
    /// [`TrustError::InvalidConfig`] if the parsed values are incoherent.
    pub fn from_toml(path: impl AsRef<Path>) -> TrustResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| TrustError::ConfigRead {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Self::from_toml_str(&raw)
    }

    /// Parses a scoring table from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`TrustError::ConfigParse`] on malformed TOML and
    /// [`TrustError::InvalidConfig`] on incoherent values.
    pub fn from_toml_str(raw: &str) -> TrustResult<Self> {
        let config: Self =
            toml::from_str(raw).map_err(|e| TrustError::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates coherence of the table.
    ///
    /// # Errors
    ///
    /// Returns [`TrustError::InvalidConfig`] naming the first incoherent
    /// value found.
    pub fn validate(&self) -> TrustResult<()> {
        if self.block_threshold == 0 {
            return Err(TrustError::InvalidConfig(
                "block_threshold must be positive".to_string(),
            ));
        }
        if self.platform.allowed.is_empty() {
            return Err(TrustError::InvalidConfig(
                "platform.allowed must not be empty".to_string(),
            ));
        }
        if self.platform.violation_score < self.block_threshold {
            return Err(TrustError::InvalidConfig(format!(
                "platform.violation_score {} must clear block_threshold {}",
                self.platform.violation_score, self.block_threshold
            )));
        }
        if self.gpu.allow_tokens.is_empty() || self.gpu.deny_tokens.is_empty() {
            return Err(TrustError::InvalidConfig(
                "gpu token vocabularies must not be empty".to_string(),
            ));
        }
        if self.user_agent.keywords.is_empty() {
            return Err(TrustError::InvalidConfig(
                "user_agent.keywords must not be empty".to_string(),
            ));
        }
        if self.battery.min_readings == 0 {
            return Err(TrustError::InvalidConfig(
                "battery.min_readings must be positive".to_string(),
            ));
        }
        if self.motion.min_samples == 0 {
            return Err(TrustError::InvalidConfig(
                "motion.min_samples must be positive".to_string(),
            ));
        }
        if self.motion.rigid_std_dev >= self.motion.stable_std_dev {
            return Err(TrustError::InvalidConfig(format!(
                "motion.rigid_std_dev {} must sit below motion.stable_std_dev {}",
                self.motion.rigid_std_dev, self.motion.stable_std_dev
            )));
        }
        Ok(())
    }
}
