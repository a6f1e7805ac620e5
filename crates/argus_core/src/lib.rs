//! # ARGUS Core - Shared Report Types
//!
//! Canonical device-fingerprint schema shared between the HTTP gateway and
//! the scoring engine.
//!
//! ## Design Principles
//!
//! 1. **One canonical schema** - Field aliasing and normalization happen at
//!    the ingestion boundary, never inside a scoring rule
//! 2. **Plain data** - Reports are immutable value objects, constructed per
//!    evaluation and never persisted
//! 3. **No policy** - Weights, thresholds, and token vocabularies belong to
//!    the engine configuration, not to the data model
//!
//! ## Thread Safety
//!
//! Everything here is plain owned data. Reports are safe to move across
//! request handlers; nothing is shared or locked.

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod report;
pub mod stats;

pub use report::{
    BatteryReading, BatteryTelemetry, FingerprintReport, MotionSample, MotionTelemetry,
};
pub use stats::{mean, mean_abs, population_std_dev};
