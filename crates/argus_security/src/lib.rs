//! # ARGUS Security - The Gatekeeper
//!
//! Multi-signal device-trust classifier for reward-bearing game traffic.
//!
//! Emulated and virtualized clients farm promo codes, prize pools, and
//! leaderboards. This crate scores a structured device fingerprint against
//! six independent heuristics and renders one explainable block decision.
//!
//! ## Architecture
//!
//! ```text
//! FingerprintReport
//!     │
//!     ▼
//! ┌─────────────────────────────────────────────┐
//! │ TrustEvaluator (fixed check order)          │
//! │                                             │
//! │  platform ──► blocks? ──► short-circuit     │
//! │  gpu          │                             │
//! │  user_agent   │ scores + reasons            │
//! │  touch        │                             │
//! │  battery ─────┤ (skipped if no telemetry)   │
//! │  motion ◄─────┘ (sees battery outcome)      │
//! └─────────────────────────────────────────────┘
//!     │
//!     ▼
//! TrustVerdict { total_score, blocked, reasons, details, trace }
//! ```
//!
//! ## Guarantees
//!
//! - **Deterministic**: identical report in, identical verdict out
//! - **Total**: missing optional sections score zero, nothing throws
//! - **Pure**: no I/O, no shared state; `evaluate` takes `&self` and is
//!   safe to call from any number of request handlers concurrently
//! - **Tunable**: every weight, threshold, and token vocabulary lives in
//!   [`ScoringConfig`], loadable from TOML

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod checks;
pub mod config;
pub mod error;
pub mod evaluator;
pub mod trace;

pub use checks::{
    BatteryStabilityCheck, CheckKind, Evidence, GpuCheck, MotionVarianceCheck, PlatformCheck,
    PriorSignals, ScoreResult, SignalCheck, TouchPointCheck, UserAgentCheck,
};
pub use config::{
    BatteryPolicy, GpuPolicy, MotionPolicy, PlatformPolicy, ScoringConfig, TouchPolicy,
    UserAgentPolicy,
};
pub use error::{TrustError, TrustResult};
pub use evaluator::{TrustEvaluator, TrustVerdict};
pub use trace::{EvaluationTrace, TraceEvent};
