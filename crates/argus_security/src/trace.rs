//! # Evaluation Trace
//!
//! Structured record of one evaluation: which checks ran, in what order,
//! what each contributed, and how the verdict was reached. The trace rides
//! inside the returned verdict, so diagnostics are a value the caller can
//! assert on and archive - not a side channel scraped from logs.

use serde::Serialize;

use crate::checks::{CheckKind, ScoreResult};

/// One step of an evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum TraceEvent {
    /// A check ran and produced a score.
    CheckEvaluated {
        /// Which check.
        check: CheckKind,
        /// Score it contributed.
        score: u32,
        /// Whether it demanded termination.
        blocked: bool,
    },
    /// A check was not applicable to this report and left no details entry.
    CheckSkipped {
        /// Which check.
        check: CheckKind,
    },
    /// A blocking check terminated the run; no later check was evaluated.
    ShortCircuit {
        /// The check that terminated the run.
        check: CheckKind,
    },
    /// The final decision.
    Verdict {
        /// Summed score.
        total_score: u32,
        /// Final classification.
        blocked: bool,
    },
}

/// Ordered trace of one evaluation run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationTrace {
    events: Vec<TraceEvent>,
}

impl EvaluationTrace {
    /// Creates an empty trace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a check outcome.
    pub fn record(&mut self, check: CheckKind, result: &ScoreResult) {
        self.events.push(TraceEvent::CheckEvaluated {
            check,
            score: result.score,
            blocked: result.blocked,
        });
    }

    /// Records a skipped (not-applicable) check.
    pub fn record_skipped(&mut self, check: CheckKind) {
        self.events.push(TraceEvent::CheckSkipped { check });
    }

    /// Records early termination by a blocking check.
    pub fn record_short_circuit(&mut self, check: CheckKind) {
        self.events.push(TraceEvent::ShortCircuit { check });
    }

    /// Records the final decision.
    pub fn record_verdict(&mut self, total_score: u32, blocked: bool) {
        self.events.push(TraceEvent::Verdict {
            total_score,
            blocked,
        });
    }

    /// The ordered events of this run.
    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    /// Number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether anything was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
