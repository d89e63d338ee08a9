// crates/case-gate-core/src/core/outcome.rs
// ============================================================================
// Module: Case Outcomes
// Description: Skip decisions and gated case outcomes.
// Purpose: Keep "preconditions not met" distinct from pass and fail in the outcome taxonomy.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Outcomes are tagged values rather than control-flow exceptions. A skip is a
//! first-class variant distinct from pass and fail so the surrounding runner
//! can tell "environment not ready" apart from "test failed".

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Skip Decisions
// ============================================================================

/// Decision produced by the gating step for one invocation.
///
/// # Invariants
/// - Produced fresh per invocation; never cached or shared across invocations.
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkipDecision {
    /// The case is eligible; the wrapped invocation may execute.
    Proceed,
    /// The case must not execute.
    Skip {
        /// User-visible reason for the skip.
        reason: String,
    },
}

impl SkipDecision {
    /// Returns true when the decision is a skip.
    #[must_use]
    pub const fn is_skip(&self) -> bool {
        matches!(self, Self::Skip { .. })
    }
}

// ============================================================================
// SECTION: Case Failures
// ============================================================================

/// Kind of failure produced by an executed case.
///
/// # Invariants
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// An assertion in the case body did not hold.
    Assertion,
    /// The case body raised an unexpected error.
    Error,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assertion => write!(f, "assertion failed"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Failure produced by the wrapped invocation itself.
///
/// Passed through the gate unmodified; never wrapped, suppressed, or
/// reinterpreted as a skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{kind}: {message}")]
pub struct CaseFailure {
    /// Failure kind reported by the collaborator.
    pub kind: FailureKind,
    /// Human-readable failure message.
    pub message: String,
}

impl CaseFailure {
    /// Creates an assertion failure.
    #[must_use]
    pub fn assertion(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Assertion,
            message: message.into(),
        }
    }

    /// Creates an unexpected-error failure.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: FailureKind::Error,
            message: message.into(),
        }
    }
}

// ============================================================================
// SECTION: Case Outcomes
// ============================================================================

/// Outcome of running one gated case.
///
/// # Invariants
/// - `Skipped` means the case body was never evaluated.
/// - `Passed` and `Failed` are the wrapped invocation's own outcome, verbatim.
/// - Variants are stable for serialization and contract matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CaseOutcome {
    /// The case executed and passed.
    Passed,
    /// The case's preconditions were not met; the body was not evaluated.
    Skipped {
        /// User-visible reason for the skip.
        reason: String,
    },
    /// The case executed and failed.
    Failed {
        /// Failure reported by the case body.
        failure: CaseFailure,
    },
}

impl CaseOutcome {
    /// Returns true when the case passed.
    #[must_use]
    pub const fn is_passed(&self) -> bool {
        matches!(self, Self::Passed)
    }

    /// Returns true when the case was skipped.
    #[must_use]
    pub const fn is_skipped(&self) -> bool {
        matches!(self, Self::Skipped { .. })
    }

    /// Returns true when the case failed.
    #[must_use]
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }
}
