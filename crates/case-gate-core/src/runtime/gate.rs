// crates/case-gate-core/src/runtime/gate.rs
// ============================================================================
// Module: Gate Rule
// Description: Run-or-skip orchestration around a case invocation.
// Purpose: Compose filter and activation gating, then delegate verbatim.
// Dependencies: crate::{core, interfaces, runtime}, thiserror
// ============================================================================

//! ## Overview
//! The gate rule is the single canonical decision path: resolve the optional
//! skip filter, consult it, check activation requirements, and only then
//! execute the wrapped invocation. The two gating sources stay orthogonal;
//! the filter check always precedes the activation check, and the first
//! triggered skip terminates the sequence. Eligible cases delegate to the
//! original body and propagate its outcome unchanged.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::CaseInvocation;
use crate::core::CaseMetadata;
use crate::core::CaseOutcome;
use crate::core::SkipDecision;
use crate::interfaces::ConfigSource;
use crate::interfaces::FilterError;
use crate::interfaces::FilterResolver;
use crate::runtime::activation::missing_activation_key;

// ============================================================================
// SECTION: Gate Errors
// ============================================================================

/// Errors surfaced by the gating sequence itself.
#[derive(Debug, Error)]
pub enum GateError {
    /// The resolved skip filter malfunctioned. Propagated unconverted: a
    /// broken filter must not silently pass a case.
    #[error(transparent)]
    Filter(#[from] FilterError),
}

// ============================================================================
// SECTION: Gate Rule
// ============================================================================

/// Gate rule wrapping case invocations with run-or-skip decisions.
///
/// # Invariants
/// - A case proceeds iff the filter yields no reason and every required
///   qualified key is present in the configuration source.
/// - Both gating sources are pure reads; no state is shared across cases.
pub struct GateRule<R, C> {
    /// Resolver for the optional skip filter collaborator.
    resolver: R,
    /// Read-only runtime configuration source.
    config: C,
}

impl<R, C> GateRule<R, C>
where
    R: FilterResolver,
    C: ConfigSource,
{
    /// Creates a gate rule from its collaborators.
    #[must_use]
    pub const fn new(resolver: R, config: C) -> Self {
        Self {
            resolver,
            config,
        }
    }

    /// Wraps an invocation; running the result performs the full decision
    /// sequence and only then executes the original body.
    #[must_use]
    pub const fn wrap(&self, invocation: CaseInvocation) -> GatedCase<'_, R, C> {
        GatedCase {
            rule: self,
            invocation,
        }
    }
}

// ============================================================================
// SECTION: Gated Case
// ============================================================================

/// A wrapped invocation bound to its gate rule.
pub struct GatedCase<'rule, R, C> {
    /// Gate rule supplying the collaborators.
    rule: &'rule GateRule<R, C>,
    /// The wrapped invocation.
    invocation: CaseInvocation,
}

impl<R, C> GatedCase<'_, R, C>
where
    R: FilterResolver,
    C: ConfigSource,
{
    /// Returns the wrapped case's declaration metadata.
    #[must_use]
    pub const fn metadata(&self) -> &CaseMetadata {
        self.invocation.metadata()
    }

    /// Performs the gating sequence without executing the case body.
    ///
    /// Decision order, short-circuiting: resolved filter first, then the
    /// class-level requirement, then the method-level requirement.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Filter`] when the resolved filter malfunctions.
    pub fn decide(&self) -> Result<SkipDecision, GateError> {
        if let Some(filter) = self.rule.resolver.resolve() {
            if let Some(reason) = filter.why_skip(&self.invocation)? {
                return Ok(SkipDecision::Skip {
                    reason,
                });
            }
        }

        if let Some(key) = missing_activation_key(self.invocation.metadata(), &self.rule.config) {
            return Ok(SkipDecision::Skip {
                reason: format!("No property provided: {key}"),
            });
        }

        Ok(SkipDecision::Proceed)
    }

    /// Runs the gating sequence and, if eligible, the case body.
    ///
    /// Skips never execute the body; eligible cases propagate the body's
    /// outcome verbatim, never converted to skips.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::Filter`] when the resolved filter malfunctions.
    pub fn run(self) -> Result<CaseOutcome, GateError> {
        match self.decide()? {
            SkipDecision::Skip {
                reason,
            } => Ok(CaseOutcome::Skipped {
                reason,
            }),
            SkipDecision::Proceed => Ok(match self.invocation.execute() {
                Ok(()) => CaseOutcome::Passed,
                Err(failure) => CaseOutcome::Failed {
                    failure,
                },
            }),
        }
    }
}
