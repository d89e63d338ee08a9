// crates/case-gate-core/src/interfaces/mod.rs
// ============================================================================
// Module: Case Gate Interfaces
// Description: Collaborator contracts for skip filters and configuration lookup.
// Purpose: Define the contract surfaces used by the Case Gate runtime.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Interfaces define how Case Gate integrates with the surrounding runner
//! without embedding any discovery, injection, or configuration machinery.
//! Implementations must be pure reads with no side effects on shared state;
//! an absent filter binding is never an error.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::CaseInvocation;

// ============================================================================
// SECTION: Skip Filter
// ============================================================================

/// Skip filter errors.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The filter implementation reported an error.
    #[error("skip filter error: {0}")]
    Filter(String),
}

/// Pluggable strategy that may veto a pending case for a computed reason.
///
/// The core never implements a default skip policy; when no filter is bound
/// this gating source always proceeds.
pub trait SkipFilter {
    /// Returns `None` when the case should run, or the reason why not.
    ///
    /// # Errors
    ///
    /// Returns [`FilterError`] when the filter itself malfunctions. Filter
    /// errors propagate to the runner unconverted; they are never skips.
    fn why_skip(&self, case: &CaseInvocation) -> Result<Option<String>, FilterError>;
}

// ============================================================================
// SECTION: Filter Resolution
// ============================================================================

/// Dependency resolution collaborator for the optional skip filter.
///
/// # Invariants
/// - At most one filter instance resolves per invocation.
/// - Absence of a binding is not an error.
pub trait FilterResolver {
    /// Resolves the bound skip filter, if any.
    fn resolve(&self) -> Option<&dyn SkipFilter>;
}

/// An optional boxed filter is itself a resolver: `None` means unbound.
impl FilterResolver for Option<Box<dyn SkipFilter + Send + Sync>> {
    fn resolve(&self) -> Option<&dyn SkipFilter> {
        self.as_deref().map(|filter| filter as &dyn SkipFilter)
    }
}

// ============================================================================
// SECTION: Configuration Source
// ============================================================================

/// Read-only runtime configuration lookup, queried by exact qualified key.
///
/// # Invariants
/// - Presence-only: value content is never interpreted by the gate.
/// - Lookups have no side effects on shared state.
pub trait ConfigSource {
    /// Returns true when the key has a provided value.
    fn is_provided(&self, key: &str) -> bool;
}
