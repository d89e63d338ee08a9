// crates/case-gate-providers/src/registry.rs
// ============================================================================
// Module: Filter Registry
// Description: Registry holding the optionally bound skip filter.
// Purpose: Resolve at most one filter per invocation without container magic.
// Dependencies: case-gate-core
// ============================================================================

//! ## Overview
//! The filter registry is the shipped dependency resolution collaborator: an
//! explicit slot holding at most one skip filter. It implements the core
//! [`case_gate_core::FilterResolver`] interface so the gate rule consumes it
//! like any other resolver. An empty registry resolves to no filter, which is
//! not an error; that gating source then always proceeds.

// ============================================================================
// SECTION: Imports
// ============================================================================

use case_gate_core::FilterResolver;
use case_gate_core::SkipFilter;

// ============================================================================
// SECTION: Filter Registry
// ============================================================================

/// Registry holding the optionally bound skip filter.
///
/// # Invariants
/// - Holds at most one filter; binding replaces any previous binding.
/// - Read-only during gating; bindings change only through the owning handle.
#[derive(Default)]
pub struct FilterRegistry {
    /// The bound filter slot, empty when no implementation is supplied.
    filter: Option<Box<dyn SkipFilter + Send + Sync>>,
}

impl FilterRegistry {
    /// Creates a registry with no filter bound.
    #[must_use]
    pub const fn unbound() -> Self {
        Self {
            filter: None,
        }
    }

    /// Binds a filter, replacing any previous binding.
    pub fn bind(&mut self, filter: impl SkipFilter + Send + Sync + 'static) {
        self.filter = Some(Box::new(filter));
    }

    /// Removes the current binding, if any.
    pub fn clear(&mut self) {
        self.filter = None;
    }

    /// Returns true when a filter is bound.
    #[must_use]
    pub const fn is_bound(&self) -> bool {
        self.filter.is_some()
    }
}

impl FilterResolver for FilterRegistry {
    fn resolve(&self) -> Option<&dyn SkipFilter> {
        self.filter.as_deref().map(|filter| filter as &dyn SkipFilter)
    }
}
