// crates/case-gate-core/src/core/invocation.rs
// ============================================================================
// Module: Case Invocations
// Description: Handle for a test case about to run.
// Purpose: Pair immutable declaration metadata with the executable case body.
// Dependencies: crate::core::{metadata, outcome}
// ============================================================================

//! ## Overview
//! A case invocation is the opaque handle the surrounding runner hands to the
//! gate: the case's static declaration metadata plus the executable body. The
//! gate wraps it and reads its metadata; it never mutates the invocation's
//! identity. Executing consumes the invocation, so a body runs at most once.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeSet;
use std::fmt;

use crate::core::metadata::AnnotationTag;
use crate::core::metadata::CaseMetadata;
use crate::core::outcome::CaseFailure;

// ============================================================================
// SECTION: Case Invocation
// ============================================================================

/// Executable body of a test case, supplied by the runner.
pub type CaseAction = Box<dyn FnOnce() -> Result<(), CaseFailure> + Send>;

/// One test case about to run: declaration metadata plus its body.
///
/// # Invariants
/// - Metadata is immutable for the life of the invocation.
/// - The body executes at most once; `execute` consumes the invocation.
pub struct CaseInvocation {
    /// Static declaration metadata for the case.
    metadata: CaseMetadata,
    /// Executable case body.
    action: CaseAction,
}

impl CaseInvocation {
    /// Creates an invocation from metadata and an executable body.
    #[must_use]
    pub fn new(
        metadata: CaseMetadata,
        action: impl FnOnce() -> Result<(), CaseFailure> + Send + 'static,
    ) -> Self {
        Self {
            metadata,
            action: Box::new(action),
        }
    }

    /// Returns the case's declaration metadata.
    #[must_use]
    pub const fn metadata(&self) -> &CaseMetadata {
        &self.metadata
    }

    /// Returns tags with the given name from the method and the declaring
    /// class, duplicates collapsed. Read-only introspection for filters.
    #[must_use]
    pub fn annotations_of_type(&self, name: &str) -> BTreeSet<&AnnotationTag> {
        self.metadata.annotations_of_type(name)
    }

    /// Returns all tags on the method and the declaring class, merged.
    #[must_use]
    pub fn all_annotations(&self) -> BTreeSet<&AnnotationTag> {
        self.metadata.all_annotations()
    }

    /// Executes the case body, consuming the invocation.
    ///
    /// # Errors
    ///
    /// Returns the [`CaseFailure`] reported by the body, verbatim.
    pub fn execute(self) -> Result<(), CaseFailure> {
        (self.action)()
    }
}

impl fmt::Debug for CaseInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CaseInvocation").field("metadata", &self.metadata).finish_non_exhaustive()
    }
}
