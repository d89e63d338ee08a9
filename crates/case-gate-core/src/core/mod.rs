// crates/case-gate-core/src/core/mod.rs
// ============================================================================
// Module: Case Gate Core Types
// Description: Canonical case metadata, invocation, and outcome structures.
// Purpose: Provide stable, serializable types for case declarations and gated outcomes.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Case Gate core types define the static declaration table for registered
//! test cases, the invocation handle, and the tagged outcome taxonomy. These
//! types are the canonical source of truth for any surrounding runner surface.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod identifiers;
pub mod invocation;
pub mod metadata;
pub mod outcome;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use identifiers::ClassName;
pub use identifiers::MethodName;
pub use identifiers::PropertyKey;
pub use identifiers::QualifiedKey;
pub use invocation::CaseAction;
pub use invocation::CaseInvocation;
pub use metadata::ActivationRequirement;
pub use metadata::AnnotationTag;
pub use metadata::CaseMetadata;
pub use outcome::CaseFailure;
pub use outcome::CaseOutcome;
pub use outcome::FailureKind;
pub use outcome::SkipDecision;
