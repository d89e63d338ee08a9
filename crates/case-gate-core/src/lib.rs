// crates/case-gate-core/src/lib.rs
// ============================================================================
// Module: Case Gate Core Library
// Description: Public API surface for the Case Gate core.
// Purpose: Expose core types, interfaces, and runtime helpers.
// Dependencies: crate::{core, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Case Gate core decides, per test invocation, whether the case should
//! execute or be reported as skipped with a reason. Two orthogonal gating
//! sources compose: an optionally bound skip filter and declarative
//! activation requirements checked against a read-only configuration source.
//! The crate is runner-agnostic and integrates through explicit interfaces
//! rather than embedding into any test framework.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod core;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use core::*;

pub use interfaces::ConfigSource;
pub use interfaces::FilterError;
pub use interfaces::FilterResolver;
pub use interfaces::SkipFilter;
pub use runtime::GateError;
pub use runtime::GateRule;
pub use runtime::GatedCase;
pub use runtime::StaticConfigSource;
pub use runtime::first_missing_key;
pub use runtime::missing_activation_key;
