// crates/case-gate-core/src/runtime/mod.rs
// ============================================================================
// Module: Case Gate Runtime
// Description: Gating orchestration and activation checking.
// Purpose: Decide run-or-skip for case invocations against collaborators.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement the gate rule decision sequence and the pure
//! activation checks it composes. Every runner surface must call through the
//! same gate rule to preserve the decision ordering guarantees.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod activation;
pub mod config;
pub mod gate;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use activation::first_missing_key;
pub use activation::missing_activation_key;
pub use config::StaticConfigSource;
pub use gate::GateError;
pub use gate::GateRule;
pub use gate::GatedCase;
