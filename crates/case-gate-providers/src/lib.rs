// crates/case-gate-providers/src/lib.rs
// ============================================================================
// Module: Case Gate Providers
// Description: Concrete collaborator implementations for the Case Gate core.
// Purpose: Ship an environment-backed configuration source and a filter registry.
// Dependencies: case-gate-core, serde
// ============================================================================

//! ## Overview
//! This crate ships the concrete collaborators a runner typically wires into
//! the gate rule: a configuration source over the process environment (with
//! deterministic overrides for tests) and a registry that holds the
//! optionally bound skip filter behind the core resolver interface.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod env;
pub mod registry;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use env::EnvConfigSource;
pub use env::EnvSourceConfig;
pub use registry::FilterRegistry;
