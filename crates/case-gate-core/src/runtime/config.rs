// crates/case-gate-core/src/runtime/config.rs
// ============================================================================
// Module: Static Configuration Source
// Description: In-memory configuration source for embedding and tests.
// Purpose: Provide a deterministic reference ConfigSource implementation.
// Dependencies: crate::interfaces
// ============================================================================

//! ## Overview
//! A map-backed configuration source. Runners embedding the gate without a
//! process-wide configuration store can populate one of these at startup;
//! tests use it for deterministic presence checks.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::interfaces::ConfigSource;

// ============================================================================
// SECTION: Static Configuration Source
// ============================================================================

/// In-memory key→value configuration source.
///
/// # Invariants
/// - Read-only through [`ConfigSource`]; mutation happens only through the
///   owning handle before gating starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticConfigSource {
    /// Provided configuration values keyed by fully qualified name.
    values: BTreeMap<String, String>,
}

impl StaticConfigSource {
    /// Creates an empty configuration source.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: BTreeMap::new(),
        }
    }

    /// Sets a provided value for a qualified key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    /// Builder-style variant of [`Self::set`].
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }
}

impl ConfigSource for StaticConfigSource {
    fn is_provided(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }
}
