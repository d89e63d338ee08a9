// crates/case-gate-providers/src/env.rs
// ============================================================================
// Module: Environment Configuration Source
// Description: ConfigSource over the process environment.
// Purpose: Expose deterministic, policy-checked presence lookups.
// Dependencies: case-gate-core, serde
// ============================================================================

//! ## Overview
//! The environment source answers presence checks from the process
//! environment. It enforces explicit allowlist and denylist rules before any
//! lookup and supports a deterministic override map so gating decisions stay
//! reproducible in tests. Blocked keys read as not provided (fail closed).

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use case_gate_core::ConfigSource;
use serde::Deserialize;

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Configuration for the environment source.
///
/// # Invariants
/// - `denylist` overrides `allowlist` when both are present.
/// - `overrides` take precedence over process environment reads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct EnvSourceConfig {
    /// Optional allowlist of qualified keys.
    pub allowlist: Option<BTreeSet<String>>,
    /// Explicit denylist of qualified keys.
    pub denylist: BTreeSet<String>,
    /// Optional override map used for deterministic lookups.
    pub overrides: Option<BTreeMap<String, String>>,
}

// ============================================================================
// SECTION: Source Implementation
// ============================================================================

/// Configuration source backed by the process environment.
///
/// # Invariants
/// - Applies allowlist/denylist policy before any lookup.
/// - Presence-only: value content is never returned to the gate.
#[derive(Debug, Clone, Default)]
pub struct EnvConfigSource {
    /// Source configuration, including policy and overrides.
    config: EnvSourceConfig,
}

impl EnvConfigSource {
    /// Creates a new environment source with the given configuration.
    #[must_use]
    pub const fn new(config: EnvSourceConfig) -> Self {
        Self {
            config,
        }
    }

    /// Validates the key against allowlist/denylist policy.
    fn is_key_allowed(&self, key: &str) -> bool {
        if self.config.denylist.contains(key) {
            return false;
        }
        if let Some(allowlist) = &self.config.allowlist {
            return allowlist.contains(key);
        }
        true
    }
}

impl ConfigSource for EnvConfigSource {
    fn is_provided(&self, key: &str) -> bool {
        if !self.is_key_allowed(key) {
            return false;
        }
        if let Some(overrides) = &self.config.overrides {
            return overrides.contains_key(key);
        }
        std::env::var_os(key).is_some()
    }
}
