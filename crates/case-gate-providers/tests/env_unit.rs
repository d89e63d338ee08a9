// crates/case-gate-providers/tests/env_unit.rs
// ============================================================================
// Module: Environment Source Tests
// Description: Validate policy-checked presence lookups.
// Purpose: Ensure overrides, denylist, and allowlist behave fail-closed.
// Dependencies: case-gate-core, case-gate-providers
// ============================================================================

//! Presence-lookup tests for the environment configuration source. Tests use
//! the deterministic override map so the process environment is never mutated.

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use case_gate_core::ConfigSource;
use case_gate_providers::EnvConfigSource;
use case_gate_providers::EnvSourceConfig;

/// Builds a source answering from the given override entries only.
fn overridden(entries: &[(&str, &str)]) -> EnvConfigSource {
    let overrides: BTreeMap<String, String> =
        entries.iter().map(|(key, value)| ((*key).to_string(), (*value).to_string())).collect();
    EnvConfigSource::new(EnvSourceConfig {
        allowlist: None,
        denylist: BTreeSet::new(),
        overrides: Some(overrides),
    })
}

#[test]
fn override_presence_controls_lookup() {
    let source = overridden(&[("PaymentTest.apiKey", "sandbox-key")]);

    assert!(source.is_provided("PaymentTest.apiKey"));
    assert!(!source.is_provided("PaymentTest.endpoint"));
}

#[test]
fn denylisted_key_reads_as_not_provided() {
    let mut denylist = BTreeSet::new();
    denylist.insert("PaymentTest.apiKey".to_string());
    let mut overrides = BTreeMap::new();
    overrides.insert("PaymentTest.apiKey".to_string(), "sandbox-key".to_string());

    let source = EnvConfigSource::new(EnvSourceConfig {
        allowlist: None,
        denylist,
        overrides: Some(overrides),
    });

    assert!(!source.is_provided("PaymentTest.apiKey"));
}

#[test]
fn allowlist_restricts_lookups_to_listed_keys() {
    let mut allowlist = BTreeSet::new();
    allowlist.insert("PaymentTest.apiKey".to_string());
    let mut overrides = BTreeMap::new();
    overrides.insert("PaymentTest.apiKey".to_string(), "sandbox-key".to_string());
    overrides.insert("PaymentTest.endpoint".to_string(), "https://sandbox.example".to_string());

    let source = EnvConfigSource::new(EnvSourceConfig {
        allowlist: Some(allowlist),
        denylist: BTreeSet::new(),
        overrides: Some(overrides),
    });

    assert!(source.is_provided("PaymentTest.apiKey"));
    assert!(!source.is_provided("PaymentTest.endpoint"));
}

#[test]
fn denylist_overrides_allowlist() {
    let mut allowlist = BTreeSet::new();
    allowlist.insert("PaymentTest.apiKey".to_string());
    let mut denylist = BTreeSet::new();
    denylist.insert("PaymentTest.apiKey".to_string());
    let mut overrides = BTreeMap::new();
    overrides.insert("PaymentTest.apiKey".to_string(), "sandbox-key".to_string());

    let source = EnvConfigSource::new(EnvSourceConfig {
        allowlist: Some(allowlist),
        denylist,
        overrides: Some(overrides),
    });

    assert!(!source.is_provided("PaymentTest.apiKey"));
}

#[test]
fn value_content_is_ignored_for_presence() {
    // Presence-only contract: an empty value still counts as provided.
    let source = overridden(&[("PaymentTest.apiKey", "")]);

    assert!(source.is_provided("PaymentTest.apiKey"));
}
