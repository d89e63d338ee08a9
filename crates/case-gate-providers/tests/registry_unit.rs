// crates/case-gate-providers/tests/registry_unit.rs
// ============================================================================
// Module: Filter Registry Tests
// Description: Validate filter binding, resolution, and full gating wiring.
// Purpose: Ensure at-most-one binding semantics behind the resolver interface.
// Dependencies: case-gate-core, case-gate-providers
// ============================================================================

//! Registry-resolution tests, including the gate rule consuming the registry
//! end to end.

use case_gate_core::ActivationRequirement;
use case_gate_core::CaseInvocation;
use case_gate_core::CaseMetadata;
use case_gate_core::CaseOutcome;
use case_gate_core::FilterError;
use case_gate_core::FilterResolver;
use case_gate_core::GateError;
use case_gate_core::GateRule;
use case_gate_core::SkipFilter;
use case_gate_core::StaticConfigSource;
use case_gate_providers::FilterRegistry;

/// Filter stub skipping every case with a fixed reason.
struct AlwaysSkip {
    /// Reason reported for every case.
    reason: String,
}

impl SkipFilter for AlwaysSkip {
    fn why_skip(&self, _case: &CaseInvocation) -> Result<Option<String>, FilterError> {
        Ok(Some(self.reason.clone()))
    }
}

/// Filter stub letting every case run.
struct NeverSkip;

impl SkipFilter for NeverSkip {
    fn why_skip(&self, _case: &CaseInvocation) -> Result<Option<String>, FilterError> {
        Ok(None)
    }
}

#[test]
fn unbound_registry_resolves_to_none() {
    let registry = FilterRegistry::unbound();

    assert!(!registry.is_bound());
    assert!(registry.resolve().is_none());
}

#[test]
fn binding_replaces_previous_filter() -> Result<(), FilterError> {
    let mut registry = FilterRegistry::unbound();
    registry.bind(AlwaysSkip {
        reason: "old".to_string(),
    });
    registry.bind(AlwaysSkip {
        reason: "new".to_string(),
    });

    let invocation = CaseInvocation::new(CaseMetadata::new("UiTest", "clicks"), || Ok(()));
    let resolved = registry.resolve();
    assert!(resolved.is_some());
    if let Some(filter) = resolved {
        assert_eq!(filter.why_skip(&invocation)?, Some("new".to_string()));
    }
    Ok(())
}

#[test]
fn clear_unbinds_the_filter() {
    let mut registry = FilterRegistry::unbound();
    registry.bind(NeverSkip);
    assert!(registry.is_bound());

    registry.clear();

    assert!(!registry.is_bound());
    assert!(registry.resolve().is_none());
}

#[test]
fn gate_rule_consumes_registry_end_to_end() -> Result<(), GateError> {
    let mut registry = FilterRegistry::unbound();
    registry.bind(AlwaysSkip {
        reason: "environment not ready".to_string(),
    });

    let rule = GateRule::new(registry, StaticConfigSource::new());
    let invocation = CaseInvocation::new(CaseMetadata::new("UiTest", "clicks"), || Ok(()));

    let outcome = rule.wrap(invocation).run()?;

    assert_eq!(outcome, CaseOutcome::Skipped {
        reason: "environment not ready".to_string(),
    });
    Ok(())
}

#[test]
fn unbound_registry_gates_on_activation_only() -> Result<(), GateError> {
    let mut metadata = CaseMetadata::new("PaymentTest", "charges");
    metadata.class_activation = Some(ActivationRequirement::new(["apiKey"]));

    let rule = GateRule::new(FilterRegistry::unbound(), StaticConfigSource::new());
    let outcome = rule.wrap(CaseInvocation::new(metadata, || Ok(()))).run()?;

    assert_eq!(outcome, CaseOutcome::Skipped {
        reason: "No property provided: PaymentTest.apiKey".to_string(),
    });
    Ok(())
}
