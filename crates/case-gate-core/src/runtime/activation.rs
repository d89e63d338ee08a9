// crates/case-gate-core/src/runtime/activation.rs
// ============================================================================
// Module: Activation Checking
// Description: Presence checks for declared activation requirements.
// Purpose: Report the first missing qualified key deterministically.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! Activation checking evaluates declared requirements against a read-only
//! configuration source. The check is a pure function of its inputs: keys are
//! probed in declaration order, class-level before method-level, and the first
//! missing fully qualified key is the one reported.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::ActivationRequirement;
use crate::core::CaseMetadata;
use crate::core::ClassName;
use crate::core::QualifiedKey;
use crate::interfaces::ConfigSource;

// ============================================================================
// SECTION: Requirement Checks
// ============================================================================

/// Returns the first missing qualified key for one requirement, or `None`
/// when the requirement is absent, empty, or fully satisfied.
#[must_use]
pub fn first_missing_key<C>(
    requirement: Option<&ActivationRequirement>,
    class_name: &ClassName,
    config: &C,
) -> Option<QualifiedKey>
where
    C: ConfigSource + ?Sized,
{
    let requirement = requirement?;
    for key in requirement.keys() {
        let qualified = QualifiedKey::qualify(class_name, key);
        if !config.is_provided(qualified.as_str()) {
            return Some(qualified);
        }
    }
    None
}

/// Returns the first missing qualified key across a case's class-level and
/// method-level requirements, class-level checked first.
#[must_use]
pub fn missing_activation_key<C>(metadata: &CaseMetadata, config: &C) -> Option<QualifiedKey>
where
    C: ConfigSource + ?Sized,
{
    first_missing_key(metadata.class_activation.as_ref(), &metadata.class_name, config).or_else(
        || first_missing_key(metadata.method_activation.as_ref(), &metadata.class_name, config),
    )
}
