// crates/case-gate-core/src/core/metadata.rs
// ============================================================================
// Module: Case Declaration Metadata
// Description: Static declaration table for test cases.
// Purpose: Carry annotations and activation requirements resolved at registration time.
// Dependencies: crate::core::identifiers, serde
// ============================================================================

//! ## Overview
//! Case metadata is the static declaration table attached to each registered
//! test case. It replaces reflective lookup: annotation tags and activation
//! requirements are recorded once when the case is registered and read per
//! invocation, never mutated afterwards.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;

use serde::Deserialize;
use serde::Serialize;

use crate::core::identifiers::ClassName;
use crate::core::identifiers::MethodName;
use crate::core::identifiers::PropertyKey;

// ============================================================================
// SECTION: Annotation Tags
// ============================================================================

/// One entry of a case's attribute map, standing in for a source annotation.
///
/// # Invariants
/// - Tags with equal name and parameters compare equal and collapse when
///   class-level and method-level sets merge.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AnnotationTag {
    /// Tag name, matching the declared annotation type.
    pub name: String,
    /// Named parameters declared on the tag.
    pub params: BTreeMap<String, String>,
}

impl AnnotationTag {
    /// Creates a parameterless tag.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: BTreeMap::new(),
        }
    }

    /// Creates a tag with the given named parameters.
    #[must_use]
    pub fn with_params(
        name: impl Into<String>,
        params: impl IntoIterator<Item = (String, String)>,
    ) -> Self {
        Self {
            name: name.into(),
            params: params.into_iter().collect(),
        }
    }
}

// ============================================================================
// SECTION: Activation Requirements
// ============================================================================

/// Declared list of configuration keys a case needs to be eligible to run.
///
/// # Invariants
/// - Keys keep declaration order; the first missing key is the one reported.
/// - An empty requirement places no constraint on eligibility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivationRequirement {
    /// Required property keys in declaration order.
    keys: Vec<PropertyKey>,
}

impl ActivationRequirement {
    /// Creates a requirement from property keys in declaration order.
    #[must_use]
    pub fn new<K>(keys: impl IntoIterator<Item = K>) -> Self
    where
        K: Into<PropertyKey>,
    {
        Self {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the required keys in declaration order.
    #[must_use]
    pub fn keys(&self) -> &[PropertyKey] {
        &self.keys
    }

    /// Returns true when the requirement places no constraint.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

// ============================================================================
// SECTION: Case Metadata
// ============================================================================

/// Static declaration table for one registered test case.
///
/// # Invariants
/// - Built once at registration time; immutable per invocation.
/// - Class-level declarations are independent of method-level ones; either,
///   both, or neither may be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseMetadata {
    /// Simple name of the declaring class.
    pub class_name: ClassName,
    /// Name of the test method.
    pub method_name: MethodName,
    /// Annotation tags declared on the class.
    pub class_annotations: BTreeSet<AnnotationTag>,
    /// Annotation tags declared on the method.
    pub method_annotations: BTreeSet<AnnotationTag>,
    /// Optional class-level activation requirement.
    pub class_activation: Option<ActivationRequirement>,
    /// Optional method-level activation requirement.
    pub method_activation: Option<ActivationRequirement>,
}

impl CaseMetadata {
    /// Creates metadata with no annotations and no activation requirements.
    #[must_use]
    pub fn new(class_name: impl Into<ClassName>, method_name: impl Into<MethodName>) -> Self {
        Self {
            class_name: class_name.into(),
            method_name: method_name.into(),
            class_annotations: BTreeSet::new(),
            method_annotations: BTreeSet::new(),
            class_activation: None,
            method_activation: None,
        }
    }

    /// Returns tags with the given name from the method and the declaring
    /// class, duplicates collapsed. Absent names yield an empty set.
    #[must_use]
    pub fn annotations_of_type(&self, name: &str) -> BTreeSet<&AnnotationTag> {
        self.all_annotations().into_iter().filter(|tag| tag.name == name).collect()
    }

    /// Returns all tags on the method and the declaring class, merged with
    /// duplicates collapsed.
    #[must_use]
    pub fn all_annotations(&self) -> BTreeSet<&AnnotationTag> {
        self.method_annotations.iter().chain(self.class_annotations.iter()).collect()
    }
}
