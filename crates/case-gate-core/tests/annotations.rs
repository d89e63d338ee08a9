// crates/case-gate-core/tests/annotations.rs
// ============================================================================
// Module: Annotation Introspection Tests
// Description: Validate merged annotation lookup on case metadata.
// Purpose: Ensure duplicates collapse and type filtering omits absent names.
// Dependencies: case-gate-core
// ============================================================================

//! Introspection-helper tests for the attribute map backing skip filters.

use case_gate_core::AnnotationTag;
use case_gate_core::CaseInvocation;
use case_gate_core::CaseMetadata;

/// Builds metadata with the given class-level and method-level tags.
fn tagged_metadata(class_tags: Vec<AnnotationTag>, method_tags: Vec<AnnotationTag>) -> CaseMetadata {
    let mut metadata = CaseMetadata::new("BrowserTest", "navigates");
    metadata.class_annotations = class_tags.into_iter().collect();
    metadata.method_annotations = method_tags.into_iter().collect();
    metadata
}

#[test]
fn equal_tags_on_class_and_method_collapse_to_one() {
    let tag = AnnotationTag::new("Native");
    let metadata = tagged_metadata(vec![tag.clone()], vec![tag.clone()]);

    let all = metadata.all_annotations();

    assert_eq!(all.len(), 1);
    assert!(all.contains(&tag));
}

#[test]
fn tags_with_different_params_are_distinct() {
    let class_tag =
        AnnotationTag::with_params("WithPlugin", [("name".to_string(), "git".to_string())]);
    let method_tag =
        AnnotationTag::with_params("WithPlugin", [("name".to_string(), "svn".to_string())]);
    let metadata = tagged_metadata(vec![class_tag.clone()], vec![method_tag.clone()]);

    let matching = metadata.annotations_of_type("WithPlugin");

    assert_eq!(matching.len(), 2);
    assert!(matching.contains(&class_tag));
    assert!(matching.contains(&method_tag));
}

#[test]
fn of_type_omits_absent_names() {
    let metadata = tagged_metadata(vec![AnnotationTag::new("Native")], Vec::new());

    assert!(metadata.annotations_of_type("WithPlugin").is_empty());
}

#[test]
fn all_annotations_merges_both_declaration_sites() {
    let class_tag = AnnotationTag::new("Native");
    let method_tag = AnnotationTag::new("SmokeTest");
    let metadata = tagged_metadata(vec![class_tag.clone()], vec![method_tag.clone()]);

    let all = metadata.all_annotations();

    assert_eq!(all.len(), 2);
    assert!(all.contains(&class_tag));
    assert!(all.contains(&method_tag));
}

#[test]
fn invocation_exposes_the_same_introspection_helpers() {
    let tag = AnnotationTag::new("Native");
    let metadata = tagged_metadata(vec![tag.clone()], vec![tag.clone()]);
    let invocation = CaseInvocation::new(metadata, || Ok(()));

    assert_eq!(invocation.all_annotations().len(), 1);
    assert_eq!(invocation.annotations_of_type("Native").len(), 1);
    assert!(invocation.annotations_of_type("WithPlugin").is_empty());
}
