//! Layer the flat study overrides onto the nested standards tree
//!
//! Study authors list host types flat, without knowing how deep each one sits
//! in the standards. The assembler walks the standards tree and applies the
//! same flat override map at every level, keeping the standards' nesting.

use crate::Result;
use crate::merge::combine_host_type;
use crate::model::{HostTypeMap, StandardsTree, StudyConfig};

/// Apply the flat study overrides to one level of standards host types,
/// recursing into each host type's children.
///
/// Host types without a study entry are copied unchanged (children still get
/// their overrides). The returned map mirrors the standards' shape.
pub fn assemble(flat_study: &HostTypeMap, standards: &HostTypeMap) -> Result<HostTypeMap> {
    let mut augmented = HostTypeMap::new();

    for (host_type, standards_def) in standards {
        let mut augmented_def = match flat_study.get(host_type) {
            Some(study_def) => {
                tracing::debug!(%host_type, "Applying study overrides");
                combine_host_type(standards_def, study_def)?
            }
            None => standards_def.clone(),
        };

        let children = assemble(flat_study, &standards_def.host_type_specific_metadata)?;
        if !children.is_empty() {
            augmented_def.host_type_specific_metadata = children;
        }

        augmented.insert(host_type.clone(), augmented_def);
    }

    Ok(augmented)
}

/// Combine a standards tree with a study configuration into an augmented
/// standards tree, ready for [`StandardsTree::flatten`].
pub fn combine_standards_and_study(
    study: &StudyConfig,
    standards: &StandardsTree,
) -> Result<StandardsTree> {
    let host_types = assemble(study.host_types(), &standards.host_type_specific_metadata)?;
    Ok(StandardsTree::new(host_types))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{FieldDefinition, FieldMap, HostTypeDefinition};
    use serde_json::json;

    fn host_with_field(field: &str, value: &str) -> HostTypeDefinition {
        HostTypeDefinition {
            metadata_fields: FieldMap::from([(
                field.to_string(),
                FieldDefinition {
                    default: Some(json!(value)),
                    ..Default::default()
                },
            )]),
            ..Default::default()
        }
    }

    #[test]
    fn test_host_types_missing_from_study_pass_through() {
        let standards = HostTypeMap::from([("control".to_string(), host_with_field("a", "1"))]);

        let augmented = assemble(&HostTypeMap::new(), &standards).unwrap();

        assert_eq!(augmented, standards);
    }

    #[test]
    fn test_study_overrides_apply_at_any_depth() {
        let mut parent = host_with_field("a", "parent");
        parent
            .host_type_specific_metadata
            .insert("child".into(), host_with_field("a", "child"));
        let standards = HostTypeMap::from([("parent".to_string(), parent)]);
        let study = HostTypeMap::from([("child".to_string(), host_with_field("b", "study"))]);

        let augmented = assemble(&study, &standards).unwrap();

        let parent = &augmented["parent"];
        assert!(!parent.metadata_fields.contains_key("b"));
        let child = &parent.host_type_specific_metadata["child"];
        assert_eq!(child.metadata_fields["a"].default, Some(json!("child")));
        assert_eq!(child.metadata_fields["b"].default, Some(json!("study")));
    }

    #[test]
    fn test_study_only_host_types_are_ignored() {
        let standards = HostTypeMap::from([("control".to_string(), host_with_field("a", "1"))]);
        let study = HostTypeMap::from([("martian".to_string(), host_with_field("a", "2"))]);

        let augmented = assemble(&study, &standards).unwrap();

        assert!(!augmented.contains_key("martian"));
    }
}
