//! Field definitions: the validation rule set for one metadata column

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Field name -> definition
pub type FieldMap = BTreeMap<String, FieldDefinition>;

/// Validation rules for a single metadata field.
///
/// The keys the merge engine reasons about are explicit fields. Everything
/// else (`required`, `empty`, `min`, `is_phi`, `units`, ...) is carried
/// verbatim in [`extra`](Self::extra) and merged key by key.
///
/// # Example YAML
///
/// ```yaml
/// allowed: ["true", "false"]
/// default: "true"
/// required: true
/// type: string
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldDefinition {
    /// Permitted literal values; mutually exclusive with `anyof`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allowed: Option<Vec<Value>>,

    /// Alternative rule fragments, any one of which may match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub anyof: Option<Vec<FieldDefinition>>,

    /// Primitive type tag (`string`, `number`, `integer`, ...)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub field_type: Option<String>,

    /// Fallback value for the field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Keys not interpreted by the merge engine
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl FieldDefinition {
    /// True when no key at all is set.
    pub fn is_empty(&self) -> bool {
        self.allowed.is_none()
            && self.anyof.is_none()
            && self.field_type.is_none()
            && self.default.is_none()
            && self.extra.is_empty()
    }

    /// Overlay `other` onto this definition.
    ///
    /// `other` wins key by key. Setting `allowed` drops any existing `anyof`;
    /// setting `anyof` drops any existing `allowed` and `type`, so a resolved
    /// definition never carries both alternatives.
    pub fn merge(&mut self, other: &FieldDefinition) {
        if other.allowed.is_some() {
            self.anyof = None;
        }
        if other.anyof.is_some() {
            self.allowed = None;
            self.field_type = None;
        }

        if let Some(allowed) = &other.allowed {
            self.allowed = Some(allowed.clone());
        }
        if let Some(anyof) = &other.anyof {
            self.anyof = Some(anyof.clone());
        }
        if let Some(field_type) = &other.field_type {
            self.field_type = Some(field_type.clone());
        }
        if let Some(default) = &other.default {
            self.default = Some(default.clone());
        }
        for (key, value) in &other.extra {
            self.extra.insert(key.clone(), value.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn allowed_string(values: &[&str]) -> FieldDefinition {
        FieldDefinition {
            allowed: Some(values.iter().map(|v| json!(v)).collect()),
            field_type: Some("string".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_merge_overwrites_scalars_and_keeps_base_extras() {
        let mut base = allowed_string(&["true", "false"]);
        base.extra.insert("required".into(), json!(true));
        base.extra.insert("is_phi".into(), json!(false));

        let mut add = allowed_string(&["false"]);
        add.default = Some(json!("false"));
        add.extra.insert("is_phi".into(), json!(true));

        base.merge(&add);

        assert_eq!(base.allowed, Some(vec![json!("false")]));
        assert_eq!(base.default, Some(json!("false")));
        assert_eq!(base.extra["required"], json!(true));
        assert_eq!(base.extra["is_phi"], json!(true));
    }

    #[test]
    fn test_anyof_clears_allowed_and_type() {
        let mut base = allowed_string(&["a"]);
        let add = FieldDefinition {
            anyof: Some(vec![allowed_string(&["b"])]),
            ..Default::default()
        };

        base.merge(&add);

        assert!(base.allowed.is_none());
        assert!(base.field_type.is_none());
        assert_eq!(base.anyof.as_ref().map(Vec::len), Some(1));
    }

    #[test]
    fn test_anyof_with_own_type_keeps_new_type() {
        let mut base = allowed_string(&["a"]);
        let add = FieldDefinition {
            anyof: Some(vec![allowed_string(&["b"])]),
            field_type: Some("number".into()),
            ..Default::default()
        };

        base.merge(&add);

        assert_eq!(base.field_type.as_deref(), Some("number"));
    }

    #[test]
    fn test_allowed_clears_anyof_but_keeps_type() {
        let mut base = FieldDefinition {
            anyof: Some(vec![allowed_string(&["x"])]),
            field_type: Some("string".into()),
            ..Default::default()
        };
        let add = FieldDefinition {
            allowed: Some(vec![json!("y")]),
            ..Default::default()
        };

        base.merge(&add);

        assert!(base.anyof.is_none());
        assert_eq!(base.allowed, Some(vec![json!("y")]));
        assert_eq!(base.field_type.as_deref(), Some("string"));
    }

    #[test]
    fn test_is_empty() {
        assert!(FieldDefinition::default().is_empty());
        assert!(!allowed_string(&["a"]).is_empty());
    }
}
