//! Sample-type records and their classification
//!
//! A sample-type record is identified by exactly one of three shapes:
//!
//! ```yaml
//! fe:                 # alias: stands in for another sample type
//!   alias: stool
//! stool:              # metadata: its own fields, optionally on a base type
//!   metadata_fields: { ... }
//! f:                  # base type only: inherits another sample type
//!   base_type: stool
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::field::FieldMap;
use crate::error::{ConflictKind, Error, Result};

/// Sample-type name -> record
pub type SampleTypeMap = BTreeMap<String, SampleTypeRecord>;

/// A sample-type entry as written in a standards or study file.
///
/// Which identifying keys are present decides how the record merges; use
/// [`definition`](Self::definition) to get the checked, tagged view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleTypeRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_fields: Option<FieldMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_type: Option<String>,

    /// Any other keys; overwritten wholesale when records merge
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// The variant a sample-type record was classified as
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleTypeKind {
    Alias,
    MetadataFields,
    BaseType,
}

/// Checked view of a [`SampleTypeRecord`], borrowing from it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SampleTypeDefinition<'a> {
    /// Stands in for the named sample type
    Alias { target: &'a str },
    /// Own fields, optionally layered over a base sample type
    Metadata {
        fields: &'a FieldMap,
        base_type: Option<&'a str>,
    },
    /// No own fields; inherits the named sample type
    BaseType { base_type: &'a str },
}

impl SampleTypeDefinition<'_> {
    pub fn kind(&self) -> SampleTypeKind {
        match self {
            Self::Alias { .. } => SampleTypeKind::Alias,
            Self::Metadata { .. } => SampleTypeKind::MetadataFields,
            Self::BaseType { .. } => SampleTypeKind::BaseType,
        }
    }
}

impl SampleTypeRecord {
    /// An alias record pointing at `target`.
    pub fn alias(target: impl Into<String>) -> Self {
        Self {
            alias: Some(target.into()),
            ..Default::default()
        }
    }

    /// A metadata record with the given fields and no base type.
    pub fn with_fields(fields: FieldMap) -> Self {
        Self {
            metadata_fields: Some(fields),
            ..Default::default()
        }
    }

    /// A record that only names a base type.
    pub fn based_on(base_type: impl Into<String>) -> Self {
        Self {
            base_type: Some(base_type.into()),
            ..Default::default()
        }
    }

    /// Classify this record, `name` being its key in the sample-type map.
    ///
    /// Checked in order: alias with metadata_fields, alias with base_type,
    /// alias alone, metadata_fields (a base_type alongside is allowed),
    /// base_type alone. A record with none of the three is rejected.
    pub fn definition(&self, name: &str) -> Result<SampleTypeDefinition<'_>> {
        match (&self.alias, &self.metadata_fields, &self.base_type) {
            (Some(_), Some(_), _) => Err(Error::conflict(
                name,
                ConflictKind::AliasWithMetadataFields,
            )),
            (Some(_), None, Some(_)) => {
                Err(Error::conflict(name, ConflictKind::AliasWithBaseType))
            }
            (Some(target), None, None) => Ok(SampleTypeDefinition::Alias {
                target: target.as_str(),
            }),
            (None, Some(fields), base_type) => Ok(SampleTypeDefinition::Metadata {
                fields,
                base_type: base_type.as_deref(),
            }),
            (None, None, Some(base_type)) => Ok(SampleTypeDefinition::BaseType {
                base_type: base_type.as_str(),
            }),
            (None, None, None) => Err(Error::conflict(name, ConflictKind::Neither)),
        }
    }
}

/// Classify a sample-type record by its identifying keys.
pub fn classify(sample_type: &str, record: &SampleTypeRecord) -> Result<SampleTypeKind> {
    record.definition(sample_type).map(|def| def.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FieldDefinition;

    fn one_field() -> FieldMap {
        FieldMap::from([(
            "field1".to_string(),
            FieldDefinition {
                field_type: Some("string".into()),
                ..Default::default()
            },
        )])
    }

    #[test]
    fn test_classify_alias() {
        let record = SampleTypeRecord::alias("other_sample");
        assert_eq!(
            classify("test_sample", &record).unwrap(),
            SampleTypeKind::Alias
        );
    }

    #[test]
    fn test_classify_metadata() {
        let record = SampleTypeRecord::with_fields(one_field());
        assert_eq!(
            classify("test_sample", &record).unwrap(),
            SampleTypeKind::MetadataFields
        );
    }

    #[test]
    fn test_classify_metadata_with_base_type() {
        let record = SampleTypeRecord {
            base_type: Some("stool".into()),
            ..SampleTypeRecord::with_fields(one_field())
        };
        assert_eq!(
            record.definition("dung").unwrap(),
            SampleTypeDefinition::Metadata {
                fields: record.metadata_fields.as_ref().unwrap(),
                base_type: Some("stool"),
            }
        );
    }

    #[test]
    fn test_classify_base() {
        let record = SampleTypeRecord::based_on("other_sample");
        assert_eq!(
            classify("test_sample", &record).unwrap(),
            SampleTypeKind::BaseType
        );
    }

    #[test]
    fn test_classify_err_alias_metadata() {
        let record = SampleTypeRecord {
            alias: Some("other_sample".into()),
            ..SampleTypeRecord::with_fields(one_field())
        };
        let err = classify("test_sample", &record).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Sample type 'test_sample' has both 'alias' and 'metadata_fields' keys in the same sample type dict"
        );
    }

    #[test]
    fn test_classify_err_alias_base() {
        let record = SampleTypeRecord {
            base_type: Some("other_sample".into()),
            ..SampleTypeRecord::alias("other_sample")
        };
        let err = classify("test_sample", &record).unwrap_err();
        assert!(
            err.to_string()
                .contains("Sample type 'test_sample' has both 'alias' and 'base_type' keys"),
            "got: {err}"
        );
    }

    #[test]
    fn test_classify_err_no_keys() {
        let err = classify("test_sample", &SampleTypeRecord::default()).unwrap_err();
        assert!(matches!(
            err,
            Error::SampleTypeConflict {
                conflict: ConflictKind::Neither,
                ..
            }
        ));
        assert!(
            err.to_string()
                .contains("Sample type 'test_sample' has neither 'alias' nor 'metadata_fields' keys")
        );
    }

    #[test]
    fn test_extra_keys_do_not_identify_a_record() {
        let mut record = SampleTypeRecord::default();
        record
            .extra
            .insert("qiita_sample_type".into(), serde_json::json!("stool"));
        assert!(classify("test_sample", &record).is_err());
    }
}
