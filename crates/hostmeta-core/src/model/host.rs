//! Host-type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::field::FieldMap;
use super::sample::SampleTypeMap;
use crate::Result;

/// Host-type name -> definition
pub type HostTypeMap = BTreeMap<String, HostTypeDefinition>;

/// Metadata definition for one host type.
///
/// An empty map stands for an absent key: empty maps are skipped when
/// serializing and defaulted when deserializing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HostTypeDefinition {
    /// Fallback value for fields the sample does not specify
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata_fields: FieldMap,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub sample_type_specific_metadata: SampleTypeMap,

    /// Child host types; only used in the nested standards tree
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub host_type_specific_metadata: HostTypeMap,
}

impl HostTypeDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this definition without its child host types.
    pub fn without_children(&self) -> Self {
        Self {
            default: self.default.clone(),
            metadata_fields: self.metadata_fields.clone(),
            sample_type_specific_metadata: self.sample_type_specific_metadata.clone(),
            host_type_specific_metadata: HostTypeMap::new(),
        }
    }

    /// Classify every sample-type record here and in all child host types.
    ///
    /// Fails on the first record with a conflicting set of identifying keys.
    pub fn check_sample_types(&self) -> Result<()> {
        for (name, record) in &self.sample_type_specific_metadata {
            record.definition(name)?;
        }
        check_host_types(&self.host_type_specific_metadata)
    }
}

/// Run [`HostTypeDefinition::check_sample_types`] over a whole map.
pub fn check_host_types(host_types: &HostTypeMap) -> Result<()> {
    host_types
        .values()
        .try_for_each(HostTypeDefinition::check_sample_types)
}
