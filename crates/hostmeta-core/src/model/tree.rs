//! Top-level documents: the nested standards tree, the study file and the
//! flat resolved dictionary

use serde::{Deserialize, Serialize};

use super::field::FieldMap;
use super::host::{HostTypeDefinition, HostTypeMap, check_host_types};
use crate::{Error, Result};

/// The standards file: host types nested to any depth.
///
/// Each level carries complete definitions for the fields it introduces and
/// only the differences for fields inherited from its parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StandardsTree {
    #[serde(default)]
    pub host_type_specific_metadata: HostTypeMap,
}

impl StandardsTree {
    pub fn new(host_types: HostTypeMap) -> Self {
        Self {
            host_type_specific_metadata: host_types,
        }
    }

    /// Reject sample-type records with conflicting identifying keys.
    pub fn check_sample_types(&self) -> Result<()> {
        check_host_types(&self.host_type_specific_metadata)
    }

    /// Resolve every host type, at any depth, into a complete definition.
    pub fn flatten(&self) -> Result<FlatHostTypes> {
        let flat = crate::merge::flatten(
            &self.host_type_specific_metadata,
            &HostTypeDefinition::default(),
        )?;
        Ok(FlatHostTypes::new(flat))
    }
}

/// The study file.
///
/// Only `study_specific_metadata` is read; other top-level keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyConfig {
    #[serde(default)]
    pub study_specific_metadata: StudyOverrides,
}

/// Study-specific overrides, keyed by host type with no nesting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyOverrides {
    #[serde(default)]
    pub host_type_specific_metadata: HostTypeMap,
}

impl StudyConfig {
    pub fn new(host_types: HostTypeMap) -> Self {
        Self {
            study_specific_metadata: StudyOverrides {
                host_type_specific_metadata: host_types,
            },
        }
    }

    /// The flat host-type override map.
    pub fn host_types(&self) -> &HostTypeMap {
        &self.study_specific_metadata.host_type_specific_metadata
    }

    /// Reject sample-type records with conflicting identifying keys.
    pub fn check_sample_types(&self) -> Result<()> {
        check_host_types(self.host_types())
    }
}

/// Every host type mapped to its fully resolved definition.
///
/// Values never carry `host_type_specific_metadata`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatHostTypes(HostTypeMap);

impl FlatHostTypes {
    pub fn new(host_types: HostTypeMap) -> Self {
        Self(host_types)
    }

    pub fn get(&self, host_type: &str) -> Option<&HostTypeDefinition> {
        self.0.get(host_type)
    }

    /// Like [`get`](Self::get), but an unknown name is an error.
    pub fn host_type(&self, host_type: &str) -> Result<&HostTypeDefinition> {
        self.get(host_type).ok_or_else(|| Error::UnknownHostType {
            host_type: host_type.to_string(),
        })
    }

    /// Complete field set for one host type + sample type.
    pub fn sample_type_fields(&self, host_type: &str, sample_type: &str) -> Result<FieldMap> {
        let definition = self.host_type(host_type)?;
        crate::resolve::resolve_sample_type(host_type, definition, sample_type)
    }

    pub fn contains(&self, host_type: &str) -> bool {
        self.0.contains_key(host_type)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &HostTypeDefinition)> {
        self.0.iter()
    }

    pub fn as_map(&self) -> &HostTypeMap {
        &self.0
    }

    pub fn into_inner(self) -> HostTypeMap {
        self.0
    }
}
