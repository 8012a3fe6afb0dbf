//! Sample-type resolution
//!
//! Turns one host type plus one sample type into the complete field set a
//! validator checks rows against, following aliases and base types.

use crate::merge::combine_fields;
use crate::model::{FieldMap, HostTypeDefinition, SampleTypeDefinition};
use crate::{Error, Result};

/// Complete field set for `sample_type` within a resolved host type.
///
/// - an alias resolves to its target;
/// - a base-type-only record resolves to its base type;
/// - a metadata record starts from its base type's fields when it names one,
///   otherwise from the host type's own `metadata_fields`, and lays its own
///   fields on top.
///
/// A chain of aliases or base types that comes back to a name already on it
/// is a [`Error::SampleTypeCycle`].
pub fn resolve_sample_type(
    host_type: &str,
    host: &HostTypeDefinition,
    sample_type: &str,
) -> Result<FieldMap> {
    let mut chain = Vec::new();
    resolve_in_chain(host_type, host, sample_type, &mut chain)
}

fn resolve_in_chain(
    host_type: &str,
    host: &HostTypeDefinition,
    sample_type: &str,
    chain: &mut Vec<String>,
) -> Result<FieldMap> {
    if chain.iter().any(|seen| seen == sample_type) {
        chain.push(sample_type.to_string());
        return Err(Error::SampleTypeCycle {
            host_type: host_type.to_string(),
            chain: std::mem::take(chain),
        });
    }
    chain.push(sample_type.to_string());

    let record = host
        .sample_type_specific_metadata
        .get(sample_type)
        .ok_or_else(|| Error::UnknownSampleType {
            host_type: host_type.to_string(),
            sample_type: sample_type.to_string(),
        })?;

    match record.definition(sample_type)? {
        SampleTypeDefinition::Alias { target } => {
            tracing::trace!(%host_type, %sample_type, %target, "Following alias");
            resolve_in_chain(host_type, host, target, chain)
        }
        SampleTypeDefinition::BaseType { base_type } => {
            resolve_in_chain(host_type, host, base_type, chain)
        }
        SampleTypeDefinition::Metadata { fields, base_type } => {
            let start = match base_type {
                Some(base_type) => resolve_in_chain(host_type, host, base_type, chain)?,
                None => host.metadata_fields.clone(),
            };
            Ok(combine_fields(&start, fields))
        }
    }
}

/// Names of the sample types declared for a host type, sorted.
pub fn sample_type_names(host: &HostTypeDefinition) -> Vec<&str> {
    host.sample_type_specific_metadata
        .keys()
        .map(String::as_str)
        .collect()
}
