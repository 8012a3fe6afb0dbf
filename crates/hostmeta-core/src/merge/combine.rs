//! The primitive merge operations: fields, sample types, host types
//!
//! All combiners borrow their inputs and return freshly built values; the
//! `base` side is never modified.

use crate::Result;
use crate::model::{FieldMap, HostTypeDefinition, SampleTypeKind, SampleTypeMap};

/// Merge two field maps, `add` taking precedence field by field.
///
/// Fields only in `base` pass through. Fields in `add` are overlaid onto the
/// base definition (or onto an empty one) with
/// [`FieldDefinition::merge`](crate::model::FieldDefinition::merge).
pub fn combine_fields(base: &FieldMap, add: &FieldMap) -> FieldMap {
    let mut combined = base.clone();
    for (name, add_field) in add {
        combined
            .entry(name.clone())
            .or_default()
            .merge(add_field);
    }
    combined
}

/// Merge an added host-type definition onto a base one.
///
/// - `default` from `add` replaces the base default when present
/// - `metadata_fields` merge via [`combine_fields`]
/// - `sample_type_specific_metadata` merge via [`combine_sample_types`],
///   against the record as merged so far
///
/// Child host types of `base` are carried over; those of `add` are ignored.
pub fn combine_host_type(
    base: &HostTypeDefinition,
    add: &HostTypeDefinition,
) -> Result<HostTypeDefinition> {
    let mut combined = base.clone();

    if let Some(default) = &add.default {
        combined.default = Some(default.clone());
    }

    combined.metadata_fields = combine_fields(&base.metadata_fields, &add.metadata_fields);
    combined.sample_type_specific_metadata = combine_sample_types(&combined, add)?;

    Ok(combined)
}

/// Merge the sample-type maps of two host-type definitions.
///
/// When both sides classify as metadata records, their `metadata_fields`
/// merge via [`combine_fields`] and every other key from `add` overwrites the
/// base record's. In every other case (new name, differing variants, alias or
/// base-type-only records) the `add` record replaces the entry wholesale.
///
/// Fails if any record involved has conflicting identifying keys.
pub fn combine_sample_types(
    base: &HostTypeDefinition,
    add: &HostTypeDefinition,
) -> Result<SampleTypeMap> {
    let mut combined = base.sample_type_specific_metadata.clone();

    for (name, add_record) in &add.sample_type_specific_metadata {
        let add_kind = add_record.definition(name)?.kind();
        let base_kind = combined
            .get(name)
            .map(|record| record.definition(name).map(|def| def.kind()))
            .transpose()?;

        let both_metadata = add_kind == SampleTypeKind::MetadataFields
            && base_kind == Some(SampleTypeKind::MetadataFields);

        if !both_metadata {
            tracing::trace!(sample_type = %name, ?add_kind, "Replacing sample type");
            combined.insert(name.clone(), add_record.clone());
            continue;
        }

        let Some(record) = combined.get_mut(name) else {
            continue;
        };
        let base_fields = record.metadata_fields.take().unwrap_or_default();
        let fields = match &add_record.metadata_fields {
            Some(add_fields) => combine_fields(&base_fields, add_fields),
            None => base_fields,
        };

        if add_record.base_type.is_some() {
            record.base_type = add_record.base_type.clone();
        }
        for (key, value) in &add_record.extra {
            record.extra.insert(key.clone(), value.clone());
        }

        record.metadata_fields = (!fields.is_empty()).then_some(fields);
    }

    Ok(combined)
}
