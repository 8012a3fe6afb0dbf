//! Core merge engine for host-type metadata standards
//!
//! A standards file describes host types nested to any depth, each level
//! refining its parent. A study file adds flat, per-host-type overrides. This
//! crate layers the study onto the standards, flattens the tree into one
//! complete definition per host type and prepares per-sample-type field sets
//! for validation.
//!
//! ```ignore
//! use hostmeta_core::StandardsResolver;
//!
//! let resolver = StandardsResolver::new("standards.yml");
//! let flat = resolver.resolve_file("study.yml".as_ref())?;
//! let stool = flat.sample_type_fields("human", "stool")?;
//! ```

pub mod error;
pub mod merge;
pub mod model;
pub mod resolve;
pub mod resolver;
pub mod schema;

pub use error::{ConflictKind, Error, Result};
pub use merge::{
    assemble, combine_fields, combine_host_type, combine_sample_types,
    combine_standards_and_study, flatten,
};
pub use model::{
    FieldDefinition, FieldMap, FlatHostTypes, HostTypeDefinition, HostTypeMap,
    SampleTypeDefinition, SampleTypeKind, SampleTypeMap, SampleTypeRecord, StandardsTree,
    StudyConfig, StudyOverrides, classify,
};
pub use resolve::{resolve_sample_type, sample_type_names};
pub use resolver::StandardsResolver;
pub use schema::{ANNOTATION_KEYS, validator_schema};
