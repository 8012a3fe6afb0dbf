//! Typed configuration records
//!
//! Standards and study files deserialize straight into these types. Keys the
//! engine does not interpret are kept in per-record `extra` maps so they pass
//! through merging unchanged.

mod field;
mod host;
mod sample;
mod tree;

pub use field::{FieldDefinition, FieldMap};
pub use host::{HostTypeDefinition, HostTypeMap, check_host_types};
pub use sample::{
    SampleTypeDefinition, SampleTypeKind, SampleTypeMap, SampleTypeRecord, classify,
};
pub use tree::{FlatHostTypes, StandardsTree, StudyConfig, StudyOverrides};
