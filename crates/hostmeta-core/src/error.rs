//! Error types for hostmeta-core

use std::path::PathBuf;

/// Result type for hostmeta-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which identifying keys of a sample-type record clash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictKind {
    /// `alias` together with `metadata_fields`
    AliasWithMetadataFields,
    /// `alias` together with `base_type`
    AliasWithBaseType,
    /// none of `alias`, `metadata_fields`, `base_type`
    Neither,
}

impl std::fmt::Display for ConflictKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AliasWithMetadataFields => write!(f, "both 'alias' and 'metadata_fields'"),
            Self::AliasWithBaseType => write!(f, "both 'alias' and 'base_type'"),
            Self::Neither => write!(f, "neither 'alias' nor 'metadata_fields'"),
        }
    }
}

/// Errors that can occur while loading or resolving metadata standards
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A sample-type record has an invalid combination of identifying keys.
    /// Always a configuration-authoring defect; resolution aborts.
    #[error("Sample type '{sample_type}' has {conflict} keys in the same sample type dict")]
    SampleTypeConflict {
        sample_type: String,
        conflict: ConflictKind,
    },

    /// Host type not present in the resolved dictionary
    #[error("Unknown host type: {host_type}")]
    UnknownHostType { host_type: String },

    /// Sample type (or an alias/base target) not declared for the host type
    #[error("Unknown sample type '{sample_type}' for host type '{host_type}'")]
    UnknownSampleType {
        host_type: String,
        sample_type: String,
    },

    /// Alias/base_type references loop back on themselves
    #[error("Sample type cycle in host type '{host_type}': {}", chain.join(" -> "))]
    SampleTypeCycle {
        host_type: String,
        chain: Vec<String>,
    },

    /// Standards file not found at the expected path
    #[error("Standards file not found at {path}")]
    StandardsNotFound { path: PathBuf },

    /// No platform config directory to look for default standards in
    #[error("Could not determine a config directory for the default standards file")]
    NoConfigDir,

    /// Filesystem error from hostmeta-fs
    #[error(transparent)]
    Fs(#[from] hostmeta_fs::Error),

    /// JSON conversion error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn conflict(sample_type: &str, conflict: ConflictKind) -> Self {
        Self::SampleTypeConflict {
            sample_type: sample_type.to_string(),
            conflict,
        }
    }
}
