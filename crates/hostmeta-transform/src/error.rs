//! Error types for hostmeta-transform

/// Result type for transformer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while transforming a row value
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No transformer registered under this name
    #[error("Unknown transformer: {name}")]
    UnknownTransformer { name: String },

    /// Transformer configured with other than one source field
    #[error("{transformer} requires exactly one source field, got {count}")]
    WrongSourceCount {
        transformer: &'static str,
        count: usize,
    },

    /// Source field absent from the row
    #[error("Source field '{field}' not found in row")]
    MissingSourceField { field: String },

    #[error("Unrecognized sex: {value}")]
    UnrecognizedSex { value: String },

    #[error("{field} must be an integer")]
    NotAnInteger { field: String },

    #[error("{field} cannot be parsed to a date")]
    NotADate { field: String },
}
