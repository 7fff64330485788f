//! Error types for code generation.

use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Schema parsing error.
    #[error("schema parse error: {0}")]
    Parse(#[from] astgen_schema::ParseError),

    /// Schema validation error.
    #[error("schema error: {0}")]
    Schema(#[from] astgen_schema::SchemaError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The sink could not persist an output unit.
    #[error("failed to write output unit '{unit}': {source}")]
    Sink {
        /// Output unit name.
        unit: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A family was requested that the schema does not define.
    #[error("unknown family '{name}'")]
    UnknownFamily {
        /// Requested family name.
        name: String,
    },
}

impl CodegenError {
    /// Creates a sink error for the given output unit.
    pub fn sink(unit: impl Into<String>, source: std::io::Error) -> Self {
        Self::Sink {
            unit: unit.into(),
            source,
        }
    }
}
