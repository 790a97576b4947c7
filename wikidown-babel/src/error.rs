//! Error types for format operations

use thiserror::Error;

/// Errors that can occur during format operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Format not found in registry
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    /// Error during parsing
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Error during serialization
    #[error("Serialization error: {0}")]
    SerializationError(String),
    /// Format does not support the requested operation
    #[error("Operation not supported: {0}")]
    NotSupported(String),
    /// A bounded buffer would have grown past its hard cap.
    ///
    /// Nothing past `capacity` has been written when this is returned.
    #[error("Output capacity of {capacity} bytes exhausted")]
    CapacityExhausted { capacity: usize },
    /// The input nests markup deeper than the parser allows.
    #[error("Markup nested deeper than {limit} levels")]
    NestingTooDeep { limit: usize },
    /// The document tree broke one of its structural invariants.
    #[error("Structural invariant violated: {0}")]
    InvariantViolation(String),
}
