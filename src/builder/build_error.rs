use std::fmt::{self, Display};

/// Failure raised while turning a raw parse tree into typed nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum BuildError {
    /// The record's type tag has no registered constructor.
    UnrecognizedNodeKind { kind: String },
    /// A field has the wrong shape for what the node kind expects.
    MalformedRecord { kind: String, field: String, expected: &'static str },
    /// The raw tree nests deeper than the configured limit.
    DepthLimitExceeded { limit: usize },
    /// The input text was not valid JSON.
    InvalidJson(String),
}

impl BuildError {
    pub fn malformed(kind: &str, field: &str, expected: &'static str) -> Self {
        Self::MalformedRecord { kind: kind.to_string(), field: field.to_string(), expected }
    }

    pub fn err<T>(self) -> Result<T, BuildError> {
        Err(self)
    }
}

impl Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildError::UnrecognizedNodeKind { kind } => {
                write!(f, "BuildError: unrecognized node kind '{}'", kind)
            }
            BuildError::MalformedRecord { kind, field, expected } => {
                write!(f, "BuildError: malformed record {}.{}, expected {}", kind, field, expected)
            }
            BuildError::DepthLimitExceeded { limit } => {
                write!(f, "BuildError: parse tree nests deeper than {} levels", limit)
            }
            BuildError::InvalidJson(message) => write!(f, "BuildError: invalid json: {}", message),
        }
    }
}

impl std::error::Error for BuildError {}
