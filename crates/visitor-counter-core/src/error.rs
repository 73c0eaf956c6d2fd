//! Shared error type across visitor counter crates.

use thiserror::Error;

/// Which catch scope an error belongs to. Determines the log prefix and the
/// client-facing message prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorTier {
    /// Failure reported by the durable store client.
    Store,
    /// Anything else: configuration, coercion, serialization.
    Unexpected,
}

impl ErrorTier {
    /// Prefix used in the JSON `error` field.
    pub fn client_prefix(self) -> &'static str {
        match self {
            ErrorTier::Store => "DynamoDB error",
            ErrorTier::Unexpected => "Unexpected error",
        }
    }

    /// Prefix used in diagnostic log lines.
    pub fn log_prefix(self) -> &'static str {
        match self {
            ErrorTier::Store => "DynamoDB Error",
            ErrorTier::Unexpected => "Unexpected error",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, CounterError>;

/// Unified error type used by core and the lambda crate.
///
/// The `Display` output is the bare cause; tier prefixes are applied by
/// [`CounterError::client_message`] so the cause text reaches the caller verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    #[error("{0}")]
    Store(String),
    #[error("{0}")]
    Config(String),
    #[error("{0}")]
    Coercion(String),
    #[error("{0}")]
    Internal(String),
}

impl CounterError {
    pub fn tier(&self) -> ErrorTier {
        match self {
            CounterError::Store(_) => ErrorTier::Store,
            CounterError::Config(_) | CounterError::Coercion(_) | CounterError::Internal(_) => {
                ErrorTier::Unexpected
            }
        }
    }

    /// Message placed in the response body, e.g. `DynamoDB error: <cause>`.
    pub fn client_message(&self) -> String {
        format!("{}: {}", self.tier().client_prefix(), self)
    }
}

