//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`CensusError`]
//! at the boundary (the storage adapter boxes its error into
//! [`CensusError::Storage`]).

/// Top-level error for the census workspace.
#[derive(Debug, thiserror::Error)]
pub enum CensusError {
    /// A domain invariant or request value was rejected.
    #[error("validation error")]
    Validation(#[from] ValidationError),

    /// The persistence layer failed; the source is the adapter's own error.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Violations of domain invariants and request-value constraints.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A person must carry a non-empty family name.
    #[error("family name must not be empty")]
    EmptyFamilyName,

    /// The given text is not a valid person identifier.
    #[error("invalid person id: {0:?}")]
    InvalidId(String),
}
