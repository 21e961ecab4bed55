//! Error types.

use thiserror::Error;

/// A grammar edit that cannot be turned into an [`LSystem`](crate::LSystem).
///
/// Callers should reject the edit and keep their previous valid grammar.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GrammarError {
    /// A rule predecessor decoded to zero or several symbols.
    #[error(
        "could not parse rule {index}: predecessor {predecessor:?} must contain exactly one symbol, found {found}"
    )]
    InvalidPredecessor {
        index: usize,
        predecessor: String,
        found: usize,
    },
}

/// An action or generator that was constructed with unusable inputs.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A draw action needs a mesh definition to generate its geometry from.
    #[error("draw action requires a mesh definition")]
    MissingMeshDefinition,
}

/// Any error this crate reports.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] GrammarError),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("grammar serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
