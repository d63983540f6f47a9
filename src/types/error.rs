//! Error types for the Tech Atlas library.

use thiserror::Error;

use super::{AbstractionLevel, Dimension};

/// All errors that can occur in the Tech Atlas library.
#[derive(Error, Debug)]
pub enum AtlasError {
    /// Requested object id is absent from the repository.
    #[error("Tech object '{0}' not found")]
    NotFound(String),

    /// Version-tree search found no match.
    #[error("Version {version} not found on tech object '{object_id}'")]
    VersionNotFound { object_id: String, version: String },

    /// Abstraction requested above the highest level.
    #[error("No level above {level} for tech object '{object_id}'")]
    NoHigherLevel {
        object_id: String,
        level: AbstractionLevel,
    },

    /// Abstraction requested below the lowest level.
    #[error("No level below {level} for tech object '{object_id}'")]
    NoLowerLevel {
        object_id: String,
        level: AbstractionLevel,
    },

    /// Level change between non-adjacent levels.
    #[error("Cannot navigate from {from} to {to}: levels are not adjacent")]
    InvalidTransition {
        from: AbstractionLevel,
        to: AbstractionLevel,
    },

    /// Relationship kind outside the dimension's closed vocabulary.
    #[error("'{kind}' is not a {dimension} relationship kind")]
    InvalidRelationshipKind { dimension: Dimension, kind: String },

    /// Version string does not follow MAJOR.MINOR.PATCH[-PRE][+BUILD].
    #[error("Invalid version string '{input}': {reason}")]
    InvalidVersionString { input: String, reason: &'static str },

    /// Identifier is empty, too long, or uses forbidden characters.
    #[error("Invalid tech object id '{0}'")]
    InvalidId(String),

    /// Level rank outside the fixed set.
    #[error("Abstraction level rank out of range [1, 5]: {0}")]
    InvalidLevel(i64),

    /// Version tree repeats a version or nests a version under itself.
    #[error("Invalid version tree on '{object_id}': version {version} appears more than once")]
    InvalidVersionTree { object_id: String, version: String },

    /// Filter criterion with an unknown field, operator, or value shape.
    #[error("Invalid filter criterion: {0}")]
    InvalidCriterion(String),

    /// A vocabulary table breaks the partition or involution rule.
    #[error("{dimension} vocabulary is inconsistent at {kind}: {reason}")]
    VocabularyInconsistent {
        dimension: Dimension,
        kind: String,
        reason: &'static str,
    },

    /// Session command needs a focused object but none is selected.
    #[error("No tech object is currently focused")]
    NoCurrentObject,

    /// Nothing left to go back or forward to.
    #[error("No {0} history")]
    HistoryExhausted(&'static str),

    /// Breadcrumb index past the end of the navigation path.
    #[error("Breadcrumb {index} out of range (path length {len})")]
    BreadcrumbOutOfRange { index: usize, len: usize },

    /// Failure reported by a repository implementation, passed through unchanged.
    #[error("Repository error: {0}")]
    Repository(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration file could not be read or written.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience result type for Tech Atlas operations.
pub type AtlasResult<T> = Result<T, AtlasError>;
