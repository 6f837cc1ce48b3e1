//! Error types for region growing.
//!
//! Every error describes caller misuse and is raised before any growth step
//! runs; a failed call returns no regions at all.

use mesh_adjacency::AdjacencyError;
use thiserror::Error;

/// Result type for region growing operations.
pub type GrowResult<T> = Result<T, GrowError>;

/// Errors that can occur while growing regions.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GrowError {
    /// Building the adjacency graph failed.
    #[error("adjacency construction failed: {0}")]
    Adjacency(#[from] AdjacencyError),

    /// An input does not have one entry per vertex (or per frame).
    #[error("dimension mismatch: {what} has {actual} entries, expected {expected}")]
    DimensionMismatch {
        /// Which input was mis-sized.
        what: &'static str,
        /// Expected number of entries.
        expected: usize,
        /// Actual number of entries.
        actual: usize,
    },

    /// A seed vertex cannot found a region.
    #[error("invalid seed vertex {vertex}: {reason}")]
    InvalidSeed {
        /// The offending vertex.
        vertex: u32,
        /// Why it was rejected.
        reason: &'static str,
    },

    /// A seed group has no vertices.
    #[error("seed group {group} is empty")]
    EmptySeedGroup {
        /// Index of the empty group.
        group: usize,
    },

    /// The number of stop criteria is neither one nor the number of groups.
    #[error("{criteria} stop criteria given for {groups} seed groups")]
    StopCriteriaMismatch {
        /// Number of stop criteria supplied.
        criteria: usize,
        /// Number of seed groups.
        groups: usize,
    },

    /// No assessment function has this name.
    #[error("unknown assessment function '{0}'")]
    UnknownAssessment(String),

    /// No growth strategy has this name.
    #[error("unsupported region growing strategy '{0}' (expected srg, arg or crg)")]
    UnsupportedStrategy(String),

    /// The strategy needs a scalar field and none was given.
    #[error("strategy requires a scalar field")]
    MissingScalarField,

    /// The assessment step must be at least one component.
    #[error("assessment step must be >= 1")]
    InvalidAssessStep,
}

impl GrowError {
    /// Create an invalid seed error.
    #[must_use]
    pub const fn invalid_seed(vertex: u32, reason: &'static str) -> Self {
        Self::InvalidSeed { vertex, reason }
    }
}
