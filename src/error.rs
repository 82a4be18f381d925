//! Error types shared by the sampling models.

use thiserror::Error;

use crate::paco::Source;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, EdaError>;

/// Errors raised by model construction, learning, and sampling.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EdaError {
    /// A construction parameter violates its constraint.
    #[error("invalid argument `{name}`: {reason}")]
    InvalidArgument {
        /// Parameter name.
        name: &'static str,
        /// What is wrong with it.
        reason: String,
    },

    /// An edge was retracted that the multiset does not track.
    ///
    /// The population buffer and the pheromone table have diverged. The
    /// model is no longer usable and must be discarded.
    #[error("edge {from} -> {to} is not tracked: population and pheromone table are out of sync")]
    MissingEdge {
        /// Edge source.
        from: Source,
        /// Edge destination.
        to: usize,
    },

    /// Inserting the edge would track more than `capacity` destinations for
    /// one source.
    #[error("source {from} already tracks {capacity} destinations, cannot add {to}")]
    CapacityExceeded {
        /// Edge source.
        from: Source,
        /// Rejected destination.
        to: usize,
        /// Per-source capacity (population size).
        capacity: usize,
    },

    /// A node id lies outside `0..length`.
    #[error("node {node} is outside 0..{length}")]
    NodeOutOfRange {
        /// Offending id.
        node: usize,
        /// Permutation length.
        length: usize,
    },

    /// A solution's permutation view has the wrong length.
    #[error("expected a permutation of length {expected}, got {actual}")]
    LengthMismatch {
        /// Configured permutation length.
        expected: usize,
        /// Length actually observed.
        actual: usize,
    },

    /// A sequence handed to `update` is not a permutation of `0..length`.
    #[error("value {value} is out of range or repeated in a permutation of 0..{length}")]
    InvalidPermutation {
        /// First offending value.
        value: usize,
        /// Permutation length.
        length: usize,
    },
}

impl EdaError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        EdaError::InvalidArgument {
            name,
            reason: reason.into(),
        }
    }
}
