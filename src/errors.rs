//! Error types for structure operations, run generation and playback
//!
//! This module defines [`VizError`], the single error type returned by every
//! fallible engine call. None of its variants is fatal: a failed operation
//! leaves the session exactly as it was, and the caller reports the error to
//! the user at the level given by [`VizError::severity`].

use crate::structures::StructureKind;
use thiserror::Error;

/// How loudly a rejected action should be reported
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Malformed input; the action was never attempted
    Warning,
    /// A precondition did not hold (empty structure, missing key, ...)
    Info,
    /// The request makes no sense for the current structure or session
    Error,
}

/// Errors produced by the visualizer engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VizError {
    /// Input could not be understood (non-numeric value, unknown command)
    #[error("invalid input '{input}': {reason}")]
    InvalidInput { input: String, reason: String },

    /// Positional operation outside the structure
    #[error("index {index} is out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// pop/dequeue/peek/search on an empty structure
    #[error("{kind} is empty")]
    EmptyStructure { kind: StructureKind },

    /// Delete or remove of a value that is not present
    #[error("value {value} not found")]
    KeyNotFound { value: i64 },

    /// Insert of a value the structure already holds (BST keys, graph labels)
    #[error("value {value} is already present")]
    DuplicateKey { value: i64 },

    /// Graph operation naming a node that does not exist
    #[error("node {label} does not exist")]
    NodeNotFound { label: i64 },

    /// Graph edge that already exists or would be a self-loop
    #[error("edge {from}-{to} cannot be added")]
    InvalidEdge { from: i64, to: i64 },

    /// Graph edge removal for an edge that is not there
    #[error("edge {from}-{to} does not exist")]
    EdgeNotFound { from: i64, to: i64 },

    /// Growth operation on a structure that is already at capacity
    #[error("structure is full ({capacity} elements)")]
    CapacityExceeded { capacity: usize },

    /// Binary search over an array that is not in non-decreasing order
    #[error("binary search requires a sorted array")]
    NotSorted,

    /// Operation that does not apply to this kind of structure
    #[error("{operation} is not supported on a {kind}")]
    UnsupportedOperation {
        operation: &'static str,
        kind: StructureKind,
    },

    /// Algorithm that does not apply to this kind of structure
    #[error("{algorithm} cannot run on a {kind}")]
    UnsupportedAlgorithm {
        algorithm: &'static str,
        kind: StructureKind,
    },

    /// Run generation produced more steps than the configured limit
    #[error("run exceeded the limit of {limit} steps")]
    StepLimitExceeded { limit: usize },

    /// Playback control used while no run is loaded
    #[error("no run is loaded")]
    NoRun,
}

impl VizError {
    pub fn severity(&self) -> Severity {
        match self {
            VizError::InvalidInput { .. } | VizError::IndexOutOfRange { .. } => Severity::Warning,
            VizError::EmptyStructure { .. }
            | VizError::KeyNotFound { .. }
            | VizError::DuplicateKey { .. }
            | VizError::NodeNotFound { .. }
            | VizError::InvalidEdge { .. }
            | VizError::EdgeNotFound { .. }
            | VizError::CapacityExceeded { .. }
            | VizError::NotSorted => Severity::Info,
            VizError::UnsupportedOperation { .. }
            | VizError::UnsupportedAlgorithm { .. }
            | VizError::StepLimitExceeded { .. }
            | VizError::NoRun => Severity::Error,
        }
    }

    /// Shorthand for a numeric parse failure
    pub fn not_a_number(input: &str) -> Self {
        VizError::InvalidInput {
            input: input.to_string(),
            reason: "expected an integer".to_string(),
        }
    }
}

pub type VizResult<T> = Result<T, VizError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_queue_message() {
        let err = VizError::EmptyStructure {
            kind: StructureKind::Queue,
        };
        assert_eq!(err.to_string(), "queue is empty");
        assert_eq!(err.severity(), Severity::Info);
    }

    #[test]
    fn test_invalid_input_is_warning() {
        let err = VizError::not_a_number("abc");
        assert_eq!(err.severity(), Severity::Warning);
        assert!(err.to_string().contains("abc"));
    }
}
