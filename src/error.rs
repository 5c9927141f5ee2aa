//! Error taxonomy for the shortest-path search

use thiserror::Error;

/// Errors raised by the search pipeline.
///
/// An exhausted search (no path between source and target) is *not* an
/// error; it is reported as [`crate::search::PathOutcome::NoPath`].
#[derive(Debug, Error)]
pub enum SearchError {
    /// Source, target, or candidate length outside the valid range.
    /// Rejected at the driver entry before any solver work begins.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The decoded model violated the exactly-one-node-per-position
    /// invariant. Indicates an encoder/solver mismatch, never a
    /// user-facing condition.
    #[error("solver contract violation: {0}")]
    SolverContractViolation(String),
}

impl SearchError {
    /// Build an `InvalidInput` from anything displayable
    pub fn invalid_input(msg: impl std::fmt::Display) -> Self {
        SearchError::InvalidInput(msg.to_string())
    }

    /// Build a `SolverContractViolation` from anything displayable
    pub fn contract_violation(msg: impl std::fmt::Display) -> Self {
        SearchError::SolverContractViolation(msg.to_string())
    }
}
