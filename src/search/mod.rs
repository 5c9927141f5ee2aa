//! Shortest-path problem definition, driver, and result handling

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::ShortestPathProblem;
pub use solution::{AttemptRecord, PathOutcome, PathSolution, SearchReport};
pub use validator::{PathValidator, ValidationResult};
