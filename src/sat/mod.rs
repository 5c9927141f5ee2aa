//! SAT reduction: variables, clause generation, solving, decoding

pub mod constraints;
pub mod encoder;
pub mod solver;
pub mod variables;

pub use constraints::{Clause, ConstraintGenerator};
pub use encoder::{decode_path, LengthAttempt, PathEncoder};
pub use solver::{CadicalSolver, SatBackend, SolverOptions, SolverSolution};
pub use variables::PositionVariables;
