//! Per-length encode / solve / decode round trip

use super::constraints::ConstraintGenerator;
use super::solver::{CadicalSolver, SatBackend, SolverOptions, SolverSolution};
use super::variables::PositionVariables;
use crate::error::SearchError;
use crate::graph::Graph;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// Encodes one candidate length into CNF, runs a solver over it, and
/// decodes the model back into a node sequence.
///
/// The encoder is stateless across attempts; every call to
/// [`attempt`](Self::attempt) uses a fresh solver instance, so no
/// learned state leaks between candidate lengths.
#[derive(Debug)]
pub struct PathEncoder {
    options: SolverOptions,
}

/// Outcome of solving one candidate length
#[derive(Debug, Clone)]
pub struct LengthAttempt {
    /// Candidate path length (node count, including both endpoints)
    pub length: usize,
    /// Variables in the CNF instance
    pub variable_count: usize,
    /// Clauses submitted to the solver
    pub clause_count: usize,
    /// Wall time of the solve call
    pub solve_time: Duration,
    /// Decoded path if the instance was satisfiable
    pub path: Option<Vec<usize>>,
}

impl LengthAttempt {
    /// Whether this length admitted a path
    pub fn satisfiable(&self) -> bool {
        self.path.is_some()
    }
}

impl PathEncoder {
    /// Create an encoder with default solver options
    pub fn new() -> Self {
        Self {
            options: SolverOptions::default(),
        }
    }

    /// Create an encoder with explicit solver options
    pub fn with_options(options: SolverOptions) -> Self {
        Self { options }
    }

    /// Encode and solve a single candidate length with a fresh CaDiCaL
    /// instance
    pub fn attempt(
        &self,
        graph: &Graph,
        source: usize,
        target: usize,
        length: usize,
    ) -> Result<LengthAttempt> {
        let mut backend = CadicalSolver::with_options(&self.options);
        self.attempt_with_backend(&mut backend, graph, source, target, length)
    }

    /// Encode and solve against a caller-supplied backend.
    ///
    /// The backend must be fresh; reusing one across lengths would mix
    /// variable spaces.
    pub fn attempt_with_backend<B: SatBackend>(
        &self,
        backend: &mut B,
        graph: &Graph,
        source: usize,
        target: usize,
        length: usize,
    ) -> Result<LengthAttempt> {
        let node_count = graph.node_count();
        let generator = ConstraintGenerator::new(node_count, length);

        let clauses = generator
            .generate_all_constraints(graph, source, target)
            .context("Failed to generate path constraints")?;

        backend
            .add_clauses(&clauses)
            .context("Failed to add clauses to SAT solver")?;

        // Timed here so unsatisfiable attempts report real solve time
        let solve_start = Instant::now();
        let solution = backend.solve().context("SAT solving failed")?;
        let solve_time = solve_start.elapsed();

        let path = match solution {
            Some(solution) => Some(decode_path(&solution, generator.variables())?),
            None => None,
        };

        Ok(LengthAttempt {
            length,
            variable_count: generator.variables().variable_count(),
            clause_count: clauses.len(),
            solve_time,
            path,
        })
    }
}

impl Default for PathEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reconstruct the node sequence from a satisfying model.
///
/// For each position, exactly one node variable must be true; the
/// coverage and uniqueness clauses guarantee this for any model the
/// solver hands back. A violation means the encoder and solver
/// disagree about the instance and is surfaced as
/// [`SearchError::SolverContractViolation`].
pub fn decode_path(solution: &SolverSolution, variables: &PositionVariables) -> Result<Vec<usize>> {
    let (node_count, length) = variables.dimensions();
    let mut path = Vec::with_capacity(length);

    for position in 0..length {
        let mut occupant = None;
        for node in 0..node_count {
            if solution.is_true(variables.var(node, position)?) {
                if let Some(previous) = occupant {
                    return Err(SearchError::contract_violation(format!(
                        "position {} occupied by both node {} and node {}",
                        position, previous, node
                    ))
                    .into());
                }
                occupant = Some(node);
            }
        }

        match occupant {
            Some(node) => path.push(node),
            None => {
                return Err(SearchError::contract_violation(format!(
                    "no node assigned to position {}",
                    position
                ))
                .into())
            }
        }
    }

    Ok(path)
}
