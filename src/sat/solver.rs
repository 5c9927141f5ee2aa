//! SAT solving capability and its CaDiCaL implementation

use super::constraints::Clause;
use anyhow::Result;
use cadical::{Solver, Timeout};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// The solving capability the encoder depends on: accept clauses, then
/// answer satisfiable (with a model) or unsatisfiable.
///
/// The path search treats the engine as an injected capability so any
/// conforming backend can be substituted. Instances are single-use:
/// one per candidate length, dropped after that attempt.
pub trait SatBackend {
    /// Add a single clause
    fn add_clause(&mut self, clause: &Clause) -> Result<()>;

    /// Add a batch of clauses
    fn add_clauses(&mut self, clauses: &[Clause]) -> Result<()> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Solve; `None` means unsatisfiable
    fn solve(&mut self) -> Result<Option<SolverSolution>>;

    /// Highest variable id seen so far
    fn variable_count(&self) -> usize;

    /// Number of clauses added so far
    fn clause_count(&self) -> usize;
}

/// Result of a satisfiable solve: the model plus timing
#[derive(Debug, Clone)]
pub struct SolverSolution {
    pub assignment: HashMap<i32, bool>,
    pub solve_time: Duration,
}

impl SolverSolution {
    /// Truth value of a variable in the model; unassigned variables
    /// read as false
    pub fn is_true(&self, var: i32) -> bool {
        self.assignment.get(&var).copied().unwrap_or(false)
    }
}

/// Configuration options for a solver instance
#[derive(Debug, Clone, Default)]
pub struct SolverOptions {
    pub timeout: Option<Duration>,
}

/// CaDiCaL-backed implementation of [`SatBackend`]
pub struct CadicalSolver {
    solver: Solver,
    variable_count: usize,
    clause_count: usize,
    timeout: Option<Duration>,
}

impl CadicalSolver {
    /// Create a fresh solver instance
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            variable_count: 0,
            clause_count: 0,
            timeout: None,
        }
    }

    /// Create a solver with the given options.
    ///
    /// A timeout is enforced through CaDiCaL's terminate callback; the
    /// clock starts when the solve call begins.
    pub fn with_options(options: &SolverOptions) -> Self {
        let mut solver = Self::new();
        if let Some(timeout) = options.timeout {
            solver
                .solver
                .set_callbacks(Some(Timeout::new(timeout.as_secs_f32())));
        }
        solver.timeout = options.timeout;
        solver
    }

    /// Extract the full model from a satisfiable solver state
    fn extract_assignment(&self) -> HashMap<i32, bool> {
        let mut assignment = HashMap::with_capacity(self.variable_count);
        for var in 1..=self.variable_count as i32 {
            if let Some(value) = self.solver.value(var) {
                assignment.insert(var, value);
            }
        }
        assignment
    }
}

impl Default for CadicalSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SatBackend for CadicalSolver {
    fn add_clause(&mut self, clause: &Clause) -> Result<()> {
        if clause.is_empty() {
            anyhow::bail!("Cannot add empty clause (unsatisfiable)");
        }

        for &literal in &clause.literals {
            let var = literal.unsigned_abs() as usize;
            if var > self.variable_count {
                self.variable_count = var;
            }
        }

        self.solver.add_clause(clause.literals.iter().copied());
        self.clause_count += 1;
        Ok(())
    }

    fn solve(&mut self) -> Result<Option<SolverSolution>> {
        let start_time = Instant::now();
        let result = self.solver.solve();
        let solve_time = start_time.elapsed();

        match result {
            Some(true) => Ok(Some(SolverSolution {
                assignment: self.extract_assignment(),
                solve_time,
            })),
            Some(false) => Ok(None),
            // The terminate callback fired before a verdict was reached
            None => match self.timeout {
                Some(timeout) => anyhow::bail!(
                    "SAT solve exceeded the {:.1}s time budget",
                    timeout.as_secs_f64()
                ),
                None => anyhow::bail!("SAT solve was interrupted before reaching a verdict"),
            },
        }
    }

    fn variable_count(&self) -> usize {
        self.variable_count
    }

    fn clause_count(&self) -> usize {
        self.clause_count
    }
}
