//! Result types for the shortest-path search

use crate::sat::LengthAttempt;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Summary of one candidate-length solve attempt
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// Candidate path length (node count)
    pub length: usize,
    /// Variables in the CNF instance
    pub variables: usize,
    /// Clauses in the CNF instance
    pub clauses: usize,
    /// Whether the instance was satisfiable
    pub satisfiable: bool,
    /// Solve wall time in milliseconds
    pub solve_time_ms: u64,
}

impl From<&LengthAttempt> for AttemptRecord {
    fn from(attempt: &LengthAttempt) -> Self {
        Self {
            length: attempt.length,
            variables: attempt.variable_count,
            clauses: attempt.clause_count,
            satisfiable: attempt.satisfiable(),
            solve_time_ms: attempt.solve_time.as_millis() as u64,
        }
    }
}

/// A shortest path found by the search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSolution {
    /// The node sequence, source first, target last
    pub path: Vec<usize>,
    pub source: usize,
    pub target: usize,
    /// Per-length solve attempts, in the order they were tried
    pub attempts: Vec<AttemptRecord>,
    /// Total search wall time
    #[serde(skip)]
    pub solve_time: Duration,
}

impl PathSolution {
    /// Create a solution from a decoded path and its attempt history
    pub fn new(
        path: Vec<usize>,
        source: usize,
        target: usize,
        attempts: Vec<AttemptRecord>,
        solve_time: Duration,
    ) -> Self {
        Self {
            path,
            source,
            target,
            attempts,
            solve_time,
        }
    }

    /// Number of nodes on the path
    pub fn length(&self) -> usize {
        self.path.len()
    }

    /// Number of edges on the path
    pub fn edge_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether this is the trivial source == target path
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }

    /// Convert to pretty JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Save as JSON to a file
    pub fn save_to_file<P: AsRef<std::path::Path>>(&self, path: P) -> anyhow::Result<()> {
        let json = self.to_json()?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load from a JSON file
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

impl std::fmt::Display for PathSolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self.path.iter().map(|n| n.to_string()).collect();
        write!(f, "{}", rendered.join(" -> "))
    }
}

/// Why and how a search ended without a path
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub source: usize,
    pub target: usize,
    /// Every candidate length tried before giving up
    pub attempts: Vec<AttemptRecord>,
    /// Total search wall time
    #[serde(skip)]
    pub solve_time: Duration,
}

/// Outcome of a complete shortest-path search.
///
/// `NoPath` is a normal negative result, not an error: it means every
/// candidate length up to the node count was unsatisfiable.
#[derive(Debug, Clone)]
pub enum PathOutcome {
    Found(PathSolution),
    NoPath(SearchReport),
}

impl PathOutcome {
    /// Whether a path was found
    pub fn is_found(&self) -> bool {
        matches!(self, PathOutcome::Found(_))
    }

    /// The solution, if any
    pub fn solution(&self) -> Option<&PathSolution> {
        match self {
            PathOutcome::Found(solution) => Some(solution),
            PathOutcome::NoPath(_) => None,
        }
    }

    /// Attempt history regardless of outcome
    pub fn attempts(&self) -> &[AttemptRecord] {
        match self {
            PathOutcome::Found(solution) => &solution.attempts,
            PathOutcome::NoPath(report) => &report.attempts,
        }
    }
}
