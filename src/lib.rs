//! SAT-based shortest path finder
//!
//! This library finds shortest simple paths in undirected graphs by
//! reduction to Boolean satisfiability: each candidate path length is
//! encoded as a CNF formula, and lengths are tried in increasing order
//! until one is satisfiable.

pub mod config;
pub mod error;
pub mod graph;
pub mod sat;
pub mod search;
pub mod utils;

pub use config::Settings;
pub use error::SearchError;
pub use graph::Graph;
pub use search::{PathOutcome, PathSolution, ShortestPathProblem};

use anyhow::{Context, Result};
use std::time::Duration;

/// Main entry point for solving shortest-path queries from settings
pub fn solve_shortest_path(settings: Settings) -> Result<PathOutcome> {
    let graph = graph::load_graph_from_file(&settings.input.graph_file).with_context(|| {
        format!(
            "Failed to load graph from {}",
            settings.input.graph_file.display()
        )
    })?;

    let options = sat::SolverOptions {
        timeout: Some(Duration::from_secs(settings.solver.timeout_seconds)),
    };

    let problem = ShortestPathProblem::new(graph, settings.query.source, settings.query.target)?
        .with_solver_options(options)
        .parallel(settings.solver.parallel);

    problem.solve()
}
