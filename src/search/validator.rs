//! Independent validation of search results

use crate::graph::Graph;
use anyhow::Result;
use itertools::Itertools;
use std::collections::HashSet;

/// Checks a reported path against the graph it was found in, without
/// trusting anything the SAT pipeline produced.
pub struct PathValidator<'a> {
    graph: &'a Graph,
}

/// Result of validating one path
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub details: ValidationDetails,
    pub error_message: Option<String>,
}

/// Individual checks performed during validation
#[derive(Debug, Clone, Default)]
pub struct ValidationDetails {
    /// First node is the source, last is the target
    pub endpoints_match: bool,
    /// No node appears twice (the path is simple)
    pub nodes_distinct: bool,
    /// Every consecutive pair is an edge of the graph
    pub edges_exist: bool,
    /// Path length equals BFS distance + 1 (`None` when minimality was
    /// not checked)
    pub length_minimal: Option<bool>,
}

impl<'a> PathValidator<'a> {
    /// Create a validator over a graph
    pub fn new(graph: &'a Graph) -> Self {
        Self { graph }
    }

    /// Validate structure only: endpoints, distinctness, adjacency
    pub fn validate(&self, path: &[usize], source: usize, target: usize) -> Result<ValidationResult> {
        self.validate_inner(path, source, target, false)
    }

    /// Validate structure and cross-check minimality against BFS
    pub fn validate_minimal(
        &self,
        path: &[usize],
        source: usize,
        target: usize,
    ) -> Result<ValidationResult> {
        self.validate_inner(path, source, target, true)
    }

    fn validate_inner(
        &self,
        path: &[usize],
        source: usize,
        target: usize,
        check_minimality: bool,
    ) -> Result<ValidationResult> {
        let mut errors = Vec::new();

        if path.is_empty() {
            return Ok(ValidationResult {
                is_valid: false,
                details: ValidationDetails::default(),
                error_message: Some("Path is empty".to_string()),
            });
        }

        let last = path[path.len() - 1];
        let endpoints_match = path[0] == source && last == target;
        if !endpoints_match {
            errors.push(format!(
                "Endpoints [{}, {}] do not match query ({}, {})",
                path[0], last, source, target
            ));
        }

        let distinct: HashSet<usize> = path.iter().copied().collect();
        let nodes_distinct = distinct.len() == path.len();
        if !nodes_distinct {
            errors.push("Path visits a node more than once".to_string());
        }

        let mut edges_exist = true;
        for (&u, &v) in path.iter().tuple_windows() {
            if !self.graph.has_edge(u, v) {
                edges_exist = false;
                errors.push(format!("Consecutive nodes {} and {} are not adjacent", u, v));
            }
        }

        let length_minimal = if check_minimality {
            let minimal = match self.graph.bfs_distance(source, target) {
                Some(distance) => path.len() == distance + 1,
                None => false, // a path was reported where BFS finds none
            };
            if !minimal {
                errors.push(format!(
                    "Path length {} does not match BFS shortest distance {:?}",
                    path.len(),
                    self.graph.bfs_distance(source, target)
                ));
            }
            Some(minimal)
        } else {
            None
        };

        let is_valid = errors.is_empty();
        Ok(ValidationResult {
            is_valid,
            details: ValidationDetails {
                endpoints_match,
                nodes_distinct,
                edges_exist,
                length_minimal,
            },
            error_message: if is_valid { None } else { Some(errors.join("; ")) },
        })
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Validation Result: {}", if self.is_valid { "VALID" } else { "INVALID" })?;
        writeln!(f, "  Endpoints match: {}", self.details.endpoints_match)?;
        writeln!(f, "  Nodes distinct: {}", self.details.nodes_distinct)?;
        writeln!(f, "  Edges exist: {}", self.details.edges_exist)?;
        if let Some(minimal) = self.details.length_minimal {
            writeln!(f, "  Length minimal: {}", minimal)?;
        }
        if let Some(ref error) = self.error_message {
            writeln!(f, "  Error: {}", error)?;
        }
        Ok(())
    }
}
