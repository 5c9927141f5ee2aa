//! Clause generation for the simple-path SAT encoding

use super::variables::PositionVariables;
use crate::graph::Graph;
use anyhow::Result;
use itertools::Itertools;

/// A SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self { literals: vec![literal] }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self { literals: vec![lit1, lit2] }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// Generates the CNF for "a simple path of exactly `length` nodes from
/// `source` to `target` exists".
///
/// Satisfying assignments of the produced formula correspond one-to-one
/// to such paths. Five clause groups together pin this down:
///
/// 1. every position holds at least one node,
/// 2. no position holds two nodes,
/// 3. no node occupies two positions (simplicity),
/// 4. consecutive positions only hold adjacent nodes,
/// 5. position 0 is the source and the last position is the target.
///
/// Groups 1 and 2 give exactly-one per position; nothing stronger is
/// needed or added.
pub struct ConstraintGenerator {
    variables: PositionVariables,
    node_count: usize,
    length: usize,
}

impl ConstraintGenerator {
    /// Create a generator for `node_count` nodes and a candidate path
    /// of `length` positions
    pub fn new(node_count: usize, length: usize) -> Self {
        let variables = PositionVariables::new(node_count, length);
        Self {
            variables,
            node_count,
            length,
        }
    }

    /// Generate the complete formula for a (graph, source, target) query
    pub fn generate_all_constraints(
        &self,
        graph: &Graph,
        source: usize,
        target: usize,
    ) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        clauses.extend(self.generate_position_coverage_constraints()?);
        clauses.extend(self.generate_position_uniqueness_constraints()?);
        clauses.extend(self.generate_node_uniqueness_constraints()?);
        clauses.extend(self.generate_adjacency_constraints(graph)?);
        clauses.extend(self.generate_endpoint_constraints(source, target)?);

        Ok(clauses)
    }

    /// Group 1: every position holds at least one node
    fn generate_position_coverage_constraints(&self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::with_capacity(self.length);

        for position in 0..self.length {
            clauses.push(Clause::new(self.variables.all_node_vars_at_position(position)?));
        }

        Ok(clauses)
    }

    /// Group 2: no two distinct nodes share a position
    fn generate_position_uniqueness_constraints(&self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        for position in 0..self.length {
            for (i, k) in (0..self.node_count).tuple_combinations() {
                clauses.push(Clause::binary(
                    -self.variables.var(i, position)?,
                    -self.variables.var(k, position)?,
                ));
            }
        }

        Ok(clauses)
    }

    /// Group 3: a node appears at most once along the path.
    ///
    /// This is what makes any satisfying path simple, and with it the
    /// first satisfiable length is the shortest.
    fn generate_node_uniqueness_constraints(&self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        for node in 0..self.node_count {
            for (j, k) in (0..self.length).tuple_combinations() {
                clauses.push(Clause::binary(
                    -self.variables.var(node, j)?,
                    -self.variables.var(node, k)?,
                ));
            }
        }

        Ok(clauses)
    }

    /// Group 4: consecutive positions may only hold adjacent nodes.
    ///
    /// Encoded negatively: for every ordered non-edge (i, k), forbid i
    /// at position j with k at position j+1. The pair (i, i) is a
    /// non-edge (no self-loops), so a node also cannot follow itself.
    fn generate_adjacency_constraints(&self, graph: &Graph) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        for position in 0..self.length.saturating_sub(1) {
            for i in 0..self.node_count {
                for k in 0..self.node_count {
                    if !graph.has_edge(i, k) {
                        clauses.push(Clause::binary(
                            -self.variables.var(i, position)?,
                            -self.variables.var(k, position + 1)?,
                        ));
                    }
                }
            }
        }

        Ok(clauses)
    }

    /// Group 5: the path starts at the source and ends at the target
    fn generate_endpoint_constraints(&self, source: usize, target: usize) -> Result<Vec<Clause>> {
        Ok(vec![
            Clause::unit(self.variables.var(source, 0)?),
            Clause::unit(self.variables.var(target, self.length - 1)?),
        ])
    }

    /// The variable map backing this generator
    pub fn variables(&self) -> &PositionVariables {
        &self.variables
    }

    /// Constraint generation statistics
    pub fn statistics(&self) -> ConstraintStatistics {
        ConstraintStatistics {
            node_count: self.node_count,
            path_length: self.length,
            total_variables: self.variables.variable_count(),
        }
    }
}

/// Statistics about constraint generation
#[derive(Debug, Clone)]
pub struct ConstraintStatistics {
    pub node_count: usize,
    pub path_length: usize,
    pub total_variables: usize,
}

impl std::fmt::Display for ConstraintStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Constraint Generation Statistics:")?;
        writeln!(f, "  Nodes: {}", self.node_count)?;
        writeln!(f, "  Path length: {}", self.path_length)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choose2(n: usize) -> usize {
        n * (n - 1) / 2
    }

    #[test]
    fn test_clause_creation() {
        let clause = Clause::new(vec![1, -2, 3]);
        assert_eq!(clause.literals, vec![1, -2, 3]);
        assert!(!clause.is_empty());
        assert!(!clause.is_unit());

        let unit_clause = Clause::unit(5);
        assert!(unit_clause.is_unit());
        assert_eq!(unit_clause.literals, vec![5]);
    }

    #[test]
    fn test_coverage_clause_counts() {
        let generator = ConstraintGenerator::new(4, 3);
        let coverage = generator.generate_position_coverage_constraints().unwrap();

        // One at-least-one clause per position, each listing all nodes
        assert_eq!(coverage.len(), 3);
        for clause in &coverage {
            assert_eq!(clause.literals.len(), 4);
            assert!(clause.literals.iter().all(|&lit| lit > 0));
        }
    }

    #[test]
    fn test_uniqueness_clause_counts() {
        let generator = ConstraintGenerator::new(4, 3);

        let position = generator.generate_position_uniqueness_constraints().unwrap();
        assert_eq!(position.len(), 3 * choose2(4));

        let node = generator.generate_node_uniqueness_constraints().unwrap();
        assert_eq!(node.len(), 4 * choose2(3));

        // All uniqueness clauses are binary with negative literals
        for clause in position.iter().chain(node.iter()) {
            assert_eq!(clause.literals.len(), 2);
            assert!(clause.literals.iter().all(|&lit| lit < 0));
        }
    }

    #[test]
    fn test_adjacency_clause_counts() {
        // 4-cycle: 0-1-2-3-0; non-edges per ordered pair: 4 self pairs
        // plus (0,2), (2,0), (1,3), (3,1)
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let generator = ConstraintGenerator::new(4, 3);

        let adjacency = generator.generate_adjacency_constraints(&graph).unwrap();
        assert_eq!(adjacency.len(), 2 * 8); // (L - 1) consecutive pairs * 8 non-edges
    }

    #[test]
    fn test_endpoint_constraints_are_units() {
        let generator = ConstraintGenerator::new(4, 3);
        let endpoints = generator.generate_endpoint_constraints(0, 2).unwrap();

        let vars = generator.variables();
        assert_eq!(endpoints.len(), 2);
        assert_eq!(endpoints[0], Clause::unit(vars.var(0, 0).unwrap()));
        assert_eq!(endpoints[1], Clause::unit(vars.var(2, 2).unwrap()));
    }

    #[test]
    fn test_full_formula_count() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let generator = ConstraintGenerator::new(4, 3);

        let clauses = generator.generate_all_constraints(&graph, 0, 2).unwrap();
        let expected = 3 + 3 * choose2(4) + 4 * choose2(3) + 2 * 8 + 2;
        assert_eq!(clauses.len(), expected);
    }
}
