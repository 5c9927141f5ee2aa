//! Variable numbering for the path SAT encoding

use anyhow::Result;

/// Maps (node, position) pairs to SAT variable ids for one candidate
/// path length.
///
/// The scheme is dense and 1-based: `var(i, j) = i * length + j + 1`
/// for node `i` in `[0, node_count)` and position `j` in `[0, length)`.
/// Variables belong to a single CNF instance; managers for different
/// lengths are never mixed.
#[derive(Debug, Clone)]
pub struct PositionVariables {
    node_count: usize,
    length: usize,
}

impl PositionVariables {
    /// Create a variable map for `node_count` nodes and a path of
    /// `length` positions
    pub fn new(node_count: usize, length: usize) -> Self {
        Self { node_count, length }
    }

    /// Variable id for "node `node` occupies position `position`"
    pub fn var(&self, node: usize, position: usize) -> Result<i32> {
        if node >= self.node_count {
            anyhow::bail!("Node {} out of bounds (node count: {})", node, self.node_count);
        }
        if position >= self.length {
            anyhow::bail!("Position {} out of bounds (path length: {})", position, self.length);
        }
        Ok((node * self.length + position + 1) as i32)
    }

    /// Inverse of [`var`](Self::var): the (node, position) pair a
    /// variable id encodes
    pub fn decode(&self, var: i32) -> Result<(usize, usize)> {
        if var < 1 || var > self.variable_count() as i32 {
            anyhow::bail!("Variable {} out of bounds (count: {})", var, self.variable_count());
        }
        let index = (var - 1) as usize;
        Ok((index / self.length, index % self.length))
    }

    /// All variables for a fixed position, one per node
    pub fn all_node_vars_at_position(&self, position: usize) -> Result<Vec<i32>> {
        (0..self.node_count).map(|i| self.var(i, position)).collect()
    }

    /// Total number of variables in this instance
    pub fn variable_count(&self) -> usize {
        self.node_count * self.length
    }

    /// (node count, path length) this map covers
    pub fn dimensions(&self) -> (usize, usize) {
        (self.node_count, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variable_numbering() {
        let vars = PositionVariables::new(4, 3);

        // Dense, 1-based, row-major by node
        assert_eq!(vars.var(0, 0).unwrap(), 1);
        assert_eq!(vars.var(0, 2).unwrap(), 3);
        assert_eq!(vars.var(1, 0).unwrap(), 4);
        assert_eq!(vars.var(3, 2).unwrap(), 12);
        assert_eq!(vars.variable_count(), 12);
    }

    #[test]
    fn test_variable_bounds() {
        let vars = PositionVariables::new(3, 2);

        assert!(vars.var(2, 1).is_ok());
        assert!(vars.var(3, 0).is_err()); // node out of bounds
        assert!(vars.var(0, 2).is_err()); // position out of bounds
    }

    #[test]
    fn test_decode_is_inverse() {
        let vars = PositionVariables::new(5, 4);
        for node in 0..5 {
            for position in 0..4 {
                let v = vars.var(node, position).unwrap();
                assert_eq!(vars.decode(v).unwrap(), (node, position));
            }
        }
        assert!(vars.decode(0).is_err());
        assert!(vars.decode(21).is_err());
    }

    #[test]
    fn test_all_node_vars_at_position() {
        let vars = PositionVariables::new(3, 2);
        assert_eq!(vars.all_node_vars_at_position(0).unwrap(), vec![1, 3, 5]);
        assert_eq!(vars.all_node_vars_at_position(1).unwrap(), vec![2, 4, 6]);
        assert!(vars.all_node_vars_at_position(2).is_err());
    }

    #[test]
    fn test_ids_are_gap_free() {
        let vars = PositionVariables::new(4, 3);
        let mut all: Vec<i32> = Vec::new();
        for node in 0..4 {
            for position in 0..3 {
                all.push(vars.var(node, position).unwrap());
            }
        }
        all.sort();
        assert_eq!(all, (1..=12).collect::<Vec<i32>>());
    }
}
