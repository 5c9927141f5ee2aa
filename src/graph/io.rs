//! File I/O for graphs
//!
//! Format: the first non-comment line is the node count, every
//! following line is an edge `u v`. Lines starting with `#` and blank
//! lines are ignored.

use super::Graph;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a graph from an edge-list file
pub fn load_graph_from_file<P: AsRef<Path>>(path: P) -> Result<Graph> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read graph file: {}", path.as_ref().display()))?;

    parse_graph_from_string(&content)
        .with_context(|| format!("Failed to parse graph from file: {}", path.as_ref().display()))
}

/// Parse a graph from its edge-list text representation
pub fn parse_graph_from_string(content: &str) -> Result<Graph> {
    let mut lines = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));

    let header = lines.next().context("Graph file is empty")?;
    let node_count: usize = header
        .parse()
        .with_context(|| format!("Invalid node count line: '{}'", header))?;

    let mut graph = Graph::new(node_count);
    for (line_idx, line) in lines.enumerate() {
        let mut parts = line.split_whitespace();
        let (u, v) = match (parts.next(), parts.next(), parts.next()) {
            (Some(u), Some(v), None) => (u, v),
            _ => anyhow::bail!("Edge line {} is not a 'u v' pair: '{}'", line_idx + 1, line),
        };
        let u: usize = u
            .parse()
            .with_context(|| format!("Invalid node id '{}' on edge line {}", u, line_idx + 1))?;
        let v: usize = v
            .parse()
            .with_context(|| format!("Invalid node id '{}' on edge line {}", v, line_idx + 1))?;
        graph
            .add_edge(u, v)
            .with_context(|| format!("Invalid edge on line {}", line_idx + 1))?;
    }

    Ok(graph)
}

/// Serialize a graph to its edge-list text representation
pub fn graph_to_string(graph: &Graph) -> String {
    let mut result = String::new();
    result.push_str(&format!(
        "# {} nodes, {} edges\n",
        graph.node_count(),
        graph.edge_count()
    ));
    result.push_str(&format!("{}\n", graph.node_count()));
    for (u, v) in graph.edges() {
        result.push_str(&format!("{} {}\n", u, v));
    }
    result
}

/// Save a graph to an edge-list file
pub fn save_graph_to_file<P: AsRef<Path>>(graph: &Graph, path: P) -> Result<()> {
    let content = graph_to_string(graph);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write graph to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Create example graph files for the setup command
pub fn create_example_graphs<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Path: 0-1-2-3-4
    let path_content = "# simple path\n5\n0 1\n1 2\n2 3\n3 4\n";
    std::fs::write(dir.join("path.txt"), path_content).context("Failed to write path.txt")?;

    // Cycle: 0-1-2-3-0 plus a chord
    let cycle_content = "# 4-cycle with chord\n4\n0 1\n1 2\n2 3\n3 0\n0 2\n";
    std::fs::write(dir.join("cycle.txt"), cycle_content).context("Failed to write cycle.txt")?;

    // Two components: {0,1,2} and {3,4}
    let split_content = "# disconnected\n5\n0 1\n1 2\n3 4\n";
    std::fs::write(dir.join("disconnected.txt"), split_content)
        .context("Failed to write disconnected.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_graph_from_string() {
        let content = "# comment\n4\n0 1\n1 2\n2 3\n";
        let graph = parse_graph_from_string(content).unwrap();

        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 3);
        assert!(graph.has_edge(1, 2));
        assert!(!graph.has_edge(0, 3));
    }

    #[test]
    fn test_round_trip() {
        let graph = Graph::from_edges(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]).unwrap();
        let text = graph_to_string(&graph);
        let reparsed = parse_graph_from_string(&text).unwrap();
        assert_eq!(graph, reparsed);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("graph.txt");

        let original = Graph::from_edges(3, &[(0, 1), (1, 2)]).unwrap();
        save_graph_to_file(&original, &file_path).unwrap();

        let loaded = load_graph_from_file(&file_path).unwrap();
        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        // Empty content
        assert!(parse_graph_from_string("").is_err());

        // Bad header
        assert!(parse_graph_from_string("abc\n0 1\n").is_err());

        // Edge line with too many fields
        assert!(parse_graph_from_string("3\n0 1 2\n").is_err());

        // Self-loop
        assert!(parse_graph_from_string("3\n1 1\n").is_err());

        // Out-of-range node
        assert!(parse_graph_from_string("3\n0 5\n").is_err());
    }

    #[test]
    fn test_create_example_graphs() {
        let temp_dir = tempdir().unwrap();
        create_example_graphs(temp_dir.path()).unwrap();

        let cycle = load_graph_from_file(temp_dir.path().join("cycle.txt")).unwrap();
        assert_eq!(cycle.node_count(), 4);
        assert!(cycle.has_edge(0, 2)); // Chord

        let split = load_graph_from_file(temp_dir.path().join("disconnected.txt")).unwrap();
        assert!(!split.is_connected());
    }
}
