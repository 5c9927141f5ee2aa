//! Seeded random graph generation for test inputs and demos

use super::Graph;
use anyhow::Result;
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a connected undirected graph with `node_count` nodes.
///
/// A shuffled spanning chain guarantees connectivity, then up to
/// `extra_edges` random edges are layered on top (duplicates and
/// self-pairs are skipped, so the final edge count may be lower).
///
/// The RNG is passed in explicitly so callers control seeding; the
/// same seed always yields the same graph.
pub fn generate_connected_graph<R: Rng>(
    rng: &mut R,
    node_count: usize,
    extra_edges: usize,
) -> Result<Graph> {
    if node_count < 2 {
        anyhow::bail!("Connected graph generation needs at least 2 nodes, got {}", node_count);
    }

    let mut graph = Graph::new(node_count);

    // Spanning chain over a random node order
    let mut order: Vec<usize> = (0..node_count).collect();
    order.shuffle(rng);
    for pair in order.windows(2) {
        graph.add_edge(pair[0], pair[1])?;
    }

    for _ in 0..extra_edges {
        let u = rng.random_range(0..node_count);
        let v = rng.random_range(0..node_count);
        if u != v && !graph.has_edge(u, v) {
            graph.add_edge(u, v)?;
        }
    }

    Ok(graph)
}

/// Pick a random (source, target) pair of distinct nodes
pub fn random_query<R: Rng>(rng: &mut R, node_count: usize) -> Result<(usize, usize)> {
    if node_count < 2 {
        anyhow::bail!("Need at least 2 nodes to pick a query pair, got {}", node_count);
    }
    let source = rng.random_range(0..node_count);
    let mut target = rng.random_range(0..node_count);
    while target == source {
        target = rng.random_range(0..node_count);
    }
    Ok((source, target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generated_graph_is_connected() {
        let mut rng = StdRng::seed_from_u64(7);
        let graph = generate_connected_graph(&mut rng, 12, 6).unwrap();

        assert_eq!(graph.node_count(), 12);
        assert!(graph.is_connected());
        // Spanning chain alone contributes node_count - 1 edges
        assert!(graph.edge_count() >= 11);
        graph.validate().unwrap();
    }

    #[test]
    fn test_same_seed_same_graph() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);

        let a = generate_connected_graph(&mut rng_a, 10, 5).unwrap();
        let b = generate_connected_graph(&mut rng_b, 10, 5).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_usually_differ() {
        let mut rng_a = StdRng::seed_from_u64(1);
        let mut rng_b = StdRng::seed_from_u64(2);

        let a = generate_connected_graph(&mut rng_a, 10, 5).unwrap();
        let b = generate_connected_graph(&mut rng_b, 10, 5).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_too_few_nodes_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(generate_connected_graph(&mut rng, 1, 0).is_err());
    }

    #[test]
    fn test_random_query_is_distinct_pair() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..50 {
            let (s, t) = random_query(&mut rng, 5).unwrap();
            assert_ne!(s, t);
            assert!(s < 5 && t < 5);
        }
    }
}
