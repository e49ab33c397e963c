use crate::graph::{Edge, VertexId};
use hashbrown::HashSet;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Uniform random simple graph stream: `num_edges` distinct edges over
/// `num_nodes` vertices, in random order.
pub fn generate_random_edges(num_nodes: usize, num_edges: usize, seed: u64) -> Vec<Edge> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let max_edges = num_nodes.saturating_mul(num_nodes.saturating_sub(1)) / 2;
    let target = num_edges.min(max_edges);

    let mut seen = HashSet::with_capacity(target);
    let mut edges = Vec::with_capacity(target);
    while edges.len() < target {
        let a = rng.gen_range(0..num_nodes) as VertexId;
        let b = rng.gen_range(0..num_nodes) as VertexId;
        if let Ok(edge) = Edge::new(a, b) {
            if seen.insert(edge) {
                edges.push(edge);
            }
        }
    }
    edges
}

/// Triangle-rich stream: dense communities of `community_size` vertices
/// (intra-community edge probability `p_in`) joined by `bridges` random
/// inter-community edges, shuffled into one stream.
pub fn generate_clustered_edges(
    communities: usize,
    community_size: usize,
    p_in: f64,
    bridges: usize,
    seed: u64,
) -> Vec<Edge> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut edges = Vec::new();

    for c in 0..communities {
        let base = (c * community_size) as VertexId;
        for i in 0..community_size as VertexId {
            for j in (i + 1)..community_size as VertexId {
                if rng.gen_bool(p_in.clamp(0.0, 1.0)) {
                    if let Ok(edge) = Edge::new(base + i, base + j) {
                        if seen.insert(edge) {
                            edges.push(edge);
                        }
                    }
                }
            }
        }
    }

    let total = (communities * community_size) as VertexId;
    if total > 1 {
        for _ in 0..bridges {
            let a = rng.gen_range(0..total);
            let b = rng.gen_range(0..total);
            if let Ok(edge) = Edge::new(a, b) {
                if seen.insert(edge) {
                    edges.push(edge);
                }
            }
        }
    }

    edges.shuffle(&mut rng);
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_edges_are_distinct() {
        let edges = generate_random_edges(50, 300, 3);
        assert_eq!(edges.len(), 300);

        let unique: HashSet<Edge> = edges.iter().copied().collect();
        assert_eq!(unique.len(), 300);
        assert!(edges.iter().all(|e| e.v() < 50));
    }

    #[test]
    fn test_random_edges_capped_by_simple_graph_size() {
        assert_eq!(generate_random_edges(4, 100, 1).len(), 6);
        assert!(generate_random_edges(1, 10, 1).is_empty());
    }

    #[test]
    fn test_generators_are_deterministic() {
        assert_eq!(generate_random_edges(30, 60, 11), generate_random_edges(30, 60, 11));
        assert_eq!(
            generate_clustered_edges(3, 8, 0.6, 10, 5),
            generate_clustered_edges(3, 8, 0.6, 10, 5)
        );
    }

    #[test]
    fn test_complete_communities() {
        let edges = generate_clustered_edges(2, 4, 1.0, 0, 0);
        // two K4 blocks
        assert_eq!(edges.len(), 12);
    }
}
