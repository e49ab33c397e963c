#[cfg(test)]
mod tests {
    use crate::algorithms::ExactTriangleCount;
    use crate::graph::{Edge, VertexId};
    use crate::performance::{generate_clustered_edges, generate_random_edges};
    use crate::streaming::{EdgeOutcome, StreamEstimator, TriestConfig, Variant};
    use hashbrown::HashMap;
    use pretty_assertions::assert_eq;

    fn estimator(capacity: usize, variant: Variant, seed: u64) -> StreamEstimator {
        StreamEstimator::new(TriestConfig::new(capacity).with_variant(variant).with_seed(seed)).unwrap()
    }

    fn edge(u: VertexId, v: VertexId) -> Edge {
        Edge::new(u, v).unwrap()
    }

    #[test]
    fn test_sample_size_tracks_fill_then_capacity() {
        let edges = generate_random_edges(40, 200, 17);
        let capacity = 25;

        for variant in [Variant::Base, Variant::Improved] {
            let mut est = estimator(capacity, variant, 3);
            for (i, e) in edges.iter().enumerate() {
                est.process(*e).unwrap();
                let t = i + 1;
                if t <= capacity {
                    assert_eq!(est.sample().size(), t);
                } else {
                    assert_eq!(est.sample().size(), capacity);
                }
            }
            assert_eq!(est.step(), 200);
        }
    }

    #[test]
    fn test_duplicates_leave_room_filled_without_eviction() {
        for variant in [Variant::Base, Variant::Improved] {
            let mut est = estimator(3, variant, 11);
            let outcomes: Vec<EdgeOutcome> = [(1, 2), (1, 2), (1, 2), (2, 3), (3, 4)]
                .into_iter()
                .map(|(u, v)| est.process_edge(u, v).unwrap())
                .collect();

            assert_eq!(
                outcomes,
                vec![
                    EdgeOutcome::Admitted,
                    EdgeOutcome::Duplicate,
                    EdgeOutcome::Duplicate,
                    EdgeOutcome::Admitted,
                    EdgeOutcome::Admitted,
                ]
            );
            assert_eq!(est.step(), 5);
            assert_eq!(est.sample().size(), 3);

            let stats = est.stats();
            assert_eq!(stats.admitted, 3);
            assert_eq!(stats.evicted, 0);
            assert_eq!(stats.rejected, 0);
            assert_eq!(stats.duplicates, 2);
        }
    }

    #[test]
    fn test_single_triangle_base() {
        let mut est = estimator(3, Variant::Base, 0);
        est.process_all([(1, 2), (2, 3), (1, 3)]).unwrap();

        let mut sampled: Vec<Edge> = est.sample_edges().copied().collect();
        sampled.sort();
        assert_eq!(sampled, vec![edge(1, 2), edge(1, 3), edge(2, 3)]);
        assert_eq!(est.global_estimate(), 1.0);
        for v in 1..=3 {
            assert_eq!(est.local_estimate(v), 1.0);
        }
    }

    #[test]
    fn test_base_eviction_removes_counted_triangle() {
        // Search seeds for each possible fate of (3, 4) at t = 4.
        let mut saw_evict_12 = false;
        let mut saw_reject = false;

        for seed in 0..2_000 {
            let mut est = estimator(3, Variant::Base, seed);
            est.process_all([(1, 2), (2, 3), (1, 3)]).unwrap();
            assert_eq!(est.global_estimate(), 1.0);

            match est.process_edge(3, 4).unwrap() {
                EdgeOutcome::Replaced { evicted } => {
                    // Any evicted edge breaks the only triangle and (3, 4)
                    // closes none.
                    assert_eq!(est.global_estimate(), 0.0);
                    assert!(!est.sample().contains(&evicted));
                    assert!(est.sample().contains(&edge(3, 4)));
                    if evicted == edge(1, 2) {
                        saw_evict_12 = true;
                        assert_eq!(est.local_estimate(1), 0.0);
                        assert_eq!(est.local_estimate(2), 0.0);
                        assert_eq!(est.local_estimate(3), 0.0);
                    }
                }
                EdgeOutcome::Rejected => {
                    saw_reject = true;
                    assert_eq!(est.global_estimate(), 1.0);
                }
                other => panic!("unexpected outcome {:?}", other),
            }

            if saw_evict_12 && saw_reject {
                break;
            }
        }

        assert!(saw_evict_12, "no seed evicted (1, 2)");
        assert!(saw_reject, "no seed rejected (3, 4)");
    }

    #[test]
    fn test_base_without_eviction_is_exact() {
        let edges = generate_clustered_edges(5, 10, 0.6, 20, 99);
        let exact = ExactTriangleCount::from_edges(&edges);
        assert!(exact.total() > 0);

        let mut est = estimator(edges.len(), Variant::Base, 4);
        for e in &edges {
            est.process(*e).unwrap();
        }

        assert_eq!(est.global_estimate(), exact.total() as f64);
        assert_eq!(est.stats().evicted, 0);
        for v in 0..50 {
            assert_eq!(est.local_estimate(v), exact.local(v) as f64, "vertex {}", v);
        }
    }

    #[test]
    fn test_impr_never_decreases() {
        let edges = generate_clustered_edges(6, 12, 0.5, 40, 7);

        let mut est = estimator(30, Variant::Improved, 12);
        let mut previous = 0.0;
        for e in &edges {
            est.process(*e).unwrap();
            let current = est.global_estimate();
            assert!(current >= previous, "estimate dropped at t={}", est.step());
            previous = current;
        }
        assert!(est.stats().evicted > 0);
    }

    #[test]
    fn test_impr_scenario_stream_is_monotone() {
        for seed in 0..200 {
            let mut est = estimator(3, Variant::Improved, seed);
            let mut previous = 0.0;
            for (u, v) in [(1, 2), (2, 3), (1, 3), (3, 4)] {
                est.process_edge(u, v).unwrap();
                assert!(est.global_estimate() >= previous);
                previous = est.global_estimate();
            }
            assert_eq!(est.global_estimate(), 1.0);
        }
    }

    #[test]
    fn test_base_can_decrease() {
        let edges = generate_clustered_edges(6, 12, 0.5, 40, 7);

        let mut est = estimator(edges.len() / 2, Variant::Base, 12);
        let mut decreased = false;
        let mut previous = 0.0;
        for e in &edges {
            est.process(*e).unwrap();
            if est.global_estimate() < previous {
                decreased = true;
            }
            previous = est.global_estimate();
        }
        assert!(decreased);
        assert!(est.global_estimate() >= 0.0);
    }

    #[test]
    fn test_base_counter_matches_sampled_triangles() {
        let edges = generate_clustered_edges(4, 10, 0.7, 15, 31);

        for seed in 0..10 {
            let mut est = estimator(edges.len() / 3, Variant::Base, seed);
            for e in &edges {
                est.process(*e).unwrap();
            }

            let in_sample = ExactTriangleCount::from_edges(est.sample_edges());
            assert_eq!(est.global_estimate(), in_sample.total() as f64);
            for v in 0..40 {
                assert_eq!(est.local_estimate(v), in_sample.local(v) as f64);
            }
        }
    }

    #[test]
    fn test_reservoir_inclusion_is_uniform() {
        // Star edges share no triangles, so only sampling is exercised.
        let stream: Vec<(VertexId, VertexId)> = (1..=20).map(|i| (0, i)).collect();
        let capacity = 5;
        let runs = 4_000;

        let mut inclusion: HashMap<Edge, u32> = HashMap::new();
        for seed in 0..runs {
            let mut est = estimator(capacity, Variant::Base, seed);
            est.process_all(stream.iter().copied()).unwrap();
            for e in est.sample_edges() {
                *inclusion.entry(*e).or_insert(0) += 1;
            }
        }

        let expected = capacity as f64 / stream.len() as f64;
        for &(u, v) in &stream {
            let freq = inclusion.get(&edge(u, v)).copied().unwrap_or(0) as f64 / runs as f64;
            assert!(
                (freq - expected).abs() < 0.05,
                "edge ({}, {}) included with frequency {}",
                u,
                v,
                freq
            );
        }
    }

    #[test]
    fn test_impr_estimate_is_close_on_average() {
        let edges = generate_clustered_edges(8, 12, 0.6, 30, 5);
        let exact = ExactTriangleCount::from_edges(&edges).total() as f64;
        let capacity = edges.len() / 2;

        let runs = 200;
        let mean: f64 = (0..runs)
            .map(|seed| {
                let mut est = estimator(capacity, Variant::Improved, seed);
                for e in &edges {
                    est.process(*e).unwrap();
                }
                est.scaled_global_estimate()
            })
            .sum::<f64>()
            / runs as f64;

        let relative_error = (mean - exact).abs() / exact;
        assert!(relative_error < 0.1, "mean {} vs exact {}", mean, exact);
    }

    #[test]
    fn test_same_seed_replays_exactly() {
        let edges = generate_random_edges(60, 400, 8);

        let run = |seed| {
            let mut est = estimator(50, Variant::Base, seed);
            let outcomes: Vec<EdgeOutcome> = edges.iter().map(|e| est.process(*e).unwrap()).collect();
            (outcomes, est.global_estimate())
        };

        assert_eq!(run(77), run(77));
    }
}
