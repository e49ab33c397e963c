use crate::algorithms::TriangleCounter;
use crate::error::Result;
use crate::graph::{Edge, SampleGraph, VertexId};
use crate::streaming::config::{TriestConfig, Variant};
use crate::streaming::counters::CounterStore;
use crate::streaming::reservoir::{Decision, ReservoirPolicy};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Step counter of a run. Only the estimator advances it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StreamState {
    t: u64,
    capacity: usize,
}

impl StreamState {
    fn new(capacity: usize) -> Self {
        Self { t: 0, capacity }
    }

    fn advance(&mut self) -> u64 {
        self.t += 1;
        self.t
    }

    /// Number of edges seen so far
    pub fn step(&self) -> u64 {
        self.t
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// Effect of one edge on the reservoir
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeOutcome {
    Admitted,
    Replaced { evicted: Edge },
    Rejected,
    /// Already sampled; counted as a stream step but not re-inserted.
    Duplicate,
}

/// Running totals for reporting
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimatorStats {
    pub edges_seen: u64,
    pub admitted: u64,
    pub evicted: u64,
    pub rejected: u64,
    pub duplicates: u64,
    pub invalid: u64,
    pub sample_size: usize,
    pub capacity: usize,
}

/// One-pass TRIEST triangle estimator over an insertion-only edge stream.
///
/// Each edge is fully processed (counter update, sampling decision, sample
/// mutation) before the next is accepted, and every estimate can be read
/// between edges.
#[derive(Debug)]
pub struct StreamEstimator<R = Pcg64> {
    config: TriestConfig,
    policy: ReservoirPolicy,
    sample: SampleGraph,
    counters: CounterStore,
    state: StreamState,
    stats: EstimatorStats,
    rng: R,
}

impl StreamEstimator<Pcg64> {
    /// Estimator seeded from `config.seed`, or from entropy when unset.
    pub fn new(config: TriestConfig) -> Result<Self> {
        let rng = if let Some(seed) = config.seed {
            Pcg64::seed_from_u64(seed)
        } else {
            Pcg64::from_entropy()
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> StreamEstimator<R> {
    /// Estimator drawing from an injected random source; `config.seed` is ignored.
    pub fn with_rng(config: TriestConfig, rng: R) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "Creating TRIEST-{} estimator with capacity {}",
            config.variant,
            config.capacity
        );

        Ok(Self {
            policy: ReservoirPolicy::new(config.variant, config.capacity),
            sample: SampleGraph::new(config.capacity),
            counters: CounterStore::new(),
            state: StreamState::new(config.capacity),
            stats: EstimatorStats {
                capacity: config.capacity,
                ..Default::default()
            },
            config,
            rng,
        })
    }

    /// Feed the next edge of the stream. Self-loops fail with `InvalidEdge`
    /// and leave the step counter and all counters untouched.
    pub fn process_edge(&mut self, u: VertexId, v: VertexId) -> Result<EdgeOutcome> {
        match Edge::new(u, v) {
            Ok(edge) => self.process(edge),
            Err(err) => {
                self.stats.invalid += 1;
                Err(err)
            }
        }
    }

    pub fn process(&mut self, edge: Edge) -> Result<EdgeOutcome> {
        let t = self.state.advance();
        self.stats.edges_seen = t;
        let (u, v) = edge.endpoints();

        // Improved variant: count against the sample as it stands before
        // this edge's own decision.
        if let Some(weight) = self.policy.arrival_weight(t) {
            let third = self.sample.common_neighbors(u, v);
            self.counters.apply_triangle_update(u, v, &third, weight);
        }

        if self.sample.contains(&edge) {
            self.stats.duplicates += 1;
            log::trace!("t={} duplicate {} not re-inserted", t, edge);
            return Ok(EdgeOutcome::Duplicate);
        }

        let outcome = match self.policy.decide(t, &self.sample, &mut self.rng) {
            Decision::Admit => {
                self.admit(edge)?;
                EdgeOutcome::Admitted
            }
            Decision::Replace { evict } => {
                self.evict(evict)?;
                self.admit(edge)?;
                EdgeOutcome::Replaced { evicted: evict }
            }
            Decision::Reject => {
                self.stats.rejected += 1;
                EdgeOutcome::Rejected
            }
        };

        log::trace!("t={} {} -> {:?}", t, edge, outcome);
        Ok(outcome)
    }

    /// Process a whole stream, skipping record-level errors. Stops at the
    /// first fatal error.
    pub fn process_all<I>(&mut self, edges: I) -> Result<()>
    where
        I: IntoIterator<Item = (VertexId, VertexId)>,
    {
        for (u, v) in edges {
            match self.process_edge(u, v) {
                Ok(_) => {}
                Err(err) if !err.is_fatal() => log::debug!("Skipping edge ({}, {}): {}", u, v, err),
                Err(err) => return Err(err),
            }
        }
        Ok(())
    }

    fn admit(&mut self, edge: Edge) -> Result<()> {
        let (u, v) = edge.endpoints();
        if let Some(weight) = self.policy.admission_weight() {
            // u and v are never common neighbors of themselves, so the query
            // is the same whether or not `edge` is already linked.
            let third = self.sample.common_neighbors(u, v);
            self.counters.apply_triangle_update(u, v, &third, weight);
        }

        debug_assert!(!self.sample.contains(&edge), "duplicates return before admission");
        match self.sample.insert_edge(edge) {
            Ok(()) => {
                self.stats.admitted += 1;
                Ok(())
            }
            Err(err) => {
                log::error!("Reservoir invariant violated at t={}: {}", self.state.step(), err);
                Err(err)
            }
        }
    }

    fn evict(&mut self, edge: Edge) -> Result<()> {
        let (u, v) = edge.endpoints();
        if let Some(weight) = self.policy.eviction_weight() {
            let third = self.sample.common_neighbors(u, v);
            self.counters.apply_triangle_decrement(u, v, &third, weight);
        }

        self.sample.remove_edge(&edge)?;
        self.stats.evicted += 1;
        Ok(())
    }

    /// Raw global counter
    pub fn global_estimate(&self) -> f64 {
        self.counters.global_estimate()
    }

    /// Raw local counter of `vertex`
    pub fn local_estimate(&self, vertex: VertexId) -> f64 {
        self.counters.local_estimate(vertex)
    }

    /// Global estimate for the whole stream prefix. The base counter only
    /// sees triangles inside the sample and is scaled up once `t > M`.
    pub fn scaled_global_estimate(&self) -> f64 {
        self.policy.scale(self.state.step()) * self.counters.global_estimate()
    }

    pub fn scaled_local_estimate(&self, vertex: VertexId) -> f64 {
        self.policy.scale(self.state.step()) * self.counters.local_estimate(vertex)
    }

    /// Vertices with the largest raw local counters
    pub fn top_local(&self, k: usize) -> Vec<(VertexId, f64)> {
        self.counters.top_local(k)
    }

    pub fn step(&self) -> u64 {
        self.state.step()
    }

    pub fn state(&self) -> StreamState {
        self.state
    }

    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    pub fn config(&self) -> &TriestConfig {
        &self.config
    }

    pub fn sample(&self) -> &SampleGraph {
        &self.sample
    }

    pub fn sample_edges(&self) -> impl Iterator<Item = &Edge> {
        self.sample.edges()
    }

    pub fn counters(&self) -> &CounterStore {
        &self.counters
    }

    pub fn stats(&self) -> EstimatorStats {
        EstimatorStats {
            sample_size: self.sample.size(),
            ..self.stats.clone()
        }
    }
}

impl<R: Rng> TriangleCounter for StreamEstimator<R> {
    fn global_triangles(&self) -> f64 {
        self.scaled_global_estimate()
    }

    fn local_triangles(&self, vertex: VertexId) -> f64 {
        self.scaled_local_estimate(vertex)
    }

    fn name(&self) -> &'static str {
        match self.config.variant {
            Variant::Base => "triest-base",
            Variant::Improved => "triest-impr",
        }
    }

    fn description(&self) -> &'static str {
        "Streaming triangle estimate over a fixed-size edge reservoir"
    }
}
