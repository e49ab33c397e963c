use crate::graph::{Edge, SampleGraph};
use crate::streaming::config::Variant;
use rand::Rng;

/// What the reservoir does with an arriving edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Room is left in the sample, store the edge.
    Admit,
    /// Store the edge after evicting `evict`.
    Replace { evict: Edge },
    /// The edge is observed but not stored.
    Reject,
}

/// Reservoir sampling policy with the counter weights of one TRIEST variant.
///
/// After `t > M` arrivals, every edge seen so far is in the sample with
/// probability `M / t`.
#[derive(Debug, Clone, Copy)]
pub struct ReservoirPolicy {
    variant: Variant,
    capacity: usize,
}

impl ReservoirPolicy {
    pub fn new(variant: Variant, capacity: usize) -> Self {
        Self { variant, capacity }
    }

    pub fn variant(&self) -> Variant {
        self.variant
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Decide sample membership for the `t`-th edge (1-based).
    pub fn decide<R: Rng>(&self, t: u64, sample: &SampleGraph, rng: &mut R) -> Decision {
        // Fill phase. Suppressed duplicates can leave the sample short of M
        // after t > M; the free slots are filled before replacement starts.
        if t <= self.capacity as u64 || !sample.is_full() {
            return Decision::Admit;
        }

        let r = rng.gen_range(1..=t);
        if r > self.capacity as u64 {
            return Decision::Reject;
        }

        match sample.random_edge(rng) {
            Some(evict) => Decision::Replace { evict },
            None => Decision::Admit,
        }
    }

    /// Weight applied to every arriving edge before the sampling decision.
    pub fn arrival_weight(&self, t: u64) -> Option<f64> {
        match self.variant {
            Variant::Base => None,
            Variant::Improved => Some(improved_weight(t, self.capacity)),
        }
    }

    /// Weight added when an edge enters the sample.
    pub fn admission_weight(&self) -> Option<f64> {
        match self.variant {
            Variant::Base => Some(1.0),
            Variant::Improved => None,
        }
    }

    /// Weight subtracted when an edge leaves the sample.
    pub fn eviction_weight(&self) -> Option<f64> {
        match self.variant {
            Variant::Base => Some(1.0),
            Variant::Improved => None,
        }
    }

    /// Factor turning the raw counter into an estimate for the whole stream.
    pub fn scale(&self, t: u64) -> f64 {
        match self.variant {
            Variant::Base => base_scale(t, self.capacity),
            Variant::Improved => 1.0,
        }
    }
}

/// `max(1, (t-1)(t-2) / (M(M-1)))` for `t > M`, otherwise 1.
///
/// A sample with fewer than two edges holds no wedge, so the weight is never
/// applied there and is pinned to 1.
pub fn improved_weight(t: u64, capacity: usize) -> f64 {
    if t <= capacity as u64 || capacity < 2 {
        return 1.0;
    }
    let t = t as f64;
    let m = capacity as f64;
    (((t - 1.0) * (t - 2.0)) / (m * (m - 1.0))).max(1.0)
}

/// `max(1, t(t-1)(t-2) / (M(M-1)(M-2)))` for `t > M`, otherwise 1.
pub fn base_scale(t: u64, capacity: usize) -> f64 {
    if t <= capacity as u64 || capacity < 3 {
        return 1.0;
    }
    let t = t as f64;
    let m = capacity as f64;
    ((t * (t - 1.0) * (t - 2.0)) / (m * (m - 1.0) * (m - 2.0))).max(1.0)
}
