use crate::core::state::Ticks;
use rand::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessSpec {
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

impl ProcessSpec {
    pub fn new(arrival_time: Ticks, burst_time: Ticks) -> Self {
        Self {
            arrival_time,
            burst_time,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Workload {
    pub specs: Vec<ProcessSpec>,
}

impl Workload {
    pub fn new(specs: Vec<ProcessSpec>) -> Self {
        Self { specs }
    }

    // Coin-flip arrivals: each tick in 0..ticks spawns a process with
    // probability `p_arrival`, short-burst with probability `p_short`.
    // Deterministic for a fixed seed. Bursts must be positive.
    pub fn bernoulli(
        ticks: Ticks,
        p_arrival: f64,
        p_short: f64,
        short_burst: Ticks,
        long_burst: Ticks,
        seed: u64,
    ) -> Self {
        assert!(short_burst > 0 && long_burst > 0, "bursts must be positive");

        let mut rng = StdRng::seed_from_u64(seed);
        let mut specs = Vec::new();

        for t in 0..ticks {
            if rng.random::<f64>() < p_arrival {
                let burst_time = if rng.random::<f64>() < p_short {
                    short_burst
                } else {
                    long_burst
                };
                specs.push(ProcessSpec::new(t, burst_time));
            }
        }

        Self { specs }
    }

    pub fn total_burst(&self) -> Ticks {
        self.specs.iter().map(|s| s.burst_time).sum()
    }
}
