use super::Policy;
use crate::core::state::{Process, ProcessId};

// Non-preemptive shortest-job-first: minimum burst wins, ties broken by
// earlier arrival, then by smaller id so selection is a strict total order.
pub struct ShortestJobFirst;

impl Policy for ShortestJobFirst {
    fn select(&self, ready: &[Process]) -> Option<ProcessId> {
        ready
            .iter()
            .min_by_key(|p| (p.burst_time, p.arrival_time, p.id))
            .map(|p| p.id)
    }
}
