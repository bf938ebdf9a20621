use super::Policy;
use crate::core::state::{Process, ProcessId};

// First-come-first-served: earliest arrival wins, ties broken by smaller id.
// Useful as a baseline against ShortestJobFirst on the same workload.
pub struct FirstComeFirstServed;

impl Policy for FirstComeFirstServed {
    fn select(&self, ready: &[Process]) -> Option<ProcessId> {
        ready
            .iter()
            .min_by_key(|p| (p.arrival_time, p.id))
            .map(|p| p.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn proc(id: ProcessId, arrival_time: u64, burst_time: u64) -> Process {
        Process {
            id,
            arrival_time,
            burst_time,
        }
    }

    #[test]
    fn test_selects_earliest_arrival() {
        let ready = [proc(1, 3, 1), proc(2, 0, 9)];
        assert_eq!(FirstComeFirstServed.select(&ready), Some(2));
    }

    #[test]
    fn test_ignores_burst_time() {
        let ready = [proc(1, 0, 9), proc(2, 1, 1)];
        assert_eq!(FirstComeFirstServed.select(&ready), Some(1));
    }

    #[test]
    fn test_equal_arrival_breaks_tie_by_id() {
        let ready = [proc(5, 2, 4), proc(3, 2, 4)];
        assert_eq!(FirstComeFirstServed.select(&ready), Some(3));
    }
}
