use super::state::{SimState, Ticks};
use rustc_hash::FxHashSet;

#[derive(Debug)]
pub struct Observer {
    last_now: Ticks,
}

impl Observer {
    pub fn new() -> Self {
        Self { last_now: 0 }
    }

    // A new run restarts the clock at zero.
    pub fn reset(&mut self) {
        self.last_now = 0;
    }

    pub fn observe(&mut self, state: &SimState) {
        debug_assert!(
            state.now >= self.last_now,
            "time moved backwards: {} -> {}",
            self.last_now,
            state.now
        );
        self.last_now = state.now;

        let open: Vec<_> = state.gantt.iter().filter(|g| g.is_open()).collect();
        match state.running {
            Some(run) => {
                debug_assert!(
                    run.process.arrival_time <= run.start_time,
                    "process {} started before it arrived",
                    run.process.id
                );
                debug_assert!(
                    run.start_time <= state.now,
                    "process {} starts in the future",
                    run.process.id
                );
                debug_assert!(
                    !state.waiting.contains_key(&run.process.id),
                    "running process {} still present in waiting pool",
                    run.process.id
                );
                debug_assert_eq!(open.len(), 1, "running process must own one open interval");
                if let Some(interval) = open.first() {
                    debug_assert_eq!(
                        interval.id, run.process.id,
                        "open interval does not belong to the running process"
                    );
                }
            }
            None => {
                debug_assert!(open.is_empty(), "open interval without a running process");
            }
        }

        let mut seen = FxHashSet::default();
        for done in &state.completed {
            debug_assert!(
                seen.insert(done.process.id),
                "process {} finalized more than once",
                done.process.id
            );
            debug_assert!(
                !state.waiting.contains_key(&done.process.id),
                "completed process {} still present in waiting pool",
                done.process.id
            );
            debug_assert_eq!(
                done.turnaround_time,
                done.waiting_time + done.process.burst_time,
                "metric identity violated for process {}",
                done.process.id
            );
            debug_assert!(done.start_time >= done.process.arrival_time);
            debug_assert!(done.completion_time >= done.start_time);
        }

        for pair in state.gantt.windows(2) {
            if let Some(end) = pair[0].end {
                debug_assert!(
                    end <= pair[1].start,
                    "gantt intervals overlap: ..{} then {}..",
                    end,
                    pair[1].start
                );
            } else {
                debug_assert!(false, "only the last gantt interval may be open");
            }
        }
    }
}

impl Default for Observer {
    fn default() -> Self {
        Self::new()
    }
}
