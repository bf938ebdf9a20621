use rustc_hash::FxHashMap;

pub type ProcessId = u32;
pub type Ticks = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Process {
    pub id: ProcessId,
    pub arrival_time: Ticks,
    pub burst_time: Ticks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunningProcess {
    pub process: Process,
    pub start_time: Ticks,
}

impl RunningProcess {
    pub fn finishes_at(&self) -> Ticks {
        self.start_time.saturating_add(self.process.burst_time)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompletedProcess {
    pub process: Process,
    pub start_time: Ticks,
    pub completion_time: Ticks,
    pub waiting_time: Ticks,
    pub turnaround_time: Ticks,
}

// `end` is None while the process still occupies the processor. At most one
// interval may be open, and only as the last entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GanttInterval {
    pub id: ProcessId,
    pub start: Ticks,
    pub end: Option<Ticks>,
}

impl GanttInterval {
    pub fn is_open(&self) -> bool {
        self.end.is_none()
    }
}

#[derive(Debug)]
pub struct SimState {
    pub now: Ticks,
    pub waiting: FxHashMap<ProcessId, Process>,
    pub running: Option<RunningProcess>,
    pub completed: Vec<CompletedProcess>,
    pub gantt: Vec<GanttInterval>,
    pub is_running: bool,

    // Increment upon submission; never reset, so ids are unique across runs
    next_id: ProcessId,
}

impl SimState {
    pub fn new() -> Self {
        Self {
            now: 0,
            waiting: FxHashMap::default(),
            running: None,
            completed: Vec::new(),
            gantt: Vec::new(),
            is_running: false,
            next_id: 0,
        }
    }

    pub fn admit(&mut self, arrival_time: Ticks, burst_time: Ticks) -> Process {
        debug_assert!(burst_time > 0, "caller must validate burst_time");

        self.next_id += 1;
        let process = Process {
            id: self.next_id,
            arrival_time,
            burst_time,
        };
        self.waiting.insert(process.id, process);
        process
    }

    // Clears per-run state but keeps the waiting pool and the id counter.
    pub fn reset_run(&mut self) {
        self.now = 0;
        self.running = None;
        self.completed.clear();
        self.gantt.clear();
        self.is_running = true;
    }

    pub fn advance_time(&mut self, delta: Ticks) {
        self.now = self.now.saturating_add(delta);
    }

    pub fn ready(&self) -> Vec<Process> {
        self.waiting
            .values()
            .filter(|p| p.arrival_time <= self.now)
            .copied()
            .collect()
    }

    pub fn dispatch(&mut self, id: ProcessId) {
        debug_assert!(
            self.running.is_none(),
            "processor already occupied when dispatching {id}"
        );

        let process = self
            .waiting
            .remove(&id)
            .expect("selected process missing from waiting pool");
        self.running = Some(RunningProcess {
            process,
            start_time: self.now,
        });

        // A still-open interval for this id means a re-entrant tick already
        // dispatched it at this time value; reuse instead of duplicating.
        let reuse = self
            .gantt
            .last()
            .is_some_and(|last| last.id == id && last.is_open());
        if !reuse {
            self.gantt.push(GanttInterval {
                id,
                start: self.now,
                end: None,
            });
        }
    }

    pub fn finish_running(&mut self) -> Option<CompletedProcess> {
        let run = self.running.take()?;
        let completion_time = self.now;
        let done = CompletedProcess {
            process: run.process,
            start_time: run.start_time,
            completion_time,
            waiting_time: run.start_time - run.process.arrival_time,
            turnaround_time: completion_time - run.process.arrival_time,
        };

        // Re-entrant ticks must not finalize the same process twice.
        let already_completed = self
            .completed
            .iter()
            .any(|c| c.process.id == done.process.id);
        if !already_completed {
            self.completed.push(done);
        }

        if let Some(last) = self.gantt.last_mut() {
            if last.id == done.process.id && last.is_open() {
                last.end = Some(completion_time);
            }
        }

        Some(done)
    }

    pub fn out_of_work(&self) -> bool {
        self.waiting.is_empty() && self.running.is_none()
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}
