use crate::core::state::{ProcessId, Ticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    ProcessStarted {
        id: ProcessId,
        at: Ticks,
    },
    ProcessCompleted {
        id: ProcessId,
        at: Ticks,
        waiting_time: Ticks,
        turnaround_time: Ticks,
    },
    // Processor empty this tick while submitted work has not yet arrived
    ProcessorIdle {
        at: Ticks,
    },
    // Waiting pool and processor both drained; the run is over
    RunFinished {
        at: Ticks,
    },
}
