pub mod core;
pub mod error;
pub mod scheduler;
pub mod sim;

pub use crate::core::{
    CompletedProcess, Engine, EngineEvent, GanttInterval, Process, ProcessId, RunningProcess,
    Ticks,
};
pub use error::ValidationError;
pub use scheduler::Policy;
pub use sim::{ProcessSpec, RunReport, Sim, Workload};
