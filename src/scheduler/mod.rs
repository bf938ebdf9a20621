pub mod fcfs;
pub mod sjf;

use crate::core::state::{Process, ProcessId};
pub use fcfs::FirstComeFirstServed;
pub use sjf::ShortestJobFirst;

// A policy only ranks the ready set; the engine owns all state transitions.
// `ready` carries every submitted process whose arrival time has passed, in no
// particular order.
pub trait Policy {
    fn select(&self, ready: &[Process]) -> Option<ProcessId>;
}
