pub mod driver;
pub mod workload;

pub use driver::{RunReport, Sim};
pub use workload::{ProcessSpec, Workload};
