use super::workload::Workload;
use crate::{
    core::{driver::Engine, event::EngineEvent, state::Ticks},
    error::ValidationError,
    scheduler::{Policy, ShortestJobFirst},
};

// The external tick driver: the library stand-in for the original timer loop.
// Cadence is the caller's concern; this just calls tick() until the engine
// reports the run is over.
pub struct Sim<P: Policy = ShortestJobFirst> {
    pub engine: Engine<P>,
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub events: Vec<EngineEvent>,
    pub makespan: Ticks,
    pub average_waiting_time: f64,
    pub average_turnaround_time: f64,
}

impl Sim {
    pub fn new(workload: &Workload) -> Result<Self, ValidationError> {
        Self::with_policy(workload, ShortestJobFirst)
    }
}

impl<P: Policy> Sim<P> {
    pub fn with_policy(workload: &Workload, policy: P) -> Result<Self, ValidationError> {
        let mut engine = Engine::with_policy(policy);
        for spec in &workload.specs {
            engine.submit_process(spec.arrival_time, spec.burst_time)?;
        }
        Ok(Self { engine })
    }

    // Runs until the engine terminates or `max_ticks` driver calls have been
    // spent; the cap guards a driver loop, it does not mutate engine state.
    pub fn run_to_completion(&mut self, max_ticks: u64) -> RunReport {
        self.engine.start();

        let mut events = Vec::new();
        let mut spent = 0;
        while self.engine.is_running() && spent < max_ticks {
            events.extend(self.engine.tick());
            spent += 1;
        }

        RunReport {
            events,
            makespan: self.engine.now(),
            average_waiting_time: self.engine.average_waiting_time(),
            average_turnaround_time: self.engine.average_turnaround_time(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::workload::ProcessSpec;

    fn classic_workload() -> Workload {
        Workload::new(vec![
            ProcessSpec::new(0, 5),
            ProcessSpec::new(1, 3),
            ProcessSpec::new(2, 1),
        ])
    }

    #[test]
    fn test_report_matches_engine_metrics() {
        let mut sim = Sim::new(&classic_workload()).unwrap();
        let report = sim.run_to_completion(100);

        assert!(!sim.engine.is_running());
        assert_eq!(report.makespan, 9);
        assert!((report.average_waiting_time - 8.0 / 3.0).abs() < 1e-9);
        assert!((report.average_turnaround_time - 17.0 / 3.0).abs() < 1e-9);
        assert!(
            report
                .events
                .contains(&EngineEvent::RunFinished { at: 9 })
        );
    }

    #[test]
    fn test_zero_burst_spec_is_rejected_up_front() {
        let workload = Workload::new(vec![ProcessSpec::new(0, 0)]);
        assert_eq!(
            Sim::new(&workload).err().unwrap(),
            ValidationError::BurstNotPositive(0)
        );
    }

    #[test]
    fn test_max_ticks_cap_stops_the_driver_early() {
        let mut sim = Sim::new(&classic_workload()).unwrap();
        let report = sim.run_to_completion(3);

        // Engine is still mid-run; the cap only stops the driver loop
        assert!(sim.engine.is_running());
        assert_eq!(report.makespan, 3);
        assert!(report.average_waiting_time >= 0.0);
    }

    #[test]
    fn test_random_workload_drains_completely() {
        let workload = Workload::bernoulli(50, 0.3, 0.5, 2, 6, 0);
        let count = workload.specs.len();
        let mut sim = Sim::new(&workload).unwrap();
        let report = sim.run_to_completion(10_000);

        assert!(!sim.engine.is_running());
        assert_eq!(sim.engine.completed().len(), count);
        // The processor can idle but never run ahead of submitted work
        assert!(report.makespan >= workload.total_burst());
    }

    #[test]
    fn test_sjf_beats_fcfs_on_mean_waiting_time() {
        use crate::scheduler::FirstComeFirstServed;

        // SJF: A 0..6, D 6..7, B 7..9, C 9..13 -> waits 0+3+6+7 = 16
        // FCFS: A 0..6, B 6..8, C 8..12, D 12..13 -> waits 0+5+6+9 = 20
        let workload = Workload::new(vec![
            ProcessSpec::new(0, 6), // A
            ProcessSpec::new(1, 2), // B
            ProcessSpec::new(2, 4), // C
            ProcessSpec::new(3, 1), // D
        ]);
        let sjf = Sim::new(&workload).unwrap().run_to_completion(100);
        let fcfs = Sim::with_policy(&workload, FirstComeFirstServed)
            .unwrap()
            .run_to_completion(100);

        assert!((sjf.average_waiting_time - 4.0).abs() < 1e-9);
        assert!((fcfs.average_waiting_time - 5.0).abs() < 1e-9);
        assert_eq!(sjf.makespan, fcfs.makespan);
    }
}
