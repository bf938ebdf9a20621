use super::{
    event::EngineEvent,
    observer::Observer,
    state::{CompletedProcess, GanttInterval, Process, RunningProcess, SimState, Ticks},
};
use crate::{
    error::ValidationError,
    scheduler::{Policy, ShortestJobFirst},
};
use average::Estimate;

pub struct Engine<P: Policy = ShortestJobFirst> {
    state: SimState,
    policy: P,
    observer: Observer,
}

impl Engine {
    pub fn new() -> Self {
        Self::with_policy(ShortestJobFirst)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Policy> Engine<P> {
    pub fn with_policy(policy: P) -> Self {
        Self {
            state: SimState::new(),
            policy,
            observer: Observer::new(),
        }
    }

    pub fn submit_process(
        &mut self,
        arrival_time: Ticks,
        burst_time: Ticks,
    ) -> Result<Process, ValidationError> {
        if burst_time == 0 {
            return Err(ValidationError::BurstNotPositive(burst_time));
        }
        Ok(self.state.admit(arrival_time, burst_time))
    }

    // Begins a fresh run over whatever has been submitted so far. Benign on an
    // empty pool: the first tick observes no work and terminates.
    pub fn start(&mut self) {
        self.state.reset_run();
        self.observer.reset();
    }

    // One logical time unit. Finalizes an elapsed burst, hands the processor
    // to the policy's pick from the ready set in the same tick, then either
    // advances the clock or terminates the run. Returns the transitions that
    // occurred, for the driver/presentation layer; nothing is retained here.
    pub fn tick(&mut self) -> Vec<EngineEvent> {
        let mut events = Vec::new();
        if !self.state.is_running {
            return events;
        }

        let now = self.state.now;
        let burst_elapsed = self
            .state
            .running
            .is_some_and(|run| now >= run.finishes_at());
        if burst_elapsed {
            if let Some(done) = self.state.finish_running() {
                events.push(EngineEvent::ProcessCompleted {
                    id: done.process.id,
                    at: now,
                    waiting_time: done.waiting_time,
                    turnaround_time: done.turnaround_time,
                });
            }
        }

        if self.state.running.is_none() {
            let ready = self.state.ready();
            if let Some(id) = self.policy.select(&ready) {
                self.state.dispatch(id);
                events.push(EngineEvent::ProcessStarted { id, at: now });
            } else if !self.state.waiting.is_empty() {
                events.push(EngineEvent::ProcessorIdle { at: now });
            }
        }

        if self.state.out_of_work() {
            // Terminal: the clock stays on the makespan
            self.state.is_running = false;
            events.push(EngineEvent::RunFinished { at: now });
        } else {
            self.state.advance_time(1);
        }

        self.observer.observe(&self.state);
        events
    }

    pub fn average_waiting_time(&self) -> f64 {
        Self::mean(self.state.completed.iter().map(|c| c.waiting_time))
    }

    pub fn average_turnaround_time(&self) -> f64 {
        Self::mean(self.state.completed.iter().map(|c| c.turnaround_time))
    }

    fn mean(values: impl ExactSizeIterator<Item = Ticks>) -> f64 {
        if values.len() == 0 {
            return 0.0;
        }
        values.map(|v| v as f64).collect::<average::Mean>().estimate()
    }

    pub fn state(&self) -> &SimState {
        &self.state
    }

    pub fn now(&self) -> Ticks {
        self.state.now
    }

    pub fn is_running(&self) -> bool {
        self.state.is_running
    }

    pub fn running(&self) -> Option<&RunningProcess> {
        self.state.running.as_ref()
    }

    pub fn completed(&self) -> &[CompletedProcess] {
        &self.state.completed
    }

    pub fn gantt(&self) -> &[GanttInterval] {
        &self.state.gantt
    }

    pub fn waiting(&self) -> impl Iterator<Item = &Process> {
        self.state.waiting.values()
    }
}
