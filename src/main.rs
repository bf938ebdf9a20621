use sjf_sim::{EngineEvent, Sim, Workload};

fn main() {
    let workload = Workload::bernoulli(40, 0.25, 0.5, 2, 6, 0);
    let mut sim = Sim::new(&workload).expect("generated bursts are positive");
    let report = sim.run_to_completion(10_000);

    for event in &report.events {
        match *event {
            EngineEvent::ProcessStarted { id, at } => println!("t={at} P{id} starts"),
            EngineEvent::ProcessCompleted {
                id,
                at,
                waiting_time,
                turnaround_time,
            } => println!("t={at} P{id} completes (waited {waiting_time}, turnaround {turnaround_time})"),
            EngineEvent::ProcessorIdle { at } => println!("t={at} processor idle"),
            EngineEvent::RunFinished { at } => println!("t={at} run finished"),
        }
    }

    print!("\ngantt:");
    for interval in sim.engine.gantt() {
        let end = interval.end.unwrap_or(sim.engine.now());
        print!(" | P{} {}..{}", interval.id, interval.start, end);
    }
    println!(" |");

    println!(
        "\n{:>4} {:>8} {:>6} {:>6} {:>6} {:>11}",
        "proc", "arrival", "burst", "start", "wait", "turnaround"
    );
    for done in sim.engine.completed() {
        println!(
            "{:>4} {:>8} {:>6} {:>6} {:>6} {:>11}",
            format!("P{}", done.process.id),
            done.process.arrival_time,
            done.process.burst_time,
            done.start_time,
            done.waiting_time,
            done.turnaround_time
        );
    }

    println!("\nmakespan: {} ticks", report.makespan);
    println!("average waiting time: {:.2} ticks", report.average_waiting_time);
    println!(
        "average turnaround time: {:.2} ticks",
        report.average_turnaround_time
    );
}
