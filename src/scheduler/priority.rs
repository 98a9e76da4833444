//! Priority scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! At each decision point, build the ready set of unfinished processes
//! that have arrived and run the one with the lowest priority value.
//! Ties go to the earliest arrival, then to the lowest id. The chosen
//! process runs to completion.
//!
//! Priorities are static; there is no aging.

use super::{collect_results, next_arrival_after, Scheduler, SimulationOutput};
use crate::models::{Process, Timeline, Workload};

/// Non-preemptive priority scheduling (lower value = more urgent).
///
/// Results are returned in input (id) order.
#[derive(Debug, Clone, Copy, Default)]
pub struct PriorityScheduler;

/// Selection key: lower sorts first.
fn rank(p: &Process) -> (i32, i64) {
    (p.priority.unwrap_or(0), p.arrival)
}

impl Scheduler for PriorityScheduler {
    fn name(&self) -> &'static str {
        "Priority"
    }

    fn schedule(&self, workload: &Workload) -> SimulationOutput {
        log::debug!("Priority: scheduling {} processes", workload.len());

        let mut processes = workload.prioritized_processes();
        let mut completed = 0;
        let mut timeline = Timeline::new();
        let mut current_time = 0;

        while completed < processes.len() {
            let selected = processes
                .iter()
                .enumerate()
                .filter(|(_, p)| !p.is_finished() && p.has_arrived(current_time))
                .min_by_key(|&(i, p)| (rank(p), i))
                .map(|(i, _)| i);

            let Some(idx) = selected else {
                match next_arrival_after(&processes, current_time, |_, p| !p.is_finished()) {
                    Some(next) => {
                        log::trace!("Priority: idle [{current_time}, {next})");
                        current_time = next;
                        continue;
                    }
                    None => break,
                }
            };

            let start = current_time;
            current_time = processes[idx].run_to_completion(start);
            timeline.push(idx, start, current_time);
            completed += 1;
        }

        SimulationOutput {
            processes: collect_results(&processes),
            timeline,
        }
    }
}
