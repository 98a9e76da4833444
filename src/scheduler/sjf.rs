//! Shortest-Job-First scheduling (non-preemptive).
//!
//! # Algorithm
//!
//! At each decision point, among unfinished processes that have arrived,
//! pick the one with the smallest burst. Ties go to the lowest id. The
//! chosen process runs to completion even if a shorter job arrives
//! meanwhile.
//!
//! # Complexity
//! O(n²): one linear scan per dispatch.
//!
//! # Reference
//! Smith (1956), SPT is optimal for mean flow time on a single machine.

use super::{collect_results, next_arrival_after, Scheduler, SimulationOutput};
use crate::models::{Timeline, Workload};

/// Shortest-Job-First (non-preemptive).
///
/// Results are returned in execution order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sjf;

impl Scheduler for Sjf {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn schedule(&self, workload: &Workload) -> SimulationOutput {
        log::debug!("SJF: scheduling {} processes", workload.len());

        let mut processes = workload.processes();
        let mut order = Vec::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut current_time = 0;

        while order.len() < processes.len() {
            let mut selected: Option<usize> = None;
            for (i, p) in processes.iter().enumerate() {
                if p.is_finished() || !p.has_arrived(current_time) {
                    continue;
                }
                // Strict comparison keeps the lowest id on ties
                if selected.is_none_or(|s| p.burst < processes[s].burst) {
                    selected = Some(i);
                }
            }

            let Some(idx) = selected else {
                match next_arrival_after(&processes, current_time, |_, p| !p.is_finished()) {
                    Some(next) => {
                        log::trace!("SJF: idle [{current_time}, {next})");
                        current_time = next;
                        continue;
                    }
                    None => break,
                }
            };

            let start = current_time;
            current_time = processes[idx].run_to_completion(start);
            timeline.push(idx, start, current_time);
            order.push(idx);
        }

        SimulationOutput {
            processes: collect_results(order.iter().map(|&i| &processes[i])),
            timeline,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::spans;

    fn run(arrivals: Vec<i64>, bursts: Vec<i64>) -> SimulationOutput {
        Sjf.schedule(&Workload::new(arrivals, bursts).unwrap())
    }

    #[test]
    fn test_sjf_simultaneous_arrivals() {
        let out = run(vec![0, 0, 0], vec![6, 8, 7]);
        assert_eq!(spans(&out), vec![(0, 0, 6), (2, 6, 13), (1, 13, 21)]);
    }

    #[test]
    fn test_sjf_output_in_execution_order() {
        let out = run(vec![0, 0, 0], vec![6, 8, 7]);
        let ids: Vec<usize> = out.processes.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![0, 2, 1]);
    }

    #[test]
    fn test_sjf_tie_lowest_id() {
        let out = run(vec![0, 0, 0], vec![4, 2, 2]);
        assert_eq!(spans(&out), vec![(1, 0, 2), (2, 2, 4), (0, 4, 8)]);
    }

    #[test]
    fn test_sjf_non_preemptive() {
        // P2 is shorter but arrives while P1 runs; P1 is not preempted.
        let out = run(vec![0, 1], vec![5, 1]);
        assert_eq!(spans(&out), vec![(0, 0, 5), (1, 5, 6)]);
    }

    #[test]
    fn test_sjf_only_arrived_jobs_eligible() {
        let out = run(vec![0, 2, 2], vec![3, 4, 1]);
        assert_eq!(spans(&out), vec![(0, 0, 3), (2, 3, 4), (1, 4, 8)]);
    }

    #[test]
    fn test_sjf_idle_until_arrival() {
        let out = run(vec![3, 20], vec![2, 1]);
        assert_eq!(spans(&out), vec![(0, 3, 5), (1, 20, 21)]);
        let p2 = out.process(1).unwrap();
        assert_eq!(p2.waiting, 0);
    }
}
