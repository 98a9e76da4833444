//! First-Come-First-Served scheduling.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival (equal arrivals keep input order).
//! 2. Walk the sorted list with a single clock; if the next process has
//!    not arrived yet, jump the clock to its arrival.
//! 3. Run each process to completion, recording one interval.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation.

use super::{collect_results, Scheduler, SimulationOutput};
use crate::models::{Timeline, Workload};

/// First-Come-First-Served (non-preemptive).
///
/// Results are returned in arrival order, not input order.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Workload;
/// use u_cpusched::scheduler::{Fcfs, Scheduler};
///
/// let workload = Workload::new(vec![0, 1, 2], vec![5, 3, 1]).unwrap();
/// let output = Fcfs.schedule(&workload);
/// assert_eq!(output.processes[2].finish, 9);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Fcfs;

impl Scheduler for Fcfs {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn schedule(&self, workload: &Workload) -> SimulationOutput {
        log::debug!("FCFS: scheduling {} processes", workload.len());

        let mut processes = workload.processes();
        processes.sort_by_key(|p| p.arrival);

        let mut timeline = Timeline::new();
        let mut current_time = 0;

        for process in &mut processes {
            if current_time < process.arrival {
                log::trace!("FCFS: idle [{current_time}, {})", process.arrival);
                current_time = process.arrival;
            }
            let start = current_time;
            current_time = process.run_to_completion(start);
            timeline.push(process.id, start, current_time);
        }

        SimulationOutput {
            processes: collect_results(&processes),
            timeline,
        }
    }
}
