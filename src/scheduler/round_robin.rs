//! Round Robin scheduling (preemptive, fixed quantum).
//!
//! # Algorithm
//!
//! Per dispatch cycle:
//! 1. Admit every unvisited process that has arrived to the ready queue tail.
//! 2. If the queue is empty, finish when all work is done, otherwise jump
//!    the clock to the next arrival.
//! 3. Pop the queue head and run it for `min(quantum, remaining)`.
//! 4. Admit processes that arrived during (or at the end of) that slice.
//! 5. Re-queue the preempted process behind them, or mark it finished.
//!
//! Step 4 happens before step 5: a process arriving exactly when another
//! is preempted gets queued ahead of it.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.3

use std::collections::VecDeque;

use super::{collect_results, next_arrival_after, Scheduler, SimulationOutput};
use crate::models::{Process, Timeline, Workload};
use crate::validation::{validate_quantum, ValidationError};

/// Round Robin with a fixed time quantum.
///
/// Results are returned in input (id) order. A process may contribute
/// several non-contiguous intervals to the timeline.
///
/// # Example
///
/// ```
/// use u_cpusched::models::Workload;
/// use u_cpusched::scheduler::{RoundRobin, Scheduler};
///
/// let workload = Workload::new(vec![0, 1, 2], vec![5, 3, 1]).unwrap();
/// let output = RoundRobin::new(2).unwrap().schedule(&workload);
/// assert_eq!(output.processes[0].finish, 9);
///
/// assert!(RoundRobin::new(0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: i64,
}

impl RoundRobin {
    /// Creates a Round Robin scheduler. Rejects a non-positive quantum.
    pub fn new(quantum: i64) -> Result<Self, ValidationError> {
        Self::from_quantum(Some(quantum))
    }

    /// Creates a Round Robin scheduler from an optional quantum, rejecting
    /// a missing or non-positive one.
    pub fn from_quantum(quantum: Option<i64>) -> Result<Self, ValidationError> {
        validate_quantum(quantum).map(|quantum| Self { quantum })
    }

    /// The time quantum.
    pub fn quantum(&self) -> i64 {
        self.quantum
    }
}

/// Queues every unvisited, unfinished process that has arrived by `now`.
fn admit_arrivals(
    processes: &[Process],
    visited: &mut [bool],
    queue: &mut VecDeque<usize>,
    now: i64,
) {
    for (i, p) in processes.iter().enumerate() {
        if !visited[i] && !p.is_finished() && p.has_arrived(now) {
            visited[i] = true;
            queue.push_back(i);
        }
    }
}

impl Scheduler for RoundRobin {
    fn name(&self) -> &'static str {
        "RR"
    }

    fn schedule(&self, workload: &Workload) -> SimulationOutput {
        log::debug!(
            "RR: scheduling {} processes, quantum {}",
            workload.len(),
            self.quantum
        );

        let mut processes = workload.processes();
        let mut visited = vec![false; processes.len()];
        let mut queue = VecDeque::with_capacity(processes.len());
        let mut timeline = Timeline::new();
        let mut current_time = 0;

        loop {
            admit_arrivals(&processes, &mut visited, &mut queue, current_time);

            let Some(i) = queue.pop_front() else {
                // Anything unfinished and not queued has not been admitted yet
                match next_arrival_after(&processes, current_time, |i, _| !visited[i]) {
                    Some(next) => {
                        log::trace!("RR: idle [{current_time}, {next})");
                        current_time = next;
                        continue;
                    }
                    None => break,
                }
            };

            let start = current_time;
            current_time += processes[i].execute(start, self.quantum);
            timeline.push(i, start, current_time);

            admit_arrivals(&processes, &mut visited, &mut queue, current_time);

            if !processes[i].is_finished() {
                queue.push_back(i);
            }
        }

        SimulationOutput {
            processes: collect_results(&processes),
            timeline,
        }
    }
}
