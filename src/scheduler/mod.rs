//! Single-CPU scheduling algorithms and KPI evaluation.
//!
//! Each discipline is a `Scheduler` that turns a validated `Workload` into
//! per-process results and an execution timeline.
//!
//! # Disciplines
//!
//! | Scheduler | Preemptive | Selection | Output order |
//! |-----------|-----------|-----------|--------------|
//! | `Fcfs` | no | earliest arrival | arrival |
//! | `Sjf` | no | shortest burst, then lowest id | execution |
//! | `PriorityScheduler` | no | lowest priority value, then earliest arrival | id |
//! | `RoundRobin` | yes (quantum) | FIFO ready queue | id |
//!
//! # Idle time
//!
//! When no process is ready the clock jumps straight to the next pending
//! arrival. For integer times this yields exactly the same schedule as
//! advancing one tick at a time, and the loop runs at most once per
//! dispatch plus once per idle gap.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 3

mod fcfs;
mod kpi;
mod priority;
mod round_robin;
mod sjf;

pub use fcfs::Fcfs;
pub use kpi::SimulationKpi;
pub use priority::PriorityScheduler;
pub use round_robin::RoundRobin;
pub use sjf::Sjf;

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::models::{Process, ProcessResult, Timeline, Workload};

/// Result of one simulation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationOutput {
    /// Per-process metrics, in the discipline's natural output order.
    pub processes: Vec<ProcessResult>,
    /// Execution intervals in the order they ran.
    pub timeline: Timeline,
}

impl SimulationOutput {
    /// Finds the result row for a process id.
    pub fn process(&self, id: usize) -> Option<&ProcessResult> {
        self.processes.iter().find(|p| p.id == id)
    }

    /// Result rows re-sorted into input (id) order.
    pub fn in_input_order(&self) -> Vec<&ProcessResult> {
        let mut rows: Vec<&ProcessResult> = self.processes.iter().collect();
        rows.sort_by_key(|p| p.id);
        rows
    }

    /// Summary metrics for this run.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(self)
    }
}

/// A CPU scheduling discipline.
///
/// Implementations must be deterministic and keep all working state local
/// to one `schedule` call.
pub trait Scheduler: Send + Sync + Debug {
    /// Discipline tag (e.g., "FCFS", "RR").
    fn name(&self) -> &'static str;

    /// Simulates the workload to completion.
    fn schedule(&self, workload: &Workload) -> SimulationOutput;
}

/// Earliest arrival after `now` among processes matching `pending`.
fn next_arrival_after(
    processes: &[Process],
    now: i64,
    pending: impl Fn(usize, &Process) -> bool,
) -> Option<i64> {
    processes
        .iter()
        .enumerate()
        .filter(|&(i, p)| pending(i, p) && p.arrival > now)
        .map(|(_, p)| p.arrival)
        .min()
}

/// Converts finished working records into result rows, keeping their order.
fn collect_results<'a>(processes: impl IntoIterator<Item = &'a Process>) -> Vec<ProcessResult> {
    processes
        .into_iter()
        .filter_map(Process::to_result)
        .collect()
}

/// Timeline as `(process_id, start, end)` triples, in execution order.
#[cfg(test)]
pub(crate) fn spans(out: &SimulationOutput) -> Vec<(usize, i64, i64)> {
    out.timeline
        .iter()
        .map(|i| (i.process_id, i.start, i.end))
        .collect()
}
