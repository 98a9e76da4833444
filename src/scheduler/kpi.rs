//! Simulation quality metrics (KPIs).
//!
//! Summarizes a completed simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest completion time |
//! | Avg Waiting | Mean of turnaround - burst |
//! | Avg Turnaround | Mean of finish - arrival |
//! | Avg Response | Mean of first dispatch - arrival |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Completed processes / makespan |
//! | Context Switches | Adjacent intervals owned by different processes |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::SimulationOutput;
use crate::models::ProcessResult;

/// Simulation performance indicators.
///
/// Time values are in simulation ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: i64,
    /// Sum of waiting times, saturating at `i64::MAX`.
    pub total_waiting: i64,
    /// Mean waiting time.
    pub avg_waiting: f64,
    /// Mean turnaround time.
    pub avg_turnaround: f64,
    /// Mean response time.
    pub avg_response: f64,
    /// Fraction of `[0, makespan)` the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Completed processes per tick.
    pub throughput: f64,
    /// Number of switches between different processes.
    pub context_switches: usize,
}

impl SimulationKpi {
    /// Computes KPIs from a simulation output.
    pub fn calculate(output: &SimulationOutput) -> Self {
        let makespan = output.timeline.makespan();
        let count = output.processes.len();

        // Sums across processes can exceed i64 even when every single time fits
        let total_waiting = output
            .processes
            .iter()
            .fold(0i64, |acc, p| acc.saturating_add(p.waiting));

        let mean = |value: fn(&ProcessResult) -> i64| {
            if count == 0 {
                0.0
            } else {
                output.processes.iter().map(|p| value(p) as f64).sum::<f64>() / count as f64
            }
        };

        let (cpu_utilization, throughput) = if makespan <= 0 {
            (0.0, 0.0)
        } else {
            (
                output.timeline.busy_time() as f64 / makespan as f64,
                count as f64 / makespan as f64,
            )
        };

        Self {
            makespan,
            total_waiting,
            avg_waiting: mean(|p| p.waiting),
            avg_turnaround: mean(|p| p.turnaround),
            avg_response: mean(ProcessResult::response),
            cpu_utilization,
            throughput,
            context_switches: output.timeline.context_switches(),
        }
    }
}
