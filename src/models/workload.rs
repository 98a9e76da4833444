//! Validated simulation input.
//!
//! A workload is the set of processes to simulate: one arrival time and
//! one burst time per process, plus a priority per process for the
//! Priority discipline. Construction validates the arrays, so the
//! scheduling algorithms can treat a `Workload` as well-formed.

use rand::Rng;
use serde::Serialize;

use super::Process;
use crate::validation::{validate_arrays, validate_priorities, ValidationError};

/// A validated set of processes.
///
/// # Invariants
/// - At least one process
/// - `arrivals`, `bursts` and `priorities` have equal length
/// - Every arrival is `>= 0`, every burst is `> 0`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Workload {
    arrivals: Vec<i64>,
    bursts: Vec<i64>,
    priorities: Vec<i32>,
}

impl Workload {
    /// Creates a workload from parallel arrival and burst arrays.
    ///
    /// All priorities default to 0.
    pub fn new(arrivals: Vec<i64>, bursts: Vec<i64>) -> Result<Self, Vec<ValidationError>> {
        validate_arrays(&arrivals, &bursts)?;
        let priorities = vec![0; arrivals.len()];
        Ok(Self {
            arrivals,
            bursts,
            priorities,
        })
    }

    /// Sets per-process priorities (lower value = more urgent).
    ///
    /// Missing entries (`None`, or a shorter array) default to 0. An array
    /// longer than the workload is rejected.
    pub fn with_priorities<I>(mut self, priorities: I) -> Result<Self, Vec<ValidationError>>
    where
        I: IntoIterator,
        I::Item: Into<Option<i32>>,
    {
        let given: Vec<i32> = priorities
            .into_iter()
            .map(|p| p.into().unwrap_or(0))
            .collect();
        validate_priorities(self.len(), given.len())?;

        for (slot, p) in self.priorities.iter_mut().zip(given) {
            *slot = p;
        }
        Ok(self)
    }

    /// Generates a reproducible synthetic workload.
    ///
    /// Arrivals are drawn from `0..=max_arrival`, bursts from `1..=max_burst`
    /// and priorities from `0..=9`.
    pub fn random<R: Rng>(
        rng: &mut R,
        count: usize,
        max_arrival: i64,
        max_burst: i64,
    ) -> Result<Self, Vec<ValidationError>> {
        let max_arrival = max_arrival.max(0);
        let max_burst = max_burst.max(1);

        let arrivals = (0..count)
            .map(|_| rng.random_range(0..=max_arrival))
            .collect();
        let bursts = (0..count)
            .map(|_| rng.random_range(1..=max_burst))
            .collect();
        let priorities: Vec<i32> = (0..count).map(|_| rng.random_range(0..=9)).collect();

        Self::new(arrivals, bursts)?.with_priorities(priorities)
    }

    /// Number of processes.
    #[inline]
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    /// Always `false`; a workload holds at least one process.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    /// Arrival times in input order.
    pub fn arrivals(&self) -> &[i64] {
        &self.arrivals
    }

    /// Burst times in input order.
    pub fn bursts(&self) -> &[i64] {
        &self.bursts
    }

    /// Priorities in input order.
    pub fn priorities(&self) -> &[i32] {
        &self.priorities
    }

    /// Sum of all bursts.
    pub fn total_burst(&self) -> i64 {
        self.bursts.iter().sum()
    }

    /// Fresh working records, one per process, in input order.
    pub fn processes(&self) -> Vec<Process> {
        self.arrivals
            .iter()
            .zip(&self.bursts)
            .enumerate()
            .map(|(id, (&arrival, &burst))| Process::new(id, arrival, burst))
            .collect()
    }

    /// Fresh working records carrying their priorities.
    pub fn prioritized_processes(&self) -> Vec<Process> {
        self.processes()
            .into_iter()
            .zip(&self.priorities)
            .map(|(p, &priority)| p.with_priority(priority))
            .collect()
    }
}
