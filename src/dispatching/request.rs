//! Simulation request supplied by the caller.

use serde::{Deserialize, Serialize};

use super::Discipline;

/// Raw input for one simulation run.
///
/// Holds the caller's arrays unvalidated; the `Dispatcher` checks them
/// before anything runs. Deserializable so a presentation layer can pass
/// requests as JSON.
///
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationRequest {
    /// Scheduling discipline to run.
    pub discipline: Discipline,
    /// Arrival time per process, in input order.
    pub arrivals: Vec<i64>,
    /// Burst time per process, in input order.
    pub bursts: Vec<i64>,
    /// Priority per process (Priority discipline). Missing entries default to 0.
    #[serde(default)]
    pub priorities: Vec<Option<i32>>,
    /// Time quantum (Round Robin).
    #[serde(default)]
    pub quantum: Option<i64>,
}

impl SimulationRequest {
    /// Creates a request for the given discipline and input arrays.
    pub fn new(discipline: Discipline, arrivals: Vec<i64>, bursts: Vec<i64>) -> Self {
        Self {
            discipline,
            arrivals,
            bursts,
            priorities: Vec::new(),
            quantum: None,
        }
    }

    /// Sets per-process priorities.
    pub fn with_priorities<I>(mut self, priorities: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Option<i32>>,
    {
        self.priorities = priorities.into_iter().map(Into::<Option<i32>>::into).collect();
        self
    }

    /// Sets the Round Robin time quantum.
    pub fn with_quantum(mut self, quantum: i64) -> Self {
        self.quantum = Some(quantum);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let req = SimulationRequest::new(Discipline::Priority, vec![0, 1], vec![2, 3])
            .with_priorities(vec![4, 5]);
        assert_eq!(req.priorities, vec![Some(4), Some(5)]);
        assert_eq!(req.quantum, None);

        let req = SimulationRequest::new(Discipline::RoundRobin, vec![0], vec![1]).with_quantum(3);
        assert_eq!(req.quantum, Some(3));
        assert!(req.priorities.is_empty());
    }

    #[test]
    fn test_deserialize_minimal() {
        let req: SimulationRequest =
            serde_json::from_str(r#"{"discipline":"SJF","arrivals":[0,0],"bursts":[3,1]}"#)
                .unwrap();
        assert_eq!(req.discipline, Discipline::Sjf);
        assert!(req.priorities.is_empty());
        assert_eq!(req.quantum, None);
    }

    #[test]
    fn test_deserialize_with_gaps() {
        let req: SimulationRequest = serde_json::from_str(
            r#"{"discipline":"Priority","arrivals":[0,0],"bursts":[1,1],"priorities":[2,null]}"#,
        )
        .unwrap();
        assert_eq!(req.priorities, vec![Some(2), None]);
    }

    #[test]
    fn test_deserialize_rr() {
        let req: SimulationRequest = serde_json::from_str(
            r#"{"discipline":"RR","arrivals":[0],"bursts":[4],"quantum":2}"#,
        )
        .unwrap();
        assert_eq!(req.discipline, Discipline::RoundRobin);
        assert_eq!(req.quantum, Some(2));
    }
}
