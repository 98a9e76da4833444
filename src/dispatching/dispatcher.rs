//! Dispatcher: validates a request and runs exactly one algorithm.

use super::{Discipline, SimulationRequest};
use crate::models::Workload;
use crate::scheduler::{Fcfs, PriorityScheduler, RoundRobin, Scheduler, SimulationOutput, Sjf};
use crate::validation::ValidationError;

/// Routes simulation requests to the matching scheduling algorithm.
///
/// Every input problem is collected and returned together; no simulation
/// runs and no partial output is produced when any check fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dispatcher;

impl Dispatcher {
    /// Creates a dispatcher.
    pub fn new() -> Self {
        Self
    }

    /// Returns the scheduler for a discipline.
    ///
    /// `quantum` is only consulted for Round Robin, where it must be present
    /// and positive.
    pub fn scheduler_for(
        discipline: Discipline,
        quantum: Option<i64>,
    ) -> Result<Box<dyn Scheduler>, ValidationError> {
        let scheduler: Box<dyn Scheduler> = match discipline {
            Discipline::Fcfs => Box::new(Fcfs),
            Discipline::Sjf => Box::new(Sjf),
            Discipline::Priority => Box::new(PriorityScheduler),
            Discipline::RoundRobin => Box::new(RoundRobin::from_quantum(quantum)?),
        };
        Ok(scheduler)
    }

    /// Validates the request and runs the simulation.
    pub fn run(&self, request: &SimulationRequest) -> Result<SimulationOutput, Vec<ValidationError>> {
        let mut errors = Vec::new();

        let workload = Self::workload_for(request)
            .map_err(|e| errors.extend(e))
            .ok();
        let scheduler = Self::scheduler_for(request.discipline, request.quantum)
            .map_err(|e| errors.push(e))
            .ok();

        match (workload, scheduler) {
            (Some(workload), Some(scheduler)) => {
                log::debug!(
                    "dispatching {} processes to {}",
                    workload.len(),
                    scheduler.name()
                );
                Ok(scheduler.schedule(&workload))
            }
            _ => {
                log::warn!(
                    "rejected {} request: {} validation error(s)",
                    request.discipline,
                    errors.len()
                );
                Err(errors)
            }
        }
    }

    /// Builds a validated workload. Priorities are applied only for the
    /// Priority discipline.
    fn workload_for(request: &SimulationRequest) -> Result<Workload, Vec<ValidationError>> {
        let workload = Workload::new(request.arrivals.clone(), request.bursts.clone())?;
        match request.discipline {
            Discipline::Priority => workload.with_priorities(request.priorities.iter().copied()),
            _ => Ok(workload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::spans;
    use crate::validation::ValidationErrorKind;

    #[test]
    fn test_run_fcfs() {
        let req = SimulationRequest::new(Discipline::Fcfs, vec![0, 1, 2], vec![5, 3, 1]);
        let out = Dispatcher::new().run(&req).unwrap();
        assert_eq!(spans(&out), vec![(0, 0, 5), (1, 5, 8), (2, 8, 9)]);
    }

    #[test]
    fn test_run_sjf() {
        let req = SimulationRequest::new(Discipline::Sjf, vec![0, 0, 0], vec![6, 8, 7]);
        let out = Dispatcher::new().run(&req).unwrap();
        assert_eq!(spans(&out), vec![(0, 0, 6), (2, 6, 13), (1, 13, 21)]);
    }

    #[test]
    fn test_run_priority() {
        let req = SimulationRequest::new(Discipline::Priority, vec![0, 0, 0], vec![10, 1, 2])
            .with_priorities(vec![3, 1, 2]);
        let out = Dispatcher::new().run(&req).unwrap();
        assert_eq!(spans(&out), vec![(1, 0, 1), (2, 1, 3), (0, 3, 13)]);
    }

    #[test]
    fn test_run_round_robin() {
        let req =
            SimulationRequest::new(Discipline::RoundRobin, vec![0, 1, 2], vec![5, 3, 1])
                .with_quantum(2);
        let out = Dispatcher::new().run(&req).unwrap();
        assert_eq!(out.timeline.len(), 6);
        assert_eq!(out.process(0).unwrap().finish, 9);
    }

    #[test]
    fn test_rr_zero_quantum_rejected() {
        let req = SimulationRequest::new(Discipline::RoundRobin, vec![0], vec![1]).with_quantum(0);
        let errors = Dispatcher::new().run(&req).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
    }

    #[test]
    fn test_rr_negative_quantum_rejected() {
        let req =
            SimulationRequest::new(Discipline::RoundRobin, vec![0], vec![1]).with_quantum(-2);
        assert!(Dispatcher::new().run(&req).is_err());
    }

    #[test]
    fn test_rr_missing_quantum_rejected() {
        let req = SimulationRequest::new(Discipline::RoundRobin, vec![0], vec![1]);
        let errors = Dispatcher::new().run(&req).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::MissingQuantum);
    }

    #[test]
    fn test_quantum_ignored_for_other_disciplines() {
        let req = SimulationRequest::new(Discipline::Fcfs, vec![0], vec![1]).with_quantum(0);
        assert!(Dispatcher::new().run(&req).is_ok());
    }

    #[test]
    fn test_errors_collected_together() {
        let req =
            SimulationRequest::new(Discipline::RoundRobin, vec![0, 1], vec![0]).with_quantum(0);
        let errors = Dispatcher::new().run(&req).unwrap_err();
        let kinds: Vec<_> = errors.iter().map(|e| e.kind.clone()).collect();
        assert!(kinds.contains(&ValidationErrorKind::LengthMismatch));
        assert!(kinds.contains(&ValidationErrorKind::NonPositiveBurst));
        assert!(kinds.contains(&ValidationErrorKind::NonPositiveQuantum));
    }

    #[test]
    fn test_empty_input_rejected() {
        for discipline in Discipline::ALL {
            let req = SimulationRequest::new(discipline, vec![], vec![]).with_quantum(1);
            let errors = Dispatcher::new().run(&req).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
        }
    }

    #[test]
    fn test_too_many_priorities_rejected() {
        let req = SimulationRequest::new(Discipline::Priority, vec![0], vec![1])
            .with_priorities(vec![1, 2]);
        let errors = Dispatcher::new().run(&req).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::LengthMismatch);
    }

    #[test]
    fn test_priorities_ignored_for_other_disciplines() {
        let req = SimulationRequest::new(Discipline::Sjf, vec![0], vec![1])
            .with_priorities(vec![1, 2, 3]);
        let out = Dispatcher::new().run(&req).unwrap();
        assert_eq!(out.processes[0].priority, None);
    }

    #[test]
    fn test_scheduler_for() {
        assert_eq!(Dispatcher::scheduler_for(Discipline::Sjf, None).unwrap().name(), "SJF");
        assert_eq!(
            Dispatcher::scheduler_for(Discipline::RoundRobin, Some(3))
                .unwrap()
                .name(),
            "RR"
        );
        assert!(Dispatcher::scheduler_for(Discipline::RoundRobin, None).is_err());
    }

    #[test]
    fn test_clock_overflow_rejected_before_running() {
        let req = SimulationRequest::new(Discipline::Sjf, vec![0, 0], vec![i64::MAX, i64::MAX]);
        let errors = Dispatcher::new().run(&req).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);

        let req = SimulationRequest::new(Discipline::Fcfs, vec![i64::MAX - 2], vec![5]);
        let errors = Dispatcher::new().run(&req).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::TimeOverflow);
    }

    #[test]
    fn test_finish_at_time_limit() {
        for discipline in Discipline::ALL {
            let req =
                SimulationRequest::new(discipline, vec![i64::MAX - 5], vec![5]).with_quantum(2);
            let out = Dispatcher::new().run(&req).unwrap();
            let p = &out.processes[0];
            assert_eq!(p.finish, i64::MAX, "{discipline}");
            assert_eq!(p.turnaround, 5);
        }
    }

    #[test]
    fn test_json_request_end_to_end() {
        let req: SimulationRequest = serde_json::from_str(
            r#"{"discipline":"RR","arrivals":[0,2],"bursts":[4,2],"quantum":2}"#,
        )
        .unwrap();
        let out = Dispatcher::new().run(&req).unwrap();
        assert_eq!(spans(&out), vec![(0, 0, 2), (1, 2, 4), (0, 4, 6)]);
    }
}
