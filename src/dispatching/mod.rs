//! Discipline selection and simulation dispatch.
//!
//! Maps a discipline tag to one of the scheduling algorithms, validating
//! discipline-specific inputs first.
//!
//! # Usage
//!
//! ```
//! use u_cpusched::dispatching::{Discipline, Dispatcher, SimulationRequest};
//!
//! let request = SimulationRequest::new(Discipline::Priority, vec![0, 0, 0], vec![10, 1, 2])
//!     .with_priorities(vec![3, 1, 2]);
//! let output = Dispatcher::new().run(&request).unwrap();
//! assert_eq!(output.timeline.intervals()[0].process_id, 1);
//! ```

mod dispatcher;
mod request;

pub use dispatcher::Dispatcher;
pub use request::SimulationRequest;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::validation::{ValidationError, ValidationErrorKind};

/// A CPU scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Discipline {
    /// First-Come-First-Served.
    #[serde(rename = "FCFS")]
    Fcfs,
    /// Shortest-Job-First, non-preemptive.
    #[serde(rename = "SJF")]
    Sjf,
    /// Static priority, non-preemptive.
    #[serde(rename = "Priority")]
    Priority,
    /// Round Robin with a fixed quantum.
    #[serde(rename = "RR")]
    RoundRobin,
}

impl Discipline {
    /// All disciplines.
    pub const ALL: [Discipline; 4] = [
        Discipline::Fcfs,
        Discipline::Sjf,
        Discipline::Priority,
        Discipline::RoundRobin,
    ];

    /// Short tag (`FCFS`, `SJF`, `Priority`, `RR`).
    pub fn tag(&self) -> &'static str {
        match self {
            Discipline::Fcfs => "FCFS",
            Discipline::Sjf => "SJF",
            Discipline::Priority => "Priority",
            Discipline::RoundRobin => "RR",
        }
    }

    /// Whether a running process can be interrupted.
    pub fn is_preemptive(&self) -> bool {
        matches!(self, Discipline::RoundRobin)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Discipline {
    type Err = ValidationError;

    /// Parses a tag, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim();
        Discipline::ALL
            .into_iter()
            .find(|d| d.tag().eq_ignore_ascii_case(tag))
            .ok_or_else(|| {
                ValidationError::new(
                    ValidationErrorKind::UnknownDiscipline,
                    format!("Unknown scheduling discipline: '{tag}'"),
                )
            })
    }
}
