//! Process model.
//!
//! A process is a single CPU-bound job with a fixed arrival time and
//! total service requirement. `Process` is the mutable working record
//! used during one simulation run; `ProcessResult` is the immutable row
//! returned to callers once the process has completed.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// Working record for a process during a simulation run.
///
/// Created fresh per run from the input arrays and discarded afterwards.
///
/// # Time Representation
/// All times are integer ticks relative to the simulation epoch (t=0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// 0-based identity, assigned by input order.
    pub id: usize,
    /// Time the process becomes ready.
    pub arrival: i64,
    /// Total service time required.
    pub burst: i64,
    /// Priority (lower value = more urgent). `None` outside the Priority discipline.
    pub priority: Option<i32>,
    /// Service time still owed.
    pub remaining_burst: i64,
    /// Time of first dispatch. `None` = never dispatched.
    pub start: Option<i64>,
    /// Completion time. `None` = still owes service.
    pub finish: Option<i64>,
}

impl Process {
    /// Creates a process that has not yet run.
    pub fn new(id: usize, arrival: i64, burst: i64) -> Self {
        Self {
            id,
            arrival,
            burst,
            priority: None,
            remaining_burst: burst,
            start: None,
            finish: None,
        }
    }

    /// Sets the priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has arrived by `now`.
    #[inline]
    pub fn has_arrived(&self, now: i64) -> bool {
        self.arrival <= now
    }

    /// Whether the process still owes service.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.remaining_burst == 0
    }

    /// Records a dispatch at `now`. Only the first dispatch sets `start`.
    pub fn dispatch(&mut self, now: i64) {
        if self.start.is_none() {
            self.start = Some(now);
        }
    }

    /// Runs the process for up to `slice` ticks starting at `now`.
    ///
    /// Returns the ticks actually consumed (`min(slice, remaining_burst)`).
    /// Sets `finish` when the remaining burst reaches zero.
    pub fn execute(&mut self, now: i64, slice: i64) -> i64 {
        self.dispatch(now);
        let consumed = slice.min(self.remaining_burst);
        self.remaining_burst -= consumed;
        if self.remaining_burst == 0 {
            self.finish = Some(now + consumed);
        }
        consumed
    }

    /// Runs the process to completion starting at `now`. Returns the finish time.
    pub fn run_to_completion(&mut self, now: i64) -> i64 {
        now + self.execute(now, self.remaining_burst)
    }

    /// Turnaround time: `finish - arrival`.
    pub fn turnaround(&self) -> Option<i64> {
        self.finish.map(|f| f - self.arrival)
    }

    /// Waiting time: `turnaround - burst`.
    pub fn waiting(&self) -> Option<i64> {
        self.turnaround().map(|t| t - self.burst)
    }

    /// Response time: delay between arrival and first dispatch.
    pub fn response(&self) -> Option<i64> {
        self.start.map(|s| s - self.arrival)
    }

    /// Converts a completed process into a result row.
    ///
    /// Returns `None` if the process has not started or finished.
    pub fn to_result(&self) -> Option<ProcessResult> {
        let start = self.start?;
        let finish = self.finish?;
        let turnaround = finish - self.arrival;
        Some(ProcessResult {
            id: self.id,
            arrival: self.arrival,
            burst: self.burst,
            priority: self.priority,
            start,
            finish,
            waiting: turnaround - self.burst,
            turnaround,
        })
    }
}

/// Final metrics of a completed process.
///
/// `waiting` and `turnaround` are always derived from `finish`, `arrival`
/// and `burst`; they are never set independently.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// 0-based identity.
    pub id: usize,
    /// Arrival time.
    pub arrival: i64,
    /// Total service time.
    pub burst: i64,
    /// Priority, when the discipline uses one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    /// First dispatch time.
    pub start: i64,
    /// Completion time.
    pub finish: i64,
    /// Time spent ready but not running.
    pub waiting: i64,
    /// Time from arrival to completion.
    pub turnaround: i64,
}

impl ProcessResult {
    /// Display label, `P1` for id 0.
    pub fn label(&self) -> String {
        format!("P{}", self.id + 1)
    }

    /// Response time: delay between arrival and first dispatch.
    #[inline]
    pub fn response(&self) -> i64 {
        self.start - self.arrival
    }
}
