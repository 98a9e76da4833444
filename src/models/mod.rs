//! CPU scheduling domain models.
//!
//! Provides the data types that flow in and out of a simulation run.
//!
//! # Lifecycle
//!
//! | Type | Role |
//! |------|------|
//! | Workload | Validated input arrays (arrival, burst, priority) |
//! | Process | Working record mutated during one run |
//! | ProcessResult | Completed metrics returned to the caller |
//! | Timeline | Ordered execution intervals (Gantt data) |

mod process;
mod timeline;
mod workload;

pub use process::{Process, ProcessResult};
pub use timeline::{Interval, Timeline};
pub use workload::Workload;
