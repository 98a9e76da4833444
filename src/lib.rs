//! CPU scheduling simulation.
//!
//! Computes scheduling outcomes for a set of processes on a single CPU under
//! four classic disciplines, producing per-process timing metrics and an
//! execution timeline suitable for Gantt-style rendering.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ProcessResult`, `Interval`,
//!   `Timeline`, `Workload`
//! - **`validation`**: Input checks (empty input, length mismatch, burst/quantum bounds)
//! - **`scheduler`**: FCFS, SJF, Priority and Round Robin algorithms, KPIs
//! - **`dispatching`**: Discipline tags, simulation requests, the dispatcher
//!
//! # Example
//!
//! ```
//! use u_cpusched::dispatching::{Discipline, Dispatcher, SimulationRequest};
//!
//! let request = SimulationRequest::new(Discipline::RoundRobin, vec![0, 1, 2], vec![5, 3, 1])
//!     .with_quantum(2);
//! let output = Dispatcher::new().run(&request).unwrap();
//! assert_eq!(output.timeline.len(), 6);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod models;
pub mod scheduler;
pub mod validation;
