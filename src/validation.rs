//! Input validation for scheduling simulations.
//!
//! Checks the raw input arrays and discipline parameters before any
//! simulation runs. Detects:
//! - Empty input
//! - Mismatched array lengths
//! - Negative arrival times
//! - Non-positive burst times
//! - Workloads whose simulated clock would overflow `i64`
//! - Missing or non-positive round-robin quantum
//!
//! Validators collect every problem they find instead of stopping at
//! the first one, so callers can report all of them at once.

use std::fmt;

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// Input arrays differ in length.
    LengthMismatch,
    /// A process arrives before time 0.
    NegativeArrival,
    /// A process requires zero or negative service time.
    NonPositiveBurst,
    /// Latest arrival plus total burst does not fit in `i64`.
    TimeOverflow,
    /// Round Robin quantum is zero or negative.
    NonPositiveQuantum,
    /// Round Robin was requested without a quantum.
    MissingQuantum,
    /// Discipline tag is not recognized.
    UnknownDiscipline,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Validates the arrival and burst arrays of a workload.
///
/// Checks:
/// 1. At least one process
/// 2. `arrivals` and `bursts` have equal length
/// 3. Every arrival is non-negative
/// 4. Every burst is strictly positive
/// 5. `max(arrival) + sum(burst)` fits in `i64`, bounding the simulation clock
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_arrays(arrivals: &[i64], bursts: &[i64]) -> ValidationResult {
    let mut errors = Vec::new();

    if arrivals.is_empty() && bursts.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "At least one process is required",
        ));
    }

    if arrivals.len() != bursts.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Arrival count ({}) does not match burst count ({})",
                arrivals.len(),
                bursts.len()
            ),
        ));
    }

    for (i, &arrival) in arrivals.iter().enumerate() {
        if arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!("P{} has negative arrival time {arrival}", i + 1),
            ));
        }
    }

    for (i, &burst) in bursts.iter().enumerate() {
        if burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!("P{} has non-positive burst time {burst}", i + 1),
            ));
        }
    }

    if horizon(arrivals, bursts).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the representable time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Upper bound on any simulated clock value: `max(arrival) + sum(burst)`.
///
/// Only in-range values are counted; out-of-range ones are reported separately.
/// Returns `None` on overflow.
fn horizon(arrivals: &[i64], bursts: &[i64]) -> Option<i64> {
    let latest = arrivals.iter().copied().filter(|&a| a >= 0).max().unwrap_or(0);
    bursts
        .iter()
        .copied()
        .filter(|&b| b > 0)
        .try_fold(latest, i64::checked_add)
}

/// Validates a priority array against the workload size.
///
/// Shorter arrays are accepted (missing entries default to 0); longer
/// arrays are a length mismatch.
pub fn validate_priorities(process_count: usize, priority_count: usize) -> ValidationResult {
    if priority_count > process_count {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            format!(
                "Priority count ({priority_count}) exceeds process count ({process_count})"
            ),
        )]);
    }
    Ok(())
}

/// Validates a Round Robin time quantum.
pub fn validate_quantum(quantum: Option<i64>) -> Result<i64, ValidationError> {
    match quantum {
        None => Err(ValidationError::new(
            ValidationErrorKind::MissingQuantum,
            "Round Robin requires a time quantum",
        )),
        Some(q) if q <= 0 => Err(ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {q}"),
        )),
        Some(q) => Ok(q),
    }
}
