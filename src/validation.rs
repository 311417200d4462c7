//! Input validation for simulation runs.
//!
//! Checks a process batch and a scheduler configuration before a run
//! begins, so an invalid setup is rejected up front instead of producing
//! an endless or empty simulation. Detects:
//! - Duplicate process IDs
//! - Burst times below one tick
//! - Negative arrival times
//! - Round Robin quanta below one tick
//!
//! All issues are collected, not just the first.

use std::collections::HashSet;
use std::fmt;

use crate::algorithms::SchedulerConfig;
use crate::models::Process;

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
    /// Two processes share the same ID.
    DuplicateId,
    /// A process needs fewer than one tick of CPU time.
    InvalidBurstTime,
    /// A process arrives before t=0.
    InvalidArrivalTime,
    /// The Round Robin quantum is below one tick.
    InvalidQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
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

/// Errors returned by scheduler commands.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// The processes or configuration were rejected before the run.
    InvalidConfiguration(Vec<ValidationError>),
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidConfiguration(errors) => {
                write!(f, "invalid configuration: ")?;
                for (i, e) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, "; ")?;
                    }
                    write!(f, "{e}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for SimulationError {}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        SimulationError::InvalidConfiguration(errors)
    }
}

/// Validates a process batch.
///
/// Checks:
/// 1. No duplicate process IDs
/// 2. Every burst time is at least 1
/// 3. No arrival time is negative
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();
    let mut ids = HashSet::new();

    for p in processes {
        if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }
        errors.extend(check_process(p));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a process about to join an existing batch.
pub fn validate_addition(existing: &[Process], process: &Process) -> ValidationResult {
    let mut errors = check_process(process);
    if existing.iter().any(|p| p.id == process.id) {
        errors.push(ValidationError::new(
            ValidationErrorKind::DuplicateId,
            format!("Duplicate process ID: {}", process.id),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates scheduler configuration.
pub fn validate_config(config: &SchedulerConfig) -> ValidationResult {
    if config.quantum < 1 {
        return Err(vec![ValidationError::new(
            ValidationErrorKind::InvalidQuantum,
            format!("Quantum must be at least 1, got {}", config.quantum),
        )]);
    }
    Ok(())
}

fn check_process(p: &Process) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    if p.burst_time < 1 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidBurstTime,
            format!(
                "Process '{}' has burst time {}, must be at least 1",
                p.name, p.burst_time
            ),
        ));
    }
    if p.arrival_time < 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvalidArrivalTime,
            format!(
                "Process '{}' arrives at {}, must not be negative",
                p.name, p.arrival_time
            ),
        ));
    }
    errors
}
