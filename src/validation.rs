//! Input validation for scheduling simulations.
//!
//! Checks structural integrity of a process set before simulation. Detects:
//! - Empty process sets
//! - Duplicate process IDs
//! - Negative arrival times
//! - Non-positive burst durations (a process that would never terminate)
//! - Non-positive round-robin quanta
//!
//! All problems are collected and reported together; the engines refuse to
//! run on any invalid input.

use std::collections::HashSet;

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
    /// The process set is empty.
    EmptyInput,
    /// Two processes share the same ID.
    DuplicateId,
    /// A process arrives before the simulation epoch.
    NegativeArrival,
    /// A process requires zero or negative CPU time.
    NonPositiveBurst,
    /// The round-robin quantum grants no CPU time per dispatch.
    NonPositiveQuantum,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the process set for a simulation run.
///
/// Checks:
/// 1. The set is non-empty
/// 2. No duplicate process IDs
/// 3. All arrival times are >= 0
/// 4. All burst durations are > 0
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_processes(processes: &[Process]) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "process set is empty",
        ));
    }

    let mut ids = HashSet::new();
    for process in processes {
        if !ids.insert(process.id.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", process.id),
            ));
        }

        if process.arrival < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NegativeArrival,
                format!(
                    "Process '{}' has negative arrival time {}",
                    process.id, process.arrival
                ),
            ));
        }

        if process.burst <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::NonPositiveBurst,
                format!(
                    "Process '{}' has non-positive burst duration {}",
                    process.id, process.burst
                ),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a round-robin time quantum.
pub fn validate_quantum(quantum: i64) -> ValidationResult {
    if quantum > 0 {
        Ok(())
    } else {
        Err(vec![ValidationError::new(
            ValidationErrorKind::NonPositiveQuantum,
            format!("Time quantum must be positive, got {quantum}"),
        )])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input() {
        let processes = vec![
            Process::new("P1", 0, 5),
            Process::new("P2", 1, 3).with_priority(2),
        ];
        assert!(validate_processes(&processes).is_ok());
    }

    #[test]
    fn test_empty_input() {
        let errors = validate_processes(&[]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind, ValidationErrorKind::EmptyInput);
    }

    #[test]
    fn test_duplicate_id() {
        let processes = vec![Process::new("P1", 0, 5), Process::new("P1", 1, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        assert!(errors
            .iter()
            .any(|e| e.kind == ValidationErrorKind::DuplicateId));
    }

    #[test]
    fn test_negative_arrival() {
        let errors = validate_processes(&[Process::new("P1", -1, 5)]).unwrap_err();
        assert_eq!(errors[0].kind, ValidationErrorKind::NegativeArrival);
    }

    #[test]
    fn test_non_positive_burst() {
        for burst in [0, -4] {
            let errors = validate_processes(&[Process::new("P1", 0, burst)]).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveBurst);
        }
    }

    #[test]
    fn test_collects_all_errors() {
        let processes = vec![Process::new("P1", -2, 0), Process::new("P1", 0, 3)];
        let errors = validate_processes(&processes).unwrap_err();
        // Negative arrival + zero burst on the first, duplicate ID on the second.
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_quantum() {
        assert!(validate_quantum(4).is_ok());
        assert!(validate_quantum(1).is_ok());
        for quantum in [0, -3] {
            let errors = validate_quantum(quantum).unwrap_err();
            assert_eq!(errors[0].kind, ValidationErrorKind::NonPositiveQuantum);
        }
    }
}
