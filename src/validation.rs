//! Input validation for request batches.
//!
//! Checks a batch against a declared geometry before scheduling and reports
//! every problem at once rather than stopping at the first. Detects:
//! - Head position outside the disk
//! - Requests outside the disk
//! - Weight/priority lists whose length differs from the batch
//! - Weights that are not positive finite numbers

use crate::models::{Cylinder, Geometry};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Position in the request batch, when the problem is tied to one entry.
    pub index: Option<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Initial head lies outside `[0, disk_size)`.
    HeadOutOfRange,
    /// A request lies outside `[0, disk_size)`.
    OutOfRange,
    /// A parallel list does not match the request count.
    LengthMismatch,
    /// A weight is zero, negative, NaN or infinite.
    InvalidWeight,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, index: Option<usize>, message: impl Into<String>) -> Self {
        Self {
            kind,
            index,
            message: message.into(),
        }
    }
}

/// Checks that every request lies within the geometry.
pub fn validate_requests(requests: &[Cylinder], geometry: &Geometry) -> ValidationResult {
    let errors: Vec<_> = requests
        .iter()
        .enumerate()
        .filter(|&(_, &r)| !geometry.contains(r))
        .map(|(i, &r)| {
            ValidationError::new(
                ValidationErrorKind::OutOfRange,
                Some(i),
                format!(
                    "Request {r} at position {i} is outside [0, {}]",
                    geometry.max_cylinder()
                ),
            )
        })
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks head and requests against the geometry.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_batch(
    requests: &[Cylinder],
    head: Cylinder,
    geometry: &Geometry,
) -> ValidationResult {
    let mut errors = Vec::new();

    if !geometry.contains(head) {
        errors.push(ValidationError::new(
            ValidationErrorKind::HeadOutOfRange,
            None,
            format!(
                "Head position {head} is outside [0, {}]",
                geometry.max_cylinder()
            ),
        ));
    }

    if let Err(mut request_errors) = validate_requests(requests, geometry) {
        errors.append(&mut request_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a weight list against its batch.
pub fn validate_weights(requests: &[Cylinder], weights: &[f64]) -> ValidationResult {
    let mut errors = Vec::new();

    if weights.len() != requests.len() {
        errors.push(ValidationError::new(
            ValidationErrorKind::LengthMismatch,
            None,
            format!(
                "{} weight(s) given for {} request(s)",
                weights.len(),
                requests.len()
            ),
        ));
    }

    for (i, &w) in weights.iter().enumerate() {
        if !(w.is_finite() && w > 0.0) {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidWeight,
                Some(i),
                format!("Weight {w} at position {i} must be positive and finite"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Checks a priority list against its batch.
pub fn validate_priorities(requests: &[Cylinder], priorities: &[i32]) -> ValidationResult {
    if priorities.len() == requests.len() {
        return Ok(());
    }
    Err(vec![ValidationError::new(
        ValidationErrorKind::LengthMismatch,
        None,
        format!(
            "{} priority value(s) given for {} request(s)",
            priorities.len(),
            requests.len()
        ),
    )])
}
