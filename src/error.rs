//! Tracker Errors
//!
//! Failures surfaced by form validation, deletes and select-box parsing.

use crate::models::JobId;

/// Common result type for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    /// A required form field was empty
    MissingField(&'static str),
    /// No job with this id is in the list
    NotFound(JobId),
    InvalidStatus(String),
    InvalidSortMode(String),
}

impl std::fmt::Display for TrackerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TrackerError::MissingField(field) => write!(f, "Missing required field: {}", field),
            TrackerError::NotFound(id) => write!(f, "Job not found: {}", id),
            TrackerError::InvalidStatus(value) => write!(f, "Invalid status: {}", value),
            TrackerError::InvalidSortMode(value) => write!(f, "Invalid sort mode: {}", value),
        }
    }
}

impl std::error::Error for TrackerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_offending_value() {
        assert_eq!(
            TrackerError::MissingField("company").to_string(),
            "Missing required field: company"
        );
        assert_eq!(
            TrackerError::NotFound(JobId::from_millis(42)).to_string(),
            "Job not found: 42"
        );
    }
}
