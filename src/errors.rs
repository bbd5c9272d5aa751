//! Centralized error handling for enrollment statistics
//!
//! This module provides the structured error type shared by the cube, the
//! statistics engine and the school directory.

use std::fmt;

/// Main error type for enrollment statistics operations
#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentError {
    /// Input dataset does not have the expected shape
    ShapeError { message: String },

    /// Axis index outside the cube bounds
    IndexError {
        axis: &'static str,
        index: usize,
        len: usize,
    },

    /// User selection matched neither a school code nor a school name
    UnknownSchoolError { input: String },

    /// Aggregate requested over input holding no present values
    EmptyAggregateError { operation: &'static str },

    /// Aggregate result is infinite, undefined or outside the `i64` range
    NonFiniteAggregateError { operation: &'static str },

    /// School directory entries are inconsistent
    InvalidDirectory { message: String },
}

impl EnrollmentError {
    /// True for errors a prompt loop can recover from by asking again
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnknownSchoolError { .. })
    }
}

impl fmt::Display for EnrollmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnrollmentError::ShapeError { message } => write!(f, "Shape error: {message}"),
            EnrollmentError::IndexError { axis, index, len } => {
                write!(f, "Index {index} is out of range for {axis} axis of length {len}")
            }
            EnrollmentError::UnknownSchoolError { .. } => {
                write!(f, "Not a valid school name or school code. Please try again.")
            }
            EnrollmentError::EmptyAggregateError { operation } => {
                write!(f, "Cannot compute {operation}: no enrollment values present")
            }
            EnrollmentError::NonFiniteAggregateError { operation } => {
                write!(f, "Cannot compute {operation}: result is not a finite integer")
            }
            EnrollmentError::InvalidDirectory { message } => {
                write!(f, "Invalid school directory: {message}")
            }
        }
    }
}

impl std::error::Error for EnrollmentError {}

impl From<ndarray::ShapeError> for EnrollmentError {
    fn from(error: ndarray::ShapeError) -> Self {
        EnrollmentError::ShapeError {
            message: error.to_string(),
        }
    }
}

/// Result type alias for enrollment statistics operations
pub type Result<T> = std::result::Result<T, EnrollmentError>;
