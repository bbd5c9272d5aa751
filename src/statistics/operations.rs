//! Statistic selector and dispatch
//!
//! This module lets callers pick a reduction at runtime, for example from a
//! report definition, while the reductions themselves live in [`super::nan`].

use crate::errors::Result;

/// Supported statistical operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatOperation {
    /// Arithmetic mean
    Mean,
    /// Sum of values
    Sum,
    /// Minimum value
    Min,
    /// Maximum value
    Max,
    /// Median value
    Median,
}

impl StatOperation {
    /// Get the string representation of the operation
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Sum => "sum",
            Self::Min => "minimum",
            Self::Max => "maximum",
            Self::Median => "median",
        }
    }
}

/// Apply `operation` to `values`, skipping `NaN` entries.
///
/// # Errors
///
/// Returns [`crate::errors::EnrollmentError::EmptyAggregateError`] if no value
/// is present.
pub fn reduce(values: impl IntoIterator<Item = f64>, operation: StatOperation) -> Result<i64> {
    match operation {
        StatOperation::Mean => super::nan::average(values),
        StatOperation::Sum => super::nan::sum(values),
        StatOperation::Min => super::nan::minimum(values),
        StatOperation::Max => super::nan::maximum(values),
        StatOperation::Median => super::nan::median(values),
    }
}
