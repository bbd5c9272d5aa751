//! NaN-skipping reductions
//!
//! All functions ignore `NaN` entries. When nothing is left after skipping,
//! they fail with [`EnrollmentError::EmptyAggregateError`] instead of
//! returning a made-up number. A reduced value that is infinite, undefined
//! (such as `INFINITY + NEG_INFINITY`) or outside the `i64` range fails with
//! [`EnrollmentError::NonFiniteAggregateError`].

use crate::errors::{EnrollmentError, Result};

/// Outcome of [`median_above_threshold`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThresholdMedian {
    /// Truncated median of the values above the threshold
    Median(i64),
    /// No present value exceeded the threshold
    NoDataAboveThreshold,
}

impl ThresholdMedian {
    /// The median, if one exists
    #[must_use]
    pub const fn value(self) -> Option<i64> {
        match self {
            Self::Median(v) => Some(v),
            Self::NoDataAboveThreshold => None,
        }
    }
}

/// NaN-skipping arithmetic mean, truncated toward zero.
///
/// # Errors
///
/// Returns [`EnrollmentError::EmptyAggregateError`] if no value is present.
/// Returns [`EnrollmentError::NonFiniteAggregateError`] if the result is not a finite `i64`.
pub fn average(values: impl IntoIterator<Item = f64>) -> Result<i64> {
    // Accumulate in f64 with a separate count, skipping missing figures
    let (total, count) = present(values).fold((0.0_f64, 0_usize), |(total, count), x| {
        (total + x, count + 1)
    });
    if count == 0 {
        return Err(empty("mean"));
    }
    truncate(total / count as f64, "mean")
}

/// NaN-skipping sum, truncated toward zero.
///
/// # Errors
///
/// Returns [`EnrollmentError::EmptyAggregateError`] if no value is present.
/// Returns [`EnrollmentError::NonFiniteAggregateError`] if the result is not a finite `i64`.
pub fn sum(values: impl IntoIterator<Item = f64>) -> Result<i64> {
    let (total, count) = present(values).fold((0.0_f64, 0_usize), |(total, count), x| {
        (total + x, count + 1)
    });
    if count == 0 {
        return Err(empty("sum"));
    }
    truncate(total, "sum")
}

/// NaN-skipping maximum, truncated toward zero.
///
/// # Errors
///
/// Returns [`EnrollmentError::EmptyAggregateError`] if no value is present.
/// Returns [`EnrollmentError::NonFiniteAggregateError`] if the result is not a finite `i64`.
pub fn maximum(values: impl IntoIterator<Item = f64>) -> Result<i64> {
    present(values)
        .reduce(f64::max)
        .ok_or_else(|| empty("maximum"))
        .and_then(|value| truncate(value, "maximum"))
}

/// NaN-skipping minimum, truncated toward zero.
///
/// # Errors
///
/// Returns [`EnrollmentError::EmptyAggregateError`] if no value is present.
/// Returns [`EnrollmentError::NonFiniteAggregateError`] if the result is not a finite `i64`.
pub fn minimum(values: impl IntoIterator<Item = f64>) -> Result<i64> {
    present(values)
        .reduce(f64::min)
        .ok_or_else(|| empty("minimum"))
        .and_then(|value| truncate(value, "minimum"))
}

/// NaN-skipping median, truncated toward zero.
///
/// Even-sized inputs take the mean of the two middle values.
///
/// # Errors
///
/// Returns [`EnrollmentError::EmptyAggregateError`] if no value is present.
/// Returns [`EnrollmentError::NonFiniteAggregateError`] if the result is not a finite `i64`.
pub fn median(values: impl IntoIterator<Item = f64>) -> Result<i64> {
    middle(present(values).collect())
        .ok_or_else(|| empty("median"))
        .and_then(|value| truncate(value, "median"))
}

/// Median of the present values strictly greater than `threshold`.
///
/// An empty selection is a normal outcome and is reported as
/// [`ThresholdMedian::NoDataAboveThreshold`].
///
/// # Errors
///
/// Returns [`EnrollmentError::NonFiniteAggregateError`] if the median is not a finite `i64`.
pub fn median_above_threshold(
    values: impl IntoIterator<Item = f64>,
    threshold: f64,
) -> Result<ThresholdMedian> {
    // NaN compares false, so missing figures never pass the mask
    let above: Vec<f64> = values.into_iter().filter(|&x| x > threshold).collect();
    match middle(above) {
        Some(value) => truncate(value, "median").map(ThresholdMedian::Median),
        None => Ok(ThresholdMedian::NoDataAboveThreshold),
    }
}

fn middle(mut values: Vec<f64>) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    values.sort_by(f64::total_cmp);

    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        Some((values[mid - 1] + values[mid]) / 2.0)
    } else {
        Some(values[mid])
    }
}

fn present(values: impl IntoIterator<Item = f64>) -> impl Iterator<Item = f64> {
    values.into_iter().filter(|x| !x.is_nan())
}

/// 2^63, the first `f64` past `i64::MAX`
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

#[allow(clippy::cast_possible_truncation)]
fn truncate(value: f64, operation: &'static str) -> Result<i64> {
    let value = value.trunc();
    // NaN and both infinities fail the range check too
    if (-I64_LIMIT..I64_LIMIT).contains(&value) {
        Ok(value as i64)
    } else {
        log::warn!("Cannot represent {operation} result {value} as an integer");
        Err(EnrollmentError::NonFiniteAggregateError { operation })
    }
}

fn empty(operation: &'static str) -> EnrollmentError {
    log::warn!("No present values to compute {operation} over");
    EnrollmentError::EmptyAggregateError { operation }
}
