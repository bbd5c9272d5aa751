//! Per-year totals for a single school

use super::nan::{average, sum};
use crate::cube::{EnrollmentCube, FIRST_YEAR};
use crate::errors::{EnrollmentError, Result};

/// Sum of the three grades for each year, in chronological order.
///
/// A year where all three grades are missing has no total and is skipped by
/// [`YearlyTotals::total`] and [`YearlyTotals::mean`]. A year whose sum is not
/// a finite `i64` has no total either, and makes both of them fail.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyTotals {
    totals: Vec<Result<Option<i64>>>,
}

impl YearlyTotals {
    /// `(calendar year, total)` pairs
    pub fn iter(&self) -> impl Iterator<Item = (i32, Option<i64>)> + '_ {
        self.totals.iter().enumerate().map(|(offset, total)| {
            let total = total.as_ref().ok().copied().flatten();
            (FIRST_YEAR + offset as i32, total)
        })
    }

    /// Totals by year-axis index
    #[must_use]
    pub fn to_vec(&self) -> Vec<Option<i64>> {
        self.iter().map(|(_, total)| total).collect()
    }

    /// Ten-year total over the years that have one
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::EmptyAggregateError`] if no year has a total,
    /// or [`EnrollmentError::NonFiniteAggregateError`] if a year total or the
    /// ten-year total is not a finite `i64`.
    pub fn total(&self) -> Result<i64> {
        let present = self.present()?;
        let (first, rest) = present
            .split_first()
            .ok_or(EnrollmentError::EmptyAggregateError { operation: "sum" })?;
        rest.iter()
            .try_fold(*first, |acc, &total| acc.checked_add(total))
            .ok_or(EnrollmentError::NonFiniteAggregateError { operation: "sum" })
    }

    /// Mean yearly total, truncated toward zero
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::EmptyAggregateError`] if no year has a total,
    /// or [`EnrollmentError::NonFiniteAggregateError`] if a year total is not a
    /// finite `i64`.
    #[allow(clippy::cast_precision_loss)]
    pub fn mean(&self) -> Result<i64> {
        average(self.present()?.into_iter().map(|t| t as f64))
    }

    fn present(&self) -> Result<Vec<i64>> {
        let mut present = Vec::with_capacity(self.totals.len());
        for total in &self.totals {
            if let Some(total) = total.clone()? {
                present.push(total);
            }
        }
        Ok(present)
    }
}

/// Computes the per-year totals of one school.
///
/// # Errors
///
/// Returns [`EnrollmentError::IndexError`] if `school` is out of range.
pub fn yearly_totals(cube: &EnrollmentCube, school: usize) -> Result<YearlyTotals> {
    let grid = cube.slice_school(school)?;
    let totals: Vec<Result<Option<i64>>> = grid
        .outer_iter()
        .map(|year| {
            if year.iter().all(|v| v.is_nan()) {
                Ok(None)
            } else {
                sum(year.iter().copied()).map(Some)
            }
        })
        .collect();

    log::debug!("Yearly totals for school index {school}: {totals:?}");
    Ok(YearlyTotals { totals })
}
