//! Per-school and general statistics reports
//!
//! Reports are computed once from the cube and can then be rendered as text
//! or JSON. A statistic that cannot be computed (all figures missing, or a
//! result that is not a finite integer) is kept as its error and rendered as `n/a` (text) or `null` (JSON), so one missing
//! statistic never hides the others.

use crate::cube::{EnrollmentCube, YEARS};
use crate::directory::SchoolDirectory;
use crate::errors::Result;
use crate::statistics::{
    average, maximum, median_above_threshold, minimum, sum, yearly_totals, ThresholdMedian,
    YearlyTotals,
};
use serde_json::{json, Value as JsonValue};
use std::fmt::Display;
use std::io::{self, Write};

/// Default threshold for the median of large enrollments
pub const DEFAULT_THRESHOLD: f64 = 500.0;

/// Statistics for the selected school
#[derive(Debug, Clone, PartialEq)]
pub struct SchoolReport {
    pub name: String,
    pub code: u32,
    /// Average enrollment over the years for grades 10, 11 and 12
    pub grade_averages: [Result<i64>; 3],
    pub highest: Result<i64>,
    pub lowest: Result<i64>,
    pub yearly_totals: YearlyTotals,
    pub ten_year_total: Result<i64>,
    pub mean_yearly_total: Result<i64>,
    pub threshold: f64,
    pub median_above_threshold: Result<ThresholdMedian>,
}

impl SchoolReport {
    /// Computes the report for the school at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::errors::EnrollmentError::IndexError`] if `index` is not
    /// a valid school index.
    pub fn compute(
        cube: &EnrollmentCube,
        directory: &SchoolDirectory,
        index: usize,
        threshold: f64,
    ) -> Result<Self> {
        let school = directory.school(index)?;
        let grid = cube.slice_school(index)?;

        let grade_average = |grade: usize| -> Result<Result<i64>> {
            Ok(average(cube.grade_column(index, grade)?.iter().copied()))
        };
        let grade_averages = [grade_average(0)?, grade_average(1)?, grade_average(2)?];

        let totals = yearly_totals(cube, index)?;

        Ok(Self {
            name: school.name.clone(),
            code: school.code,
            grade_averages,
            highest: maximum(grid.iter().copied()),
            lowest: minimum(grid.iter().copied()),
            ten_year_total: totals.total(),
            mean_yearly_total: totals.mean(),
            yearly_totals: totals,
            threshold,
            median_above_threshold: median_above_threshold(grid.iter().copied(), threshold),
        })
    }

    /// Writes the human-readable report
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn render_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n***Requested School Statistics***\n")?;
        writeln!(out, "School name: {}", self.name)?;
        writeln!(out, "School code: {}", self.code)?;
        for (grade, avg) in (10..).zip(&self.grade_averages) {
            writeln!(out, "Average Grade {grade} Enrollment: {}", Shown(avg))?;
        }
        writeln!(
            out,
            "Highest enrollment for a single grade for entire time period: {}",
            Shown(&self.highest)
        )?;
        writeln!(
            out,
            "Lowest enrollment for a single grade for entire time period: {}",
            Shown(&self.lowest)
        )?;
        for (year, total) in self.yearly_totals.iter() {
            writeln!(out, "Total Enrollment in {year} was: {}", ShownOpt(total))?;
        }
        writeln!(out, "Total ten year enrollment: {}", Shown(&self.ten_year_total))?;
        writeln!(
            out,
            "Mean total yearly enrollment over {YEARS} years: {}",
            Shown(&self.mean_yearly_total)
        )?;
        match self.median_above_threshold {
            Ok(ThresholdMedian::Median(median)) => writeln!(
                out,
                "Median enrollments for all instances of enrollments greater than {}: {median}",
                self.threshold
            ),
            Ok(ThresholdMedian::NoDataAboveThreshold) => {
                writeln!(out, "No enrollments over {}", self.threshold)
            }
            Err(_) => writeln!(
                out,
                "Median enrollments for all instances of enrollments greater than {}: n/a",
                self.threshold
            ),
        }
    }

    /// The report as a JSON object
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let yearly: Vec<JsonValue> = self
            .yearly_totals
            .iter()
            .map(|(year, total)| json!({ "year": year, "total": total }))
            .collect();

        json!({
            "name": self.name,
            "code": self.code,
            "average_grade_10": ok(&self.grade_averages[0]),
            "average_grade_11": ok(&self.grade_averages[1]),
            "average_grade_12": ok(&self.grade_averages[2]),
            "highest": ok(&self.highest),
            "lowest": ok(&self.lowest),
            "yearly_totals": yearly,
            "ten_year_total": ok(&self.ten_year_total),
            "mean_yearly_total": ok(&self.mean_yearly_total),
            "threshold": self.threshold,
            "median_above_threshold": self
                .median_above_threshold
                .as_ref()
                .ok()
                .and_then(|median| median.value()),
        })
    }
}

/// Statistics across all schools
#[derive(Debug, Clone, PartialEq)]
pub struct GeneralReport {
    pub first_year: i32,
    pub last_year: i32,
    pub mean_first_year: Result<i64>,
    pub mean_last_year: Result<i64>,
    /// Grade 12 total across all schools in the last year
    pub graduating_class: Result<i64>,
    pub highest: Result<i64>,
    pub lowest: Result<i64>,
}

impl GeneralReport {
    /// Computes the report over the whole cube.
    ///
    /// # Errors
    ///
    /// Only fails if the cube axes are shorter than expected, which the cube
    /// constructor rules out.
    pub fn compute(cube: &EnrollmentCube) -> Result<Self> {
        let last = YEARS - 1;
        let full = cube.full_view();

        Ok(Self {
            first_year: cube.year_label(0)?,
            last_year: cube.year_label(last)?,
            mean_first_year: average(cube.slice_year(0)?.iter().copied()),
            mean_last_year: average(cube.slice_year(last)?.iter().copied()),
            graduating_class: sum(cube.year_grade_column(last, 2)?.iter().copied()),
            highest: maximum(full.iter().copied()),
            lowest: minimum(full.iter().copied()),
        })
    }

    /// Writes the human-readable report
    ///
    /// # Errors
    ///
    /// Returns any error raised by `out`.
    pub fn render_text(&self, out: &mut impl Write) -> io::Result<()> {
        writeln!(out, "\n***General Statistics for All Schools***\n")?;
        writeln!(
            out,
            "Mean enrollment in {} was {}",
            self.first_year,
            Shown(&self.mean_first_year)
        )?;
        writeln!(
            out,
            "Mean enrollment in {} was {}",
            self.last_year,
            Shown(&self.mean_last_year)
        )?;
        writeln!(
            out,
            "Total graduating class of {} across all schools was {}",
            self.last_year,
            Shown(&self.graduating_class)
        )?;
        writeln!(
            out,
            "Highest enrollment for a single grade within the entire time period (across all schools) was {}",
            Shown(&self.highest)
        )?;
        writeln!(
            out,
            "Lowest enrollment for a single grade within the entire time period (across all schools) was {}",
            Shown(&self.lowest)
        )
    }

    /// The report as a JSON object
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        json!({
            "first_year": self.first_year,
            "last_year": self.last_year,
            "mean_first_year": ok(&self.mean_first_year),
            "mean_last_year": ok(&self.mean_last_year),
            "graduating_class": ok(&self.graduating_class),
            "highest": ok(&self.highest),
            "lowest": ok(&self.lowest),
        })
    }
}

/// Writes the dimensionality banner for the cube
///
/// # Errors
///
/// Returns any error raised by `out`.
pub fn render_shape(cube: &EnrollmentCube, out: &mut impl Write) -> io::Result<()> {
    let (years, schools, grades) = cube.shape();
    writeln!(out, "Array has {} dimensions.", cube.ndim())?;
    writeln!(out, "Array Shape: ({years}, {schools}, {grades})")
}

fn ok(stat: &Result<i64>) -> Option<i64> {
    stat.as_ref().ok().copied()
}

struct Shown<'a>(&'a Result<i64>);

impl Display for Shown<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        ShownOpt(ok(self.0)).fmt(f)
    }
}

struct ShownOpt(Option<i64>);

impl Display for ShownOpt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{value}"),
            None => write!(f, "n/a"),
        }
    }
}
