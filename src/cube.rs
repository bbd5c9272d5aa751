//! Year × school × grade enrollment cube
//!
//! The cube owns a single contiguous buffer of `YEARS * SCHOOLS * GRADES`
//! values in row-major order, so the value for `(year, school, grade)` lives at
//! `(year * SCHOOLS + school) * GRADES + grade`. `ndarray` only describes that
//! layout and hands out read-only views; no arithmetic is done through it.

use crate::errors::{EnrollmentError, Result};
use ndarray::{Array3, ArrayView1, ArrayView2, ArrayView3, Axis};

/// Number of years covered by the dataset
pub const YEARS: usize = 10;
/// Number of schools in the directory
pub const SCHOOLS: usize = 20;
/// Grades 10, 11 and 12
pub const GRADES: usize = 3;
/// Calendar year of year-axis index 0
pub const FIRST_YEAR: i32 = 2013;
/// Number of values in one yearly collection
pub const VALUES_PER_YEAR: usize = SCHOOLS * GRADES;

/// Immutable enrollment counts indexed by (year, school, grade).
///
/// Missing figures are stored as `NaN` and pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentCube {
    data: Array3<f64>,
}

impl EnrollmentCube {
    /// Builds the cube from ten yearly collections of 60 values each.
    ///
    /// Each collection is split into twenty groups of three: group `i` becomes
    /// school index `i` and its values grades 10, 11 and 12 in input order.
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::ShapeError`] if there are not exactly ten
    /// collections or any collection does not hold exactly 60 values.
    pub fn from_years<Y: AsRef<[f64]>>(years: &[Y]) -> Result<Self> {
        if years.len() != YEARS {
            return Err(EnrollmentError::ShapeError {
                message: format!(
                    "expected {YEARS} yearly collections, got {}",
                    years.len()
                ),
            });
        }

        let mut flat = Vec::with_capacity(YEARS * VALUES_PER_YEAR);
        for (offset, year) in years.iter().enumerate() {
            let values = year.as_ref();
            if values.len() != VALUES_PER_YEAR {
                return Err(EnrollmentError::ShapeError {
                    message: format!(
                        "collection for {} holds {} values, expected {VALUES_PER_YEAR}",
                        FIRST_YEAR + offset as i32,
                        values.len()
                    ),
                });
            }
            flat.extend_from_slice(values);
        }

        let data = Array3::from_shape_vec((YEARS, SCHOOLS, GRADES), flat)?;
        log::debug!(
            "Built enrollment cube with shape {:?} ({} missing values)",
            data.shape(),
            data.iter().filter(|v| v.is_nan()).count()
        );

        Ok(Self { data })
    }

    /// Number of axes, always 3
    #[must_use]
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Per-axis lengths as `(years, schools, grades)`
    #[must_use]
    pub fn shape(&self) -> (usize, usize, usize) {
        self.data.dim()
    }

    /// Calendar year for a year-axis index
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::IndexError`] if `year` is out of range.
    pub fn year_label(&self, year: usize) -> Result<i32> {
        check_index("year", year, YEARS)?;
        Ok(FIRST_YEAR + year as i32)
    }

    /// Single enrollment figure, possibly `NaN`
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::IndexError`] if any index is out of range.
    pub fn value_at(&self, year: usize, school: usize, grade: usize) -> Result<f64> {
        check_index("year", year, YEARS)?;
        check_index("school", school, SCHOOLS)?;
        check_index("grade", grade, GRADES)?;
        Ok(self.data[[year, school, grade]])
    }

    /// One school's figures as a years × grades view
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::IndexError`] if `school` is out of range.
    pub fn slice_school(&self, school: usize) -> Result<ArrayView2<'_, f64>> {
        check_index("school", school, SCHOOLS)?;
        Ok(self.data.index_axis(Axis(1), school))
    }

    /// One year's figures as a schools × grades view
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::IndexError`] if `year` is out of range.
    pub fn slice_year(&self, year: usize) -> Result<ArrayView2<'_, f64>> {
        check_index("year", year, YEARS)?;
        Ok(self.data.index_axis(Axis(0), year))
    }

    /// One grade of one school across all years
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::IndexError`] if `school` or `grade` is out of range.
    pub fn grade_column(&self, school: usize, grade: usize) -> Result<ArrayView1<'_, f64>> {
        check_index("grade", grade, GRADES)?;
        Ok(self.slice_school(school)?.index_axis_move(Axis(1), grade))
    }

    /// One grade across all schools in a single year
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::IndexError`] if `year` or `grade` is out of range.
    pub fn year_grade_column(&self, year: usize, grade: usize) -> Result<ArrayView1<'_, f64>> {
        check_index("grade", grade, GRADES)?;
        Ok(self.slice_year(year)?.index_axis_move(Axis(1), grade))
    }

    /// The whole cube
    #[must_use]
    pub fn full_view(&self) -> ArrayView3<'_, f64> {
        self.data.view()
    }
}

fn check_index(axis: &'static str, index: usize, len: usize) -> Result<()> {
    if index < len {
        Ok(())
    } else {
        Err(EnrollmentError::IndexError { axis, index, len })
    }
}
