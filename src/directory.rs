//! School directory and selection resolution
//!
//! Directory order defines the school axis of the enrollment cube: entry `i`
//! holds the code and name of school-axis index `i`.

use crate::cube::SCHOOLS;
use crate::errors::{EnrollmentError, Result};
use std::collections::HashSet;

/// A single school
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct School {
    pub code: u32,
    pub name: String,
}

impl School {
    /// Create a school entry
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

/// Ordered, validated list of schools
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchoolDirectory {
    schools: Vec<School>,
}

const CALGARY_SCHOOLS: [(u32, &str); SCHOOLS] = [
    (1224, "Centennial High School"),
    (1679, "Robert Thirsk School"),
    (9626, "Louise Dean School"),
    (9806, "Queen Elizabeth High School"),
    (9813, "Forest Lawn High School"),
    (9815, "Crescent Heights High School"),
    (9816, "Western Canada High School"),
    (9823, "Central Memorial High School"),
    (9825, "James Fowler High School"),
    (9826, "Ernest Manning High School"),
    (9829, "William Aberhart High School"),
    (9830, "National Sport School"),
    (9836, "Henry Wise Wood High School"),
    (9847, "Bowness High School"),
    (9850, "Lord Beaverbrook High School"),
    (9856, "Jack James High School"),
    (9857, "Sir Winston Churchill High School"),
    (9858, "Dr. E. P. Scarlett High School"),
    (9860, "John G Diefenbaker High School"),
    (9865, "Lester B. Pearson High School"),
];

impl SchoolDirectory {
    /// Builds a directory from entries in school-axis order.
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::InvalidDirectory`] unless there are exactly
    /// 20 entries with positive unique codes and non-empty unique names.
    pub fn new(schools: Vec<School>) -> Result<Self> {
        if schools.len() != SCHOOLS {
            return Err(EnrollmentError::InvalidDirectory {
                message: format!("expected {SCHOOLS} schools, got {}", schools.len()),
            });
        }

        let mut codes = HashSet::new();
        let mut names = HashSet::new();
        for school in &schools {
            if school.code == 0 {
                return Err(EnrollmentError::InvalidDirectory {
                    message: format!("school '{}' has code 0", school.name),
                });
            }
            if school.name.is_empty() {
                return Err(EnrollmentError::InvalidDirectory {
                    message: format!("school {} has an empty name", school.code),
                });
            }
            if !codes.insert(school.code) {
                return Err(EnrollmentError::InvalidDirectory {
                    message: format!("duplicate school code {}", school.code),
                });
            }
            if !names.insert(school.name.as_str()) {
                return Err(EnrollmentError::InvalidDirectory {
                    message: format!("duplicate school name '{}'", school.name),
                });
            }
        }

        Ok(Self { schools })
    }

    /// The twenty bundled Calgary high schools
    #[must_use]
    pub fn calgary() -> Self {
        Self {
            schools: CALGARY_SCHOOLS
                .iter()
                .map(|&(code, name)| School::new(code, name))
                .collect(),
        }
    }

    /// Number of schools
    #[must_use]
    pub fn len(&self) -> usize {
        self.schools.len()
    }

    /// True if the directory holds no schools
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.schools.is_empty()
    }

    /// School at a school-axis index
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::IndexError`] if `index` is out of range.
    pub fn school(&self, index: usize) -> Result<&School> {
        self.schools
            .get(index)
            .ok_or(EnrollmentError::IndexError {
                axis: "school",
                index,
                len: self.schools.len(),
            })
    }

    /// Schools in school-axis order
    pub fn iter(&self) -> impl Iterator<Item = &School> {
        self.schools.iter()
    }

    /// Resolves a user selection to a school-axis index.
    ///
    /// A selection that parses as an integer and matches a known code wins
    /// outright. Otherwise the raw input is compared, case-sensitively, with
    /// the school names.
    ///
    /// # Errors
    ///
    /// Returns [`EnrollmentError::UnknownSchoolError`] if neither stage matches.
    pub fn resolve(&self, input: &str) -> Result<usize> {
        let by_code = input
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|code| self.schools.iter().position(|s| i64::from(s.code) == code));

        match by_code {
            Some(index) => {
                log::debug!("Resolved '{input}' by school code to index {index}");
                Ok(index)
            }
            None => match self.schools.iter().position(|s| s.name == input) {
                Some(index) => {
                    log::debug!("Resolved '{input}' by school name to index {index}");
                    Ok(index)
                }
                None => Err(EnrollmentError::UnknownSchoolError {
                    input: input.to_string(),
                }),
            },
        }
    }
}

impl Default for SchoolDirectory {
    fn default() -> Self {
        Self::calgary()
    }
}
