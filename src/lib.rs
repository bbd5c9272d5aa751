//! enrollment_stats: descriptive statistics over high-school grade enrollment
//!
//! The library holds ten years (2013–2022) of grade 10, 11 and 12 enrollment
//! for twenty schools in a year × school × grade cube, and computes NaN-skipping
//! statistics (mean, sum, minimum, maximum, median) over any slice of it.
//!
//! ## Module Organization
//!
//! - [`cube`]: the immutable enrollment cube and its read-only views
//! - [`statistics`]: NaN-skipping reductions and per-year totals
//! - [`directory`]: school codes and names, and selection resolution
//! - [`dataset`]: the bundled enrollment figures
//! - [`report`]: per-school and general reports with text and JSON rendering
//! - [`prompt`]: interactive school selection
//! - [`errors`]: centralized error handling
//!
//! ## Usage Example
//!
//! ```rust
//! use enrollment_stats::prelude::*;
//!
//! let cube = enrollment_stats::dataset::load_cube().unwrap();
//! let directory = SchoolDirectory::calgary();
//!
//! let index = directory.resolve("1224").unwrap();
//! let report = SchoolReport::compute(&cube, &directory, index, 500.0).unwrap();
//! assert_eq!(report.name, "Centennial High School");
//! ```

// Core modules
pub mod cube;
pub mod directory;
pub mod errors;
pub mod statistics;

// Surrounding modules
pub mod cli;
pub mod dataset;
pub mod prompt;
pub mod report;

// Direct re-exports for the public API
pub use cube::EnrollmentCube;
pub use directory::{School, SchoolDirectory};
pub use errors::{EnrollmentError, Result};

// High-level convenience API
pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::cube::EnrollmentCube;
    pub use crate::directory::{School, SchoolDirectory};
    pub use crate::errors::{EnrollmentError, Result};
    pub use crate::report::{GeneralReport, SchoolReport};
    pub use crate::statistics::{StatOperation, ThresholdMedian, YearlyTotals};
}
