//! NaN-skipping statistics over enrollment figures
//!
//! Every reduction accepts any finite sequence of `f64`, treats `NaN` as a
//! missing figure and returns an `i64` truncated toward zero. Callers decide
//! which slice of the cube to flatten into the sequence.
//!
//! # Organization
//!
//! - [`nan`]: the NaN-skipping reductions themselves
//! - [`operations`]: the [`StatOperation`] selector and dispatch
//! - [`totals`]: per-year totals for a single school

pub mod nan;
pub mod operations;
pub mod totals;

pub use nan::{average, maximum, median, median_above_threshold, minimum, sum, ThresholdMedian};
pub use operations::{reduce, StatOperation};
pub use totals::{yearly_totals, YearlyTotals};
