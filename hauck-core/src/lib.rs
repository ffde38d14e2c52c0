//! Hauck Core - the proportion comparison calculator.
//!
//! Computes the Hauck-Anderson continuity-corrected Z statistic for two
//! independent binomial proportions, derives the p-value for a one- or
//! two-tailed test, and applies a Bonferroni adjustment for the number of
//! comparisons performed.
//!
//! ```
//! use hauck_core::{hauck_anderson_test, ComparisonInput, TestMode};
//!
//! let input = ComparisonInput::from_raw(0.5, 30, 0.3, 30, TestMode::TwoTailed, 1).unwrap();
//! let result = hauck_anderson_test(&input).unwrap();
//! assert!((result.z - 1.7497).abs() < 1e-3);
//! ```
//!
//! The [`about`] module carries the static reference text shown next to the
//! calculator; it has no coupling to the computation.

#![warn(clippy::all)]
#![allow(clippy::pedantic)]

pub mod about;
pub mod bonferroni;
pub mod error;
pub mod input;
pub mod normal;
pub mod report;
pub mod ztest;

pub use about::{AboutPanel, AboutSection, ABOUT};
pub use bonferroni::{bonferroni_adjust, is_significant, DEFAULT_ALPHA};
pub use error::{CalcError, CalcResult};
pub use input::{
    ComparisonCount, ComparisonInput, Direction, Group, Proportion, SampleSize, TestMode,
    MAX_SAMPLE_SIZE,
};
pub use report::Report;
pub use ztest::{hauck_anderson_test, p_value, z_statistic, TestResult, ZStatistic};
