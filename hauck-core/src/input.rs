//! Validated calculator inputs.
//!
//! Every front end builds one immutable [`ComparisonInput`] and passes it to
//! the calculator. Range checks live in the newtype constructors, so a value
//! that exists has already been validated.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{CalcError, CalcResult};

/// Largest accepted sample size or comparison count.
pub const MAX_SAMPLE_SIZE: u32 = 9999;

/// A proportion in the closed interval [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Proportion(f64);

impl Proportion {
    pub fn try_new(field: &str, value: f64) -> CalcResult<Self> {
        if value.is_nan() || !(0.0..=1.0).contains(&value) {
            return Err(CalcError::out_of_range(
                field,
                value,
                "must be a decimal between 0.0 and 1.0",
            ));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> f64 {
        self.0
    }
}

/// A sample size in [1, MAX_SAMPLE_SIZE].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SampleSize(u32);

impl SampleSize {
    pub fn try_new(field: &str, value: u32) -> CalcResult<Self> {
        check_count(field, value).map(Self)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

/// Number of comparisons used as the Bonferroni multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ComparisonCount(u32);

impl ComparisonCount {
    pub fn try_new(value: u32) -> CalcResult<Self> {
        check_count("numberOfTests", value).map(Self)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl Default for ComparisonCount {
    fn default() -> Self {
        Self(1)
    }
}

fn check_count(field: &str, value: u32) -> CalcResult<u32> {
    if value == 0 || value > MAX_SAMPLE_SIZE {
        return Err(CalcError::out_of_range(
            field,
            value,
            format!("must be an integer between 1 and {MAX_SAMPLE_SIZE}"),
        ));
    }
    Ok(value)
}

/// Alternative hypothesis for a one-tailed test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Direction {
    /// p1 is smaller than p2
    LessThan,
    /// p1 is larger than p2
    GreaterThan,
}

impl Direction {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::LessThan => "less-than",
            Self::GreaterThan => "greater-than",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "less-than" | "less_than" => Ok(Self::LessThan),
            "greater-than" | "greater_than" => Ok(Self::GreaterThan),
            other => Err(CalcError::out_of_range(
                "direction",
                other,
                "must be \"less-than\" or \"greater-than\"",
            )),
        }
    }
}

/// Test mode. A direction only exists for one-tailed tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestMode {
    TwoTailed,
    OneTailed(Direction),
}

impl TestMode {
    /// Build a mode from the form's `testType` and optional `direction`.
    ///
    /// The direction is ignored for two-tailed tests and required for
    /// one-tailed ones.
    pub fn parse(test_type: &str, direction: Option<&str>) -> CalcResult<Self> {
        match test_type.trim() {
            "two-tailed" => Ok(Self::TwoTailed),
            "one-tailed" => match direction.map(str::trim).filter(|d| !d.is_empty()) {
                Some(d) => Ok(Self::OneTailed(d.parse()?)),
                None => Err(CalcError::MissingField {
                    field: "direction".into(),
                }),
            },
            other => Err(CalcError::out_of_range(
                "testType",
                other,
                "must be \"one-tailed\" or \"two-tailed\"",
            )),
        }
    }

    /// Form value of the mode (`"one-tailed"` / `"two-tailed"`).
    pub const fn kind(self) -> &'static str {
        match self {
            Self::TwoTailed => "two-tailed",
            Self::OneTailed(_) => "one-tailed",
        }
    }

    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::TwoTailed => None,
            Self::OneTailed(d) => Some(d),
        }
    }
}

impl fmt::Display for TestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TwoTailed => f.write_str("two-tailed"),
            Self::OneTailed(d) => write!(f, "one-tailed ({d})"),
        }
    }
}

/// One sample: observed proportion and its size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Group {
    pub proportion: Proportion,
    pub sample_size: SampleSize,
}

/// Everything the calculator needs, validated once.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonInput {
    pub group1: Group,
    pub group2: Group,
    pub mode: TestMode,
    pub comparisons: ComparisonCount,
}

impl ComparisonInput {
    /// Validate raw numbers into an input. Field names in errors follow the
    /// form (`p1`, `n1`, `p2`, `n2`, `numberOfTests`).
    pub fn from_raw(
        p1: f64,
        n1: u32,
        p2: f64,
        n2: u32,
        mode: TestMode,
        comparisons: u32,
    ) -> CalcResult<Self> {
        Ok(Self {
            group1: Group {
                proportion: Proportion::try_new("p1", p1)?,
                sample_size: SampleSize::try_new("n1", n1)?,
            },
            group2: Group {
                proportion: Proportion::try_new("p2", p2)?,
                sample_size: SampleSize::try_new("n2", n2)?,
            },
            mode,
            comparisons: ComparisonCount::try_new(comparisons)?,
        })
    }

    /// The same comparison with the two groups exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            group1: self.group2,
            group2: self.group1,
            ..*self
        }
    }

    pub fn with_mode(&self, mode: TestMode) -> Self {
        Self { mode, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(-0.01 ; "below zero")]
    #[test_case(1.01 ; "above one")]
    #[test_case(f64::NAN ; "nan")]
    #[test_case(f64::INFINITY ; "infinite")]
    fn test_proportion_rejects(value: f64) {
        let err = Proportion::try_new("p1", value).unwrap_err();
        assert!(matches!(err, CalcError::InputOutOfRange { ref field, .. } if field == "p1"));
    }

    #[test]
    fn test_proportion_accepts_bounds() {
        assert_eq!(Proportion::try_new("p1", 0.0).unwrap().value(), 0.0);
        assert_eq!(Proportion::try_new("p1", 1.0).unwrap().value(), 1.0);
    }

    #[test_case(0 ; "zero")]
    #[test_case(10_000 ; "above max")]
    fn test_sample_size_rejects(value: u32) {
        assert!(SampleSize::try_new("n2", value).is_err());
    }

    #[test]
    fn test_sample_size_accepts_bounds() {
        assert_eq!(SampleSize::try_new("n1", 1).unwrap().value(), 1);
        assert_eq!(SampleSize::try_new("n1", 9999).unwrap().value(), 9999);
    }

    #[test]
    fn test_comparison_count() {
        assert_eq!(ComparisonCount::default().value(), 1);
        assert!(ComparisonCount::try_new(0).is_err());
        assert_eq!(ComparisonCount::try_new(12).unwrap().value(), 12);
    }

    #[test]
    fn test_mode_parse() {
        assert_eq!(TestMode::parse("two-tailed", None).unwrap(), TestMode::TwoTailed);
        assert_eq!(
            TestMode::parse("two-tailed", Some("less-than")).unwrap(),
            TestMode::TwoTailed
        );
        assert_eq!(
            TestMode::parse("one-tailed", Some("greater-than")).unwrap(),
            TestMode::OneTailed(Direction::GreaterThan)
        );
        assert_eq!(
            TestMode::parse("one-tailed", Some("less_than")).unwrap(),
            TestMode::OneTailed(Direction::LessThan)
        );
    }

    #[test]
    fn test_mode_parse_errors() {
        assert_eq!(
            TestMode::parse("one-tailed", Some("  ")).unwrap_err(),
            CalcError::MissingField {
                field: "direction".into()
            }
        );
        assert!(matches!(
            TestMode::parse("three-tailed", None),
            Err(CalcError::InputOutOfRange { .. })
        ));
        assert!(matches!(
            TestMode::parse("one-tailed", Some("sideways")),
            Err(CalcError::InputOutOfRange { .. })
        ));
    }

    #[test]
    fn test_mode_display() {
        assert_eq!(TestMode::TwoTailed.to_string(), "two-tailed");
        assert_eq!(
            TestMode::OneTailed(Direction::LessThan).to_string(),
            "one-tailed (less-than)"
        );
        assert_eq!(TestMode::OneTailed(Direction::LessThan).kind(), "one-tailed");
    }

    #[test]
    fn test_from_raw_reports_first_bad_field() {
        let err = ComparisonInput::from_raw(0.5, 0, 2.0, 30, TestMode::TwoTailed, 1).unwrap_err();
        assert!(matches!(err, CalcError::InputOutOfRange { ref field, .. } if field == "n1"));
    }

    #[test]
    fn test_swapped() {
        let input = ComparisonInput::from_raw(0.5, 30, 0.3, 40, TestMode::TwoTailed, 2).unwrap();
        let swapped = input.swapped();
        assert_eq!(swapped.group1, input.group2);
        assert_eq!(swapped.group2, input.group1);
        assert_eq!(swapped.comparisons, input.comparisons);
    }
}
