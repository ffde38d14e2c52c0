//! Hauck-Anderson continuity-corrected Z-test for two proportions.

use serde::Serialize;

use crate::bonferroni::bonferroni_adjust;
use crate::error::{CalcError, CalcResult};
use crate::input::{ComparisonInput, Direction, TestMode};
use crate::normal;

/// Intermediate quantities of the statistic.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZStatistic {
    /// Observed difference p1 − p2
    pub difference: f64,
    /// Unpooled standard error of the difference
    pub standard_error: f64,
    /// Continuity correction 1 / (2 · min(n1, n2))
    pub continuity_correction: f64,
    pub z: f64,
}

/// Outcome of one test run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TestResult {
    pub z: f64,
    pub raw_p_value: f64,
    /// `raw_p_value * comparisons`, not clamped to 1
    pub adjusted_p_value: f64,
    pub comparisons: u32,
    pub statistic: ZStatistic,
}

/// Compute the continuity-corrected Z statistic from raw numbers.
///
/// This is the arithmetic layer: it does not assume validated input and
/// guards the divisions itself.
///
/// # Errors
///
/// `DivisionByZero` when either sample size is 0, `UndefinedResult` when
/// the standard error is zero or not a finite number.
pub fn z_statistic(p1: f64, n1: u32, p2: f64, n2: u32) -> CalcResult<ZStatistic> {
    if n1 == 0 {
        return Err(CalcError::DivisionByZero { field: "n1".into() });
    }
    if n2 == 0 {
        return Err(CalcError::DivisionByZero { field: "n2".into() });
    }

    let (n1f, n2f) = (f64::from(n1), f64::from(n2));
    let difference = p1 - p2;
    let standard_error = (p1 * (1.0 - p1) / n1f + p2 * (1.0 - p2) / n2f).sqrt();
    let continuity_correction = 1.0 / (2.0 * f64::from(n1.min(n2)));

    if standard_error == 0.0 {
        return Err(CalcError::UndefinedResult {
            reason: format!(
                "standard error is zero (p1 = {p1}, p2 = {p2}) so the Z statistic cannot be formed"
            ),
        });
    }
    if !standard_error.is_finite() {
        return Err(CalcError::UndefinedResult {
            reason: format!("standard error is not a finite number (p1 = {p1}, p2 = {p2})"),
        });
    }

    Ok(ZStatistic {
        difference,
        standard_error,
        continuity_correction,
        z: (difference + continuity_correction) / standard_error,
    })
}

/// Unadjusted p-value of `z` under the given test mode.
pub fn p_value(z: f64, mode: TestMode) -> f64 {
    match mode {
        TestMode::TwoTailed => 2.0 * normal::sf(z.abs()),
        TestMode::OneTailed(Direction::LessThan) => normal::cdf(z),
        TestMode::OneTailed(Direction::GreaterThan) => normal::sf(z),
    }
}

/// Run the Hauck-Anderson test with Bonferroni adjustment.
///
/// # Errors
///
/// Propagates the arithmetic errors of [`z_statistic`]; no partial result is
/// returned.
pub fn hauck_anderson_test(input: &ComparisonInput) -> CalcResult<TestResult> {
    let statistic = z_statistic(
        input.group1.proportion.value(),
        input.group1.sample_size.value(),
        input.group2.proportion.value(),
        input.group2.sample_size.value(),
    )?;

    let raw_p_value = p_value(statistic.z, input.mode);
    let comparisons = input.comparisons.value();
    let adjusted_p_value = bonferroni_adjust(raw_p_value, comparisons);

    tracing::debug!(
        z = statistic.z,
        raw_p_value,
        adjusted_p_value,
        comparisons,
        mode = %input.mode,
        "Hauck-Anderson test computed"
    );

    Ok(TestResult {
        z: statistic.z,
        raw_p_value,
        adjusted_p_value,
        comparisons,
        statistic,
    })
}
