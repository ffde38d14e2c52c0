//! Display-ready view of a test result.
//!
//! All front ends (HTML form, JSON API, CLI) show the same strings, so the
//! rounding and the verdict wording live here.

use serde::Serialize;

use crate::bonferroni::is_significant;
use crate::input::TestMode;
use crate::ztest::TestResult;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Z statistic rounded to 3 decimals
    pub z: String,
    /// Adjusted p-value rounded to 5 decimals
    pub adjusted_p_value: String,
    pub significant: bool,
    pub alpha: f64,
    pub message: String,
    pub test_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub direction: Option<&'static str>,
    pub result: TestResult,
}

impl Report {
    pub fn new(result: TestResult, mode: TestMode, alpha: f64) -> Self {
        let significant = is_significant(result.adjusted_p_value, alpha);
        let level = format_percent(alpha);
        let message = if significant {
            format!(
                "The difference is statistically significant at the {level}% level with Bonferroni correction."
            )
        } else {
            format!(
                "The difference is not statistically significant at the {level}% level with Bonferroni correction."
            )
        };

        Self {
            z: format!("{:.3}", result.z),
            adjusted_p_value: format!("{:.5}", result.adjusted_p_value),
            significant,
            alpha,
            message,
            test_type: mode.kind(),
            direction: mode.direction().map(|d| d.as_str()),
            result,
        }
    }

    /// Plain-text rendering used by the CLI.
    pub fn to_text(&self) -> String {
        format!(
            "Z value: {}\nAdjusted p-value: {}\n{}",
            self.z, self.adjusted_p_value, self.message
        )
    }
}

fn format_percent(alpha: f64) -> String {
    let pct = alpha * 100.0;
    if (pct - pct.round()).abs() < 1e-9 {
        format!("{:.0}", pct)
    } else {
        format!("{}", (pct * 1e6).round() / 1e6)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{ComparisonInput, Direction};
    use crate::ztest::hauck_anderson_test;
    use crate::DEFAULT_ALPHA;

    fn report(k: u32, mode: TestMode, alpha: f64) -> Report {
        let input = ComparisonInput::from_raw(0.5, 30, 0.3, 30, mode, k).unwrap();
        Report::new(hauck_anderson_test(&input).unwrap(), mode, alpha)
    }

    #[test]
    fn test_rounding() {
        let r = report(1, TestMode::TwoTailed, DEFAULT_ALPHA);
        assert_eq!(r.z, "1.750");
        assert_eq!(r.adjusted_p_value, "0.08016");
        assert!(!r.significant);
        assert_eq!(
            r.message,
            "The difference is not statistically significant at the 5% level with Bonferroni correction."
        );
    }

    #[test]
    fn test_significant_one_tailed() {
        let r = report(1, TestMode::OneTailed(Direction::GreaterThan), DEFAULT_ALPHA);
        assert_eq!(r.adjusted_p_value, "0.04008");
        assert!(r.significant);
        assert!(r.message.starts_with("The difference is statistically significant"));
        assert_eq!(r.direction, Some("greater-than"));
        assert_eq!(r.test_type, "one-tailed");
    }

    #[test]
    fn test_adjustment_can_flip_verdict() {
        let r = report(2, TestMode::OneTailed(Direction::GreaterThan), DEFAULT_ALPHA);
        assert_eq!(r.adjusted_p_value, "0.08016");
        assert!(!r.significant);
    }

    #[test]
    fn test_percent_formatting() {
        assert_eq!(format_percent(0.05), "5");
        assert_eq!(format_percent(0.1), "10");
        assert_eq!(format_percent(0.025), "2.5");
    }

    #[test]
    fn test_to_text() {
        let text = report(1, TestMode::TwoTailed, 0.1).to_text();
        assert!(text.starts_with("Z value: 1.750\nAdjusted p-value: 0.08016\n"));
        assert!(text.ends_with("at the 10% level with Bonferroni correction."));
    }

    #[test]
    fn test_two_tailed_omits_direction_in_json() {
        let json = serde_json::to_value(report(1, TestMode::TwoTailed, DEFAULT_ALPHA)).unwrap();
        assert!(json.get("direction").is_none());
        assert_eq!(json["test_type"], "two-tailed");
        assert_eq!(json["z"], "1.750");
    }
}
