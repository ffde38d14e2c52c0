//! Calculator form and JSON request payloads.
//!
//! HTML forms submit every field as text, so [`CalculatorForm`] keeps the raw
//! strings (they are echoed back into the page) and converts them into a
//! validated [`ComparisonInput`] in one step.

use hauck_core::{CalcError, CalcResult, ComparisonInput, TestMode};
use serde::{Deserialize, Serialize};

/// Raw form submission, field names as posted by the page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorForm {
    #[serde(default)]
    pub p1: String,
    #[serde(default)]
    pub n1: String,
    #[serde(default)]
    pub p2: String,
    #[serde(default)]
    pub n2: String,
    #[serde(default)]
    pub test_type: String,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub number_of_tests: Option<String>,
}

impl CalculatorForm {
    /// Initial form values shown on first load.
    pub fn initial(default_comparisons: u32) -> Self {
        Self {
            p1: "0.0".into(),
            n1: "1".into(),
            p2: "0.0".into(),
            n2: "1".into(),
            test_type: "two-tailed".into(),
            direction: Some("less-than".into()),
            number_of_tests: Some(default_comparisons.to_string()),
        }
    }

    pub fn is_one_tailed(&self) -> bool {
        self.test_type.trim() == "one-tailed"
    }

    /// Validate into calculator input. Blank `numberOfTests` falls back to
    /// `default_comparisons`.
    pub fn to_input(&self, default_comparisons: u32) -> CalcResult<ComparisonInput> {
        let p1 = parse_proportion("p1", &self.p1)?;
        let n1 = parse_count("n1", &self.n1)?;
        let p2 = parse_proportion("p2", &self.p2)?;
        let n2 = parse_count("n2", &self.n2)?;
        let mode = TestMode::parse(required("testType", &self.test_type)?, self.direction.as_deref())?;
        let comparisons = match self.number_of_tests.as_deref().map(str::trim) {
            None | Some("") => default_comparisons,
            Some(value) => parse_count("numberOfTests", value)?,
        };

        ComparisonInput::from_raw(p1, n1, p2, n2, mode, comparisons)
    }
}

/// JSON body for `POST /api/v1/test`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestRequest {
    pub p1: f64,
    pub n1: u32,
    pub p2: f64,
    pub n2: u32,
    pub test_type: String,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub number_of_tests: Option<u32>,
    /// Per-request significance level; the configured one otherwise.
    #[serde(default)]
    pub alpha: Option<f64>,
}

impl TestRequest {
    pub fn to_input(&self, default_comparisons: u32) -> CalcResult<ComparisonInput> {
        let mode = TestMode::parse(&self.test_type, self.direction.as_deref())?;
        ComparisonInput::from_raw(
            self.p1,
            self.n1,
            self.p2,
            self.n2,
            mode,
            self.number_of_tests.unwrap_or(default_comparisons),
        )
    }
}

/// Check a significance level supplied by a client.
pub fn check_alpha(alpha: f64) -> CalcResult<f64> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(alpha)
    } else {
        Err(CalcError::out_of_range(
            "alpha",
            alpha,
            "must be strictly between 0 and 1",
        ))
    }
}

fn required<'a>(field: &str, value: &'a str) -> CalcResult<&'a str> {
    let value = value.trim();
    if value.is_empty() {
        return Err(CalcError::MissingField {
            field: field.into(),
        });
    }
    Ok(value)
}

fn parse_proportion(field: &str, value: &str) -> CalcResult<f64> {
    let value = required(field, value)?;
    value
        .parse::<f64>()
        .map_err(|_| CalcError::out_of_range(field, value, "must be a decimal number"))
}

fn parse_count(field: &str, value: &str) -> CalcResult<u32> {
    let value = required(field, value)?;
    value
        .parse::<u32>()
        .map_err(|_| CalcError::out_of_range(field, value, "must be a whole number"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hauck_core::Direction;

    fn form(test_type: &str, direction: Option<&str>, tests: Option<&str>) -> CalculatorForm {
        CalculatorForm {
            p1: "0.5".into(),
            n1: "30".into(),
            p2: " 0.3 ".into(),
            n2: "30".into(),
            test_type: test_type.into(),
            direction: direction.map(String::from),
            number_of_tests: tests.map(String::from),
        }
    }

    #[test]
    fn test_valid_two_tailed_ignores_direction() {
        let input = form("two-tailed", Some("greater-than"), Some("3"))
            .to_input(1)
            .unwrap();
        assert_eq!(input.mode, TestMode::TwoTailed);
        assert_eq!(input.comparisons.value(), 3);
        assert_eq!(input.group2.proportion.value(), 0.3);
    }

    #[test]
    fn test_one_tailed_requires_direction() {
        let err = form("one-tailed", None, None).to_input(1).unwrap_err();
        assert_eq!(
            err,
            CalcError::MissingField {
                field: "direction".into()
            }
        );

        let input = form("one-tailed", Some("less-than"), None).to_input(1).unwrap();
        assert_eq!(input.mode, TestMode::OneTailed(Direction::LessThan));
    }

    #[test]
    fn test_blank_number_of_tests_uses_default() {
        let input = form("two-tailed", None, Some("  ")).to_input(4).unwrap();
        assert_eq!(input.comparisons.value(), 4);
    }

    #[test]
    fn test_unparsable_values() {
        let mut bad = form("two-tailed", None, None);
        bad.n1 = "thirty".into();
        assert!(matches!(
            bad.to_input(1),
            Err(CalcError::InputOutOfRange { ref field, .. }) if field == "n1"
        ));

        let mut bad = form("two-tailed", None, None);
        bad.n2 = "-3".into();
        assert!(bad.to_input(1).is_err());

        let mut bad = form("two-tailed", None, None);
        bad.p1 = String::new();
        assert!(matches!(bad.to_input(1), Err(CalcError::MissingField { .. })));
    }

    #[test]
    fn test_out_of_range_proportion() {
        let mut bad = form("two-tailed", None, None);
        bad.p2 = "1.2".into();
        assert!(matches!(
            bad.to_input(1),
            Err(CalcError::InputOutOfRange { ref field, .. }) if field == "p2"
        ));
    }

    #[test]
    fn test_json_request() {
        let request: TestRequest = serde_json::from_str(
            r#"{"p1":0.5,"n1":30,"p2":0.3,"n2":30,"testType":"one-tailed","direction":"greater-than","numberOfTests":2}"#,
        )
        .unwrap();
        let input = request.to_input(1).unwrap();
        assert_eq!(input.mode, TestMode::OneTailed(Direction::GreaterThan));
        assert_eq!(input.comparisons.value(), 2);
        assert!(request.alpha.is_none());
    }

    #[test]
    fn test_check_alpha() {
        assert!(check_alpha(0.01).is_ok());
        assert!(check_alpha(0.0).is_err());
        assert!(check_alpha(1.0).is_err());
        assert!(check_alpha(f64::NAN).is_err());
    }
}
