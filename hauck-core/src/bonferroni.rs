//! Bonferroni multiple-comparison adjustment.

/// Conventional significance level for the verdict banner.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Multiply a p-value by the number of comparisons.
///
/// The product is deliberately left unclamped and can exceed 1.
pub fn bonferroni_adjust(raw_p_value: f64, comparisons: u32) -> f64 {
    raw_p_value * f64::from(comparisons)
}

/// Strict comparison against the significance level.
pub fn is_significant(adjusted_p_value: f64, alpha: f64) -> bool {
    adjusted_p_value < alpha
}
