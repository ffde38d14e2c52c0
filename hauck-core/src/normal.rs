//! Standard normal distribution.

use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;

/// Standard normal CDF, Φ(x).
///
/// Uses the complementary error function so both tails keep full
/// precision: Φ(x) = erfc(-x / √2) / 2.
pub fn cdf(x: f64) -> f64 {
    0.5 * erfc(-x / SQRT_2)
}

/// Upper tail, 1 − Φ(x) = erfc(x / √2) / 2.
pub fn sf(x: f64) -> f64 {
    0.5 * erfc(x / SQRT_2)
}
