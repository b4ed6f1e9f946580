//! Hedges' g
//!
//! Cohen's d overstates the population effect in small samples. Hedges' g
//! scales it by a factor J < 1 that approaches 1 as the degrees of freedom
//! grow.

use crate::{EffectSize, EffectSizeType};
use effectsize_core::{Measure, Undefined};

/// Small-sample correction factor J
///
/// J = 1 - 3 / (4·df - 1) with df = n₁ + n₂ - 2. This is the common
/// approximation to the exact gamma-function correction.
pub fn bias_correction_factor(n1: usize, n2: usize) -> Measure<f64> {
    let df = n1 as i64 + n2 as i64 - 2;
    if df <= 0 {
        return Measure::Undefined(Undefined::NonPositiveDf);
    }
    let denominator = 4.0 * df as f64 - 1.0;
    if denominator == 0.0 {
        return Measure::Undefined(Undefined::NonPositiveDf);
    }
    Measure::Value(1.0 - 3.0 / denominator)
}

/// Hedges' g = d × J
///
/// For large samples g ≈ d, for small samples |g| < |d|. Undefined
/// (`df<=0`) when the two groups hold fewer than three observations.
pub fn hedges_g(d: f64, n1: usize, n2: usize) -> Measure<EffectSize> {
    bias_correction_factor(n1, n2).map(|j| {
        EffectSize::new(
            d * j,
            EffectSizeType::StandardizedMeanDifference,
            Some((n1, n2)),
        )
    })
}
