//! Statistical significance next to effect size
//!
//! A two-sample z test on equal groups with a common SD. The p-value shrinks
//! as the groups grow while Cohen's d stays put, which is the contrast this
//! module exists to show. Cohen's d is therefore reported even when the
//! groups are too small for a p-value.

use crate::{EffectSize, EffectSizeType};
use effectsize_core::math::distributions::normal;
use effectsize_core::{Measure, Undefined};
use serde::{Deserialize, Serialize};

/// Smallest group size for which a p-value is reported
pub const MIN_GROUP_SIZE: usize = 5;

/// Outcome of the z test itself
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZTest {
    /// sd·√(2/n)
    pub standard_error: f64,
    pub z: f64,
    /// Two-sided
    pub p_value: f64,
}

impl ZTest {
    pub fn is_significant(&self, alpha: f64) -> bool {
        self.p_value < alpha
    }
}

/// Effect size and significance of one comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignificanceComparison {
    /// mean_diff / sd, independent of the group size
    pub cohens_d: Measure<EffectSize>,
    pub test: Measure<ZTest>,
}

/// Two-sided z test for a difference in means between two groups of
/// `n_per_group` observations each
///
/// Cohen's d is undefined only when `sd` is not positive. The test is
/// undefined with fewer than [`MIN_GROUP_SIZE`] observations per group
/// (`insufficient-data`, checked first) or when `sd` is not positive.
pub fn two_sample_z_test(mean_diff: f64, sd: f64, n_per_group: usize) -> SignificanceComparison {
    let cohens_d = if sd > 0.0 {
        Measure::Value(EffectSize::new(
            mean_diff / sd,
            EffectSizeType::StandardizedMeanDifference,
            Some((n_per_group, n_per_group)),
        ))
    } else {
        Measure::Undefined(Undefined::NonPositiveSd)
    };

    let test = if n_per_group < MIN_GROUP_SIZE {
        Measure::Undefined(Undefined::InsufficientData)
    } else if sd <= 0.0 {
        Measure::Undefined(Undefined::NonPositiveSd)
    } else {
        let standard_error = sd * (2.0 / n_per_group as f64).sqrt();
        let z = mean_diff / standard_error;
        Measure::Value(ZTest {
            standard_error,
            z,
            p_value: 2.0 * (1.0 - normal::cdf(z.abs())),
        })
    };

    SignificanceComparison { cohens_d, test }
}
