//! Variance explained effect size (eta-squared)
//!
//! One-way layout with equal group sizes, described by group means and a
//! common within-group standard deviation:
//!
//! ```text
//! SS_between = Σ n·(mean_i - grand_mean)²
//! SS_error   = (n - 1)·sd²·k
//! η²         = SS_between / (SS_between + SS_error)
//! ```

use crate::{EffectSize, EffectSizeType};
use effectsize_core::{Error, Measure, Result, Undefined};
use serde::{Deserialize, Serialize};

/// Design parameters for eta-squared
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EtaSquaredParameters {
    /// Observations in every group
    pub n_per_group: usize,
}

impl Default for EtaSquaredParameters {
    fn default() -> Self {
        Self { n_per_group: 30 }
    }
}

impl EtaSquaredParameters {
    pub fn with_n_per_group(mut self, n_per_group: usize) -> Self {
        self.n_per_group = n_per_group;
        self
    }
}

/// Sum-of-squares decomposition behind eta-squared
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarianceDecomposition {
    pub grand_mean: f64,
    pub ss_between: f64,
    pub ss_error: f64,
    pub ss_total: f64,
    /// k - 1
    pub df_between: usize,
    /// k·(n - 1)
    pub df_error: usize,
    pub eta_squared: f64,
}

impl VarianceDecomposition {
    /// Share of total variance not explained by group membership
    pub fn unexplained(&self) -> f64 {
        1.0 - self.eta_squared
    }

    pub fn effect_size(&self) -> EffectSize {
        EffectSize::new(self.eta_squared, EffectSizeType::VarianceExplained, None)
    }
}

/// Eta-squared from group means and a common within-group SD
///
/// An empty mean list, a non-finite mean, `n_per_group == 0` or a negative
/// SD violate the contract. The result is undefined (`zero-variance`) when all means agree
/// and the SD is zero.
pub fn eta_squared(
    group_means: &[f64],
    sd_within: f64,
    n_per_group: usize,
) -> Result<Measure<VarianceDecomposition>> {
    if group_means.is_empty() {
        return Err(Error::InsufficientData {
            expected: 1,
            actual: 0,
        });
    }
    if n_per_group == 0 {
        return Err(Error::InvalidParameter(
            "n_per_group must be at least 1".to_string(),
        ));
    }
    if group_means.iter().any(|mean| !mean.is_finite()) {
        return Err(Error::non_finite("group_means"));
    }
    if !sd_within.is_finite() {
        return Err(Error::non_finite("sd_within"));
    }
    if sd_within < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "sd_within = {sd_within} must not be negative"
        )));
    }

    let k = group_means.len();
    let n = n_per_group as f64;
    let grand_mean = group_means.iter().sum::<f64>() / k as f64;

    let ss_between: f64 = group_means
        .iter()
        .map(|&mean| n * (mean - grand_mean).powi(2))
        .sum();
    let ss_error = (n - 1.0) * sd_within * sd_within * k as f64;
    let ss_total = ss_between + ss_error;

    if ss_total == 0.0 {
        return Ok(Measure::Undefined(Undefined::ZeroVariance));
    }

    Ok(Measure::Value(VarianceDecomposition {
        grand_mean,
        ss_between,
        ss_error,
        ss_total,
        df_between: k - 1,
        df_error: k * (n_per_group - 1),
        eta_squared: ss_between / ss_total,
    }))
}

/// Eta-squared using the group size from `params`
pub fn eta_squared_with(
    group_means: &[f64],
    sd_within: f64,
    params: &EtaSquaredParameters,
) -> Result<Measure<VarianceDecomposition>> {
    eta_squared(group_means, sd_within, params.n_per_group)
}
