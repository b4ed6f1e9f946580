//! Cohen's d and the standardized mean difference
//!
//! Both express a difference between two means in units of a common standard
//! deviation supplied by the caller. They differ only in direction:
//!
//! - Cohen's d: `(mean2 - mean1) / sd`, positive when the second group is higher
//! - SMD: `(mean1 - mean2) / sd`, the control-minus-treatment convention

use crate::hedges_g::hedges_g;
use crate::{EffectSize, EffectSizeType};
use effectsize_core::{Error, GroupStats, Measure, Result, Undefined};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cohen's d = (mean2 - mean1) / sd
///
/// Undefined (`sd<=0`) when `sd` is not positive.
pub fn cohens_d(mean1: f64, mean2: f64, sd: f64) -> Measure<EffectSize> {
    standardized_difference(mean2 - mean1, sd, None)
}

/// Standardized mean difference = (mean1 - mean2) / sd
///
/// Same magnitude as [`cohens_d`] with the sign reversed.
pub fn standardized_mean_difference(mean1: f64, mean2: f64, sd: f64) -> Measure<EffectSize> {
    standardized_difference(mean1 - mean2, sd, None)
}

fn standardized_difference(
    difference: f64,
    sd: f64,
    sample_sizes: Option<(usize, usize)>,
) -> Measure<EffectSize> {
    if sd <= 0.0 {
        return Measure::Undefined(Undefined::NonPositiveSd);
    }
    Measure::Value(EffectSize::new(
        difference / sd,
        EffectSizeType::StandardizedMeanDifference,
        sample_sizes,
    ))
}

/// Standardized effects of one two-group comparison
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupComparison {
    /// (treatment - control) / sd
    pub cohens_d: Measure<EffectSize>,
    /// Cohen's d with the small-sample correction
    pub hedges_g: Measure<EffectSize>,
    /// (control - treatment) / sd
    pub smd: Measure<EffectSize>,
}

/// Compare two groups that share a common standard deviation
///
/// Both groups must carry the same pooled `sd`; a mismatch means the caller
/// has not pooled and is rejected.
pub fn compare_groups(control: &GroupStats, treatment: &GroupStats) -> Result<GroupComparison> {
    if !control.sd.is_finite() || !treatment.sd.is_finite() {
        return Err(Error::non_finite("sd"));
    }
    if control.sd != treatment.sd {
        debug!(
            control_sd = control.sd,
            treatment_sd = treatment.sd,
            "Rejecting group comparison without a common SD"
        );
        return Err(Error::InvalidInput(format!(
            "Groups must share a pooled SD, got {} and {}",
            control.sd, treatment.sd
        )));
    }

    let sizes = Some((control.n, treatment.n));
    let d = standardized_difference(treatment.mean - control.mean, control.sd, sizes);
    let g = d.and_then(|d| {
        hedges_g(d.magnitude, control.n, treatment.n).map(|g| EffectSize {
            sample_sizes: sizes,
            ..g
        })
    });
    let smd = standardized_difference(control.mean - treatment.mean, control.sd, sizes);

    Ok(GroupComparison {
        cohens_d: d,
        hedges_g: g,
        smd,
    })
}
