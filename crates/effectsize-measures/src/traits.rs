//! Core traits for effect size estimation

use crate::types::{EffectSize, EffectSizeType};
use effectsize_core::{ContingencyTable, Measure};

/// Effect size computed from a 2×2 contingency table
///
/// Implemented by [`crate::OddsRatio`], [`crate::RelativeRisk`] and
/// [`crate::CramersV`] so a caller can evaluate every table measure
/// through one interface.
pub trait TableEffectSize {
    /// Display name of the measure
    fn name(&self) -> &'static str;

    /// Get the type of effect size this estimator computes
    fn effect_size_type(&self) -> EffectSizeType;

    /// Compute the effect size, or the reason it is undefined
    fn compute(&self, table: &ContingencyTable) -> Measure<EffectSize>;
}
