//! Effect size values and their conventional interpretation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Family an effect size belongs to
///
/// The family fixes the scale of the magnitude, the value meaning "no
/// effect" and the benchmarks used to label it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectSizeType {
    /// Mean difference in SD units (Cohen's d, Hedges' g, SMD)
    StandardizedMeanDifference,
    /// Pearson's r
    Correlation,
    /// Share of variance (η², R²)
    VarianceExplained,
    /// Odds ratio or relative risk
    Ratio,
    /// Cramér's V
    Association,
}

/// Small / medium / large cut-offs on the absolute scale of a family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub small: f64,
    pub medium: f64,
    pub large: f64,
}

impl Benchmarks {
    const fn new(small: f64, medium: f64, large: f64) -> Self {
        Self {
            small,
            medium,
            large,
        }
    }
}

impl EffectSizeType {
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandardizedMeanDifference => "Standardized Mean Difference",
            Self::Correlation => "Correlation",
            Self::VarianceExplained => "Variance Explained",
            Self::Ratio => "Ratio",
            Self::Association => "Association",
        }
    }

    /// Range the magnitude can take
    pub fn typical_range(&self) -> (f64, f64) {
        match self {
            Self::StandardizedMeanDifference => (f64::NEG_INFINITY, f64::INFINITY),
            Self::Correlation => (-1.0, 1.0),
            Self::Ratio => (0.0, f64::INFINITY),
            Self::VarianceExplained | Self::Association => (0.0, 1.0),
        }
    }

    /// Magnitude meaning "no effect"
    pub fn null_value(&self) -> f64 {
        if *self == Self::Ratio {
            1.0
        } else {
            0.0
        }
    }

    /// Cohen (1988) for d, r and η²; Chen, Cohen & Chen (2010) for ratios.
    /// V of a 2×2 table has one degree of freedom and shares r's cut-offs.
    pub fn benchmarks(&self) -> Benchmarks {
        match self {
            Self::StandardizedMeanDifference => Benchmarks::new(0.2, 0.5, 0.8),
            Self::Correlation | Self::Association => Benchmarks::new(0.1, 0.3, 0.5),
            Self::VarianceExplained => Benchmarks::new(0.01, 0.06, 0.14),
            Self::Ratio => Benchmarks::new(1.68, 3.47, 6.71),
        }
    }

    /// Distance from "no effect" on the scale the benchmarks apply to
    ///
    /// Ratios are folded onto [1, ∞) so that OR = 4 and OR = 0.25 read the
    /// same.
    fn strength(&self, magnitude: f64) -> f64 {
        match self {
            Self::Ratio if magnitude < 1.0 => magnitude.recip(),
            Self::Ratio => magnitude,
            _ => magnitude.abs(),
        }
    }
}

/// Verbal label for an effect size
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EffectSizeInterpretation {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectSizeInterpretation {
    /// Label `magnitude` against the benchmarks of `effect_type`
    pub fn from_magnitude(magnitude: f64, effect_type: EffectSizeType) -> Self {
        let cut = effect_type.benchmarks();
        match effect_type.strength(magnitude) {
            s if s >= cut.large => Self::Large,
            s if s >= cut.medium => Self::Medium,
            s if s >= cut.small => Self::Small,
            _ => Self::Negligible,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed effect size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectSize {
    pub magnitude: f64,
    pub effect_type: EffectSizeType,
    /// Derived from `magnitude` and `effect_type` at construction
    pub interpretation: EffectSizeInterpretation,
    /// (group 1, group 2) or (exposed, unexposed) when known
    pub sample_sizes: Option<(usize, usize)>,
}

impl EffectSize {
    pub fn new(
        magnitude: f64,
        effect_type: EffectSizeType,
        sample_sizes: Option<(usize, usize)>,
    ) -> Self {
        Self {
            magnitude,
            effect_type,
            interpretation: EffectSizeInterpretation::from_magnitude(magnitude, effect_type),
            sample_sizes,
        }
    }

    pub fn abs_magnitude(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Medium or larger
    pub fn is_practically_significant(&self) -> bool {
        self.interpretation >= EffectSizeInterpretation::Medium
    }

    pub fn is_above_null(&self) -> bool {
        self.magnitude > self.effect_type.null_value()
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.3} ({})",
            self.effect_type.name(),
            self.magnitude,
            self.interpretation
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EffectSizeInterpretation::*;

    fn label(magnitude: f64, effect_type: EffectSizeType) -> EffectSizeInterpretation {
        EffectSizeInterpretation::from_magnitude(magnitude, effect_type)
    }

    #[test]
    fn test_mean_difference_labels() {
        let smd = EffectSizeType::StandardizedMeanDifference;
        assert_eq!(label(0.1, smd), Negligible);
        assert_eq!(label(-0.3, smd), Small);
        assert_eq!(label(0.6, smd), Medium);
        assert_eq!(label(1.0, smd), Large);
        // cut-offs are inclusive from below
        assert_eq!(label(0.5, smd), Medium);
    }

    #[test]
    fn test_variance_explained_labels() {
        let ve = EffectSizeType::VarianceExplained;
        assert_eq!(label(0.005, ve), Negligible);
        assert_eq!(label(0.08, ve), Medium);
        assert_eq!(label(0.5, ve), Large);
    }

    #[test]
    fn test_association_shares_correlation_cutoffs() {
        for v in [0.05, 0.2, 0.4, 0.7] {
            assert_eq!(
                label(v, EffectSizeType::Association),
                label(v, EffectSizeType::Correlation)
            );
        }
    }

    #[test]
    fn test_ratio_labels_are_log_symmetric() {
        assert_eq!(label(4.0, EffectSizeType::Ratio), Medium);
        assert_eq!(label(0.25, EffectSizeType::Ratio), Medium);
        assert_eq!(label(1.0, EffectSizeType::Ratio), Negligible);
        assert_eq!(label(0.0, EffectSizeType::Ratio), Large);
    }

    #[test]
    fn test_effect_size_display() {
        let effect_size = EffectSize::new(
            0.6,
            EffectSizeType::StandardizedMeanDifference,
            Some((10, 10)),
        );
        assert_eq!(
            effect_size.to_string(),
            "Standardized Mean Difference: 0.600 (medium)"
        );
        assert!(effect_size.is_practically_significant());
    }

    #[test]
    fn test_null_value() {
        assert!(EffectSize::new(3.0, EffectSizeType::Ratio, None).is_above_null());
        assert!(!EffectSize::new(0.5, EffectSizeType::Ratio, None).is_above_null());
        let d = EffectSize::new(0.5, EffectSizeType::StandardizedMeanDifference, None);
        assert!(d.is_above_null());
        assert_eq!(EffectSizeType::Correlation.typical_range(), (-1.0, 1.0));
    }
}
