//! Effect size measures
//!
//! Closed-form effect sizes for two-group comparisons, 2×2 tables and paired
//! observations. Effect sizes quantify how large a difference or relationship
//! is, independent of whether it is statistically significant.
//!
//! Every formula is total. It returns a [`Measure`]: either a value or the
//! [`Undefined`] reason the value does not exist for the given inputs (zero
//! SD, empty group, division by zero, ...). Inputs outside a formula's
//! domain, such as negative counts or event rates above 1, are rejected with
//! an [`effectsize_core::Error`] instead.
//!
//! # Supported Effect Sizes
//!
//! ## Mean differences:
//! - **Cohen's d** and the **standardized mean difference** ([`cohen_d`])
//! - **Hedges' g**: Cohen's d with a small-sample correction ([`hedges_g`])
//!
//! ## Variance explained:
//! - **Eta-squared (η²)** for k groups ([`variance_explained`])
//! - **R²** of a least-squares line ([`correlation`], [`regression`])
//!
//! ## Contingency tables:
//! - **Odds ratio**, **relative risk**, **Cramér's V** ([`contingency`])
//! - **NNT / NNH** from event rates ([`number_needed`])
//!
//! # Examples
//!
//! ```rust
//! use effectsize_measures::{cohens_d, hedges_g, odds_ratio, EffectSizeInterpretation};
//! use effectsize_core::ContingencyTable;
//!
//! let d = cohens_d(100.0, 105.0, 10.0).value().unwrap();
//! assert_eq!(d.magnitude, 0.5);
//! assert_eq!(d.interpretation, EffectSizeInterpretation::Medium);
//!
//! let g = hedges_g(d.magnitude, 10, 10).value().unwrap();
//! assert!(g.magnitude < d.magnitude);
//!
//! let table = ContingencyTable::new(30, 70, 10, 90);
//! let or = odds_ratio(&table).value().unwrap();
//! assert!((or.magnitude - 3.857).abs() < 1e-3);
//! ```
//!
//! ## Degenerate tables
//!
//! ```rust
//! use effectsize_measures::relative_risk;
//! use effectsize_core::{ContingencyTable, Undefined};
//!
//! let table = ContingencyTable::new(10, 90, 0, 100);
//! let rr = relative_risk(&table);
//! assert_eq!(rr.reason(), Some(Undefined::Unbounded));
//! assert_eq!(rr.to_string(), "Infinity");
//! ```

pub mod cohen_d;
pub mod contingency;
pub mod correlation;
pub mod hedges_g;
pub mod number_needed;
pub mod regression;
pub mod significance;
mod traits;
mod types;
pub mod variance_explained;

pub use effectsize_core::{Measure, Undefined};

// Re-exports
pub use cohen_d::{cohens_d, compare_groups, standardized_mean_difference, GroupComparison};
pub use contingency::{
    cramers_v, odds, odds_ratio, odds_ratio_haldane, relative_risk, ChiSquareAssociation,
    CramersV, OddsRatio, RelativeRisk,
};
pub use correlation::{pearson_correlation, pearson_r, r_squared, r_squared_from_r};
pub use hedges_g::{bias_correction_factor, hedges_g};
pub use number_needed::{number_needed_to_harm, number_needed_to_treat, Direction, NumberNeeded};
pub use regression::{fit_line, line_endpoints};
pub use significance::{two_sample_z_test, SignificanceComparison, ZTest};
pub use traits::TableEffectSize;
pub use types::{Benchmarks, EffectSize, EffectSizeInterpretation, EffectSizeType};
pub use variance_explained::{
    eta_squared, eta_squared_with, EtaSquaredParameters, VarianceDecomposition,
};

/// Every measure that is computed from a 2×2 table
pub fn table_measures() -> [&'static dyn TableEffectSize; 3] {
    [&OddsRatio, &RelativeRisk, &CramersV]
}
