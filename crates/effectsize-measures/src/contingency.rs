//! Effect sizes for 2×2 contingency tables
//!
//! Rows are exposure status (exposed, unexposed), columns are outcome status
//! (event, no event):
//!
//! ```text
//!             event   no event
//! exposed       a        b
//! unexposed     c        d
//! ```
//!
//! Zero cells are common in small tables. Every zero-denominator case is
//! reported as [`Undefined::Unbounded`] (x/0 with x > 0) or
//! [`Undefined::Indeterminate`] (0/0) rather than a number.

use crate::traits::TableEffectSize;
use crate::{EffectSize, EffectSizeType};
use effectsize_core::{ratio, ContingencyTable, Measure, Undefined};
use serde::{Deserialize, Serialize};
use statrs::distribution::{ChiSquared, ContinuousCDF};
use tracing::{debug, trace};

/// Cell increment of the Haldane–Anscombe correction
pub const HALDANE_CORRECTION: f64 = 0.5;

/// Odds of an event: events / non-events
pub fn odds(events: u64, non_events: u64) -> Measure {
    ratio(events as f64, non_events as f64)
}

/// Odds ratio (a·d) / (b·c)
///
/// When b·c = 0 the ratio is `infinite` if a·d > 0 and `indeterminate`
/// otherwise. This covers every combination of zero cells.
pub fn odds_ratio(table: &ContingencyTable) -> Measure<EffectSize> {
    let numerator = table.a as f64 * table.d as f64;
    let denominator = table.b as f64 * table.c as f64;
    let result = ratio(numerator, denominator);
    if let Some(reason) = result.reason() {
        trace!(?table, %reason, "Odds ratio undefined");
    }
    result.map(|or| EffectSize::new(or, EffectSizeType::Ratio, Some(row_sizes(table))))
}

/// Odds ratio with the Haldane–Anscombe correction
///
/// Adds 0.5 to every cell when any cell is zero, which keeps the estimate
/// finite. Tables without zero cells are left as they are.
pub fn odds_ratio_haldane(table: &ContingencyTable) -> EffectSize {
    let [a, b, c, d] = table.cells().map(|cell| cell as f64);
    let (a, b, c, d) = if table.has_zero_cell() {
        debug!(?table, "Applying Haldane-Anscombe correction");
        (
            a + HALDANE_CORRECTION,
            b + HALDANE_CORRECTION,
            c + HALDANE_CORRECTION,
            d + HALDANE_CORRECTION,
        )
    } else {
        (a, b, c, d)
    };
    EffectSize::new((a * d) / (b * c), EffectSizeType::Ratio, Some(row_sizes(table)))
}

/// Relative risk [a/(a+b)] / [c/(c+d)]
///
/// Undefined when either exposure row is empty (`empty-group`), unbounded
/// when only the exposed row has events, indeterminate when neither has.
pub fn relative_risk(table: &ContingencyTable) -> Measure<EffectSize> {
    if table.row1_total() == 0 || table.row2_total() == 0 {
        return Measure::Undefined(Undefined::EmptyGroup);
    }
    ratio(table.risk_exposed(), table.risk_unexposed())
        .map(|rr| EffectSize::new(rr, EffectSizeType::Ratio, Some(row_sizes(table))))
}

/// Pearson chi-square test of independence with Cramér's V
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChiSquareAssociation {
    pub chi_square: f64,
    /// (rows - 1)·(cols - 1), always 1 for a 2×2 table
    pub df: usize,
    /// Upper tail probability of `chi_square` under independence
    pub p_value: f64,
    /// sqrt(χ² / (N·(min(rows, cols) - 1)))
    pub cramers_v: f64,
    pub n: u128,
}

impl ChiSquareAssociation {
    pub fn effect_size(&self) -> EffectSize {
        EffectSize::new(self.cramers_v, EffectSizeType::Association, None)
    }
}

/// Chi-square statistic and Cramér's V of a 2×2 table
///
/// Expected counts come from the row and column marginals. Undefined
/// (`empty-marginal`) when any marginal is zero.
pub fn cramers_v(table: &ContingencyTable) -> Measure<ChiSquareAssociation> {
    let rows = [table.row1_total(), table.row2_total()];
    let cols = [table.col1_total(), table.col2_total()];
    if rows.contains(&0) || cols.contains(&0) {
        return Measure::Undefined(Undefined::EmptyMarginal);
    }

    let n = table.grand_total();
    let total = n as f64;
    let observed = [[table.a, table.b], [table.c, table.d]];

    let mut chi_square = 0.0;
    for (i, row) in observed.iter().enumerate() {
        for (j, &count) in row.iter().enumerate() {
            let expected = rows[i] as f64 * cols[j] as f64 / total;
            chi_square += (count as f64 - expected).powi(2) / expected;
        }
    }

    let df = (rows.len() - 1) * (cols.len() - 1);
    let min_dim_minus_one = rows.len().min(cols.len()) - 1;
    let cramers_v = (chi_square / (total * min_dim_minus_one as f64)).sqrt();

    Measure::Value(ChiSquareAssociation {
        chi_square,
        df,
        p_value: chi_square_upper_tail(chi_square, df),
        cramers_v,
        n,
    })
}

fn chi_square_upper_tail(statistic: f64, df: usize) -> f64 {
    ChiSquared::new(df as f64)
        .map(|dist| (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0))
        .unwrap_or(f64::NAN)
}

fn row_sizes(table: &ContingencyTable) -> (usize, usize) {
    let size = |total: u128| usize::try_from(total).unwrap_or(usize::MAX);
    (size(table.row1_total()), size(table.row2_total()))
}

/// Odds ratio as a [`TableEffectSize`]
#[derive(Debug, Clone, Copy, Default)]
pub struct OddsRatio;

impl TableEffectSize for OddsRatio {
    fn name(&self) -> &'static str {
        "Odds Ratio"
    }

    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::Ratio
    }

    fn compute(&self, table: &ContingencyTable) -> Measure<EffectSize> {
        odds_ratio(table)
    }
}

/// Relative risk as a [`TableEffectSize`]
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeRisk;

impl TableEffectSize for RelativeRisk {
    fn name(&self) -> &'static str {
        "Relative Risk"
    }

    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::Ratio
    }

    fn compute(&self, table: &ContingencyTable) -> Measure<EffectSize> {
        relative_risk(table)
    }
}

/// Cramér's V as a [`TableEffectSize`]
#[derive(Debug, Clone, Copy, Default)]
pub struct CramersV;

impl TableEffectSize for CramersV {
    fn name(&self) -> &'static str {
        "Cramér's V"
    }

    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::Association
    }

    fn compute(&self, table: &ContingencyTable) -> Measure<EffectSize> {
        cramers_v(table).map(|association| association.effect_size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_odds() {
        assert_eq!(odds(30, 70).value(), Some(30.0 / 70.0));
        assert_eq!(odds(5, 0).reason(), Some(Undefined::Unbounded));
        assert_eq!(odds(0, 0).reason(), Some(Undefined::Indeterminate));
    }

    #[test]
    fn test_odds_ratio_zero_cells() {
        // c = 0 with a > 0
        let table = ContingencyTable::new(10, 5, 0, 20);
        assert_eq!(odds_ratio(&table).reason(), Some(Undefined::Unbounded));

        // a = c = 0
        let table = ContingencyTable::new(0, 5, 0, 20);
        assert_eq!(odds_ratio(&table).reason(), Some(Undefined::Indeterminate));

        // b = 0 and c = 0 together
        let table = ContingencyTable::new(10, 0, 0, 20);
        assert_eq!(odds_ratio(&table).reason(), Some(Undefined::Unbounded));

        // d = 0 with b, c > 0 gives a defined zero
        let table = ContingencyTable::new(0, 5, 3, 0);
        assert_eq!(odds_ratio(&table).value().unwrap().magnitude, 0.0);

        // all zero
        let table = ContingencyTable::default();
        assert_eq!(odds_ratio(&table).reason(), Some(Undefined::Indeterminate));
    }

    #[test]
    fn test_haldane_correction() {
        let table = ContingencyTable::new(10, 5, 0, 20);
        let corrected = odds_ratio_haldane(&table);
        assert_abs_diff_eq!(
            corrected.magnitude,
            (10.5 * 20.5) / (5.5 * 0.5),
            epsilon = 1e-12
        );

        // no zero cell: same as the plain estimate
        let table = ContingencyTable::new(30, 70, 10, 90);
        let plain = odds_ratio(&table).value().unwrap();
        assert_eq!(odds_ratio_haldane(&table).magnitude, plain.magnitude);
    }

    #[test]
    fn test_relative_risk_zero_cases() {
        let table = ContingencyTable::new(0, 0, 10, 90);
        assert_eq!(relative_risk(&table).reason(), Some(Undefined::EmptyGroup));

        let table = ContingencyTable::new(10, 90, 0, 0);
        assert_eq!(relative_risk(&table).reason(), Some(Undefined::EmptyGroup));

        let table = ContingencyTable::new(10, 90, 0, 100);
        assert_eq!(relative_risk(&table).reason(), Some(Undefined::Unbounded));

        let table = ContingencyTable::new(0, 100, 0, 100);
        assert_eq!(relative_risk(&table).reason(), Some(Undefined::Indeterminate));

        let table = ContingencyTable::new(0, 100, 10, 90);
        assert_eq!(relative_risk(&table).value().unwrap().magnitude, 0.0);
    }

    #[test]
    fn test_cramers_v_independent_table() {
        let table = ContingencyTable::new(20, 20, 30, 30);
        let association = cramers_v(&table).value().unwrap();
        assert_abs_diff_eq!(association.chi_square, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(association.cramers_v, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(association.p_value, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_cramers_v_perfect_association() {
        let table = ContingencyTable::new(25, 0, 0, 25);
        let association = cramers_v(&table).value().unwrap();
        assert_abs_diff_eq!(association.cramers_v, 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(association.chi_square, 50.0, epsilon = 1e-9);
        assert_eq!(association.df, 1);
    }

    #[test]
    fn test_cramers_v_huge_counts() {
        let table = ContingencyTable::new(u64::MAX, 1, 1, 1);
        let association = cramers_v(&table).value().unwrap();
        assert_eq!(association.n, u128::from(u64::MAX) + 3);
        assert!(association.chi_square.is_finite());
        assert!((0.0..=1.0 + 1e-9).contains(&association.cramers_v));

        let rr = relative_risk(&table).value().unwrap();
        assert_eq!(rr.sample_sizes.map(|(exposed, _)| exposed), Some(usize::MAX));
    }

    #[test]
    fn test_cramers_v_empty_marginal() {
        // empty outcome column
        let table = ContingencyTable::new(0, 10, 0, 10);
        assert_eq!(cramers_v(&table).reason(), Some(Undefined::EmptyMarginal));

        let table = ContingencyTable::new(0, 0, 5, 10);
        assert_eq!(cramers_v(&table).reason(), Some(Undefined::EmptyMarginal));

        assert_eq!(
            cramers_v(&ContingencyTable::default()).reason(),
            Some(Undefined::EmptyMarginal)
        );
    }

    #[test]
    fn test_table_effect_size_trait() {
        let table = ContingencyTable::new(30, 70, 10, 90);
        let measures: [&dyn TableEffectSize; 3] = [&OddsRatio, &RelativeRisk, &CramersV];

        for measure in measures {
            let effect = measure.compute(&table).value().unwrap();
            assert_eq!(effect.effect_type, measure.effect_size_type());
            assert!(!measure.name().is_empty());
        }
    }
}
