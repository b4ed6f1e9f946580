//! Mathematical utilities for effect size computation
//!
//! This module provides the normal-distribution helpers shared by the
//! formulas and by callers that plot density curves.

/// Distribution-related mathematical functions
pub mod distributions {
    /// Normal distribution utilities
    pub mod normal {
        use crate::{Error, Measure, Point2D, Result, Undefined};
        use serde::{Deserialize, Serialize};
        use std::f64::consts::PI;

        /// Density of N(mu, sigma²) at `x`
        ///
        /// `sigma` must be positive; this function does not check it and
        /// yields NaN or infinity otherwise.
        #[inline]
        pub fn pdf(x: f64, mu: f64, sigma: f64) -> f64 {
            (1.0 / (sigma * (2.0 * PI).sqrt())) * (-0.5 * ((x - mu) / sigma).powi(2)).exp()
        }

        /// Standard normal CDF Φ(z)
        ///
        /// Hart-type rational approximation (absolute error around 7.5e-8).
        /// The coefficients and the Horner nesting are part of the contract.
        pub fn cdf(z: f64) -> f64 {
            let t = 1.0 / (1.0 + 0.2316419 * z.abs());
            let d = 0.3989423 * (-z * z / 2.0).exp();
            let mut prob = d
                * t
                * (0.3193815 + t * (-0.3565638 + t * (1.781478 + t * (-1.821256 + t * 1.330274))));
            if z > 0.0 {
                prob = 1.0 - prob;
            }
            prob
        }

        /// Sample the density at `num_points + 1` evenly spaced x values
        /// spanning `[min_x, max_x]`, in ascending order of x
        pub fn curve(
            mu: f64,
            sigma: f64,
            num_points: usize,
            min_x: f64,
            max_x: f64,
        ) -> Result<Vec<Point2D>> {
            if num_points == 0 {
                return Err(Error::InvalidParameter(
                    "num_points must be at least 1".to_string(),
                ));
            }
            let step = (max_x - min_x) / num_points as f64;
            Ok((0..=num_points)
                .map(|i| {
                    let x = min_x + i as f64 * step;
                    Point2D::new(x, pdf(x, mu, sigma))
                })
                .collect())
        }

        /// Sampling parameters for overlaid density curves
        #[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
        pub struct CurveParameters {
            /// Number of intervals; each curve has `num_points + 1` samples
            pub num_points: usize,
            /// Half-width of the plotted range beyond the outer means, in SDs
            pub span_sds: f64,
        }

        impl Default for CurveParameters {
            fn default() -> Self {
                Self {
                    num_points: 100,
                    span_sds: 3.5,
                }
            }
        }

        impl CurveParameters {
            pub fn with_num_points(mut self, num_points: usize) -> Self {
                self.num_points = num_points;
                self
            }

            pub fn with_span_sds(mut self, span_sds: f64) -> Self {
                self.span_sds = span_sds;
                self
            }
        }

        /// Two density curves sampled over a common range
        #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
        pub struct ComparisonCurves {
            pub first: Vec<Point2D>,
            pub second: Vec<Point2D>,
        }

        /// Densities of N(mean1, sd²) and N(mean2, sd²) over
        /// `[min(mean1, mean2) - span·sd, max(mean1, mean2) + span·sd]`
        pub fn comparison_curves(
            mean1: f64,
            mean2: f64,
            sd: f64,
            params: &CurveParameters,
        ) -> Result<Measure<ComparisonCurves>> {
            if sd <= 0.0 {
                return Ok(Measure::Undefined(Undefined::NonPositiveSd));
            }
            let min_x = mean1.min(mean2) - params.span_sds * sd;
            let max_x = mean1.max(mean2) + params.span_sds * sd;
            Ok(Measure::Value(ComparisonCurves {
                first: curve(mean1, sd, params.num_points, min_x, max_x)?,
                second: curve(mean2, sd, params.num_points, min_x, max_x)?,
            }))
        }

        #[cfg(test)]
        mod tests {
            use super::*;
            use approx::assert_abs_diff_eq;
            use statrs::distribution::{ContinuousCDF, Normal};

            #[test]
            fn test_pdf_peak() {
                assert_abs_diff_eq!(pdf(0.0, 0.0, 1.0), 0.398_942_280_4, epsilon = 1e-9);
                assert_abs_diff_eq!(pdf(10.0, 10.0, 2.0), 0.199_471_140_2, epsilon = 1e-9);
                assert_abs_diff_eq!(pdf(1.0, 0.0, 1.0), pdf(-1.0, 0.0, 1.0), epsilon = 1e-15);
            }

            #[test]
            fn test_pdf_unguarded_sigma() {
                assert!(pdf(0.0, 0.0, 0.0).is_nan() || pdf(0.0, 0.0, 0.0).is_infinite());
            }

            #[test]
            fn test_normal_cdf() {
                assert_abs_diff_eq!(cdf(0.0), 0.5, epsilon = 1e-6);
                assert_abs_diff_eq!(cdf(-1.96), 0.025, epsilon = 1e-4);
                assert_abs_diff_eq!(cdf(1.96), 0.975, epsilon = 1e-4);
            }

            #[test]
            fn test_cdf_against_statrs() {
                let reference = Normal::new(0.0, 1.0).unwrap();
                for i in -40..=40 {
                    let z = i as f64 / 10.0;
                    assert_abs_diff_eq!(cdf(z), reference.cdf(z), epsilon = 1e-6);
                }
            }

            #[test]
            fn test_cdf_symmetry() {
                for &z in &[0.3, 1.0, 1.7, 2.5] {
                    assert_abs_diff_eq!(cdf(z) + cdf(-z), 1.0, epsilon = 1e-12);
                }
            }

            #[test]
            fn test_curve_shape() {
                let points = curve(0.0, 1.0, 100, -3.5, 3.5).unwrap();
                assert_eq!(points.len(), 101);
                assert_abs_diff_eq!(points[0].x, -3.5, epsilon = 1e-12);
                assert_abs_diff_eq!(points[100].x, 3.5, epsilon = 1e-12);
                assert!(points.windows(2).all(|w| w[0].x < w[1].x));
                assert_abs_diff_eq!(points[50].y, pdf(0.0, 0.0, 1.0), epsilon = 1e-12);
            }

            #[test]
            fn test_curve_rejects_zero_points() {
                assert!(curve(0.0, 1.0, 0, -1.0, 1.0).is_err());
            }

            #[test]
            fn test_comparison_curves() {
                let params = CurveParameters::default();
                let curves = comparison_curves(50.0, 60.0, 10.0, &params)
                    .unwrap()
                    .value()
                    .unwrap();
                assert_eq!(curves.first.len(), 101);
                assert_eq!(curves.second.len(), 101);
                assert_abs_diff_eq!(curves.first[0].x, 15.0, epsilon = 1e-9);
                assert_abs_diff_eq!(curves.second[100].x, 95.0, epsilon = 1e-9);
            }

            #[test]
            fn test_comparison_curves_degenerate_sd() {
                let params = CurveParameters::default();
                let result = comparison_curves(50.0, 60.0, 0.0, &params).unwrap();
                assert_eq!(result.reason(), Some(Undefined::NonPositiveSd));
            }

            proptest::proptest! {
                #[test]
                fn prop_cdf_is_a_probability(z in -10.0f64..10.0, dz in 0.0f64..1.0) {
                    let p = cdf(z);
                    proptest::prop_assert!((0.0..=1.0).contains(&p));
                    proptest::prop_assert!(cdf(z + dz) >= p - 1e-7);
                }

                #[test]
                fn prop_curve_sample_count(num_points in 1usize..500) {
                    let points = curve(0.0, 1.0, num_points, -3.0, 3.0).unwrap();
                    proptest::prop_assert_eq!(points.len(), num_points + 1);
                }
            }
        }
    }
}
