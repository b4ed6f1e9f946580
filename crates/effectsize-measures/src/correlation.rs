//! Correlation-based effect size measures
//!
//! Pearson's product-moment correlation and the coefficient of determination.

use crate::regression::fit_line;
use effectsize_core::{Error, Measure, Point2D, Result, Undefined};
use num_traits::Float;

/// Product-moment correlation over paired observations
///
/// Returns zero for fewer than two pairs or when either variable has no
/// spread.
fn product_moment<T, I>(pairs: I) -> T
where
    T: Float,
    I: Iterator<Item = (T, T)> + Clone,
{
    let (count, sum_x, sum_y) = pairs
        .clone()
        .fold((0usize, T::zero(), T::zero()), |(n, sx, sy), (x, y)| {
            (n + 1, sx + x, sy + y)
        });
    if count < 2 {
        return T::zero();
    }
    let Some(n) = T::from(count) else {
        return T::zero();
    };

    let mean_x = sum_x / n;
    let mean_y = sum_y / n;

    let (numerator, sum_sq_x, sum_sq_y) =
        pairs.fold((T::zero(), T::zero(), T::zero()), |(num, sxx, syy), (x, y)| {
            let dx = x - mean_x;
            let dy = y - mean_y;
            (num + dx * dy, sxx + dx * dx, syy + dy * dy)
        });

    let denominator = (sum_sq_x * sum_sq_y).sqrt();
    if denominator == T::zero() {
        return T::zero();
    }
    numerator / denominator
}

/// Pearson correlation of two equally long slices
///
/// Degenerate input (fewer than two values, or zero variance) yields 0.
pub fn pearson_correlation<T: Float>(x: &[T], y: &[T]) -> Result<T> {
    if x.len() != y.len() {
        return Err(Error::InvalidInput(format!(
            "Arrays must have the same length, got {} and {}",
            x.len(),
            y.len()
        )));
    }
    Ok(product_moment(x.iter().copied().zip(y.iter().copied())))
}

/// Pearson's r of a point set
///
/// Returns 0 when there are fewer than two points or when x or y has no
/// spread.
pub fn pearson_r(points: &[Point2D]) -> f64 {
    product_moment(points.iter().map(|p| (p.x, p.y)))
}

/// R² of a simple linear regression, from its correlation
pub fn r_squared_from_r(r: f64) -> f64 {
    r * r
}

/// R² = 1 − SS_residual / SS_total of the least-squares line
///
/// Undefined with fewer than two points (`insufficient-data`) or when x or
/// y has no spread (`zero-variance`).
pub fn r_squared(points: &[Point2D]) -> Measure<f64> {
    fit_line(points).and_then(|fit| {
        let n = points.len() as f64;
        let mean_y = points.iter().map(|p| p.y).sum::<f64>() / n;

        let (ss_residual, ss_total) = points.iter().fold((0.0, 0.0), |(res, tot), p| {
            (
                res + (p.y - fit.predict(p.x)).powi(2),
                tot + (p.y - mean_y).powi(2),
            )
        });

        if ss_total == 0.0 {
            return Measure::Undefined(Undefined::ZeroVariance);
        }
        Measure::Value(1.0 - ss_residual / ss_total)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn points(xs: &[f64], ys: &[f64]) -> Vec<Point2D> {
        xs.iter().zip(ys).map(|(&x, &y)| Point2D::new(x, y)).collect()
    }

    #[test]
    fn test_exact_linear_relationships() {
        let x = [0.5, 1.5, 2.5, 3.5];
        let rising: Vec<f64> = x.iter().map(|v| 3.0 * v + 1.0).collect();
        let falling: Vec<f64> = x.iter().map(|v| 7.0 - 0.5 * v).collect();

        assert_abs_diff_eq!(pearson_correlation(&x, &rising).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(pearson_correlation(&x, &falling).unwrap(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_pearson_correlation_f32() {
        let x: Vec<f32> = vec![1.0, 2.0, 3.0, 4.0];
        let y: Vec<f32> = vec![1.0, 3.0, 2.0, 4.0];
        let r = pearson_correlation(&x, &y).unwrap();
        assert!((r - 0.8).abs() < 1e-5);
    }

    #[test]
    fn test_pearson_correlation_length_mismatch() {
        assert!(pearson_correlation(&[1.0, 2.0], &[1.0]).is_err());
    }

    #[test]
    fn test_zero_variance_yields_zero() {
        let data = points(&[1.0, 2.0, 3.0, 4.0, 5.0], &[5.0, 5.0, 5.0, 5.0, 5.0]);
        assert_eq!(pearson_r(&data), 0.0);
    }

    #[test]
    fn test_too_few_points_yield_zero() {
        assert_eq!(pearson_r(&[]), 0.0);
        assert_eq!(pearson_r(&[Point2D::new(1.0, 2.0)]), 0.0);
    }

    #[test]
    fn test_r_squared_matches_r() {
        let data = points(
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
            &[2.1, 3.9, 6.2, 7.8, 9.7, 12.4],
        );
        let r = pearson_r(&data);
        let r2 = r_squared(&data).value().unwrap();
        assert_abs_diff_eq!(r2, r_squared_from_r(r), epsilon = 1e-10);
        assert!(r2 > 0.99);
    }

    #[test]
    fn test_r_squared_degenerate() {
        assert_eq!(
            r_squared(&[Point2D::new(1.0, 1.0)]).reason(),
            Some(Undefined::InsufficientData)
        );

        let flat_y = points(&[1.0, 2.0, 3.0], &[4.0, 4.0, 4.0]);
        assert_eq!(r_squared(&flat_y).reason(), Some(Undefined::ZeroVariance));

        let flat_x = points(&[2.0, 2.0, 2.0], &[1.0, 2.0, 3.0]);
        assert_eq!(r_squared(&flat_x).reason(), Some(Undefined::ZeroVariance));
    }
}
