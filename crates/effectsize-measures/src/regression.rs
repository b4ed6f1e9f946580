//! Ordinary least-squares line fit
//!
//! ```text
//! slope     = (n·Σxy - Σx·Σy) / (n·Σx² - (Σx)²)
//! intercept = (Σy - slope·Σx) / n
//! ```

use effectsize_core::{Measure, Point2D, RegressionFit, Undefined};

/// Least-squares regression of y on x
///
/// Undefined with fewer than two points (`insufficient-data`) or when all x
/// values coincide (`zero-variance`).
pub fn fit_line(points: &[Point2D]) -> Measure<RegressionFit> {
    if points.len() < 2 {
        return Measure::Undefined(Undefined::InsufficientData);
    }

    let (min_x, max_x) = points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), p| {
            (lo.min(p.x), hi.max(p.x))
        });
    if min_x == max_x {
        return Measure::Undefined(Undefined::ZeroVariance);
    }

    let n = points.len() as f64;
    let (sum_x, sum_y, sum_xy, sum_xx) =
        points
            .iter()
            .fold((0.0, 0.0, 0.0, 0.0), |(sx, sy, sxy, sxx), p| {
                (sx + p.x, sy + p.y, sxy + p.x * p.y, sxx + p.x * p.x)
            });

    let denominator = n * sum_xx - sum_x * sum_x;
    if denominator == 0.0 {
        return Measure::Undefined(Undefined::ZeroVariance);
    }

    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Measure::Value(RegressionFit { slope, intercept })
}

/// Endpoints of the fitted line over the observed x range
///
/// `None` when `points` is empty.
pub fn line_endpoints(fit: &RegressionFit, points: &[Point2D]) -> Option<(Point2D, Point2D)> {
    let first = points.first()?;
    let (min_x, max_x) = points.iter().fold((first.x, first.x), |(lo, hi), p| {
        (lo.min(p.x), hi.max(p.x))
    });
    Some((
        Point2D::new(min_x, fit.predict(min_x)),
        Point2D::new(max_x, fit.predict(max_x)),
    ))
}
