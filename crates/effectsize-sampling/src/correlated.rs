//! Correlated pair generator
//!
//! Produces a cloud of points whose linear correlation approximates a target
//! value. Each point combines two approximately normal variates through the
//! Cholesky factor of the 2×2 correlation matrix
//!
//! ```text
//! L = | 1    0          |
//!     | r    sqrt(1-r²) |
//! ```
//!
//! The variates are Irwin–Hall sums (six uniforms minus three), not exact
//! Gaussian draws. Their variance is 1/2 rather than 1, which leaves the
//! correlation structure intact.

use effectsize_core::{Error, Point2D, Result};
use rand::rngs::StdRng;
use rand::{thread_rng, Rng, SeedableRng};
use tracing::{debug, instrument};

/// Number of uniform draws summed per variate
const UNIFORMS_PER_VARIATE: usize = 6;

/// Generator of synthetic bivariate data with a target correlation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelatedPairs {
    target_r: f64,
    location: f64,
    scale: f64,
    seed: Option<u64>,
}

impl CorrelatedPairs {
    /// Create a generator for `target_r` in [-1, 1]
    ///
    /// ±1 is accepted and yields perfectly collinear points. Values outside
    /// the range are rejected rather than clamped.
    pub fn new(target_r: f64) -> Result<Self> {
        if !target_r.is_finite() {
            return Err(Error::non_finite("target_r"));
        }
        if !(-1.0..=1.0).contains(&target_r) {
            return Err(Error::out_of_range("target_r", target_r, -1.0, 1.0));
        }
        Ok(Self {
            target_r,
            location: 5.0,
            scale: 5.0,
            seed: None,
        })
    }

    /// Set random seed for reproducibility
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Map each variate through `location + scale * z` (default 5 + 5z)
    pub fn with_location_scale(mut self, location: f64, scale: f64) -> Self {
        self.location = location;
        self.scale = scale;
        self
    }

    pub fn target_r(&self) -> f64 {
        self.target_r
    }

    /// Generate `n` points
    ///
    /// Without a seed the thread-local RNG is used, so repeated calls differ.
    #[instrument(skip(self), fields(target_r = self.target_r, seeded = self.seed.is_some()))]
    pub fn generate(&self, n: usize) -> Vec<Point2D> {
        let points = match self.seed {
            Some(seed) => self.generate_with_rng(n, &mut StdRng::seed_from_u64(seed)),
            None => self.generate_with_rng(n, &mut thread_rng()),
        };
        debug!("Generated {} correlated points", points.len());
        points
    }

    /// Generate `n` points drawing from the supplied RNG
    pub fn generate_with_rng<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> Vec<Point2D> {
        let r = self.target_r;
        let residual = (1.0 - r * r).sqrt();

        (0..n)
            .map(|_| {
                let (z1, z2) = irwin_hall_pair(rng);
                let x = z1;
                let y = r * z1 + residual * z2;
                Point2D::new(
                    self.location + self.scale * x,
                    self.location + self.scale * y,
                )
            })
            .collect()
    }
}

/// Draw two independent approximately normal variates
///
/// Each is the sum of six uniform(0, 1) draws minus three, so it lies in
/// [-3, 3] with mean 0.
pub fn irwin_hall_pair<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    let mut u1 = 0.0;
    let mut u2 = 0.0;
    for _ in 0..UNIFORMS_PER_VARIATE {
        u1 += rng.gen::<f64>();
        u2 += rng.gen::<f64>();
    }
    (u1 - 3.0, u2 - 3.0)
}

/// Generate `n` points with approximate correlation `target_r`
///
/// Convenience wrapper over [`CorrelatedPairs`] using the thread-local RNG.
pub fn generate_correlated_points(n: usize, target_r: f64) -> Result<Vec<Point2D>> {
    Ok(CorrelatedPairs::new(target_r)?.generate(n))
}
