//! Synthetic data for effect size demonstrations
//!
//! The only generator is [`CorrelatedPairs`], which produces scatter data
//! with an approximate target Pearson correlation for the correlation and
//! R² views.
//!
//! # Example
//!
//! ```rust
//! use effectsize_sampling::CorrelatedPairs;
//!
//! let points = CorrelatedPairs::new(0.7)
//!     .unwrap()
//!     .with_seed(42)
//!     .generate(50);
//! assert_eq!(points.len(), 50);
//! ```

mod correlated;

pub use correlated::{generate_correlated_points, irwin_hall_pair, CorrelatedPairs};
