//! Core types for effect size computation
//!
//! This crate provides the foundation shared by the effect size formulas and
//! the sampling utilities:
//!
//! - [`Error`] / [`Result`]: contract violations (out-of-domain parameters)
//! - [`Measure`] / [`Undefined`]: values that may be statistically undefined
//! - Data model: [`Point2D`], [`ContingencyTable`], [`GroupStats`], [`RegressionFit`]
//! - [`math::distributions::normal`]: density, CDF and curve sampling
//!
//! # Example
//!
//! ```rust
//! use effectsize_core::math::distributions::normal;
//! use effectsize_core::{ratio, Measure, Undefined};
//!
//! let p = normal::cdf(1.96);
//! assert!((p - 0.975).abs() < 1e-4);
//!
//! assert_eq!(ratio(1.0, 0.0), Measure::Undefined(Undefined::Unbounded));
//! ```

pub mod error;
pub mod math;
pub mod measure;
pub mod types;

pub use error::{Error, Result};
pub use measure::{ratio, Measure, Undefined};
pub use types::{ContingencyTable, GroupStats, Point2D, RegressionFit};

/// Alias matching the glossary name of the 2×2 table
pub type ContingencyCell2x2 = ContingencyTable;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::math::distributions::normal;
    pub use crate::{
        ContingencyTable, Error, GroupStats, Measure, Point2D, RegressionFit, Result, Undefined,
    };
}
