//! Effect size toolkit
//!
//! Re-exports the workspace crates under one name:
//!
//! - [`effectsize_core`]: error type, [`Measure`] results, data model, normal distribution
//! - [`effectsize_sampling`]: synthetic correlated data
//! - [`effectsize_measures`]: the effect size formulas

pub use effectsize_core;
pub use effectsize_measures;
pub use effectsize_sampling;

pub use effectsize_core::{ContingencyTable, Error, GroupStats, Measure, Point2D, Result, Undefined};
pub use effectsize_measures::{EffectSize, EffectSizeInterpretation, EffectSizeType};
