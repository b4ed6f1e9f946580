//! Tagged results for statistics that may be undefined
//!
//! Every formula in this workspace is a total function: it yields either a
//! value or an [`Undefined`] reason. The reason is distinct from 0, infinity
//! and NaN so a caller can render "N/A", "Infinity" or "Indeterminate (0/0)"
//! instead of a bare number.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a statistic could not be given a finite value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Undefined {
    /// A standard deviation used as a divisor is zero or negative
    #[serde(rename = "sd<=0")]
    NonPositiveSd,
    /// Degrees of freedom are too small for the correction term
    #[serde(rename = "df<=0")]
    NonPositiveDf,
    /// Both arms have the same event rate
    #[serde(rename = "no-difference")]
    NoDifference,
    /// A row or column total of a contingency table is zero
    #[serde(rename = "empty-marginal")]
    EmptyMarginal,
    /// An exposure group of a contingency table has no observations
    #[serde(rename = "empty-group")]
    EmptyGroup,
    /// Non-zero numerator over a zero denominator
    #[serde(rename = "infinite")]
    Unbounded,
    /// Zero numerator over a zero denominator (0/0)
    #[serde(rename = "indeterminate")]
    Indeterminate,
    /// Too few observations
    #[serde(rename = "insufficient-data")]
    InsufficientData,
    /// The data have no spread where spread is divided by
    #[serde(rename = "zero-variance")]
    ZeroVariance,
}

impl Undefined {
    /// Stable machine-readable reason tag
    pub fn tag(&self) -> &'static str {
        match self {
            Self::NonPositiveSd => "sd<=0",
            Self::NonPositiveDf => "df<=0",
            Self::NoDifference => "no-difference",
            Self::EmptyMarginal => "empty-marginal",
            Self::EmptyGroup => "empty-group",
            Self::Unbounded => "infinite",
            Self::Indeterminate => "indeterminate",
            Self::InsufficientData => "insufficient-data",
            Self::ZeroVariance => "zero-variance",
        }
    }
}

impl fmt::Display for Undefined {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::NonPositiveSd => "N/A (SD must be positive)",
            Self::NonPositiveDf => "N/A (df issue)",
            Self::NoDifference => "N/A (No difference)",
            Self::EmptyMarginal => "N/A (empty row or column)",
            Self::EmptyGroup => "N/A (empty group)",
            Self::Unbounded => "Infinity",
            Self::Indeterminate => "Indeterminate (0/0)",
            Self::InsufficientData => "N/A (too few observations)",
            Self::ZeroVariance => "N/A (no variance)",
        };
        write!(f, "{s}")
    }
}

/// A computed statistic or the reason it is undefined
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Measure<T = f64> {
    /// The statistic is defined
    Value(T),
    /// The statistic is undefined for these inputs
    Undefined(Undefined),
}

impl<T> Measure<T> {
    /// Whether a value is present
    pub fn is_defined(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// The value, if defined
    pub fn value(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Undefined(_) => None,
        }
    }

    /// The undefined reason, if any
    pub fn reason(&self) -> Option<Undefined> {
        match self {
            Self::Value(_) => None,
            Self::Undefined(reason) => Some(*reason),
        }
    }

    /// Borrow the inner value
    pub fn as_ref(&self) -> Measure<&T> {
        match self {
            Self::Value(v) => Measure::Value(v),
            Self::Undefined(reason) => Measure::Undefined(*reason),
        }
    }

    /// Transform a defined value, keeping the undefined reason otherwise
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Measure<U> {
        match self {
            Self::Value(v) => Measure::Value(f(v)),
            Self::Undefined(reason) => Measure::Undefined(reason),
        }
    }

    /// Chain another possibly-undefined computation
    pub fn and_then<U, F: FnOnce(T) -> Measure<U>>(self, f: F) -> Measure<U> {
        match self {
            Self::Value(v) => f(v),
            Self::Undefined(reason) => Measure::Undefined(reason),
        }
    }
}

impl<T> From<Undefined> for Measure<T> {
    fn from(reason: Undefined) -> Self {
        Self::Undefined(reason)
    }
}

impl<T: fmt::Display> fmt::Display for Measure<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Value(v) => fmt::Display::fmt(v, f),
            Self::Undefined(reason) => fmt::Display::fmt(reason, f),
        }
    }
}

/// Divide, tagging a zero denominator as unbounded or indeterminate
pub fn ratio(numerator: f64, denominator: f64) -> Measure {
    if denominator != 0.0 {
        Measure::Value(numerator / denominator)
    } else if numerator == 0.0 {
        Measure::Undefined(Undefined::Indeterminate)
    } else {
        Measure::Undefined(Undefined::Unbounded)
    }
}
