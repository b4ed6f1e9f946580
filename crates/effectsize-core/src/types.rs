//! Value types shared by the formulas
//!
//! All types are transient: built from the current parameters, read once,
//! and dropped. Derived quantities are recomputed on demand.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One sample of a scatter or curve dataset
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point2D {
    pub x: f64,
    pub y: f64,
}

impl Point2D {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The same point with coordinates swapped
    pub fn transposed(&self) -> Self {
        Self { x: self.y, y: self.x }
    }
}

impl From<(f64, f64)> for Point2D {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// A 2×2 table of counts
///
/// Rows are exposure (or group) status, columns are outcome status:
///
/// |            | event | no event |
/// |------------|-------|----------|
/// | exposed    | a     | b        |
/// | unexposed  | c     | d        |
///
/// Marginals are always derived from the four cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ContingencyTable {
    pub a: u64,
    pub b: u64,
    pub c: u64,
    pub d: u64,
}

impl ContingencyTable {
    pub const fn new(a: u64, b: u64, c: u64, d: u64) -> Self {
        Self { a, b, c, d }
    }

    /// Build a table from signed counts, rejecting negative cells
    pub fn from_signed(a: i64, b: i64, c: i64, d: i64) -> Result<Self> {
        let cell = |name: &str, value: i64| -> Result<u64> {
            u64::try_from(value).map_err(|_| Error::negative_count(name, value))
        };
        Ok(Self {
            a: cell("a", a)?,
            b: cell("b", b)?,
            c: cell("c", c)?,
            d: cell("d", d)?,
        })
    }

    /// Exposed row total (a + b)
    pub fn row1_total(&self) -> u128 {
        wide_sum(&[self.a, self.b])
    }

    /// Unexposed row total (c + d)
    pub fn row2_total(&self) -> u128 {
        wide_sum(&[self.c, self.d])
    }

    /// Event column total (a + c)
    pub fn col1_total(&self) -> u128 {
        wide_sum(&[self.a, self.c])
    }

    /// No-event column total (b + d)
    pub fn col2_total(&self) -> u128 {
        wide_sum(&[self.b, self.d])
    }

    pub fn grand_total(&self) -> u128 {
        wide_sum(&self.cells())
    }

    /// Event proportion in the exposed row, 0 for an empty row
    pub fn risk_exposed(&self) -> f64 {
        proportion(self.a, self.row1_total())
    }

    /// Event proportion in the unexposed row, 0 for an empty row
    pub fn risk_unexposed(&self) -> f64 {
        proportion(self.c, self.row2_total())
    }

    /// Cells in row-major order
    pub fn cells(&self) -> [u64; 4] {
        [self.a, self.b, self.c, self.d]
    }

    pub fn has_zero_cell(&self) -> bool {
        self.cells().contains(&0)
    }
}

/// Totals are widened to u128 so that no combination of u64 cells overflows
fn wide_sum(cells: &[u64]) -> u128 {
    cells.iter().map(|&cell| u128::from(cell)).sum()
}

fn proportion(part: u64, total: u128) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64
    }
}

/// Summary of one sample group
///
/// `sd` is the common (already pooled) standard deviation supplied by the
/// caller; it is never derived from raw data here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub mean: f64,
    pub sd: f64,
    pub n: usize,
}

impl GroupStats {
    pub const fn new(mean: f64, sd: f64, n: usize) -> Self {
        Self { mean, sd, n }
    }
}

/// Slope and intercept of a fitted line
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionFit {
    pub slope: f64,
    pub intercept: f64,
}

impl RegressionFit {
    pub const fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Fitted value at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }
}
