//! Dense travel-cost matrix.

use crate::error::{Result, TspError};
use crate::CityIndex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A validated n×n travel-cost matrix stored in row-major order.
///
/// Entry `(i, j)` is the cost of travelling from city `i` to city `j`.
/// The matrix may be asymmetric. Every entry is finite and non-negative and
/// there are at least two cities; both are checked on construction, after
/// which the matrix is immutable.
///
/// # Examples
///
/// ```
/// use u_tsp::matrix::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0.0, 5.0],
///     vec![5.0, 0.0],
/// ]).unwrap();
/// assert_eq!(m.size(), 2);
/// assert_eq!(m.get(0, 1), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawCostMatrix"))]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix from `size * size` row-major entries.
    pub fn new(size: usize, data: Vec<f64>) -> Result<Self> {
        if size < 2 {
            return Err(TspError::InvalidDimension { size });
        }
        let Some(expected) = size.checked_mul(size) else {
            return Err(TspError::MalformedMatrix {
                row: 0,
                col: 0,
                reason: format!("{size}x{size} entries overflow usize"),
            });
        };
        if data.len() != expected {
            return Err(TspError::MalformedMatrix {
                row: data.len() / size,
                col: data.len() % size,
                reason: format!("expected {expected} entries, found {}", data.len()),
            });
        }
        for (k, &cost) in data.iter().enumerate() {
            check_entry(k / size, k % size, cost)?;
        }
        Ok(Self { data, size })
    }

    /// Creates a matrix from a grid of rows.
    ///
    /// Every row must have exactly as many entries as there are rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size < 2 {
            return Err(TspError::InvalidDimension { size });
        }
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TspError::MalformedMatrix {
                    row: i,
                    col: row.len().min(size),
                    reason: format!("expected {size} entries, found {}", row.len()),
                });
            }
            data.extend(row);
        }
        Self::new(size, data)
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cost of the directed edge `from → to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: CityIndex, to: CityIndex) -> f64 {
        self.data[from * self.size + to]
    }

    /// Outgoing costs of city `from`.
    pub fn row(&self, from: CityIndex) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if `city` is a valid index into this matrix.
    pub fn contains(&self, city: CityIndex) -> bool {
        city < self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Sum of directed edge costs between consecutive cities of `path`.
    ///
    /// A closed tour must repeat its start city at the end for the closing
    /// edge to be counted.
    pub fn tour_cost(&self, path: &[CityIndex]) -> f64 {
        path.windows(2).map(|w| self.get(w[0], w[1])).sum()
    }
}

/// Unchecked wire form; deserialized matrices go through [`CostMatrix::new`].
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawCostMatrix {
    data: Vec<f64>,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawCostMatrix> for CostMatrix {
    type Error = TspError;

    fn try_from(raw: RawCostMatrix) -> Result<Self> {
        Self::new(raw.size, raw.data)
    }
}

fn check_entry(row: usize, col: usize, cost: f64) -> Result<()> {
    let reason = if cost.is_nan() {
        "cost is not a number".to_string()
    } else if cost.is_infinite() {
        "cost is infinite".to_string()
    } else if cost < 0.0 {
        format!("negative cost {cost}")
    } else {
        return Ok(());
    };
    Err(TspError::MalformedMatrix { row, col, reason })
}
