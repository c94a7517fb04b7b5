//! Altitude grid type

use crate::error::{Error, Result};
use ndarray::Array2;

/// A rectangular grid of integer altitudes.
///
/// `HeightGrid` is the raw input terrain: rows of signed altitude samples.
/// It is immutable after construction and always contains at least one row
/// and one column, with all rows of equal length.
///
/// # Example
///
/// ```
/// use wiremap_core::HeightGrid;
///
/// let grid = HeightGrid::from_rows(vec![
///     vec![0, 1, 0],
///     vec![2, 8, 2],
/// ]).unwrap();
///
/// assert_eq!(grid.shape(), (2, 3));
/// assert_eq!(grid.get(1, 1).unwrap(), 8);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HeightGrid {
    /// Altitude data stored in row-major order (row, col)
    data: Array2<i32>,
}

impl HeightGrid {
    /// Create a grid from rows of altitudes.
    ///
    /// Fails with [`Error::EmptyGrid`] if there are no rows or no columns,
    /// and with [`Error::RaggedGrid`] if rows differ in length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Result<Self> {
        if rows.is_empty() {
            return Err(Error::EmptyGrid);
        }
        let cols = rows[0].len();
        if cols == 0 {
            return Err(Error::EmptyGrid);
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(Error::RaggedGrid {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
        }

        let nrows = rows.len();
        let data = Array2::from_shape_fn((nrows, cols), |(r, c)| rows[r][c]);
        Ok(Self { data })
    }

    /// Create a grid from a flat row-major vector.
    pub fn from_vec(data: Vec<i32>, rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(Error::EmptyGrid);
        }
        if data.len() != rows * cols {
            return Err(Error::InvalidParameter {
                name: "data",
                value: data.len().to_string(),
                reason: format!("expected {} cells for a {}x{} grid", rows * cols, rows, cols),
            });
        }

        let array = Array2::from_shape_vec((rows, cols), data).map_err(|e| {
            Error::InvalidParameter {
                name: "data",
                value: format!("{}x{}", rows, cols),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { data: array })
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.data.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.data.ncols()
    }

    /// Dimensions as (rows, cols)
    pub fn shape(&self) -> (usize, usize) {
        self.data.dim()
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the grid is empty (never true for a constructed grid)
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get the altitude at (row, col)
    pub fn get(&self, row: usize, col: usize) -> Result<i32> {
        self.data
            .get((row, col))
            .copied()
            .ok_or(Error::InvalidParameter {
                name: "index",
                value: format!("({}, {})", row, col),
                reason: format!("grid is {}x{}", self.rows(), self.cols()),
            })
    }

    /// Get a reference to the underlying array
    pub fn data(&self) -> &Array2<i32> {
        &self.data
    }

    /// Calculate altitude statistics over all cells
    pub fn statistics(&self) -> GridStatistics {
        let mut min = i32::MAX;
        let mut max = i32::MIN;
        let mut sum: i64 = 0;

        for &value in self.data.iter() {
            min = min.min(value);
            max = max.max(value);
            sum += i64::from(value);
        }

        GridStatistics {
            min,
            max,
            mean: sum as f64 / self.len() as f64,
        }
    }
}

/// Basic altitude statistics for a grid.
///
/// The grid invariant (at least one cell) makes every field total.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStatistics {
    pub min: i32,
    pub max: i32,
    pub mean: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn grid_creation() {
        let grid = HeightGrid::from_rows(vec![vec![0, 1], vec![2, 3], vec![4, 5]]).unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 2);
        assert_eq!(grid.shape(), (3, 2));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get(2, 1).unwrap(), 5);
    }

    #[test]
    fn grid_rejects_empty() {
        assert!(matches!(
            HeightGrid::from_rows(vec![]),
            Err(Error::EmptyGrid)
        ));
        assert!(matches!(
            HeightGrid::from_rows(vec![vec![], vec![]]),
            Err(Error::EmptyGrid)
        ));
    }

    #[test]
    fn grid_rejects_ragged_rows() {
        let result = HeightGrid::from_rows(vec![vec![1, 2, 3], vec![4, 5]]);
        match result {
            Err(Error::RaggedGrid {
                row,
                expected,
                actual,
            }) => {
                assert_eq!(row, 1);
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("expected RaggedGrid, got {:?}", other),
        }
    }

    #[test]
    fn grid_from_vec() {
        let grid = HeightGrid::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
        assert_eq!(grid.get(0, 2).unwrap(), 3);
        assert_eq!(grid.get(1, 0).unwrap(), 4);

        assert!(HeightGrid::from_vec(vec![1, 2, 3], 2, 2).is_err());
        assert!(matches!(
            HeightGrid::from_vec(vec![], 0, 0),
            Err(Error::EmptyGrid)
        ));
    }

    #[test]
    fn grid_statistics() {
        let grid = HeightGrid::from_rows(vec![vec![-2, 0], vec![4, 6]]).unwrap();
        let stats = grid.statistics();
        assert_eq!(stats.min, -2);
        assert_eq!(stats.max, 6);
        assert_relative_eq!(stats.mean, 2.0);
    }

    #[test]
    fn grid_out_of_bounds_get() {
        let grid = HeightGrid::from_rows(vec![vec![1]]).unwrap();
        assert!(grid.get(0, 0).is_ok());
        assert!(grid.get(1, 0).is_err());
    }
}
