use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// One-way travel durations in minutes.
///
/// Rows are origins and columns are destinations, stored row-major:
/// `index = origin * cols + destination`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TravelTimeMatrix {
    rows: usize,
    cols: usize,
    minutes: Vec<f64>,
}

impl TravelTimeMatrix {
    pub fn new(rows: usize, cols: usize, minutes: Vec<f64>) -> Result<Self, ProviderError> {
        if minutes.len() != rows * cols {
            return Err(ProviderError::Malformed(format!(
                "{} values cannot fill a {}x{} matrix",
                minutes.len(),
                rows,
                cols
            )));
        }

        Ok(Self {
            rows,
            cols,
            minutes,
        })
    }

    /// Builds a matrix from nested rows; every row must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, ProviderError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map(|row| row.len()).unwrap_or(0);

        if let Some(row) = rows.iter().find(|row| row.len() != num_cols) {
            return Err(ProviderError::Shape {
                expected_rows: num_rows,
                expected_cols: num_cols,
                rows: num_rows,
                cols: row.len(),
            });
        }

        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            minutes: rows.into_iter().flatten().collect(),
        })
    }

    pub fn filled(rows: usize, cols: usize, value: f64) -> Self {
        Self {
            rows,
            cols,
            minutes: vec![value; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[inline(always)]
    pub fn get(&self, origin: usize, destination: usize) -> f64 {
        self.minutes[origin * self.cols + destination]
    }

    pub fn row(&self, origin: usize) -> &[f64] {
        &self.minutes[origin * self.cols..(origin + 1) * self.cols]
    }

    pub fn values(&self) -> &[f64] {
        &self.minutes
    }

    pub fn transpose(&self) -> Self {
        let mut minutes = Vec::with_capacity(self.minutes.len());
        for destination in 0..self.cols {
            for origin in 0..self.rows {
                minutes.push(self.get(origin, destination));
            }
        }

        Self {
            rows: self.cols,
            cols: self.rows,
            minutes,
        }
    }

    /// Fails unless the matrix has exactly `rows` origins and `cols` destinations.
    pub fn ensure_shape(&self, rows: usize, cols: usize) -> Result<(), ProviderError> {
        if self.shape() != (rows, cols) {
            return Err(ProviderError::Shape {
                expected_rows: rows,
                expected_cols: cols,
                rows: self.rows,
                cols: self.cols,
            });
        }

        Ok(())
    }
}
