use rendezvous_matrix_providers::travel_time_matrix::TravelTimeMatrix;

use crate::error::OptimizeError;

/// Round-trip minutes, one row per venue and one column per attendee.
///
/// Stored row-major like [`TravelTimeMatrix`]. Rows and columns carry no key
/// of their own: their order is the order the venues and attendees were
/// requested in.
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    rows: usize,
    cols: usize,
    minutes: Vec<f64>,
}

impl CostMatrix {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            minutes: vec![0.0; rows * cols],
        }
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, OptimizeError> {
        let num_rows = rows.len();
        let num_cols = rows.first().map(|row| row.len()).unwrap_or(0);

        if let Some(row) = rows.iter().find(|row| row.len() != num_cols) {
            return Err(OptimizeError::shape((num_rows, num_cols), (num_rows, row.len())));
        }

        Ok(Self {
            rows: num_rows,
            cols: num_cols,
            minutes: rows.into_iter().flatten().collect(),
        })
    }

    /// Adds the transposed outbound leg (attendees x venues) to the return leg
    /// (venues x attendees).
    pub fn round_trip(
        outbound: &TravelTimeMatrix,
        inbound: &TravelTimeMatrix,
    ) -> Result<Self, OptimizeError> {
        let outbound = outbound.transpose();

        if outbound.shape() != inbound.shape() {
            return Err(OptimizeError::shape(inbound.shape(), outbound.shape()));
        }

        Ok(Self {
            rows: inbound.rows(),
            cols: inbound.cols(),
            minutes: outbound
                .values()
                .iter()
                .zip(inbound.values())
                .map(|(to_venue, from_venue)| to_venue + from_venue)
                .collect(),
        })
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
    pub fn get(&self, venue: usize, attendee: usize) -> f64 {
        self.minutes[venue * self.cols + attendee]
    }

    pub fn row(&self, venue: usize) -> &[f64] {
        &self.minutes[venue * self.cols..(venue + 1) * self.cols]
    }

    pub fn iter_rows(&self) -> impl Iterator<Item = &[f64]> {
        (0..self.rows).map(|venue| self.row(venue))
    }

    pub fn ensure_shape(&self, rows: usize, cols: usize) -> Result<(), OptimizeError> {
        if self.shape() != (rows, cols) {
            return Err(OptimizeError::shape((rows, cols), self.shape()));
        }
        Ok(())
    }

    /// Side by side concatenation; all blocks must have the same row count.
    pub fn hstack(blocks: &[CostMatrix]) -> Result<Self, OptimizeError> {
        let rows = blocks.first().map(|block| block.rows).unwrap_or(0);
        let cols = blocks.iter().map(|block| block.cols).sum();

        if let Some(block) = blocks.iter().find(|block| block.rows != rows) {
            return Err(OptimizeError::shape((rows, block.cols), block.shape()));
        }

        let mut minutes = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            for block in blocks {
                minutes.extend_from_slice(block.row(row));
            }
        }

        Ok(Self {
            rows,
            cols,
            minutes,
        })
    }

    /// Top to bottom concatenation; all blocks must have the same column count.
    pub fn vstack(blocks: &[CostMatrix]) -> Result<Self, OptimizeError> {
        let cols = blocks.first().map(|block| block.cols).unwrap_or(0);
        let rows = blocks.iter().map(|block| block.rows).sum();

        if let Some(block) = blocks.iter().find(|block| block.cols != cols) {
            return Err(OptimizeError::shape((block.rows, cols), block.shape()));
        }

        let mut minutes = Vec::with_capacity(rows * cols);
        for block in blocks {
            minutes.extend_from_slice(&block.minutes);
        }

        Ok(Self {
            rows,
            cols,
            minutes,
        })
    }

    /// Moves column `k` to column `positions[k]`.
    ///
    /// `positions` must be a permutation of `0..cols`.
    pub fn scatter_columns(&self, positions: &[usize]) -> Result<Self, OptimizeError> {
        let mut seen = vec![false; self.cols];
        let is_permutation = positions.len() == self.cols
            && positions
                .iter()
                .all(|&position| position < self.cols && !std::mem::replace(&mut seen[position], true));

        if !is_permutation {
            return Err(OptimizeError::shape(self.shape(), (self.rows, positions.len())));
        }

        let mut minutes = vec![0.0; self.minutes.len()];
        for row in 0..self.rows {
            for (col, &position) in positions.iter().enumerate() {
                minutes[row * self.cols + position] = self.get(row, col);
            }
        }

        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            minutes,
        })
    }
}
