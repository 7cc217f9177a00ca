//! Growth operations: appending rows and columns, and concatenation.
//!
//! Appending a row is a plain extend of the flat buffer. Appending columns
//! is structurally harder: the row-major layout forces a full re-stride of
//! every existing row, so `append_col` and `concat` rebuild the buffer in
//! O(rows * cols). Every operation either succeeds completely or leaves the
//! receiver exactly as it was.
use crate::error::MatError;

use super::Mat;

impl Mat {
    /// Appends one row to the bottom. The slice length must equal the
    /// number of columns. Doubles the buffer capacity on overflow so
    /// repeated appends stay amortized O(1).
    pub fn append_row(&mut self, values: &[f64]) -> Result<&mut Self, MatError> {
        if values.len() != self.cols {
            return Err(MatError::ShapeMismatch {
                context: "cols",
                expected: self.cols,
                found: values.len(),
            });
        }
        let needed = self.data.len() + values.len();
        if self.data.capacity() < needed {
            // Vec::reserve rounds up to at least double the current capacity.
            self.data.reserve(needed);
        }
        self.data.extend_from_slice(values);
        self.rows += 1;
        Ok(self)
    }

    /// Appends one column to the right. The slice length must equal the
    /// number of rows. Rewrites the whole buffer to re-stride every row.
    pub fn append_col(&mut self, values: &[f64]) -> Result<&mut Self, MatError> {
        if values.len() != self.rows {
            return Err(MatError::ShapeMismatch {
                context: "rows",
                expected: self.rows,
                found: values.len(),
            });
        }
        let new_cols = self.cols + 1;
        let mut data = Vec::with_capacity((2 * self.rows * new_cols).max(self.data.capacity()));
        for r in 0..self.rows {
            let start = r * self.cols;
            data.extend_from_slice(&self.data[start..start + self.cols]);
            data.push(values[r]);
        }
        self.data = data;
        self.cols = new_cols;
        Ok(self)
    }

    /// Appends every column of `other` to the right of the corresponding
    /// row of the receiver. Row counts must match; `other` is untouched.
    pub fn concat(&mut self, other: &Mat) -> Result<&mut Self, MatError> {
        if other.rows != self.rows {
            return Err(MatError::ShapeMismatch {
                context: "rows",
                expected: self.rows,
                found: other.rows,
            });
        }
        let new_cols = self.cols + other.cols;
        let mut data = Vec::with_capacity((2 * self.rows * new_cols).max(self.data.capacity()));
        for r in 0..self.rows {
            data.extend_from_slice(&self.data[r * self.cols..(r + 1) * self.cols]);
            data.extend_from_slice(&other.data[r * other.cols..(r + 1) * other.cols]);
        }
        self.data = data;
        self.cols = new_cols;
        Ok(self)
    }
}
