//! Reductions over the whole matrix or a single row/column.
use crate::error::MatError;

use super::Mat;

/// Selects whether an axis reduction walks one row (summing across its
/// columns) or one column (summing across its rows).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// Reduce over a row; axis value 0.
    Row,
    /// Reduce over a column; axis value 1.
    Col,
}

impl TryFrom<usize> for Axis {
    type Error = MatError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Axis::Row),
            1 => Ok(Axis::Col),
            other => Err(MatError::InvalidArgument(format!(
                "axis must be 0 (row) or 1 (column), got {}",
                other
            ))),
        }
    }
}

impl Mat {
    /// Validates an axis index and returns the selected slice as
    /// (start offset, stride, count).
    fn axis_walk(&self, axis: Axis, index: usize) -> Result<(usize, usize, usize), MatError> {
        match axis {
            Axis::Row => {
                if index >= self.rows {
                    return Err(MatError::IndexOutOfRange {
                        what: "row",
                        index: index as isize,
                        bound: self.rows,
                    });
                }
                Ok((index * self.cols, 1, self.cols))
            }
            Axis::Col => {
                if index >= self.cols {
                    return Err(MatError::IndexOutOfRange {
                        what: "column",
                        index: index as isize,
                        bound: self.cols,
                    });
                }
                Ok((index, self.cols, self.rows))
            }
        }
    }

    fn axis_values(&self, axis: Axis, index: usize) -> Result<impl Iterator<Item = f64> + '_, MatError> {
        let (start, stride, count) = self.axis_walk(axis, index)?;
        Ok((0..count).map(move |i| self.data[start + i * stride]))
    }

    /// Sum of every element.
    pub fn sum(&self) -> f64 {
        self.data.iter().sum()
    }

    /// Sum of one row or column.
    pub fn sum_axis(&self, axis: Axis, index: usize) -> Result<f64, MatError> {
        Ok(self.axis_values(axis, index)?.sum())
    }

    /// Arithmetic mean of every element.
    pub fn avg(&self) -> f64 {
        self.sum() / self.data.len() as f64
    }

    /// Arithmetic mean of one row or column.
    pub fn avg_axis(&self, axis: Axis, index: usize) -> Result<f64, MatError> {
        let (_, _, count) = self.axis_walk(axis, index)?;
        Ok(self.sum_axis(axis, index)? / count as f64)
    }

    /// Product of every element, starting from the multiplicative identity.
    pub fn prod(&self) -> f64 {
        self.data.iter().product()
    }

    /// Product of one row or column.
    pub fn prod_axis(&self, axis: Axis, index: usize) -> Result<f64, MatError> {
        Ok(self.axis_values(axis, index)?.product())
    }

    /// Population standard deviation of every element, computed with the
    /// two-pass mean-then-variance algorithm.
    pub fn std(&self) -> f64 {
        let avg = self.avg();
        let sum: f64 = self.data.iter().map(|v| (avg - v) * (avg - v)).sum();
        (sum / self.data.len() as f64).sqrt()
    }

    /// Population standard deviation of one row or column.
    pub fn std_axis(&self, axis: Axis, index: usize) -> Result<f64, MatError> {
        let (_, _, count) = self.axis_walk(axis, index)?;
        let avg = self.avg_axis(axis, index)?;
        let sum: f64 = self
            .axis_values(axis, index)?
            .map(|v| (avg - v) * (avg - v))
            .sum();
        Ok((sum / count as f64).sqrt())
    }

    /// The smallest element and its linear offset, or `None` for an empty
    /// matrix.
    pub fn min(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in self.data.iter().enumerate() {
            match best {
                Some((_, b)) if v >= b => {}
                _ => best = Some((i, v)),
            }
        }
        best
    }

    /// The smallest element of one row or column, with its offset within
    /// that row or column.
    pub fn min_axis(&self, axis: Axis, index: usize) -> Result<(usize, f64), MatError> {
        let mut values = self.axis_values(axis, index)?.enumerate();
        let (mut best_i, mut best) = values
            .next()
            .ok_or_else(|| MatError::InvalidArgument("cannot take min of an empty slice".into()))?;
        for (i, v) in values {
            if v < best {
                best_i = i;
                best = v;
            }
        }
        Ok((best_i, best))
    }

    /// The largest element and its linear offset, or `None` for an empty
    /// matrix.
    pub fn max(&self) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        for (i, &v) in self.data.iter().enumerate() {
            match best {
                Some((_, b)) if v <= b => {}
                _ => best = Some((i, v)),
            }
        }
        best
    }

    /// The largest element of one row or column, with its offset within
    /// that row or column.
    pub fn max_axis(&self, axis: Axis, index: usize) -> Result<(usize, f64), MatError> {
        let mut values = self.axis_values(axis, index)?.enumerate();
        let (mut best_i, mut best) = values
            .next()
            .ok_or_else(|| MatError::InvalidArgument("cannot take max of an empty slice".into()))?;
        for (i, v) in values {
            if v > best {
                best_i = i;
                best = v;
            }
        }
        Ok((best_i, best))
    }
}
