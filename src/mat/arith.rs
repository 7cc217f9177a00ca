//! Element-wise arithmetic and matrix multiplication.
//!
//! The in-place operators mutate the receiver and return it for chaining;
//! clone first if the original must be preserved. Scalar and matrix
//! operands are separate methods rather than a dynamic argument. Matrix
//! operands must match the receiver's shape exactly; both sides are walked
//! in the same row-major order.
use crate::error::MatError;

use super::Mat;

impl Mat {
    fn check_same_shape(&self, other: &Mat) -> Result<(), MatError> {
        if other.rows != self.rows {
            return Err(MatError::ShapeMismatch {
                context: "rows",
                expected: self.rows,
                found: other.rows,
            });
        }
        if other.cols != self.cols {
            return Err(MatError::ShapeMismatch {
                context: "cols",
                expected: self.cols,
                found: other.cols,
            });
        }
        Ok(())
    }

    /// Adds a scalar to every element.
    pub fn add_scalar(&mut self, value: f64) -> &mut Self {
        for v in &mut self.data {
            *v += value;
        }
        self
    }

    /// Adds another matrix of identical shape, element by element.
    pub fn add_mat(&mut self, other: &Mat) -> Result<&mut Self, MatError> {
        self.check_same_shape(other)?;
        for (v, o) in self.data.iter_mut().zip(&other.data) {
            *v += o;
        }
        Ok(self)
    }

    /// Subtracts a scalar from every element.
    pub fn sub_scalar(&mut self, value: f64) -> &mut Self {
        for v in &mut self.data {
            *v -= value;
        }
        self
    }

    /// Subtracts another matrix of identical shape, element by element.
    pub fn sub_mat(&mut self, other: &Mat) -> Result<&mut Self, MatError> {
        self.check_same_shape(other)?;
        for (v, o) in self.data.iter_mut().zip(&other.data) {
            *v -= o;
        }
        Ok(self)
    }

    /// Multiplies every element by a scalar.
    pub fn mul_scalar(&mut self, value: f64) -> &mut Self {
        for v in &mut self.data {
            *v *= value;
        }
        self
    }

    /// Multiplies by another matrix of identical shape, element by element.
    /// This is the Hadamard product, not matrix multiplication; see
    /// [`Mat::dot`] for the latter.
    pub fn mul_mat(&mut self, other: &Mat) -> Result<&mut Self, MatError> {
        self.check_same_shape(other)?;
        for (v, o) in self.data.iter_mut().zip(&other.data) {
            *v *= o;
        }
        Ok(self)
    }

    /// Scales every element by a factor. Dedicated alias for scalar
    /// multiplication.
    pub fn scale(&mut self, factor: f64) -> &mut Self {
        self.mul_scalar(factor)
    }

    /// Divides every element by a scalar. A zero scalar follows IEEE 754
    /// semantics and is not rejected.
    pub fn div_scalar(&mut self, value: f64) -> &mut Self {
        for v in &mut self.data {
            *v /= value;
        }
        self
    }

    /// Divides by another matrix of identical shape, element by element.
    /// Every divisor element is scanned before any division happens, so a
    /// zero divisor leaves the receiver untouched.
    pub fn div_mat(&mut self, other: &Mat) -> Result<&mut Self, MatError> {
        self.check_same_shape(other)?;
        if let Some(offset) = other.data.iter().position(|&v| v == 0.0) {
            return Err(MatError::DivisionByZero { offset });
        }
        for (v, o) in self.data.iter_mut().zip(&other.data) {
            *v /= o;
        }
        Ok(self)
    }

    /// Matrix multiplication. Requires `self.ncols() == other.nrows()` and
    /// produces a new rows by `other.ncols()` matrix via the naive triple
    /// loop in `i, j, k` order, with plain accumulation so results match
    /// the canonical rounding behavior.
    pub fn dot(&self, other: &Mat) -> Result<Mat, MatError> {
        if self.cols != other.rows {
            return Err(MatError::ShapeMismatch {
                context: "dot inner dimension (left cols vs right rows)",
                expected: self.cols,
                found: other.rows,
            });
        }
        let mut out = Mat::zeros(self.rows, other.cols);
        for i in 0..self.rows {
            for j in 0..other.cols {
                let mut acc = 0.0;
                for k in 0..self.cols {
                    acc += self.data[i * self.cols + k] * other.data[k * other.cols + j];
                }
                out.data[i * out.cols + j] = acc;
            }
        }
        Ok(out)
    }
}
