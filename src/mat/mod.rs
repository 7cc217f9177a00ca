//! Core matrix type: storage, constructors, shape queries, element access,
//! row/column extraction and mutation, transpose, and reshape.
use std::fmt;
use std::ops::{Index, IndexMut};

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::MatError;

mod arith;
mod reduce;
mod scan;
mod shape;

pub use reduce::Axis;

/// A dense rows-by-cols matrix of `f64` stored row-major in one flat buffer.
///
/// The element at `(row, col)` lives at `data[row * cols + col]` and
/// `data.len() == rows * cols` holds after every public operation. Capacity
/// may exceed length: the growth-oriented constructors reserve twice the
/// initial length so repeated appends are amortized.
///
/// Equality (`==`) requires matching dimensions and exact pairwise `f64`
/// equality, no tolerance. A `Mat` is not internally synchronized; sharing
/// one across threads for concurrent mutation is the caller's
/// responsibility.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Mat {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Mat {
    /// An empty 0x0 matrix with no allocation.
    pub fn new() -> Self {
        Self {
            rows: 0,
            cols: 0,
            data: Vec::new(),
        }
    }

    /// An `n` by `n` matrix of zeros with capacity for twice its length.
    pub fn square(n: usize) -> Self {
        Self::zeros(n, n)
    }

    /// A `rows` by `cols` matrix of zeros with capacity for twice its
    /// length, so that later appends avoid reallocation until the reserve
    /// fills up.
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let len = rows * cols;
        let mut data = Vec::with_capacity(2 * len);
        data.resize(len, 0.0);
        Self { rows, cols, data }
    }

    /// A `rows` by `cols` matrix of zeros with a caller-chosen capacity,
    /// for matrices known to be static or memory-constrained. A capacity
    /// below `rows * cols` is raised to the length.
    pub fn with_capacity(rows: usize, cols: usize, capacity: usize) -> Self {
        let len = rows * cols;
        let mut data = Vec::with_capacity(capacity.max(len));
        data.resize(len, 0.0);
        Self { rows, cols, data }
    }

    /// A 1 by N row vector copied from `values`, with the doubled growth
    /// reserve.
    pub fn from_slice(values: &[f64]) -> Self {
        let mut data = Vec::with_capacity(2 * values.len());
        data.extend_from_slice(values);
        Self {
            rows: 1,
            cols: values.len(),
            data,
        }
    }

    /// Builds a matrix from a flat buffer and explicit dimensions. The
    /// product of the dimensions must equal the buffer length.
    pub fn from_shape_vec(shape: (usize, usize), mut data: Vec<f64>) -> Result<Self, MatError> {
        let (rows, cols) = shape;
        if rows * cols != data.len() {
            return Err(MatError::ShapeMismatch {
                context: "total element count",
                expected: rows * cols,
                found: data.len(),
            });
        }
        data.reserve(data.len());
        Ok(Self { rows, cols, data })
    }

    /// Builds a matrix from nested rows. Every inner slice must have the
    /// same length as the first.
    pub fn from_nested(rows: &[Vec<f64>]) -> Result<Self, MatError> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(2 * rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(MatError::ShapeMismatch {
                    context: "row length",
                    expected: cols,
                    found: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Like [`Mat::from_nested`], but validates that the product of the
    /// requested dimensions equals the number of supplied values and
    /// reinterprets the flattened buffer under them.
    pub fn from_nested_shape(shape: (usize, usize), rows: &[Vec<f64>]) -> Result<Self, MatError> {
        let mut m = Self::from_nested(rows)?;
        let (new_rows, new_cols) = shape;
        if new_rows * new_cols != m.data.len() {
            return Err(MatError::ShapeMismatch {
                context: "total element count",
                expected: new_rows * new_cols,
                found: m.data.len(),
            });
        }
        m.rows = new_rows;
        m.cols = new_cols;
        Ok(m)
    }

    /// A `rows` by `cols` matrix of uniform values drawn from `[0, 1)`.
    pub fn rand(rows: usize, cols: usize) -> Self {
        let mut rng = rand::thread_rng();
        let mut m = Self::zeros(rows, cols);
        for v in m.data.iter_mut() {
            *v = rng.gen::<f64>();
        }
        log::trace!("filled {}x{} matrix with uniform values in [0, 1)", rows, cols);
        m
    }

    /// A `rows` by `cols` matrix of uniform values drawn from `[0, to)`.
    pub fn rand_to(rows: usize, cols: usize, to: f64) -> Self {
        let mut rng = rand::thread_rng();
        let mut m = Self::zeros(rows, cols);
        for v in m.data.iter_mut() {
            *v = rng.gen::<f64>() * to;
        }
        log::trace!("filled {}x{} matrix with uniform values in [0, {})", rows, cols, to);
        m
    }

    /// A `rows` by `cols` matrix of uniform values drawn from `[from, to)`.
    /// `from` must be strictly less than `to`.
    pub fn rand_range(rows: usize, cols: usize, from: f64, to: f64) -> Result<Self, MatError> {
        if !(from < to) {
            return Err(MatError::InvalidArgument(format!(
                "lower bound {} must be strictly less than upper bound {}",
                from, to
            )));
        }
        let mut rng = rand::thread_rng();
        let mut m = Self::zeros(rows, cols);
        for v in m.data.iter_mut() {
            *v = rng.gen::<f64>() * (to - from) + from;
        }
        log::trace!(
            "filled {}x{} matrix with uniform values in [{}, {})",
            rows,
            cols,
            from,
            to
        );
        Ok(m)
    }

    /// Used by the CSV loader, which sizes the buffer exactly.
    pub(crate) fn from_parts(rows: usize, cols: usize, data: Vec<f64>) -> Self {
        debug_assert_eq!(rows * cols, data.len());
        Self { rows, cols, data }
    }

    pub fn nrows(&self) -> usize {
        self.rows
    }

    pub fn ncols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Current capacity of the backing buffer, in elements.
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    #[inline]
    fn offset(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// The element at `(row, col)`, bounds-checked.
    pub fn get(&self, row: usize, col: usize) -> Result<f64, MatError> {
        self.check_rc(row, col)?;
        Ok(self.data[self.offset(row, col)])
    }

    /// Writes the element at `(row, col)`, bounds-checked.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> Result<&mut Self, MatError> {
        self.check_rc(row, col)?;
        let idx = self.offset(row, col);
        self.data[idx] = value;
        Ok(self)
    }

    fn check_rc(&self, row: usize, col: usize) -> Result<(), MatError> {
        if row >= self.rows {
            return Err(MatError::IndexOutOfRange {
                what: "row",
                index: row as isize,
                bound: self.rows,
            });
        }
        if col >= self.cols {
            return Err(MatError::IndexOutOfRange {
                what: "column",
                index: col as isize,
                bound: self.cols,
            });
        }
        Ok(())
    }

    /// An owned flat copy of all values in row-major order.
    pub fn vals(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// An owned nested copy of all rows. Mutating the result never affects
    /// the matrix.
    pub fn to_nested(&self) -> Vec<Vec<f64>> {
        (0..self.rows)
            .map(|r| self.data[r * self.cols..(r + 1) * self.cols].to_vec())
            .collect()
    }

    /// Resolves a possibly-negative index over `[-len, len)`, where a
    /// negative index counts back from the end.
    fn resolve(index: isize, len: usize) -> Option<usize> {
        if index >= 0 {
            let i = index as usize;
            (i < len).then_some(i)
        } else {
            let back = index.unsigned_abs();
            (back <= len).then(|| len - back)
        }
    }

    /// A new 1 by cols matrix copied from the given row. The index may be
    /// negative to count back from the last row.
    pub fn row(&self, index: isize) -> Result<Mat, MatError> {
        let r = Self::resolve(index, self.rows).ok_or(MatError::IndexOutOfRange {
            what: "row",
            index,
            bound: self.rows,
        })?;
        let mut out = Mat::zeros(1, self.cols);
        out.data
            .copy_from_slice(&self.data[r * self.cols..(r + 1) * self.cols]);
        Ok(out)
    }

    /// A new rows by 1 matrix copied from the given column. The index may
    /// be negative to count back from the last column.
    pub fn col(&self, index: isize) -> Result<Mat, MatError> {
        let c = Self::resolve(index, self.cols).ok_or(MatError::IndexOutOfRange {
            what: "column",
            index,
            bound: self.cols,
        })?;
        let mut out = Mat::zeros(self.rows, 1);
        for r in 0..self.rows {
            out.data[r] = self.data[r * self.cols + c];
        }
        Ok(out)
    }

    /// Overwrites one row with the given values, whose length must equal
    /// the number of columns.
    pub fn set_row(&mut self, index: isize, values: &[f64]) -> Result<&mut Self, MatError> {
        let r = Self::resolve(index, self.rows).ok_or(MatError::IndexOutOfRange {
            what: "row",
            index,
            bound: self.rows,
        })?;
        if values.len() != self.cols {
            return Err(MatError::InvalidArgument(format!(
                "set_row needs {} values, got {}",
                self.cols,
                values.len()
            )));
        }
        self.data[r * self.cols..(r + 1) * self.cols].copy_from_slice(values);
        Ok(self)
    }

    /// Sets every element of one row to a single value.
    pub fn fill_row(&mut self, index: isize, value: f64) -> Result<&mut Self, MatError> {
        let r = Self::resolve(index, self.rows).ok_or(MatError::IndexOutOfRange {
            what: "row",
            index,
            bound: self.rows,
        })?;
        for v in &mut self.data[r * self.cols..(r + 1) * self.cols] {
            *v = value;
        }
        Ok(self)
    }

    /// Overwrites one column with the given values, whose length must equal
    /// the number of rows.
    pub fn set_col(&mut self, index: isize, values: &[f64]) -> Result<&mut Self, MatError> {
        let c = Self::resolve(index, self.cols).ok_or(MatError::IndexOutOfRange {
            what: "column",
            index,
            bound: self.cols,
        })?;
        if values.len() != self.rows {
            return Err(MatError::InvalidArgument(format!(
                "set_col needs {} values, got {}",
                self.rows,
                values.len()
            )));
        }
        for (r, &v) in values.iter().enumerate() {
            self.data[r * self.cols + c] = v;
        }
        Ok(self)
    }

    /// Sets every element of one column to a single value.
    pub fn fill_col(&mut self, index: isize, value: f64) -> Result<&mut Self, MatError> {
        let c = Self::resolve(index, self.cols).ok_or(MatError::IndexOutOfRange {
            what: "column",
            index,
            bound: self.cols,
        })?;
        for r in 0..self.rows {
            self.data[r * self.cols + c] = value;
        }
        Ok(self)
    }

    /// The transpose: a new cols by rows matrix with
    /// `out[(j, i)] == self[(i, j)]`. The original is untouched.
    pub fn t(&self) -> Mat {
        let mut out = Mat::zeros(self.cols, self.rows);
        let mut idx = 0;
        for c in 0..self.cols {
            for r in 0..self.rows {
                out.data[idx] = self.data[r * self.cols + c];
                idx += 1;
            }
        }
        out
    }

    /// Reinterprets the same buffer under new dimensions without touching
    /// the values. The total element count must stay constant.
    pub fn reshape(&mut self, rows: usize, cols: usize) -> Result<&mut Self, MatError> {
        if rows * cols != self.rows * self.cols {
            return Err(MatError::ShapeMismatch {
                context: "total element count",
                expected: self.rows * self.cols,
                found: rows * cols,
            });
        }
        self.rows = rows;
        self.cols = cols;
        Ok(self)
    }
}

impl Default for Mat {
    fn default() -> Self {
        Self::new()
    }
}

/// Operator sugar over [`Mat::get`]. Panics if the backing offset is out of
/// range; prefer `get`/`set` for checked access.
impl Index<(usize, usize)> for Mat {
    type Output = f64;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        let offset = self.offset(index.0, index.1);
        &self.data[offset]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut Self::Output {
        let offset = self.offset(index.0, index.1);
        &mut self.data[offset]
    }
}

/// One bracketed line per row, entries comma-and-tab separated, fixed
/// 14-decimal formatting.
impl fmt::Display for Mat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for r in 0..self.rows {
            if r > 0 {
                write!(f, "\n ")?;
            }
            write!(f, "[")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ",\t")?;
                }
                write!(f, "{:.14}", self.data[r * self.cols + c])?;
            }
            write!(f, "]")?;
        }
        write!(f, "]")
    }
}
