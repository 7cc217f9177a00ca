//! mat2d: a dense, row-major 2D matrix of `f64` backed by a single flat buffer.
//!
//! The [`Mat`] type stores its values in one contiguous `Vec<f64>`, with the
//! element at logical `(row, col)` living at `data[row * cols + col]`. The
//! growth-oriented constructors reserve twice the initial length so that
//! repeated row/column appends stay amortized, while CSV loads allocate
//! exactly what they need.
//!
//! All fallible operations return [`MatError`] rather than panicking; the
//! only panicking paths are the `Index`/`IndexMut` operator sugar, which is
//! documented as such. A `Mat` owns its buffer exclusively and every
//! extraction (`row`, `col`, `t`, `dot`, `to_nested`, ...) produces an
//! independent copy, never a view.
pub mod error;
pub mod io;
pub mod mat;
pub mod predicates;

pub use error::MatError;
pub use mat::{Axis, Mat};
