//! Stateless predicate and map helpers for [`Mat::all`], [`Mat::any`], and
//! [`Mat::map`].
//!
//! `odd` and `even` use a floating-point modulus, not integer parity: a
//! value is even iff `value % 2.0 == 0.0`, so e.g. `2.5` classifies as odd
//! because `2.5 % 2.0 == 0.5`.
//!
//! [`Mat::all`]: crate::Mat::all
//! [`Mat::any`]: crate::Mat::any
//! [`Mat::map`]: crate::Mat::map

/// True for values strictly greater than zero.
pub fn positive(value: f64) -> bool {
    value > 0.0
}

/// True for values strictly less than zero.
pub fn negative(value: f64) -> bool {
    value < 0.0
}

/// True when the value has a nonzero remainder modulo 2.0.
pub fn odd(value: f64) -> bool {
    value % 2.0 != 0.0
}

/// True when the value divides evenly by 2.0.
pub fn even(value: f64) -> bool {
    value % 2.0 == 0.0
}

/// The square of the value, for use with [`Mat::map`].
///
/// [`Mat::map`]: crate::Mat::map
pub fn square(value: f64) -> f64 {
    value * value
}
