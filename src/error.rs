use std::error::Error;
use std::fmt;

/// Error type shared by every fallible matrix operation.
///
/// Each variant maps to one failure kind: incompatible operand shapes,
/// out-of-range indices, bad arguments, zero divisors, malformed CSV text,
/// and underlying file I/O failures.
#[derive(Debug)]
pub enum MatError {
    /// Operand dimensions are incompatible; `context` names the dimension
    /// being compared (e.g. "rows", "cols", "total element count").
    ShapeMismatch {
        context: &'static str,
        expected: usize,
        found: usize,
    },
    /// A row/column index fell outside its valid range `[-bound, bound)`.
    IndexOutOfRange {
        what: &'static str,
        index: isize,
        bound: usize,
    },
    /// Wrong argument to a constructor or reduction (bad bounds ordering,
    /// bad axis value, wrong fill length).
    InvalidArgument(String),
    /// Element-wise division found a zero divisor at this linear offset.
    /// The receiver is left untouched.
    DivisionByZero { offset: usize },
    /// Malformed or jagged CSV text; `line` is 1-based.
    Format { line: usize, message: String },
    /// Underlying file open/read/write failure.
    Io(std::io::Error),
}

impl fmt::Display for MatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatError::ShapeMismatch {
                context,
                expected,
                found,
            } => write!(
                f,
                "shape mismatch: {} expected {}, found {}",
                context, expected, found
            ),
            MatError::IndexOutOfRange { what, index, bound } => write!(
                f,
                "{} index {} is outside of bounds [-{}, {})",
                what, index, bound, bound
            ),
            MatError::InvalidArgument(msg) => write!(f, "invalid argument: {}", msg),
            MatError::DivisionByZero { offset } => write!(
                f,
                "division by zero: divisor element at linear offset {} is 0",
                offset
            ),
            MatError::Format { line, message } => {
                write!(f, "malformed CSV at line {}: {}", line, message)
            }
            MatError::Io(err) => write!(f, "I/O error: {}", err),
        }
    }
}

impl Error for MatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            MatError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MatError {
    fn from(err: std::io::Error) -> Self {
        MatError::Io(err)
    }
}
