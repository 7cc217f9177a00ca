//! CSV collaborator: loading and saving matrices as rectangular
//! comma-separated text, one matrix row per line.
//!
//! Reading uses the `csv` crate and determines the column count from the
//! first line; every later line must match it. Writing is done by hand so
//! the output carries no trailing newline after the last row, each value
//! rendered in scientific notation with 14 fractional digits.
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::MatError;
use crate::mat::Mat;

/// Reads a rectangular CSV file into a matrix. Unlike the growth-oriented
/// constructors, the result's capacity equals its length exactly, since
/// CSV-sourced matrices are assumed large and static.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Mat, MatError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)
        .map_err(from_csv_error)?;

    let mut data = Vec::new();
    let mut rows = 0usize;
    let mut cols = 0usize;
    for (i, result) in reader.records().enumerate() {
        let record = result.map_err(from_csv_error)?;
        let line = i + 1;
        if rows == 0 {
            cols = record.len();
        } else if record.len() != cols {
            return Err(MatError::Format {
                line,
                message: format!("expected {} fields, found {}", cols, record.len()),
            });
        }
        for (field_idx, field) in record.iter().enumerate() {
            let value = field.trim().parse::<f64>().map_err(|err| MatError::Format {
                line,
                message: format!("field {} ({:?}) is not a float: {}", field_idx, field, err),
            })?;
            data.push(value);
        }
        rows += 1;
    }
    if rows == 0 {
        return Err(MatError::Format {
            line: 1,
            message: "empty CSV input".to_string(),
        });
    }

    data.shrink_to_fit();
    log::debug!(
        "loaded {}x{} matrix from {}",
        rows,
        cols,
        path.as_ref().display()
    );
    Ok(Mat::from_parts(rows, cols, data))
}

/// Writes a matrix as comma-separated text, one row per line, without a
/// trailing newline after the last row.
pub fn write_csv<P: AsRef<Path>>(m: &Mat, path: P) -> Result<(), MatError> {
    let file = File::create(&path)?;
    let mut out = BufWriter::new(file);
    let (rows, cols) = m.shape();
    let vals = m.as_slice();
    for r in 0..rows {
        for c in 0..cols {
            if c > 0 {
                write!(out, ",")?;
            }
            write!(out, "{:.14e}", vals[r * cols + c])?;
        }
        if r + 1 != rows {
            writeln!(out)?;
        }
    }
    out.flush()?;
    log::debug!(
        "wrote {}x{} matrix to {}",
        rows,
        cols,
        path.as_ref().display()
    );
    Ok(())
}

fn from_csv_error(err: csv::Error) -> MatError {
    let line = err.position().map_or(0, |p| p.line() as usize);
    let message = err.to_string();
    match err.into_kind() {
        csv::ErrorKind::Io(io) => MatError::Io(io),
        _ => MatError::Format { line, message },
    }
}

impl Mat {
    /// Loads a matrix from a rectangular CSV file. See [`read_csv`].
    pub fn from_csv<P: AsRef<Path>>(path: P) -> Result<Self, MatError> {
        read_csv(path)
    }

    /// Saves the matrix as CSV text. See [`write_csv`].
    pub fn to_csv<P: AsRef<Path>>(&self, path: P) -> Result<(), MatError> {
        write_csv(self, path)
    }
}
