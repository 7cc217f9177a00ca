//! Integration tests for the CSV load/save collaborator.

use std::fs;

use anyhow::Result;
use mat2d::{Mat, MatError};
use tempfile::tempdir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn fibonacci_matrix_round_trips() -> Result<()> {
    init_logging();
    let values = vec![
        1.0, 1.0, 2.0, 3.0, 5.0, 8.0, 13.0, 21.0, 34.0, 55.0, 89.0, 144.0, 233.0, 377.0, 610.0,
        987.0,
    ];
    let m = Mat::from_shape_vec((4, 4), values)?;

    let dir = tempdir()?;
    let path = dir.path().join("fib.csv");
    m.to_csv(&path)?;
    let back = Mat::from_csv(&path)?;
    assert_eq!(back, m);
    Ok(())
}

#[test]
fn written_csv_has_no_trailing_newline() -> Result<()> {
    init_logging();
    let m = Mat::from_shape_vec((2, 2), vec![1.0, 2.0, 3.0, 4.0])?;
    let dir = tempdir()?;
    let path = dir.path().join("m.csv");
    m.to_csv(&path)?;

    let text = fs::read_to_string(&path)?;
    assert!(!text.ends_with('\n'));
    assert_eq!(text.lines().count(), 2);
    for line in text.lines() {
        assert_eq!(line.split(',').count(), 2);
    }
    Ok(())
}

#[test]
fn loaded_matrix_has_exact_capacity() -> Result<()> {
    init_logging();
    let m = Mat::from_shape_vec((3, 3), vec![0.5; 9])?;
    let dir = tempdir()?;
    let path = dir.path().join("m.csv");
    m.to_csv(&path)?;

    let back = Mat::from_csv(&path)?;
    assert_eq!(back.capacity(), back.nrows() * back.ncols());
    Ok(())
}

#[test]
fn jagged_input_names_the_offending_line() -> Result<()> {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("jagged.csv");
    fs::write(&path, "1.0,2.0,3.0\n4.0,5.0\n6.0,7.0,8.0")?;

    let err = Mat::from_csv(&path).unwrap_err();
    assert!(matches!(err, MatError::Format { line: 2, .. }));
    Ok(())
}

#[test]
fn non_numeric_field_is_a_format_error() -> Result<()> {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("bad.csv");
    fs::write(&path, "1.0,2.0\n3.0,oops")?;

    let err = Mat::from_csv(&path).unwrap_err();
    assert!(matches!(err, MatError::Format { line: 2, .. }));
    Ok(())
}

#[test]
fn empty_file_is_a_format_error() -> Result<()> {
    init_logging();
    let dir = tempdir()?;
    let path = dir.path().join("empty.csv");
    fs::write(&path, "")?;

    let err = Mat::from_csv(&path).unwrap_err();
    assert!(matches!(err, MatError::Format { .. }));
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() {
    init_logging();
    let err = Mat::from_csv("/nonexistent/definitely/not/here.csv").unwrap_err();
    assert!(matches!(err, MatError::Io(_)));
}

#[test]
fn negative_and_fractional_values_round_trip() -> Result<()> {
    init_logging();
    let m = Mat::from_shape_vec((2, 3), vec![-1.5, 0.0, 0.25, 1e-3, -2.0e6, 42.0])?;
    let dir = tempdir()?;
    let path = dir.path().join("vals.csv");
    m.to_csv(&path)?;
    assert_eq!(Mat::from_csv(&path)?, m);
    Ok(())
}
