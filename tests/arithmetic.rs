//! Integration tests for element-wise arithmetic and matrix multiplication.

use mat2d::{Mat, MatError};

fn mat(rows: usize, cols: usize, values: &[f64]) -> Mat {
    Mat::from_shape_vec((rows, cols), values.to_vec()).unwrap()
}

// ---------------------------------------------------------------------------
// Scalar broadcasts
// ---------------------------------------------------------------------------

#[test]
fn scalar_ops_touch_every_element() {
    let mut m = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    m.add_scalar(1.0);
    assert_eq!(m.vals(), vec![2.0, 3.0, 4.0, 5.0]);
    m.sub_scalar(2.0);
    assert_eq!(m.vals(), vec![0.0, 1.0, 2.0, 3.0]);
    m.mul_scalar(3.0);
    assert_eq!(m.vals(), vec![0.0, 3.0, 6.0, 9.0]);
    m.div_scalar(3.0);
    assert_eq!(m.vals(), vec![0.0, 1.0, 2.0, 3.0]);
}

#[test]
fn scale_is_scalar_multiplication() {
    let mut m = mat(1, 3, &[1.0, 2.0, 3.0]);
    m.scale(2.5);
    assert_eq!(m.vals(), vec![2.5, 5.0, 7.5]);
}

#[test]
fn in_place_ops_chain() {
    let mut m = Mat::zeros(2, 3);
    m.add_scalar(2.0).mul_scalar(3.0).sub_scalar(1.0);
    assert!(m.all(|v| v == 5.0));
}

// ---------------------------------------------------------------------------
// Matrix operands
// ---------------------------------------------------------------------------

#[test]
fn mat_ops_combine_by_linear_index() {
    let mut m = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let n = mat(2, 2, &[10.0, 20.0, 30.0, 40.0]);
    m.add_mat(&n).unwrap();
    assert_eq!(m.vals(), vec![11.0, 22.0, 33.0, 44.0]);
    m.sub_mat(&n).unwrap();
    assert_eq!(m.vals(), vec![1.0, 2.0, 3.0, 4.0]);
    m.mul_mat(&n).unwrap();
    assert_eq!(m.vals(), vec![10.0, 40.0, 90.0, 160.0]);
    m.div_mat(&n).unwrap();
    assert_eq!(m.vals(), vec![1.0, 2.0, 3.0, 4.0]);
}

#[test]
fn mat_ops_require_identical_shape() {
    let mut m = Mat::zeros(2, 3);
    let wrong_rows = Mat::zeros(3, 3);
    let wrong_cols = Mat::zeros(2, 4);
    assert!(matches!(
        m.add_mat(&wrong_rows).unwrap_err(),
        MatError::ShapeMismatch { context: "rows", .. }
    ));
    assert!(matches!(
        m.sub_mat(&wrong_cols).unwrap_err(),
        MatError::ShapeMismatch { context: "cols", .. }
    ));
    assert!(matches!(
        m.mul_mat(&wrong_rows).unwrap_err(),
        MatError::ShapeMismatch { .. }
    ));
    assert!(matches!(
        m.div_mat(&wrong_cols).unwrap_err(),
        MatError::ShapeMismatch { .. }
    ));
}

#[test]
fn div_by_zero_element_fails_before_mutating() {
    // A matrix containing a zero divided by itself must fail and leave the
    // receiver untouched.
    let mut m = mat(2, 2, &[1.0, 0.0, 3.0, 4.0]);
    let divisor = m.clone();
    let err = m.div_mat(&divisor).unwrap_err();
    assert!(matches!(err, MatError::DivisionByZero { offset: 1 }));
    assert_eq!(m.vals(), vec![1.0, 0.0, 3.0, 4.0]);
}

// ---------------------------------------------------------------------------
// Matrix multiplication
// ---------------------------------------------------------------------------

#[test]
fn dot_matches_hand_computed_product() {
    let a = mat(2, 2, &[1.0, 2.0, 3.0, 4.0]);
    let b = mat(2, 2, &[5.0, 6.0, 7.0, 8.0]);
    let c = a.dot(&b).unwrap();
    assert_eq!(c.vals(), vec![19.0, 22.0, 43.0, 50.0]);
}

#[test]
fn dot_produces_outer_dims() {
    let a = Mat::rand(5, 6);
    let b = Mat::rand(6, 10);
    let c = a.dot(&b).unwrap();
    assert_eq!(c.shape(), (5, 10));
}

#[test]
fn dot_with_zero_matrix_is_zero() {
    let a = Mat::rand(4, 3);
    let zero = Mat::zeros(3, 7);
    let c = a.dot(&zero).unwrap();
    assert_eq!(c.shape(), (4, 7));
    assert!(c.all(|v| v == 0.0));
}

#[test]
fn dot_requires_matching_inner_dims() {
    let a = Mat::zeros(2, 3);
    let b = Mat::zeros(4, 2);
    let err = a.dot(&b).unwrap_err();
    assert!(matches!(
        err,
        MatError::ShapeMismatch {
            expected: 3,
            found: 4,
            ..
        }
    ));
}

#[test]
fn dot_leaves_operands_untouched() {
    let a = mat(1, 2, &[1.0, 2.0]);
    let b = mat(2, 1, &[3.0, 4.0]);
    let _ = a.dot(&b).unwrap();
    assert_eq!(a.vals(), vec![1.0, 2.0]);
    assert_eq!(b.vals(), vec![3.0, 4.0]);
}
