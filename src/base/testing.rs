use crate::Mat3;
use russell_lab::{approx_eq, Matrix};

/// Checks that two 3×3 matrices are approximately equal
#[allow(dead_code)]
pub(crate) fn check_mat3(a: &Mat3, b: &Mat3, tol: f64) {
    for i in 0..3 {
        for j in 0..3 {
            approx_eq(a[i][j], b[i][j], tol);
        }
    }
}

/// Checks that two quaternions are approximately equal
#[allow(dead_code)]
pub(crate) fn check_quat(a: &[f64; 4], b: &[f64; 4], tol: f64) {
    for i in 0..4 {
        approx_eq(a[i], b[i], tol);
    }
}

/// Checks that two quaternions represent the same rotation (equal up to sign)
#[allow(dead_code)]
pub(crate) fn check_quat_up_to_sign(a: &[f64; 4], b: &[f64; 4], tol: f64) {
    let dot = a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3];
    let sign = if dot < 0.0 { -1.0 } else { 1.0 };
    for i in 0..4 {
        approx_eq(a[i], sign * b[i], tol);
    }
}

/// Checks that a matrix is approximately equal to a nested array with the same dimensions
#[allow(dead_code)]
pub(crate) fn check_matrix<const N: usize>(a: &Matrix, b: &[[f64; N]; N], tol: f64) {
    assert_eq!(a.dims(), (N, N));
    for i in 0..N {
        for j in 0..N {
            approx_eq(a.get(i, j), b[i][j], tol);
        }
    }
}

/// Checks that two matrices are approximately equal
#[allow(dead_code)]
pub(crate) fn check_matrices(a: &Matrix, b: &Matrix, tol: f64) {
    assert_eq!(a.dims(), b.dims());
    let (m, n) = a.dims();
    for i in 0..m {
        for j in 0..n {
            approx_eq(a.get(i, j), b.get(i, j), tol);
        }
    }
}

/// Returns the 6×6 diagonal matrix diag(1, 1, 1, d, d, d)
#[allow(dead_code)]
pub(crate) fn diag6(d: f64) -> [[f64; 6]; 6] {
    let mut res = [[0.0; 6]; 6];
    for i in 0..6 {
        res[i][i] = if i < 3 { 1.0 } else { d };
    }
    res
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
