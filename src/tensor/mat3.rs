use crate::{Mat3, StrError};
use russell_lab::{mat_mat_mul, mat_norm, mat_t_mat_mul, mat_vec_mul, vec_outer, Matrix, Norm, Vector};
use russell_tensor::{Mandel, Tensor2};

/// Returns the 3×3 identity matrix
pub fn mat3_identity() -> Mat3 {
    [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]
}

/// Copies a 3×3 russell_lab matrix into a fixed-size array
///
/// # Panics
///
/// A panic will occur if the matrix is not 3×3.
pub fn mat3_from_matrix(a: &Matrix) -> Mat3 {
    assert_eq!(a.dims(), (3, 3));
    let mut m = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] = a.get(i, j);
        }
    }
    m
}

/// Converts a 3×3 matrix to a general (non-symmetric) second-order tensor
pub fn mat3_to_tensor(a: &Mat3) -> Result<Tensor2, StrError> {
    Tensor2::from_matrix(a, Mandel::General)
}

/// Returns the standard components of a second-order tensor
pub fn mat3_from_tensor(tt: &Tensor2) -> Mat3 {
    let mut m = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] = tt.get(i, j);
        }
    }
    m
}

/// Returns the transpose of a 3×3 matrix
pub fn mat3_transpose(a: &Mat3) -> Mat3 {
    mat3_from_matrix(&Matrix::from(a).transposed())
}

/// Performs the matrix multiplication c = a · b
pub fn mat3_mul(a: &Mat3, b: &Mat3) -> Result<Mat3, StrError> {
    let mut c = Matrix::new(3, 3);
    mat_mat_mul(&mut c, 1.0, &Matrix::from(a), &Matrix::from(b), 0.0)?;
    Ok(mat3_from_matrix(&c))
}

/// Rotates a 3×3 matrix
///
/// Computes `R · M · Rᵀ`, or `Rᵀ · M · R` if `transpose` is true.
pub fn mat3_rotate(r: &Mat3, m: &Mat3, transpose: bool) -> Result<Mat3, StrError> {
    let rr = Matrix::from(r);
    let mm = Matrix::from(m);
    let mut tmp = Matrix::new(3, 3);
    let mut res = Matrix::new(3, 3);
    if transpose {
        mat_mat_mul(&mut tmp, 1.0, &mm, &rr, 0.0)?;
        mat_t_mat_mul(&mut res, 1.0, &rr, &tmp, 0.0)?;
    } else {
        // R M Rᵀ = (Rᵀ)ᵀ (M Rᵀ)
        let rt = rr.transposed();
        mat_mat_mul(&mut tmp, 1.0, &mm, &rt, 0.0)?;
        mat_t_mat_mul(&mut res, 1.0, &rt, &tmp, 0.0)?;
    }
    Ok(mat3_from_matrix(&res))
}

/// Performs the matrix-vector multiplication v = a · u
pub fn mat3_vec_mul(a: &Mat3, u: &[f64; 3]) -> Result<[f64; 3], StrError> {
    let mut v = Vector::new(3);
    mat_vec_mul(&mut v, 1.0, &Matrix::from(a), &Vector::from(u))?;
    Ok([v[0], v[1], v[2]])
}

/// Returns the dyadic (outer) product d ⊗ n scaled to unit Frobenius norm
///
/// ```text
/// m[i][j] = d[i] n[j] / (|d| |n|)
/// ```
pub fn unit_dyad(d: &[f64; 3], n: &[f64; 3]) -> Result<Mat3, StrError> {
    let mut m = Matrix::new(3, 3);
    vec_outer(&mut m, 1.0, &Vector::from(d), &Vector::from(n))?;
    let norm = mat_norm(&m, Norm::Fro);
    if norm == 0.0 {
        return Err("the dyad of the slip direction and normal has zero magnitude");
    }
    let mut res = mat3_from_matrix(&m);
    for row in res.iter_mut() {
        for v in row.iter_mut() {
            *v /= norm;
        }
    }
    Ok(res)
}

/// Returns the Frobenius norm of a 3×3 matrix
pub fn mat3_norm(a: &Mat3) -> f64 {
    mat_norm(&Matrix::from(a), Norm::Fro)
}

/// Returns the trace of a 3×3 matrix
pub fn mat3_trace(a: &Mat3) -> f64 {
    a[0][0] + a[1][1] + a[2][2]
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::check_mat3;
    use russell_lab::approx_eq;
    use russell_tensor::t2_ddot_t2;

    #[test]
    fn mul_and_transpose_work() {
        let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let i = mat3_identity();
        assert_eq!(mat3_mul(&a, &i).unwrap(), a);
        assert_eq!(mat3_mul(&i, &a).unwrap(), a);
        let at = mat3_transpose(&a);
        assert_eq!(at, [[1.0, 4.0, 7.0], [2.0, 5.0, 8.0], [3.0, 6.0, 9.0]]);
        let aat = mat3_mul(&a, &at).unwrap();
        check_mat3(
            &aat,
            &[[14.0, 32.0, 50.0], [32.0, 77.0, 122.0], [50.0, 122.0, 194.0]],
            1e-15,
        );
        assert_eq!(mat3_vec_mul(&a, &[1.0, 0.0, -1.0]).unwrap(), [-2.0, -2.0, -2.0]);
    }

    #[test]
    fn rotate_works() {
        // 90° about z
        let r = [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]];
        let m = [[1.0, 4.0, 0.0], [0.0, 2.0, 0.0], [0.0, 5.0, 3.0]];
        let rmrt = mat3_rotate(&r, &m, false).unwrap();
        let correct = mat3_mul(&mat3_mul(&r, &m).unwrap(), &mat3_transpose(&r)).unwrap();
        check_mat3(&rmrt, &correct, 1e-15);
        let back = mat3_rotate(&r, &rmrt, true).unwrap();
        check_mat3(&back, &m, 1e-15);
    }

    #[test]
    fn tensor_conversion_works() {
        let a = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]];
        let tt = mat3_to_tensor(&a).unwrap();
        check_mat3(&mat3_from_tensor(&tt), &a, 1e-14);
        approx_eq(t2_ddot_t2(&tt, &tt), 285.0, 1e-13);
        approx_eq(mat3_norm(&a), f64::sqrt(285.0), 1e-13);
        assert_eq!(mat3_trace(&a), 15.0);
    }

    #[test]
    fn unit_dyad_works() {
        let m = unit_dyad(&[1.0, 2.0, 0.0], &[0.0, 1.0, 3.0]).unwrap();
        let s = 1.0 / f64::sqrt(50.0);
        let correct = [[0.0, s, 3.0 * s], [0.0, 2.0 * s, 6.0 * s], [0.0, 0.0, 0.0]];
        check_mat3(&m, &correct, 1e-15);
        approx_eq(mat3_norm(&m), 1.0, 1e-15);

        // the result does not depend on the scale of the generators
        let tiny = unit_dyad(&[1e-5, 2e-5, 0.0], &[0.0, 1e-5, 3e-5]).unwrap();
        let huge = unit_dyad(&[1e9, 2e9, 0.0], &[0.0, 1e9, 3e9]).unwrap();
        check_mat3(&tiny, &correct, 1e-15);
        check_mat3(&huge, &correct, 1e-15);

        assert_eq!(
            unit_dyad(&[0.0, 0.0, 0.0], &[0.0, 1.0, 3.0]).err(),
            Some("the dyad of the slip direction and normal has zero magnitude")
        );
    }
}
