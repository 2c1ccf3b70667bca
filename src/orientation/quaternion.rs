use crate::base::{DEFAULT_ANGLE_CUTOFF, SQRT_3};
use crate::{Mat3, StrError};
use rand::Rng;
use rand_distr::StandardNormal;
use std::f64::consts::PI;

/// Defines a quaternion as `[scalar, vector(3)]`
pub type Quat = [f64; 4];

/// Returns the identity quaternion
pub fn quat_identity() -> Quat {
    [1.0, 0.0, 0.0, 0.0]
}

/// Returns the Euclidean norm of a quaternion
pub fn quat_norm(q: &Quat) -> f64 {
    f64::sqrt(q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3])
}

/// Computes the Hamilton product p · q and normalizes the result
///
/// The sign of the scalar part is not modified.
pub fn quat_mul(p: &Quat, q: &Quat) -> Quat {
    let (s1, v1) = (p[0], [p[1], p[2], p[3]]);
    let (s2, v2) = (q[0], [q[1], q[2], q[3]]);
    let s = s1 * s2 - (v1[0] * v2[0] + v1[1] * v2[1] + v1[2] * v2[2]);
    let cross = [
        v1[1] * v2[2] - v1[2] * v2[1],
        v1[2] * v2[0] - v1[0] * v2[2],
        v1[0] * v2[1] - v1[1] * v2[0],
    ];
    let mut r = [
        s,
        s1 * v2[0] + s2 * v1[0] + cross[0],
        s1 * v2[1] + s2 * v1[1] + cross[1],
        s1 * v2[2] + s2 * v1[2] + cross[2],
    ];
    let nrm = quat_norm(&r);
    for i in 0..4 {
        r[i] /= nrm;
    }
    r
}

/// Returns the inverse (conjugate) of a unit quaternion
pub fn quat_inverse(q: &Quat) -> Quat {
    [q[0], -q[1], -q[2], -q[3]]
}

/// Multiplies two arrays of quaternions elementwise
///
/// Either array may hold a single quaternion, which is then multiplied by all quaternions
/// of the other array. All products are normalized.
pub fn quats_multiply(q1: &[Quat], q2: &[Quat]) -> Result<Vec<Quat>, StrError> {
    let (n1, n2) = (q1.len(), q2.len());
    if n1 == 1 {
        return Ok(q2.iter().map(|q| quat_mul(&q1[0], q)).collect());
    }
    if n2 == 1 {
        return Ok(q1.iter().map(|q| quat_mul(q, &q2[0])).collect());
    }
    if n1 != n2 {
        return Err("quaternion arrays must have the same length or one of them must have length one");
    }
    Ok(q1.iter().zip(q2).map(|(a, b)| quat_mul(a, b)).collect())
}

/// Returns the inverses of an array of unit quaternions
pub fn quats_inverse(q: &[Quat]) -> Vec<Quat> {
    q.iter().map(quat_inverse).collect()
}

/// Converts a unit quaternion to a rotation matrix
///
/// ```text
/// R = (qs² − qv·qv) I + 2 qv ⊗ qv + 2 qs W(qv)
/// ```
///
/// where W(v) is the skew matrix with axial vector v.
pub fn quat_to_rmat(q: &Quat) -> Mat3 {
    let qs = q[0];
    let v = [q[1], q[2], q[3]];
    let vv = v[0] * v[0] + v[1] * v[1] + v[2] * v[2];
    let mut r = [[0.0; 3]; 3];
    for i in 0..3 {
        for j in 0..3 {
            r[i][j] = 2.0 * v[i] * v[j];
        }
        r[i][i] += qs * qs - vv;
    }
    let w = [2.0 * qs * v[0], 2.0 * qs * v[1], 2.0 * qs * v[2]];
    r[2][1] += w[0];
    r[1][2] -= w[0];
    r[0][2] += w[1];
    r[2][0] -= w[1];
    r[1][0] += w[2];
    r[0][1] -= w[2];
    r
}

/// Converts a rotation matrix to a unit quaternion
///
/// Near zero angle (`angle < cut`), the axis is indeterminate and `[1, 1, 1]` is used.
/// Near π (`angle > π − cut`), the axis is taken from the row of `sym(R − cos(angle) I)`
/// with the largest diagonal entry (first one in case of ties).
pub fn quat_from_rmat(r: &Mat3, cut: f64) -> Quat {
    let ca = f64::max(f64::min(0.5 * (r[0][0] + r[1][1] + r[2][2] - 1.0), 1.0), -1.0);
    let angle = f64::acos(ca);
    let mut w = [r[2][1] - r[1][2], r[0][2] - r[2][0], r[1][0] - r[0][1]];
    if angle < cut {
        w = [1.0, 1.0, 1.0];
    }
    if angle > PI - cut {
        let mut sym = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                sym[i][j] = 0.5 * (r[i][j] + r[j][i]);
            }
            sym[i][i] -= ca;
        }
        let mut ind = 0;
        for i in 1..3 {
            if sym[i][i] > sym[ind][ind] {
                ind = i;
            }
        }
        w = sym[ind];
    }
    let nrm = f64::sqrt(w[0] * w[0] + w[1] * w[1] + w[2] * w[2]);
    let s = f64::sin(0.5 * angle) / nrm;
    [f64::cos(0.5 * angle), w[0] * s, w[1] * s, w[2] * s]
}

/// Converts an exponential-map (axial) vector to a unit quaternion
///
/// The rotation angle is the length of `w` and the axis is parallel to `w`.
/// If the length is below `cut`, the axis `[1, 1, 1]/√3` is used.
pub fn quat_from_exp(w: &[f64; 3], cut: f64) -> Quat {
    let a = f64::sqrt(w[0] * w[0] + w[1] * w[1] + w[2] * w[2]);
    let (c, s) = (f64::cos(0.5 * a), f64::sin(0.5 * a));
    let (axis, den) = if a < cut { ([1.0, 1.0, 1.0], SQRT_3) } else { (*w, a) };
    [c, s * axis[0] / den, s * axis[1] / den, s * axis[2] / den]
}

/// Converts an array of unit quaternions to rotation matrices
pub fn quats_to_rmats(q: &[Quat]) -> Vec<Mat3> {
    q.iter().map(quat_to_rmat).collect()
}

/// Converts an array of rotation matrices to unit quaternions
pub fn quats_from_rmats(r: &[Mat3], cut: f64) -> Vec<Quat> {
    r.iter().map(|rr| quat_from_rmat(rr, cut)).collect()
}

/// Converts an array of exponential-map vectors to unit quaternions
pub fn quats_from_exp(w: &[[f64; 3]], cut: f64) -> Vec<Quat> {
    w.iter().map(|ww| quat_from_exp(ww, cut)).collect()
}

/// Converts an array of rotation matrices to unit quaternions using the default angle cutoff
pub fn quats_from_rmats_default(r: &[Mat3]) -> Vec<Quat> {
    quats_from_rmats(r, DEFAULT_ANGLE_CUTOFF)
}

/// Generates random unit quaternions uniformly distributed over the rotations
///
/// Each quaternion is a normalized 4D standard-normal draw.
///
/// # Errors
///
/// Returns an error if a drawn vector has zero magnitude; the caller may try again.
pub fn random_quats<R: Rng>(n: usize, rng: &mut R) -> Result<Vec<Quat>, StrError> {
    let mut res = Vec::with_capacity(n);
    for _ in 0..n {
        let mut q = [0.0; 4];
        for i in 0..4 {
            q[i] = rng.sample(StandardNormal);
        }
        let nrm = quat_norm(&q);
        if nrm == 0.0 {
            return Err("generated zero magnitude vector, try again");
        }
        for i in 0..4 {
            q[i] /= nrm;
        }
        res.push(q);
    }
    Ok(res)
}

/// Generates random rotation matrices uniformly distributed over the rotations
pub fn random_rmats<R: Rng>(n: usize, rng: &mut R) -> Result<Vec<Mat3>, StrError> {
    Ok(quats_to_rmats(&random_quats(n, rng)?))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::{check_mat3, check_quat, check_quat_up_to_sign, SQRT_2};
    use crate::tensor::{mat3_identity, mat3_mul, mat3_transpose};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use russell_lab::approx_eq;

    #[test]
    fn identity_and_inverse_work() {
        assert_eq!(quat_identity(), [1.0, 0.0, 0.0, 0.0]);
        assert_eq!(quat_inverse(&[0.5, 0.5, -0.5, 0.5]), [0.5, -0.5, 0.5, -0.5]);
        check_mat3(&quat_to_rmat(&quat_identity()), &mat3_identity(), 1e-15);
        let q = [0.5, 0.5, 0.5, 0.5];
        check_quat(&quat_mul(&q, &quat_inverse(&q)), &quat_identity(), 1e-15);
    }

    #[test]
    fn quats_multiply_broadcasts() {
        let z90 = [1.0 / SQRT_2, 0.0, 0.0, 1.0 / SQRT_2];
        let res = quats_multiply(&[z90], &[z90, quat_identity()]).unwrap();
        check_quat(&res[0], &[0.0, 0.0, 0.0, 1.0], 1e-15);
        check_quat(&res[1], &z90, 1e-15);
        let res = quats_multiply(&[z90, quat_identity()], &[z90]).unwrap();
        check_quat(&res[0], &[0.0, 0.0, 0.0, 1.0], 1e-15);
        check_quat(&res[1], &z90, 1e-15);
        let res = quats_multiply(&[z90, z90], &[quat_inverse(&z90), z90]).unwrap();
        check_quat(&res[0], &quat_identity(), 1e-15);
        assert_eq!(
            quats_multiply(&[z90, z90], &[z90, z90, z90]).err(),
            Some("quaternion arrays must have the same length or one of them must have length one")
        );
        assert_eq!(quats_inverse(&[z90]).len(), 1);
    }

    #[test]
    fn multiply_normalizes() {
        let p = [2.0, 0.0, 0.0, 0.0];
        let q = [0.0, 3.0, 0.0, 0.0];
        check_quat(&quat_mul(&p, &q), &[0.0, 1.0, 0.0, 0.0], 1e-15);
    }

    #[test]
    fn to_rmat_works() {
        // 90° about x
        let q = [1.0 / SQRT_2, 1.0 / SQRT_2, 0.0, 0.0];
        let r = quat_to_rmat(&q);
        check_mat3(&r, &[[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]], 1e-15);
        // 180° about z
        let r = quat_to_rmat(&[0.0, 0.0, 0.0, 1.0]);
        check_mat3(&r, &[[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]], 1e-15);
    }

    #[test]
    fn from_rmat_handles_special_angles() {
        let q = quat_from_rmat(&mat3_identity(), DEFAULT_ANGLE_CUTOFF);
        check_quat(&q, &[1.0, 0.0, 0.0, 0.0], 1e-15);
        let r = [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]];
        let q = quat_from_rmat(&r, DEFAULT_ANGLE_CUTOFF);
        check_quat_up_to_sign(&q, &[0.0, 0.0, 0.0, 1.0], 1e-15);
        let r = [[-1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, -1.0]];
        let q = quat_from_rmat(&r, DEFAULT_ANGLE_CUTOFF);
        check_quat_up_to_sign(&q, &[0.0, 0.0, 1.0, 0.0], 1e-15);
        // 180° about [1,1,0]/√2
        let q0 = [0.0, 1.0 / SQRT_2, 1.0 / SQRT_2, 0.0];
        let q = quat_from_rmat(&quat_to_rmat(&q0), DEFAULT_ANGLE_CUTOFF);
        check_quat_up_to_sign(&q, &q0, 1e-12);
    }

    #[test]
    fn rmat_round_trip_works() {
        let mut rng = StdRng::seed_from_u64(42);
        let quats = random_quats(20, &mut rng).unwrap();
        let rmats = quats_to_rmats(&quats);
        let back = quats_from_rmats_default(&rmats);
        for i in 0..20 {
            check_quat_up_to_sign(&back[i], &quats[i], 1e-10);
            approx_eq(quat_norm(&quats[i]), 1.0, 1e-15);
            let rrt = mat3_mul(&rmats[i], &mat3_transpose(&rmats[i])).unwrap();
            check_mat3(&rrt, &mat3_identity(), 1e-14);
        }
        let rmats = random_rmats(3, &mut rng).unwrap();
        assert_eq!(rmats.len(), 3);
    }

    #[test]
    fn multiply_agrees_with_matrix_composition() {
        let mut rng = StdRng::seed_from_u64(7);
        let p = random_quats(10, &mut rng).unwrap();
        let q = random_quats(10, &mut rng).unwrap();
        let pq = quats_multiply(&p, &q).unwrap();
        for i in 0..10 {
            let r = mat3_mul(&quat_to_rmat(&p[i]), &quat_to_rmat(&q[i])).unwrap();
            check_mat3(&quat_to_rmat(&pq[i]), &r, 1e-12);
        }
    }

    #[test]
    fn from_exp_works() {
        let q = quat_from_exp(&[0.0, 0.0, 0.0], DEFAULT_ANGLE_CUTOFF);
        check_quat(&q, &[1.0, 0.0, 0.0, 0.0], 1e-15);
        let q = quat_from_exp(&[PI / 2.0, 0.0, 0.0], DEFAULT_ANGLE_CUTOFF);
        check_quat(&q, &[1.0 / SQRT_2, 1.0 / SQRT_2, 0.0, 0.0], 1e-15);
        let qs = quats_from_exp(&[[0.0, PI, 0.0]], DEFAULT_ANGLE_CUTOFF);
        check_quat(&qs[0], &[0.0, 0.0, 1.0, 0.0], 1e-15);
    }
}
