use super::{quat_inverse, quat_mul, quat_norm, quats_multiply, quats_to_rmats, Quat};
use crate::{Mat3, StrError};
use std::f64::consts::PI;

/// Holds a named crystal symmetry group as quaternions and rotation matrices
#[derive(Clone, Debug)]
pub struct CrystalSymmetry {
    /// Name of the group
    name: String,

    /// Quaternions of the group (nsymm)
    quats: Vec<Quat>,

    /// Rotation matrices of the group (nsymm)
    rmats: Vec<Mat3>,
}

impl CrystalSymmetry {
    /// Allocates a new instance
    pub fn new(name: &str, quats: Vec<Quat>) -> Result<Self, StrError> {
        if quats.is_empty() {
            return Err("a symmetry group requires at least one quaternion");
        }
        let rmats = quats_to_rmats(&quats);
        Ok(CrystalSymmetry {
            name: name.to_string(),
            quats,
            rmats,
        })
    }

    /// Returns the trivial group (triclinic)
    pub fn identity() -> Self {
        Self::from_static("identity", vec![[1.0, 0.0, 0.0, 0.0]])
    }

    /// Returns the monoclinic group (twofold about y)
    pub fn monoclinic() -> Self {
        Self::from_static("monoclinic", vec![[1.0, 0.0, 0.0, 0.0], [0.0, 0.0, 1.0, 0.0]])
    }

    /// Returns the orthorhombic group (twofold about x, y, and z)
    pub fn orthorhombic() -> Self {
        Self::from_static(
            "orthorhombic",
            vec![
                [1.0, 0.0, 0.0, 0.0],
                [0.0, 1.0, 0.0, 0.0],
                [0.0, 0.0, 1.0, 0.0],
                [0.0, 0.0, 0.0, 1.0],
            ],
        )
    }

    /// Returns the hexagonal group (12 elements; c-axis along z)
    pub fn hexagonal() -> Self {
        let p6 = PI / 6.0;
        let mut quats = Vec::with_capacity(12);
        // c-axis rotations
        for k in 0..6 {
            if k == 3 {
                quats.push([0.0, 0.0, 0.0, 1.0]);
            } else {
                let a = (k as f64) * p6;
                quats.push([f64::cos(a), 0.0, 0.0, f64::sin(a)]);
            }
        }
        // binary rotations
        for k in 0..6 {
            if k == 3 {
                quats.push([0.0, 0.0, 1.0, 0.0]);
            } else {
                let a = (k as f64) * p6;
                quats.push([0.0, f64::cos(a), f64::sin(a), 0.0]);
            }
        }
        Self::from_static("hexagonal", quats)
    }

    /// Returns the cubic group (24 elements)
    pub fn cubic() -> Self {
        let p3 = PI / 3.0;
        let p4 = PI / 4.0;
        let s2 = 1.0 / f64::sqrt(2.0);
        let s3 = 1.0 / f64::sqrt(3.0);
        let mut quats: Vec<Quat> = Vec::with_capacity(24);
        quats.push([1.0, 0.0, 0.0, 0.0]);
        // fourfold rotations about [1,0,0], [0,1,0], and [0,0,1]
        for axis in 0..3 {
            for k in 1..4 {
                let a = (k as f64) * p4;
                let mut q = [f64::cos(a), 0.0, 0.0, 0.0];
                q[1 + axis] = f64::sin(a);
                quats.push(q);
            }
        }
        // threefold rotations about [1,1,1], [-1,1,1], [-1,-1,1], and [1,-1,1]
        for signs in [[1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0], [1.0, -1.0]] {
            for k in [2.0, 4.0] {
                let (c, s) = (f64::cos(k * p3), f64::sin(k * p3) * s3);
                quats.push([c, signs[0] * s, signs[1] * s, s]);
            }
        }
        // binary rotations
        quats.push([0.0, s2, s2, 0.0]);
        quats.push([0.0, -s2, s2, 0.0]);
        quats.push([0.0, s2, 0.0, s2]);
        quats.push([0.0, 0.0, s2, s2]);
        quats.push([0.0, -s2, 0.0, s2]);
        quats.push([0.0, 0.0, -s2, s2]);
        Self::from_static("cubic", quats)
    }

    fn from_static(name: &str, quats: Vec<Quat>) -> Self {
        let rmats = quats_to_rmats(&quats);
        CrystalSymmetry {
            name: name.to_string(),
            quats,
            rmats,
        }
    }

    /// Returns the name of the group
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the quaternions of the group
    pub fn quats(&self) -> &[Quat] {
        &self.quats
    }

    /// Returns the rotation matrices of the group
    pub fn rmats(&self) -> &[Mat3] {
        &self.rmats
    }

    /// Returns the number of elements in the group
    pub fn nsymm(&self) -> usize {
        self.quats.len()
    }

    /// Finds the equivalent quaternions in the fundamental region
    ///
    /// The symmetries are applied on the right (`q · s`). The equivalent quaternion with the
    /// largest absolute scalar part is selected (first one in case of ties) and its sign is
    /// flipped if the scalar part is negative.
    pub fn to_fundamental_region(&self, q: &[Quat]) -> Vec<Quat> {
        q.iter().map(|qi| self.reduce(qi)).collect()
    }

    fn reduce(&self, q: &Quat) -> Quat {
        let mut best = quat_mul(q, &self.quats[0]);
        for s in &self.quats[1..] {
            let qs = quat_mul(q, s);
            if f64::abs(qs[0]) > f64::abs(best[0]) {
                best = qs;
            }
        }
        if best[0] < 0.0 {
            for v in best.iter_mut() {
                *v = -*v;
            }
        }
        best
    }

    /// Returns the average orientation of a clustered set of orientations
    ///
    /// The quaternions are taken relative to the first one, reduced to the fundamental
    /// region, and averaged arithmetically; the normalized mean is rotated back and reduced.
    ///
    /// **Note:** The arithmetic mean is a linear approximation; the result is only meaningful
    /// when the orientations are tightly clustered (modulo symmetry).
    pub fn average_orientation(&self, q: &[Quat]) -> Result<Quat, StrError> {
        if q.is_empty() {
            return Err("cannot average an empty set of orientations");
        }
        let q0 = q[0];
        let rel = quats_multiply(&[quat_inverse(&q0)], q)?;
        let rel = self.to_fundamental_region(&rel);
        let mut avg = [0.0; 4];
        for r in &rel {
            for i in 0..4 {
                avg[i] += r[i];
            }
        }
        let nrm = quat_norm(&avg);
        if nrm == 0.0 {
            return Err("the mean quaternion has zero magnitude");
        }
        for v in avg.iter_mut() {
            *v /= nrm;
        }
        Ok(self.reduce(&quat_mul(&q0, &avg)))
    }

    /// Returns the misorientation quaternions taking `q1` to `q2` with the smallest angle
    ///
    /// Either array may hold a single quaternion.
    ///
    /// **Note:** Only this group's symmetries are applied (on the right of `q1⁻¹ · q2`).
    pub fn misorientation(&self, q1: &[Quat], q2: &[Quat]) -> Result<Vec<Quat>, StrError> {
        let inv: Vec<Quat> = q1.iter().map(quat_inverse).collect();
        let qmis = quats_multiply(&inv, q2)?;
        Ok(self.to_fundamental_region(&qmis))
    }

    /// Returns the misorientation angles (radians)
    pub fn misorientation_angle(&self, q1: &[Quat], q2: &[Quat]) -> Result<Vec<f64>, StrError> {
        let qmis = self.misorientation(q1, q2)?;
        Ok(qmis.iter().map(|q| 2.0 * f64::acos(f64::min(q[0], 1.0))).collect())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
