use crate::orientation::CrystalSymmetry;
use crate::tensor::{mat3_vec_mul, unit_dyad};
use crate::{Mat3, StrError};

/// Absolute tolerance to compare Schmid tensors
const SCHMID_TOL: f64 = 1e-8;

/// Holds a group of slip systems related by crystal symmetry
///
/// The group is generated from a single slip system (normal, direction) by applying every
/// rotation of the symmetry group. The Schmid tensors are normalized first; those that are
/// equal, or equal up to sign, are retained only once.
#[derive(Clone, Debug)]
pub struct SlipGroup {
    normal: [f64; 3],
    direction: [f64; 3],
    schmid: Vec<Mat3>,
}

impl SlipGroup {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `normal` -- slip-plane normal (crystal frame)
    /// * `direction` -- slip direction (crystal frame)
    /// * `symmetry` -- crystal symmetry group
    pub fn new(normal: &[f64; 3], direction: &[f64; 3], symmetry: &CrystalSymmetry) -> Result<Self, StrError> {
        let mut schmid: Vec<Mat3> = Vec::new();
        for r in symmetry.rmats() {
            let n = mat3_vec_mul(r, normal)?;
            let d = mat3_vec_mul(r, direction)?;
            let s = unit_dyad(&d, &n)?;
            if !schmid.iter().any(|u| same_up_to_sign(u, &s)) {
                schmid.push(s);
            }
        }
        log::debug!(
            "slip group with normal {:?} and direction {:?} ({} symmetry): {} systems",
            normal,
            direction,
            symmetry.name(),
            schmid.len()
        );
        Ok(SlipGroup {
            normal: *normal,
            direction: *direction,
            schmid,
        })
    }

    /// Returns the normalized Schmid tensors `d ⊗ n / |d ⊗ n|`
    pub fn schmid(&self) -> &[Mat3] {
        &self.schmid
    }

    /// Returns the number of slip systems
    pub fn len(&self) -> usize {
        self.schmid.len()
    }

    /// Returns true if there are no slip systems
    pub fn is_empty(&self) -> bool {
        self.schmid.is_empty()
    }

    /// Returns the generating slip-plane normal
    pub fn normal(&self) -> &[f64; 3] {
        &self.normal
    }

    /// Returns the generating slip direction
    pub fn direction(&self) -> &[f64; 3] {
        &self.direction
    }
}

fn same_up_to_sign(a: &Mat3, b: &Mat3) -> bool {
    let mut same = true;
    let mut opposite = true;
    for i in 0..3 {
        for j in 0..3 {
            same = same && f64::abs(a[i][j] - b[i][j]) <= SCHMID_TOL;
            opposite = opposite && f64::abs(a[i][j] + b[i][j]) <= SCHMID_TOL;
        }
    }
    same || opposite
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
