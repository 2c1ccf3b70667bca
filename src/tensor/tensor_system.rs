use crate::base::{SQRT_2, SQRT_3, SQRT_6};
use crate::{Mat3, StrError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the basis used to represent a 3×3 matrix by component vectors
///
/// All systems split a matrix into a symmetric and a skew part. The skew part is always
/// a 3-vector ordered as `[21−12, 02−20, 10−01]`.
///
/// * `Voigt` -- symmetric 6-vector `[00, 11, 22, ½(12+21), ½(02+20), ½(01+10)]`; skew scaled by ½
/// * `Mandel` -- symmetric 6-vector with off-diagonals scaled by `1/√2` (orthonormal); skew scaled by `1/√2`
/// * `SymmDev` -- symmetric part split into a deviatoric 5-vector and a spherical scalar (orthonormal)
///
/// The components of the `SymmDev` system are ordered as `[sph, symmdev(5), skew(3)]`.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum TensorSystem {
    Voigt,
    Mandel,
    SymmDev,
}

/// Defines the number of components of a full 3×3 matrix in any system
pub const N_COMPONENTS: usize = 9;

impl TensorSystem {
    /// Returns the factor f scaling the off-diagonal sums and the skew differences
    pub fn shear_factor(&self) -> f64 {
        match self {
            TensorSystem::Voigt => 0.5,
            TensorSystem::Mandel => 1.0 / SQRT_2,
            TensorSystem::SymmDev => 1.0 / SQRT_2,
        }
    }

    /// Parses the name of the system (case is ignored)
    pub fn from_name(name: &str) -> Result<Self, StrError> {
        match name.to_lowercase().as_str() {
            "voigt" => Ok(TensorSystem::Voigt),
            "mandel" => Ok(TensorSystem::Mandel),
            "symmdev" => Ok(TensorSystem::SymmDev),
            _ => Err("tensor system is not recognized; choices (ignore case) are: voigt, mandel, symmdev"),
        }
    }

    /// Returns the symmetric part as a 6-vector
    ///
    /// Only available for the `Voigt` and `Mandel` systems.
    pub fn symm(&self, m: &Mat3) -> Result<[f64; 6], StrError> {
        if *self == TensorSystem::SymmDev {
            return Err("the symmetric 6-vector requires the Voigt or Mandel system");
        }
        let f = self.shear_factor();
        Ok([
            m[0][0],
            m[1][1],
            m[2][2],
            f * (m[1][2] + m[2][1]),
            f * (m[0][2] + m[2][0]),
            f * (m[0][1] + m[1][0]),
        ])
    }

    /// Returns the skew part as a 3-vector
    pub fn skew(&self, m: &Mat3) -> [f64; 3] {
        let f = self.shear_factor();
        [
            f * (m[2][1] - m[1][2]),
            f * (m[0][2] - m[2][0]),
            f * (m[1][0] - m[0][1]),
        ]
    }

    /// Returns all components of a matrix
    ///
    /// `Voigt` and `Mandel`: `[symm(6), skew(3)]`; `SymmDev`: `[sph, symmdev(5), skew(3)]`
    pub fn to_components(&self, m: &Mat3) -> [f64; N_COMPONENTS] {
        let k = self.skew(m);
        let mut c = [0.0; N_COMPONENTS];
        match self {
            TensorSystem::SymmDev => {
                let d = symmdev(m);
                c[0] = sph(m);
                c[1..6].copy_from_slice(&d);
            }
            _ => {
                let f = self.shear_factor();
                c[0] = m[0][0];
                c[1] = m[1][1];
                c[2] = m[2][2];
                c[3] = f * (m[1][2] + m[2][1]);
                c[4] = f * (m[0][2] + m[2][0]);
                c[5] = f * (m[0][1] + m[1][0]);
            }
        }
        c[6..9].copy_from_slice(&k);
        c
    }

    /// Returns the matrix corresponding to the components (inverse of `to_components`)
    pub fn to_matrix(&self, c: &[f64; N_COMPONENTS]) -> Mat3 {
        let mut m = match self {
            TensorSystem::SymmDev => {
                let mut m = matrix_from_symmdev(&[c[1], c[2], c[3], c[4], c[5]]);
                let s = c[0] / SQRT_3;
                for i in 0..3 {
                    m[i][i] += s;
                }
                m
            }
            _ => {
                let f = self.shear_factor();
                let h = 1.0 / (2.0 * f);
                [
                    [c[0], h * c[5], h * c[4]],
                    [h * c[5], c[1], h * c[3]],
                    [h * c[4], h * c[3], c[2]],
                ]
            }
        };
        let w = self.matrix_from_skew(&[c[6], c[7], c[8]]);
        for i in 0..3 {
            for j in 0..3 {
                m[i][j] += w[i][j];
            }
        }
        m
    }

    /// Returns the symmetric matrix corresponding to a symmetric 6-vector
    ///
    /// Only available for the `Voigt` and `Mandel` systems.
    pub fn matrix_from_symm(&self, s: &[f64; 6]) -> Result<Mat3, StrError> {
        if *self == TensorSystem::SymmDev {
            return Err("the symmetric 6-vector requires the Voigt or Mandel system");
        }
        let h = 1.0 / (2.0 * self.shear_factor());
        Ok([
            [s[0], h * s[5], h * s[4]],
            [h * s[5], s[1], h * s[3]],
            [h * s[4], h * s[3], s[2]],
        ])
    }

    /// Returns the skew matrix corresponding to a skew 3-vector
    pub fn matrix_from_skew(&self, k: &[f64; 3]) -> Mat3 {
        let h = 1.0 / (2.0 * self.shear_factor());
        let (a, b, c) = (h * k[0], h * k[1], h * k[2]);
        [[0.0, -c, b], [c, 0.0, -a], [-b, a, 0.0]]
    }
}

/// Returns the deviatoric part of the symmetric part as a 5-vector in an orthonormal basis
///
/// ```text
/// d = [(2m00−m11−m22)/√6, (m11−m22)/√2, (m12+m21)/√2, (m02+m20)/√2, (m01+m10)/√2]
/// ```
pub fn symmdev(m: &Mat3) -> [f64; 5] {
    [
        (2.0 * m[0][0] - m[1][1] - m[2][2]) / SQRT_6,
        (m[1][1] - m[2][2]) / SQRT_2,
        (m[1][2] + m[2][1]) / SQRT_2,
        (m[0][2] + m[2][0]) / SQRT_2,
        (m[0][1] + m[1][0]) / SQRT_2,
    ]
}

/// Returns the spherical part as a scalar (trace/√3)
pub fn sph(m: &Mat3) -> f64 {
    (m[0][0] + m[1][1] + m[2][2]) / SQRT_3
}

/// Returns the symmetric-deviatoric matrix corresponding to a deviatoric 5-vector
pub fn matrix_from_symmdev(d: &[f64; 5]) -> Mat3 {
    let a = d[0] / SQRT_6;
    let b = d[1] / SQRT_2;
    let (m12, m02, m01) = (d[2] / SQRT_2, d[3] / SQRT_2, d[4] / SQRT_2);
    [
        [2.0 * a, m01, m02],
        [m01, -a + b, m12],
        [m02, m12, -a - b],
    ]
}

/// Returns the spherical (isotropic) matrix corresponding to a spherical scalar
pub fn matrix_from_sph(s: f64) -> Mat3 {
    let v = s / SQRT_3;
    [[v, 0.0, 0.0], [0.0, v, 0.0], [0.0, 0.0, v]]
}

impl fmt::Display for TensorSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TensorSystem::Voigt => write!(f, "voigt"),
            TensorSystem::Mandel => write!(f, "mandel"),
            TensorSystem::SymmDev => write!(f, "symmdev"),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
