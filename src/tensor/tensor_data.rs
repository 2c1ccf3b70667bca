use super::{matrix_from_sph, matrix_from_symmdev, sph, symmdev, TensorSystem, N_COMPONENTS};
use crate::{Mat3, StrError};

/// Holds the parts used to build matrices additively
///
/// Missing parts count as zero. The `Voigt` and `Mandel` systems accept `symm` and `skew`;
/// the `SymmDev` system accepts `symmdev`, `skew`, and `sph`.
#[derive(Clone, Debug, Default)]
pub struct TensorParts<'a> {
    /// Symmetric part as 6-vectors
    pub symm: Option<&'a [[f64; 6]]>,

    /// Symmetric-deviatoric part as 5-vectors
    pub symmdev: Option<&'a [[f64; 5]]>,

    /// Skew part as 3-vectors
    pub skew: Option<&'a [[f64; 3]]>,

    /// Spherical part as scalars
    pub sph: Option<&'a [f64]>,
}

/// Holds an array of 3×3 matrices and gives access to their parts
#[derive(Clone, Debug, PartialEq)]
pub struct TensorData {
    /// The matrices in the standard dyadic basis
    pub matrices: Vec<Mat3>,
}

impl TensorData {
    /// Allocates a new instance
    pub fn new(matrices: Vec<Mat3>) -> Self {
        TensorData { matrices }
    }

    /// Builds matrices by adding the given parts
    ///
    /// # Errors
    ///
    /// * the parts do not match the system (e.g., `symm` with `SymmDev`)
    /// * all parts are missing
    /// * the parts have different lengths
    pub fn from_parts(system: TensorSystem, parts: &TensorParts) -> Result<Self, StrError> {
        match system {
            TensorSystem::Voigt | TensorSystem::Mandel => {
                if parts.symmdev.is_some() || parts.sph.is_some() {
                    return Err("symmdev and sph parts require the SymmDev system");
                }
            }
            TensorSystem::SymmDev => {
                if parts.symm.is_some() {
                    return Err("symm part requires the Voigt or Mandel system");
                }
            }
        }
        let lengths = [
            parts.symm.map(|p| p.len()),
            parts.symmdev.map(|p| p.len()),
            parts.skew.map(|p| p.len()),
            parts.sph.map(|p| p.len()),
        ];
        let mut n: Option<usize> = None;
        for len in lengths.iter().flatten() {
            match n {
                None => n = Some(*len),
                Some(m) => {
                    if m != *len {
                        return Err("all parts must have the same length");
                    }
                }
            }
        }
        let n = match n {
            Some(n) => n,
            None => return Err("all parts are None"),
        };
        let mut matrices = vec![[[0.0; 3]; 3]; n];
        for k in 0..n {
            let mut m = [[0.0; 3]; 3];
            if let Some(symm) = parts.symm {
                add_into(&mut m, &system.matrix_from_symm(&symm[k])?);
            }
            if let Some(dev) = parts.symmdev {
                add_into(&mut m, &matrix_from_symmdev(&dev[k]));
            }
            if let Some(skew) = parts.skew {
                add_into(&mut m, &system.matrix_from_skew(&skew[k]));
            }
            if let Some(s) = parts.sph {
                add_into(&mut m, &matrix_from_sph(s[k]));
            }
            matrices[k] = m;
        }
        Ok(TensorData { matrices })
    }

    /// Builds matrices from full component vectors (inverse of `components`)
    pub fn from_components(system: TensorSystem, components: &[[f64; N_COMPONENTS]]) -> Self {
        TensorData {
            matrices: components.iter().map(|c| system.to_matrix(c)).collect(),
        }
    }

    /// Returns the number of matrices
    pub fn len(&self) -> usize {
        self.matrices.len()
    }

    /// Returns true if there are no matrices
    pub fn is_empty(&self) -> bool {
        self.matrices.is_empty()
    }

    /// Returns the full component vectors
    pub fn components(&self, system: TensorSystem) -> Vec<[f64; N_COMPONENTS]> {
        self.matrices.iter().map(|m| system.to_components(m)).collect()
    }

    /// Returns the symmetric parts as 6-vectors (Voigt or Mandel system)
    pub fn symm(&self, system: TensorSystem) -> Result<Vec<[f64; 6]>, StrError> {
        self.matrices.iter().map(|m| system.symm(m)).collect()
    }

    /// Returns the skew parts as 3-vectors
    pub fn skew(&self, system: TensorSystem) -> Vec<[f64; 3]> {
        self.matrices.iter().map(|m| system.skew(m)).collect()
    }

    /// Returns the symmetric-deviatoric parts as 5-vectors
    pub fn symmdev(&self) -> Vec<[f64; 5]> {
        self.matrices.iter().map(symmdev).collect()
    }

    /// Returns the spherical parts (trace/√3)
    pub fn sph(&self) -> Vec<f64> {
        self.matrices.iter().map(sph).collect()
    }

    /// Returns the traces
    pub fn trace(&self) -> Vec<f64> {
        self.matrices.iter().map(|m| m[0][0] + m[1][1] + m[2][2]).collect()
    }
}

fn add_into(m: &mut Mat3, a: &Mat3) {
    for i in 0..3 {
        for j in 0..3 {
            m[i][j] += a[i][j];
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
