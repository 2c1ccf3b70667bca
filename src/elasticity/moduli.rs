use super::N_UPPER_TRIANGLE;
use crate::base::{ComponentSystem, SymmetryName};
use crate::StrError;
use russell_lab::Matrix;
use serde::{Deserialize, Serialize};

/// Holds the independent elastic moduli of a crystal symmetry
///
/// The values refer to a component system that is kept alongside (see [super::SymmetryModuli]).
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum Moduli {
    /// Isotropic material
    Isotropic { c11: f64, c12: f64 },

    /// Cubic crystal
    Cubic { c11: f64, c12: f64, c44: f64 },

    /// Hexagonal crystal with the c-axis along e3
    Hexagonal {
        c11: f64,
        c12: f64,
        c13: f64,
        c33: f64,
        c44: f64,
    },

    /// Triclinic crystal: the upper triangle of the stiffness matrix in row-major order
    Triclinic { cij: [f64; N_UPPER_TRIANGLE] },
}

impl Moduli {
    /// Returns the symmetry of these moduli
    pub fn symmetry(&self) -> SymmetryName {
        match self {
            Moduli::Isotropic { .. } => SymmetryName::Isotropic,
            Moduli::Cubic { .. } => SymmetryName::Cubic,
            Moduli::Hexagonal { .. } => SymmetryName::Hexagonal,
            Moduli::Triclinic { .. } => SymmetryName::Triclinic,
        }
    }

    /// Allocates moduli from a flat sequence
    ///
    /// | symmetry  | values                   |
    /// |-----------|--------------------------|
    /// | isotropic | c11, c12                 |
    /// | cubic     | c11, c12, c44            |
    /// | hexagonal | c11, c12, c13, c33, c44  |
    /// | triclinic | 21 upper-triangle values |
    pub fn from_flat(symmetry: SymmetryName, values: &[f64]) -> Result<Self, StrError> {
        if values.len() != symmetry.n_moduli() {
            return Err(match symmetry {
                SymmetryName::Isotropic => "isotropic moduli require 2 values: c11, c12",
                SymmetryName::Cubic => "cubic moduli require 3 values: c11, c12, c44",
                SymmetryName::Hexagonal => "hexagonal moduli require 5 values: c11, c12, c13, c33, c44",
                SymmetryName::Triclinic => "triclinic moduli require 21 values",
            });
        }
        let v = values;
        Ok(match symmetry {
            SymmetryName::Isotropic => Moduli::Isotropic { c11: v[0], c12: v[1] },
            SymmetryName::Cubic => Moduli::Cubic {
                c11: v[0],
                c12: v[1],
                c44: v[2],
            },
            SymmetryName::Hexagonal => Moduli::Hexagonal {
                c11: v[0],
                c12: v[1],
                c13: v[2],
                c33: v[3],
                c44: v[4],
            },
            SymmetryName::Triclinic => {
                let mut cij = [0.0; N_UPPER_TRIANGLE];
                cij.copy_from_slice(v);
                Moduli::Triclinic { cij }
            }
        })
    }

    /// Returns the moduli as a flat sequence (see [Moduli::from_flat])
    pub fn to_flat(&self) -> Vec<f64> {
        match *self {
            Moduli::Isotropic { c11, c12 } => vec![c11, c12],
            Moduli::Cubic { c11, c12, c44 } => vec![c11, c12, c44],
            Moduli::Hexagonal { c11, c12, c13, c33, c44 } => vec![c11, c12, c13, c33, c44],
            Moduli::Triclinic { cij } => cij.to_vec(),
        }
    }

    /// Expands the moduli into the 21 upper-triangle values of the stiffness matrix
    ///
    /// The shear-shear terms derived from `c11 − c12` (all shears for isotropic, c66 for hexagonal)
    /// are halved under VoigtGamma.
    pub fn expand(&self, system: ComponentSystem) -> [f64; N_UPPER_TRIANGLE] {
        let half = if system == ComponentSystem::VoigtGamma { 0.5 } else { 1.0 };
        match *self {
            Moduli::Isotropic { c11, c12 } => {
                let g = half * (c11 - c12);
                high_symmetry_upper(c11, c12, c12, c11, c12, c11, g, g, g)
            }
            Moduli::Cubic { c11, c12, c44 } => high_symmetry_upper(c11, c12, c12, c11, c12, c11, c44, c44, c44),
            Moduli::Hexagonal { c11, c12, c13, c33, c44 } => {
                let c66 = half * (c11 - c12);
                high_symmetry_upper(c11, c12, c13, c11, c13, c33, c44, c44, c66)
            }
            Moduli::Triclinic { cij } => cij,
        }
    }

    /// Reads the moduli of a given symmetry back from the entries of a 6×6 stiffness matrix
    ///
    /// # Panics
    ///
    /// A panic will occur if the matrix is not 6×6.
    pub fn read_back(symmetry: SymmetryName, matrix: &Matrix) -> Self {
        assert_eq!(matrix.dims(), (6, 6));
        let m = |i, j| matrix.get(i, j);
        match symmetry {
            SymmetryName::Isotropic => Moduli::Isotropic {
                c11: m(0, 0),
                c12: m(0, 1),
            },
            SymmetryName::Cubic => Moduli::Cubic {
                c11: m(0, 0),
                c12: m(0, 1),
                c44: m(3, 3),
            },
            SymmetryName::Hexagonal => Moduli::Hexagonal {
                c11: m(0, 0),
                c12: m(0, 1),
                c13: m(0, 2),
                c33: m(2, 2),
                c44: m(3, 3),
            },
            SymmetryName::Triclinic => {
                let mut cij = [0.0; N_UPPER_TRIANGLE];
                let mut k = 0;
                for i in 0..6 {
                    for j in i..6 {
                        cij[k] = m(i, j);
                        k += 1;
                    }
                }
                Moduli::Triclinic { cij }
            }
        }
    }
}

/// Returns the upper triangle of an orthotropic-like matrix (zero normal-shear coupling and diagonal shears)
fn high_symmetry_upper(
    c11: f64,
    c12: f64,
    c13: f64,
    c22: f64,
    c23: f64,
    c33: f64,
    c44: f64,
    c55: f64,
    c66: f64,
) -> [f64; N_UPPER_TRIANGLE] {
    #[rustfmt::skip]
    let cij = [
        c11, c12, c13, 0.0, 0.0, 0.0,
             c22, c23, 0.0, 0.0, 0.0,
                  c33, 0.0, 0.0, 0.0,
                       c44, 0.0, 0.0,
                            c55, 0.0,
                                 c66,
    ];
    cij
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
