use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the convention for the components of 6-vectors and 6×6 matrices acting on symmetric tensors
///
/// The 6-vector ordering is `[00, 11, 22, 12, 02, 01]` in all systems. The systems differ in
/// how the off-diagonal (shear) entries are scaled:
///
/// * `VoigtGamma` -- the 6×6 matrix acts on engineering shears `γ = 2ε`; the matrix is symmetric
/// * `VoigtEpsilon` -- the 6×6 matrix acts on tensor shears `ε`; the lower-left block is half the upper-right
/// * `Mandel` -- orthonormal basis; shear components are scaled by `√2`
///
/// See Brannon (2018) Rotation, Reflection, and Frame Changes, IOP Publishing.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComponentSystem {
    VoigtGamma,
    VoigtEpsilon,
    Mandel,
}

/// Defines the crystal symmetries with a moduli handler
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SymmetryName {
    Triclinic,
    Isotropic,
    Cubic,
    Hexagonal,
}

impl ComponentSystem {
    /// Returns all component systems
    pub fn all() -> [ComponentSystem; 3] {
        [
            ComponentSystem::VoigtGamma,
            ComponentSystem::VoigtEpsilon,
            ComponentSystem::Mandel,
        ]
    }

    /// Parses the name of a component system (case is ignored)
    pub fn from_name(name: &str) -> Result<Self, StrError> {
        match name.to_uppercase().as_str() {
            "VOIGT_GAMMA" => Ok(ComponentSystem::VoigtGamma),
            "VOIGT_EPSILON" => Ok(ComponentSystem::VoigtEpsilon),
            "MANDEL" => Ok(ComponentSystem::Mandel),
            _ => Err("component system is not recognized; choices (ignore case) are: VOIGT_GAMMA, VOIGT_EPSILON, MANDEL"),
        }
    }

    /// Returns the name of the component system
    pub fn name(&self) -> &'static str {
        match self {
            ComponentSystem::VoigtGamma => "VOIGT_GAMMA",
            ComponentSystem::VoigtEpsilon => "VOIGT_EPSILON",
            ComponentSystem::Mandel => "MANDEL",
        }
    }
}

impl SymmetryName {
    /// Parses the name of a symmetry (case is ignored)
    pub fn from_name(name: &str) -> Result<Self, StrError> {
        match name.to_lowercase().as_str() {
            "triclinic" => Ok(SymmetryName::Triclinic),
            "isotropic" => Ok(SymmetryName::Isotropic),
            "cubic" => Ok(SymmetryName::Cubic),
            "hexagonal" => Ok(SymmetryName::Hexagonal),
            _ => Err("symmetry is not recognized; choices are: triclinic, isotropic, cubic, hexagonal"),
        }
    }

    /// Returns the name of the symmetry
    pub fn name(&self) -> &'static str {
        match self {
            SymmetryName::Triclinic => "triclinic",
            SymmetryName::Isotropic => "isotropic",
            SymmetryName::Cubic => "cubic",
            SymmetryName::Hexagonal => "hexagonal",
        }
    }

    /// Returns the number of independent moduli
    pub fn n_moduli(&self) -> usize {
        match self {
            SymmetryName::Triclinic => 21,
            SymmetryName::Isotropic => 2,
            SymmetryName::Cubic => 3,
            SymmetryName::Hexagonal => 5,
        }
    }
}

impl fmt::Display for ComponentSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl fmt::Display for SymmetryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
