use crate::base::{ComponentSystem, StressUnits};
use crate::StrError;
use russell_lab::Matrix;

/// Number of independent values in the upper triangle of a 6×6 matrix
pub const N_UPPER_TRIANGLE: usize = 21;

/// Holds a 6×6 stiffness matrix tagged with its component system and units
///
/// The matrix is partitioned into four 3×3 blocks:
///
/// ```text
/// ┌         ┐
/// │ UL   UR │   UL: normal-normal    UR: normal-shear
/// │ LL   LR │   LL: shear-normal     LR: shear-shear
/// └         ┘
/// ```
///
/// Changing the component system rescales UR, LL and LR; changing the units rescales all entries.
#[derive(Clone, Debug)]
pub struct StiffnessMatrix {
    matrix: Matrix,
    system: ComponentSystem,
    units: StressUnits,
}

impl StiffnessMatrix {
    /// Allocates a new instance from the 21 upper-triangle values
    ///
    /// # Input
    ///
    /// * `cij` -- the upper triangle in row-major order: c11, c12, ..., c16, c22, ..., c66
    /// * `system` -- the component system of the given values
    /// * `units` -- the units of the given values
    ///
    /// # Notes
    ///
    /// The lower triangle mirrors the upper triangle, except under VoigtEpsilon,
    /// where the lower-left block is one-half of the upper-right block.
    pub fn new(cij: &[f64], system: ComponentSystem, units: StressUnits) -> Result<Self, StrError> {
        if cij.len() != N_UPPER_TRIANGLE {
            return Err("cij must have length 21");
        }
        let mut matrix = Matrix::new(6, 6);
        let mut k = 0;
        for i in 0..6 {
            for j in i..6 {
                matrix.set(i, j, cij[k]);
                matrix.set(j, i, cij[k]);
                k += 1;
            }
        }
        if system == ComponentSystem::VoigtEpsilon {
            for i in 3..6 {
                for j in 0..3 {
                    matrix.set(i, j, 0.5 * matrix.get(j, i));
                }
            }
        }
        Ok(StiffnessMatrix { matrix, system, units })
    }

    /// Returns the 6×6 matrix
    pub fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    /// Returns the component system
    pub fn system(&self) -> ComponentSystem {
        self.system
    }

    /// Returns the units
    pub fn units(&self) -> StressUnits {
        self.units
    }

    /// Returns the 21 upper-triangle values in row-major order
    pub fn cij_upper(&self) -> [f64; N_UPPER_TRIANGLE] {
        let mut cij = [0.0; N_UPPER_TRIANGLE];
        let mut k = 0;
        for i in 0..6 {
            for j in i..6 {
                cij[k] = self.matrix.get(i, j);
                k += 1;
            }
        }
        cij
    }

    /// Converts the matrix to another component system
    ///
    /// Nothing happens if the system is the current one.
    pub fn set_system(&mut self, system: ComponentSystem) {
        if system == self.system {
            return;
        }
        let (ur, ll, lr) = block_scales(self.system, system);
        log::debug!(
            "stiffness matrix: {} → {} (block scales: {}, {}, {})",
            self.system,
            system,
            ur,
            ll,
            lr
        );
        for i in 0..3 {
            for j in 3..6 {
                self.matrix.set(i, j, ur * self.matrix.get(i, j));
                self.matrix.set(j, i, ll * self.matrix.get(j, i));
            }
        }
        for i in 3..6 {
            for j in 3..6 {
                self.matrix.set(i, j, lr * self.matrix.get(i, j));
            }
        }
        self.system = system;
    }

    /// Converts the matrix to other units
    pub fn set_units(&mut self, units: StressUnits) {
        if units == self.units {
            return;
        }
        let factor = self.units.factor_to(units);
        log::debug!("stiffness matrix: {} → {} (factor: {})", self.units, units, factor);
        let (m, n) = self.matrix.dims();
        for i in 0..m {
            for j in 0..n {
                self.matrix.set(i, j, factor * self.matrix.get(i, j));
            }
        }
        self.units = units;
    }
}

/// Returns the (upper-right, lower-left, lower-right) block factors taking VoigtGamma to `system`
fn scales_from_voigt_gamma(system: ComponentSystem) -> (f64, f64, f64) {
    match system {
        ComponentSystem::VoigtGamma => (1.0, 1.0, 1.0),
        ComponentSystem::VoigtEpsilon => (2.0, 1.0, 2.0),
        ComponentSystem::Mandel => (f64::sqrt(2.0), f64::sqrt(2.0), 2.0),
    }
}

/// Returns the (upper-right, lower-left, lower-right) block factors converting `from` to `to`
pub fn block_scales(from: ComponentSystem, to: ComponentSystem) -> (f64, f64, f64) {
    let (a0, b0, c0) = scales_from_voigt_gamma(from);
    let (a1, b1, c1) = scales_from_voigt_gamma(to);
    (a1 / a0, b1 / b0, c1 / c0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
