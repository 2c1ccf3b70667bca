use super::{Moduli, StiffnessMatrix};
use crate::base::{ComponentSystem, StressUnits, SymmetryName};
use crate::StrError;

/// Holds the moduli of a crystal symmetry together with the corresponding stiffness matrix
///
/// The stiffness matrix is the source of truth: after a change of component system or units,
/// the moduli are recomputed from the matrix entries.
#[derive(Clone, Debug)]
pub struct SymmetryModuli {
    moduli: Moduli,
    stiffness: StiffnessMatrix,
}

impl SymmetryModuli {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `moduli` -- the independent moduli given in `system` and `units`
    pub fn new(moduli: Moduli, system: ComponentSystem, units: StressUnits) -> Result<Self, StrError> {
        let stiffness = StiffnessMatrix::new(&moduli.expand(system), system, units)?;
        Ok(SymmetryModuli { moduli, stiffness })
    }

    /// Allocates isotropic moduli from the bulk modulus K and the shear modulus G
    ///
    /// ```text
    /// c11 = (3K + 4G) / 3
    /// c12 = (3K − 2G) / 3
    /// ```
    pub fn isotropic_from_k_g(k: f64, g: f64, system: ComponentSystem, units: StressUnits) -> Result<Self, StrError> {
        let (c11, c12) = isotropic_c11_c12(k, g);
        SymmetryModuli::new(Moduli::Isotropic { c11, c12 }, system, units)
    }

    /// Allocates isotropic moduli from Young's modulus E and Poisson's coefficient ν
    pub fn isotropic_from_e_nu(e: f64, nu: f64, system: ComponentSystem, units: StressUnits) -> Result<Self, StrError> {
        let (k, g) = k_g_from_e_nu(e, nu);
        SymmetryModuli::isotropic_from_k_g(k, g, system, units)
    }

    /// Allocates cubic moduli from the bulk modulus K and the shear moduli Gd and Gs
    ///
    /// * `gd` -- shear modulus involving the diagonal strains
    /// * `gs` -- shear modulus involving the off-diagonal strains
    pub fn cubic_from_k_gd_gs(
        k: f64,
        gd: f64,
        gs: f64,
        system: ComponentSystem,
        units: StressUnits,
    ) -> Result<Self, StrError> {
        let (c11, c12) = isotropic_c11_c12(k, gd);
        let c44 = if system == ComponentSystem::VoigtGamma { gs } else { 2.0 * gs };
        SymmetryModuli::new(Moduli::Cubic { c11, c12, c44 }, system, units)
    }

    /// Returns the current moduli
    pub fn moduli(&self) -> &Moduli {
        &self.moduli
    }

    /// Returns the symmetry
    pub fn symmetry(&self) -> SymmetryName {
        self.moduli.symmetry()
    }

    /// Returns the stiffness matrix
    pub fn stiffness(&self) -> &StiffnessMatrix {
        &self.stiffness
    }

    /// Returns the component system
    pub fn system(&self) -> ComponentSystem {
        self.stiffness.system()
    }

    /// Returns the units
    pub fn units(&self) -> StressUnits {
        self.stiffness.units()
    }

    /// Changes the component system and recomputes the moduli
    pub fn set_system(&mut self, system: ComponentSystem) {
        self.stiffness.set_system(system);
        self.recompute();
    }

    /// Changes the units and recomputes the moduli
    pub fn set_units(&mut self, units: StressUnits) {
        self.stiffness.set_units(units);
        self.recompute();
    }

    /// Recomputes the moduli from the current stiffness matrix
    pub fn recompute(&mut self) {
        self.moduli = Moduli::read_back(self.moduli.symmetry(), self.stiffness.matrix());
    }

    /// Returns the bulk modulus `K = (c11 + 2 c12) / 3`
    pub fn bulk_modulus(&self) -> f64 {
        let m = self.stiffness.matrix();
        (m.get(0, 0) + 2.0 * m.get(0, 1)) / 3.0
    }

    /// Returns the shear modulus involving the diagonal strains `Gd = (c11 − c12) / 2`
    pub fn shear_modulus_diagonal(&self) -> f64 {
        let m = self.stiffness.matrix();
        (m.get(0, 0) - m.get(0, 1)) / 2.0
    }

    /// Returns the shear modulus involving the off-diagonal strains
    ///
    /// `Gs = c44` under VoigtGamma and `Gs = c44 / 2` otherwise
    pub fn shear_modulus_offdiagonal(&self) -> f64 {
        let c44 = self.stiffness.matrix().get(3, 3);
        if self.system() == ComponentSystem::VoigtGamma {
            c44
        } else {
            0.5 * c44
        }
    }

    /// Returns the shear modulus of a uniform orientation distribution `G = 0.6 Gs + 0.4 Gd`
    pub fn isotropic_shear_modulus(&self) -> f64 {
        0.6 * self.shear_modulus_offdiagonal() + 0.4 * self.shear_modulus_diagonal()
    }

    /// Returns Zener's anisotropy ratio `A = Gs / Gd`
    pub fn zener_ratio(&self) -> f64 {
        self.shear_modulus_offdiagonal() / self.shear_modulus_diagonal()
    }
}

/// Returns (c11, c12) from the bulk and shear moduli
pub(crate) fn isotropic_c11_c12(k: f64, g: f64) -> (f64, f64) {
    ((3.0 * k + 4.0 * g) / 3.0, (3.0 * k - 2.0 * g) / 3.0)
}

/// Returns (K, G) from Young's modulus and Poisson's coefficient
pub(crate) fn k_g_from_e_nu(e: f64, nu: f64) -> (f64, f64) {
    (e / (1.0 - 2.0 * nu) / 3.0, e / (1.0 + nu) / 2.0)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::SymmetryModuli;
    use crate::base::{check_matrix, diag6, ComponentSystem, StressUnits, SymmetryName};
    use crate::elasticity::Moduli;
    use russell_lab::{approx_eq, mat_vec_mul, Vector};

    const GPA: StressUnits = StressUnits::GPa;

    fn identity_for(system: ComponentSystem) -> [[f64; 6]; 6] {
        if system == ComponentSystem::VoigtGamma {
            diag6(0.5)
        } else {
            diag6(1.0)
        }
    }

    #[test]
    fn identity_stiffness_works() {
        for system in ComponentSystem::all() {
            let correct = identity_for(system);

            let iso = SymmetryModuli::isotropic_from_k_g(1.0 / 3.0, 0.5, system, GPA).unwrap();
            check_matrix(iso.stiffness().matrix(), &correct, 1e-15);

            let cubic = SymmetryModuli::cubic_from_k_gd_gs(1.0 / 3.0, 0.5, 0.5, system, GPA).unwrap();
            check_matrix(cubic.stiffness().matrix(), &correct, 1e-15);

            let c44 = if system == ComponentSystem::VoigtGamma { 0.5 } else { 1.0 };
            let hex = Moduli::Hexagonal {
                c11: 1.0,
                c12: 0.0,
                c13: 0.0,
                c33: 1.0,
                c44,
            };
            let hex = SymmetryModuli::new(hex, system, GPA).unwrap();
            check_matrix(hex.stiffness().matrix(), &correct, 1e-15);

            let mut cij = [0.0; 21];
            for (k, i) in [0, 6, 11, 15, 18, 20].iter().enumerate() {
                cij[*i] = correct[k][k];
            }
            let tri = SymmetryModuli::new(Moduli::Triclinic { cij }, system, GPA).unwrap();
            check_matrix(tri.stiffness().matrix(), &correct, 1e-15);
        }
    }

    #[test]
    fn from_e_nu_works() {
        let iso = SymmetryModuli::isotropic_from_e_nu(1.0, 0.0, ComponentSystem::Mandel, GPA).unwrap();
        check_matrix(iso.stiffness().matrix(), &diag6(1.0), 1e-15);
        approx_eq(iso.bulk_modulus(), 1.0 / 3.0, 1e-15);
        approx_eq(iso.shear_modulus_diagonal(), 0.5, 1e-15);
    }

    #[test]
    fn isotropic_eigenvalues_work() {
        let (kk, gg) = (2.3, 1.5);
        let iso = SymmetryModuli::isotropic_from_k_g(kk, gg, ComponentSystem::Mandel, GPA).unwrap();
        let basis = [
            ([1.0, 1.0, 1.0, 0.0, 0.0, 0.0], 3.0 * kk),
            ([1.0, -1.0, 0.0, 0.0, 0.0, 0.0], 2.0 * gg),
            ([1.0, 0.0, -1.0, 0.0, 0.0, 0.0], 2.0 * gg),
            ([0.0, 0.0, 0.0, 1.0, 0.0, 0.0], 2.0 * gg),
            ([0.0, 0.0, 0.0, 0.0, 1.0, 0.0], 2.0 * gg),
            ([0.0, 0.0, 0.0, 0.0, 0.0, 1.0], 2.0 * gg),
        ];
        let mut cu = Vector::new(6);
        for (u, lambda) in &basis {
            let u = Vector::from(u);
            mat_vec_mul(&mut cu, 1.0, iso.stiffness().matrix(), &u).unwrap();
            for i in 0..6 {
                approx_eq(cu[i], lambda * u[i], 1e-14);
            }
        }
    }

    #[test]
    fn derived_properties_are_system_invariant() {
        let (kk, gd, gs) = (3.1, 5.2, 7.3);
        let mut cubic = SymmetryModuli::cubic_from_k_gd_gs(kk, gd, gs, ComponentSystem::Mandel, GPA).unwrap();
        for system in [
            ComponentSystem::VoigtGamma,
            ComponentSystem::VoigtEpsilon,
            ComponentSystem::Mandel,
            ComponentSystem::VoigtEpsilon,
            ComponentSystem::VoigtGamma,
        ] {
            cubic.set_system(system);
            assert_eq!(cubic.system(), system);
            approx_eq(cubic.bulk_modulus(), kk, 1e-14);
            approx_eq(cubic.shear_modulus_diagonal(), gd, 1e-14);
            approx_eq(cubic.shear_modulus_offdiagonal(), gs, 1e-14);
            approx_eq(cubic.isotropic_shear_modulus(), 0.6 * gs + 0.4 * gd, 1e-14);
            approx_eq(cubic.zener_ratio(), gs / gd, 1e-14);
        }
    }

    #[test]
    fn set_system_recomputes_moduli() {
        let moduli = Moduli::Cubic {
            c11: 2.3,
            c12: 4.5,
            c44: 7.8,
        };
        let mut cubic = SymmetryModuli::new(moduli, ComponentSystem::VoigtGamma, GPA).unwrap();
        assert_eq!(cubic.symmetry(), SymmetryName::Cubic);
        cubic.set_system(ComponentSystem::VoigtEpsilon);
        assert_eq!(cubic.moduli().to_flat(), &[2.3, 4.5, 15.6]);
        cubic.set_system(ComponentSystem::VoigtGamma);
        assert_eq!(cubic.moduli(), &moduli);

        cubic.set_units(StressUnits::MPa);
        assert_eq!(cubic.units(), StressUnits::MPa);
        let flat = cubic.moduli().to_flat();
        approx_eq(flat[0], 2300.0, 1e-12);
        approx_eq(flat[2], 7800.0, 1e-12);
    }
}
