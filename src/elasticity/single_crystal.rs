use super::{isotropic_c11_c12, k_g_from_e_nu, Moduli, SymmetryModuli};
use crate::base::{ComponentSystem, Config, StressUnits, SymmetryName};
use crate::tensor::{change_basis, mat3_transpose, TensorSystem};
use crate::{Mat3, StrError};
use russell_lab::{mat_inverse, mat_vec_mul, Matrix, Vector};

/// Implements the linear elastic response of a single crystal
///
/// The moduli are given in the input component system and units (see [Config]); the stiffness
/// and compliance matrices are delivered in the output component system and units.
#[derive(Clone, Debug)]
pub struct ElasticSingleCrystal {
    /// Name of the material
    pub name: String,

    /// Moduli as given
    cij_in: Moduli,

    /// Component system of the given moduli
    input_system: ComponentSystem,

    /// Units of the given moduli
    input_units: StressUnits,

    /// Moduli and stiffness in the output system and units
    moduli: SymmetryModuli,

    /// Coefficient of thermal expansion (crystal frame)
    cte: Option<Mat3>,
}

impl ElasticSingleCrystal {
    /// Allocates a new instance
    pub fn new(moduli: Moduli, config: &Config) -> Result<Self, StrError> {
        let mut sym = SymmetryModuli::new(moduli, config.input_system, config.input_units)?;
        sym.set_system(config.output_system);
        sym.set_units(config.output_units);
        Ok(ElasticSingleCrystal {
            name: config.name.clone(),
            cij_in: moduli,
            input_system: config.input_system,
            input_units: config.input_units,
            moduli: sym,
            cte: config.cte,
        })
    }

    /// Allocates an isotropic crystal from the bulk modulus K and the shear modulus G
    pub fn from_k_g(k: f64, g: f64, config: &Config) -> Result<Self, StrError> {
        let (c11, c12) = isotropic_c11_c12(k, g);
        ElasticSingleCrystal::new(Moduli::Isotropic { c11, c12 }, config)
    }

    /// Allocates an isotropic crystal from Young's modulus E and Poisson's coefficient ν
    pub fn from_e_nu(e: f64, nu: f64, config: &Config) -> Result<Self, StrError> {
        let (k, g) = k_g_from_e_nu(e, nu);
        ElasticSingleCrystal::from_k_g(k, g, config)
    }

    /// Returns the symmetry
    pub fn symmetry(&self) -> SymmetryName {
        self.cij_in.symmetry()
    }

    /// Returns the moduli as given (input system and units)
    pub fn cij_in(&self) -> &Moduli {
        &self.cij_in
    }

    /// Returns the moduli in the output system and units
    pub fn cij_out(&self) -> &Moduli {
        self.moduli.moduli()
    }

    /// Returns the symmetry moduli in the output system and units
    pub fn symmetry_moduli(&self) -> &SymmetryModuli {
        &self.moduli
    }

    /// Returns the component system of the given moduli
    pub fn input_system(&self) -> ComponentSystem {
        self.input_system
    }

    /// Returns the units of the given moduli
    pub fn input_units(&self) -> StressUnits {
        self.input_units
    }

    /// Returns the output component system
    pub fn output_system(&self) -> ComponentSystem {
        self.moduli.system()
    }

    /// Returns the output units
    pub fn output_units(&self) -> StressUnits {
        self.moduli.units()
    }

    /// Changes the output component system
    pub fn set_output_system(&mut self, system: ComponentSystem) {
        self.moduli.set_system(system);
    }

    /// Changes the output units
    pub fn set_output_units(&mut self, units: StressUnits) {
        self.moduli.set_units(units);
    }

    /// Returns the coefficient of thermal expansion, if given
    pub fn cte(&self) -> Option<&Mat3> {
        self.cte.as_ref()
    }

    /// Returns the stiffness matrix (crystal frame)
    pub fn stiffness(&self) -> &Matrix {
        self.moduli.stiffness().matrix()
    }

    /// Returns the compliance matrix (crystal frame)
    pub fn compliance(&self) -> Result<Matrix, StrError> {
        let mut ss = Matrix::new(6, 6);
        mat_inverse(&mut ss, self.stiffness()).map_err(|_| "stiffness matrix is singular")?;
        if ss.as_data().iter().any(|x| !x.is_finite()) {
            return Err("stiffness matrix is singular");
        }
        Ok(ss)
    }

    /// Returns the stiffness matrix in the sample frame
    ///
    /// # Input
    ///
    /// * `rmat` -- rotation matrix taking crystal components to sample components
    pub fn sample_stiffness(&self, rmat: &Mat3) -> Result<Matrix, StrError> {
        let system = self.output_system();
        let to_crystal = [mat3_transpose(rmat)];
        let mut res = Matrix::new(6, 6);
        for j in 0..6 {
            let mut unit = [0.0; 6];
            unit[j] = 1.0;
            let eps = strain_from_vector(system, &unit)?;
            let sig = self.apply_stiffness(&[eps], Some(&to_crystal))?;
            let column = stress_to_vector(system, &sig[0])?;
            for i in 0..6 {
                res.set(i, j, column[i]);
            }
        }
        Ok(res)
    }

    /// Returns the compliance matrix in the sample frame
    ///
    /// # Input
    ///
    /// * `rmat` -- rotation matrix taking crystal components to sample components
    pub fn sample_compliance(&self, rmat: &Mat3) -> Result<Matrix, StrError> {
        let system = self.output_system();
        let to_crystal = [mat3_transpose(rmat)];
        let mut res = Matrix::new(6, 6);
        for j in 0..6 {
            let mut unit = [0.0; 6];
            unit[j] = 1.0;
            let sig = stress_from_vector(system, &unit)?;
            let eps = self.apply_compliance(&[sig], Some(&to_crystal))?;
            let column = strain_to_vector(system, &eps[0])?;
            for i in 0..6 {
                res.set(i, j, column[i]);
            }
        }
        Ok(res)
    }

    /// Computes stress tensors from strain tensors
    ///
    /// # Input
    ///
    /// * `eps` -- strain tensors (only the symmetric part is used)
    /// * `rmats` -- optional rotations taking the strain components into the crystal frame
    ///   (`R ε Rᵀ`); the stress is rotated back with `Rᵀ σ R`. A single rotation is applied
    ///   to all tensors; otherwise the number of rotations must equal the number of tensors.
    pub fn apply_stiffness(&self, eps: &[Mat3], rmats: Option<&[Mat3]>) -> Result<Vec<Mat3>, StrError> {
        self.apply(eps, rmats, self.stiffness(), strain_to_vector, stress_from_vector)
    }

    /// Computes strain tensors from stress tensors (inverse of [ElasticSingleCrystal::apply_stiffness])
    pub fn apply_compliance(&self, sig: &[Mat3], rmats: Option<&[Mat3]>) -> Result<Vec<Mat3>, StrError> {
        let ss = self.compliance()?;
        self.apply(sig, rmats, &ss, stress_to_vector, strain_from_vector)
    }

    /// Applies a 6×6 operator to a batch of tensors
    fn apply(
        &self,
        tensors: &[Mat3],
        rmats: Option<&[Mat3]>,
        operator: &Matrix,
        to_vector: fn(ComponentSystem, &Mat3) -> Result<[f64; 6], StrError>,
        from_vector: fn(ComponentSystem, &[f64; 6]) -> Result<Mat3, StrError>,
    ) -> Result<Vec<Mat3>, StrError> {
        let system = self.output_system();
        let local = match rmats {
            Some(r) => change_basis(tensors, r, false)?,
            None => tensors.to_vec(),
        };
        let mut u = Vector::new(6);
        let mut v = Vector::new(6);
        let mut res = Vec::with_capacity(local.len());
        for m in &local {
            let a = to_vector(system, m)?;
            for i in 0..6 {
                u[i] = a[i];
            }
            mat_vec_mul(&mut v, 1.0, operator, &u)?;
            let b = [v[0], v[1], v[2], v[3], v[4], v[5]];
            res.push(from_vector(system, &b)?);
        }
        match rmats {
            Some(r) => change_basis(&res, r, true),
            None => Ok(res),
        }
    }
}

/// Returns the tensor system used to flatten symmetric tensors in a component system
fn flattening(system: ComponentSystem) -> TensorSystem {
    match system {
        ComponentSystem::Mandel => TensorSystem::Mandel,
        _ => TensorSystem::Voigt,
    }
}

/// Converts a strain tensor to a 6-vector (engineering shears under VoigtGamma)
pub fn strain_to_vector(system: ComponentSystem, eps: &Mat3) -> Result<[f64; 6], StrError> {
    let mut v = flattening(system).symm(eps)?;
    if system == ComponentSystem::VoigtGamma {
        for i in 3..6 {
            v[i] *= 2.0;
        }
    }
    Ok(v)
}

/// Converts a 6-vector to a strain tensor (inverse of [strain_to_vector])
pub fn strain_from_vector(system: ComponentSystem, v: &[f64; 6]) -> Result<Mat3, StrError> {
    let mut w = *v;
    if system == ComponentSystem::VoigtGamma {
        for i in 3..6 {
            w[i] *= 0.5;
        }
    }
    flattening(system).matrix_from_symm(&w)
}

/// Converts a stress tensor to a 6-vector
pub fn stress_to_vector(system: ComponentSystem, sig: &Mat3) -> Result<[f64; 6], StrError> {
    flattening(system).symm(sig)
}

/// Converts a 6-vector to a stress tensor (inverse of [stress_to_vector])
pub fn stress_from_vector(system: ComponentSystem, v: &[f64; 6]) -> Result<Mat3, StrError> {
    flattening(system).matrix_from_symm(v)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{strain_from_vector, strain_to_vector, ElasticSingleCrystal};
    use crate::base::{check_mat3, check_matrices, check_matrix, diag6, ComponentSystem, Config, StressUnits};
    use crate::elasticity::Moduli;
    use crate::orientation::random_rmats;
    use crate::tensor::{mat3_identity, mat3_rotate, mat3_transpose};
    use crate::Mat3;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use russell_lab::approx_eq;

    fn config_with(input: ComponentSystem, output: ComponentSystem) -> Config {
        let mut config = Config::new();
        config.set_input_system(input).unwrap().set_output_system(output).unwrap();
        config
    }

    fn sample_strains() -> Vec<Mat3> {
        vec![
            [[1.0, 0.2, -0.3], [0.2, -0.5, 0.4], [-0.3, 0.4, 0.7]],
            [[0.0, 1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 0.0]],
            [[-2.0, 0.0, 0.5], [0.0, 3.0, -1.5], [0.5, -1.5, 0.1]],
        ]
    }

    fn sample_crystals(config: &Config) -> Vec<ElasticSingleCrystal> {
        vec![
            ElasticSingleCrystal::new(Moduli::Isotropic { c11: 3.0, c12: 1.0 }, config).unwrap(),
            ElasticSingleCrystal::new(
                Moduli::Cubic {
                    c11: 168.4,
                    c12: 121.4,
                    c44: 75.4,
                },
                config,
            )
            .unwrap(),
            ElasticSingleCrystal::new(
                Moduli::Hexagonal {
                    c11: 162.4,
                    c12: 92.0,
                    c13: 69.0,
                    c33: 180.7,
                    c44: 46.7,
                },
                config,
            )
            .unwrap(),
        ]
    }

    #[test]
    fn identity_stiffness_works() {
        let config = Config::new();
        let ident = diag6(1.0);

        let xtal = ElasticSingleCrystal::from_k_g(1.0 / 3.0, 0.5, &config).unwrap();
        check_matrix(xtal.stiffness(), &ident, 1e-15);

        let xtal = ElasticSingleCrystal::from_e_nu(1.0, 0.0, &config).unwrap();
        check_matrix(xtal.stiffness(), &ident, 1e-15);

        let xtal = ElasticSingleCrystal::new(Moduli::Isotropic { c11: 1.0, c12: 0.0 }, &config).unwrap();
        check_matrix(xtal.stiffness(), &ident, 1e-15);

        let cubic = Moduli::Cubic {
            c11: 1.0,
            c12: 0.0,
            c44: 0.5,
        };
        let xtal = ElasticSingleCrystal::new(cubic, &config).unwrap();
        check_matrix(xtal.stiffness(), &ident, 1e-15);

        let hex = Moduli::Hexagonal {
            c11: 1.0,
            c12: 0.0,
            c13: 0.0,
            c33: 1.0,
            c44: 0.5,
        };
        let xtal = ElasticSingleCrystal::new(hex, &config).unwrap();
        check_matrix(xtal.stiffness(), &ident, 1e-15);

        let mut cij = [0.0; 21];
        for i in [0, 6, 11, 15, 18, 20] {
            cij[i] = 1.0;
        }
        let config = config_with(ComponentSystem::Mandel, ComponentSystem::Mandel);
        let xtal = ElasticSingleCrystal::new(Moduli::Triclinic { cij }, &config).unwrap();
        check_matrix(xtal.stiffness(), &ident, 1e-15);
        check_matrix(&xtal.compliance().unwrap(), &ident, 1e-15);
    }

    #[test]
    fn cij_out_works() {
        let config = config_with(ComponentSystem::VoigtGamma, ComponentSystem::Mandel);
        let xtal = ElasticSingleCrystal::new(Moduli::Isotropic { c11: 2.3, c12: 4.9 }, &config).unwrap();
        assert_eq!(xtal.cij_out().to_flat(), &[2.3, 4.9]);

        let config = config_with(ComponentSystem::VoigtGamma, ComponentSystem::VoigtEpsilon);
        let cubic = Moduli::Cubic {
            c11: 2.3,
            c12: 4.5,
            c44: 7.8,
        };
        let xtal = ElasticSingleCrystal::new(cubic, &config).unwrap();
        assert_eq!(xtal.cij_in(), &cubic);
        assert_eq!(xtal.cij_out().to_flat(), &[2.3, 4.5, 15.6]);

        let config = config_with(ComponentSystem::VoigtEpsilon, ComponentSystem::VoigtGamma);
        let hex = Moduli::Hexagonal {
            c11: 1.0,
            c12: 2.3,
            c13: 3.4,
            c33: 5.6,
            c44: 6.6,
        };
        let xtal = ElasticSingleCrystal::new(hex, &config).unwrap();
        let out = xtal.cij_out().to_flat();
        assert_eq!(&out[0..4], &[1.0, 2.3, 3.4, 5.6]);
        approx_eq(out[4], 3.3, 1e-15);

        let config = config_with(ComponentSystem::Mandel, ComponentSystem::VoigtGamma);
        let values: Vec<_> = (0..21).map(|k| k as f64).collect();
        let tri = Moduli::from_flat(crate::base::SymmetryName::Triclinic, &values).unwrap();
        let xtal = ElasticSingleCrystal::new(tri, &config).unwrap();
        let out = xtal.cij_out().to_flat();
        let r2 = 1.0 / f64::sqrt(2.0);
        for k in [0, 1, 2, 6, 7, 11] {
            approx_eq(out[k], values[k], 1e-15);
        }
        for k in [3, 4, 5, 8, 9, 10, 12, 13, 14] {
            approx_eq(out[k], r2 * values[k], 1e-14);
        }
        for k in 15..21 {
            approx_eq(out[k], 0.5 * values[k], 1e-15);
        }
    }

    #[test]
    fn output_setters_work() {
        let mut xtal = ElasticSingleCrystal::from_k_g(1.0 / 3.0, 0.5, &Config::new()).unwrap();
        assert_eq!(xtal.input_system(), ComponentSystem::VoigtGamma);
        assert_eq!(xtal.input_units(), StressUnits::GPa);
        xtal.set_output_system(ComponentSystem::VoigtGamma);
        assert_eq!(xtal.output_system(), ComponentSystem::VoigtGamma);
        check_matrix(xtal.stiffness(), &diag6(0.5), 1e-15);
        xtal.set_output_units(StressUnits::MPa);
        assert_eq!(xtal.output_units(), StressUnits::MPa);
        approx_eq(xtal.stiffness().get(0, 0), 1000.0, 1e-12);
        approx_eq(xtal.stiffness().get(3, 3), 500.0, 1e-12);
    }

    #[test]
    fn cte_works() {
        let mut config = Config::new();
        let xtal = ElasticSingleCrystal::from_k_g(1.0, 1.0, &config).unwrap();
        assert_eq!(xtal.cte(), None);
        config.set_cte_scalar(2.0).unwrap();
        let xtal = ElasticSingleCrystal::from_k_g(1.0, 1.0, &config).unwrap();
        assert_eq!(xtal.cte(), Some(&[[2.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 2.0]]));
    }

    #[test]
    fn compliance_captures_singular_stiffness() {
        let xtal = ElasticSingleCrystal::new(Moduli::Isotropic { c11: 1.0, c12: 1.0 }, &Config::new()).unwrap();
        assert_eq!(xtal.compliance().err(), Some("stiffness matrix is singular"));
        assert_eq!(
            xtal.apply_compliance(&[mat3_identity()], None).err(),
            Some("stiffness matrix is singular")
        );
    }

    #[test]
    fn strain_vectors_work() {
        let eps = [[1.0, 0.2, 0.3], [0.2, 2.0, 0.4], [0.3, 0.4, 3.0]];
        let v = strain_to_vector(ComponentSystem::VoigtGamma, &eps).unwrap();
        let correct = [1.0, 2.0, 3.0, 0.8, 0.6, 0.4];
        for i in 0..6 {
            approx_eq(v[i], correct[i], 1e-15);
        }
        let v = strain_to_vector(ComponentSystem::VoigtEpsilon, &eps).unwrap();
        approx_eq(v[3], 0.4, 1e-15);
        for system in ComponentSystem::all() {
            let v = strain_to_vector(system, &eps).unwrap();
            check_mat3(&strain_from_vector(system, &v).unwrap(), &eps, 1e-15);
        }
    }

    #[test]
    fn isotropic_stiffness_gives_hooke_law() {
        let (kk, gg) = (2.0, 0.75);
        let eps = sample_strains();
        for system in ComponentSystem::all() {
            let config = config_with(ComponentSystem::VoigtGamma, system);
            let xtal = ElasticSingleCrystal::from_k_g(kk, gg, &config).unwrap();
            let sig = xtal.apply_stiffness(&eps, None).unwrap();
            for (e, s) in eps.iter().zip(&sig) {
                let tr = e[0][0] + e[1][1] + e[2][2];
                for i in 0..3 {
                    for j in 0..3 {
                        let delta = if i == j { 1.0 } else { 0.0 };
                        let correct = (kk - 2.0 * gg / 3.0) * tr * delta + 2.0 * gg * e[i][j];
                        approx_eq(s[i][j], correct, 1e-13);
                    }
                }
            }
        }
    }

    #[test]
    fn stiffness_compliance_round_trip_works() {
        let eps = sample_strains();
        let mut rng = StdRng::seed_from_u64(1234);
        let rmats = random_rmats(eps.len(), &mut rng).unwrap();
        for system in ComponentSystem::all() {
            let config = config_with(ComponentSystem::VoigtGamma, system);
            for xtal in sample_crystals(&config) {
                let sig = xtal.apply_stiffness(&eps, None).unwrap();
                let back = xtal.apply_compliance(&sig, None).unwrap();
                for k in 0..eps.len() {
                    check_mat3(&back[k], &eps[k], 1e-10);
                }
                let sig = xtal.apply_stiffness(&eps, Some(&rmats)).unwrap();
                let back = xtal.apply_compliance(&sig, Some(&rmats)).unwrap();
                for k in 0..eps.len() {
                    check_mat3(&back[k], &eps[k], 1e-10);
                }
                let sig = xtal.apply_stiffness(&eps, Some(&rmats[0..1])).unwrap();
                let back = xtal.apply_compliance(&sig, Some(&rmats[0..1])).unwrap();
                for k in 0..eps.len() {
                    check_mat3(&back[k], &eps[k], 1e-10);
                }
            }
        }
    }

    #[test]
    fn apply_captures_shape_mismatch() {
        let xtal = ElasticSingleCrystal::from_k_g(1.0, 1.0, &Config::new()).unwrap();
        let eps = sample_strains();
        let rmats = [mat3_identity(), mat3_identity()];
        assert_eq!(
            xtal.apply_stiffness(&eps, Some(&rmats)).err(),
            Some("the number of rotations must be one or equal to the number of matrices")
        );
    }

    #[test]
    fn rotated_stiffness_is_consistent() {
        let eps = sample_strains();
        let mut rng = StdRng::seed_from_u64(99);
        let rmats = random_rmats(1, &mut rng).unwrap();
        let rr = rmats[0];
        for system in ComponentSystem::all() {
            let config = config_with(ComponentSystem::VoigtGamma, system);
            for xtal in sample_crystals(&config) {
                // crystal-frame response rotated into the sample frame
                let eps_crystal: Vec<Mat3> = eps.iter().map(|e| mat3_rotate(&rr, e, true).unwrap()).collect();
                let sig_crystal = xtal.apply_stiffness(&eps_crystal, None).unwrap();
                let sig = xtal.apply_stiffness(&eps, Some(&[mat3_transpose(&rr)])).unwrap();
                for k in 0..eps.len() {
                    let correct = mat3_rotate(&rr, &sig_crystal[k], false).unwrap();
                    check_mat3(&sig[k], &correct, 1e-10);
                }

                // sample-frame matrices
                let cc = xtal.sample_stiffness(&rr).unwrap();
                let ss = xtal.sample_compliance(&rr).unwrap();
                let mut prod = russell_lab::Matrix::new(6, 6);
                russell_lab::mat_mat_mul(&mut prod, 1.0, &cc, &ss, 0.0).unwrap();
                check_matrix(&prod, &diag6(1.0), 1e-10);
                let cc0 = xtal.sample_stiffness(&mat3_identity()).unwrap();
                check_matrices(&cc0, xtal.stiffness(), 1e-10);
            }
        }
    }

    #[test]
    fn isotropic_mandel_modulus_matches_russell_tensor() {
        let (young, poisson) = (1500.0, 0.25);
        let xtal = ElasticSingleCrystal::from_e_nu(young, poisson, &Config::new()).unwrap();
        let ela = russell_tensor::LinElasticity::new(young, poisson, false, false);
        let dd = ela.get_modulus().matrix();
        for i in 0..6 {
            for j in 0..6 {
                approx_eq(xtal.stiffness().get(i, j), dd.get(i, j), 1e-10);
            }
        }
    }
}
