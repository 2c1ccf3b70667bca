use super::{k_g_from_e_nu, isotropic_c11_c12, ElasticSingleCrystal, Moduli};
use crate::base::{ComponentSystem, Config, StressUnits, SymmetryName};
use crate::StrError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Holds a linear elasticity entry of a materials database
///
/// Example (JSON):
///
/// ```text
/// {
///     "name": "copper",
///     "symmetry": "cubic",
///     "moduli": {"c11": 168.4, "c12": 121.4, "c44": 75.4},
///     "units": "GPa",
///     "system": "VOIGT_GAMMA",
///     "reference": "Simmons and Wang (1971)"
/// }
/// ```
///
/// Symmetries without a moduli handler (e.g., tetragonal) are treated as triclinic and must
/// provide the 21 upper-triangle values as `"moduli": {"cij": [...]}`. A top-level `cij` list
/// is also accepted.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ElasticRecord {
    /// Name of the material
    pub name: String,

    /// Crystal symmetry (e.g., "cubic" or "tetragonal")
    pub symmetry: String,

    /// Named coefficients (c11, c12, c13, c33, c44, E, nu) or the `cij` list
    #[serde(default)]
    pub moduli: HashMap<String, Value>,

    /// The 21 upper-triangle values given outside of `moduli`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cij: Option<Vec<f64>>,

    /// Units symbol (e.g., "GPa")
    pub units: String,

    /// Component system name (e.g., "VOIGT_GAMMA")
    pub system: String,

    /// Bibliographic reference
    #[serde(default)]
    pub reference: String,
}

impl ElasticRecord {
    /// Reads a record from a JSON string
    pub fn from_json(json: &str) -> Result<Self, StrError> {
        serde_json::from_str(json).map_err(|_| "cannot parse elastic record")
    }

    /// Returns the symmetry used to build the moduli
    ///
    /// Symmetries without a moduli handler fall back to triclinic.
    pub fn symmetry_to_use(&self) -> SymmetryName {
        SymmetryName::from_name(&self.symmetry).unwrap_or(SymmetryName::Triclinic)
    }

    /// Returns the units
    pub fn stress_units(&self) -> Result<StressUnits, StrError> {
        StressUnits::from_name(&self.units)
    }

    /// Returns the component system
    pub fn component_system(&self) -> Result<ComponentSystem, StrError> {
        ComponentSystem::from_name(&self.system)
    }

    /// Returns the moduli in the record's component system and units
    pub fn to_moduli(&self) -> Result<Moduli, StrError> {
        match self.symmetry_to_use() {
            SymmetryName::Triclinic => Moduli::from_flat(SymmetryName::Triclinic, &self.cij_list()?),
            SymmetryName::Isotropic => {
                if let (Ok(c11), Ok(c12)) = (self.get("c11"), self.get("c12")) {
                    Ok(Moduli::Isotropic { c11, c12 })
                } else if let (Ok(e), Ok(nu)) = (self.get("E"), self.get("nu")) {
                    let (k, g) = k_g_from_e_nu(e, nu);
                    let (c11, c12) = isotropic_c11_c12(k, g);
                    Ok(Moduli::Isotropic { c11, c12 })
                } else {
                    Err("isotropic record requires c11 and c12, or E and nu")
                }
            }
            SymmetryName::Cubic => self
                .get_all(&["c11", "c12", "c44"])
                .map(|v| Moduli::Cubic {
                    c11: v[0],
                    c12: v[1],
                    c44: v[2],
                })
                .map_err(|_| "cubic record requires c11, c12 and c44"),
            SymmetryName::Hexagonal => self
                .get_all(&["c11", "c12", "c13", "c33", "c44"])
                .map(|v| Moduli::Hexagonal {
                    c11: v[0],
                    c12: v[1],
                    c13: v[2],
                    c33: v[3],
                    c44: v[4],
                })
                .map_err(|_| "hexagonal record requires c11, c12, c13, c33 and c44"),
        }
    }

    /// Allocates the elastic single crystal
    ///
    /// The stiffness is delivered in `output_system` and in the record's units.
    pub fn to_single_crystal(&self, output_system: ComponentSystem) -> Result<ElasticSingleCrystal, StrError> {
        let mut config = Config::new();
        config
            .set_name(&self.name)?
            .set_input_system(self.component_system()?)?
            .set_output_system(output_system)?
            .set_input_units(self.stress_units()?)?;
        ElasticSingleCrystal::new(self.to_moduli()?, &config)
    }

    fn get(&self, key: &str) -> Result<f64, StrError> {
        self.moduli.get(key).and_then(Value::as_f64).ok_or("coefficient is missing")
    }

    fn cij_list(&self) -> Result<Vec<f64>, StrError> {
        match (self.moduli.get("cij"), &self.cij) {
            (Some(value), _) => value
                .as_array()
                .ok_or(CIJ_NOT_NUMBERS)?
                .iter()
                .map(|v| v.as_f64().ok_or(CIJ_NOT_NUMBERS))
                .collect(),
            (None, Some(cij)) => Ok(cij.clone()),
            (None, None) => Err("triclinic record requires the cij list with 21 values"),
        }
    }

    fn get_all(&self, keys: &[&str]) -> Result<Vec<f64>, StrError> {
        keys.iter().map(|k| self.get(k)).collect()
    }
}

const CIJ_NOT_NUMBERS: StrError = "the cij entry must be a list of numbers";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
