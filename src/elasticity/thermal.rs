use crate::{Mat3, StrError};

/// Holds the thermal conductivity of a single crystal
#[derive(Clone, Debug)]
pub struct ThermalSingleCrystal {
    /// Name of the material
    pub name: String,

    /// Name of the symmetry as given
    pub symmetry: String,

    /// Independent conductivity values
    pub kij: Vec<f64>,

    conductivity: Mat3,
}

impl ThermalSingleCrystal {
    /// Allocates a new instance
    ///
    /// # Input
    ///
    /// * `symmetry` -- symmetry name; only the prefix matters: `iso`, `cub`, `hex`, or `ort`
    /// * `kij` -- independent values; isotropic/cubic: `[k]`; hexagonal: `[a, c]`; orthotropic: `[a, b, c]`
    /// * `name` -- name of the material
    pub fn new(symmetry: &str, kij: &[f64], name: &str) -> Result<Self, StrError> {
        let (k11, k22, k33) = if symmetry.starts_with("iso") || symmetry.starts_with("cub") {
            if kij.is_empty() {
                return Err("isotropic and cubic conductivities require one value");
            }
            (kij[0], kij[0], kij[0])
        } else if symmetry.starts_with("hex") {
            if kij.len() < 2 {
                return Err("hexagonal conductivity requires two values: a, c");
            }
            (kij[0], kij[0], kij[1])
        } else if symmetry.starts_with("ort") {
            if kij.len() < 3 {
                return Err("orthotropic conductivity requires three values: a, b, c");
            }
            (kij[0], kij[1], kij[2])
        } else {
            return Err("unknown symmetry for the thermal conductivity; choices are: isotropic, cubic, hexagonal, orthotropic");
        };
        Ok(ThermalSingleCrystal {
            name: name.to_string(),
            symmetry: symmetry.to_string(),
            kij: kij.to_vec(),
            conductivity: [[k11, 0.0, 0.0], [0.0, k22, 0.0], [0.0, 0.0, k33]],
        })
    }

    /// Returns the conductivity tensor (crystal frame)
    pub fn conductivity(&self) -> &Mat3 {
        &self.conductivity
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
