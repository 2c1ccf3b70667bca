use super::{ComponentSystem, StressUnits, DEFAULT_INPUT_SYSTEM, DEFAULT_OUTPUT_SYSTEM, DEFAULT_UNITS};
use crate::{Mat3, StrError};
use std::fmt;

/// Holds configuration data for a single crystal
///
/// The input system and units describe the moduli as given (e.g., from a materials record).
/// The output system and units describe how the stiffness and compliance are delivered.
#[derive(Clone, Debug)]
pub struct Config {
    /// Name of the material
    pub name: String,

    /// Component system of the input moduli
    pub input_system: ComponentSystem,

    /// Component system of the output matrices
    pub output_system: ComponentSystem,

    /// Units of the input moduli
    pub input_units: StressUnits,

    /// Units of the output matrices
    pub output_units: StressUnits,

    /// Coefficient of thermal expansion tensor in the crystal frame
    pub cte: Option<Mat3>,
}

impl Config {
    /// Allocates a new instance with default values
    pub fn new() -> Self {
        Config {
            name: String::new(),
            input_system: DEFAULT_INPUT_SYSTEM,
            output_system: DEFAULT_OUTPUT_SYSTEM,
            input_units: DEFAULT_UNITS,
            output_units: DEFAULT_UNITS,
            cte: None,
        }
    }

    /// Sets the name of the material
    pub fn set_name(&mut self, name: &str) -> Result<&mut Self, StrError> {
        self.name = name.to_string();
        Ok(self)
    }

    /// Sets the component system of the input moduli
    pub fn set_input_system(&mut self, system: ComponentSystem) -> Result<&mut Self, StrError> {
        self.input_system = system;
        Ok(self)
    }

    /// Sets the component system of the output matrices
    pub fn set_output_system(&mut self, system: ComponentSystem) -> Result<&mut Self, StrError> {
        self.output_system = system;
        Ok(self)
    }

    /// Sets the input units; the output units are set equal to the input units
    pub fn set_input_units(&mut self, units: StressUnits) -> Result<&mut Self, StrError> {
        self.input_units = units;
        self.output_units = units;
        Ok(self)
    }

    /// Sets the output units
    pub fn set_output_units(&mut self, units: StressUnits) -> Result<&mut Self, StrError> {
        self.output_units = units;
        Ok(self)
    }

    /// Sets an isotropic coefficient of thermal expansion
    pub fn set_cte_scalar(&mut self, value: f64) -> Result<&mut Self, StrError> {
        self.cte = Some([[value, 0.0, 0.0], [0.0, value, 0.0], [0.0, 0.0, value]]);
        Ok(self)
    }

    /// Sets the coefficient of thermal expansion tensor
    ///
    /// # Input
    ///
    /// * `rows` -- a 3×3 array in the crystal frame
    pub fn set_cte(&mut self, rows: &[Vec<f64>]) -> Result<&mut Self, StrError> {
        if rows.len() != 3 || rows.iter().any(|r| r.len() != 3) {
            return Err("cte must be a 3×3 array");
        }
        let mut cte = [[0.0; 3]; 3];
        for i in 0..3 {
            for j in 0..3 {
                cte[i][j] = rows[i][j];
            }
        }
        self.cte = Some(cte);
        Ok(self)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Configuration data\n").unwrap();
        write!(f, "==================\n").unwrap();
        write!(f, "name = {:?}\n", self.name).unwrap();
        write!(f, "input_system = {}\n", self.input_system).unwrap();
        write!(f, "output_system = {}\n", self.output_system).unwrap();
        write!(f, "input_units = {}\n", self.input_units).unwrap();
        write!(f, "output_units = {}\n", self.output_units).unwrap();
        write!(f, "cte = {:?}\n", self.cte).unwrap();
        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
