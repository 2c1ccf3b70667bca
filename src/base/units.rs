use crate::StrError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the units of stress (and elastic moduli)
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum StressUnits {
    #[serde(rename = "Pa")]
    Pa,
    #[serde(rename = "kPa")]
    KPa,
    #[serde(rename = "MPa")]
    MPa,
    #[serde(rename = "GPa")]
    GPa,
    #[serde(rename = "psi")]
    Psi,
    #[serde(rename = "ksi")]
    Ksi,
}

/// Pascals per pound-force per square inch
const PA_PER_PSI: f64 = 6894.757293168361;

impl StressUnits {
    /// Parses the units symbol (e.g., "GPa" or "psi")
    pub fn from_name(name: &str) -> Result<Self, StrError> {
        match name.trim() {
            "Pa" => Ok(StressUnits::Pa),
            "kPa" => Ok(StressUnits::KPa),
            "MPa" => Ok(StressUnits::MPa),
            "GPa" => Ok(StressUnits::GPa),
            "psi" => Ok(StressUnits::Psi),
            "ksi" => Ok(StressUnits::Ksi),
            _ => Err("stress units are not recognized; choices are: Pa, kPa, MPa, GPa, psi, ksi"),
        }
    }

    /// Returns the units symbol
    pub fn name(&self) -> &'static str {
        match self {
            StressUnits::Pa => "Pa",
            StressUnits::KPa => "kPa",
            StressUnits::MPa => "MPa",
            StressUnits::GPa => "GPa",
            StressUnits::Psi => "psi",
            StressUnits::Ksi => "ksi",
        }
    }

    /// Returns the value of one unit in Pascals
    pub fn in_pascals(&self) -> f64 {
        match self {
            StressUnits::Pa => 1.0,
            StressUnits::KPa => 1e3,
            StressUnits::MPa => 1e6,
            StressUnits::GPa => 1e9,
            StressUnits::Psi => PA_PER_PSI,
            StressUnits::Ksi => 1e3 * PA_PER_PSI,
        }
    }

    /// Returns the factor converting magnitudes in these units to magnitudes in `other` units
    ///
    /// ```text
    /// value_other = factor · value_self
    /// ```
    pub fn factor_to(&self, other: StressUnits) -> f64 {
        if *self == other {
            return 1.0;
        }
        self.in_pascals() / other.in_pascals()
    }
}

impl fmt::Display for StressUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
