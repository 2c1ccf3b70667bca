//! Makes available common structures needed to work with single crystals
//!
//! You may write `use polyxtal::prelude::*` in your code and obtain
//! access to commonly used functionality.

pub use crate::base::{ComponentSystem, Config, ParamSlip, ParamSlipModel, StressUnits, SymmetryName};
pub use crate::elasticity::{ElasticRecord, ElasticSingleCrystal, Moduli, SymmetryModuli, ThermalSingleCrystal};
pub use crate::orientation::{CrystalSymmetry, OrientationConvention, Quat, SymmetryRegistry};
pub use crate::slip::{slip_group, SlipCrystal, SlipGroup, SlipModel, SlipRequest};
pub use crate::tensor::{TensorData, TensorSystem};
pub use crate::util::unique_vectors;
pub use crate::Mat3;
