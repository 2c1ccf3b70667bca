//! Implements elastic stiffness matrices, symmetry moduli, and single-crystal models

mod material_record;
mod moduli;
mod single_crystal;
mod stiffness_matrix;
mod symmetry_moduli;
mod thermal;
pub use crate::elasticity::material_record::*;
pub use crate::elasticity::moduli::*;
pub use crate::elasticity::single_crystal::*;
pub use crate::elasticity::stiffness_matrix::*;
pub use crate::elasticity::symmetry_moduli::*;
pub use crate::elasticity::thermal::*;
