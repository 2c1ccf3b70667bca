//! Implements quaternion algebra, crystal symmetry groups, and orientation conventions

mod conventions;
mod crystal_symmetry;
mod quaternion;
mod symmetry_registry;
pub use crate::orientation::conventions::*;
pub use crate::orientation::crystal_symmetry::*;
pub use crate::orientation::quaternion::*;
pub use crate::orientation::symmetry_registry::*;
