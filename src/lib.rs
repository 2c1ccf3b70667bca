//! Polyxtal -- elastic moduli, crystal orientations, and slip systems for polycrystals
//!
//! The crate is organized as follows:
//!
//! * [base] -- component-system and symmetry tags, units, configuration, and parameters
//! * [tensor] -- conversion of 3×3 matrices to/from component vectors (Voigt, Mandel, SymmDev)
//! * [orientation] -- quaternion algebra, crystal symmetry groups, and orientation conventions
//! * [elasticity] -- stiffness matrices, symmetry moduli, and the elastic single crystal
//! * [slip] -- slip-system generation and rate-dependent hardening models
//! * [util] -- auxiliary tools such as `unique_vectors`

/// Defines a type alias for the error type as a static string
pub type StrError = &'static str;

/// Defines a 3×3 matrix stored as rows
pub type Mat3 = [[f64; 3]; 3];

pub mod base;
pub mod elasticity;
pub mod orientation;
pub mod prelude;
pub mod slip;
pub mod tensor;
pub mod util;
