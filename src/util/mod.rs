//! Contains some utility functions and structures

mod unique_vectors;
pub use crate::util::unique_vectors::*;
