//! Implements the conversion of 3×3 matrices to and from component vectors

mod change_basis;
mod flat_parts;
mod mat3;
mod tensor_data;
mod tensor_system;
pub use crate::tensor::change_basis::*;
pub use crate::tensor::flat_parts::*;
pub use crate::tensor::mat3::*;
pub use crate::tensor::tensor_data::*;
pub use crate::tensor::tensor_system::*;
