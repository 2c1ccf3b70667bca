//! Implements slip-system groups, slip crystals, and rate-dependent hardening models

mod af_single_hardness;
mod af_zero_backstress;
mod armstrong_frederick;
mod slip_crystal;
mod slip_group;
mod slip_library;
mod slip_model;
pub use crate::slip::af_single_hardness::*;
pub use crate::slip::af_zero_backstress::*;
pub use crate::slip::armstrong_frederick::*;
pub use crate::slip::slip_crystal::*;
pub use crate::slip::slip_group::*;
pub use crate::slip::slip_library::*;
pub use crate::slip::slip_model::*;
