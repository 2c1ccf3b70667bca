//! Implements the base structures: enums, units, constants, configuration and parameters

mod config;
mod constants;
mod enums;
mod parameters;
mod sample_params;
mod testing;
mod units;
pub use crate::base::config::*;
pub use crate::base::constants::*;
pub use crate::base::enums::*;
pub use crate::base::parameters::*;
pub use crate::base::sample_params::*;
pub use crate::base::units::*;

#[allow(unused_imports)]
pub(crate) use crate::base::testing::*;
