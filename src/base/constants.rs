use super::{ComponentSystem, StressUnits};

/// Square root of two
pub const SQRT_2: f64 = 1.41421356237309504880168872420969808_f64;

/// Square root of three
pub const SQRT_3: f64 = 1.73205080756887729352744634150587237_f64;

/// Square root of six
pub const SQRT_6: f64 = 2.44948974278317809819728407470589139_f64;

/// Defines the default cutoff (radians) for angles near 0 and π
pub const DEFAULT_ANGLE_CUTOFF: f64 = 1e-6;

/// Defines the default absolute tolerance to compare components of vectors and tensors
pub const DEFAULT_UNIQUE_TOL: f64 = 1e-8;

/// Defines the default stress units
pub const DEFAULT_UNITS: StressUnits = StressUnits::GPa;

/// Defines the default component system for input moduli
pub const DEFAULT_INPUT_SYSTEM: ComponentSystem = ComponentSystem::VoigtGamma;

/// Defines the default component system for output matrices
pub const DEFAULT_OUTPUT_SYSTEM: ComponentSystem = ComponentSystem::Mandel;
