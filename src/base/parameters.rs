use serde::{Deserialize, Serialize};

/// Holds parameters for the rate-dependent slip (hardening) models
///
/// All models share the power-law rate sensitivity:
///
/// ```text
/// γ̇ = γ̇₀ |Δτ/g|^(1/m) sign(Δτ)
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum ParamSlipModel {
    /// Armstrong-Frederick model with a single hardness shared by all slip systems
    SingleHardness {
        /// Reference deformation rate γ̇₀
        gammadot0: f64,

        /// Rate dependence (0 < m ≤ 1)
        m: f64,

        /// Direct hardening coefficient
        hh: f64,

        /// Dynamic hardening (recovery) coefficient
        hd: f64,
    },

    /// Armstrong-Frederick model with one hardness per slip system and zero backstress
    ZeroBackstress {
        /// Reference deformation rate γ̇₀
        gammadot0: f64,

        /// Rate dependence (0 < m ≤ 1)
        m: f64,

        /// Direct hardening coefficient
        hh: f64,

        /// Dynamic hardening (recovery) coefficient
        hd: f64,

        /// Latent hardening ratio
        q12: f64,
    },

    /// Armstrong-Frederick model with hardness and backstress per slip system
    ///
    /// Reference: Bandyopadhyay, Prithivirajan and Sangid (2019) Uncertainty quantification in the
    /// mechanical response of crystal plasticity simulations, JOM 71(8):2612-2624
    ArmstrongFrederick {
        /// Reference deformation rate γ̇₀
        gammadot0: f64,

        /// Rate dependence (0 < m ≤ 1)
        m: f64,

        /// Direct hardening coefficient
        hh: f64,

        /// Dynamic hardening (recovery) coefficient
        hd: f64,

        /// Direct backstress coefficient
        aa: f64,

        /// Dynamic backstress coefficient
        ad: f64,

        /// Latent hardening ratio
        q12: f64,
    },
}

/// Holds the parameters of a slip model and the optional cap on the slip rates
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct ParamSlip {
    /// Slip model
    pub model: ParamSlipModel,

    /// Maximum allowed slip rate (caps |Δτ/g| at (γ̇max/γ̇₀)^m)
    #[serde(default)]
    pub gammadot_max: Option<f64>,
}

impl ParamSlipModel {
    /// Returns the reference deformation rate and the rate dependence (γ̇₀, m)
    pub fn rate_params(&self) -> (f64, f64) {
        match *self {
            ParamSlipModel::SingleHardness { gammadot0, m, .. } => (gammadot0, m),
            ParamSlipModel::ZeroBackstress { gammadot0, m, .. } => (gammadot0, m),
            ParamSlipModel::ArmstrongFrederick { gammadot0, m, .. } => (gammadot0, m),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
