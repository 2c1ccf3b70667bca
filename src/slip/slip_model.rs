use super::{ArmstrongFrederick, SingleHardness, ZeroBackstress};
use crate::base::{ParamSlip, ParamSlipModel};
use crate::StrError;
use russell_lab::Matrix;

/// Specifies the essential functions for slip (hardening) models
///
/// Arrays are stored with one row per material point:
///
/// * `state` -- (npts, n_state_vars)
/// * `rss` and `gamma_dots` -- (npts, n_slip)
pub trait SlipModelTrait: Send {
    /// Returns the number of state variables per material point
    fn n_state_vars(&self, n_slip: usize) -> usize;

    /// Computes the slip rates (gamma dots) from the state and the resolved shear stresses
    fn gamma_dots(&self, state: &Matrix, rss: &Matrix) -> Result<Matrix, StrError>;

    /// Computes the rate of the state variables
    fn state_derivative(&self, state: &Matrix, gamma_dots: &Matrix) -> Result<Matrix, StrError>;
}

/// Holds the actual slip model implementation
pub struct SlipModel {
    /// Holds the actual model implementation
    pub actual: Box<dyn SlipModelTrait>,
}

impl SlipModel {
    /// Allocates a new instance
    pub fn new(param: &ParamSlip) -> Self {
        let rate = RateLaw::new(param);
        let actual: Box<dyn SlipModelTrait> = match param.model {
            // Armstrong-Frederick model with a single hardness
            ParamSlipModel::SingleHardness { hh, hd, .. } => Box::new(SingleHardness::new(rate, hh, hd)),

            // Armstrong-Frederick model with zero backstress
            ParamSlipModel::ZeroBackstress { hh, hd, q12, .. } => Box::new(ZeroBackstress::new(rate, hh, hd, q12)),

            // Armstrong-Frederick model with hardness and backstress
            ParamSlipModel::ArmstrongFrederick { hh, hd, aa, ad, q12, .. } => {
                Box::new(ArmstrongFrederick::new(rate, hh, hd, aa, ad, q12))
            }
        };
        SlipModel { actual }
    }
}

/// Implements the power-law rate sensitivity shared by the slip models
///
/// ```text
/// γ̇ = γ̇₀ min(|Δτ/g|, (γ̇max/γ̇₀)^m)^(1/m) sign(Δτ)
/// ```
#[derive(Clone, Copy, Debug)]
pub struct RateLaw {
    /// Reference deformation rate γ̇₀
    pub gammadot0: f64,

    /// Rate dependence m
    pub m: f64,

    /// Cap on |Δτ/g| computed from the maximum slip rate
    pub ratio_max: Option<f64>,
}

impl RateLaw {
    /// Allocates a new instance
    pub fn new(param: &ParamSlip) -> Self {
        let (gammadot0, m) = param.model.rate_params();
        RateLaw {
            gammadot0,
            m,
            ratio_max: param.gammadot_max.map(|gdm| f64::powf(gdm / gammadot0, m)),
        }
    }

    /// Computes the slip rate given the effective shear stress Δτ and the hardness g
    pub fn gamma_dot(&self, dtau: f64, g: f64) -> f64 {
        let mut ratio = f64::abs(dtau / g);
        if let Some(rmax) = self.ratio_max {
            ratio = f64::min(ratio, rmax);
        }
        let sign = if dtau > 0.0 {
            1.0
        } else if dtau < 0.0 {
            -1.0
        } else {
            0.0
        };
        self.gammadot0 * f64::powf(ratio, 1.0 / self.m) * sign
    }
}

/// Returns the sum of |γ̇| of a material point
pub(crate) fn sum_abs_row(gamma_dots: &Matrix, p: usize) -> f64 {
    let (_, n_slip) = gamma_dots.dims();
    (0..n_slip).map(|a| f64::abs(gamma_dots.get(p, a))).sum()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
