use super::{sum_abs_row, RateLaw, SlipModelTrait};
use crate::StrError;
use russell_lab::Matrix;

/// Implements the Armstrong-Frederick model with hardness and backstress per slip system
///
/// The state of each point is `[g¹ … gⁿ, χ¹ … χⁿ]` (all hardnesses before all backstresses).
///
/// ```text
/// γ̇ᵅ = γ̇₀ |(τᵅ − χᵅ)/gᵅ|^(1/m) sign(τᵅ − χᵅ)
/// ġᵅ = H (q12 S − (q12 − 1) |γ̇ᵅ|) − Hd gᵅ S    with S = Σ |γ̇ᵝ|
/// χ̇ᵅ = A γ̇ᵅ − Ad χᵅ |γ̇ᵅ|
/// ```
pub struct ArmstrongFrederick {
    rate: RateLaw,
    hh: f64,
    hd: f64,
    aa: f64,
    ad: f64,
    q12: f64,
}

impl ArmstrongFrederick {
    /// Allocates a new instance
    pub fn new(rate: RateLaw, hh: f64, hd: f64, aa: f64, ad: f64, q12: f64) -> Self {
        ArmstrongFrederick {
            rate,
            hh,
            hd,
            aa,
            ad,
            q12,
        }
    }
}

impl SlipModelTrait for ArmstrongFrederick {
    fn n_state_vars(&self, n_slip: usize) -> usize {
        2 * n_slip
    }

    fn gamma_dots(&self, state: &Matrix, rss: &Matrix) -> Result<Matrix, StrError> {
        let (npts, n_slip) = rss.dims();
        if state.dims() != (npts, 2 * n_slip) {
            return Err("state must have shape (npts, 2 n_slip)");
        }
        let mut gdots = Matrix::new(npts, n_slip);
        for p in 0..npts {
            for a in 0..n_slip {
                let g = state.get(p, a);
                let chi = state.get(p, n_slip + a);
                gdots.set(p, a, self.rate.gamma_dot(rss.get(p, a) - chi, g));
            }
        }
        Ok(gdots)
    }

    fn state_derivative(&self, state: &Matrix, gamma_dots: &Matrix) -> Result<Matrix, StrError> {
        let (npts, n_slip) = gamma_dots.dims();
        if state.dims() != (npts, 2 * n_slip) {
            return Err("state must have shape (npts, 2 n_slip)");
        }
        let mut dstate = Matrix::new(npts, 2 * n_slip);
        for p in 0..npts {
            let s = sum_abs_row(gamma_dots, p);
            for a in 0..n_slip {
                let gdot = gamma_dots.get(p, a);
                let g = state.get(p, a);
                let chi = state.get(p, n_slip + a);
                let dg = self.hh * (self.q12 * s - (self.q12 - 1.0) * f64::abs(gdot)) - self.hd * g * s;
                let dchi = self.aa * gdot - self.ad * chi * f64::abs(gdot);
                dstate.set(p, a, dg);
                dstate.set(p, n_slip + a, dchi);
            }
        }
        Ok(dstate)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
