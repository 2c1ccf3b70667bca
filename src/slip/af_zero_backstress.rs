use super::{sum_abs_row, RateLaw, SlipModelTrait};
use crate::StrError;
use russell_lab::Matrix;

/// Implements the Armstrong-Frederick model with one hardness per slip system and zero backstress
///
/// ```text
/// γ̇ᵅ = γ̇₀ |τᵅ/gᵅ|^(1/m) sign(τᵅ)
/// ġᵅ = H (q12 S − (q12 − 1) |γ̇ᵅ|) − Hd gᵅ S    with S = Σ |γ̇ᵝ|
/// ```
pub struct ZeroBackstress {
    rate: RateLaw,
    hh: f64,
    hd: f64,
    q12: f64,
}

impl ZeroBackstress {
    /// Allocates a new instance
    pub fn new(rate: RateLaw, hh: f64, hd: f64, q12: f64) -> Self {
        ZeroBackstress { rate, hh, hd, q12 }
    }
}

impl SlipModelTrait for ZeroBackstress {
    fn n_state_vars(&self, n_slip: usize) -> usize {
        n_slip
    }

    fn gamma_dots(&self, state: &Matrix, rss: &Matrix) -> Result<Matrix, StrError> {
        let (npts, n_slip) = rss.dims();
        if state.dims() != (npts, n_slip) {
            return Err("state must have shape (npts, n_slip)");
        }
        let mut gdots = Matrix::new(npts, n_slip);
        for p in 0..npts {
            for a in 0..n_slip {
                gdots.set(p, a, self.rate.gamma_dot(rss.get(p, a), state.get(p, a)));
            }
        }
        Ok(gdots)
    }

    fn state_derivative(&self, state: &Matrix, gamma_dots: &Matrix) -> Result<Matrix, StrError> {
        let (npts, n_slip) = gamma_dots.dims();
        if state.dims() != (npts, n_slip) {
            return Err("state must have shape (npts, n_slip)");
        }
        let mut dstate = Matrix::new(npts, n_slip);
        for p in 0..npts {
            let s = sum_abs_row(gamma_dots, p);
            for a in 0..n_slip {
                let direct = self.hh * (self.q12 * s - (self.q12 - 1.0) * f64::abs(gamma_dots.get(p, a)));
                let dynamic = self.hd * state.get(p, a) * s;
                dstate.set(p, a, direct - dynamic);
            }
        }
        Ok(dstate)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
