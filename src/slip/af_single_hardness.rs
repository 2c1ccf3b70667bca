use super::{sum_abs_row, RateLaw, SlipModelTrait};
use crate::StrError;
use russell_lab::Matrix;

/// Implements the Armstrong-Frederick model with a single hardness shared by all slip systems
///
/// ```text
/// γ̇ᵅ = γ̇₀ |τᵅ/g|^(1/m) sign(τᵅ)
/// ġ  = (H − Hd g) Σ |γ̇ᵅ|
/// ```
pub struct SingleHardness {
    rate: RateLaw,
    hh: f64,
    hd: f64,
}

impl SingleHardness {
    /// Allocates a new instance
    pub fn new(rate: RateLaw, hh: f64, hd: f64) -> Self {
        SingleHardness { rate, hh, hd }
    }
}

impl SlipModelTrait for SingleHardness {
    fn n_state_vars(&self, _n_slip: usize) -> usize {
        1
    }

    fn gamma_dots(&self, state: &Matrix, rss: &Matrix) -> Result<Matrix, StrError> {
        let (npts, n_slip) = rss.dims();
        if state.dims() != (npts, 1) {
            return Err("state must have shape (npts, 1)");
        }
        let mut gdots = Matrix::new(npts, n_slip);
        for p in 0..npts {
            let g = state.get(p, 0);
            for a in 0..n_slip {
                gdots.set(p, a, self.rate.gamma_dot(rss.get(p, a), g));
            }
        }
        Ok(gdots)
    }

    fn state_derivative(&self, state: &Matrix, gamma_dots: &Matrix) -> Result<Matrix, StrError> {
        let (npts, _) = gamma_dots.dims();
        if state.dims() != (npts, 1) {
            return Err("state must have shape (npts, 1)");
        }
        let mut dstate = Matrix::new(npts, 1);
        for p in 0..npts {
            let g = state.get(p, 0);
            dstate.set(p, 0, (self.hh - self.hd * g) * sum_abs_row(gamma_dots, p));
        }
        Ok(dstate)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
