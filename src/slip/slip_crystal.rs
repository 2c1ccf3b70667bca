use super::{SlipGroup, SlipModel};
use crate::tensor::{mat3_from_tensor, mat3_to_tensor, symmdev};
use crate::{Mat3, StrError};
use russell_lab::Matrix;
use russell_tensor::{Mandel, Tensor2};

/// Selects the quantities computed by [SlipCrystal::get]
#[derive(Clone, Copy, Debug, Default)]
pub struct SlipRequest {
    pub resolved_shear_stress: bool,
    pub gamma_dots: bool,
    pub velocity_gradient: bool,
    pub state_derivative: bool,
}

/// Holds the quantities computed by [SlipCrystal::get]; unrequested ones are None
#[derive(Debug, Default)]
pub struct SlipData {
    /// Resolved shear stresses (npts, n_slip)
    pub resolved_shear_stress: Option<Matrix>,

    /// Slip rates (npts, n_slip)
    pub gamma_dots: Option<Matrix>,

    /// Plastic velocity gradients (npts)
    pub velocity_gradient: Option<Vec<Mat3>>,

    /// Rates of the state variables (npts, n_state_vars)
    pub state_derivative: Option<Matrix>,
}

/// Implements a crystal deforming by slip
pub struct SlipCrystal {
    schmid: Vec<Mat3>,
    schmid_tensors: Vec<Tensor2>,
    schmid_symmdev: Vec<[f64; 5]>,
    model: SlipModel,
}

impl SlipCrystal {
    /// Allocates a new instance
    ///
    /// The Schmid tensors of all groups are stacked in the given order.
    pub fn new(groups: &[SlipGroup], model: SlipModel) -> Result<Self, StrError> {
        let schmid: Vec<Mat3> = groups.iter().flat_map(|g| g.schmid().iter().copied()).collect();
        let schmid_tensors = schmid.iter().map(mat3_to_tensor).collect::<Result<Vec<_>, _>>()?;
        let schmid_symmdev = schmid.iter().map(symmdev).collect();
        Ok(SlipCrystal {
            schmid,
            schmid_tensors,
            schmid_symmdev,
            model,
        })
    }

    /// Returns the Schmid tensors
    pub fn schmid(&self) -> &[Mat3] {
        &self.schmid
    }

    /// Returns the symmetric deviatoric parts of the Schmid tensors
    pub fn schmid_symmdev(&self) -> &[[f64; 5]] {
        &self.schmid_symmdev
    }

    /// Returns the number of slip systems
    pub fn n_slip(&self) -> usize {
        self.schmid.len()
    }

    /// Returns the number of state variables per material point
    pub fn n_state_vars(&self) -> usize {
        self.model.actual.n_state_vars(self.n_slip())
    }

    /// Computes the resolved shear stresses (npts, n_slip)
    ///
    /// # Input
    ///
    /// * `stress` -- stress tensors in the same frame as the Schmid tensors
    pub fn resolved_shear_stress(&self, stress: &[Mat3]) -> Matrix {
        let mut rss = Matrix::new(stress.len(), self.n_slip());
        for (p, sig) in stress.iter().enumerate() {
            let s = symmdev(sig);
            for (a, t) in self.schmid_symmdev.iter().enumerate() {
                rss.set(p, a, s[0] * t[0] + s[1] * t[1] + s[2] * t[2] + s[3] * t[3] + s[4] * t[4]);
            }
        }
        rss
    }

    /// Computes the plastic velocity gradients `Lp = Σ γ̇ᵅ Pᵅ`
    ///
    /// # Input
    ///
    /// * `gamma_dots` -- slip rates (npts, n_slip)
    pub fn velocity_gradient(&self, gamma_dots: &Matrix) -> Result<Vec<Mat3>, StrError> {
        let (npts, n_slip) = gamma_dots.dims();
        if n_slip != self.n_slip() {
            return Err("gamma dots must have one column per slip system");
        }
        let mut lp = Tensor2::new(Mandel::General);
        let mut res = Vec::with_capacity(npts);
        for p in 0..npts {
            lp.clear();
            for (a, pp) in self.schmid_tensors.iter().enumerate() {
                lp.update(gamma_dots.get(p, a), pp);
            }
            res.push(mat3_from_tensor(&lp));
        }
        Ok(res)
    }

    /// Computes the requested slip quantities
    ///
    /// # Input
    ///
    /// * `stress` -- stress tensors (npts) in the crystal frame
    /// * `state` -- state variables (npts, n_state_vars)
    /// * `request` -- the quantities to compute
    pub fn get(&self, stress: &[Mat3], state: &Matrix, request: SlipRequest) -> Result<SlipData, StrError> {
        if state.dims() != (stress.len(), self.n_state_vars()) {
            return Err("state must have shape (npts, n_state_vars)");
        }
        let mut data = SlipData::default();
        let rss = self.resolved_shear_stress(stress);
        if request.gamma_dots || request.velocity_gradient || request.state_derivative {
            let gdots = self.model.actual.gamma_dots(state, &rss)?;
            if request.velocity_gradient {
                data.velocity_gradient = Some(self.velocity_gradient(&gdots)?);
            }
            if request.state_derivative {
                data.state_derivative = Some(self.model.actual.state_derivative(state, &gdots)?);
            }
            if request.gamma_dots {
                data.gamma_dots = Some(gdots);
            }
        }
        if request.resolved_shear_stress {
            data.resolved_shear_stress = Some(rss);
        }
        Ok(data)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
