use super::{ParamSlip, ParamSlipModel};

/// Holds samples of slip-model parameters and elastic moduli
pub struct SampleParams {}

impl SampleParams {
    /// Returns sample parameters for the single-hardness model
    pub fn param_single_hardness() -> ParamSlip {
        ParamSlip {
            model: ParamSlipModel::SingleHardness {
                gammadot0: 0.1,
                m: 0.5,
                hh: std::f64::consts::PI,
                hd: 1.0,
            },
            gammadot_max: None,
        }
    }

    /// Returns sample parameters for the zero-backstress model
    pub fn param_zero_backstress() -> ParamSlip {
        ParamSlip {
            model: ParamSlipModel::ZeroBackstress {
                gammadot0: 0.1,
                m: 0.5,
                hh: std::f64::consts::PI,
                hd: 1.0,
                q12: 1.2,
            },
            gammadot_max: None,
        }
    }

    /// Returns sample parameters for the Armstrong-Frederick model with backstress
    pub fn param_armstrong_frederick() -> ParamSlip {
        ParamSlip {
            model: ParamSlipModel::ArmstrongFrederick {
                gammadot0: 0.1,
                m: 0.5,
                hh: std::f64::consts::PI,
                hd: 1.0,
                aa: 1.0,
                ad: 0.5,
                q12: 1.2,
            },
            gammadot_max: None,
        }
    }

    /// Returns the cubic moduli (c11, c12, c44) of copper in GPa (Voigt-gamma system)
    pub fn moduli_copper() -> [f64; 3] {
        [168.4, 121.4, 75.4]
    }

    /// Returns the hexagonal moduli (c11, c12, c13, c33, c44) of titanium in GPa (Voigt-gamma system)
    pub fn moduli_titanium() -> [f64; 5] {
        [162.4, 92.0, 69.0, 180.7, 46.7]
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
