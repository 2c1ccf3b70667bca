use super::{quats_from_rmats, quats_to_rmats};
use crate::base::DEFAULT_ANGLE_CUTOFF;
use crate::tensor::{mat3_from_tensor, mat3_to_tensor, parts_from_flat};
use crate::{Mat3, StrError};
use russell_tensor::{t2_dot_t2, Mandel, Tensor2};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Defines the parameterizations of orientations
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Deserialize, Serialize)]
pub enum OrientationConvention {
    /// Unit quaternions `[scalar, vector(3)]` (4 parameters)
    #[serde(rename = "quaternions")]
    Quaternions,

    /// Bunge-like Euler angles in degrees `[φ1, Φ, φ2]` (3 parameters)
    #[serde(rename = "euler-angles")]
    EulerAngles,

    /// Exponential map (axial vector with length equal to the angle in radians) (3 parameters)
    #[serde(rename = "exp-map")]
    ExpMap,
}

/// Increment added to the exponential-map angle to avoid a division by zero
const EXP_MAP_ANGLE_ZERO: f64 = 1e-16;

impl OrientationConvention {
    /// Returns all conventions
    pub fn all() -> [OrientationConvention; 3] {
        [
            OrientationConvention::Quaternions,
            OrientationConvention::EulerAngles,
            OrientationConvention::ExpMap,
        ]
    }

    /// Parses the name of a convention
    pub fn from_name(name: &str) -> Result<Self, StrError> {
        match name {
            "quaternions" => Ok(OrientationConvention::Quaternions),
            "euler-angles" => Ok(OrientationConvention::EulerAngles),
            "exp-map" => Ok(OrientationConvention::ExpMap),
            _ => Err("orientation convention is not recognized; choices are: quaternions, euler-angles, exp-map"),
        }
    }

    /// Returns the name of the convention
    pub fn name(&self) -> &'static str {
        match self {
            OrientationConvention::Quaternions => "quaternions",
            OrientationConvention::EulerAngles => "euler-angles",
            OrientationConvention::ExpMap => "exp-map",
        }
    }

    /// Returns the number of parameters per orientation
    pub fn n_params(&self) -> usize {
        match self {
            OrientationConvention::Quaternions => 4,
            _ => 3,
        }
    }

    /// Converts a flat array of orientation parameters to rotation matrices
    pub fn to_rmats(&self, params: &[f64]) -> Result<Vec<Mat3>, StrError> {
        match self {
            OrientationConvention::Quaternions => {
                let quats =
                    parts_from_flat::<4>(params).map_err(|_| "quaternion array has wrong shape")?;
                Ok(quats_to_rmats(&quats))
            }
            OrientationConvention::EulerAngles => {
                let angles =
                    parts_from_flat::<3>(params).map_err(|_| "euler angles array has wrong shape")?;
                Ok(angles.iter().map(euler_to_rmat).collect())
            }
            OrientationConvention::ExpMap => {
                let w = parts_from_flat::<3>(params).map_err(|_| "exponential map array has wrong shape")?;
                w.iter().map(exp_map_to_rmat).collect()
            }
        }
    }

    /// Converts rotation matrices to a flat array of orientation parameters
    ///
    /// Only available for quaternions.
    pub fn from_rmats(&self, rmats: &[Mat3]) -> Result<Vec<f64>, StrError> {
        match self {
            OrientationConvention::Quaternions => Ok(quats_from_rmats(rmats, DEFAULT_ANGLE_CUTOFF)
                .iter()
                .flat_map(|q| q.iter().copied())
                .collect()),
            _ => Err("conversion from rotation matrices is not implemented for this convention"),
        }
    }

    /// Converts orientation parameters from this convention to another one
    pub fn convert(&self, params: &[f64], to: OrientationConvention) -> Result<Vec<f64>, StrError> {
        to.from_rmats(&self.to_rmats(params)?)
    }
}

/// Converts Euler angles (degrees) to a rotation matrix
pub fn euler_to_rmat(angles: &[f64; 3]) -> Mat3 {
    let (s0, c0) = f64::sin_cos(angles[0].to_radians());
    let (s1, c1) = f64::sin_cos(angles[1].to_radians());
    let (s2, c2) = f64::sin_cos(angles[2].to_radians());
    [
        [c0 * c2 - s0 * c1 * s2, -c0 * s2 - s0 * c1 * c2, s0 * s1],
        [s0 * c2 + c0 * c1 * s2, -s0 * s2 + c0 * c1 * c2, -c0 * s1],
        [s1 * s2, s1 * c2, c1],
    ]
}

/// Converts an exponential-map vector to a rotation matrix
///
/// ```text
/// R = I + (sin a / a) W + ((1 − cos a) / a²) W²
/// ```
pub fn exp_map_to_rmat(w: &[f64; 3]) -> Result<Mat3, StrError> {
    let a = f64::sqrt(w[0] * w[0] + w[1] * w[1] + w[2] * w[2]) + EXP_MAP_ANGLE_ZERO;
    let c1 = f64::sin(a) / a;
    let c2 = (1.0 - f64::cos(a)) / (a * a);
    let ww = mat3_to_tensor(&[[0.0, -w[2], w[1]], [w[2], 0.0, -w[0]], [-w[1], w[0], 0.0]])?;
    let mut ww2 = Tensor2::new(Mandel::General);
    t2_dot_t2(&mut ww2, &ww, &ww);
    let mut rr = Tensor2::identity(Mandel::General);
    rr.update(c1, &ww);
    rr.update(c2, &ww2);
    Ok(mat3_from_tensor(&rr))
}

impl fmt::Display for OrientationConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{euler_to_rmat, exp_map_to_rmat, OrientationConvention};
    use crate::base::check_mat3;
    use crate::tensor::mat3_identity;
    use russell_lab::approx_eq;
    use std::f64::consts::PI;

    #[test]
    fn from_name_works() {
        for conv in OrientationConvention::all() {
            assert_eq!(OrientationConvention::from_name(conv.name()), Ok(conv));
            assert_eq!(format!("{}", conv), conv.name());
        }
        assert_eq!(
            OrientationConvention::from_name("rodrigues").err(),
            Some("orientation convention is not recognized; choices are: quaternions, euler-angles, exp-map")
        );
        assert_eq!(OrientationConvention::Quaternions.n_params(), 4);
        assert_eq!(OrientationConvention::ExpMap.n_params(), 3);
    }

    #[test]
    fn euler_angles_work() {
        check_mat3(&euler_to_rmat(&[0.0, 0.0, 0.0]), &mat3_identity(), 1e-15);
        let angles = [
            [90.0, 0.0, 0.0],
            [0.0, 90.0, 0.0],
            [0.0, 0.0, 90.0],
            [90.0, 90.0, 0.0],
            [90.0, 0.0, 90.0],
            [0.0, 90.0, 90.0],
            [90.0, 90.0, 90.0],
        ];
        let correct = [
            [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            [[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]],
            [[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]],
            [[0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]],
            [[-1.0, 0.0, 0.0], [0.0, -1.0, 0.0], [0.0, 0.0, 1.0]],
            [[0.0, -1.0, 0.0], [0.0, 0.0, -1.0], [1.0, 0.0, 0.0]],
            [[0.0, 0.0, 1.0], [0.0, -1.0, 0.0], [1.0, 0.0, 0.0]],
        ];
        for i in 0..angles.len() {
            check_mat3(&euler_to_rmat(&angles[i]), &correct[i], 1e-15);
        }
        let flat: Vec<f64> = angles.iter().flat_map(|a| a.iter().copied()).collect();
        let rmats = OrientationConvention::EulerAngles.to_rmats(&flat).unwrap();
        assert_eq!(rmats.len(), 7);
        assert_eq!(
            OrientationConvention::EulerAngles.to_rmats(&[1.0, 2.0]).err(),
            Some("euler angles array has wrong shape")
        );
        assert_eq!(
            OrientationConvention::EulerAngles.from_rmats(&rmats).err(),
            Some("conversion from rotation matrices is not implemented for this convention")
        );
    }

    #[test]
    fn exp_map_works() {
        check_mat3(&exp_map_to_rmat(&[0.0, 0.0, 0.0]).unwrap(), &mat3_identity(), 1e-15);
        let p2 = PI / 2.0;
        let rmats = OrientationConvention::ExpMap
            .to_rmats(&[p2, 0.0, 0.0, 0.0, p2, 0.0, 0.0, 0.0, p2])
            .unwrap();
        check_mat3(&rmats[0], &[[1.0, 0.0, 0.0], [0.0, 0.0, -1.0], [0.0, 1.0, 0.0]], 1e-12);
        check_mat3(&rmats[1], &[[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [-1.0, 0.0, 0.0]], 1e-12);
        check_mat3(&rmats[2], &[[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]], 1e-12);
        assert_eq!(
            OrientationConvention::ExpMap.to_rmats(&[1.0]).err(),
            Some("exponential map array has wrong shape")
        );
    }

    #[test]
    fn convert_works() {
        let s = f64::sqrt(0.5);
        let quats = OrientationConvention::ExpMap
            .convert(&[PI / 2.0, 0.0, 0.0], OrientationConvention::Quaternions)
            .unwrap();
        assert_eq!(quats.len(), 4);
        approx_eq(quats[0], s, 1e-12);
        approx_eq(quats[1], s, 1e-12);
        approx_eq(quats[2], 0.0, 1e-12);
        approx_eq(quats[3], 0.0, 1e-12);
        let euler = OrientationConvention::EulerAngles
            .convert(&[90.0, 0.0, 0.0], OrientationConvention::Quaternions)
            .unwrap();
        approx_eq(euler[0], s, 1e-12);
        approx_eq(euler[3], s, 1e-12);
        assert_eq!(
            OrientationConvention::Quaternions.to_rmats(&[1.0, 0.0, 0.0]).err(),
            Some("quaternion array has wrong shape")
        );
        assert_eq!(
            OrientationConvention::Quaternions
                .convert(&[1.0, 0.0, 0.0, 0.0], OrientationConvention::ExpMap)
                .err(),
            Some("conversion from rotation matrices is not implemented for this convention")
        );
    }
}
