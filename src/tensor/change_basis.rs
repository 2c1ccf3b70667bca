use super::mat3_rotate;
use crate::{Mat3, StrError};

/// Changes the basis of an array of matrices
///
/// Computes `R · M · Rᵀ` for each matrix, or `Rᵀ · M · R` if `transpose` is true.
///
/// A single rotation is applied to all matrices; otherwise the number of rotations must
/// equal the number of matrices.
pub fn change_basis(matrices: &[Mat3], rmats: &[Mat3], transpose: bool) -> Result<Vec<Mat3>, StrError> {
    let n = matrices.len();
    if rmats.len() != 1 && rmats.len() != n {
        return Err("the number of rotations must be one or equal to the number of matrices");
    }
    let mut res = Vec::with_capacity(n);
    for k in 0..n {
        let r = if rmats.len() == 1 { &rmats[0] } else { &rmats[k] };
        res.push(mat3_rotate(r, &matrices[k], transpose)?);
    }
    Ok(res)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
