use crate::{Mat3, StrError};

/// Splits a flat buffer into an array of N-vectors
///
/// # Errors
///
/// Returns an error if the length of `flat` is not a multiple of `N`.
///
/// # Examples
///
/// ```
/// use polyxtal::tensor::parts_from_flat;
/// let skew = parts_from_flat::<3>(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
/// assert_eq!(skew, vec![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
/// ```
pub fn parts_from_flat<const N: usize>(flat: &[f64]) -> Result<Vec<[f64; N]>, StrError> {
    if N == 0 || flat.len() % N != 0 {
        return Err("the length of the flat buffer must be a multiple of the part width");
    }
    Ok(flat
        .chunks_exact(N)
        .map(|chunk| {
            let mut part = [0.0; N];
            part.copy_from_slice(chunk);
            part
        })
        .collect())
}

/// Splits a flat buffer into an array of 3×3 matrices (9 values per matrix, row-major)
pub fn matrices_from_flat(flat: &[f64]) -> Result<Vec<Mat3>, StrError> {
    if flat.len() % 9 != 0 {
        return Err("the length of the flat buffer must be a multiple of 9");
    }
    Ok(flat
        .chunks_exact(9)
        .map(|c| [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]])
        .collect())
}

/// Flattens an array of N-vectors
pub fn flat_from_parts<const N: usize>(parts: &[[f64; N]]) -> Vec<f64> {
    parts.iter().flat_map(|p| p.iter().copied()).collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
