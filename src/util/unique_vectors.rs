use russell_lab::Matrix;

/// Holds the results of [unique_vectors]
#[derive(Clone, Debug)]
pub struct UniqueVectors {
    /// Unique rows (sorted lexicographically by rank)
    pub unique: Matrix,

    /// Index of the first occurrence of each unique row in the input
    pub index: Vec<usize>,

    /// Indices of the unique rows that reconstruct the input
    pub inverse: Vec<usize>,
}

/// Finds the rows of a matrix that are unique within a tolerance
///
/// Each column is converted to integer ranks: sorted values that differ from the previous one
/// by more than `tol` start a new rank. Rows are then compared by their ranks.
///
/// # Examples
///
/// ```
/// use polyxtal::util::unique_vectors;
/// use russell_lab::Matrix;
///
/// let a = Matrix::from(&[[1.0, 2.0], [3.2, 1.0], [0.0, 4.0], [1.0, 2.0]]);
/// let res = unique_vectors(&a, 1e-8);
/// assert_eq!(res.unique.dims(), (3, 2));
/// assert_eq!(res.index, &[2, 0, 1]);
/// assert_eq!(res.inverse, &[1, 2, 0, 1]);
/// ```
pub fn unique_vectors(a: &Matrix, tol: f64) -> UniqueVectors {
    let (nrow, ncol) = a.dims();
    let ranks = to_ranks(a, tol);

    // sort rows lexicographically by rank (stable: the first occurrence comes first)
    let mut order: Vec<usize> = (0..nrow).collect();
    order.sort_by(|&i, &j| ranks[i].cmp(&ranks[j]));

    let mut index = Vec::new();
    let mut inverse = vec![0; nrow];
    for (k, &i) in order.iter().enumerate() {
        if k == 0 || ranks[i] != ranks[order[k - 1]] {
            index.push(i);
        }
        inverse[i] = index.len() - 1;
    }

    let mut unique = Matrix::new(index.len(), ncol);
    for (u, &i) in index.iter().enumerate() {
        for j in 0..ncol {
            unique.set(u, j, a.get(i, j));
        }
    }
    UniqueVectors { unique, index, inverse }
}

/// Converts the entries of each column to ranks
fn to_ranks(a: &Matrix, tol: f64) -> Vec<Vec<usize>> {
    let (nrow, ncol) = a.dims();
    let mut ranks = vec![vec![0; ncol]; nrow];
    for j in 0..ncol {
        let mut ind: Vec<usize> = (0..nrow).collect();
        ind.sort_by(|&p, &q| a.get(p, j).total_cmp(&a.get(q, j)));
        let mut rank = 0;
        for k in 1..nrow {
            if f64::abs(a.get(ind[k], j) - a.get(ind[k - 1], j)) > tol {
                rank += 1;
            }
            ranks[ind[k]][j] = rank;
        }
    }
    ranks
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::{to_ranks, unique_vectors};
    use crate::base::DEFAULT_UNIQUE_TOL;
    use russell_lab::Matrix;

    #[test]
    fn to_ranks_works() {
        let a = Matrix::from(&[[1.0, 2.0], [3.2, 1.0], [0.0, 4.0], [1.0 + 1e-10, 2.0]]);
        let ranks = to_ranks(&a, DEFAULT_UNIQUE_TOL);
        assert_eq!(ranks, &[[1, 1], [2, 0], [0, 2], [1, 1]]);
    }

    #[test]
    fn unique_vectors_works() {
        let a = Matrix::from(&[[1.0, 2.0], [3.2, 1.0], [0.0, 4.0], [1.0, 2.0]]);
        let res = unique_vectors(&a, DEFAULT_UNIQUE_TOL);
        let correct = [[0.0, 4.0], [1.0, 2.0], [3.2, 1.0]];
        assert_eq!(res.unique.dims(), (3, 2));
        for i in 0..3 {
            for j in 0..2 {
                assert_eq!(res.unique.get(i, j), correct[i][j]);
            }
        }
        assert_eq!(res.index, &[2, 0, 1]);
        assert_eq!(res.inverse, &[1, 2, 0, 1]);
        for (i, &k) in res.inverse.iter().enumerate() {
            assert_eq!(a.get(i, 0), res.unique.get(k, 0));
            assert_eq!(a.get(i, 1), res.unique.get(k, 1));
        }
    }

    #[test]
    fn unique_vectors_handles_tolerance() {
        let a = Matrix::from(&[[1.0, 1.0, 1.0], [1.0 + 1e-9, 1.0, 1.0 - 1e-9], [1.0, 1.1, 1.0]]);
        let res = unique_vectors(&a, DEFAULT_UNIQUE_TOL);
        assert_eq!(res.unique.dims(), (2, 3));
        assert_eq!(res.index, &[0, 2]);
        assert_eq!(res.inverse, &[0, 0, 1]);

        let res = unique_vectors(&a, 1e-12);
        assert_eq!(res.unique.dims(), (3, 3));
    }
}
