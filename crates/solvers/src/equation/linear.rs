//! Dense linear algebra shared by the equation solvers.

use nalgebra::{DMatrix, DVector};

/// Builds a dense matrix from row-major nested arrays.
pub(crate) fn matrix<const N: usize>(rows: &[[f64; N]; N]) -> DMatrix<f64> {
    DMatrix::from_fn(N, N, |i, j| rows[i][j])
}

/// Builds a dense column vector from an array.
pub(crate) fn vector<const N: usize>(values: &[f64; N]) -> DVector<f64> {
    DVector::from_column_slice(values)
}

/// Copies a length-`N` vector back into an array.
pub(crate) fn array<const N: usize>(values: &DVector<f64>) -> [f64; N] {
    debug_assert_eq!(values.len(), N);
    std::array::from_fn(|i| values[i])
}

/// Solves `a · p = b` by LU decomposition with partial pivoting.
///
/// Returns `None` if `a` is singular or the solution is not finite.
pub(crate) fn solve(a: DMatrix<f64>, b: &DVector<f64>) -> Option<DVector<f64>> {
    let p = a.lu().solve(b)?;
    p.iter().all(|v| v.is_finite()).then_some(p)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn solves_well_conditioned_system() {
        let a = matrix(&[[4.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 2.0]]);
        let b = vector(&[1.0, 2.0, 3.0]);

        let p = solve(a.clone(), &b).expect("nonsingular");
        let back = a * &p;

        for i in 0..3 {
            assert_relative_eq!(back[i], b[i], epsilon = 1e-12);
        }
    }

    #[test]
    fn rejects_singular_system() {
        let a = matrix(&[[1.0, 2.0], [2.0, 4.0]]);
        let b = vector(&[1.0, 1.0]);

        assert!(solve(a, &b).is_none());
    }

    #[test]
    fn rejects_non_finite_solution() {
        let a = matrix(&[[1.0, 0.0], [0.0, 1.0]]);
        let b = vector(&[f64::NAN, 1.0]);

        assert!(solve(a, &b).is_none());
    }

    #[test]
    fn array_round_trips_vector() {
        let v = vector(&[1.0, -2.0, 3.5]);
        assert_eq!(array::<3>(&v), [1.0, -2.0, 3.5]);
    }
}
