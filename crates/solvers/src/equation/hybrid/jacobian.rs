use nalgebra::DMatrix;

use lagrange_core::{EquationProblem, Model};

use crate::equation::{EvalError, Evaluation, evaluate};

/// Approximates the residual Jacobian at `base` by forward differences.
///
/// Column `j` perturbs `x[j]` by `sqrt(ε)·max(|x[j]|, 1)`.
pub(super) fn forward_difference<M, P, const N: usize>(
    model: &M,
    problem: &P,
    base: &Evaluation<M::Input, M::Output, N>,
) -> Result<DMatrix<f64>, EvalError<M::Error, P::Error>>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    let scale = f64::EPSILON.sqrt();
    let mut jacobian = DMatrix::zeros(N, N);

    for j in 0..N {
        let mut x = base.x;
        let h = scale * x[j].abs().max(1.0);
        x[j] += h;
        // Use the step actually taken after rounding.
        let h = x[j] - base.x[j];

        let perturbed = evaluate(model, problem, x)?;
        for i in 0..N {
            jacobian[(i, j)] = (perturbed.residuals[i] - base.residuals[i]) / h;
        }
    }

    Ok(jacobian)
}
