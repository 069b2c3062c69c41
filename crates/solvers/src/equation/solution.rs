use lagrange_core::Snapshot;

use super::Evaluation;

/// Indicates why an equation solver finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Converged according to the configured residual or step tolerances.
    Converged,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// The trust region collapsed below the step tolerance without finding
    /// an acceptable step.
    ///
    /// Only the [`hybrid`](super::hybrid) solver reports this status.
    Stalled,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns true if the solver met its convergence tolerances.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::Converged)
    }
}

/// The result of an equation solve.
#[derive(Debug, Clone)]
pub struct Solution<I, O, const N: usize> {
    /// Final solver status.
    pub status: Status,

    /// Best estimate of the root.
    pub x: [f64; N],

    /// Residuals at the reported root estimate.
    pub residuals: [f64; N],

    /// Euclidean norm of `residuals`.
    pub residual_norm: f64,

    /// Snapshot at the reported root estimate.
    pub snapshot: Snapshot<I, O>,

    /// Iteration count when the solver finished.
    pub iters: usize,

    /// Number of model evaluations, including those spent on Jacobians.
    pub evals: usize,
}

impl<I, O, const N: usize> Solution<I, O, N> {
    /// Constructs a solution from an evaluation result.
    pub(crate) fn from_eval(
        eval: Evaluation<I, O, N>,
        status: Status,
        iters: usize,
        evals: usize,
    ) -> Self {
        let residual_norm = eval.residual_norm();
        Self {
            status,
            x: eval.x,
            residuals: eval.residuals,
            residual_norm,
            snapshot: eval.snapshot,
            iters,
            evals,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn from_eval_copies_evaluation() {
        let eval = Evaluation {
            x: [1.0, 2.0],
            residuals: [3.0, -4.0],
            snapshot: Snapshot::new((), ()),
        };

        let solution = Solution::from_eval(eval, Status::MaxIters, 7, 30);

        assert_eq!(solution.status, Status::MaxIters);
        assert_eq!(solution.x, [1.0, 2.0]);
        assert_eq!(solution.residuals, [3.0, -4.0]);
        assert_relative_eq!(solution.residual_norm, 5.0);
        assert_eq!(solution.iters, 7);
        assert_eq!(solution.evals, 30);
    }

    #[test]
    fn only_converged_is_converged() {
        assert!(Status::Converged.is_converged());
        assert!(!Status::MaxIters.is_converged());
        assert!(!Status::Stalled.is_converged());
        assert!(!Status::StoppedByObserver.is_converged());
    }
}
