use lagrange_core::{EquationProblem, Model, Observer};

use crate::equation::{EvalError, Evaluation};

use super::{Action, StepKind};

/// Describes a trial step before its outcome is known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trial {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// How the step was chosen.
    pub kind: StepKind,

    /// Euclidean length of the step.
    pub step_norm: f64,

    /// Trust radius the step was chosen for.
    pub radius: f64,

    /// Residual norm at the point the step starts from.
    pub base_norm: f64,
}

/// Events emitted by the hybrid solver, one per trial step.
///
/// Observers can return [`Action::StopEarly`] to halt with the current point,
/// or [`Action::Reject`] to discard a trial point and shrink the trust region.
pub enum Event<'a, M, P, const N: usize>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// The trial point reduced the residual norm enough to be accepted.
    Accepted {
        trial: Trial,

        /// Evaluation at the trial point.
        eval: &'a Evaluation<M::Input, M::Output, N>,

        /// Ratio of actual to predicted reduction of the squared residual norm.
        ratio: f64,
    },

    /// The trial point was evaluated but not accepted.
    ///
    /// This includes trial points with non-finite residuals, whose ratio is
    /// negative infinity.
    Rejected {
        trial: Trial,

        /// Evaluation at the trial point.
        eval: &'a Evaluation<M::Input, M::Output, N>,

        /// Ratio of actual to predicted reduction of the squared residual norm.
        ratio: f64,
    },

    /// Model evaluation failed at the trial point.
    ModelFailed {
        trial: Trial,

        /// The trial point where evaluation failed.
        x: [f64; N],

        /// The model error.
        error: &'a M::Error,
    },

    /// Problem method failed at the trial point.
    ProblemFailed {
        trial: Trial,

        /// The trial point where evaluation failed.
        x: [f64; N],

        /// The problem error.
        error: &'a P::Error,
    },
}

impl<M, P, const N: usize> Event<'_, M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    /// Returns the trial step description.
    #[must_use]
    pub fn trial(&self) -> Trial {
        match self {
            Self::Accepted { trial, .. }
            | Self::Rejected { trial, .. }
            | Self::ModelFailed { trial, .. }
            | Self::ProblemFailed { trial, .. } => *trial,
        }
    }

    /// Returns the trial point that was evaluated (or attempted).
    #[must_use]
    pub fn x(&self) -> [f64; N] {
        match self {
            Self::Accepted { eval, .. } | Self::Rejected { eval, .. } => eval.x,
            Self::ModelFailed { x, .. } | Self::ProblemFailed { x, .. } => *x,
        }
    }

    /// Returns the residual norm at the trial point.
    ///
    /// Returns `f64::NAN` when evaluation failed.
    #[must_use]
    pub fn residual_norm(&self) -> f64 {
        match self {
            Self::Accepted { eval, .. } | Self::Rejected { eval, .. } => eval.residual_norm(),
            Self::ModelFailed { .. } | Self::ProblemFailed { .. } => f64::NAN,
        }
    }

    /// Returns true if the trial point was accepted.
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }

    /// Emits a failure event and returns the observer's action.
    pub(super) fn emit_failure<Obs>(
        trial: Trial,
        x: [f64; N],
        error: &EvalError<M::Error, P::Error>,
        observer: &mut Obs,
    ) -> Option<Action>
    where
        Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
    {
        match error {
            EvalError::Model(e) => {
                let event = Event::ModelFailed { trial, x, error: e };
                observer.observe(&event)
            }
            EvalError::Problem(e) => {
                let event = Event::ProblemFailed { trial, x, error: e };
                observer.observe(&event)
            }
        }
    }
}
