//! Powell's hybrid method for square systems of nonlinear equations.
//!
//! # Algorithm
//!
//! Each iteration linearizes the residuals `F(x)` with a forward-difference
//! Jacobian `J` and picks a step inside a trust region of radius `Δ`:
//!
//! - the Newton step `-J⁻¹·F` when it fits inside the region,
//! - otherwise the dogleg point between the Cauchy (steepest-descent) step
//!   and the Newton step, truncated at `Δ`.
//!
//! The trial point is accepted when the actual reduction of `‖F‖²` is a
//! reasonable fraction of the reduction predicted by the linear model. The
//! same ratio grows or shrinks `Δ`. Trial points whose residuals are not finite
//! (for example after an overflow) are rejected like any other poor step.
//!
//! # When to Use
//!
//! The hybrid method is a good default for small dense systems:
//! - No derivatives are required from the problem
//! - Far from a root it behaves like steepest descent, near a root it
//!   converges like Newton's method
//!
//! # Limitations
//!
//! - Each iteration costs `N + 1` model evaluations
//! - Converges to a local root (or a local minimum of `‖F‖`) only
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per trial step:
//!
//! - [`Event::Accepted`] — the trial point became the current point
//! - [`Event::Rejected`] — the trial point was evaluated but not accepted
//! - [`Event::ModelFailed`] — model returned an error
//! - [`Event::ProblemFailed`] — problem returned an error (input or residuals)
//!
//! Observers can return [`Action::StopEarly`] to halt immediately, or
//! [`Action::Reject`] to discard the trial point. Without a `Reject`, model and
//! problem errors at trial points abort the solve.

mod action;
mod config;
mod error;
mod event;
mod jacobian;
mod step;
mod trust_region;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::{Event, Trial};
pub use step::StepKind;

use lagrange_core::{EquationProblem, Model, Observer};

use crate::equation::{Evaluation, Solution, Status, evaluate, evaluate::norm, linear};

use jacobian::forward_difference;
use step::{LinearModel, Step};
use trust_region::{ACCEPT_RATIO, TrustRegion};

/// Finds a root of the equation problem starting from `x0`.
///
/// The observer receives an [`Event`] for each trial step.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the initial guess cannot be evaluated or has
/// non-finite residuals, if a Jacobian cannot be built, or if the model or
/// problem fails at a trial point and the observer does not return
/// [`Action::Reject`] to recover.
pub fn solve<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let mut current = evaluate(model, problem, x0)?;
    let mut evals = 1;

    let residual_norm = current.residual_norm();
    if !residual_norm.is_finite() {
        return Err(Error::NonFiniteInitialResidual { residual_norm });
    }
    if residual_norm <= config.residual_tol() {
        return Ok(Solution::from_eval(current, Status::Converged, 0, evals));
    }

    let mut region = TrustRegion::new(norm(&x0), config.radius_factor());

    for iter in 1..=config.max_iters() {
        let jacobian = forward_difference(model, problem, &current)?;
        evals += N;
        if jacobian.iter().any(|v| !v.is_finite()) {
            return Err(Error::NonFiniteJacobian { iter });
        }

        let linear_model = LinearModel::new(jacobian, linear::vector(&current.residuals));
        let Some(step) = linear_model.dogleg(region.radius()) else {
            return Ok(Solution::from_eval(current, Status::Stalled, iter - 1, evals));
        };

        let trial = Trial {
            iter,
            kind: step.kind,
            step_norm: step.norm(),
            radius: region.radius(),
            base_norm: current.residual_norm(),
        };

        let outcome = eval_and_observe(
            model,
            problem,
            &current,
            &linear_model,
            &step,
            trial,
            &mut observer,
        )?;
        evals += 1;

        match outcome {
            TrialOutcome::StopEarly => {
                return Ok(Solution::from_eval(
                    current,
                    Status::StoppedByObserver,
                    iter,
                    evals,
                ));
            }
            TrialOutcome::Accept { eval, ratio } => {
                region.update(ratio, trial.step_norm);
                current = eval;

                let step_tol = config.step_tol(norm(&current.x));
                if current.residual_norm() <= config.residual_tol() || trial.step_norm <= step_tol
                {
                    return Ok(Solution::from_eval(current, Status::Converged, iter, evals));
                }
            }
            TrialOutcome::Reject { ratio } => {
                region.update(ratio, trial.step_norm);

                if region.radius() <= config.step_tol(norm(&current.x)) {
                    return Ok(Solution::from_eval(current, Status::Stalled, iter, evals));
                }
            }
        }
    }

    Ok(Solution::from_eval(
        current,
        Status::MaxIters,
        config.max_iters(),
        evals,
    ))
}

/// Finds a root of the equation problem without observer support.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the initial guess cannot be evaluated or has
/// non-finite residuals, or if the model or problem fails during evaluation.
pub fn solve_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}

// ============================================================================
// Eval + observe helper
// ============================================================================

enum TrialOutcome<I, O, const N: usize> {
    Accept {
        eval: Evaluation<I, O, N>,
        ratio: f64,
    },
    Reject {
        ratio: f64,
    },
    StopEarly,
}

/// Evaluate the trial point, emit an event, and handle the observer action.
fn eval_and_observe<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    current: &Evaluation<M::Input, M::Output, N>,
    linear_model: &LinearModel,
    step: &Step,
    trial: Trial,
    observer: &mut Obs,
) -> Result<TrialOutcome<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M, P, N>, Action>,
{
    let x: [f64; N] = std::array::from_fn(|i| current.x[i] + step.delta[i]);

    match evaluate(model, problem, x) {
        Ok(eval) => {
            let ratio = linear_model.reduction_ratio(&step.delta, eval.residual_norm());
            let accepted = ratio > ACCEPT_RATIO;

            let event = if accepted {
                Event::Accepted {
                    trial,
                    eval: &eval,
                    ratio,
                }
            } else {
                Event::Rejected {
                    trial,
                    eval: &eval,
                    ratio,
                }
            };

            match observer.observe(&event) {
                Some(Action::StopEarly) => Ok(TrialOutcome::StopEarly),
                Some(Action::Reject) => Ok(TrialOutcome::Reject {
                    ratio: f64::NEG_INFINITY,
                }),
                None if accepted => Ok(TrialOutcome::Accept { eval, ratio }),
                None => Ok(TrialOutcome::Reject { ratio }),
            }
        }
        Err(e) => match Event::emit_failure(trial, x, &e, observer) {
            Some(Action::StopEarly) => Ok(TrialOutcome::StopEarly),
            Some(Action::Reject) => Ok(TrialOutcome::Reject {
                ratio: f64::NEG_INFINITY,
            }),
            None => Err(e.into()),
        },
    }
}
