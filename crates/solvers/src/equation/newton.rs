//! Newton's method with an analytic Jacobian.
//!
//! Each iteration solves `J(x)·p = -F(x)` using the Jacobian supplied by a
//! [`JacobianProblem`] and takes the full step `x + p`. There is no line
//! search or trust region, so convergence is only local: start close to the
//! root or use [`hybrid`](super::hybrid) instead.
//!
//! The observer receives one [`Event`] per step and may return
//! [`Action::StopEarly`].

mod config;
mod error;

pub use config::{Config, ConfigError};
pub use error::Error;

use lagrange_core::{JacobianProblem, Model, Observer};

use crate::equation::{Evaluation, Solution, Status, evaluate, evaluate::norm, linear};

/// Control actions supported by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the latest point.
    StopEarly,
}

/// Iteration event emitted by the Newton solver.
#[derive(Debug)]
pub struct Event<'a, I, O, const N: usize> {
    /// Iteration counter (1-based).
    pub iter: usize,

    /// Euclidean length of the Newton step.
    pub step_norm: f64,

    /// Evaluation at the new point.
    pub eval: &'a Evaluation<I, O, N>,
}

/// Finds a root of the equation problem using Newton's method.
///
/// # Errors
///
/// Returns an error if the Jacobian is singular, a residual is non-finite,
/// or the model or problem fails during evaluation.
pub fn solve<M, P, Obs, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: JacobianProblem<N, Input = M::Input, Output = M::Output>,
    Obs: for<'a> Observer<Event<'a, M::Input, M::Output, N>, Action>,
{
    let mut current = evaluate(model, problem, x0)?;
    let mut evals = 1;

    check_finite(&current, 0)?;
    if current.residual_norm() <= config.residual_tol() {
        return Ok(Solution::from_eval(current, Status::Converged, 0, evals));
    }

    for iter in 1..=config.max_iters() {
        let jacobian = problem
            .jacobian(&current.snapshot.input, &current.snapshot.output)
            .map_err(|e| Error::Problem(Box::new(e)))?;

        let step = linear::solve(
            linear::matrix(&jacobian),
            &(-linear::vector(&current.residuals)),
        )
        .ok_or(Error::SingularJacobian { iter })?;
        let step_norm = step.norm();

        let x: [f64; N] = linear::array(&(linear::vector(&current.x) + step));
        let next = evaluate(model, problem, x)?;
        evals += 1;
        check_finite(&next, iter)?;

        let event = Event {
            iter,
            step_norm,
            eval: &next,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution::from_eval(
                next,
                Status::StoppedByObserver,
                iter,
                evals,
            ));
        }

        current = next;

        let step_tol = config.x_abs_tol() + config.x_rel_tol() * norm(&current.x);
        if current.residual_norm() <= config.residual_tol() || step_norm <= step_tol {
            return Ok(Solution::from_eval(current, Status::Converged, iter, evals));
        }
    }

    Ok(Solution::from_eval(
        current,
        Status::MaxIters,
        config.max_iters(),
        evals,
    ))
}

/// Runs Newton's method without observation.
///
/// # Errors
///
/// Returns an error if the Jacobian is singular, a residual is non-finite,
/// or the model or problem fails during evaluation.
pub fn solve_unobserved<M, P, const N: usize>(
    model: &M,
    problem: &P,
    x0: [f64; N],
    config: &Config,
) -> Result<Solution<M::Input, M::Output, N>, Error>
where
    M: Model,
    P: JacobianProblem<N, Input = M::Input, Output = M::Output>,
{
    solve(model, problem, x0, config, ())
}

fn check_finite<I, O, const N: usize>(eval: &Evaluation<I, O, N>, iter: usize) -> Result<(), Error> {
    let residual_norm = eval.residual_norm();
    if residual_norm.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteResidual {
            iter,
            residual_norm,
        })
    }
}
