//! Runs a root-finder on the stationarity system.

use lagrange_core::Observer;
use lagrange_solvers::equation::{Solution, Status, hybrid, newton};

use crate::{
    Error,
    lagrangian::{LagrangianModel, LagrangianTerms, Point},
    problem::StationaryPointProblem,
};

/// Starting point for the default solve.
pub const INITIAL_GUESS: Point = Point {
    x: 0.0,
    y: 0.0,
    lambda: 0.0,
};

/// A solved `(x, y, λ)` with the objective value there.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StationaryPoint {
    /// Location and multiplier.
    pub point: Point,

    /// `f(x, y)` at `point`.
    pub objective: f64,

    /// Final solver status.
    pub status: Status,

    /// Iterations taken by the solver.
    pub iters: usize,

    /// Norm of the stationarity residuals at `point`.
    pub residual_norm: f64,
}

impl StationaryPoint {
    fn from_solution(solution: Solution<Point, LagrangianTerms, 3>) -> Self {
        Self {
            point: solution.snapshot.input,
            objective: solution.snapshot.output.objective,
            status: solution.status,
            iters: solution.iters,
            residual_norm: solution.residual_norm,
        }
    }

    /// Returns `self` if the solver converged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotConverged`] for any other status.
    pub fn require_converged(self) -> Result<Self, Error> {
        if self.status.is_converged() {
            Ok(self)
        } else {
            Err(Error::NotConverged {
                status: self.status,
                point: self.point,
                residual_norm: self.residual_norm,
            })
        }
    }
}

/// Solves for a stationary point with the hybrid trust-region method.
///
/// The Jacobian is approximated by forward differences, so only first
/// derivatives of `f` and `g` are used.
///
/// # Errors
///
/// Returns [`Error::Hybrid`] if the solver cannot evaluate the initial guess
/// or build a finite Jacobian.
pub fn solve<Obs>(
    initial: Point,
    config: &hybrid::Config,
    observer: Obs,
) -> Result<StationaryPoint, Error>
where
    Obs: for<'a> Observer<hybrid::Event<'a, LagrangianModel, StationaryPointProblem, 3>, hybrid::Action>,
{
    let solution = hybrid::solve(
        &LagrangianModel,
        &StationaryPointProblem,
        initial.into(),
        config,
        observer,
    )?;

    Ok(StationaryPoint::from_solution(solution))
}

/// Solves from [`INITIAL_GUESS`] with the default hybrid config.
///
/// # Errors
///
/// See [`solve`].
pub fn solve_default() -> Result<StationaryPoint, Error> {
    solve(INITIAL_GUESS, &hybrid::Config::default(), ())
}

/// Solves for a stationary point with Newton's method and the analytic
/// Jacobian of the stationarity system.
///
/// # Errors
///
/// Returns [`Error::Newton`] if the Jacobian is singular or a residual
/// becomes non-finite.
pub fn solve_newton(initial: Point, config: &newton::Config) -> Result<StationaryPoint, Error> {
    let solution = newton::solve_unobserved(
        &LagrangianModel,
        &StationaryPointProblem,
        initial.into(),
        config,
    )?;

    Ok(StationaryPoint::from_solution(solution))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::functions;

    #[test]
    fn default_solve_satisfies_constraint() {
        let solved = solve_default().unwrap();

        assert_eq!(solved.status, Status::Converged);
        let Point { x, y, .. } = solved.point;
        assert_relative_eq!(functions::g(x, y), 0.0, epsilon = 1e-10);
        assert_eq!(solved.objective, functions::f(x, y));
    }

    #[test]
    fn observer_can_stop_the_solve() {
        let solved = solve(INITIAL_GUESS, &hybrid::Config::default(), |_: &hybrid::Event<'_, _, _, 3>| {
            Some(hybrid::Action::StopEarly)
        })
        .unwrap();

        assert_eq!(solved.status, Status::StoppedByObserver);
        assert_eq!(solved.point, INITIAL_GUESS);
        assert!(matches!(
            solved.require_converged(),
            Err(Error::NotConverged {
                status: Status::StoppedByObserver,
                ..
            })
        ));
    }

    #[test]
    fn iteration_cap_is_reported() {
        let config = hybrid::Config::default().with_max_iters(2);
        let solved = solve(INITIAL_GUESS, &config, ()).unwrap();

        assert_eq!(solved.status, Status::MaxIters);
        assert_eq!(solved.iters, 2);
        assert!(solved.require_converged().is_err());
    }

    #[test]
    fn observer_sees_every_trial() {
        let mut iters = Vec::new();
        let solved = solve(
            INITIAL_GUESS,
            &hybrid::Config::default(),
            |event: &hybrid::Event<'_, _, _, 3>| {
                iters.push(event.trial().iter);
                None
            },
        )
        .unwrap();

        assert_eq!(iters.len(), solved.iters);
        assert!(iters.windows(2).all(|w| w[1] == w[0] + 1));
    }

    #[test]
    fn newton_reaches_the_same_point() {
        let hybrid = solve_default().unwrap();
        let newton = solve_newton(INITIAL_GUESS, &newton::Config::default()).unwrap();

        assert_eq!(newton.status, Status::Converged);
        assert_relative_eq!(newton.point.x, hybrid.point.x, epsilon = 1e-10);
        assert_relative_eq!(newton.point.y, hybrid.point.y, epsilon = 1e-10);
        assert_relative_eq!(newton.point.lambda, hybrid.point.lambda, epsilon = 1e-10);
    }
}
