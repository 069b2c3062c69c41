//! The stationarity system of the Lagrangian as an equation problem.

use std::convert::Infallible;

use lagrange_core::{EquationProblem, JacobianProblem};

use crate::lagrangian::{LagrangianTerms, Point};

/// Residuals of `∇f - λ·∇g = 0` together with `g = 0`.
///
/// Solver variables are ordered `[x, y, λ]` and the residuals are
///
/// ```text
/// r1 = ∂f/∂x - λ·∂g/∂x
/// r2 = ∂f/∂y - λ·∂g/∂y
/// r3 = -g
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StationaryPointProblem;

impl EquationProblem<3> for StationaryPointProblem {
    type Input = Point;
    type Output = LagrangianTerms;
    type Error = Infallible;

    fn input(&self, x: &[f64; 3]) -> Result<Point, Infallible> {
        Ok(Point::from(*x))
    }

    fn residuals(&self, input: &Point, output: &LagrangianTerms) -> Result<[f64; 3], Infallible> {
        let lambda = input.lambda;
        let [fx, fy] = output.grad_objective;
        let [gx, gy] = output.grad_constraint;

        Ok([fx - lambda * gx, fy - lambda * gy, -output.constraint])
    }
}

impl JacobianProblem<3> for StationaryPointProblem {
    fn jacobian(
        &self,
        input: &Point,
        output: &LagrangianTerms,
    ) -> Result<[[f64; 3]; 3], Infallible> {
        let lambda = input.lambda;
        let [[fxx, fxy], [_, fyy]] = output.hess_objective;
        let [[gxx, gxy], [_, gyy]] = output.hess_constraint;
        let [gx, gy] = output.grad_constraint;

        Ok([
            [fxx - lambda * gxx, fxy - lambda * gxy, -gx],
            [fxy - lambda * gxy, fyy - lambda * gyy, -gy],
            [-gx, -gy, 0.0],
        ])
    }
}
