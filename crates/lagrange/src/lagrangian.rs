//! The Lagrangian model: everything needed to form the stationarity system at
//! a point.

use std::convert::Infallible;

use lagrange_core::Model;

use crate::functions;

/// A candidate stationary point `(x, y, λ)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub lambda: f64,
}

impl Point {
    /// Creates a point from its coordinates and multiplier.
    #[must_use]
    pub fn new(x: f64, y: f64, lambda: f64) -> Self {
        Self { x, y, lambda }
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, lambda]: [f64; 3]) -> Self {
        Self { x, y, lambda }
    }
}

impl From<Point> for [f64; 3] {
    fn from(point: Point) -> Self {
        [point.x, point.y, point.lambda]
    }
}

/// Objective and constraint terms evaluated at `(x, y)`.
///
/// Gradients are ordered `[∂/∂x, ∂/∂y]`; Hessians are symmetric and indexed
/// the same way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LagrangianTerms {
    pub objective: f64,
    pub constraint: f64,
    pub grad_objective: [f64; 2],
    pub grad_constraint: [f64; 2],
    pub hess_objective: [[f64; 2]; 2],
    pub hess_constraint: [[f64; 2]; 2],
}

/// Evaluates [`LagrangianTerms`] at a [`Point`].
///
/// The multiplier does not enter the terms; it is combined with them by
/// [`StationaryPointProblem`](crate::StationaryPointProblem).
#[derive(Debug, Clone, Copy, Default)]
pub struct LagrangianModel;

impl Model for LagrangianModel {
    type Input = Point;
    type Output = LagrangianTerms;
    type Error = Infallible;

    fn call(&self, input: &Point) -> Result<LagrangianTerms, Infallible> {
        let Point { x, y, .. } = *input;
        let fxy = functions::d2fdxdy(x, y);

        Ok(LagrangianTerms {
            objective: functions::f(x, y),
            constraint: functions::g(x, y),
            grad_objective: [functions::dfdx(x, y), functions::dfdy(x, y)],
            grad_constraint: [functions::dgdx(x, y), functions::dgdy(x, y)],
            hess_objective: [[functions::d2fdx2(x, y), fxy], [fxy, functions::d2fdy2(x, y)]],
            hess_constraint: [[0.0, 0.0], [0.0, functions::d2gdy2(x, y)]],
        })
    }
}
