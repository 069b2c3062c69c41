//! Constrained stationary point by the method of Lagrange multipliers.
//!
//! Finds `(x, y, λ)` where
//!
//! ```text
//! ∇f(x, y) = λ·∇g(x, y),   g(x, y) = 0
//! ```
//!
//! for `f(x, y) = -exp(x - y² + x·y)` and `g(x, y) = cosh(y) + x - 2`.
//!
//! The stationarity conditions are posed as a square [`EquationProblem`] over
//! `[x, y, λ]` and handed to a root-finder from `lagrange-solvers`:
//!
//! - [`functions`] — `f`, `g`, and their partial derivatives
//! - [`LagrangianModel`] — evaluates those terms at a [`Point`]
//! - [`StationaryPointProblem`] — turns the terms into residuals (and an
//!   analytic Jacobian)
//! - [`driver`] — runs the hybrid or Newton solver
//! - [`Report`] — prints the result with `%g`-style formatting
//!
//! [`EquationProblem`]: lagrange_core::EquationProblem

pub mod driver;
pub mod functions;

mod error;
mod lagrangian;
mod problem;
mod report;
mod settings;

pub use driver::StationaryPoint;
pub use error::Error;
pub use lagrangian::{LagrangianModel, LagrangianTerms, Point};
pub use problem::StationaryPointProblem;
pub use report::{PRECISION, Report, format_g};
pub use settings::{MAX_ITERS_VAR, Settings, TRACE_VAR};
