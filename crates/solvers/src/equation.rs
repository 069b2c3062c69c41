//! Solvers for equation problems — finding roots of systems of equations.
//!
//! An [`EquationProblem`] maps solver variables `x: [f64; N]` to model inputs,
//! calls the model, and computes residuals. Solvers in this module drive those
//! residuals toward zero.
//!
//! # Solvers
//!
//! - [`hybrid`] — Powell's hybrid (dogleg trust-region) method with a
//!   finite-difference Jacobian; the general-purpose default
//! - [`newton`] — plain Newton iteration using an analytic Jacobian supplied
//!   by a [`JacobianProblem`]
//!
//! [`EquationProblem`]: lagrange_core::EquationProblem
//! [`JacobianProblem`]: lagrange_core::JacobianProblem

mod evaluate;
mod linear;
mod solution;

pub use evaluate::{EvalError, EvaluateResult, Evaluation, evaluate};
pub use solution::{Solution, Status};

pub mod hybrid;
pub mod newton;
