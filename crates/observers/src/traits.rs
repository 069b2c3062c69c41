//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific event and action types, enabling
//! observers to work generically across different solvers.
//!
//! # Event traits
//!
//! - [`HasIteration`] — events tied to a solver iteration
//! - [`HasResidualNorm`] — events that carry a residual norm
//! - [`HasOutcome`] — events that can describe what happened in a few words
//!
//! # Action traits
//!
//! - [`CanStopEarly`] — actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use lagrange_core::Observer;
//! use lagrange_observers::traits::{CanStopEarly, HasResidualNorm};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//! }
//!
//! impl<E: HasResidualNorm, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.residual_norm() < self.tolerance).then(A::stop_early)
//!     }
//! }
//! ```

use lagrange_core::{EquationProblem, Model};

use lagrange_solvers::equation::{hybrid, newton};

/// An event tied to a solver iteration.
pub trait HasIteration {
    /// Returns the 1-based iteration the event belongs to.
    fn iter(&self) -> usize;
}

/// An event that carries a residual norm.
pub trait HasResidualNorm {
    /// Returns the Euclidean residual norm for this event.
    ///
    /// Returns `f64::NAN` when the event represents an error and no residual
    /// is available.
    fn residual_norm(&self) -> f64;
}

/// An event that can summarize its outcome.
pub trait HasOutcome {
    /// Returns a short, lowercase description such as `"accepted"`.
    fn outcome(&self) -> &'static str;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

// --- hybrid::Event ---

impl<M, P, const N: usize> HasIteration for hybrid::Event<'_, M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn iter(&self) -> usize {
        self.trial().iter
    }
}

impl<M, P, const N: usize> HasResidualNorm for hybrid::Event<'_, M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn residual_norm(&self) -> f64 {
        hybrid::Event::residual_norm(self)
    }
}

impl<M, P, const N: usize> HasOutcome for hybrid::Event<'_, M, P, N>
where
    M: Model,
    P: EquationProblem<N, Input = M::Input, Output = M::Output>,
{
    fn outcome(&self) -> &'static str {
        match self {
            hybrid::Event::Accepted { .. } => "accepted",
            hybrid::Event::Rejected { .. } => "rejected",
            hybrid::Event::ModelFailed { .. } => "model failed",
            hybrid::Event::ProblemFailed { .. } => "problem failed",
        }
    }
}

// --- newton::Event ---

impl<I, O, const N: usize> HasIteration for newton::Event<'_, I, O, N> {
    fn iter(&self) -> usize {
        self.iter
    }
}

impl<I, O, const N: usize> HasResidualNorm for newton::Event<'_, I, O, N> {
    fn residual_norm(&self) -> f64 {
        self.eval.residual_norm()
    }
}

impl<I, O, const N: usize> HasOutcome for newton::Event<'_, I, O, N> {
    fn outcome(&self) -> &'static str {
        "stepped"
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for hybrid::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
