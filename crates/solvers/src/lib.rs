//! Numerical solvers for Lagrange problems.
//!
//! Solvers are generic over a [`Model`] and a problem trait from
//! `lagrange-core`, and report progress through an [`Observer`].
//!
//! - [`equation`] — root-finding for square systems of nonlinear equations
//!
//! [`Model`]: lagrange_core::Model
//! [`Observer`]: lagrange_core::Observer

pub mod equation;
