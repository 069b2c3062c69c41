//! Reusable observers for Lagrange solvers.
//!
//! This crate provides [`Observer`] implementations and capability traits that
//! work across the solvers in `lagrange-solvers`.
//!
//! # Modules
//!
//! - [`traits`] — Capability traits for cross-solver observers
//!   ([`HasIteration`], [`HasResidualNorm`], [`HasOutcome`], [`CanStopEarly`])
//!
//! # Observers
//!
//! - [`TraceObserver`] — writes one line per solver event to any
//!   [`std::io::Write`]
//!
//! [`Observer`]: lagrange_core::Observer
//! [`HasIteration`]: traits::HasIteration
//! [`HasResidualNorm`]: traits::HasResidualNorm
//! [`HasOutcome`]: traits::HasOutcome
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod traits;

mod trace;

pub use trace::TraceObserver;
