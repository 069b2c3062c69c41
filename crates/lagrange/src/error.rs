use thiserror::Error;

use lagrange_solvers::equation::{Status, hybrid, newton};

use crate::lagrangian::Point;

/// Errors that can occur while locating the stationary point.
#[derive(Debug, Error)]
pub enum Error {
    #[error("hybrid solver failed")]
    Hybrid(#[from] hybrid::Error),

    #[error("newton solver failed")]
    Newton(#[from] newton::Error),

    #[error(
        "solver stopped without converging ({status:?}) at x = {}, y = {}, λ = {}, |F| = {residual_norm:e}",
        .point.x,
        .point.y,
        .point.lambda
    )]
    NotConverged {
        status: Status,
        point: Point,
        residual_norm: f64,
    },

    #[error("invalid value {value:?} for {name}")]
    InvalidSetting { name: &'static str, value: String },
}
