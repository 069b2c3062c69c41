use thiserror::Error;

/// Configuration for the hybrid solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    residual_tol: f64,
    x_abs_tol: f64,
    x_rel_tol: f64,
    radius_factor: f64,
}

/// Errors that can occur when validating a hybrid solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("residual_tol must be finite and non-negative")]
    ResidualTol,

    #[error("x_abs_tol must be finite and non-negative")]
    XAbs,

    #[error("x_rel_tol must be finite and non-negative")]
    XRel,

    #[error("radius_factor must be finite and positive")]
    RadiusFactor,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(100, 1e-12, 1e-12, 1e-12, 100.0).unwrap()
    }
}

impl Config {
    /// Creates a new config with validated tolerances.
    ///
    /// The initial trust radius is `radius_factor` times the norm of the
    /// initial guess, or `radius_factor` itself when the guess is zero.
    ///
    /// # Errors
    ///
    /// Returns an error if any tolerance is negative or non-finite, or if
    /// `radius_factor` is not finite and positive.
    pub fn new(
        max_iters: usize,
        residual_tol: f64,
        x_abs_tol: f64,
        x_rel_tol: f64,
        radius_factor: f64,
    ) -> Result<Self, ConfigError> {
        if !residual_tol.is_finite() || residual_tol < 0.0 {
            return Err(ConfigError::ResidualTol);
        }
        if !x_abs_tol.is_finite() || x_abs_tol < 0.0 {
            return Err(ConfigError::XAbs);
        }
        if !x_rel_tol.is_finite() || x_rel_tol < 0.0 {
            return Err(ConfigError::XRel);
        }
        if !radius_factor.is_finite() || radius_factor <= 0.0 {
            return Err(ConfigError::RadiusFactor);
        }

        Ok(Self {
            max_iters,
            residual_tol,
            x_abs_tol,
            x_rel_tol,
            radius_factor,
        })
    }

    /// Returns a copy of this config with a different iteration limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns the maximum number of trial steps.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the residual norm below which the solver has converged.
    #[must_use]
    pub fn residual_tol(&self) -> f64 {
        self.residual_tol
    }

    /// Returns the absolute tolerance for step convergence.
    #[must_use]
    pub fn x_abs_tol(&self) -> f64 {
        self.x_abs_tol
    }

    /// Returns the relative tolerance for step convergence.
    #[must_use]
    pub fn x_rel_tol(&self) -> f64 {
        self.x_rel_tol
    }

    /// Returns the initial trust radius scale.
    #[must_use]
    pub fn radius_factor(&self) -> f64 {
        self.radius_factor
    }

    /// Returns the step length below which `x` is considered converged.
    pub(super) fn step_tol(&self, x_norm: f64) -> f64 {
        self.x_abs_tol + self.x_rel_tol * x_norm
    }
}
