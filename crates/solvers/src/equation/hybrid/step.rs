use nalgebra::{DMatrix, DVector};

use crate::equation::linear;

/// How a trial step was chosen within the trust region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepKind {
    /// The full Newton step fit inside the trust region.
    Newton,

    /// A point on the segment between the Cauchy and Newton steps.
    Dogleg,

    /// The steepest-descent direction, truncated at the trust radius.
    Gradient,
}

/// A trial step and how it was chosen.
#[derive(Debug, Clone)]
pub(super) struct Step {
    pub(super) kind: StepKind,
    pub(super) delta: DVector<f64>,
}

impl Step {
    pub(super) fn norm(&self) -> f64 {
        self.delta.norm()
    }
}

/// Linearization of the residuals around the current point: `F + J·p`.
pub(super) struct LinearModel {
    jacobian: DMatrix<f64>,
    residuals: DVector<f64>,
}

impl LinearModel {
    pub(super) fn new(jacobian: DMatrix<f64>, residuals: DVector<f64>) -> Self {
        Self {
            jacobian,
            residuals,
        }
    }

    /// Solves `J·p = -F`, or `None` if `J` is singular.
    fn newton_step(&self) -> Option<DVector<f64>> {
        linear::solve(self.jacobian.clone(), &(-&self.residuals))
    }

    /// Gradient of `½‖F + J·p‖²` at `p = 0`, which is `Jᵀ·F`.
    fn gradient(&self) -> DVector<f64> {
        self.jacobian.tr_mul(&self.residuals)
    }

    /// Minimizer of the linear model along the steepest-descent direction.
    ///
    /// Returns `None` when the gradient vanishes.
    fn cauchy_step(&self, gradient: &DVector<f64>) -> Option<DVector<f64>> {
        let curvature = (&self.jacobian * gradient).norm_squared();
        if curvature <= 0.0 || !curvature.is_finite() {
            return None;
        }
        Some(gradient * (-gradient.norm_squared() / curvature))
    }

    /// Reduction of `‖F‖²` predicted by the linear model for `step`.
    pub(super) fn predicted_reduction(&self, step: &DVector<f64>) -> f64 {
        let linearized = &self.residuals + &self.jacobian * step;
        self.residuals.norm_squared() - linearized.norm_squared()
    }

    /// Ratio of actual to predicted reduction of `‖F‖²`.
    ///
    /// Non-finite trial residuals and non-positive predictions yield
    /// negative infinity so the step is always rejected.
    pub(super) fn reduction_ratio(&self, step: &DVector<f64>, trial_norm: f64) -> f64 {
        let predicted = self.predicted_reduction(step);
        if !trial_norm.is_finite() || predicted <= 0.0 || !predicted.is_finite() {
            return f64::NEG_INFINITY;
        }
        let actual = self.residuals.norm_squared() - trial_norm * trial_norm;
        actual / predicted
    }

    /// Chooses the dogleg step for a trust region of the given radius.
    ///
    /// Returns `None` when neither a Newton step nor a descent direction is
    /// available.
    pub(super) fn dogleg(&self, radius: f64) -> Option<Step> {
        let newton = self.newton_step();

        if let Some(newton) = newton.as_ref()
            && newton.norm() <= radius
        {
            return Some(Step {
                kind: StepKind::Newton,
                delta: newton.clone(),
            });
        }

        let gradient = self.gradient();
        let Some(cauchy) = self.cauchy_step(&gradient) else {
            // No descent direction; fall back to the truncated Newton step.
            return newton.map(|newton| Step {
                kind: StepKind::Newton,
                delta: &newton * (radius / newton.norm()),
            });
        };

        let cauchy_norm = cauchy.norm();
        if cauchy_norm >= radius {
            return Some(Step {
                kind: StepKind::Gradient,
                delta: cauchy * (radius / cauchy_norm),
            });
        }

        let Some(newton) = newton else {
            return Some(Step {
                kind: StepKind::Gradient,
                delta: cauchy,
            });
        };

        Some(Step {
            kind: StepKind::Dogleg,
            delta: dogleg_segment(&cauchy, &newton, radius),
        })
    }
}

/// Point where the segment from `cauchy` to `newton` crosses the radius.
///
/// Requires `‖cauchy‖ < radius < ‖newton‖`.
fn dogleg_segment(cauchy: &DVector<f64>, newton: &DVector<f64>, radius: f64) -> DVector<f64> {
    let d = newton - cauchy;
    let a = d.norm_squared();
    let b = 2.0 * cauchy.dot(&d);
    let c = cauchy.norm_squared() - radius * radius;
    let tau = (-b + (b * b - 4.0 * a * c).sqrt()) / (2.0 * a);
    cauchy + d * tau
}
