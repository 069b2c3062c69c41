/// Trial steps with a reduction ratio above this are accepted.
pub(super) const ACCEPT_RATIO: f64 = 1e-4;

/// Ratios below this shrink the region.
const SHRINK_RATIO: f64 = 0.25;

/// Ratios above this allow the region to grow.
const EXPAND_RATIO: f64 = 0.75;

/// Radius of the ball within which the linear model is trusted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct TrustRegion {
    radius: f64,
}

impl TrustRegion {
    /// Creates a region scaled to the initial guess.
    pub(super) fn new(x_norm: f64, factor: f64) -> Self {
        let radius = if x_norm > 0.0 { factor * x_norm } else { factor };
        Self { radius }
    }

    pub(super) fn radius(&self) -> f64 {
        self.radius
    }

    /// Updates the radius from the reduction ratio of a step of length `step_norm`.
    pub(super) fn update(&mut self, ratio: f64, step_norm: f64) {
        if ratio < SHRINK_RATIO {
            self.radius = SHRINK_RATIO * step_norm;
        } else if ratio > EXPAND_RATIO {
            self.radius = self.radius.max(2.0 * step_norm);
        }
    }
}
