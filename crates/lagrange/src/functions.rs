//! Objective, constraint, and their partial derivatives.
//!
//! The problem is to find a stationary point of
//!
//! ```text
//! f(x, y) = -exp(x - y² + x·y)
//! ```
//!
//! subject to
//!
//! ```text
//! g(x, y) = cosh(y) + x - 2 = 0
//! ```
//!
//! Every function is total over the reals. `exp` overflows to `+∞` for large
//! exponents and the result propagates as IEEE-754 dictates.

/// Shared exponent `u = x - y² + x·y` of the objective.
fn exponent(x: f64, y: f64) -> f64 {
    x - y * y + x * y
}

/// Objective: `-exp(x - y² + x·y)`.
#[must_use]
pub fn f(x: f64, y: f64) -> f64 {
    -exponent(x, y).exp()
}

/// Constraint: `cosh(y) + x - 2`.
#[must_use]
pub fn g(x: f64, y: f64) -> f64 {
    y.cosh() + x - 2.0
}

/// `∂f/∂x = -exp(u)·(1 + y)`.
#[must_use]
pub fn dfdx(x: f64, y: f64) -> f64 {
    -exponent(x, y).exp() * (1.0 + y)
}

/// `∂f/∂y = exp(u)·(2y - x)`.
#[must_use]
pub fn dfdy(x: f64, y: f64) -> f64 {
    exponent(x, y).exp() * (2.0 * y - x)
}

/// `∂g/∂x = 1`.
#[must_use]
pub fn dgdx(_x: f64, _y: f64) -> f64 {
    1.0
}

/// `∂g/∂y = sinh(y)`.
#[must_use]
pub fn dgdy(_x: f64, y: f64) -> f64 {
    y.sinh()
}

/// `∂²f/∂x² = -exp(u)·(1 + y)²`.
#[must_use]
pub fn d2fdx2(x: f64, y: f64) -> f64 {
    let ux = 1.0 + y;
    -exponent(x, y).exp() * ux * ux
}

/// `∂²f/∂x∂y = -exp(u)·((1 + y)(x - 2y) + 1)`.
#[must_use]
pub fn d2fdxdy(x: f64, y: f64) -> f64 {
    let (ux, uy) = (1.0 + y, x - 2.0 * y);
    -exponent(x, y).exp() * (ux * uy + 1.0)
}

/// `∂²f/∂y² = -exp(u)·((x - 2y)² - 2)`.
#[must_use]
pub fn d2fdy2(x: f64, y: f64) -> f64 {
    let uy = x - 2.0 * y;
    -exponent(x, y).exp() * (uy * uy - 2.0)
}

/// `∂²g/∂y² = cosh(y)`.
///
/// The other second partials of `g` vanish.
#[must_use]
pub fn d2gdy2(_x: f64, y: f64) -> f64 {
    y.cosh()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const POINTS: [(f64, f64); 4] = [(0.0, 0.0), (0.5, -0.25), (-1.0, 2.0), (1.3, 0.7)];

    #[test]
    fn values_at_origin() {
        assert_eq!(f(0.0, 0.0), -1.0);
        assert_eq!(g(0.0, 0.0), -1.0);
        assert_eq!(dfdx(0.0, 0.0), -1.0);
        assert_eq!(dfdy(0.0, 0.0), 0.0);
        assert_eq!(dgdy(0.0, 0.0), 0.0);
    }

    #[test]
    fn dgdx_is_exactly_one() {
        for (x, y) in POINTS {
            assert_eq!(dgdx(x, y), 1.0);
        }
        assert_eq!(dgdx(f64::MAX, f64::NAN), 1.0);
    }

    #[test]
    fn values_at_literal_points() {
        // u = 1 - 1 + 1 = 1
        assert_relative_eq!(f(1.0, 1.0), -std::f64::consts::E);
        assert_relative_eq!(dfdx(1.0, 1.0), -2.0 * std::f64::consts::E);
        assert_relative_eq!(dfdy(1.0, 1.0), std::f64::consts::E);
        assert_relative_eq!(g(2.0, 0.0), 1.0);
        assert_relative_eq!(dgdy(0.0, 1.0), 1.0_f64.sinh());
    }

    #[test]
    fn first_partials_match_central_differences() {
        let h = 1e-6;
        for (x, y) in POINTS {
            assert_relative_eq!(
                dfdx(x, y),
                (f(x + h, y) - f(x - h, y)) / (2.0 * h),
                max_relative = 1e-6
            );
            assert_relative_eq!(
                dfdy(x, y),
                (f(x, y + h) - f(x, y - h)) / (2.0 * h),
                epsilon = 1e-8,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                dgdy(x, y),
                (g(x, y + h) - g(x, y - h)) / (2.0 * h),
                epsilon = 1e-8,
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn second_partials_match_central_differences() {
        let h = 1e-6;
        for (x, y) in POINTS {
            assert_relative_eq!(
                d2fdx2(x, y),
                (dfdx(x + h, y) - dfdx(x - h, y)) / (2.0 * h),
                epsilon = 1e-7,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                d2fdxdy(x, y),
                (dfdx(x, y + h) - dfdx(x, y - h)) / (2.0 * h),
                epsilon = 1e-7,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                d2fdy2(x, y),
                (dfdy(x, y + h) - dfdy(x, y - h)) / (2.0 * h),
                epsilon = 1e-7,
                max_relative = 1e-6
            );
            assert_relative_eq!(
                d2gdy2(x, y),
                (dgdy(x, y + h) - dgdy(x, y - h)) / (2.0 * h),
                max_relative = 1e-6
            );
        }
    }

    #[test]
    fn overflow_yields_infinity() {
        assert_eq!(f(1000.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(dfdy(1000.0, 0.0), f64::NEG_INFINITY);
        assert_eq!(g(0.0, 1000.0), f64::INFINITY);
    }
}
