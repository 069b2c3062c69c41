//! Human-readable output of a stationary point.

use std::fmt;

use crate::driver::StationaryPoint;

/// Significant digits printed for each quantity.
pub const PRECISION: usize = 6;

/// Formats `value` like C's `%.<precision>g`.
///
/// The value is rounded to `precision` significant digits (at least one).
/// Fixed notation is used when the decimal exponent `X` of the rounded value
/// satisfies `-4 <= X < precision`, scientific notation otherwise. Trailing
/// zeros and a dangling decimal point are removed, and exponents carry a sign
/// and at least two digits.
///
/// ```
/// use lagrange::format_g;
///
/// assert_eq!(format_g(0.000_012_5, 6), "1.25e-05");
/// assert_eq!(format_g(-4.077_888_9, 6), "-4.07789");
/// assert_eq!(format_g(f64::NEG_INFINITY, 6), "-inf");
/// ```
#[must_use]
pub fn format_g(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_owned();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_owned();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific
        .split_once('e')
        .and_then(|(m, e)| Some((m, e.parse::<i32>().ok()?)))
    else {
        return scientific;
    };

    let digits = i32::try_from(precision).unwrap_or(i32::MAX);
    if (-4..digits).contains(&exponent) {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{value:.decimals$}")).to_owned()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{sign}{:02}", trim_fraction(mantissa), exponent.abs())
    }
}

/// Strips trailing zeros after a decimal point, then the point itself.
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// The four printed lines for a [`StationaryPoint`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    pub x: f64,
    pub y: f64,
    pub lambda: f64,
    pub objective: f64,
}

impl From<&StationaryPoint> for Report {
    fn from(solved: &StationaryPoint) -> Self {
        Self {
            x: solved.point.x,
            y: solved.point.y,
            lambda: solved.point.lambda,
            objective: solved.objective,
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "x = {}", format_g(self.x, PRECISION))?;
        writeln!(f, "y = {}", format_g(self.y, PRECISION))?;
        writeln!(f, "λ = {}", format_g(self.lambda, PRECISION))?;
        writeln!(f, "f(x, y) = {}", format_g(self.objective, PRECISION))
    }
}
