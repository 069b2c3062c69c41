/// Defines a system of equations to be solved.
///
/// An equation problem maps solver variables to a model input, then computes
/// residuals from the model input and output. Solvers search for the `x` that
/// drives every residual to zero.
///
/// The const generic `N` is both the number of solver variables and the
/// number of residuals, so the system is square.
pub trait EquationProblem<const N: usize> {
    type Input;
    type Output;
    type Error: std::error::Error + Send + Sync + 'static;

    /// Maps solver variables (`x`) into a model input.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the input cannot be constructed from `x`.
    fn input(&self, x: &[f64; N]) -> Result<Self::Input, Self::Error>;

    /// Computes residuals from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the residuals cannot be computed.
    fn residuals(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[f64; N], Self::Error>;
}

/// An equation problem that can also supply the Jacobian of its residuals.
///
/// Row `i`, column `j` of the returned matrix is the partial derivative of
/// residual `i` with respect to solver variable `j`, evaluated at the same
/// input/output pair the residuals were computed from.
pub trait JacobianProblem<const N: usize>: EquationProblem<N> {
    /// Computes the residual Jacobian from model input/output.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the Jacobian cannot be computed.
    fn jacobian(
        &self,
        input: &Self::Input,
        output: &Self::Output,
    ) -> Result<[[f64; N]; N], Self::Error>;
}
