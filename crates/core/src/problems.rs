pub mod equation;

pub use equation::{EquationProblem, JacobianProblem};
