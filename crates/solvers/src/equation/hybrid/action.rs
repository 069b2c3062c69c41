/// Actions an observer can take during hybrid solving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver early and return the best point accepted so far.
    StopEarly,

    /// Reject this trial point and shrink the trust region.
    ///
    /// A successful evaluation rejected this way is not accepted even if it
    /// reduced the residual norm.
    ///
    /// Use this for:
    /// - Recovering from model or problem errors at a trial point, which
    ///   otherwise abort the solve.
    /// - Steering the solver away from a region even when evaluation succeeded.
    Reject,
}
