use thiserror::Error;

/// Reasons a solve can end without a solution
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolveError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Problem is unbounded: cost can be lowered without limit")]
    Unbounded,
    #[error("Problem is infeasible: no combination satisfies constraint {constraint}")]
    Infeasible { constraint: usize },
}
