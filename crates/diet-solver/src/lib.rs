mod error;
mod problem;
mod sensitivity;
mod simplex;
mod solution;
mod tableau;

pub use error::SolveError;
pub use problem::{Constraint, Problem, Variable};
pub use sensitivity::{PriceChange, PriceSensitivity, price_sweep};
pub use simplex::{Solver, solve};
pub use solution::{ConstraintViolation, Solution, SolutionStatus};

/// Default tolerance for pivot and basis comparisons
pub const EPSILON: f64 = 1e-6;

/// Default pivot ceiling for one solve
pub const MAX_ITERATIONS: usize = 100;
