use log::Level;

use crate::error::SolveError;
use crate::problem::{Problem, Variable};
use crate::solution::{Solution, SolutionStatus};
use crate::tableau::Tableau;
use crate::{EPSILON, MAX_ITERATIONS};

/// Tableau simplex solver for "at least" covering problems
#[derive(Debug, Clone)]
pub struct Solver {
    /// Maximum pivots before giving up
    max_iterations: usize,
    /// Tolerance for floating point comparisons
    tolerance: f64,
    /// Emit the tableau at `Info` level instead of `Trace`
    verbose: bool,
}

impl Default for Solver {
    fn default() -> Self {
        Self {
            max_iterations: MAX_ITERATIONS,
            tolerance: EPSILON,
            verbose: false,
        }
    }
}

/// Solve `variables` against the given minimums with default settings
pub fn solve(variables: &[Variable], minimums: &[f64], verbose: bool) -> Result<Solution, SolveError> {
    let problem = Problem::from_minimums(variables.to_vec(), minimums);
    Solver::new().with_verbose(verbose).solve(&problem)
}

/// What a single iteration of the loop did
#[derive(Debug, Clone, Copy, PartialEq)]
enum Step {
    Pivot { row: usize, col: usize },
    Optimal,
    Unbounded { col: usize },
    Infeasible { row: usize },
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_iterations(mut self, max: usize) -> Self {
        self.max_iterations = max;
        self
    }

    pub fn with_tolerance(mut self, tol: f64) -> Self {
        self.tolerance = tol;
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    fn trace_level(&self) -> Level {
        if self.verbose { Level::Info } else { Level::Trace }
    }

    /// Minimize total cost subject to every constraint's minimum
    pub fn solve(&self, problem: &Problem) -> Result<Solution, SolveError> {
        problem.validate()?;

        let mut tableau = Tableau::from_problem(problem);
        let level = self.trace_level();
        log::log!(level, "Initial tableau:\n{}", tableau);

        let mut iterations = 0;
        let status = loop {
            let step = self.next_step(&tableau);
            match step {
                Step::Optimal => {
                    log::log!(level, "Optimal solution found after {} pivots", iterations);
                    break SolutionStatus::Optimal;
                }
                Step::Unbounded { col } => {
                    log::log!(level, "Problem is unbounded along column {}", col);
                    return Err(SolveError::Unbounded);
                }
                Step::Infeasible { row } => {
                    log::log!(level, "Constraint {} cannot be satisfied", row);
                    return Err(SolveError::Infeasible { constraint: row });
                }
                Step::Pivot { .. } if iterations >= self.max_iterations => {
                    log::warn!(
                        "Stopped after {} pivots without reaching an optimum",
                        iterations
                    );
                    break SolutionStatus::IterationLimit;
                }
                Step::Pivot { row, col } => {
                    log::debug!("Iteration {}: pivot at row {}, column {}", iterations + 1, row, col);
                    tableau.pivot(row, col);
                    iterations += 1;
                    log::log!(level, "Iteration {}:\n{}", iterations, tableau);
                }
            }
        };

        Ok(self.extract_solution(&tableau, problem, status, iterations))
    }

    /// Decide the next move from the current tableau.
    ///
    /// A negative reduced cost is tried first: if nothing limits it the
    /// problem is unbounded, and if the basis is already feasible it is a
    /// primal pivot. Otherwise the most infeasible row leaves through a
    /// dual pivot.
    fn next_step(&self, tableau: &Tableau) -> Step {
        let leaving = self.find_infeasible_row(tableau);

        if let Some(col) = self.find_pivot_column(tableau) {
            match self.find_pivot_row(tableau, col) {
                None => return Step::Unbounded { col },
                Some(row) if leaving.is_none() => return Step::Pivot { row, col },
                Some(_) => {}
            }
        }

        let Some(row) = leaving else {
            return Step::Optimal;
        };
        match self.find_dual_pivot_column(tableau, row) {
            Some(col) => Step::Pivot { row, col },
            None => Step::Infeasible { row },
        }
    }

    /// Most negative reduced cost, lowest index on ties
    fn find_pivot_column(&self, tableau: &Tableau) -> Option<usize> {
        let mut min_val = -self.tolerance;
        let mut min_col = None;

        for (j, &val) in tableau.reduced_costs().iter().enumerate() {
            if val < min_val {
                min_val = val;
                min_col = Some(j);
            }
        }

        min_col
    }

    /// Minimum-ratio row for an entering column, lowest index on ties
    fn find_pivot_row(&self, tableau: &Tableau, col: usize) -> Option<usize> {
        let mut min_ratio = f64::INFINITY;
        let mut min_row = None;

        for i in 0..tableau.num_constraints() {
            let val = tableau[(i, col)];
            if val > self.tolerance {
                let ratio = tableau.rhs(i).max(0.0) / val;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    min_row = Some(i);
                }
            }
        }

        min_row
    }

    /// Constraint row with the most negative basic value
    fn find_infeasible_row(&self, tableau: &Tableau) -> Option<usize> {
        let mut min_val = -self.tolerance;
        let mut min_row = None;

        for i in 0..tableau.num_constraints() {
            let rhs = tableau.rhs(i);
            if rhs < min_val {
                min_val = rhs;
                min_row = Some(i);
            }
        }

        min_row
    }

    /// Entering column for a leaving row: smallest reduced cost per unit of
    /// negative row entry, which keeps the objective row nonnegative
    fn find_dual_pivot_column(&self, tableau: &Tableau, row: usize) -> Option<usize> {
        let obj = tableau.objective_row();
        let mut min_ratio = f64::INFINITY;
        let mut min_col = None;

        for j in 0..tableau.rhs_col() {
            let val = tableau[(row, j)];
            if val < -self.tolerance {
                let ratio = tableau[(obj, j)].max(0.0) / -val;
                if ratio < min_ratio {
                    min_ratio = ratio;
                    min_col = Some(j);
                }
            }
        }

        min_col
    }

    fn extract_solution(
        &self,
        tableau: &Tableau,
        problem: &Problem,
        status: SolutionStatus,
        iterations: usize,
    ) -> Solution {
        let n_vars = tableau.num_variables();
        let obj = tableau.objective_row();

        let mut amounts = vec![0.0; n_vars];
        let mut feasible = true;
        for (i, &basic) in tableau.basis().iter().enumerate() {
            let rhs = tableau.rhs(i);
            if rhs < -self.tolerance {
                feasible = false;
            }
            if basic < n_vars {
                // floor tiny negative noise
                amounts[basic] = rhs.max(0.0);
            }
        }

        let total_cost = problem.cost_of(&amounts);

        let shadow_prices = (0..tableau.num_constraints())
            .map(|i| tableau[(obj, tableau.slack_col(i))].abs())
            .collect();

        let reduced_costs = (0..n_vars)
            .map(|j| {
                if tableau.basis().contains(&j) {
                    0.0
                } else {
                    tableau[(obj, j)]
                }
            })
            .collect();

        Solution {
            status,
            amounts,
            total_cost,
            shadow_prices,
            reduced_costs,
            feasible,
            iterations,
        }
    }
}
