use std::fmt;
use std::ops::{Index, IndexMut};

use crate::problem::Problem;

/// Working state of one solve: a dense row-major grid with one row per
/// constraint plus the objective row, and one column per variable, per
/// slack, plus the right-hand side.
#[derive(Debug, Clone)]
pub(crate) struct Tableau {
    data: Vec<f64>,
    rows: usize,
    cols: usize,
    n_vars: usize,
    /// Column of the basic variable for each constraint row
    basis: Vec<usize>,
}

impl Tableau {
    /// Seed the tableau from a validated problem.
    ///
    /// Each "at least" row is stored negated, `-a.x + s = -b`, with the
    /// surplus `s` basic. Its value starts at `-b`, so the start is primal
    /// infeasible but the objective row (the costs) is dual feasible.
    pub(crate) fn from_problem(problem: &Problem) -> Self {
        let n_vars = problem.num_variables();
        let n_constraints = problem.num_constraints();
        let rows = n_constraints + 1;
        let cols = n_vars + n_constraints + 1;

        let mut tableau = Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
            n_vars,
            basis: Vec::with_capacity(n_constraints),
        };

        for (i, constraint) in problem.constraints.iter().enumerate() {
            for (j, variable) in problem.variables.iter().enumerate() {
                tableau[(i, j)] = -variable.contributions[i];
            }
            tableau[(i, n_vars + i)] = 1.0;
            tableau[(i, cols - 1)] = -constraint.minimum;
            tableau.basis.push(n_vars + i);
        }

        let obj = tableau.objective_row();
        for (j, variable) in problem.variables.iter().enumerate() {
            tableau[(obj, j)] = variable.cost;
        }

        tableau
    }

    pub(crate) fn rows(&self) -> usize {
        self.rows
    }

    pub(crate) fn cols(&self) -> usize {
        self.cols
    }

    pub(crate) fn num_constraints(&self) -> usize {
        self.rows - 1
    }

    pub(crate) fn num_variables(&self) -> usize {
        self.n_vars
    }

    pub(crate) fn objective_row(&self) -> usize {
        self.rows - 1
    }

    pub(crate) fn rhs_col(&self) -> usize {
        self.cols - 1
    }

    pub(crate) fn slack_col(&self, constraint: usize) -> usize {
        self.n_vars + constraint
    }

    pub(crate) fn rhs(&self, row: usize) -> f64 {
        self[(row, self.rhs_col())]
    }

    pub(crate) fn basis(&self) -> &[usize] {
        &self.basis
    }

    pub(crate) fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.cols..(row + 1) * self.cols]
    }

    /// Objective-row entries excluding the right-hand side
    pub(crate) fn reduced_costs(&self) -> &[f64] {
        let obj = self.row(self.objective_row());
        &obj[..self.cols() - 1]
    }

    /// Gauss-Jordan step on (`row`, `col`): scale the pivot row to a unit
    /// entry, eliminate the column from every other row, and record `col`
    /// as the row's basic variable.
    pub(crate) fn pivot(&mut self, row: usize, col: usize) {
        let cols = self.cols;

        let pivot_val = self[(row, col)];
        let pivot_row = &mut self.data[row * cols..(row + 1) * cols];
        for x in pivot_row.iter_mut() {
            *x /= pivot_val;
        }
        let pivot_row = pivot_row.to_vec();

        for (i, current) in self.data.chunks_exact_mut(cols).enumerate() {
            if i == row {
                continue;
            }
            let factor = current[col];
            if factor == 0.0 {
                continue;
            }
            for (x, p) in current.iter_mut().zip(&pivot_row) {
                *x -= factor * p;
            }
        }

        self.basis[row] = col;
    }
}

impl Index<(usize, usize)> for Tableau {
    type Output = f64;

    fn index(&self, (row, col): (usize, usize)) -> &f64 {
        &self.data[row * self.cols + col]
    }
}

impl IndexMut<(usize, usize)> for Tableau {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut f64 {
        &mut self.data[row * self.cols + col]
    }
}

impl fmt::Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Simplex Tableau ===")?;
        for i in 0..self.rows() {
            for x in self.row(i) {
                write!(f, "{:8.3} ", x)?;
            }
            if i < self.num_constraints() {
                write!(f, "| basis: {}", self.basis[i])?;
            }
            writeln!(f)?;
        }
        write!(f, "=======================")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Problem {
        let mut problem = Problem::new();
        problem.add_constraint("protein", 4.0);
        problem.add_constraint("fiber", 1.0);
        problem.add_variable("a", 1.0, vec![2.0, 0.5]);
        problem.add_variable("b", 3.0, vec![1.0, 0.0]);
        problem
    }

    #[test]
    fn test_construction_layout() {
        let t = Tableau::from_problem(&sample());

        assert_eq!(t.rows(), 3);
        assert_eq!(t.cols(), 5);
        assert_eq!(t.row(0), &[-2.0, -1.0, 1.0, 0.0, -4.0]);
        assert_eq!(t.row(1), &[-0.5, 0.0, 0.0, 1.0, -1.0]);
        assert_eq!(t.row(2), &[1.0, 3.0, 0.0, 0.0, 0.0]);
        assert_eq!(t.basis(), &[2, 3]);
        assert_eq!(t.slack_col(1), 3);
        assert_eq!(t.reduced_costs(), &[1.0, 3.0, 0.0, 0.0]);
    }

    #[test]
    fn test_construction_without_constraints() {
        let mut problem = Problem::new();
        problem.add_variable("x", 2.0, vec![]);
        let t = Tableau::from_problem(&problem);

        assert_eq!(t.rows(), 1);
        assert_eq!(t.cols(), 2);
        assert!(t.basis().is_empty());
        assert_eq!(t.row(0), &[2.0, 0.0]);
    }

    #[test]
    fn test_pivot_makes_unit_column() {
        let mut t = Tableau::from_problem(&sample());
        t.pivot(0, 0);

        assert_eq!(t.basis(), &[0, 3]);
        assert_eq!(t.row(0), &[1.0, 0.5, -0.5, 0.0, 2.0]);
        assert_eq!(t[(1, 0)], 0.0);
        assert_eq!(t[(2, 0)], 0.0);
        // objective row: costs minus the scaled pivot row
        assert_eq!(t.row(2), &[0.0, 2.5, 0.5, 0.0, -2.0]);
        assert_eq!(t.rhs(1), 0.0);
    }

    #[test]
    fn test_display_lists_basis() {
        let t = Tableau::from_problem(&sample());
        let text = t.to_string();

        assert!(text.starts_with("=== Simplex Tableau ==="));
        assert!(text.contains("| basis: 2"));
        assert!(text.contains("  -4.000"));
        assert_eq!(text.lines().count(), 5);
    }
}
