use crate::EPSILON;
use crate::problem::Problem;
use crate::solution::Solution;

/// Price offsets swept for each variable in the solution, in percent
const PRICE_STEPS: [i32; 11] = [-50, -40, -30, -20, -10, 0, 10, 20, 30, 40, 50];

/// Cost impact of repricing one variable while keeping its amount fixed
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSensitivity {
    pub variable: String,
    pub cost: f64,
    pub amount: f64,
    pub changes: Vec<PriceChange>,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct PriceChange {
    pub percent: i32,
    pub new_price: f64,
    pub impact: f64,
}

/// Sweep each used variable's price from -50% to +50% in 10-point steps.
///
/// The amounts are held fixed, so the impact is a first-order estimate
/// that only holds while the basis does not change.
pub fn price_sweep(problem: &Problem, solution: &Solution) -> Vec<PriceSensitivity> {
    problem
        .variables
        .iter()
        .zip(&solution.amounts)
        .filter(|(_, amount)| **amount > EPSILON)
        .map(|(variable, &amount)| PriceSensitivity {
            variable: variable.name.clone(),
            cost: variable.cost,
            amount,
            changes: PRICE_STEPS
                .iter()
                .map(|&percent| {
                    let new_price = variable.cost * (1.0 + f64::from(percent) / 100.0);
                    PriceChange {
                        percent,
                        new_price,
                        impact: amount * (new_price - variable.cost),
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simplex::Solver;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_sweep_skips_unused_variables() {
        let mut problem = Problem::new();
        problem.add_constraint("requirement", 4.0);
        problem.add_variable("a", 1.0, vec![2.0]);
        problem.add_variable("b", 3.0, vec![1.0]);

        let solution = Solver::new().solve(&problem).unwrap();
        let sweep = price_sweep(&problem, &solution);

        assert_eq!(sweep.len(), 1);
        let a = &sweep[0];
        assert_eq!(a.variable, "a");
        assert_eq!(a.changes.len(), 11);
        assert_eq!(a.changes.first().map(|c| c.percent), Some(-50));
        assert_eq!(a.changes.last().map(|c| c.percent), Some(50));

        // 2 units at $1: -50% saves $1, +30% costs $0.60
        assert_abs_diff_eq!(a.changes[0].new_price, 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(a.changes[0].impact, -1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(a.changes[5].impact, 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.changes[8].impact, 0.6, epsilon = 1e-9);
    }

    #[test]
    fn test_sweep_empty_when_nothing_bought() {
        let mut problem = Problem::new();
        problem.add_variable("a", 1.0, vec![]);

        let solution = Solver::new().solve(&problem).unwrap();
        assert!(price_sweep(&problem, &solution).is_empty());
    }
}
