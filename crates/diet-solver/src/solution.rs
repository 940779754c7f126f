use crate::problem::Problem;

/// The result of solving a problem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the solve loop stopped
    pub status: SolutionStatus,
    /// Nonnegative amount of each variable
    pub amounts: Vec<f64>,
    /// Sum of amount * cost
    pub total_cost: f64,
    /// Marginal cost per unit increase of each constraint's minimum
    pub shadow_prices: Vec<f64>,
    /// Objective-row entry of each variable column (zero when basic)
    pub reduced_costs: Vec<f64>,
    /// Whether every basic value was nonnegative when extracted
    pub feasible: bool,
    /// Number of pivots performed
    pub iterations: usize,
}

/// Solution status
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolutionStatus {
    /// No pivot column remains: the solution is optimal
    Optimal,
    /// The pivot ceiling was hit; the solution is the last tableau's
    /// best effort and may be suboptimal
    IterationLimit,
}

/// A constraint left short of its minimum by some amounts
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct ConstraintViolation {
    pub constraint: String,
    pub required: f64,
    pub actual: f64,
    pub shortfall: f64,
}

impl Solution {
    pub fn is_optimal(&self) -> bool {
        self.status == SolutionStatus::Optimal
    }

    /// Names of constraints whose shadow price exceeds `tolerance`
    pub fn binding_constraints<'a>(&self, problem: &'a Problem, tolerance: f64) -> Vec<&'a str> {
        problem
            .constraints
            .iter()
            .zip(&self.shadow_prices)
            .filter(|(_, sp)| **sp > tolerance)
            .map(|(c, _)| c.name.as_str())
            .collect()
    }

    /// Constraints that these amounts miss by more than `tolerance`,
    /// worst first
    pub fn violations(&self, problem: &Problem, tolerance: f64) -> Vec<ConstraintViolation> {
        let mut violations: Vec<ConstraintViolation> = problem
            .constraints
            .iter()
            .enumerate()
            .filter_map(|(i, c)| {
                let actual = problem.lhs(&self.amounts, i);
                (actual < c.minimum - tolerance).then(|| ConstraintViolation {
                    constraint: c.name.clone(),
                    required: c.minimum,
                    actual,
                    shortfall: c.minimum - actual,
                })
            })
            .collect();

        violations.sort_by(|a, b| b.shortfall.total_cmp(&a.shortfall));
        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn problem() -> Problem {
        let mut problem = Problem::new();
        problem.add_constraint("protein", 10.0);
        problem.add_constraint("fiber", 4.0);
        problem.add_variable("oats", 1.0, vec![2.0, 1.0]);
        problem
    }

    fn solution(amount: f64) -> Solution {
        Solution {
            status: SolutionStatus::Optimal,
            amounts: vec![amount],
            total_cost: amount,
            shadow_prices: vec![0.5, 0.0],
            reduced_costs: vec![0.0],
            feasible: true,
            iterations: 1,
        }
    }

    #[test]
    fn test_binding_constraints() {
        let problem = problem();
        assert_eq!(solution(5.0).binding_constraints(&problem, 1e-6), vec!["protein"]);
    }

    #[test]
    fn test_violations_sorted_worst_first() {
        let problem = problem();

        assert!(solution(5.0).violations(&problem, 1e-6).is_empty());

        let short = solution(1.0).violations(&problem, 1e-6);
        assert_eq!(short.len(), 2);
        assert_eq!(short[0].constraint, "protein");
        assert!((short[0].shortfall - 8.0).abs() < 1e-12);
        assert!((short[1].actual - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_is_optimal() {
        let mut sol = solution(5.0);
        assert!(sol.is_optimal());
        sol.status = SolutionStatus::IterationLimit;
        assert!(!sol.is_optimal());
    }
}
