use crate::error::SolveError;

/// A decision variable: one food, its unit cost, and what one unit of it
/// contributes toward each constraint
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    pub name: String,
    /// Cost per unit (objective coefficient, minimized)
    pub cost: f64,
    /// Contribution per unit to each constraint, in constraint order
    pub contributions: Vec<f64>,
}

/// An "at least" requirement: sum of amount * contribution >= minimum
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Name/label for the constraint (for reports)
    pub name: String,
    /// Right-hand side of the inequality
    pub minimum: f64,
}

/// Represents a minimum-cost covering problem
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Problem {
    pub variables: Vec<Variable>,
    pub constraints: Vec<Constraint>,
}

impl Variable {
    pub fn new(name: impl Into<String>, cost: f64, contributions: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            cost,
            contributions,
        }
    }
}

impl Constraint {
    pub fn new(name: impl Into<String>, minimum: f64) -> Self {
        Self {
            name: name.into(),
            minimum,
        }
    }
}

impl Problem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a problem from bare minimums, naming constraints by position
    pub fn from_minimums(variables: Vec<Variable>, minimums: &[f64]) -> Self {
        let constraints = minimums
            .iter()
            .enumerate()
            .map(|(i, &minimum)| Constraint::new(format!("c{}", i), minimum))
            .collect();
        Self { variables, constraints }
    }

    pub fn add_variable(&mut self, name: impl Into<String>, cost: f64, contributions: Vec<f64>) {
        self.variables.push(Variable::new(name, cost, contributions));
    }

    pub fn add_constraint(&mut self, name: impl Into<String>, minimum: f64) {
        self.constraints.push(Constraint::new(name, minimum));
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn minimums(&self) -> impl Iterator<Item = f64> + '_ {
        self.constraints.iter().map(|c| c.minimum)
    }

    /// Check the shape and values before any tableau is built.
    ///
    /// Negative costs are allowed; they are what makes a problem unbounded.
    pub fn validate(&self) -> Result<(), SolveError> {
        let n_constraints = self.num_constraints();

        for (i, c) in self.constraints.iter().enumerate() {
            if !c.minimum.is_finite() {
                return Err(SolveError::InvalidInput(format!(
                    "constraint {} ({}) has non-finite minimum {}",
                    i, c.name, c.minimum
                )));
            }
            if c.minimum < 0.0 {
                return Err(SolveError::InvalidInput(format!(
                    "constraint {} ({}) has negative minimum {}",
                    i, c.name, c.minimum
                )));
            }
        }

        for (j, v) in self.variables.iter().enumerate() {
            if v.contributions.len() != n_constraints {
                return Err(SolveError::InvalidInput(format!(
                    "variable {} ({}) has {} contributions, expected {}",
                    j,
                    v.name,
                    v.contributions.len(),
                    n_constraints
                )));
            }
            if !v.cost.is_finite() {
                return Err(SolveError::InvalidInput(format!(
                    "variable {} ({}) has non-finite cost {}",
                    j, v.name, v.cost
                )));
            }
            if let Some(bad) = v.contributions.iter().find(|x| !x.is_finite()) {
                return Err(SolveError::InvalidInput(format!(
                    "variable {} ({}) has non-finite contribution {}",
                    j, v.name, bad
                )));
            }
        }

        Ok(())
    }

    /// Left-hand side of constraint `i` for the given amounts
    pub fn lhs(&self, amounts: &[f64], i: usize) -> f64 {
        self.variables
            .iter()
            .zip(amounts)
            .map(|(v, &amount)| amount * v.contributions[i])
            .sum()
    }

    /// Total cost of the given amounts
    pub fn cost_of(&self, amounts: &[f64]) -> f64 {
        self.variables
            .iter()
            .zip(amounts)
            .map(|(v, &amount)| amount * v.cost)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_foods() -> Problem {
        let mut problem = Problem::new();
        problem.add_constraint("protein", 4.0);
        problem.add_variable("a", 1.0, vec![2.0]);
        problem.add_variable("b", 3.0, vec![1.0]);
        problem
    }

    #[test]
    fn test_validate_accepts_well_formed() {
        assert!(two_foods().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_length_mismatch() {
        let mut problem = two_foods();
        problem.add_variable("c", 1.0, vec![1.0, 2.0]);

        let err = problem.validate().unwrap_err();
        assert!(matches!(err, SolveError::InvalidInput(_)));
        assert!(err.to_string().contains("expected 1"), "{}", err);
    }

    #[test]
    fn test_validate_rejects_negative_minimum() {
        let mut problem = two_foods();
        problem.constraints[0].minimum = -1.0;
        for v in &mut problem.variables {
            v.contributions = vec![1.0];
        }

        assert!(matches!(problem.validate(), Err(SolveError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut problem = two_foods();
        problem.variables[1].contributions[0] = f64::NAN;
        assert!(matches!(problem.validate(), Err(SolveError::InvalidInput(_))));

        let mut problem = two_foods();
        problem.variables[0].cost = f64::INFINITY;
        assert!(matches!(problem.validate(), Err(SolveError::InvalidInput(_))));
    }

    #[test]
    fn test_validate_allows_negative_cost() {
        let mut problem = two_foods();
        problem.variables[0].cost = -2.0;
        assert!(problem.validate().is_ok());
    }

    #[test]
    fn test_lhs_and_cost() {
        let problem = two_foods();
        let amounts = [1.5, 2.0];

        assert!((problem.lhs(&amounts, 0) - 5.0).abs() < 1e-12);
        assert!((problem.cost_of(&amounts) - 7.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_minimums_names_constraints() {
        let problem = Problem::from_minimums(vec![Variable::new("x", 1.0, vec![1.0, 1.0])], &[3.0, 5.0]);

        assert_eq!(problem.num_constraints(), 2);
        assert_eq!(problem.constraints[1].name, "c1");
        assert_eq!(problem.minimums().collect::<Vec<_>>(), vec![3.0, 5.0]);
    }
}
