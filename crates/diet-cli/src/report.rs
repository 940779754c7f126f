use std::fmt;

use diet_solver::{EPSILON, PriceSensitivity, Problem, Solution, SolutionStatus};

const RULE: &str = "----------------------------------------";
const BANNER: &str = "========================================";

/// Banner plus the requirements and foods being optimized
pub struct ProblemSummary<'a>(pub &'a Problem);

/// Food quantities, total cost and shadow prices
pub struct SolutionReport<'a> {
    pub problem: &'a Problem,
    pub solution: &'a Solution,
}

/// Price sweep table for every food in the solution
pub struct SensitivityReport<'a>(pub &'a [PriceSensitivity]);

impl fmt::Display for ProblemSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        writeln!(f, "╔════════════════════════════════════════════════════════╗")?;
        writeln!(f, "║  LINEAR PROGRAMMING: DIET OPTIMIZATION CALCULATOR      ║")?;
        writeln!(f, "║  Classic 1945 Operations Research Problem              ║")?;
        writeln!(f, "╚════════════════════════════════════════════════════════╝")?;

        writeln!(f, "\nConstraints (Minimum Daily Requirements):")?;
        for c in &self.0.constraints {
            writeln!(f, "  {} >= {:.1}", c.name, c.minimum)?;
        }

        writeln!(f, "\nAvailable Foods:")?;
        for v in &self.0.variables {
            writeln!(f, "  {:<20}: ${:.2}", v.name, v.cost)?;
        }
        Ok(())
    }
}

impl fmt::Display for SolutionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let SolutionReport { problem, solution } = self;
        section(f, "OPTIMAL DIET SOLUTION")?;

        if solution.status == SolutionStatus::IterationLimit {
            writeln!(
                f,
                "\nWarning: stopped after {} pivots; this may not be the optimum.",
                solution.iterations
            )?;
        }

        writeln!(f, "\nMinimum Daily Cost: ${:.2}", solution.total_cost)?;
        writeln!(f, "\nFood Quantities:")?;
        writeln!(f, "{}", RULE)?;
        for (v, &amount) in problem.variables.iter().zip(&solution.amounts) {
            if amount > EPSILON {
                writeln!(
                    f,
                    "{:<20}: {:8.2} units (${:.2})",
                    v.name,
                    amount,
                    amount * v.cost
                )?;
            }
        }

        writeln!(f)?;
        section(f, "SHADOW PRICES (Dual Values)")?;
        writeln!(f, "\nMarginal value of each constraint:")?;
        writeln!(f, "{}", RULE)?;
        for (c, price) in problem.constraints.iter().zip(&solution.shadow_prices) {
            writeln!(f, "{:<20}: ${:.6} per unit", c.name, price)?;
        }
        Ok(())
    }
}

impl fmt::Display for SensitivityReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        section(f, "SENSITIVITY ANALYSIS")?;

        for item in self.0 {
            writeln!(
                f,
                "\n{} (Current: ${:.2}, Quantity: {:.2})",
                item.variable, item.cost, item.amount
            )?;
            writeln!(f, "Price Change | New Price | Cost Impact")?;
            writeln!(f, "{}", RULE)?;
            for change in &item.changes {
                writeln!(
                    f,
                    "{:4}%       | ${:7.2}  | ${:7.2}",
                    change.percent, change.new_price, change.impact
                )?;
            }
        }
        Ok(())
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", BANNER)?;
    writeln!(f, "      {}", title)?;
    writeln!(f, "{}", BANNER)
}
