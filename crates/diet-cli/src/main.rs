mod data;
mod report;

use std::io::Write;

use clap::{Parser, ValueEnum};
use diet_solver::{MAX_ITERATIONS, SolveError, Solver, price_sweep};
use log::LevelFilter;

#[derive(Parser)]
#[command(name = "diet")]
#[command(about = "Solve the classic diet problem with the tableau simplex method", long_about = None)]
struct Cli {
    /// Print the tableau after construction and after every pivot
    #[arg(short, long)]
    verbose: bool,
    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Pretty)]
    format: Format,
    /// Skip the price sensitivity table
    #[arg(long)]
    no_sensitivity: bool,
    /// Pivot ceiling for the solve
    #[arg(long, default_value_t = MAX_ITERATIONS)]
    max_iterations: usize,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Pretty,
    Json,
}

/// Warnings always reach stderr; `-v` lets the tableau trace through
fn log_level(verbose: bool) -> LevelFilter {
    if verbose { LevelFilter::Info } else { LevelFilter::Warn }
}

fn init_logger(verbose: bool) {
    let _ = env_logger::Builder::new()
        .filter_level(log_level(verbose))
        .format(|buf, record| writeln!(buf, "{}", record.args()))
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let problem = data::daily_diet();

    if cli.format == Format::Pretty {
        print!("{}", report::ProblemSummary(&problem));
    }

    let solver = Solver::new()
        .with_max_iterations(cli.max_iterations)
        .with_verbose(cli.verbose);

    let solution = match solver.solve(&problem) {
        Ok(s) => s,
        Err(e) => {
            match e {
                SolveError::Unbounded => println!("\nStatus: UNBOUNDED"),
                SolveError::Infeasible { .. } => println!("\nNo feasible solution found!"),
                SolveError::InvalidInput(_) => {}
            }
            eprintln!("Solve error: {}", e);
            std::process::exit(1);
        }
    };

    let sweep = if cli.no_sensitivity {
        Vec::new()
    } else {
        price_sweep(&problem, &solution)
    };

    match cli.format {
        Format::Json => {
            let output = serde_json::json!({
                "problem": problem,
                "solution": solution,
                "sensitivity": sweep,
            });
            match serde_json::to_string_pretty(&output) {
                Ok(text) => println!("{}", text),
                Err(e) => {
                    eprintln!("Error serializing solution: {}", e);
                    std::process::exit(1);
                }
            }
        }
        Format::Pretty => {
            println!();
            print!("{}", report::SolutionReport { problem: &problem, solution: &solution });
            if !cli.no_sensitivity {
                print!("{}", report::SensitivityReport(&sweep));
            }
            println!();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_verbose_raises_log_level() {
        assert_eq!(log_level(false), LevelFilter::Warn);
        assert_eq!(log_level(true), LevelFilter::Info);
        assert!(log::Level::Info <= log_level(true));
        assert!(log::Level::Info > log_level(false));
    }

    #[test]
    fn test_cli_flags() {
        Cli::command().debug_assert();

        let cli = Cli::parse_from(["diet", "-v", "--format", "json", "--max-iterations", "7"]);
        assert!(cli.verbose);
        assert!(cli.format == Format::Json);
        assert_eq!(cli.max_iterations, 7);
        assert!(!cli.no_sensitivity);

        let cli = Cli::parse_from(["diet"]);
        assert!(!cli.verbose);
        assert!(cli.format == Format::Pretty);
        assert_eq!(cli.max_iterations, MAX_ITERATIONS);
    }
}
