use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::debug;
use recurrence_core::error::SolveError;
use recurrence_core::solver::ClosedForm;
use recurrence_core::{input, roots, solver};

/// Solves a linear homogeneous recurrence relation of order 1 or 2 and
/// prints its closed form.
#[derive(Parser)]
#[command(name = "recur", version, about)]
struct Cli {
    /// Input file holding the term count, coefficients, and initial
    /// conditions as whitespace-separated numbers.
    #[arg(default_value = "input.txt")]
    input: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(closed_form) => {
            println!("Your solution: {closed_form}");
            ExitCode::SUCCESS
        }
        // A negative discriminant is a mathematical outcome, not a failure.
        Err(SolveError::NoRealSolution { discriminant }) => {
            debug!("discriminant {discriminant} is negative");
            println!("No real solution");
            ExitCode::SUCCESS
        }
        Err(err) => {
            println!("{err}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<ClosedForm, SolveError> {
    let relation = input::load(&cli.input)?;
    let roots = roots::characteristic_roots(&relation)?;
    solver::solve(&relation, &roots)
}
