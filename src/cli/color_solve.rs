//! `color_solve`: a single k, with a kissat-like solver, keeping the formula and solution.
//!
//! Exits with the exit code of the solver, or of the encoder if the encoder failed.
//! Any other error exits with 1.

use clap::Parser;

use kcolor_lib::{
    config::{args::SolveArgs, SolveConfig},
    dispatch::Dispatch,
    io::dimacs::GraphInput,
    misc::log,
    procedures::search::KRequest,
    structures::verdict::Status,
    types::err::{self, ErrorKind},
};

const EXIT_ERROR: i32 = 1;

fn main() {
    let args = SolveArgs::parse();

    if let Err(e) = log::init(log::level_from_verbosity(args.verbose, args.quiet)) {
        eprintln!("c Logging unavailable: {e}");
    }

    let config = SolveConfig::from_args(args);

    match run(&config) {
        Ok(code) => std::process::exit(code),

        Err(ErrorKind::Tool(err::ToolError::EncoderFailure { code, stderr, .. })) => {
            match code {
                Some(code) => eprintln!("Error: color2sat failed (exit code {code})"),
                None => eprintln!("Error: color2sat terminated by signal"),
            }
            eprint!("{stderr}");
            std::process::exit(code.filter(|code| *code != 0).unwrap_or(EXIT_ERROR));
        }

        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Runs the single attempt, and returns the exit code of the solver.
fn run(config: &SolveConfig) -> Result<i32, ErrorKind> {
    let graph = GraphInput::load_path(&config.input_graph)?;
    let stem = graph.stem();

    let dispatch_stem = stem.clone();
    let dispatch_solver = solver_name(config);
    let mut driver = config
        .driver()
        .with_dispatcher(Box::new(move |dispatch| match dispatch {
            Dispatch::Encoding { k, formula } => println!(
                "Generating CNF for '{dispatch_stem}' with k={k} into '{}'...",
                formula.display()
            ),
            Dispatch::Solving { formula, .. } => {
                println!("Running {dispatch_solver} on '{}'...", formula.display())
            }
            _ => {}
        }));

    let report = driver.search(&graph, KRequest::Fixed(config.k))?;

    let code = match report.attempts.last() {
        Some(attempt) => {
            print_status(&attempt.status, &solver_name(config));
            attempt.status.exit_code().unwrap_or(EXIT_ERROR)
        }
        None => EXIT_ERROR,
    };

    if let Some((formula, solution)) = config.artifacts.kept_paths(&stem, report.range.lo) {
        println!("CNF saved to '{}'", formula.display());
        println!("Solution saved to '{}'", solution.display());
    }

    Ok(code)
}

fn solver_name(config: &SolveConfig) -> String {
    config
        .solver
        .path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| config.solver.path.display().to_string())
}

fn print_status(status: &Status, solver_name: &str) {
    match status {
        Status::Satisfiable | Status::Unsatisfiable => {
            println!("Result: {status} (exit code {})", status.exit_code().unwrap_or_default())
        }
        Status::Unknown => println!(
            "Result: UNKNOWN or INTERRUPTED (exit code {})",
            status.exit_code().unwrap_or_default()
        ),
        Status::Error { code: Some(code) } | Status::EncoderFailed { code: Some(code) } => {
            eprintln!("Result: {solver_name} terminated with exit code {code}")
        }
        Status::Error { code: None } | Status::EncoderFailed { code: None } => {
            eprintln!("Result: {solver_name} terminated by signal")
        }
    }
}
