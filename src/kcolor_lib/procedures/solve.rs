//! Solving a formula, and reading a [Verdict] from the solver.
//!
//! Two invocation contracts are supported:
//!
//! - [FileSolver], for kissat-like solvers: `SOLVER <formula file>`, with output written to the solution file.
//!   The verdict is read from the exit code alone: 10 is satisfiable, 20 unsatisfiable, 0 unknown, and anything else an error.
//! - [StreamSolver], for minisat-like solvers: `SOLVER [options…] <result file>`, with the formula on stdin.
//!   On an exit code of 10 or 0 the first line of the result file decides the verdict, an exit code of 20 is unsatisfiable, and anything else an error.
//!
//! An error verdict is not an error of the search.
//! Only failure to start the solver, or to handle its files, is.

use std::{
    fs::File,
    path::PathBuf,
    process::Command,
};

use crate::{
    config::defaults,
    io::artifacts::{read_artifact, IterationArtifacts},
    misc::log::targets,
    procedures::{encode::Formula, process},
    structures::verdict::{Assignment, Verdict},
    types::err::{self, ErrorKind},
};

pub trait Solver {
    /// A verdict on `formula`, using the paths of `artifacts` for any files.
    fn solve(
        &mut self,
        formula: &Formula,
        artifacts: &IterationArtifacts,
    ) -> Result<Verdict, ErrorKind>;
}

impl<S: Solver + ?Sized> Solver for Box<S> {
    fn solve(
        &mut self,
        formula: &Formula,
        artifacts: &IterationArtifacts,
    ) -> Result<Verdict, ErrorKind> {
        (**self).solve(formula, artifacts)
    }
}

/// The verdict of a kissat-like solver from its exit code and output.
pub fn file_verdict(code: Option<i32>, output: &str) -> Verdict {
    match code {
        Some(defaults::SATISFIABLE_EXIT) => Verdict::Satisfiable(Assignment::from_lines(output.lines())),
        Some(defaults::UNSATISFIABLE_EXIT) => Verdict::Unsatisfiable,
        Some(defaults::UNKNOWN_EXIT) => Verdict::Unknown,
        code => {
            log::error!(target: targets::SOLVER, "Solver terminated with exit code {code:?}");
            Verdict::Error { code }
        }
    }
}

/// The verdict of a minisat-like solver from its exit code and result file, if one was written.
///
/// The exit codes 10 and 0 are treated alike, and the first line of the result decides.
/// Minisat writes `SAT`, `UNSAT`, or `INDET` (when interrupted) as the first line of a result.
pub fn stream_verdict(code: Option<i32>, result: Option<&str>) -> Verdict {
    match code {
        Some(defaults::SATISFIABLE_EXIT) | Some(defaults::UNKNOWN_EXIT) => {
            let Some(result) = result else {
                log::warn!(target: targets::SOLVER, "No result file after exit code {code:?}");
                return Verdict::Unknown;
            };

            match result.lines().next().map(str::trim) {
                Some(defaults::SAT_MARKER) => Verdict::Satisfiable(Assignment::from_lines(result.lines())),
                Some(defaults::UNSAT_MARKER) => Verdict::Unsatisfiable,
                _ => Verdict::Unknown,
            }
        }

        Some(defaults::UNSATISFIABLE_EXIT) => Verdict::Unsatisfiable,

        code => {
            log::warn!(target: targets::SOLVER, "Solver terminated with exit code {code:?}, taken as unsatisfiable for this k");
            Verdict::Error { code }
        }
    }
}

/// A kissat-like solver.
pub struct FileSolver {
    path: PathBuf,
}

impl FileSolver {
    pub fn new(path: PathBuf) -> Self {
        FileSolver { path }
    }
}

impl Solver for FileSolver {
    fn solve(
        &mut self,
        formula: &Formula,
        artifacts: &IterationArtifacts,
    ) -> Result<Verdict, ErrorKind> {
        formula.write_to(artifacts.formula())?;

        let solution = File::create(artifacts.solution()).map_err(|e| err::ArtifactError::Write {
            path: artifacts.solution().to_path_buf(),
            message: e.to_string(),
        })?;

        let mut command = Command::new(&self.path);
        command.arg(artifacts.formula());

        let output = process::run(&self.path, command, None, Some(solution))?;
        let code = output.status.code();

        let solution = match code {
            Some(defaults::SATISFIABLE_EXIT) => read_artifact(artifacts.solution())?,
            _ => String::default(),
        };

        Ok(file_verdict(code, &solution))
    }
}

/// A minisat-like solver.
pub struct StreamSolver {
    path: PathBuf,
    options: Vec<String>,
}

impl StreamSolver {
    pub fn new(path: PathBuf, options: Vec<String>) -> Self {
        StreamSolver { path, options }
    }
}

impl Solver for StreamSolver {
    fn solve(
        &mut self,
        formula: &Formula,
        artifacts: &IterationArtifacts,
    ) -> Result<Verdict, ErrorKind> {
        if artifacts.is_persistent() {
            formula.write_to(artifacts.formula())?;
            // A result from some earlier run must not be read as the result of this run.
            if artifacts.solution().exists() {
                std::fs::remove_file(artifacts.solution()).map_err(|e| {
                    err::ArtifactError::Write {
                        path: artifacts.solution().to_path_buf(),
                        message: e.to_string(),
                    }
                })?;
            }
        }

        let mut command = Command::new(&self.path);
        command.args(&self.options).arg(artifacts.solution());

        let output = process::run(&self.path, command, Some(formula.as_bytes()), None)?;

        let result = match artifacts.solution().exists() {
            true => Some(read_artifact(artifacts.solution())?),
            false => None,
        };

        Ok(stream_verdict(output.status.code(), result.as_deref()))
    }
}
