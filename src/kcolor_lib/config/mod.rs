/*!
Configuration of a search.

Command line [arguments](args) are read to a configuration, and a configuration builds the [encoder](crate::procedures::encode), [solver](crate::procedures::solve) and [driver](crate::procedures::search::Driver) for a search.

Configuration structs derive [Serialize] so the effective configuration of a run may be logged.
*/

use std::path::PathBuf;

use serde::Serialize;

pub mod args;
pub mod defaults;

use args::{SearchArgs, SolveArgs};

use crate::{
    io::artifacts::ArtifactPlan,
    procedures::{
        encode::{ExternalEncoder, GraphTransport},
        search::{Driver, KRequest},
        solve::{FileSolver, Solver, StreamSolver},
    },
};

/// Which invocation contract a solver follows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum SolverInterface {
    /// Formula given as a file argument, model written to stdout (e.g. kissat)
    File,
    /// Formula streamed on stdin, model written to a result file given as the last argument (e.g. minisat)
    #[default]
    Stream,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// `k = K` followed by the model, or a line noting exhaustion
    #[default]
    Text,
    /// The full search report, as JSON
    Json,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct EncoderConfig {
    pub path: PathBuf,
    pub transport: GraphTransport,
}

impl EncoderConfig {
    pub fn build(&self) -> ExternalEncoder {
        ExternalEncoder::new(self.path.clone(), self.transport)
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SolverConfig {
    pub interface: SolverInterface,
    pub path: PathBuf,

    /// Option tokens passed ahead of the result file, for a stream solver.
    pub options: Vec<String>,
}

impl SolverConfig {
    pub fn build(&self) -> Box<dyn Solver> {
        match self.interface {
            SolverInterface::File => Box::new(FileSolver::new(self.path.clone())),
            SolverInterface::Stream => Box::new(StreamSolver::new(
                self.path.clone(),
                self.options.clone(),
            )),
        }
    }
}

/// Configuration of `k_colorability`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SearchConfig {
    /// A path to a graph, or [STDIN_MARKER](defaults::STDIN_MARKER).
    pub input: String,
    pub request: KRequest,
    pub encoder: EncoderConfig,
    pub solver: SolverConfig,
    pub artifacts: ArtifactPlan,
    pub skip_encoder_failures: bool,
    pub verify: bool,
    pub show_coloring: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
}

impl SearchConfig {
    pub fn from_args(args: SearchArgs) -> Self {
        let request = match args.k {
            Some(k) => KRequest::Fixed(k as usize),
            None => KRequest::Ascending,
        };

        let artifacts = match args.keep_dir {
            Some(dir) => ArtifactPlan::Persistent {
                formula_dir: dir.clone(),
                solution_dir: dir,
            },
            None => ArtifactPlan::Scratch,
        };

        SearchConfig {
            input: args.input,
            request,
            encoder: EncoderConfig {
                path: args.color2sat,
                // The graph is read by the driver, and so is always piped to the encoder.
                transport: GraphTransport::Stdin,
            },
            solver: SolverConfig {
                interface: args.solver_interface,
                path: args.solver,
                options: args
                    .minisat_op
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
            },
            artifacts,
            skip_encoder_failures: args.skip_encoder_failures,
            verify: args.verify,
            show_coloring: args.show_coloring,
            format: args.format,
            output: args.outfile,
        }
    }

    pub fn driver(&self) -> Driver<ExternalEncoder, Box<dyn Solver>> {
        Driver::new(
            self.encoder.build(),
            self.solver.build(),
            self.artifacts.clone(),
        )
        .skip_encoder_failures(self.skip_encoder_failures)
    }
}

/// Configuration of `color_solve`.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct SolveConfig {
    pub input_graph: PathBuf,
    pub k: usize,
    pub encoder: EncoderConfig,
    pub solver: SolverConfig,
    pub artifacts: ArtifactPlan,
}

impl SolveConfig {
    pub fn from_args(args: SolveArgs) -> Self {
        SolveConfig {
            input_graph: args.input_graph,
            k: args.k as usize,
            encoder: EncoderConfig {
                path: args.color2sat,
                transport: GraphTransport::Path,
            },
            solver: SolverConfig {
                interface: SolverInterface::File,
                path: args.kissat,
                options: Vec::default(),
            },
            artifacts: ArtifactPlan::Persistent {
                formula_dir: args.cnf_dir,
                solution_dir: args.sol_dir,
            },
        }
    }

    pub fn driver(&self) -> Driver<ExternalEncoder, Box<dyn Solver>> {
        Driver::new(
            self.encoder.build(),
            self.solver.build(),
            self.artifacts.clone(),
        )
    }
}
