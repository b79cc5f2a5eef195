//! Command line arguments of the binaries.

use std::path::PathBuf;

use clap::{value_parser, ArgAction, Parser};

use crate::config::{defaults, OutputFormat, SolverInterface};

/// Reads a DIMACS graph (from a file or stdin), encodes k-colorability with color2sat,
/// pipes the formula to minisat, and writes the first satisfying k with its model.
///
/// If -k is omitted, k = 2, 3, … up to the vertex count of the graph is tried until satisfiable.
#[derive(Parser, Debug)]
#[command(name = "k_colorability", version, about, long_about = None)]
pub struct SearchArgs {
    /// The DIMACS graph file (.col), or '-' to read from stdin
    #[arg(default_value = defaults::STDIN_MARKER)]
    pub input: String,

    /// Target k (optional)
    #[arg(short = 'k', value_parser = value_parser!(u32).range(1..))]
    pub k: Option<u32>,

    /// Options for minisat, e.g. "-pre=once -verbosity=1"
    #[arg(long = "minisat-op", default_value = "", allow_hyphen_values = true)]
    pub minisat_op: String,

    /// Write output to file
    #[arg(short = 'o', value_name = "OUTFILE")]
    pub outfile: Option<PathBuf>,

    /// Path to the color2sat executable
    #[arg(long, default_value = defaults::ENCODER_PATH)]
    pub color2sat: PathBuf,

    /// Path to the solver executable
    #[arg(long, default_value = defaults::MINISAT_PATH)]
    pub solver: PathBuf,

    /// How the solver is given a formula and returns a model
    #[arg(long, value_enum, default_value_t)]
    pub solver_interface: SolverInterface,

    /// Keep the formula and result of each k in this directory, rather than in scratch space
    #[arg(long, value_name = "DIR")]
    pub keep_dir: Option<PathBuf>,

    /// Treat an encoder failure for some k as unsatisfiable, rather than stopping the search
    #[arg(long, default_value_t = false)]
    pub skip_encoder_failures: bool,

    /// Read a coloring from the model and check it against the graph
    #[arg(long, default_value_t = false)]
    pub verify: bool,

    /// Write the color of each vertex after the model
    #[arg(long, default_value_t = false)]
    pub show_coloring: bool,

    /// Format of the output
    #[arg(long, value_enum, default_value_t)]
    pub format: OutputFormat,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log nothing
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,

    /// Print the command line reference as markdown
    #[arg(long, hide = true, default_value_t = false)]
    pub markdown_help: bool,
}

/// Encodes a DIMACS graph to CNF for k-colorability using color2sat,
/// then solves it with kissat, saving both the CNF and solution.
#[derive(Parser, Debug)]
#[command(name = "color_solve", version, about, long_about = None)]
pub struct SolveArgs {
    /// Path to DIMACS formatted graph file (.col)
    pub input_graph: PathBuf,

    /// Number of colors
    #[arg(value_parser = value_parser!(u32).range(1..))]
    pub k: u32,

    /// Path to color2sat executable
    #[arg(long, default_value = defaults::ENCODER_PATH)]
    pub color2sat: PathBuf,

    /// Path to kissat executable
    #[arg(long, default_value = defaults::KISSAT_PATH)]
    pub kissat: PathBuf,

    /// Directory to save generated CNF files
    #[arg(long, default_value = defaults::CNF_DIR)]
    pub cnf_dir: PathBuf,

    /// Directory to save solution .out files
    #[arg(long, default_value = defaults::SOL_DIR)]
    pub sol_dir: PathBuf,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Log nothing
    #[arg(short, long, default_value_t = false)]
    pub quiet: bool,
}
