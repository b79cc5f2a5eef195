//! `color2sat`: writes the k-colorability of a DIMACS graph as a CNF formula to stdout.
//!
//! Any error is written to stderr, with exit code 1.

use std::io::BufWriter;

use clap::{error::ErrorKind as ClapErrorKind, Parser};

use kcolor_lib::{
    io::{cnf::ColoringCnf, dimacs::GraphInput},
    misc::log::{self, targets},
};

const EXIT_FAILURE: i32 = 1;

/// Reads a graph in DIMACS format and transforms it into a CNF for k-colorability
#[derive(Parser, Debug)]
#[command(name = "color2sat", version, about, long_about = None)]
struct Args {
    /// The DIMACS graph file (.col), or '-' to read from stdin
    graph: String,

    /// Number of colors, a positive integer in base 10
    #[arg(allow_hyphen_values = true)]
    k: String,

    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(EXIT_FAILURE);
            }
        },
    };

    if let Err(e) = log::init(log::level_from_verbosity(args.verbose, false)) {
        eprintln!("c Logging unavailable: {e}");
    }

    let k = match args.k.parse::<usize>() {
        Ok(k) if k > 0 => k,
        _ => fail("Invalid k: must be positive integer in base 10."),
    };

    let input = match GraphInput::load(&args.graph) {
        Ok(input) => input,
        Err(e) => fail(&e.to_string()),
    };

    if input.graph().vertex_count() == 0 {
        fail("Graph has no vertices.");
    }

    let Some(cnf) = ColoringCnf::new(input.graph(), k) else {
        fail(&format!("k={k} is too large to encode for {} vertices.", input.graph().vertex_count()));
    };
    let stdout = std::io::stdout().lock();
    if let Err(e) = cnf.write(BufWriter::new(stdout)) {
        fail(&format!("Failed to write formula: {e}"));
    }

    if input.graph().edge_count() != input.graph().declared_edge_count() {
        ::log::debug!(target: targets::ENCODER,
            "Encoded {} edges of the {} declared",
            input.graph().edge_count(),
            input.graph().declared_edge_count()
        );
    }
}

fn fail(message: &str) -> ! {
    eprintln!("ERROR: {message}");
    std::process::exit(EXIT_FAILURE);
}
