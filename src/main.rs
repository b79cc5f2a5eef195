//! `k_colorability`: the least k for which a graph is k-colorable.
//!
//! Exits with 0 if some k was found, 1 if no k in the range was satisfiable, and 2 on any error.

use std::io::Write;

use clap::Parser;

use kcolor_lib::{
    config::{args::SearchArgs, defaults, OutputFormat, SearchConfig},
    io::{dimacs::GraphInput, report},
    misc::log::{self, targets},
    procedures::search::{SearchOutcome, SearchReport},
    structures::coloring::Coloring,
    types::err::{self, ErrorKind},
};

fn main() {
    let args = SearchArgs::parse();

    if args.markdown_help {
        clap_markdown::print_help_markdown::<SearchArgs>();
        std::process::exit(0);
    }

    if let Err(e) = log::init(log::level_from_verbosity(args.verbose, args.quiet)) {
        eprintln!("c Logging unavailable: {e}");
    }

    let config = SearchConfig::from_args(args);
    if let Ok(json) = serde_json::to_string(&config) {
        ::log::debug!(target: targets::SEARCH, "Configuration: {json}");
    }

    match run(&config) {
        Ok(true) => std::process::exit(defaults::EXIT_FOUND),
        Ok(false) => std::process::exit(defaults::EXIT_EXHAUSTED),
        Err(e) => {
            if let ErrorKind::Tool(err::ToolError::EncoderFailure { stderr, .. }) = &e {
                eprint!("{stderr}");
            }
            eprintln!("ERROR: {e}");
            std::process::exit(defaults::EXIT_FATAL);
        }
    }
}

/// Runs the configured search, and writes the result.
///
/// Returns whether some k was found.
fn run(config: &SearchConfig) -> Result<bool, ErrorKind> {
    let graph = GraphInput::load(&config.input)?;

    let mut driver = config.driver();
    let search_report = driver.search(&graph, config.request)?;

    let coloring = match config.verify || config.show_coloring {
        true => coloring(config, &graph, &search_report)?,
        false => None,
    };
    let shown = coloring.as_ref().filter(|_| config.show_coloring);

    let text = match config.format {
        OutputFormat::Text => report::render_text(&search_report, shown),
        OutputFormat::Json => report::render_json(&graph, &search_report, shown)?,
    };

    match &config.output {
        Some(path) => {
            std::fs::write(path, &text).map_err(|e| err::ArtifactError::Write {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| err::ArtifactError::Stdout(e.to_string()))?;
        }
    }

    Ok(search_report.is_found())
}

/// The coloring of a found k, checked against the graph if verification was requested.
fn coloring(
    config: &SearchConfig,
    graph: &GraphInput,
    search_report: &SearchReport,
) -> Result<Option<Coloring>, ErrorKind> {
    let SearchOutcome::Found { k, assignment } = &search_report.outcome else {
        return Ok(None);
    };

    let coloring = Coloring::decode(assignment, graph.graph().vertex_count(), *k)?;
    if config.verify {
        coloring.verify(graph.graph())?;
        ::log::info!(target: targets::SEARCH, "Verified {}-coloring of {}", coloring.k(), graph.origin());
    }
    Ok(Some(coloring))
}
