//! A library for finding the smallest k for which a graph is k-colorable, through external SAT tooling.
//!
//! kcolor reads a graph in the DIMACS `.col` format and, for each k of interest, asks an external encoder for a formula which is satisfiable exactly when the graph is k-colorable.
//! Each formula is then given to an external SAT solver, and the first k with a satisfiable formula is the result of the search.
//!
//! # Orientation
//!
//! The library is designed around a [driver](crate::procedures::search::Driver), built from an [encoder](crate::procedures::encode::Encoder), a [solver](crate::procedures::solve::Solver), and a plan for [artifacts](crate::io::artifacts).
//!
//! Useful starting points may be:
//! - The [search procedure](crate::procedures::search) to see the loop over k.
//! - The [solve procedure](crate::procedures::solve) to see how verdicts are read from solvers.
//! - The [structures] to familiarise yourself with graphs, verdicts, and colorings.
//! - The [configuration](crate::config) to see what is supported from the command line.
//!
//! Three binaries are built with the library:
//! - `k_colorability`, which searches upward from k = 2 (or tries a single k) with a minisat-like solver.
//! - `color_solve`, which tries a single k with a kissat-like solver, keeping the formula and solution.
//! - `color2sat`, an encoder which writes the k-colorability of a graph as CNF.
//!
//! # Example
//!
//! ```rust,ignore
//! use kcolor_lib::{config::SearchConfig, io::dimacs::GraphInput, procedures::search::KRequest};
//!
//! let graph = GraphInput::load("myciel3.col")?;
//! let mut driver = config.driver();
//! let report = driver.search(&graph, KRequest::Ascending)?;
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made throughout, with the targets listed in [misc::log].
//! The binaries install a stderr logger when built with the `log` feature, and the level is raised with `-v`.

pub mod config;
pub mod dispatch;
pub mod io;
pub mod misc;
pub mod procedures;
pub mod structures;
pub mod types;
