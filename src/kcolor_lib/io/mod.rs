//! Reading and writing.
//!
//! - Graphs are read from the [DIMACS](dimacs) `.col` format.
//! - The k-colorability of a graph is written as [CNF](cnf).
//! - Formula and solution files are placed by an [artifact plan](artifacts).
//! - The result of a search is rendered as a [report].

pub mod artifacts;
pub mod cnf;
pub mod dimacs;
pub mod report;
