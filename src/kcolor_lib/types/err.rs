//! Error types used in the library.
//!
//! - Graph errors are raised before any external tool is invoked.
//! - Tool errors cover the encoder and solver processes.
//!   Of these, only a failure to start a tool or a failing encoder is fatal to a search.
//!   A solver which reports anything other than satisfiable is not an error, and is instead recorded as a [Verdict](crate::structures::verdict::Verdict).
//! - Artifact errors cover formula and solution files.
//!
//! Names of the error enums overlap with the structures they relate to.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ErrorKind {
    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Tool(#[from] ToolError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Coloring(#[from] ColoringError),

    #[error("failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// A malformed graph description.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum GraphError {
    /// No `p edge N M` line was found.
    #[error("invalid or missing \"p edge N M\" header")]
    MissingHeader,

    /// A problem line which is not of the form `p edge N M`.
    #[error("invalid problem line at line {0}, expected \"p edge N M\"")]
    ProblemSpecification(usize),

    /// A second problem line.
    #[error("duplicate problem line at line {0}")]
    DuplicateProblem(usize),

    /// An edge given before the problem line.
    #[error("edge at line {0} precedes the problem line")]
    MisplacedEdge(usize),

    /// An edge line which is not of the form `e U V`.
    #[error("invalid edge line at line {0}, expected \"e U V\"")]
    Edge(usize),

    /// An edge with an endpoint outside of the declared vertices.
    #[error("edge at line {line} references vertex {vertex}, but only {vertices} vertices are declared")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        vertices: usize,
    },

    /// Some line which is neither a comment, problem, or edge.
    #[error("unexpected content at line {0}")]
    Line(usize),

    /// The description could not be read.
    #[error("failed to read graph from {origin}: {message}")]
    Read { origin: String, message: String },
}

/// Errors from invoking an external tool.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ToolError {
    /// The executable is missing, or is not executable.
    #[error("'{}' not found or not executable", .path.display())]
    NotFound { path: PathBuf },

    /// The encoder terminated without success.
    ///
    /// The stderr of the encoder is kept verbatim, to be relayed to the caller.
    #[error("encoder failed for k={k} ({})", describe_exit(.code))]
    EncoderFailure {
        k: usize,
        code: Option<i32>,
        stderr: String,
    },

    /// Some other issue when starting or waiting on a tool.
    #[error("failed to run '{}': {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

fn describe_exit(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    }
}

/// Errors with formula and solution files.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ArtifactError {
    #[error("failed to create directory '{}': {message}", .path.display())]
    CreateDir { path: PathBuf, message: String },

    #[error("failed to write '{}': {message}", .path.display())]
    Write { path: PathBuf, message: String },

    #[error("failed to read '{}': {message}", .path.display())]
    Read { path: PathBuf, message: String },

    #[error("failed to write to stdout: {0}")]
    Stdout(String),

    /// No scratch space could be made.
    #[error("failed to create scratch directory: {0}")]
    Scratch(String),
}

/// Errors when reading a coloring from an assignment.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ColoringError {
    /// Some vertex has no color.
    #[error("vertex {0} has no color")]
    Uncolored(usize),

    /// Some vertex has more than one color.
    #[error("vertex {vertex} has colors {first} and {second}")]
    MultipleColors {
        vertex: usize,
        first: usize,
        second: usize,
    },

    /// A variable outside the encoding of the graph.
    #[error("variable {0} is outside of the coloring encoding")]
    VariableOutOfRange(usize),

    /// An edge joins two vertices of the same color.
    #[error("edge {u}-{v} joins two vertices of color {color}")]
    Conflict { u: usize, v: usize, color: usize },
}
