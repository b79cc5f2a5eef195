//! Reading DIMACS `.col` graph descriptions.
//!
//! The format is line based:
//! - Lines starting with `c` are comments.
//! - A single problem line `p edge N M` declares N vertices and M edges.
//! - Each line `e U V` declares an edge between the (1-indexed) vertices U and V.
//!
//! ```text
//! c A triangle
//! p edge 3 3
//! e 1 2
//! e 2 3
//! e 1 3
//! ```
//!
//! The declared edge count is advisory, and a mismatch with the edges read is only noted in the log.

use std::{
    io::Read,
    path::{Path, PathBuf},
};

use crate::{
    config::defaults,
    misc::log::targets,
    structures::graph::Graph,
    types::err::{self},
};

/// Parses a graph from a DIMACS description.
pub fn parse_graph(text: &str) -> Result<Graph, err::GraphError> {
    let mut graph: Option<Graph> = None;

    for (index, line) in text.lines().enumerate() {
        let line_number = index + 1;
        let line = line.trim();

        let mut parts = line.split_whitespace();
        match parts.next() {
            None => continue,

            Some(first) if first.starts_with('c') => continue,

            Some("p") => {
                if graph.is_some() {
                    return Err(err::GraphError::DuplicateProblem(line_number));
                }
                let (vertices, edges) = match parse_problem(parts) {
                    Some(counts) if counts.0 <= Graph::MAX_VERTICES => counts,
                    _ => return Err(err::GraphError::ProblemSpecification(line_number)),
                };
                log::trace!(target: targets::GRAPH, "Problem line: {vertices} vertices, {edges} edges");
                graph = Some(Graph::new(vertices, edges));
            }

            Some("e") => {
                let Some(graph) = graph.as_mut() else {
                    return Err(err::GraphError::MisplacedEdge(line_number));
                };
                let (u, v) = match parse_pair(parts) {
                    Some(pair) => pair,
                    None => return Err(err::GraphError::Edge(line_number)),
                };
                if !graph.add_edge(u, v) {
                    let vertex = if graph.contains(u) { v } else { u };
                    return Err(err::GraphError::VertexOutOfRange {
                        line: line_number,
                        vertex,
                        vertices: graph.vertex_count(),
                    });
                }
            }

            Some(_) => return Err(err::GraphError::Line(line_number)),
        }
    }

    let graph = graph.ok_or(err::GraphError::MissingHeader)?;

    if graph.edge_count() != graph.declared_edge_count() {
        log::warn!(target: targets::GRAPH,
            "Read {} edges, expected {}. Continuing with the edges read.",
            graph.edge_count(),
            graph.declared_edge_count()
        );
    }

    Ok(graph)
}

/// The counts of `edge N M`, following a `p`.
///
/// Anything after the counts is ignored.
fn parse_problem<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<(usize, usize)> {
    if parts.next()? != "edge" {
        return None;
    }
    let vertices = parts.next()?.parse().ok()?;
    let edges = parts.next()?.parse().ok()?;
    Some((vertices, edges))
}

/// Exactly two unsigned integers.
fn parse_pair<'a>(mut parts: impl Iterator<Item = &'a str>) -> Option<(usize, usize)> {
    let first = parts.next()?.parse().ok()?;
    let second = parts.next()?.parse().ok()?;
    match parts.next() {
        Some(_) => None,
        None => Some((first, second)),
    }
}

/// Where a graph was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GraphOrigin {
    File(PathBuf),
    Stdin,
}

impl std::fmt::Display for GraphOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::File(path) => write!(f, "'{}'", path.display()),
            Self::Stdin => write!(f, "stdin"),
        }
    }
}

/// A graph, together with the text it was parsed from.
///
/// The text is kept so the graph can be handed to an encoder unchanged.
#[derive(Clone, Debug)]
pub struct GraphInput {
    origin: GraphOrigin,
    text: String,
    graph: Graph,
}

impl GraphInput {
    /// Reads a graph from the path `source`, or from stdin if `source` is [STDIN_MARKER](defaults::STDIN_MARKER).
    pub fn load(source: &str) -> Result<Self, err::GraphError> {
        match source {
            defaults::STDIN_MARKER => {
                let mut text = String::default();
                if let Err(e) = std::io::stdin().read_to_string(&mut text) {
                    return Err(err::GraphError::Read {
                        origin: GraphOrigin::Stdin.to_string(),
                        message: e.to_string(),
                    });
                }
                Self::from_text(GraphOrigin::Stdin, text)
            }

            path => Self::load_path(Path::new(path)),
        }
    }

    pub fn load_path(path: &Path) -> Result<Self, err::GraphError> {
        let origin = GraphOrigin::File(path.to_path_buf());
        match std::fs::read_to_string(path) {
            Ok(text) => Self::from_text(origin, text),
            Err(e) => Err(err::GraphError::Read {
                origin: origin.to_string(),
                message: e.to_string(),
            }),
        }
    }

    pub fn from_text(origin: GraphOrigin, text: String) -> Result<Self, err::GraphError> {
        let graph = parse_graph(&text)?;
        log::info!(target: targets::GRAPH,
            "Read {} vertices and {} edges from {origin}",
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(GraphInput {
            origin,
            text,
            graph,
        })
    }

    pub fn origin(&self) -> &GraphOrigin {
        &self.origin
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// The stem used to name artifacts: the file name without extension, or [STDIN_STEM](defaults::STDIN_STEM).
    pub fn stem(&self) -> String {
        match &self.origin {
            GraphOrigin::File(path) => path
                .file_stem()
                .map(|stem| stem.to_string_lossy().into_owned())
                .unwrap_or_else(|| defaults::STDIN_STEM.to_string()),
            GraphOrigin::Stdin => defaults::STDIN_STEM.to_string(),
        }
    }
}
