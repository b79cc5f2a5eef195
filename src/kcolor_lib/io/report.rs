//! Rendering the result of a search.
//!
//! As text, a found k is written as `k = K` followed by the model lines of the solver, and exhaustion as `UNSAT for all k up to K`.
//! As JSON, the whole [SearchReport] is written, together with a summary of the graph and any coloring.

use serde::Serialize;

use crate::{
    io::dimacs::GraphInput,
    procedures::search::{SearchOutcome, SearchReport},
    structures::coloring::Coloring,
    types::err::ErrorKind,
};

pub fn render_text(report: &SearchReport, coloring: Option<&Coloring>) -> String {
    let mut lines = Vec::default();

    match &report.outcome {
        SearchOutcome::Found { k, assignment } => {
            lines.push(format!("k = {k}"));
            lines.extend(assignment.lines().iter().cloned());
            if let Some(coloring) = coloring {
                lines.extend(
                    coloring
                        .iter()
                        .map(|(vertex, color)| format!("c vertex {vertex} color {color}")),
                );
            }
        }

        SearchOutcome::Exhausted { upper } => lines.push(format!("UNSAT for all k up to {upper}")),
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

#[derive(Serialize)]
#[serde(rename_all = "kebab-case")]
struct JsonReport<'r> {
    graph: String,
    vertices: usize,
    edges: usize,
    #[serde(flatten)]
    report: &'r SearchReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    coloring: Option<&'r Coloring>,
}

pub fn render_json(
    graph: &GraphInput,
    report: &SearchReport,
    coloring: Option<&Coloring>,
) -> Result<String, ErrorKind> {
    let json = JsonReport {
        graph: graph.stem(),
        vertices: graph.graph().vertex_count(),
        edges: graph.graph().edge_count(),
        report,
        coloring,
    };
    let mut text = serde_json::to_string_pretty(&json)?;
    text.push('\n');
    Ok(text)
}
