//! Encoding a graph and some k as a formula.
//!
//! Any [Encoder] may be used by a [Driver](crate::procedures::search::Driver).
//! The [ExternalEncoder] runs a `color2sat`-like tool, invoked as `TOOL <graph|-> <k>`, and reads the formula from its stdout.

use std::{
    path::{Path, PathBuf},
    process::Command,
};

use serde::Serialize;

use crate::{
    config::defaults,
    io::{
        artifacts::write_artifact,
        dimacs::{GraphInput, GraphOrigin},
    },
    misc::log::targets,
    procedures::process,
    types::err::{self, ErrorKind},
};

/// A formula, as given by an encoder.
///
/// The contents are not examined, only passed on to a solver.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Formula {
    dimacs: Vec<u8>,
}

impl Formula {
    pub fn as_bytes(&self) -> &[u8] {
        &self.dimacs
    }

    pub fn len(&self) -> usize {
        self.dimacs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dimacs.is_empty()
    }

    pub fn write_to(&self, path: &Path) -> Result<(), err::ArtifactError> {
        write_artifact(path, &self.dimacs)
    }
}

impl From<Vec<u8>> for Formula {
    fn from(dimacs: Vec<u8>) -> Self {
        Formula { dimacs }
    }
}

impl From<&str> for Formula {
    fn from(dimacs: &str) -> Self {
        Formula {
            dimacs: dimacs.as_bytes().to_vec(),
        }
    }
}

pub trait Encoder {
    /// A formula satisfiable exactly when `graph` is `k`-colorable.
    ///
    /// Encoder failure is an error, and in particular an [EncoderFailure](err::ToolError::EncoderFailure) when an external encoder exits without success.
    fn encode(&mut self, graph: &GraphInput, k: usize) -> Result<Formula, ErrorKind>;
}

impl<E: Encoder + ?Sized> Encoder for Box<E> {
    fn encode(&mut self, graph: &GraphInput, k: usize) -> Result<Formula, ErrorKind> {
        (**self).encode(graph, k)
    }
}

/// How a graph is given to an external encoder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GraphTransport {
    /// As a path, if the graph was read from a file, and otherwise on stdin.
    Path,

    /// Always on stdin, with the graph argument `-`.
    #[default]
    Stdin,
}

pub struct ExternalEncoder {
    path: PathBuf,
    transport: GraphTransport,
}

impl ExternalEncoder {
    pub fn new(path: PathBuf, transport: GraphTransport) -> Self {
        ExternalEncoder { path, transport }
    }
}

impl Encoder for ExternalEncoder {
    fn encode(&mut self, graph: &GraphInput, k: usize) -> Result<Formula, ErrorKind> {
        let mut command = Command::new(&self.path);

        let input = match (self.transport, graph.origin()) {
            (GraphTransport::Path, GraphOrigin::File(path)) => {
                command.arg(path);
                None
            }
            _ => {
                command.arg(defaults::STDIN_MARKER);
                Some(graph.text().as_bytes())
            }
        };
        command.arg(k.to_string());

        let output = process::run(&self.path, command, input, None)?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            log::error!(target: targets::ENCODER, "{} failed for k={k}", self.path.display());
            return Err(ErrorKind::from(err::ToolError::EncoderFailure {
                k,
                code: output.status.code(),
                stderr,
            }));
        }

        Ok(Formula::from(output.stdout))
    }
}
