//! Placement of the formula and solution files for each k.
//!
//! Either files are kept, under directories named by an [ArtifactPlan::Persistent] plan, or files are placed in a scratch directory which is removed once the attempt at k is done.
//! In both cases each k has its own [IterationArtifacts], and the scratch directory (if any) is removed when the artifacts are dropped, on every exit path.

use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::TempDir;

use crate::{misc::log::targets, types::err::ArtifactError};

/// The file name of the formula for the graph with stem `stem` and `k` colors.
pub fn formula_name(stem: &str, k: usize) -> String {
    format!("{stem}_{k}k.cnf")
}

/// The file name of the solution for the graph with stem `stem` and `k` colors.
pub fn solution_name(stem: &str, k: usize) -> String {
    format!("sol_{stem}_{k}k.out")
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "plan")]
pub enum ArtifactPlan {
    /// Files are removed after each attempt.
    Scratch,

    /// Files are kept, and the directories are created if absent.
    Persistent {
        formula_dir: PathBuf,
        solution_dir: PathBuf,
    },
}

impl ArtifactPlan {
    pub fn is_persistent(&self) -> bool {
        matches!(self, Self::Persistent { .. })
    }

    /// The formula and solution paths kept for `k`, if the plan keeps any.
    pub fn kept_paths(&self, stem: &str, k: usize) -> Option<(PathBuf, PathBuf)> {
        match self {
            Self::Scratch => None,
            Self::Persistent {
                formula_dir,
                solution_dir,
            } => Some((
                formula_dir.join(formula_name(stem, k)),
                solution_dir.join(solution_name(stem, k)),
            )),
        }
    }

    /// Paths for the attempt at `k` on the graph with stem `stem`.
    pub fn for_k(&self, stem: &str, k: usize) -> Result<IterationArtifacts, ArtifactError> {
        match self {
            Self::Scratch => {
                let dir = tempfile::Builder::new()
                    .prefix("kcolor.")
                    .tempdir()
                    .map_err(|e| ArtifactError::Scratch(e.to_string()))?;

                let artifacts = IterationArtifacts {
                    formula: dir.path().join(formula_name(stem, k)),
                    solution: dir.path().join(solution_name(stem, k)),
                    scratch: Some(dir),
                };
                log::trace!(target: targets::ARTIFACTS, "Scratch artifacts for k={k} at {:?}", artifacts.formula.parent());
                Ok(artifacts)
            }

            Self::Persistent {
                formula_dir,
                solution_dir,
            } => {
                create_dir(formula_dir)?;
                create_dir(solution_dir)?;

                Ok(IterationArtifacts {
                    formula: formula_dir.join(formula_name(stem, k)),
                    solution: solution_dir.join(solution_name(stem, k)),
                    scratch: None,
                })
            }
        }
    }
}

fn create_dir(path: &Path) -> Result<(), ArtifactError> {
    std::fs::create_dir_all(path).map_err(|e| ArtifactError::CreateDir {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// The formula and solution paths of a single attempt.
#[derive(Debug)]
pub struct IterationArtifacts {
    formula: PathBuf,
    solution: PathBuf,

    /// Held only to remove the directory on drop.
    scratch: Option<TempDir>,
}

impl IterationArtifacts {
    pub fn formula(&self) -> &Path {
        &self.formula
    }

    pub fn solution(&self) -> &Path {
        &self.solution
    }

    pub fn is_persistent(&self) -> bool {
        self.scratch.is_none()
    }
}

/// Reads a file written by a tool.
pub fn read_artifact(path: &Path) -> Result<String, ArtifactError> {
    std::fs::read_to_string(path).map_err(|e| ArtifactError::Read {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Writes a file for a tool.
pub fn write_artifact(path: &Path, contents: &[u8]) -> Result<(), ArtifactError> {
    std::fs::write(path, contents).map_err(|e| ArtifactError::Write {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
