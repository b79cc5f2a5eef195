//! The result of a solver on a formula.

use serde::Serialize;

use crate::config::defaults;

/// The output of a solver which found a formula to be satisfiable.
///
/// The lines of output are kept as given, and literals are read from them on request.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Assignment {
    lines: Vec<String>,
}

impl Assignment {
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Assignment {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// The (non-zero) literals of the assignment.
    ///
    /// Both `v`-prefixed lines (as written by kissat) and bare lines of literals (as written to a minisat result file) are read.
    /// Status lines such as `SAT` or `s SATISFIABLE` and comments are skipped.
    pub fn literals(&self) -> Vec<i64> {
        self.lines
            .iter()
            .map(|line| line.trim())
            .filter_map(|line| match line.strip_prefix('v') {
                Some(rest) => Some(rest),
                None if line.starts_with(|c: char| c == '-' || c.is_ascii_digit()) => Some(line),
                None => None,
            })
            .flat_map(str::split_whitespace)
            .filter_map(|token| token.parse::<i64>().ok())
            .filter(|literal| *literal != 0)
            .collect()
    }
}

/// Verdicts from a solver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "verdict")]
pub enum Verdict {
    Satisfiable(Assignment),

    Unsatisfiable,

    /// The solver was interrupted, or otherwise did not decide the formula.
    Unknown,

    /// The solver terminated with an unexpected code, or by a signal.
    Error { code: Option<i32> },
}

impl Verdict {
    pub fn status(&self) -> Status {
        match self {
            Self::Satisfiable(_) => Status::Satisfiable,
            Self::Unsatisfiable => Status::Unsatisfiable,
            Self::Unknown => Status::Unknown,
            Self::Error { code } => Status::Error { code: *code },
        }
    }
}

/// A summary of the attempt at some k, without any assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case", tag = "status")]
pub enum Status {
    Satisfiable,
    Unsatisfiable,
    Unknown,
    Error { code: Option<i32> },

    /// The encoder failed, and the failure was skipped.
    EncoderFailed { code: Option<i32> },
}

impl Status {
    /// The exit code a solver reports with, following the SAT competition conventions.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::Satisfiable => Some(defaults::SATISFIABLE_EXIT),
            Self::Unsatisfiable => Some(defaults::UNSATISFIABLE_EXIT),
            Self::Unknown => Some(defaults::UNKNOWN_EXIT),
            Self::Error { code } | Self::EncoderFailed { code } => *code,
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Satisfiable => write!(f, "SATISFIABLE"),
            Self::Unsatisfiable => write!(f, "UNSATISFIABLE"),
            Self::Unknown => write!(f, "UNKNOWN"),
            Self::Error { code: Some(code) } => write!(f, "ERROR (exit code {code})"),
            Self::Error { code: None } => write!(f, "ERROR (terminated by signal)"),
            Self::EncoderFailed { .. } => write!(f, "ENCODER FAILED"),
        }
    }
}
