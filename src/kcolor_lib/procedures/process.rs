//! Running an external tool to completion.

use std::{
    fs::File,
    io::Write,
    path::Path,
    process::{Command, Output, Stdio},
};

use crate::{misc::log::targets, types::err::ToolError};

/// Runs `command` for the tool at `program`, blocking until the tool exits.
///
/// - If `input` is given it is written to the stdin of the tool, otherwise stdin is closed.
/// - If `stdout` is given the stdout of the tool is written there, otherwise stdout is collected.
/// - Stderr is always collected.
///
/// A tool which cannot be started as the executable is missing or not executable is a [ToolError::NotFound].
pub(crate) fn run(
    program: &Path,
    mut command: Command,
    input: Option<&[u8]>,
    stdout: Option<File>,
) -> Result<Output, ToolError> {
    command
        .stdin(match input {
            Some(_) => Stdio::piped(),
            None => Stdio::null(),
        })
        .stdout(match stdout {
            Some(file) => Stdio::from(file),
            None => Stdio::piped(),
        })
        .stderr(Stdio::piped());

    log::info!(target: targets::SEARCH, "Running command: {command:?}");

    let mut child = command.spawn().map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound | std::io::ErrorKind::PermissionDenied => {
            ToolError::NotFound {
                path: program.to_path_buf(),
            }
        }
        _ => ToolError::Io {
            path: program.to_path_buf(),
            message: e.to_string(),
        },
    })?;

    // Input is written from a second thread, as a tool may fill its output pipes before reading all input.
    let waited = std::thread::scope(|scope| {
        if let (Some(bytes), Some(mut stdin)) = (input, child.stdin.take()) {
            scope.spawn(move || {
                // A tool may exit without reading all input, and the exit code is what matters.
                if let Err(e) = stdin.write_all(bytes) {
                    log::debug!(target: targets::SEARCH, "Input not fully written: {e}");
                }
            });
        }
        child.wait_with_output()
    });

    let output = waited.map_err(|e| ToolError::Io {
        path: program.to_path_buf(),
        message: e.to_string(),
    })?;

    log::debug!(target: targets::SEARCH,
        "{} exited with {:?}",
        program.display(),
        output.status.code()
    );

    for line in String::from_utf8_lossy(&output.stderr).lines() {
        log::trace!(target: targets::SEARCH, "{}: {line}", program.display());
    }

    Ok(output)
}
