//! Blocking subprocess wrapper around the external validator.

use std::process::{Command, Output, Stdio};

use tracing::debug;

use crate::error::{Result, ValidateError};

/// Run the validator with the given argument vector, capturing stdout and
/// stderr. The validator's exit code is passed through untouched; a nonzero
/// exit is expected whenever the dataset has errors, so it is the caller's
/// job to interpret it alongside the parsed report.
///
/// # Errors
///
/// Returns [`ValidateError::ValidatorLaunch`] when the executable cannot be
/// spawned (typically: not installed or not on `PATH`).
pub fn run_validator(call: &[String]) -> Result<Output> {
    let Some((program, args)) = call.split_first() else {
        return Err(ValidateError::ValidatorLaunch {
            program: String::new(),
            source: std::io::Error::other("empty validator call"),
        });
    };

    debug!(command = %call.join(" "), "running external validator");

    Command::new(program)
        .args(args)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|source| ValidateError::ValidatorLaunch {
            program: program.clone(),
            source,
        })
}
