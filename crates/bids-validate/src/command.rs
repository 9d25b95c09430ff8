//! Invocation argument construction for the external validator.

use std::path::Path;

/// Name of the external validator executable, resolved via `PATH`.
pub const VALIDATOR_PROGRAM: &str = "bids-validator";

/// Build the argument vector for one validator run.
///
/// The schema-based validator has no option to ignore subject consistency;
/// the only supported toggle here is skipping NIfTI header checks.
pub fn build_validator_call(dataset: &Path, ignore_nifti_headers: bool) -> Vec<String> {
    let mut call = vec![
        VALIDATOR_PROGRAM.to_string(),
        dataset.display().to_string(),
        "--verbose".to_string(),
        "--json".to_string(),
    ];

    if ignore_nifti_headers {
        call.push("--ignoreNiftiHeaders".to_string());
    }

    call
}
