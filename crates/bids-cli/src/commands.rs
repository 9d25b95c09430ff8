//! Command implementations.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use comfy_table::Table;
use tempfile::TempDir;
use tracing::{debug, info, info_span, warn};

use bids_ingest::partition_subjects;
use bids_model::{IssueTable, field_catalog};
use bids_report::{write_data_dictionary, write_issues_tsv};
use bids_validate::{build_validator_call, parse_validator_output, run_validator};

use crate::cli::ValidateArgs;
use crate::summary::apply_table_style;
use crate::types::ValidationOutcome;

/// Print the issue table column descriptions.
pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Column", "Description"]);
    apply_table_style(&mut table);
    for (column, entry) in field_catalog() {
        table.add_row(vec![column.to_string(), entry.description]);
    }
    println!("{table}");
    Ok(())
}

/// Validate a dataset, either in one pass or subject by subject.
pub fn run_validate(args: &ValidateArgs) -> Result<ValidationOutcome> {
    let span = info_span!("validate", dataset = %args.bids_dir.display());
    let _guard = span.enter();

    let (table, subjects) = if args.sequential {
        let (table, count) = validate_sequential(args)?;
        (table, Some(count))
    } else {
        (validate_dataset(&args.bids_dir, args)?, None)
    };

    info!(
        issues = table.len(),
        errors = table.error_count(),
        warnings = table.warning_count(),
        "validation finished"
    );

    let mut outcome = ValidationOutcome {
        table,
        subjects,
        issues_tsv: None,
        data_dictionary: None,
    };

    if let Some(prefix) = &args.output_prefix {
        let (tsv, dictionary) = write_outputs(prefix, &outcome.table)?;
        outcome.issues_tsv = Some(tsv);
        outcome.data_dictionary = Some(dictionary);
    }

    Ok(outcome)
}

/// Run the validator once over `dataset` and flatten its report.
fn validate_dataset(dataset: &Path, args: &ValidateArgs) -> Result<IssueTable> {
    let call = build_validator_call(dataset, args.ignore_nifti_headers);
    let output = run_validator(&call)?;

    if !output.stderr.is_empty() {
        debug!(stderr = %String::from_utf8_lossy(&output.stderr), "validator stderr");
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let table = parse_validator_output(&stdout)
        .with_context(|| format!("parse validator report for {}", dataset.display()))?;
    Ok(table)
}

/// Validate one subject at a time, concatenating the per-subject tables in
/// subject order.
fn validate_sequential(args: &ValidateArgs) -> Result<(IssueTable, usize)> {
    let manifest = partition_subjects(&args.bids_dir)?;
    let subject_count = manifest.len();
    info!(subjects = subject_count, "validating sequentially");

    let mut combined = IssueTable::default();
    for (subject, files) in &manifest {
        let span = info_span!("subject", label = %subject);
        let _guard = span.enter();

        let staged = stage_subject(&args.bids_dir, files)
            .with_context(|| format!("stage files for {subject}"))?;
        let table = validate_dataset(staged.path(), args)
            .with_context(|| format!("validate {subject}"))?;

        if table.has_errors() {
            warn!(errors = table.error_count(), "subject has errors");
        }
        combined.extend(table);
    }

    Ok((combined, subject_count))
}

/// Copy one subject's manifest into a temporary single-subject dataset,
/// preserving each file's path relative to the original root so root-level
/// side-cars land where the validator expects them.
fn stage_subject(root: &Path, files: &[PathBuf]) -> Result<TempDir> {
    let staged = TempDir::new().context("create staging directory")?;

    for file in files {
        let relative = file
            .strip_prefix(root)
            .with_context(|| format!("{} is outside the dataset root", file.display()))?;
        let destination = staged.path().join(relative);
        if let Some(parent) = destination.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        std::fs::copy(file, &destination)
            .with_context(|| format!("copy {}", file.display()))?;
    }

    Ok(staged)
}

fn write_outputs(prefix: &Path, table: &IssueTable) -> Result<(PathBuf, PathBuf)> {
    let tsv = suffixed(prefix, "_validation.tsv");
    let dictionary = suffixed(prefix, "_validation.json");

    write_issues_tsv(&tsv, table)?;
    write_data_dictionary(&dictionary, &field_catalog())?;
    info!(tsv = %tsv.display(), dictionary = %dictionary.display(), "wrote outputs");

    Ok((tsv, dictionary))
}

fn suffixed(prefix: &Path, suffix: &str) -> PathBuf {
    let mut name = prefix.as_os_str().to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}
