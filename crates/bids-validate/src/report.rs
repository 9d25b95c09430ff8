//! Validator report flattening.
//!
//! The schema-based validator nests the actual findings two levels deep
//! (`issues` -> `issues`) and its record shape is not under our control, so
//! every field is read through an explicit default: a missing or wrong-typed
//! field degrades to an empty value instead of failing the whole report. The
//! one hard failure is stdout that is not JSON at all.

use serde_json::Value;
use tracing::debug;

use bids_model::{IssueTable, SEVERITY_ERROR, SEVERITY_WARNING, ValidationIssue};

use crate::error::{Result, ValidateError};

/// One raw validator finding, extracted leniently from its JSON record.
///
/// Each field carries a declared default (`""` for strings, empty list for
/// `affects`); extraction never fails. This is the single place where the
/// lenient-default policy lives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawIssue {
    pub code: String,
    pub severity: String,
    pub location: String,
    pub affects: Vec<String>,
    pub rule: String,
}

impl RawIssue {
    /// Extract a raw issue from an arbitrary JSON value, field by field.
    pub fn from_value(value: &Value) -> Self {
        Self {
            code: string_field(value, "code"),
            severity: string_field(value, "severity"),
            location: string_field(value, "location"),
            affects: string_list_field(value, "affects"),
            rule: string_field(value, "rule"),
        }
    }

    fn is_actionable(&self) -> bool {
        self.severity == SEVERITY_ERROR || self.severity == SEVERITY_WARNING
    }

    /// Normalize into the fixed five-field record, joining `affects` into a
    /// single comma-separated string.
    pub fn normalize(self) -> ValidationIssue {
        ValidationIssue {
            code: self.code,
            severity: self.severity,
            location: self.location,
            affects: self.affects.join(", "),
            rule: self.rule,
        }
    }
}

fn string_field(value: &Value, key: &str) -> String {
    value
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn string_list_field(value: &Value, key: &str) -> Vec<String> {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Decode validator stdout and flatten it into an issue table.
///
/// # Errors
///
/// Returns [`ValidateError::MalformedReport`] when `output` is not valid
/// JSON. Structural deviations inside valid JSON are handled by defaulting,
/// never by failing.
pub fn parse_validator_output(output: &str) -> Result<IssueTable> {
    let report: Value =
        serde_json::from_str(output).map_err(|source| ValidateError::MalformedReport { source })?;
    Ok(flatten_report(&report))
}

/// Flatten an already-decoded report into a table of errors and warnings,
/// preserving the report's issue order. Issues with any other severity are
/// dropped.
pub fn flatten_report(report: &Value) -> IssueTable {
    let issues = report
        .get("issues")
        .and_then(|group| group.get("issues"))
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default();

    let rows: Vec<ValidationIssue> = issues
        .iter()
        .map(RawIssue::from_value)
        .filter(RawIssue::is_actionable)
        .map(RawIssue::normalize)
        .collect();

    debug!(
        total = issues.len(),
        retained = rows.len(),
        "flattened validator report"
    );
    IssueTable::new(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let issue = RawIssue::from_value(&json!({})).normalize();
        assert_eq!(issue, ValidationIssue::default());
    }

    #[test]
    fn test_affects_joined_with_comma_space() {
        let issue = RawIssue::from_value(&json!({"affects": ["a", "b", "c"]})).normalize();
        assert_eq!(issue.affects, "a, b, c");
    }

    #[test]
    fn test_wrong_typed_fields_default_independently() {
        let issue = RawIssue::from_value(&json!({
            "code": 42,
            "severity": "error",
            "affects": "not-a-list",
            "rule": null,
        }))
        .normalize();
        assert_eq!(issue.code, "");
        assert_eq!(issue.severity, "error");
        assert_eq!(issue.affects, "");
        assert_eq!(issue.rule, "");
    }

    #[test]
    fn test_flatten_filters_severities_in_order() {
        let report = json!({
            "issues": {
                "issues": [
                    {"code": "A", "severity": "error"},
                    {"code": "B", "severity": "warning"},
                    {"code": "C", "severity": "info"},
                    {"code": "D", "severity": "error"},
                ]
            }
        });

        let table = flatten_report(&report);
        let codes: Vec<_> = table.rows.iter().map(|row| row.code.as_str()).collect();
        assert_eq!(codes, ["A", "B", "D"]);
    }

    #[test]
    fn test_minimal_report_yields_empty_table() {
        assert!(flatten_report(&json!({})).is_empty());
        assert!(flatten_report(&json!({"issues": {}})).is_empty());
        assert!(flatten_report(&json!({"issues": "oops"})).is_empty());
    }

    #[test]
    fn test_malformed_json_is_a_hard_error() {
        let err = parse_validator_output("{\"issues\": {").unwrap_err();
        assert!(matches!(err, ValidateError::MalformedReport { .. }));
    }

    #[test]
    fn test_valid_output_parses() {
        let output = r#"{
            "issues": {
                "issues": [
                    {
                        "code": "NIFTI_HEADER_UNREADABLE",
                        "severity": "error",
                        "location": "/sub-01/anat/sub-01_T1w.nii.gz",
                        "affects": ["/sub-01/anat/sub-01_T1w.nii.gz"],
                        "rule": "rules.checks.nifti"
                    }
                ]
            },
            "summary": {"ignored": true}
        }"#;

        let table = parse_validator_output(output).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.rows[0].code, "NIFTI_HEADER_UNREADABLE");
        assert!(table.has_errors());
    }
}
