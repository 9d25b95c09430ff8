//! End-to-end parsing tests against realistic validator output.

use bids_model::field_catalog;
use bids_validate::{ValidateError, parse_validator_output};

const SAMPLE_OUTPUT: &str = r#"{
    "issues": {
        "issues": [
            {
                "code": "TSV_COLUMN_MISSING",
                "severity": "error",
                "location": "/participants.tsv",
                "affects": ["/participants.tsv"],
                "rule": "rules.tabular_data.modality_agnostic.Participants"
            },
            {
                "code": "README_FILE_SMALL",
                "severity": "warning",
                "location": "/README",
                "affects": ["/README"],
                "rule": "rules.files.common.core"
            },
            {
                "code": "SUGGEST_BIDS_VERSION",
                "severity": "info",
                "location": "/dataset_description.json",
                "affects": [],
                "rule": "rules.dataset_metadata"
            }
        ]
    },
    "summary": {
        "subjects": ["sub-01"],
        "totalFiles": 12
    }
}"#;

#[test]
fn parses_and_filters_sample_output() {
    let table = parse_validator_output(SAMPLE_OUTPUT).unwrap();

    assert_eq!(table.len(), 2);
    assert_eq!(table.error_count(), 1);
    assert_eq!(table.warning_count(), 1);
    assert_eq!(table.rows[0].code, "TSV_COLUMN_MISSING");
    assert_eq!(table.rows[0].affects, "/participants.tsv");
    assert_eq!(table.rows[1].severity, "warning");
}

#[test]
fn table_columns_resolve_in_field_catalog() {
    let table = parse_validator_output(SAMPLE_OUTPUT).unwrap();
    assert!(!table.is_empty());

    let catalog = field_catalog();
    for column in ["location", "code", "severity", "rule"] {
        let entry = catalog.get(column).expect("described column");
        assert!(!entry.description.is_empty());
    }
    // `subCode` is catalog-only; no table column corresponds to it.
    assert!(catalog.contains_key("subCode"));
}

#[test]
fn truncated_output_is_malformed_not_empty() {
    let truncated = &SAMPLE_OUTPUT[..SAMPLE_OUTPUT.len() / 2];
    let err = parse_validator_output(truncated).unwrap_err();
    assert!(matches!(err, ValidateError::MalformedReport { .. }));
}
