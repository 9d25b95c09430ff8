//! Export of validation results: a tab-delimited issue table plus its JSON
//! data-dictionary side-car, following the BIDS side-car convention.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use bids_model::{FieldDescription, ISSUE_COLUMNS, IssueTable};

/// Write the issue table as a TSV file with the fixed column header
/// `code, severity, location, affects, rule`.
pub fn write_issues_tsv(path: &Path, table: &IssueTable) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("create issue table {}", path.display()))?;
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(file);

    writer
        .write_record(ISSUE_COLUMNS)
        .with_context(|| format!("write issue header to {}", path.display()))?;
    for row in &table.rows {
        writer
            .serialize(row)
            .with_context(|| format!("write issue row to {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("flush issue table {}", path.display()))?;
    Ok(())
}

/// Write a field catalog as a pretty-printed JSON data dictionary, one
/// `{"Description": ...}` object per column name.
pub fn write_data_dictionary(
    path: &Path,
    catalog: &BTreeMap<&'static str, FieldDescription>,
) -> Result<()> {
    let json = serde_json::to_string_pretty(catalog).context("serialize field catalog")?;

    let mut file = File::create(path)
        .with_context(|| format!("create data dictionary {}", path.display()))?;
    file.write_all(json.as_bytes())
        .and_then(|()| file.write_all(b"\n"))
        .with_context(|| format!("write data dictionary {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bids_model::{ValidationIssue, field_catalog};
    use tempfile::TempDir;

    fn sample_table() -> IssueTable {
        IssueTable::new(vec![
            ValidationIssue {
                code: "TSV_COLUMN_MISSING".to_string(),
                severity: "error".to_string(),
                location: "/participants.tsv".to_string(),
                affects: "/participants.tsv".to_string(),
                rule: "rules.tabular_data".to_string(),
            },
            ValidationIssue {
                code: "README_FILE_SMALL".to_string(),
                severity: "warning".to_string(),
                location: "/README".to_string(),
                affects: String::new(),
                rule: String::new(),
            },
        ])
    }

    #[test]
    fn test_tsv_has_fixed_header_and_one_row_per_issue() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("validation.tsv");

        write_issues_tsv(&path, &sample_table()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "code\tseverity\tlocation\taffects\trule");
        assert!(lines[1].starts_with("TSV_COLUMN_MISSING\terror\t"));
        assert!(lines[2].starts_with("README_FILE_SMALL\twarning\t"));
    }

    #[test]
    fn test_empty_table_writes_header_only() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("validation.tsv");

        write_issues_tsv(&path, &IssueTable::default()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.trim_end(), "code\tseverity\tlocation\taffects\trule");
    }

    #[test]
    fn test_data_dictionary_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("validation.json");

        write_data_dictionary(&path, &field_catalog()).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        for column in ["location", "code", "subCode", "severity", "rule"] {
            let description = value[column]["Description"].as_str().unwrap();
            assert!(!description.is_empty());
        }
    }
}
