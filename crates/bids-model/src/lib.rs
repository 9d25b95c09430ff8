pub mod catalog;
pub mod issue;

pub use catalog::{FieldDescription, field_catalog};
pub use issue::{ISSUE_COLUMNS, IssueTable, SEVERITY_ERROR, SEVERITY_WARNING, ValidationIssue};

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(severity: &str) -> ValidationIssue {
        ValidationIssue {
            code: "TEST_CODE".to_string(),
            severity: severity.to_string(),
            location: "/dataset_description.json".to_string(),
            affects: String::new(),
            rule: "rules.test".to_string(),
        }
    }

    #[test]
    fn issue_table_counts() {
        let table = IssueTable::new(vec![issue("error"), issue("warning"), issue("error")]);
        assert_eq!(table.len(), 3);
        assert_eq!(table.error_count(), 2);
        assert_eq!(table.warning_count(), 1);
        assert!(table.has_errors());
    }

    #[test]
    fn issue_serializes_in_column_order() {
        let json = serde_json::to_string(&issue("error")).expect("serialize issue");
        let code_pos = json.find("\"code\"").unwrap();
        let severity_pos = json.find("\"severity\"").unwrap();
        let location_pos = json.find("\"location\"").unwrap();
        let affects_pos = json.find("\"affects\"").unwrap();
        let rule_pos = json.find("\"rule\"").unwrap();
        assert!(code_pos < severity_pos);
        assert!(severity_pos < location_pos);
        assert!(location_pos < affects_pos);
        assert!(affects_pos < rule_pos);
    }

    #[test]
    fn catalog_describes_every_table_column() {
        let catalog = field_catalog();
        // The table's `affects` column intentionally has no catalog entry,
        // and the catalog's `subCode` entry has no table column.
        for column in ["location", "code", "severity", "rule"] {
            let entry = catalog.get(column).expect("catalog entry");
            assert!(!entry.description.is_empty());
        }
        assert!(catalog.contains_key("subCode"));
    }

    #[test]
    fn catalog_serializes_with_description_key() {
        let catalog = field_catalog();
        let json = serde_json::to_string(&catalog).expect("serialize catalog");
        assert!(json.contains("\"subCode\":{\"Description\":"));
    }
}
