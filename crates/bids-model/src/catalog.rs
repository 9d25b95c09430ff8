//! Data dictionary for the issue table columns.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Side-car description of one issue table column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescription {
    #[serde(rename = "Description")]
    pub description: String,
}

impl FieldDescription {
    fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
        }
    }
}

/// Fixed column-name to description mapping, suitable for export as a
/// data-dictionary side-car next to an exported issue table.
///
/// The `subCode` entry describes a column the normalizer does not currently
/// surface; it is kept because the upstream validator schema carries it.
pub fn field_catalog() -> BTreeMap<&'static str, FieldDescription> {
    BTreeMap::from([
        (
            "location",
            FieldDescription::new("File with the validation issue."),
        ),
        (
            "code",
            FieldDescription::new("Code of the validation issue."),
        ),
        (
            "subCode",
            FieldDescription::new("Subcode providing additional issue details."),
        ),
        (
            "severity",
            FieldDescription::new("Severity of the issue (e.g., warning, error)."),
        ),
        (
            "rule",
            FieldDescription::new("Validation rule that triggered the issue."),
        ),
    ])
}
