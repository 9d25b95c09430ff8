use serde::{Deserialize, Serialize};

/// Severity values the table retains. All other severities reported by the
/// external validator (e.g. informational notices) are dropped upstream.
pub const SEVERITY_ERROR: &str = "error";
pub const SEVERITY_WARNING: &str = "warning";

/// One normalized validator finding.
///
/// The field set and order are fixed regardless of the shape of the raw
/// report entry; downstream export relies on this contract. Serde field order
/// doubles as the export column order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationIssue {
    /// Issue code reported by the validator.
    pub code: String,
    /// Severity as reported ("error", "warning", ...).
    pub severity: String,
    /// File or location the issue points at.
    pub location: String,
    /// Affected files, joined into a single comma-separated string.
    pub affects: String,
    /// Validation rule that triggered the issue.
    pub rule: String,
}

impl ValidationIssue {
    pub fn is_error(&self) -> bool {
        self.severity == SEVERITY_ERROR
    }

    pub fn is_warning(&self) -> bool {
        self.severity == SEVERITY_WARNING
    }
}

/// Export column order for [`ValidationIssue`].
pub const ISSUE_COLUMNS: [&str; 5] = ["code", "severity", "location", "affects", "rule"];

/// Ordered set of normalized issues, one row per retained raw issue.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IssueTable {
    pub rows: Vec<ValidationIssue>,
}

impl IssueTable {
    pub fn new(rows: Vec<ValidationIssue>) -> Self {
        Self { rows }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_error()).count()
    }

    pub fn warning_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_warning()).count()
    }

    pub fn has_errors(&self) -> bool {
        self.rows.iter().any(ValidationIssue::is_error)
    }

    /// Append all rows of `other`, preserving their order.
    pub fn extend(&mut self, other: IssueTable) {
        self.rows.extend(other.rows);
    }
}
