use std::path::PathBuf;

use bids_model::IssueTable;

#[derive(Debug)]
pub struct ValidationOutcome {
    pub table: IssueTable,
    /// Number of subjects validated; `None` for a whole-dataset run.
    pub subjects: Option<usize>,
    pub issues_tsv: Option<PathBuf>,
    pub data_dictionary: Option<PathBuf>,
}

impl ValidationOutcome {
    pub fn has_errors(&self) -> bool {
        self.table.has_errors()
    }
}
