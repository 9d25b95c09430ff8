use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("no subject directories found under {path}")]
    NoSubjectsFound { path: PathBuf },
}

pub type Result<T> = std::result::Result<T, IngestError>;
