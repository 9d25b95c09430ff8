use thiserror::Error;

#[derive(Debug, Error)]
pub enum ValidateError {
    /// The validator's stdout was not valid JSON. Callers must treat the run
    /// as unparseable rather than as an empty table.
    #[error("validator report is not valid JSON: {source}")]
    MalformedReport {
        #[source]
        source: serde_json::Error,
    },

    /// The external validator executable could not be started.
    #[error("failed to launch {program}: {source}")]
    ValidatorLaunch {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ValidateError>;
