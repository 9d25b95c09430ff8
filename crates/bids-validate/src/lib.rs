pub mod command;
pub mod error;
pub mod report;
pub mod runner;

pub use command::{VALIDATOR_PROGRAM, build_validator_call};
pub use error::{Result, ValidateError};
pub use report::{RawIssue, flatten_report, parse_validator_output};
pub use runner::run_validator;
