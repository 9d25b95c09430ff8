pub mod error;
pub mod partition;

pub use error::{IngestError, Result};
pub use partition::{SUBJECT_PREFIX, SubjectManifest, partition_subjects};
