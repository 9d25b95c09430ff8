//! Per-subject path partitioning.
//!
//! A BIDS dataset keeps one directory per subject (`sub-*`) at the top level,
//! plus dataset-wide side-car files directly under the root. Validating one
//! subject at a time still needs those root-level files, so every subject's
//! manifest ends with the shared root files appended after its own.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{IngestError, Result};

/// Directory-name prefix that marks a subject directory.
pub const SUBJECT_PREFIX: &str = "sub-";

/// Mapping from subject label (e.g. "sub-01") to the files belonging to that
/// subject, root-level files included.
pub type SubjectManifest = BTreeMap<String, Vec<PathBuf>>;

/// Partition a dataset root into one file manifest per subject.
///
/// Each manifest holds every regular file beneath the subject directory (any
/// depth), followed by the files living directly under the dataset root. File
/// order within those two groups follows directory enumeration and is not
/// otherwise guaranteed.
///
/// A root with zero `sub-*` child directories is a hard failure: a BIDS
/// dataset is defined as containing at least one subject. A nonexistent root
/// is not checked eagerly; it simply yields no subjects.
///
/// # Errors
///
/// Returns [`IngestError::NoSubjectsFound`] when no subject directories exist
/// under `root`.
pub fn partition_subjects(root: &Path) -> Result<SubjectManifest> {
    let root_files = list_root_files(root);
    let subject_dirs = list_subject_dirs(root);

    if subject_dirs.is_empty() {
        return Err(IngestError::NoSubjectsFound {
            path: root.to_path_buf(),
        });
    }

    let mut manifest = SubjectManifest::new();
    for dir in subject_dirs {
        // Subject labels must be valid UTF-8; anything else is not a
        // subject directory and must not produce a manifest key.
        let Some(label) = dir.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        let label = label.to_string();

        let mut files = Vec::new();
        collect_files(&dir, &mut files);
        files.extend(root_files.iter().cloned());

        debug!(subject = %label, files = files.len(), "partitioned subject");
        manifest.insert(label, files);
    }

    Ok(manifest)
}

/// List regular files that are direct children of the dataset root.
///
/// An unreadable or missing root degrades to an empty list; the missing-root
/// case surfaces later as `NoSubjectsFound`.
fn list_root_files(root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect()
}

/// List immediate child directories matching the subject-naming pattern.
fn list_subject_dirs(root: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(root) else {
        return Vec::new();
    };

    entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir() && is_subject_dir(path))
        .collect()
}

fn is_subject_dir(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| name.starts_with(SUBJECT_PREFIX))
        .unwrap_or(false)
}

/// Recursively gather every regular file beneath `dir`.
///
/// Unreadable entries are skipped; the traversal is read-only.
fn collect_files(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_files(&path, out);
        } else if path.is_file() {
            out.push(path);
        }
    }
}
