//! Record file selection
//!
//! Finds the record files of a run: regular files named `NNNNNNNN.rcd`,
//! ordered by their numeric prefix. Anything else in the directory (definition
//! files, previous summaries, stray files, sub-directories) is ignored.

use crate::types::{RecordFile, SalesError};
use std::fs;
use std::path::Path;

/// List the record files of `dir` ordered by sequence number
///
/// # Errors
///
/// Returns `Io` if the directory or one of its entries cannot be read.
pub fn select_record_files(dir: &Path) -> Result<Vec<RecordFile>, SalesError> {
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        let Some(record_file) = RecordFile::from_path(&path) else {
            continue;
        };

        if !path.is_file() {
            tracing::debug!(path = %path.display(), "skipping non-file record name");
            continue;
        }

        files.push(record_file);
    }

    files.sort_by_key(|file| file.sequence);

    tracing::info!(count = files.len(), "selected record files");
    Ok(files)
}

/// Check that sequence numbers increase by exactly one
///
/// Expects `files` in the order returned by [`select_record_files`]. Fails on
/// the first gap without reading any file content.
pub fn verify_sequence(files: &[RecordFile]) -> Result<(), SalesError> {
    for pair in files.windows(2) {
        let (previous, next) = (&pair[0], &pair[1]);
        if previous.sequence.checked_add(1) != Some(next.sequence) {
            return Err(SalesError::non_sequential_files(&previous.name, &next.name));
        }
    }
    Ok(())
}
