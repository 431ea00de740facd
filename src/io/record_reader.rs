//! Record file reader
//!
//! Reads a record file and splits its body into the three record fields.
//! Parsing is separated from file access so the structure rules can be tested
//! on plain strings.

use crate::types::{RecordFile, SalesError, SalesRecord};
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Number of non-blank lines in a record body
pub const RECORD_LINES: usize = 3;

/// Read and structurally check one record file
///
/// The file handle is closed before this returns, on success and on error.
///
/// # Errors
///
/// - `Io` if the file cannot be opened or read (including non-UTF-8 content)
/// - `InvalidRecordStructure` if the body does not have exactly three non-blank lines
pub fn read_record(file: &RecordFile) -> Result<SalesRecord, SalesError> {
    let reader = BufReader::new(File::open(&file.path)?);
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    parse_record_lines(&file.name, lines.iter().map(String::as_str))
}

/// Build a SalesRecord from the lines of a record body
///
/// Lines are trimmed and blank lines are ignored; exactly three must remain.
pub fn parse_record_lines<'a, I>(file_name: &str, lines: I) -> Result<SalesRecord, SalesError>
where
    I: IntoIterator<Item = &'a str>,
{
    let fields: Vec<&str> = lines
        .into_iter()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    match fields.as_slice() {
        [branch_code, commodity_code, amount] => Ok(SalesRecord {
            branch_code: branch_code.to_string(),
            commodity_code: commodity_code.to_string(),
            amount: amount.to_string(),
        }),
        _ => Err(SalesError::invalid_record_structure(file_name, fields.len())),
    }
}
