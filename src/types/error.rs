//! Error types for the sales aggregator
//!
//! Every failure aborts the run. The `Display` output of each variant is the
//! fixed message shown to the user; the variant fields carry the diagnostic
//! context that goes to the log.
//!
//! # Error Categories
//!
//! - **Invocation Errors**: wrong argument count, unusable input directory
//! - **Definition Errors**: missing or malformed definition files
//! - **Record Errors**: malformed record files, unknown codes, bad amounts, gaps in the sequence
//! - **Arithmetic Errors**: totals exceeding 10 digits
//! - **I/O Errors**: anything else the file system reports

use super::category::Category;
use thiserror::Error;

/// Message shared by every failure without a dedicated one
pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Main error type for the sales aggregator
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SalesError {
    /// The command line did not name exactly one input directory
    #[error("{}", UNEXPECTED_ERROR)]
    BadInvocation {
        /// What the argument parser reported
        reason: String,
    },

    /// The input path does not exist or is not a directory
    #[error("{}", UNEXPECTED_ERROR)]
    InvalidInputDirectory { path: String },

    /// A definition file is absent from the input directory
    #[error("The {category} definition file does not exist")]
    MissingDefinitionFile { category: Category },

    /// A definition line has the wrong field count, a bad code or an empty name
    #[error("The {category} definition file has an invalid format")]
    InvalidDefinitionFormat {
        category: Category,
        /// 1-based line number of the offending line
        line: u64,
    },

    /// A record file does not have exactly three non-blank lines
    #[error("{file} has an invalid format")]
    InvalidRecordStructure {
        file: String,
        /// Number of non-blank lines found
        lines: usize,
    },

    /// A record file references a code missing from the definitions
    #[error("{file} has an invalid {category} code")]
    InvalidCode {
        file: String,
        category: Category,
        code: String,
    },

    /// The amount line is not a plain non-negative integer
    ///
    /// Reported with the same message as a structural error.
    #[error("{file} has an invalid format")]
    InvalidAmount { file: String, amount: String },

    /// Record file sequence numbers are not contiguous
    #[error("Record files are not sequential")]
    NonSequentialFiles { previous: String, next: String },

    /// An accumulated total reached 10 digits
    #[error("Total amount exceeds 10 digits")]
    TotalOverflow {
        file: String,
        category: Category,
        code: String,
    },

    /// Any other I/O or decoding failure
    #[error("{}", UNEXPECTED_ERROR)]
    Io {
        /// Description of the underlying failure
        message: String,
    },
}

// Conversion from io::Error to SalesError
impl From<std::io::Error> for SalesError {
    fn from(error: std::io::Error) -> Self {
        SalesError::Io {
            message: error.to_string(),
        }
    }
}

// Conversion from csv::Error to SalesError
impl From<csv::Error> for SalesError {
    fn from(error: csv::Error) -> Self {
        let message = match error.position() {
            Some(pos) => format!("line {}: {}", pos.line(), error),
            None => error.to_string(),
        };
        SalesError::Io { message }
    }
}

// Helper functions for creating common errors

impl SalesError {
    /// Create a BadInvocation error
    pub fn bad_invocation(reason: impl Into<String>) -> Self {
        SalesError::BadInvocation {
            reason: reason.into(),
        }
    }

    /// Create an InvalidInputDirectory error
    pub fn invalid_input_directory(path: &std::path::Path) -> Self {
        SalesError::InvalidInputDirectory {
            path: path.display().to_string(),
        }
    }

    /// Create a MissingDefinitionFile error
    pub fn missing_definition_file(category: Category) -> Self {
        SalesError::MissingDefinitionFile { category }
    }

    /// Create an InvalidDefinitionFormat error
    pub fn invalid_definition_format(category: Category, line: u64) -> Self {
        SalesError::InvalidDefinitionFormat { category, line }
    }

    /// Create an InvalidRecordStructure error
    pub fn invalid_record_structure(file: &str, lines: usize) -> Self {
        SalesError::InvalidRecordStructure {
            file: file.to_string(),
            lines,
        }
    }

    /// Create an InvalidCode error
    pub fn invalid_code(file: &str, category: Category, code: &str) -> Self {
        SalesError::InvalidCode {
            file: file.to_string(),
            category,
            code: code.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(file: &str, amount: &str) -> Self {
        SalesError::InvalidAmount {
            file: file.to_string(),
            amount: amount.to_string(),
        }
    }

    /// Create a NonSequentialFiles error
    pub fn non_sequential_files(previous: &str, next: &str) -> Self {
        SalesError::NonSequentialFiles {
            previous: previous.to_string(),
            next: next.to_string(),
        }
    }

    /// Create a TotalOverflow error
    pub fn total_overflow(file: &str, category: Category, code: &str) -> Self {
        SalesError::TotalOverflow {
            file: file.to_string(),
            category,
            code: code.to_string(),
        }
    }
}
