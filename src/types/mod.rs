//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `category`: Branch/commodity rules (code patterns, file names)
//! - `definition`: Definition entries and the ordered definition table
//! - `record`: Record files and record bodies
//! - `error`: Error types for the sales aggregator

pub mod category;
pub mod definition;
pub mod error;
pub mod record;

pub use category::Category;
pub use definition::{Code, DefinitionEntry, DefinitionTable};
pub use error::{SalesError, UNEXPECTED_ERROR};
pub use record::{Amount, RecordFile, SalesRecord, Sequence, MAX_TOTAL};
