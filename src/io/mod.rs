//! I/O module
//!
//! Handles reading input files and writing summaries.
//!
//! # Components
//!
//! - `definition_reader` - Definition file parsing (`code,name` lines)
//! - `record_reader` - Record file reading and structure check
//! - `summary_writer` - Summary output (`code,name,total` lines)

pub mod definition_reader;
pub mod record_reader;
pub mod summary_writer;

pub use definition_reader::read_definitions;
pub use record_reader::{parse_record_lines, read_record};
pub use summary_writer::{write_summary, write_summary_file};
