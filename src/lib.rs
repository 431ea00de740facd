//! Sales Aggregator Library
//! # Overview
//!
//! This library aggregates per-branch and per-commodity sales totals from a
//! directory of record files and writes one summary file per category.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Category, DefinitionTable, RecordFile, SalesError)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::definition_loader`] - Definition file loading
//!   - [`core::record_selector`] - Record file discovery and sequence checks
//!   - [`core::aggregator`] - Record validation and accumulation
//!   - [`core::totals`] - Running totals with the 10-digit limit
//! - [`io`] - Definition parsing, record reading and summary output
//! - [`pipeline`] - Orchestration of a complete run
//! - [`logging`] - Tracing subscriber setup
//!
//! # Input Directory
//!
//! - `branch.lst`: `code,name` lines, code is 3 digits
//! - `commodity.lst`: `code,name` lines, code is 8 alphanumeric characters
//! - `NNNNNNNN.rcd`: one sale per file, three lines (branch code, commodity code, amount)
//!
//! # Output
//!
//! - `branch.out` and `commodity.out`: `code,name,total` lines in definition order
//!
//! Any validation failure aborts the run before a summary is written.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod logging;
pub mod pipeline;
pub mod types;

pub use core::{RecordAggregator, TotalsTable};
pub use pipeline::{run, RunConfig, RunOutcome};
pub use types::{Category, DefinitionEntry, DefinitionTable, RecordFile, SalesError, SalesRecord};
