//! Core business logic module
//!
//! This module contains the aggregation components:
//! - `definition_loader` - Definition file loading and totals initialization
//! - `record_selector` - Record file discovery, ordering and sequence checks
//! - `aggregator` - Record validation and accumulation
//! - `totals` - Per-code running totals with the 10-digit limit

pub mod aggregator;
pub mod definition_loader;
pub mod record_selector;
pub mod totals;

pub use aggregator::RecordAggregator;
pub use definition_loader::{load_definitions, LoadedDefinitions};
pub use record_selector::{select_record_files, verify_sequence};
pub use totals::TotalsTable;
