//! Aggregation pipeline
//!
//! Runs one complete aggregation over an input directory:
//! 1. Load the branch definitions, then the commodity definitions
//! 2. Select the record files and verify their sequence
//! 3. Accumulate every record file into the totals
//! 4. Write the branch summary, then the commodity summary
//!
//! Every validation happens before the first summary is written, so a failed
//! run leaves no output behind. The only exception is an I/O failure while
//! writing the commodity summary, which leaves the branch summary in place.
//!
//! # Examples
//!
//! ```no_run
//! use sales_aggregator::pipeline::{run, RunConfig};
//!
//! let config = RunConfig::new("/data/sales");
//! match run(&config) {
//!     Ok(outcome) => println!("{:?}", outcome),
//!     Err(e) => eprintln!("{}", e),
//! }
//! ```

use crate::core::{
    load_definitions, select_record_files, verify_sequence, LoadedDefinitions, RecordAggregator,
};
use crate::io::write_summary_file;
use crate::types::{Category, SalesError};
use std::path::PathBuf;

/// Settings for one aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Directory holding definition files and record files; summaries are written here
    pub input_dir: PathBuf,

    /// Reject record files whose sequence numbers have gaps
    pub verify_sequence: bool,

    /// Write all-zero summaries when the directory holds no record files
    pub write_empty_summaries: bool,
}

impl RunConfig {
    /// Default settings for a directory: sequence check on, no empty summaries
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        RunConfig {
            input_dir: input_dir.into(),
            verify_sequence: true,
            write_empty_summaries: false,
        }
    }
}

/// How a successful run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Records were aggregated and both summaries written
    Completed {
        /// Number of record files processed
        records: usize,
        /// Paths of the written summaries, branch first
        summaries: Vec<PathBuf>,
    },

    /// The directory held no record files; nothing was written
    NoRecordFiles,
}

/// Run the full pipeline
///
/// # Errors
///
/// Returns the first [`SalesError`] encountered. No summary is written for a
/// run that fails before the output stage.
pub fn run(config: &RunConfig) -> Result<RunOutcome, SalesError> {
    let dir = config.input_dir.as_path();
    if !dir.is_dir() {
        return Err(SalesError::invalid_input_directory(dir));
    }

    let branches = load_definitions(dir, Category::Branch)?;
    let commodities = load_definitions(dir, Category::Commodity)?;

    let files = select_record_files(dir)?;
    if config.verify_sequence {
        verify_sequence(&files)?;
    }

    if files.is_empty() && !config.write_empty_summaries {
        tracing::info!(dir = %dir.display(), "no record files, nothing to write");
        return Ok(RunOutcome::NoRecordFiles);
    }

    let LoadedDefinitions {
        definitions: branch_definitions,
        totals: branch_totals,
    } = branches;
    let LoadedDefinitions {
        definitions: commodity_definitions,
        totals: commodity_totals,
    } = commodities;

    let mut aggregator = RecordAggregator::new(branch_totals, commodity_totals);
    aggregator.process_all(&files)?;
    let records = aggregator.processed();

    tracing::info!(
        records,
        branches = aggregator.branch_totals().len(),
        commodities = aggregator.commodity_totals().len(),
        "record files aggregated"
    );

    let (branch_totals, commodity_totals) = aggregator.into_totals();

    let mut summaries = Vec::with_capacity(Category::ALL.len());
    for (definitions, totals) in [
        (&branch_definitions, &branch_totals),
        (&commodity_definitions, &commodity_totals),
    ] {
        let path = dir.join(definitions.category().summary_file_name());
        write_summary_file(&path, definitions, totals)?;
        summaries.push(path);
    }

    Ok(RunOutcome::Completed { records, summaries })
}
