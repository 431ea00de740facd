use crate::pipeline::RunConfig;
use clap::Parser;
use std::path::PathBuf;

/// Aggregate branch and commodity sales totals from record files
#[derive(Parser, Debug)]
#[command(name = "sales-aggregator", version)]
#[command(about = "Aggregate branch and commodity sales totals from record files", long_about = None)]
pub struct CliArgs {
    /// Directory holding branch.lst, commodity.lst and the record files
    #[arg(value_name = "INPUT_DIR", help = "Path to the input directory")]
    pub input_dir: PathBuf,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Accept record files whose sequence numbers have gaps
    #[arg(long = "skip-sequence-check")]
    pub skip_sequence_check: bool,

    /// Write all-zero summaries when no record files are present
    #[arg(long = "write-empty-summaries")]
    pub write_empty_summaries: bool,
}

impl CliArgs {
    /// Create a RunConfig from CLI arguments
    pub fn to_run_config(&self) -> RunConfig {
        RunConfig {
            verify_sequence: !self.skip_sequence_check,
            write_empty_summaries: self.write_empty_summaries,
            ..RunConfig::new(&self.input_dir)
        }
    }
}
