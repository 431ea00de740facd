//! Sales Aggregator CLI
//!
//! Aggregates branch and commodity sales totals from the record files of one
//! input directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- /path/to/sales
//! cargo run -- -vv /path/to/sales
//! cargo run -- --write-empty-summaries /path/to/sales
//! ```
//!
//! On success `branch.out` and `commodity.out` are written into the input
//! directory. On failure a single message is printed to stderr and nothing is
//! written.
//!
//! # Exit Codes
//!
//! - 0: Success (including a directory without record files)
//! - 1: Any reported failure

use sales_aggregator::{cli, logging, pipeline};
use std::process;

fn main() {
    let args = match cli::parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    logging::init_logging(args.verbose);

    if let Err(e) = pipeline::run(&args.to_run_config()) {
        tracing::debug!(error = ?e, "aggregation failed");
        eprintln!("{}", e);
        process::exit(1);
    }
}
