//! Benchmark suite for the aggregation pipeline
//!
//! Measures a full run (definition loading, record selection, aggregation and
//! summary output) over generated input directories using the divan
//! benchmarking framework.
//!
//! # Running Benchmarks
//!
//! ```bash
//! cargo bench
//! ```

use sales_aggregator::pipeline::{run, RunConfig};
use std::fmt::Write as _;
use std::fs;
use tempfile::TempDir;

const BRANCHES: usize = 50;
const COMMODITIES: usize = 200;

fn main() {
    divan::main();
}

/// Build an input directory with `records` sequential record files
fn build_input(records: usize) -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");

    let mut branches = String::new();
    for i in 0..BRANCHES {
        writeln!(branches, "{:03},Branch {}", i, i).unwrap();
    }
    fs::write(dir.path().join("branch.lst"), branches).expect("Failed to write branch.lst");

    let mut commodities = String::new();
    for i in 0..COMMODITIES {
        writeln!(commodities, "ITEM{:04},Commodity {}", i, i).unwrap();
    }
    fs::write(dir.path().join("commodity.lst"), commodities)
        .expect("Failed to write commodity.lst");

    for i in 0..records {
        let body = format!(
            "{:03}\nITEM{:04}\n{}\n",
            i % BRANCHES,
            i % COMMODITIES,
            (i % 997) * 100
        );
        fs::write(dir.path().join(format!("{:08}.rcd", i + 1)), body)
            .expect("Failed to write record file");
    }

    dir
}

/// Full pipeline run over 10, 100 and 1,000 record files
#[divan::bench(args = [10, 100, 1000])]
fn pipeline_run(bencher: divan::Bencher, records: usize) {
    let dir = build_input(records);
    let config = RunConfig::new(dir.path());

    bencher.bench(|| run(&config).expect("Processing failed"));
}
