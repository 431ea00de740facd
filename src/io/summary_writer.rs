//! Summary output
//!
//! Serializes one category's totals as `code,name,total` lines, one per
//! defined code in definition file order. No header and no trailing summary
//! line; every line ends with `\n`.

use crate::core::totals::TotalsTable;
use crate::types::{DefinitionTable, SalesError};
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a summary to any writer
///
/// # Arguments
///
/// * `definitions` - Codes and names in output order
/// * `totals` - Accumulated totals for the same category
/// * `output` - Destination writer
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(SalesError::Io)` if a write error occurred
pub fn write_summary(
    definitions: &DefinitionTable,
    totals: &TotalsTable,
    output: &mut dyn Write,
) -> Result<(), SalesError> {
    debug_assert_eq!(definitions.category(), totals.category());

    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .quote_style(QuoteStyle::Never)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(output);

    for entry in definitions.entries() {
        let total = totals.get(&entry.code).unwrap_or_default();
        writer.write_record([
            entry.code.as_str(),
            entry.name.as_str(),
            total.to_string().as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write a summary file, replacing any existing file at `path`
pub fn write_summary_file(
    path: &Path,
    definitions: &DefinitionTable,
    totals: &TotalsTable,
) -> Result<(), SalesError> {
    let mut output = BufWriter::new(File::create(path)?);
    write_summary(definitions, totals, &mut output)?;
    output.flush()?;

    tracing::info!(
        category = %definitions.category(),
        path = %path.display(),
        lines = definitions.len(),
        "summary written"
    );
    Ok(())
}
