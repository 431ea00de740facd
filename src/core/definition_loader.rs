//! Definition loading
//!
//! Locates a category's definition file inside the input directory, parses it
//! and builds the zeroed totals table the aggregator will fill.

use crate::core::totals::TotalsTable;
use crate::io::definition_reader::read_definitions;
use crate::types::{Category, DefinitionTable, SalesError};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Definitions of one category together with their initial totals
#[derive(Debug, Clone)]
pub struct LoadedDefinitions {
    pub definitions: DefinitionTable,
    pub totals: TotalsTable,
}

/// Load the definition file of `category` from `dir`
///
/// # Errors
///
/// - `MissingDefinitionFile` if the file does not exist
/// - `InvalidDefinitionFormat` if any line breaks the format rules
/// - `Io` for any other failure while opening or reading
pub fn load_definitions(dir: &Path, category: Category) -> Result<LoadedDefinitions, SalesError> {
    let path = dir.join(category.definition_file_name());

    if !path.exists() {
        return Err(SalesError::missing_definition_file(category));
    }

    let file = File::open(&path)?;
    let definitions = read_definitions(BufReader::new(file), category)?;

    let mut totals = TotalsTable::new(category);
    for code in definitions.codes() {
        totals.register(code);
    }

    tracing::info!(
        %category,
        path = %path.display(),
        codes = definitions.len(),
        "loaded definitions"
    );

    Ok(LoadedDefinitions {
        definitions,
        totals,
    })
}
