//! Definition file reader
//!
//! Parses `code,name` lines into a [`DefinitionTable`]. Quoting is disabled so
//! quote characters are kept as part of the name, and fields are not trimmed:
//! `" 001"` is not a valid branch code.

use crate::types::{Category, DefinitionEntry, DefinitionTable, SalesError};
use csv::{ReaderBuilder, StringRecord};
use std::io::Read;

/// Number of fields on every definition line
const DEFINITION_FIELDS: usize = 2;

/// Read definition lines for a category
///
/// # Arguments
///
/// * `input` - The definition file contents
/// * `category` - Category whose code pattern applies
///
/// # Returns
///
/// * `Ok(DefinitionTable)` - Entries in file order, duplicates overwritten
/// * `Err(SalesError::InvalidDefinitionFormat)` - A line with the wrong field
///   count, a code not matching the pattern, or an empty name
/// * `Err(SalesError::Io)` - The input could not be read or is not UTF-8
pub fn read_definitions<R: Read>(
    input: R,
    category: Category,
) -> Result<DefinitionTable, SalesError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(input);

    let mut table = DefinitionTable::new(category);
    let mut record = StringRecord::new();

    while reader.read_record(&mut record)? {
        let line = record.position().map_or(0, |pos| pos.line());

        if is_blank(&record) {
            continue;
        }

        let entry = convert_definition_record(&record, category)
            .ok_or_else(|| SalesError::invalid_definition_format(category, line))?;

        if !table.insert(entry) {
            tracing::debug!(%category, line, "duplicate definition code overwritten");
        }
    }

    Ok(table)
}

/// Validate one definition line, `None` if it breaks the format rules
fn convert_definition_record(record: &StringRecord, category: Category) -> Option<DefinitionEntry> {
    if record.len() != DEFINITION_FIELDS {
        return None;
    }

    let entry: DefinitionEntry = record.deserialize(None).ok()?;
    if !category.is_valid_code(&entry.code) || entry.name.is_empty() {
        return None;
    }

    Some(entry)
}

fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record[0].is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn codes_and_names(table: &DefinitionTable) -> Vec<(String, String)> {
        table
            .entries()
            .iter()
            .map(|entry| (entry.code.clone(), entry.name.clone()))
            .collect()
    }

    #[test]
    fn test_reads_branch_definitions_in_order() {
        let input = "002,Osaka\n001,Tokyo\n003,Nagoya\n";
        let table = read_definitions(input.as_bytes(), Category::Branch).unwrap();

        assert_eq!(
            codes_and_names(&table),
            vec![
                ("002".to_string(), "Osaka".to_string()),
                ("001".to_string(), "Tokyo".to_string()),
                ("003".to_string(), "Nagoya".to_string()),
            ]
        );
    }

    #[rstest]
    #[case::lf("SFT00001,Software\nHRD00001,Hardware\n")]
    #[case::crlf("SFT00001,Software\r\nHRD00001,Hardware\r\n")]
    #[case::no_trailing_newline("SFT00001,Software\nHRD00001,Hardware")]
    #[case::blank_lines("SFT00001,Software\n\nHRD00001,Hardware\n\n")]
    fn test_reads_commodity_definitions(#[case] input: &str) {
        let table = read_definitions(input.as_bytes(), Category::Commodity).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.name("SFT00001"), Some("Software"));
        assert_eq!(table.name("HRD00001"), Some("Hardware"));
    }

    #[test]
    fn test_empty_file_yields_empty_table() {
        let table = read_definitions("".as_bytes(), Category::Branch).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_names_keep_spaces_and_quotes() {
        let input = "001,Tokyo \"Main\" Store\n";
        let table = read_definitions(input.as_bytes(), Category::Branch).unwrap();
        assert_eq!(table.name("001"), Some("Tokyo \"Main\" Store"));
    }

    #[test]
    fn test_duplicate_code_overwrites_name() {
        let input = "001,Tokyo\n002,Osaka\n001,Shinjuku\n";
        let table = read_definitions(input.as_bytes(), Category::Branch).unwrap();

        assert_eq!(
            codes_and_names(&table),
            vec![
                ("001".to_string(), "Shinjuku".to_string()),
                ("002".to_string(), "Osaka".to_string()),
            ]
        );
    }

    #[rstest]
    #[case::one_field(Category::Branch, "001,Tokyo\n002\n", 2)]
    #[case::three_fields(Category::Branch, "001,Tokyo,Japan\n", 1)]
    #[case::trailing_comma(Category::Branch, "001,Tokyo,\n", 1)]
    #[case::empty_name(Category::Branch, "001,\n", 1)]
    #[case::short_branch_code(Category::Branch, "001,Tokyo\n02,Osaka\n", 2)]
    #[case::alpha_branch_code(Category::Branch, "A01,Tokyo\n", 1)]
    #[case::padded_branch_code(Category::Branch, " 001,Tokyo\n", 1)]
    #[case::whitespace_line(Category::Branch, "001,Tokyo\n   \n", 2)]
    #[case::short_commodity_code(Category::Commodity, "SFT0001,Software\n", 1)]
    #[case::symbol_commodity_code(Category::Commodity, "SFT_0001,Software\n", 1)]
    fn test_invalid_format(
        #[case] category: Category,
        #[case] input: &str,
        #[case] expected_line: u64,
    ) {
        let result = read_definitions(input.as_bytes(), category);
        assert_eq!(
            result,
            Err(SalesError::invalid_definition_format(category, expected_line))
        );
    }

    #[test]
    fn test_invalid_utf8_is_unexpected_error() {
        let input: &[u8] = b"001,\xff\xfe\n";
        let result = read_definitions(input, Category::Branch);
        assert!(matches!(result, Err(SalesError::Io { .. })));
    }
}
