//! Definition types
//!
//! A definition file lists the valid codes of one [`Category`] together with
//! their display names. The table keeps the file order because summaries are
//! written in that order.

use super::category::Category;
use serde::Deserialize;
use std::collections::HashMap;

/// Code identifying a branch or a commodity
pub type Code = String;

/// One `code,name` line of a definition file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DefinitionEntry {
    /// The code, already checked against the category pattern
    pub code: Code,

    /// Display name (free text without commas)
    pub name: String,
}

/// Definition entries of one category in file order
#[derive(Debug, Clone, PartialEq)]
pub struct DefinitionTable {
    category: Category,
    entries: Vec<DefinitionEntry>,
    /// Position of each code in `entries`
    index: HashMap<Code, usize>,
}

impl DefinitionTable {
    /// Create an empty table for a category
    pub fn new(category: Category) -> Self {
        DefinitionTable {
            category,
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Insert an entry, preserving first-seen order
    ///
    /// A code that is already present keeps its position and takes the new name.
    /// Returns `true` when the code was new.
    pub fn insert(&mut self, entry: DefinitionEntry) -> bool {
        match self.index.get(&entry.code) {
            Some(&position) => {
                self.entries[position].name = entry.name;
                false
            }
            None => {
                self.index.insert(entry.code.clone(), self.entries.len());
                self.entries.push(entry);
                true
            }
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Look up the display name of a code
    pub fn name(&self, code: &str) -> Option<&str> {
        self.index
            .get(code)
            .map(|&position| self.entries[position].name.as_str())
    }

    /// Entries in definition file order
    pub fn entries(&self) -> &[DefinitionEntry] {
        &self.entries
    }

    /// Codes in definition file order
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.code.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, name: &str) -> DefinitionEntry {
        DefinitionEntry {
            code: code.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn test_insert_preserves_file_order() {
        let mut table = DefinitionTable::new(Category::Branch);
        table.insert(entry("003", "Nagoya"));
        table.insert(entry("001", "Tokyo"));
        table.insert(entry("002", "Osaka"));

        let codes: Vec<_> = table.codes().collect();
        assert_eq!(codes, vec!["003", "001", "002"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn test_duplicate_code_keeps_position_and_takes_last_name() {
        let mut table = DefinitionTable::new(Category::Branch);
        assert!(table.insert(entry("001", "Tokyo")));
        assert!(table.insert(entry("002", "Osaka")));
        assert!(!table.insert(entry("001", "Shinjuku")));

        assert_eq!(table.len(), 2);
        assert_eq!(table.entries()[0], entry("001", "Shinjuku"));
        assert_eq!(table.name("001"), Some("Shinjuku"));
    }

    #[test]
    fn test_lookup_unknown_code() {
        let table = DefinitionTable::new(Category::Commodity);
        assert!(table.is_empty());
        assert_eq!(table.name("SFT00001"), None);
        assert_eq!(table.category(), Category::Commodity);
    }
}
