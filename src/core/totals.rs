//! Totals management module
//!
//! This module provides the `TotalsTable` struct which holds the running sales
//! total of every defined code in one category.
//!
//! The TotalsTable is responsible for:
//! - Starting every defined code at zero
//! - Answering whether a code is defined
//! - Accumulating amounts while keeping every total within 10 digits

use crate::types::{Amount, Category, SalesError, MAX_TOTAL};
use std::collections::HashMap;

/// Running totals for every defined code of one category
#[derive(Debug, Clone, PartialEq)]
pub struct TotalsTable {
    category: Category,
    /// Map of codes to accumulated totals
    totals: HashMap<String, Amount>,
}

impl TotalsTable {
    /// Create an empty TotalsTable
    pub fn new(category: Category) -> Self {
        TotalsTable {
            category,
            totals: HashMap::new(),
        }
    }

    /// Register a code with a zero total
    ///
    /// Registering a code twice resets it to zero, which only happens while
    /// definitions are loaded and before any amount has been added.
    pub fn register(&mut self, code: &str) {
        self.totals.insert(code.to_string(), 0);
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Check whether a code was registered
    pub fn contains(&self, code: &str) -> bool {
        self.totals.contains_key(code)
    }

    /// Current total of a code, `None` if the code is unknown
    pub fn get(&self, code: &str) -> Option<Amount> {
        self.totals.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Add an amount to a code's total
    ///
    /// Uses checked arithmetic, then verifies the new total still fits in 10
    /// digits. The stored total is only updated when both checks pass.
    ///
    /// # Arguments
    ///
    /// * `file` - Name of the record file the amount comes from (for errors)
    /// * `code` - The code to accumulate into
    /// * `amount` - The amount to add
    ///
    /// # Returns
    ///
    /// * `Ok(Amount)` - The new total
    /// * `Err(SalesError)` - If the code is unknown or the total would exceed 10 digits
    pub fn accumulate(
        &mut self,
        file: &str,
        code: &str,
        amount: Amount,
    ) -> Result<Amount, SalesError> {
        let category = self.category;
        let total = self
            .totals
            .get_mut(code)
            .ok_or_else(|| SalesError::invalid_code(file, category, code))?;

        let new_total = total
            .checked_add(amount)
            .filter(|sum| *sum <= MAX_TOTAL)
            .ok_or_else(|| SalesError::total_overflow(file, category, code))?;

        *total = new_total;
        Ok(new_total)
    }
}
