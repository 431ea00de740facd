//! Record aggregation
//!
//! This module provides the RecordAggregator that validates record files and
//! accumulates their amounts into the branch and commodity totals.
//!
//! Each file goes through the same steps, and the first failing step aborts the
//! whole run:
//! 1. Read the file and check it has exactly three non-blank lines
//! 2. Resolve the branch code, then the commodity code
//! 3. Parse the amount (`^[0-9]+$`)
//! 4. Add the amount to the branch total, then to the commodity total,
//!    checking each new total stays within 10 digits

use crate::core::totals::TotalsTable;
use crate::io::record_reader::read_record;
use crate::types::{Amount, Category, RecordFile, SalesError, SalesRecord};

/// Accumulates record files into branch and commodity totals
///
/// Owns both totals tables for the duration of the run; they are handed back
/// with [`RecordAggregator::into_totals`] once every file has been processed.
pub struct RecordAggregator {
    branch_totals: TotalsTable,
    commodity_totals: TotalsTable,
    processed: usize,
}

impl RecordAggregator {
    /// Create a RecordAggregator over freshly loaded totals
    pub fn new(branch_totals: TotalsTable, commodity_totals: TotalsTable) -> Self {
        RecordAggregator {
            branch_totals,
            commodity_totals,
            processed: 0,
        }
    }

    /// Process every file in order, stopping at the first failure
    ///
    /// Files after a failing one are never opened.
    pub fn process_all(&mut self, files: &[RecordFile]) -> Result<(), SalesError> {
        for file in files {
            self.process_file(file)?;
        }
        Ok(())
    }

    /// Read, validate and accumulate a single record file
    pub fn process_file(&mut self, file: &RecordFile) -> Result<(), SalesError> {
        let record = read_record(file)?;
        self.apply(&file.name, &record)?;

        tracing::debug!(
            file = %file.name,
            branch = %record.branch_code,
            commodity = %record.commodity_code,
            amount = %record.amount,
            "record accumulated"
        );
        Ok(())
    }

    /// Validate and accumulate a record already checked for structure
    ///
    /// # Errors
    ///
    /// - `InvalidCode` if the branch or commodity code is not defined
    /// - `InvalidAmount` if the amount is not a plain non-negative integer
    /// - `TotalOverflow` if a resulting total would exceed 10 digits
    pub fn apply(&mut self, file_name: &str, record: &SalesRecord) -> Result<(), SalesError> {
        // Resolve both codes before touching any total
        self.resolve(file_name, Category::Branch, &record.branch_code)?;
        self.resolve(file_name, Category::Commodity, &record.commodity_code)?;

        let amount = parse_amount(&record.amount).map_err(|error| match error {
            AmountError::Malformed => SalesError::invalid_amount(file_name, &record.amount),
            AmountError::TooLarge => {
                SalesError::total_overflow(file_name, Category::Branch, &record.branch_code)
            }
        })?;

        self.branch_totals
            .accumulate(file_name, &record.branch_code, amount)?;
        self.commodity_totals
            .accumulate(file_name, &record.commodity_code, amount)?;

        self.processed += 1;
        Ok(())
    }

    fn resolve(&self, file_name: &str, category: Category, code: &str) -> Result<(), SalesError> {
        let totals = match category {
            Category::Branch => &self.branch_totals,
            Category::Commodity => &self.commodity_totals,
        };

        if totals.contains(code) {
            Ok(())
        } else {
            Err(SalesError::invalid_code(file_name, category, code))
        }
    }

    /// Number of records accumulated so far
    pub fn processed(&self) -> usize {
        self.processed
    }

    pub fn branch_totals(&self) -> &TotalsTable {
        &self.branch_totals
    }

    pub fn commodity_totals(&self) -> &TotalsTable {
        &self.commodity_totals
    }

    /// Hand back the branch and commodity totals
    pub fn into_totals(self) -> (TotalsTable, TotalsTable) {
        (self.branch_totals, self.commodity_totals)
    }
}

#[derive(Debug, PartialEq)]
enum AmountError {
    /// Not `^[0-9]+$`
    Malformed,
    /// All digits, but beyond what any total can hold
    TooLarge,
}

fn parse_amount(text: &str) -> Result<Amount, AmountError> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AmountError::Malformed);
    }
    text.parse().map_err(|_| AmountError::TooLarge)
}
