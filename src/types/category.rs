//! Aggregation categories
//!
//! Every rule that differs between branch and commodity aggregation lives here:
//! the code pattern, the definition file name and the summary file name. Both the
//! definition loader and the record aggregator go through [`Category`] so the two
//! never disagree on what a valid code looks like.

use std::fmt;

/// Aggregation context with its own code pattern and output file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Sales branches, identified by exactly 3 ASCII digits
    Branch,

    /// Commodities, identified by exactly 8 ASCII alphanumeric characters
    Commodity,
}

impl Category {
    /// All categories in processing order
    pub const ALL: [Category; 2] = [Category::Branch, Category::Commodity];

    /// Lowercase label used in user-facing messages
    pub fn label(self) -> &'static str {
        match self {
            Category::Branch => "branch",
            Category::Commodity => "commodity",
        }
    }

    /// Name of the definition file inside the input directory
    pub fn definition_file_name(self) -> &'static str {
        match self {
            Category::Branch => "branch.lst",
            Category::Commodity => "commodity.lst",
        }
    }

    /// Name of the summary file written into the input directory
    pub fn summary_file_name(self) -> &'static str {
        match self {
            Category::Branch => "branch.out",
            Category::Commodity => "commodity.out",
        }
    }

    /// Check a code against this category's fixed pattern
    ///
    /// - Branch: `^[0-9]{3}$`
    /// - Commodity: `^[a-zA-Z0-9]{8}$`
    pub fn is_valid_code(self, code: &str) -> bool {
        match self {
            Category::Branch => code.len() == 3 && code.bytes().all(|b| b.is_ascii_digit()),
            Category::Commodity => {
                code.len() == 8 && code.bytes().all(|b| b.is_ascii_alphanumeric())
            }
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::three_digits("001", true)]
    #[case::two_digits("01", false)]
    #[case::four_digits("0001", false)]
    #[case::letters("ABC", false)]
    #[case::fullwidth_digits("００１", false)]
    #[case::padded(" 01", false)]
    #[case::empty("", false)]
    fn test_branch_code_pattern(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(Category::Branch.is_valid_code(code), expected);
    }

    #[rstest]
    #[case::mixed("SFT00001", true)]
    #[case::lowercase("sft00001", true)]
    #[case::digits_only("12345678", true)]
    #[case::seven_chars("SFT0001", false)]
    #[case::nine_chars("SFT000001", false)]
    #[case::punctuation("SFT-0001", false)]
    #[case::non_ascii("SFT0000é", false)]
    fn test_commodity_code_pattern(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(Category::Commodity.is_valid_code(code), expected);
    }

    #[rstest]
    #[case(Category::Branch, "branch", "branch.lst", "branch.out")]
    #[case(Category::Commodity, "commodity", "commodity.lst", "commodity.out")]
    fn test_file_names(
        #[case] category: Category,
        #[case] label: &str,
        #[case] definition: &str,
        #[case] summary: &str,
    ) {
        assert_eq!(category.to_string(), label);
        assert_eq!(category.definition_file_name(), definition);
        assert_eq!(category.summary_file_name(), summary);
    }
}
